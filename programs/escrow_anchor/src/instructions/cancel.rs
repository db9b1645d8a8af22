use anchor_lang::prelude::*;
use anchor_spl::token::{close_account, transfer, CloseAccount, Token, TokenAccount, Transfer};

use crate::{
    authority::VaultAuthority,
    constants::ESCROW_SEED,
    errors::EscrowError,
    events::EscrowCancelled,
    state::EscrowAccount,
};

#[derive(Accounts)]
pub struct Cancel<'info> {
    /// The initializer who opened the escrow (only it can cancel)
    #[account(mut)]
    pub initializer: Signer<'info>,

    /// Initializer's Token A account recorded at initialize (receives the refund)
    #[account(mut)]
    pub initializer_deposit_token_account: Account<'info, TokenAccount>,

    /// CHECK: keyless program-derived signer, pinned by its seeds
    #[account(seeds = [ESCROW_SEED], bump)]
    pub vault_authority: UncheckedAccount<'info>,

    /// Vault holding Token A
    #[account(
        mut,
        address = VaultAuthority::vault_address(&crate::ID).0 @ EscrowError::InvalidVault,
        constraint = vault_account.owner == vault_authority.key() @ EscrowError::InvalidVault,
    )]
    pub vault_account: Account<'info, TokenAccount>,

    /// Escrow record (will be closed)
    #[account(
        mut,
        close = initializer,
        seeds = [ESCROW_SEED],
        bump,
        constraint = escrow_account.initializer_key == initializer.key() @ EscrowError::Unauthorized,
        constraint = escrow_account.initializer_deposit_token_account
            == initializer_deposit_token_account.key() @ EscrowError::DepositAccountMismatch,
    )]
    pub escrow_account: Account<'info, EscrowAccount>,

    pub token_program: Program<'info, Token>,
}

impl<'info> Cancel<'info> {
    /// Move the whole vault balance back to the initializer and close the vault
    // No mint account is passed here, so `transfer_checked` is not an option
    #[allow(deprecated)]
    pub fn refund_and_close_vault(&mut self, authority: &VaultAuthority) -> Result<()> {
        let seeds = authority.seeds();
        let signer_seeds: &[&[&[u8]]] = &[&seeds[..]];

        let cpi_accounts = Transfer {
            from: self.vault_account.to_account_info(),
            to: self.initializer_deposit_token_account.to_account_info(),
            authority: self.vault_authority.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);

        transfer(cpi_ctx, self.vault_account.amount)?;

        // Rent of the vault goes back to the initializer who paid it
        let cpi_accounts = CloseAccount {
            account: self.vault_account.to_account_info(),
            destination: self.initializer.to_account_info(),
            authority: self.vault_authority.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);

        close_account(cpi_ctx)
    }
}

/// Handler for the cancel instruction
pub fn handler(ctx: Context<Cancel>) -> Result<()> {
    let authority = VaultAuthority::from_bump(ctx.bumps.vault_authority);
    let refunded = ctx.accounts.vault_account.amount;

    ctx.accounts.refund_and_close_vault(&authority)?;

    emit!(EscrowCancelled {
        escrow: ctx.accounts.escrow_account.key(),
        initializer: ctx.accounts.initializer.key(),
        refunded,
    });
    msg!("Escrow cancelled: {} refunded", refunded);

    Ok(())
}
