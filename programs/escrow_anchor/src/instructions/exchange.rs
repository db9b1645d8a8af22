use anchor_lang::prelude::*;
use anchor_spl::token::{close_account, transfer, CloseAccount, Token, TokenAccount, Transfer};

use crate::{
    authority::VaultAuthority,
    constants::ESCROW_SEED,
    errors::EscrowError,
    events::EscrowExchanged,
    state::EscrowAccount,
};

#[derive(Accounts)]
pub struct Exchange<'info> {
    /// The taker who accepts the terms
    #[account(mut)]
    pub taker: Signer<'info>,

    /// Taker's Token B account (source of the payment)
    #[account(
        mut,
        constraint = taker_deposit_token_account.owner == taker.key() @ EscrowError::Unauthorized,
    )]
    pub taker_deposit_token_account: Box<Account<'info, TokenAccount>>,

    /// Taker's Token A account (receives the vault)
    #[account(mut)]
    pub taker_receive_token_account: Box<Account<'info, TokenAccount>>,

    /// Initializer's Token A account recorded at initialize
    #[account(mut)]
    pub initializer_deposit_token_account: Box<Account<'info, TokenAccount>>,

    /// Initializer's Token B account recorded at initialize (receives the payment)
    #[account(mut)]
    pub initializer_receive_token_account: Box<Account<'info, TokenAccount>>,

    /// CHECK: pinned to the stored initializer key; receives the rent of the vault and the record
    #[account(mut)]
    pub initializer: UncheckedAccount<'info>,

    /// CHECK: keyless program-derived signer, pinned by its seeds
    #[account(seeds = [ESCROW_SEED], bump)]
    pub vault_authority: UncheckedAccount<'info>,

    /// Vault holding Token A
    #[account(
        mut,
        address = VaultAuthority::vault_address(&crate::ID).0 @ EscrowError::InvalidVault,
        constraint = vault_account.owner == vault_authority.key() @ EscrowError::InvalidVault,
    )]
    pub vault_account: Box<Account<'info, TokenAccount>>,

    /// Escrow record (will be closed)
    #[account(
        mut,
        close = initializer,
        seeds = [ESCROW_SEED],
        bump,
        constraint = escrow_account.initializer_key == initializer.key() @ EscrowError::InitializerMismatch,
        constraint = escrow_account.initializer_deposit_token_account
            == initializer_deposit_token_account.key() @ EscrowError::DepositAccountMismatch,
        constraint = escrow_account.initializer_receive_token_account
            == initializer_receive_token_account.key() @ EscrowError::ReceiveAccountMismatch,
        constraint = taker_deposit_token_account.mint
            == initializer_receive_token_account.mint @ EscrowError::MintMismatch,
        constraint = taker_receive_token_account.mint == vault_account.mint @ EscrowError::MintMismatch,
        constraint = taker_deposit_token_account.amount
            >= escrow_account.taker_amount @ EscrowError::InsufficientFunds,
    )]
    pub escrow_account: Box<Account<'info, EscrowAccount>>,

    pub token_program: Program<'info, Token>,
}

impl<'info> Exchange<'info> {
    /// Transfer Token B from the taker to the initializer
    // No mint accounts are passed here, so `transfer_checked` is not an option
    #[allow(deprecated)]
    pub fn transfer_to_initializer(&mut self) -> Result<()> {
        let cpi_accounts = Transfer {
            from: self.taker_deposit_token_account.to_account_info(),
            to: self.initializer_receive_token_account.to_account_info(),
            authority: self.taker.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);

        transfer(cpi_ctx, self.escrow_account.taker_amount)
    }

    /// Release Token A to the taker, then close the vault
    #[allow(deprecated)]
    pub fn withdraw_and_close_vault(&mut self, authority: &VaultAuthority) -> Result<()> {
        let seeds = authority.seeds();
        let signer_seeds: &[&[&[u8]]] = &[&seeds[..]];

        let initializer_amount = self.escrow_account.initializer_amount;
        let surplus = self.vault_account.amount.saturating_sub(initializer_amount);

        let cpi_accounts = Transfer {
            from: self.vault_account.to_account_info(),
            to: self.taker_receive_token_account.to_account_info(),
            authority: self.vault_authority.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);

        transfer(cpi_ctx, initializer_amount)?;

        // Anything sent to the vault on top of the deposit belongs to the initializer
        if surplus > 0 {
            let cpi_accounts = Transfer {
                from: self.vault_account.to_account_info(),
                to: self.initializer_deposit_token_account.to_account_info(),
                authority: self.vault_authority.to_account_info(),
            };
            let cpi_program = self.token_program.to_account_info();
            let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);

            transfer(cpi_ctx, surplus)?;
        }

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

/// Handler for the exchange instruction
pub fn handler(ctx: Context<Exchange>) -> Result<()> {
    let authority = VaultAuthority::from_bump(ctx.bumps.vault_authority);

    // Taker pays first; if this leg fails the vault is never touched
    ctx.accounts.transfer_to_initializer()?;

    ctx.accounts.withdraw_and_close_vault(&authority)?;

    let escrow = &ctx.accounts.escrow_account;
    emit!(EscrowExchanged {
        escrow: escrow.key(),
        initializer: escrow.initializer_key,
        taker: ctx.accounts.taker.key(),
        initializer_amount: escrow.initializer_amount,
        taker_amount: escrow.taker_amount,
    });
    msg!(
        "Escrow exchanged: {} for {}",
        escrow.initializer_amount,
        escrow.taker_amount
    );

    Ok(())
}
