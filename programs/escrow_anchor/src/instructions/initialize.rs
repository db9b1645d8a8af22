use anchor_lang::prelude::*;
use anchor_spl::token::{transfer_checked, Mint, Token, TokenAccount, TransferChecked};

use crate::{
    constants::{ESCROW_SEED, VAULT_SEED},
    errors::EscrowError,
    events::EscrowInitialized,
    state::EscrowAccount,
};

#[derive(Accounts)]
#[instruction(initializer_amount: u64)]
pub struct Initialize<'info> {
    /// The initializer who locks Token A and pays for the new accounts
    #[account(mut)]
    pub initializer: Signer<'info>,

    /// Token A mint
    pub mint: Account<'info, Mint>,

    /// Initializer's Token A account (source of the deposit)
    #[account(
        mut,
        constraint = initializer_deposit_token_account.mint == mint.key() @ EscrowError::MintMismatch,
        constraint = initializer_deposit_token_account.owner == initializer.key() @ EscrowError::Unauthorized,
        constraint = initializer_deposit_token_account.amount >= initializer_amount @ EscrowError::InsufficientFunds,
    )]
    pub initializer_deposit_token_account: Account<'info, TokenAccount>,

    /// Initializer's Token B account (receives the taker's payment)
    pub initializer_receive_token_account: Account<'info, TokenAccount>,

    /// Escrow record; its address is also the vault authority
    #[account(
        init,
        payer = initializer,
        space = EscrowAccount::SPACE,
        seeds = [ESCROW_SEED],
        bump,
    )]
    pub escrow_account: Account<'info, EscrowAccount>,

    /// Vault for Token A, created already owned by the escrow authority
    #[account(
        init,
        payer = initializer,
        seeds = [VAULT_SEED],
        bump,
        token::mint = mint,
        token::authority = escrow_account,
    )]
    pub vault_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    /// Record the exchange terms
    pub fn init_escrow(&mut self, initializer_amount: u64, taker_amount: u64) -> Result<()> {
        self.escrow_account.set_inner(EscrowAccount {
            initializer_key: self.initializer.key(),
            initializer_deposit_token_account: self.initializer_deposit_token_account.key(),
            initializer_receive_token_account: self.initializer_receive_token_account.key(),
            initializer_amount,
            taker_amount,
        });
        Ok(())
    }

    /// Transfer Token A from the initializer to the vault
    pub fn deposit(&mut self, amount: u64) -> Result<()> {
        let cpi_accounts = TransferChecked {
            from: self.initializer_deposit_token_account.to_account_info(),
            mint: self.mint.to_account_info(),
            to: self.vault_account.to_account_info(),
            authority: self.initializer.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);

        transfer_checked(cpi_ctx, amount, self.mint.decimals)
    }
}

/// Handler for the initialize instruction
pub fn handler(ctx: Context<Initialize>, initializer_amount: u64, taker_amount: u64) -> Result<()> {
    require_gt!(initializer_amount, 0, EscrowError::InvalidAmount);
    require_gt!(taker_amount, 0, EscrowError::InvalidAmount);

    ctx.accounts.init_escrow(initializer_amount, taker_amount)?;
    ctx.accounts.deposit(initializer_amount)?;

    emit!(EscrowInitialized {
        escrow: ctx.accounts.escrow_account.key(),
        initializer: ctx.accounts.initializer.key(),
        mint: ctx.accounts.mint.key(),
        initializer_amount,
        taker_amount,
    });
    msg!(
        "Escrow opened: {} locked for {} in return",
        initializer_amount,
        taker_amount
    );

    Ok(())
}
