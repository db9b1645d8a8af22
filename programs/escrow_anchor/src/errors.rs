use anchor_lang::prelude::*;

#[error_code]
pub enum EscrowError {
    #[msg("Invalid amount: amount must be greater than zero")]
    InvalidAmount,
    #[msg("Unauthorized: signer does not own this escrow or token account")]
    Unauthorized,
    #[msg("Invalid initializer: account does not match escrow initializer")]
    InitializerMismatch,
    #[msg("Invalid deposit account: does not match escrow deposit account")]
    DepositAccountMismatch,
    #[msg("Invalid receive account: does not match escrow receive account")]
    ReceiveAccountMismatch,
    #[msg("Mint mismatch: token account holds a different mint")]
    MintMismatch,
    #[msg("Insufficient funds in source token account")]
    InsufficientFunds,
    #[msg("Invalid vault: vault is not owned by the escrow authority")]
    InvalidVault,
}
