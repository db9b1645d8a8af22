use anchor_lang::prelude::*;

/// Terms of the in-flight trade.
///
/// Persisted layout (Borsh, little-endian), stable across releases:
///
/// | offset | size | field                               |
/// |--------|------|-------------------------------------|
/// | 0      | 1    | discriminator / layout version `1`  |
/// | 1      | 32   | `initializer_key`                   |
/// | 33     | 32   | `initializer_deposit_token_account` |
/// | 65     | 32   | `initializer_receive_token_account` |
/// | 97     | 8    | `initializer_amount`                |
/// | 105    | 8    | `taker_amount`                      |
#[account(discriminator = 1)]
#[derive(InitSpace)]
pub struct EscrowAccount {
    /// Wallet that opened the escrow; the only key allowed to cancel
    pub initializer_key: Pubkey,
    /// Token A account the deposit came from (refund destination)
    pub initializer_deposit_token_account: Pubkey,
    /// Token B account that receives the taker's payment
    pub initializer_receive_token_account: Pubkey,
    /// Token A locked in the vault
    pub initializer_amount: u64,
    /// Token B demanded from the taker
    pub taker_amount: u64,
}

impl EscrowAccount {
    /// Bytes allocated for the record, discriminator included
    pub const SPACE: usize = Self::DISCRIMINATOR.len() + Self::INIT_SPACE;
}

/// Byte offsets of each field in the serialized record
pub mod layout {
    pub const INITIALIZER_KEY: usize = 1;
    pub const INITIALIZER_DEPOSIT_TOKEN_ACCOUNT: usize = 33;
    pub const INITIALIZER_RECEIVE_TOKEN_ACCOUNT: usize = 65;
    pub const INITIALIZER_AMOUNT: usize = 97;
    pub const TAKER_AMOUNT: usize = 105;
}
