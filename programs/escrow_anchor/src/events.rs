use anchor_lang::prelude::*;

#[event]
pub struct EscrowInitialized {
    pub escrow: Pubkey,
    pub initializer: Pubkey,
    pub mint: Pubkey,
    pub initializer_amount: u64,
    pub taker_amount: u64,
}

#[event]
pub struct EscrowCancelled {
    pub escrow: Pubkey,
    pub initializer: Pubkey,
    pub refunded: u64,
}

#[event]
pub struct EscrowExchanged {
    pub escrow: Pubkey,
    pub initializer: Pubkey,
    pub taker: Pubkey,
    pub initializer_amount: u64,
    pub taker_amount: u64,
}
