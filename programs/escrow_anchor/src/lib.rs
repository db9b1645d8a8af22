use anchor_lang::prelude::*;

pub mod authority;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

pub use instructions::*;

declare_id!("4PhY6r2EB5kTfRnhzhksVjsVBetCruNYZXm54x8vQrds");

#[program]
pub mod escrow_anchor {
    use super::*;

    /// Open the escrow: initializer locks Token A in the vault and sets the Token B price
    #[instruction(discriminator = 0)]
    pub fn initialize(
        ctx: Context<Initialize>,
        initializer_amount: u64,
        taker_amount: u64,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, initializer_amount, taker_amount)
    }

    /// Complete the trade: taker pays Token B, receives the vaulted Token A
    #[instruction(discriminator = 1)]
    pub fn exchange(ctx: Context<Exchange>) -> Result<()> {
        instructions::exchange::handler(ctx)
    }

    /// Abort the trade: initializer reclaims the vaulted Token A
    #[instruction(discriminator = 2)]
    pub fn cancel(ctx: Context<Cancel>) -> Result<()> {
        instructions::cancel::handler(ctx)
    }
}
