use anchor_lang::prelude::*;

use crate::constants::{ESCROW_SEED, VAULT_SEED};

/// Signing capability of the program-derived vault authority.
///
/// The authority address has no private key. A `VaultAuthority` is the only thing
/// that yields its signer seeds, and it can only be built inside this crate from a
/// bump Anchor has already checked against `ESCROW_SEED`.
pub struct VaultAuthority {
    bump: [u8; 1],
}

impl VaultAuthority {
    /// Address and canonical bump of the vault authority (also the escrow record address)
    pub fn find_address(program_id: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[ESCROW_SEED], program_id)
    }

    /// Address and canonical bump of the vault token account
    pub fn vault_address(program_id: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[VAULT_SEED], program_id)
    }

    pub(crate) fn from_bump(bump: u8) -> Self {
        Self { bump: [bump] }
    }

    pub(crate) fn seeds(&self) -> [&[u8]; 2] {
        [ESCROW_SEED, &self.bump]
    }
}
