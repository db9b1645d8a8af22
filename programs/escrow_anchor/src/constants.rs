/// Seed of the escrow record address, which doubles as the vault authority
pub const ESCROW_SEED: &[u8] = b"escrow";

/// Seed of the vault token account address
pub const VAULT_SEED: &[u8] = b"vault";
