use std::str::FromStr;

use borsh::BorshDeserialize;
use sha2::{Digest, Sha256};
use solana_sdk::pubkey::Pubkey;

use crate::core::connection::SolConnection;
use crate::error::{Result, VaultSdkError};
use crate::types::UserInteractions;

//=============================================================================
// PDA Derivation Helpers
//=============================================================================

/// Seed for the per-user vault account holding deposited lamports
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed for the per-user interactions counter account
pub const COUNTER_SEED: &[u8] = b"counter";

/// Derive the vault PDA for an owner. Deterministic: the same owner always
/// maps to the same address under a given program id.
pub fn derive_vault_pda(owner: &Pubkey, program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(&[VAULT_SEED, owner.as_ref()], program_id)
        .ok_or(VaultSdkError::DerivationExhausted("vault"))
}

/// Derive the interactions-counter PDA for an owner.
pub fn derive_counter_pda(owner: &Pubkey, program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(&[COUNTER_SEED, owner.as_ref()], program_id)
        .ok_or(VaultSdkError::DerivationExhausted("counter"))
}

/// Parse an externally supplied owner identity (base58) into a public key.
pub fn parse_owner_key(raw: &str) -> Result<Pubkey> {
    Pubkey::from_str(raw).map_err(|e| VaultSdkError::InvalidOwnerKey(format!("{raw:?}: {e}")))
}

//=============================================================================
// ABI Discriminators
//=============================================================================

/// 8-byte discriminator prefixing instruction data, per the deployed
/// program's ABI: `sha256("global:<name>")[..8]`.
pub fn instruction_discriminator(name: &str) -> [u8; 8] {
    sighash("global", name)
}

/// 8-byte discriminator prefixing account data: `sha256("account:<name>")[..8]`.
pub fn account_discriminator(name: &str) -> [u8; 8] {
    sighash("account", name)
}

fn sighash(namespace: &str, name: &str) -> [u8; 8] {
    let digest = Sha256::digest(format!("{namespace}:{name}").as_bytes());
    let mut out = [0u8; 8];
    out.copy_from_slice(&digest[..8]);
    out
}

//=============================================================================
// Account Fetching & Parsing
//=============================================================================

/// Fetch raw account data, surfacing a typed error when the account does
/// not exist yet (e.g. counter before the first deposit).
pub async fn fetch_account_data(
    connection: &impl SolConnection,
    address: &Pubkey,
) -> Result<Vec<u8>> {
    let account = connection
        .get_account(address)
        .await
        .map_err(|e| VaultSdkError::Connection(e.to_string()))?
        .ok_or(VaultSdkError::AccountNotFound(*address))?;

    Ok(account.data)
}

/// Parse an interactions-counter account: discriminator check, then the
/// borsh-encoded counter fields.
pub fn parse_interactions(data: &[u8]) -> Result<UserInteractions> {
    let expected = account_discriminator("UserInteractions");
    if data.len() < expected.len() {
        return Err(VaultSdkError::InvalidAccountData(
            "Account data too small for discriminator".to_string(),
        ));
    }
    if data[..8] != expected {
        return Err(VaultSdkError::InvalidAccountData(
            "Account discriminator mismatch".to_string(),
        ));
    }

    UserInteractions::try_from_slice(&data[8..])
        .map_err(|e| VaultSdkError::InvalidAccountData(format!("Failed to parse counter: {e}")))
}

/// Fetch and parse the interactions counter in one step.
pub async fn fetch_interactions(
    connection: &impl SolConnection,
    counter_pda: &Pubkey,
) -> Result<UserInteractions> {
    let data = fetch_account_data(connection, counter_pda).await?;
    parse_interactions(&data)
}
