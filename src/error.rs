use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

/// SDK-specific error types for vault operations
#[derive(Debug, Error)]
pub enum VaultSdkError {
    /// Wallet adapter or RPC connection failure
    #[error("Connection error: {0}")]
    Connection(String),

    /// A connect or disconnect handshake is already running
    #[error("Another wallet operation is already in flight")]
    OperationInFlight,

    /// Operation requires an active wallet connection
    #[error("No wallet connected")]
    NotConnected,

    /// Owner identity could not be parsed into a public key
    #[error("Invalid owner key: {0}")]
    InvalidOwnerKey(String),

    /// No valid program-derived address exists for the seed space
    #[error("No derivable address for seed {0:?}")]
    DerivationExhausted(&'static str),

    /// Account not found on-chain
    #[error("Account not found: {0}")]
    AccountNotFound(Pubkey),

    /// Invalid account data or deserialization error
    #[error("Invalid account data: {0}")]
    InvalidAccountData(String),

    /// Transaction submission or confirmation failure
    #[error("Submission error: {0}")]
    Submission(String),

    /// Malformed program descriptor
    #[error("Invalid program descriptor: {0}")]
    Descriptor(String),

    /// Borsh serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl VaultSdkError {
    /// Normalize whatever the external wallet adapter reported. Adapters
    /// surface plain strings; an empty one must still become a visible
    /// error, never be dropped.
    pub fn from_adapter(message: String) -> Self {
        if message.trim().is_empty() {
            VaultSdkError::Connection("Unknown wallet failure".to_string())
        } else {
            VaultSdkError::Connection(message)
        }
    }
}

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, VaultSdkError>;
