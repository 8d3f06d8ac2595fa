use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::pubkey::Pubkey;

/// Identity of a wallet offered by the session's adapter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletIdentity {
    /// Display name reported by the adapter ("Phantom", "Solflare", ...)
    pub name: String,

    /// Optional icon URI for the selection dialog
    pub icon: Option<String>,
}

/// Lifecycle of the single wallet connection. One instance exists, owned by
/// the [`ConnectionController`](crate::controller::ConnectionController);
/// everything else sees snapshot reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    /// No wallet selected or connected
    Disconnected,

    /// A connect handshake with the named wallet is in flight
    Connecting(WalletIdentity),

    /// Active wallet with its public key
    Connected(WalletIdentity, Pubkey),

    /// A disconnect handshake is in flight
    Disconnecting,

    /// Last operation failed; recoverable, next user action resets to
    /// Disconnected before retrying
    Error(String),
}

impl ConnectionState {
    /// True while a connect or disconnect handshake is running.
    pub fn is_in_flight(&self) -> bool {
        matches!(
            self,
            ConnectionState::Connecting(_) | ConnectionState::Disconnecting
        )
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected(..))
    }
}

/// On-chain layout of the per-user interactions counter account, past the
/// 8-byte account discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct UserInteractions {
    /// Cumulative lamports deposited into the user's vault
    pub total_deposits: u64,

    /// Cumulative lamports withdrawn from the user's vault
    pub total_withdrawals: u64,
}
