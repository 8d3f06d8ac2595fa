use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;

use crate::types::WalletIdentity;

/// Abstraction over an external wallet integration (browser extension,
/// hardware bridge, ...). Consumed, never reimplemented: the adapter owns
/// key custody and may prompt the user out-of-band during `connect` or
/// `disconnect`. Errors are reported as plain strings; the controller turns
/// them into the closed error enum at its boundary.
#[async_trait]
pub trait WalletAdapter: Send + Sync {
    /// Display name ("Phantom", "Solflare", ...)
    fn name(&self) -> &str;

    /// Optional icon URI for the selection dialog
    fn icon(&self) -> Option<&str> {
        None
    }

    /// Whether this wallet has previously authorized the application.
    /// Drives best-effort silent reconnection at session start.
    fn authorized(&self) -> bool {
        false
    }

    /// Establish a connection; resolves with the wallet's public key.
    /// May block on user interaction in the wallet UI.
    async fn connect(&self) -> Result<Pubkey, String>;

    /// Tear down the connection.
    async fn disconnect(&self) -> Result<(), String>;

    /// Public key of the active connection, if any.
    fn pubkey(&self) -> Option<Pubkey>;
}

/// Identity card for a wallet adapter, as shown in the selection dialog.
pub fn identity_of(adapter: &dyn WalletAdapter) -> WalletIdentity {
    WalletIdentity {
        name: adapter.name().to_string(),
        icon: adapter.icon().map(str::to_string),
    }
}
