//! Wallet connection state machine.
//!
//! Owns the single [`ConnectionState`] instance. All transitions happen
//! through the methods here; everything else takes snapshot reads. The
//! inner lock is only held across a transition, never across an adapter
//! handshake, so a second caller arriving mid-handshake observes
//! `Connecting`/`Disconnecting` and is rejected instead of starting a
//! concurrent one.

use std::sync::{Arc, Mutex};

use solana_sdk::pubkey::Pubkey;

use crate::core::adapter::{identity_of, WalletAdapter};
use crate::error::{Result, VaultSdkError};
use crate::session::Session;
use crate::types::{ConnectionState, WalletIdentity};

struct Inner {
    state: ConnectionState,
    dialog_open: bool,
    /// Adapter behind the current `Connected` state
    active: Option<Arc<dyn WalletAdapter>>,
}

pub struct ConnectionController {
    session: Arc<Session>,
    inner: Mutex<Inner>,
}

impl ConnectionController {
    pub fn new(session: Arc<Session>) -> Self {
        Self {
            session,
            inner: Mutex::new(Inner {
                state: ConnectionState::Disconnected,
                dialog_open: false,
                active: None,
            }),
        }
    }

    /// Wallets offered by the session, in registration order. May be empty;
    /// the caller renders an explicit "no wallets found" state.
    pub fn list_available_wallets(&self) -> Vec<WalletIdentity> {
        self.session
            .adapters()
            .iter()
            .map(|a| identity_of(a.as_ref()))
            .collect()
    }

    /// Snapshot of the connection state.
    pub fn state(&self) -> ConnectionState {
        self.lock().state.clone()
    }

    /// Active wallet and its public key, if connected.
    pub fn current_identity(&self) -> Option<(WalletIdentity, Pubkey)> {
        match &self.lock().state {
            ConnectionState::Connected(identity, key) => Some((identity.clone(), *key)),
            _ => None,
        }
    }

    pub fn dialog_open(&self) -> bool {
        self.lock().dialog_open
    }

    pub fn open_dialog(&self) {
        self.lock().dialog_open = true;
    }

    /// Dismiss the selection dialog. Rejected while a handshake is in
    /// flight: abandoning one mid-flight would lose track of its eventual
    /// resolution.
    pub fn close_dialog(&self) -> Result<()> {
        let mut inner = self.lock();
        if inner.state.is_in_flight() {
            return Err(VaultSdkError::OperationInFlight);
        }
        inner.dialog_open = false;
        Ok(())
    }

    /// Acknowledge a surfaced error, returning to `Disconnected`.
    pub fn acknowledge_error(&self) {
        let mut inner = self.lock();
        if matches!(inner.state, ConnectionState::Error(_)) {
            inner.state = ConnectionState::Disconnected;
        }
    }

    /// Select the named wallet and connect to it.
    ///
    /// `Disconnected → Connecting → Connected` on success (dialog closes);
    /// `→ Error(reason)` on failure (dialog stays open for a retry or a
    /// different wallet). At most one connect-or-disconnect runs at a time.
    pub async fn select_and_connect(&self, name: &str) -> Result<Pubkey> {
        let adapter = {
            let mut inner = self.lock();
            if inner.state.is_in_flight() {
                return Err(VaultSdkError::OperationInFlight);
            }
            if inner.state.is_connected() {
                return Err(VaultSdkError::Connection(
                    "Wallet already connected; disconnect first".to_string(),
                ));
            }
            // A lingering Error state is recoverable: this user action
            // passes through Disconnected before retrying.
            inner.state = ConnectionState::Disconnected;

            let adapter = self
                .session
                .adapter_by_name(name)
                .cloned()
                .ok_or_else(|| VaultSdkError::Connection(format!("Unknown wallet: {name}")))?;
            inner.state = ConnectionState::Connecting(identity_of(adapter.as_ref()));
            adapter
        };

        // Handshake runs without the lock; the adapter may prompt the user.
        let outcome = adapter.connect().await;

        let mut inner = self.lock();
        match outcome {
            Ok(key) => {
                inner.state = ConnectionState::Connected(identity_of(adapter.as_ref()), key);
                inner.active = Some(adapter);
                inner.dialog_open = false;
                Ok(key)
            }
            Err(message) => {
                let err = VaultSdkError::from_adapter(message);
                // The state carries the adapter's reason verbatim; the UI
                // renders it beside the wallet list.
                let reason = match &err {
                    VaultSdkError::Connection(reason) => reason.clone(),
                    other => other.to_string(),
                };
                inner.state = ConnectionState::Error(reason);
                inner.active = None;
                Err(err)
            }
        }
    }

    /// Disconnect the active wallet.
    ///
    /// `Connected → Disconnecting → Disconnected`. An adapter failure is
    /// surfaced to the caller, but local state still clears to
    /// `Disconnected` so the UI is never stranded.
    pub async fn disconnect(&self) -> Result<()> {
        let adapter = {
            let mut inner = self.lock();
            if inner.state.is_in_flight() {
                return Err(VaultSdkError::OperationInFlight);
            }
            if !inner.state.is_connected() {
                return Err(VaultSdkError::NotConnected);
            }
            inner.state = ConnectionState::Disconnecting;
            inner
                .active
                .take()
                .ok_or(VaultSdkError::NotConnected)?
        };

        let outcome = adapter.disconnect().await;

        let mut inner = self.lock();
        inner.state = ConnectionState::Disconnected;
        outcome.map_err(VaultSdkError::from_adapter)
    }

    /// Best-effort silent reconnection to a previously authorized wallet.
    /// Never errors and never leaves a transient state behind; returns the
    /// connected key if a wallet accepted.
    pub async fn try_auto_connect(&self) -> Option<Pubkey> {
        if !self.session.config().auto_connect {
            return None;
        }
        let adapter = self
            .session
            .adapters()
            .iter()
            .find(|a| a.authorized())
            .cloned()?;

        {
            let mut inner = self.lock();
            if !matches!(inner.state, ConnectionState::Disconnected) {
                return None;
            }
            inner.state = ConnectionState::Connecting(identity_of(adapter.as_ref()));
        }

        let outcome = adapter.connect().await;

        let mut inner = self.lock();
        match outcome {
            Ok(key) => {
                inner.state = ConnectionState::Connected(identity_of(adapter.as_ref()), key);
                inner.active = Some(adapter);
                Some(key)
            }
            Err(_) => {
                inner.state = ConnectionState::Disconnected;
                None
            }
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // Lock is never held across an await; poisoning means a panic
        // elsewhere already aborted the test run.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}
