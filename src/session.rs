//! Session configuration: the single shared RPC binding plus the ordered
//! wallet adapter list. Created once at application start, read everywhere,
//! mutated nowhere after init.

use std::sync::Arc;

use solana_sdk::commitment_config::CommitmentConfig;

use crate::core::adapter::WalletAdapter;
use crate::core::rpc::RpcConnection;

/// Target cluster for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cluster {
    MainnetBeta,
    Testnet,
    Devnet,
    Localnet,
}

impl Cluster {
    /// Public JSON-RPC endpoint for the cluster.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Cluster::MainnetBeta => "https://api.mainnet-beta.solana.com",
            Cluster::Testnet => "https://api.testnet.solana.com",
            Cluster::Devnet => "https://api.devnet.solana.com",
            Cluster::Localnet => "http://127.0.0.1:8899",
        }
    }
}

/// Immutable per-session settings.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    pub cluster: Cluster,

    /// How finalized a ledger state must be before reads reflect it.
    /// Affects read freshness, not correctness.
    pub commitment: CommitmentConfig,

    /// Attempt silent reconnection to a previously authorized wallet at
    /// session start. Best-effort; never blocks the caller on failure.
    pub auto_connect: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cluster: Cluster::Devnet,
            commitment: CommitmentConfig::processed(),
            auto_connect: true,
        }
    }
}

/// Process-wide provider binding: the RPC endpoint and the enumerable set
/// of wallet adapters offered to the user. Lives for the whole session.
pub struct Session {
    config: SessionConfig,
    adapters: Vec<Arc<dyn WalletAdapter>>,
}

impl Session {
    pub fn new(config: SessionConfig, adapters: Vec<Arc<dyn WalletAdapter>>) -> Self {
        Self { config, adapters }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn endpoint(&self) -> &'static str {
        self.config.cluster.endpoint()
    }

    /// Available adapters, in the order they were registered. May be empty;
    /// the UI renders an explicit empty state in that case.
    pub fn adapters(&self) -> &[Arc<dyn WalletAdapter>] {
        &self.adapters
    }

    pub fn adapter_by_name(&self, name: &str) -> Option<&Arc<dyn WalletAdapter>> {
        self.adapters.iter().find(|a| a.name() == name)
    }

    /// Build the RPC connection for this session's cluster and commitment.
    pub fn rpc(&self) -> RpcConnection {
        RpcConnection::new(self.endpoint(), self.config.commitment)
    }
}
