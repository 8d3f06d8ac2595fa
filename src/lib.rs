pub mod controller;
pub mod core;
pub mod error;
pub mod idl;
pub mod instructions;
pub mod session;
pub mod types;
pub mod utils;
pub mod vault;

pub use crate::controller::ConnectionController;
pub use crate::core::adapter::WalletAdapter;
pub use crate::core::connection::SolConnection;
pub use crate::core::rpc::RpcConnection;
pub use crate::error::{Result, VaultSdkError};
pub use crate::idl::{program_id, ProgramDescriptor};
pub use crate::session::{Cluster, Session, SessionConfig};
pub use crate::types::{ConnectionState, UserInteractions, WalletIdentity};
pub use crate::utils::{
    derive_counter_pda, derive_vault_pda, fetch_interactions, parse_interactions, parse_owner_key,
};
pub use crate::vault::VaultClient;
