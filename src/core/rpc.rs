use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::account::Account;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;
use std::error::Error;

use crate::core::connection::SolConnection;

/// [`SolConnection`] backed by a JSON-RPC endpoint. One instance per
/// session, bound to the session's cluster and commitment.
pub struct RpcConnection {
    client: RpcClient,
    commitment: CommitmentConfig,
}

impl RpcConnection {
    pub fn new(endpoint: impl ToString, commitment: CommitmentConfig) -> Self {
        Self {
            client: RpcClient::new_with_commitment(endpoint.to_string(), commitment),
            commitment,
        }
    }

    pub fn commitment(&self) -> CommitmentConfig {
        self.commitment
    }

    pub fn url(&self) -> String {
        self.client.url()
    }
}

#[async_trait]
impl SolConnection for RpcConnection {
    async fn send_transaction(
        &self,
        tx: &Transaction,
    ) -> Result<Signature, Box<dyn Error + Send + Sync>> {
        let signature = self.client.send_and_confirm_transaction(tx).await?;
        Ok(signature)
    }

    async fn get_account(
        &self,
        pubkey: &Pubkey,
    ) -> Result<Option<Account>, Box<dyn Error + Send + Sync>> {
        let response = self
            .client
            .get_account_with_commitment(pubkey, self.commitment)
            .await?;
        Ok(response.value)
    }

    async fn get_balance(&self, pubkey: &Pubkey) -> Result<u64, Box<dyn Error + Send + Sync>> {
        let balance = self.client.get_balance(pubkey).await?;
        Ok(balance)
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, Box<dyn Error + Send + Sync>> {
        let blockhash = self.client.get_latest_blockhash().await?;
        Ok(blockhash)
    }
}
