use solana_sdk::message::Message;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::transaction::Transaction;

use crate::core::connection::SolConnection;
use crate::error::{Result, VaultSdkError};
use crate::instructions;
use crate::types::UserInteractions;
use crate::utils;

/// Per-owner view of the vault program: the owner's two derived accounts
/// plus transaction building and read-back.
#[derive(Debug, Clone)]
pub struct VaultClient {
    /// Program id the addresses are derived under
    pub program_id: Pubkey,

    /// Wallet that owns the vault and signs its transactions
    pub owner: Pubkey,

    /// PDA holding the deposited lamports (seed `"vault"`)
    pub vault_pda: Pubkey,

    /// PDA tracking deposit/withdraw totals (seed `"counter"`)
    pub counter_pda: Pubkey,
}

impl VaultClient {
    /// Derive both PDAs for `owner`. `program_id` defaults to the id in the
    /// embedded program descriptor.
    pub fn for_owner(owner: &Pubkey, program_id: Option<Pubkey>) -> Result<Self> {
        let program_id = program_id.unwrap_or(*crate::idl::program_id());
        let (vault_pda, _) = utils::derive_vault_pda(owner, &program_id)?;
        let (counter_pda, _) = utils::derive_counter_pda(owner, &program_id)?;

        Ok(Self {
            program_id,
            owner: *owner,
            vault_pda,
            counter_pda,
        })
    }

    /// Build an unsigned deposit transaction with a fresh blockhash. The
    /// caller signs with the owner's wallet before submitting.
    pub async fn deposit_transaction(
        &self,
        connection: &impl SolConnection,
        amount: u64,
    ) -> Result<Transaction> {
        let ix = instructions::deposit(&self.program_id, &self.owner, amount)?;
        self.unsigned_transaction(connection, ix).await
    }

    /// Build an unsigned withdraw transaction with a fresh blockhash.
    pub async fn withdraw_transaction(
        &self,
        connection: &impl SolConnection,
        amount: u64,
    ) -> Result<Transaction> {
        let ix = instructions::withdraw(&self.program_id, &self.owner, amount)?;
        self.unsigned_transaction(connection, ix).await
    }

    /// Read back the interactions counter account.
    pub async fn fetch_interactions(
        &self,
        connection: &impl SolConnection,
    ) -> Result<UserInteractions> {
        utils::fetch_interactions(connection, &self.counter_pda).await
    }

    /// Lamport balance of the vault PDA.
    pub async fn vault_balance(&self, connection: &impl SolConnection) -> Result<u64> {
        connection
            .get_balance(&self.vault_pda)
            .await
            .map_err(|e| VaultSdkError::Connection(e.to_string()))
    }

    async fn unsigned_transaction(
        &self,
        connection: &impl SolConnection,
        ix: solana_sdk::instruction::Instruction,
    ) -> Result<Transaction> {
        let blockhash = connection
            .get_latest_blockhash()
            .await
            .map_err(|e| VaultSdkError::Connection(e.to_string()))?;

        let mut tx = Transaction::new_unsigned(Message::new(&[ix], Some(&self.owner)));
        tx.message.recent_blockhash = blockhash;
        Ok(tx)
    }
}
