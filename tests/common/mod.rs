//! Shared test doubles: an in-memory ledger that executes the vault
//! program's deposit/withdraw semantics, and scripted wallet adapters.
#![allow(dead_code)]

use std::collections::HashMap;
use std::error::Error;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use solana_sdk::account::Account;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;
use tokio::sync::Notify;

use vault_sdk::core::adapter::WalletAdapter;
use vault_sdk::core::connection::SolConnection;
use vault_sdk::utils::{account_discriminator, instruction_discriminator, parse_interactions};
use vault_sdk::UserInteractions;

//=============================================================================
// In-memory ledger
//=============================================================================

pub struct MockLedger {
    pub program_id: Pubkey,
    accounts: Mutex<HashMap<Pubkey, Account>>,
    fail_next_send: Mutex<Option<String>>,
}

impl MockLedger {
    pub fn new(program_id: Pubkey) -> Self {
        Self {
            program_id,
            accounts: Mutex::new(HashMap::new()),
            fail_next_send: Mutex::new(None),
        }
    }

    /// Make the next `send_transaction` fail with `reason`.
    pub fn fail_next_send(&self, reason: &str) {
        *self.fail_next_send.lock().unwrap() = Some(reason.to_string());
    }

    fn execute(&self, tx: &Transaction) -> Result<(), String> {
        let message = &tx.message;
        let ix = message
            .instructions
            .first()
            .ok_or("empty transaction")?;
        let program = message.account_keys[ix.program_id_index as usize];
        if program != self.program_id {
            return Err(format!("unknown program {program}"));
        }
        if ix.data.len() < 16 {
            return Err("instruction data too short".to_string());
        }

        let vault = message.account_keys[ix.accounts[0] as usize];
        let counter = message.account_keys[ix.accounts[1] as usize];
        let amount = u64::from_le_bytes(ix.data[8..16].try_into().unwrap());

        let mut accounts = self.accounts.lock().unwrap();
        let mut state = match accounts.get(&counter) {
            Some(account) => parse_interactions(&account.data).map_err(|e| e.to_string())?,
            None => UserInteractions {
                total_deposits: 0,
                total_withdrawals: 0,
            },
        };
        let vault_lamports = accounts.get(&vault).map(|a| a.lamports).unwrap_or(0);

        let disc: [u8; 8] = ix.data[..8].try_into().unwrap();
        let new_vault_lamports = if disc == instruction_discriminator("deposit") {
            state.total_deposits += amount;
            vault_lamports + amount
        } else if disc == instruction_discriminator("withdraw") {
            state.total_withdrawals += amount;
            vault_lamports
                .checked_sub(amount)
                .ok_or("insufficient vault funds")?
        } else {
            return Err("unknown instruction discriminator".to_string());
        };

        accounts.insert(
            vault,
            Account {
                lamports: new_vault_lamports,
                data: vec![],
                owner: self.program_id,
                executable: false,
                rent_epoch: 0,
            },
        );

        let mut data = account_discriminator("UserInteractions").to_vec();
        data.extend_from_slice(&state.total_deposits.to_le_bytes());
        data.extend_from_slice(&state.total_withdrawals.to_le_bytes());
        accounts.insert(
            counter,
            Account {
                lamports: 1_000_000,
                data,
                owner: self.program_id,
                executable: false,
                rent_epoch: 0,
            },
        );

        Ok(())
    }
}

#[async_trait]
impl SolConnection for MockLedger {
    async fn send_transaction(
        &self,
        tx: &Transaction,
    ) -> Result<Signature, Box<dyn Error + Send + Sync>> {
        if let Some(reason) = self.fail_next_send.lock().unwrap().take() {
            return Err(reason.into());
        }
        self.execute(tx)?;
        Ok(tx.signatures.first().copied().unwrap_or_default())
    }

    async fn get_account(
        &self,
        pubkey: &Pubkey,
    ) -> Result<Option<Account>, Box<dyn Error + Send + Sync>> {
        Ok(self.accounts.lock().unwrap().get(pubkey).cloned())
    }

    async fn get_balance(&self, pubkey: &Pubkey) -> Result<u64, Box<dyn Error + Send + Sync>> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .get(pubkey)
            .map(|a| a.lamports)
            .unwrap_or(0))
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, Box<dyn Error + Send + Sync>> {
        Ok(Hash::new_unique())
    }
}

//=============================================================================
// Scripted wallet adapters
//=============================================================================

pub enum ConnectScript {
    Approve,
    Reject(String),
}

pub struct ScriptedAdapter {
    name: String,
    icon: Option<String>,
    authorized: bool,
    key: Pubkey,
    script: ConnectScript,
    disconnect_failure: Option<String>,
    /// When set, `connect` parks until the test releases the gate
    gate: Option<Arc<Notify>>,
    connected: Mutex<Option<Pubkey>>,
}

impl ScriptedAdapter {
    pub fn approving(name: &str) -> Self {
        Self {
            name: name.to_string(),
            icon: Some(format!("https://wallets.test/{}.svg", name.to_lowercase())),
            authorized: false,
            key: Pubkey::new_unique(),
            script: ConnectScript::Approve,
            disconnect_failure: None,
            gate: None,
            connected: Mutex::new(None),
        }
    }

    pub fn rejecting(name: &str, reason: &str) -> Self {
        Self {
            script: ConnectScript::Reject(reason.to_string()),
            ..Self::approving(name)
        }
    }

    pub fn with_authorized(mut self) -> Self {
        self.authorized = true;
        self
    }

    pub fn with_gate(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn with_disconnect_failure(mut self, reason: &str) -> Self {
        self.disconnect_failure = Some(reason.to_string());
        self
    }

    pub fn key(&self) -> Pubkey {
        self.key
    }
}

#[async_trait]
impl WalletAdapter for ScriptedAdapter {
    fn name(&self) -> &str {
        &self.name
    }

    fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    fn authorized(&self) -> bool {
        self.authorized
    }

    async fn connect(&self) -> Result<Pubkey, String> {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        match &self.script {
            ConnectScript::Approve => {
                *self.connected.lock().unwrap() = Some(self.key);
                Ok(self.key)
            }
            ConnectScript::Reject(reason) => Err(reason.clone()),
        }
    }

    async fn disconnect(&self) -> Result<(), String> {
        *self.connected.lock().unwrap() = None;
        match &self.disconnect_failure {
            Some(reason) => Err(reason.clone()),
            None => Ok(()),
        }
    }

    fn pubkey(&self) -> Option<Pubkey> {
        *self.connected.lock().unwrap()
    }
}
