//! Instruction builders for the deployed vault program.
//!
//! Account order is fixed by the on-chain program: vault PDA, interactions
//! counter PDA, signer, system program.

use borsh::BorshSerialize;
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_program;

use crate::error::Result;
use crate::utils::{derive_counter_pda, derive_vault_pda, instruction_discriminator};

fn vault_instruction(
    name: &str,
    program_id: &Pubkey,
    owner: &Pubkey,
    amount: u64,
) -> Result<Instruction> {
    let (vault_pda, _) = derive_vault_pda(owner, program_id)?;
    let (counter_pda, _) = derive_counter_pda(owner, program_id)?;

    let mut data = instruction_discriminator(name).to_vec();
    amount.serialize(&mut data)?;

    let accounts = vec![
        AccountMeta::new(vault_pda, false),
        AccountMeta::new(counter_pda, false),
        AccountMeta::new(*owner, true),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data,
    })
}

/// Move `amount` lamports from the signer into their vault PDA and bump
/// the interactions counter.
pub fn deposit(program_id: &Pubkey, owner: &Pubkey, amount: u64) -> Result<Instruction> {
    vault_instruction("deposit", program_id, owner, amount)
}

/// Move `amount` lamports from the vault PDA back to the signer.
pub fn withdraw(program_id: &Pubkey, owner: &Pubkey, amount: u64) -> Result<Instruction> {
    vault_instruction("withdraw", program_id, owner, amount)
}
