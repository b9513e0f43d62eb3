use std::rc::Rc;

use anchor_client::anchor_lang::{InstructionData, ToAccountMetas};
use anchor_client::solana_sdk::instruction::Instruction;
use anchor_client::solana_sdk::pubkey::Pubkey;
use anchor_client::solana_sdk::signature::{Keypair, Signature, Signer};
use anchor_client::{Client, Program};
use tracing::{debug, info};

use crate::config::ProviderConfig;
use crate::error::Result;

/// `initialize` takes no arguments and no accounts.
pub fn initialize_instruction(program_id: Pubkey) -> Instruction {
    Instruction {
        program_id,
        accounts: drip_rewards::accounts::Initialize {}.to_account_metas(None),
        data: drip_rewards::instruction::Initialize {}.data(),
    }
}

pub struct DripRewardsClient {
    program: Program<Rc<Keypair>>,
}

impl DripRewardsClient {
    pub fn connect(provider: &ProviderConfig, program_id: Pubkey) -> Result<Self> {
        let payer = Rc::new(provider.load_wallet()?);
        debug!(
            cluster = provider.cluster.url(),
            payer = %payer.pubkey(),
            %program_id,
            "connecting"
        );

        let client = Client::new_with_options(provider.cluster.clone(), payer, provider.commitment);
        let program = client.program(program_id)?;
        Ok(Self { program })
    }

    pub fn program_id(&self) -> Pubkey {
        self.program.id()
    }

    /// Submit `initialize` and return the transaction signature. No retries;
    /// RPC and program errors are returned as is.
    pub fn initialize(&self) -> Result<Signature> {
        let signature = self
            .program
            .request()
            .instruction(initialize_instruction(self.program.id()))
            .send()?;
        info!(%signature, program_id = %self.program.id(), "initialize confirmed");
        Ok(signature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_client::solana_sdk::hash::hash;

    #[test]
    fn initialize_instruction_is_bare_discriminator() {
        let program_id = Pubkey::new_unique();
        let ix = initialize_instruction(program_id);

        assert_eq!(ix.program_id, program_id);
        assert!(ix.accounts.is_empty());
        assert_eq!(ix.data, hash(b"global:initialize").to_bytes()[..8].to_vec());
    }
}
