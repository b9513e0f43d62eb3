// Needs a local validator with drip_rewards deployed plus ANCHOR_PROVIDER_URL
// and ANCHOR_WALLET, e.g. `anchor test`.

use anchor_client::solana_sdk::signature::Signature;
use drip_rewards_client::{DripRewardsClient, ProviderConfig};

#[test]
#[ignore = "requires a running validator"]
fn is_initialized() {
    let provider = ProviderConfig::from_env().unwrap();
    let client = DripRewardsClient::connect(&provider, drip_rewards::ID).unwrap();

    let signature = client.initialize().unwrap();
    println!("Your transaction signature {signature}");
    assert_ne!(signature, Signature::default());
}
