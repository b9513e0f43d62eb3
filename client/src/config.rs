use std::path::{Path, PathBuf};
use std::str::FromStr;

use anchor_client::solana_sdk::commitment_config::CommitmentConfig;
use anchor_client::solana_sdk::pubkey::Pubkey;
use anchor_client::solana_sdk::signature::{read_keypair_file, Keypair};
use anchor_client::Cluster;
use clap::Parser;

use crate::error::{ClientError, Result};

#[derive(Debug, Clone, Parser)]
#[command(name = "drip-rewards")]
#[command(about = "Invoke the drip_rewards initialize instruction")]
pub struct CliConfig {
    /// Cluster URL or moniker (localnet, devnet, mainnet, ...)
    #[arg(long, env = "ANCHOR_PROVIDER_URL")]
    pub provider_url: Option<String>,

    /// Path to the payer keypair file
    #[arg(long, env = "ANCHOR_WALLET")]
    pub wallet: Option<PathBuf>,

    #[arg(long, default_value = "processed")]
    pub commitment: String,

    /// Override the program id compiled into the client
    #[arg(long)]
    pub program_id: Option<String>,

    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn provider(&self) -> Result<ProviderConfig> {
        ProviderConfig::resolve(
            self.provider_url.as_deref(),
            self.wallet.as_deref(),
            &self.commitment,
        )
    }

    pub fn program_id(&self) -> Result<Pubkey> {
        match &self.program_id {
            Some(raw) => {
                Pubkey::from_str(raw).map_err(|_| ClientError::InvalidProgramId(raw.clone()))
            }
            None => Ok(drip_rewards::ID),
        }
    }
}

/// Endpoint and signer used to submit transactions, the Rust side of
/// `AnchorProvider.env()`.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub cluster: Cluster,
    pub wallet: PathBuf,
    pub commitment: CommitmentConfig,
}

impl ProviderConfig {
    /// Read `ANCHOR_PROVIDER_URL` and `ANCHOR_WALLET` from the process
    /// environment.
    pub fn from_env() -> Result<Self> {
        let url = std::env::var("ANCHOR_PROVIDER_URL").ok();
        let wallet = std::env::var_os("ANCHOR_WALLET").map(PathBuf::from);
        Self::resolve(url.as_deref(), wallet.as_deref(), "processed")
    }

    pub fn resolve(url: Option<&str>, wallet: Option<&Path>, commitment: &str) -> Result<Self> {
        let url = url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or(ClientError::MissingProviderUrl)?;
        let wallet = wallet
            .filter(|w| !w.as_os_str().is_empty())
            .ok_or(ClientError::MissingWallet)?;

        let cluster = Cluster::from_str(url).map_err(|e| ClientError::InvalidCluster {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        let commitment = CommitmentConfig::from_str(commitment)
            .map_err(|_| ClientError::InvalidCommitment(commitment.to_string()))?;

        Ok(Self {
            cluster,
            wallet: expand_home(wallet),
            commitment,
        })
    }

    pub fn load_wallet(&self) -> Result<Keypair> {
        read_keypair_file(&self.wallet).map_err(|e| ClientError::Keypair {
            path: self.wallet.clone(),
            message: e.to_string(),
        })
    }
}

// Anchor.toml writes the wallet as "~/.config/solana/id.json"
fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), std::env::var_os("HOME")) {
        (Ok(rest), Some(home)) => PathBuf::from(home).join(rest),
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_client::solana_sdk::commitment_config::CommitmentLevel;
    use anchor_client::solana_sdk::signature::{write_keypair_file, Signer};

    #[test]
    fn resolves_custom_url_and_wallet() {
        let config = ProviderConfig::resolve(
            Some("http://127.0.0.1:8899"),
            Some(Path::new("/tmp/id.json")),
            "confirmed",
        )
        .unwrap();

        assert_eq!(config.cluster.url(), "http://127.0.0.1:8899");
        assert_eq!(config.wallet, PathBuf::from("/tmp/id.json"));
        assert_eq!(config.commitment.commitment, CommitmentLevel::Confirmed);
    }

    #[test]
    fn resolves_cluster_monikers() {
        let config =
            ProviderConfig::resolve(Some("localnet"), Some(Path::new("id.json")), "processed")
                .unwrap();
        assert_eq!(config.cluster.url(), Cluster::Localnet.url());
    }

    #[test]
    fn missing_values_are_reported() {
        let wallet = Some(Path::new("id.json"));
        let err = ProviderConfig::resolve(None, wallet, "processed").unwrap_err();
        assert!(matches!(err, ClientError::MissingProviderUrl));

        let err = ProviderConfig::resolve(Some("  "), wallet, "processed").unwrap_err();
        assert!(matches!(err, ClientError::MissingProviderUrl));

        let err = ProviderConfig::resolve(Some("localnet"), None, "processed").unwrap_err();
        assert!(matches!(err, ClientError::MissingWallet));
    }

    #[test]
    fn bad_cluster_and_commitment_are_rejected() {
        let wallet = Some(Path::new("id.json"));
        let err = ProviderConfig::resolve(Some("not a url"), wallet, "processed").unwrap_err();
        assert!(matches!(err, ClientError::InvalidCluster { .. }));

        let err = ProviderConfig::resolve(Some("localnet"), wallet, "eventually").unwrap_err();
        assert!(matches!(err, ClientError::InvalidCommitment(_)));
    }

    #[test]
    fn loads_wallet_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("id.json");
        let keypair = Keypair::new();
        write_keypair_file(&keypair, &path).unwrap();

        let config =
            ProviderConfig::resolve(Some("localnet"), Some(path.as_path()), "processed").unwrap();
        assert_eq!(config.load_wallet().unwrap().pubkey(), keypair.pubkey());
    }

    #[test]
    fn unreadable_wallet_names_the_path() {
        let wallet = Path::new("/nonexistent/id.json");
        let config = ProviderConfig::resolve(Some("localnet"), Some(wallet), "processed").unwrap();
        let err = config.load_wallet().unwrap_err();
        assert!(err.to_string().contains("/nonexistent/id.json"));
    }

    #[test]
    fn program_id_defaults_to_compiled_id() {
        let cli = CliConfig::parse_from(["drip-rewards"]);
        assert_eq!(cli.program_id().unwrap(), drip_rewards::ID);

        let other = Pubkey::new_unique();
        let other_id = other.to_string();
        let cli = CliConfig::parse_from(["drip-rewards", "--program-id", other_id.as_str()]);
        assert_eq!(cli.program_id().unwrap(), other);

        let cli = CliConfig::parse_from(["drip-rewards", "--program-id", "nope"]);
        assert!(matches!(cli.program_id(), Err(ClientError::InvalidProgramId(_))));
    }
}
