use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("provider url is not set (use --provider-url or ANCHOR_PROVIDER_URL)")]
    MissingProviderUrl,

    #[error("wallet is not set (use --wallet or ANCHOR_WALLET)")]
    MissingWallet,

    #[error("invalid cluster {url:?}: {reason}")]
    InvalidCluster { url: String, reason: String },

    #[error("invalid commitment {0:?}")]
    InvalidCommitment(String),

    #[error("invalid program id {0:?}")]
    InvalidProgramId(String),

    #[error("failed to read keypair {path}: {message}")]
    Keypair { path: PathBuf, message: String },

    #[error("rpc call failed: {0}")]
    Rpc(#[from] anchor_client::ClientError),
}

pub type Result<T> = std::result::Result<T, ClientError>;
