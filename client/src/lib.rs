pub mod client;
pub mod config;
pub mod error;
pub mod logger;

pub use client::{initialize_instruction, DripRewardsClient};
pub use config::{CliConfig, ProviderConfig};
pub use error::{ClientError, Result};
