pub mod claim_cnft;
pub mod deposit_cnft;
pub mod deposit_token;
pub mod init_pool;
pub mod initialize;
pub mod swap_cnft;
pub mod swap_token_to_cnft;

pub use claim_cnft::*;
pub use deposit_cnft::*;
pub use deposit_token::*;
pub use init_pool::*;
pub use initialize::*;
pub use swap_cnft::*;
pub use swap_token_to_cnft::*;
