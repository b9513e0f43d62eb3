// maximum number of verified collections a pool accepts
pub const MAX_COLLECTIONS: usize = 3;

// positions are u8, so a pool can never hold more than this
pub const MAX_ITEMS_IN_POOL: usize = 256;

// smallest whole-token price accepted by init_pool
pub const MIN_PRICE: u64 = 1000;

pub const POOL_SEED: &[u8] = b"pool";
pub const NFT_STORE_SEED: &[u8] = b"cnft";
pub const CLAIM_COUPON_SEED: &[u8] = b"cnft_claim_coupon";
