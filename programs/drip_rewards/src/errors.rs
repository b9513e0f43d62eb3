use anchor_lang::prelude::*;

#[error_code]
pub enum DripError {
    #[msg("Price is too low")]
    PriceTooLow,
    #[msg("Leaf metadata does not match the provided data hash")]
    InvalidDataHash,
    #[msg("cNFT collection is not accepted by this pool")]
    InvalidCollection,
    #[msg("Too many collections configured")]
    TooManyCollections,
    #[msg("No cNFTs in pool")]
    NoCnftsInPool,
    #[msg("Pool has not been backed with tokens yet")]
    PoolNotInitiated,
    #[msg("Pool has already been backed with tokens")]
    PoolAlreadyInitiated,
    #[msg("Pool cannot hold more cNFTs")]
    PoolFull,
    #[msg("Position is already held by the pool")]
    DuplicatePosition,
    #[msg("Slot hashes sysvar is empty")]
    SlotHashesUnavailable,
    #[msg("Arithmetic overflow")]
    MathOverflow,
    #[msg("Pricing mint must have non-zero decimals")]
    InvalidMintDecimals,
    #[msg("Coupon was drawn from a different pool")]
    CouponPoolMismatch,
}
