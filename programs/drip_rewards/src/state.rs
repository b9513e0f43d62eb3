use anchor_lang::prelude::*;
use arrayref::array_ref;
use mpl_bubblegum::types::{
    Collection as BubblegumCollection, Creator as BubblegumCreator, MetadataArgs,
    TokenProgramVersion as BubblegumTokenProgramVersion,
    TokenStandard as BubblegumTokenStandard, UseMethod as BubblegumUseMethod,
    Uses as BubblegumUses,
};

use crate::constants::{MAX_COLLECTIONS, MAX_ITEMS_IN_POOL, MIN_PRICE};
use crate::errors::DripError;

/* ---------------------- ACCOUNTS ---------------------- */

/// Pool PDA, one per authority.
#[account]
#[derive(Default)]
pub struct HybridPoolConfig {
    pub authority: Pubkey,
    pub bump: u8,
    pub token: Pubkey,
    pub price: u64,
    pub collections: Vec<Pubkey>,
    pub initiated: bool,
    // positions currently backed by an NftStore
    pub items: Vec<u8>,
}

impl HybridPoolConfig {
    pub const LEN: usize =
        8 + // discriminator
        32 + // authority
        1 + // bump
        32 + // token
        8 + // price
        4 + (32 * MAX_COLLECTIONS) + // collections
        1 + // initiated
        4 + MAX_ITEMS_IN_POOL; // items

    /// Checks on `init_pool` arguments and the pricing mint.
    pub fn validate_new(collections: &[Pubkey], price: u64, decimals: u8) -> Result<()> {
        require!(
            collections.len() <= MAX_COLLECTIONS,
            DripError::TooManyCollections
        );
        require!(price >= MIN_PRICE, DripError::PriceTooLow);
        // prices are whole tokens
        require!(decimals != 0, DripError::InvalidMintDecimals);
        Ok(())
    }

    /// The authority may only add leaves before the token backing lands.
    pub fn ensure_accepting_deposits(&self) -> Result<()> {
        require!(!self.initiated, DripError::PoolAlreadyInitiated);
        Ok(())
    }

    pub fn ensure_backable(&self) -> Result<()> {
        self.ensure_accepting_deposits()?;
        require!(!self.items.is_empty(), DripError::NoCnftsInPool);
        Ok(())
    }

    /// Swaps in either direction need a backed pool.
    pub fn ensure_open(&self) -> Result<()> {
        require!(self.initiated, DripError::PoolNotInitiated);
        Ok(())
    }

    pub fn ensure_drawable(&self) -> Result<()> {
        self.ensure_open()?;
        require!(!self.items.is_empty(), DripError::NoCnftsInPool);
        Ok(())
    }

    /// Base units of `token` paid for one cNFT.
    pub fn unit_price(&self, decimals: u8) -> Result<u64> {
        base_units(self.price, 1, decimals)
    }

    /// Base units needed to back every held cNFT.
    pub fn backing_amount(&self, decimals: u8) -> Result<u64> {
        base_units(self.price, self.items.len() as u64, decimals)
    }

    pub fn hold(&mut self, pos: u8) -> Result<()> {
        require!(self.items.len() < MAX_ITEMS_IN_POOL, DripError::PoolFull);
        require!(!self.items.contains(&pos), DripError::DuplicatePosition);
        self.items.push(pos);
        Ok(())
    }

    /// Remove and return the held position nearest to `target`. Ties go to
    /// the position deposited first.
    pub fn draw(&mut self, target: u8) -> Result<u8> {
        let (index, _) = self
            .items
            .iter()
            .enumerate()
            .min_by_key(|(_, item)| item.abs_diff(target))
            .ok_or(DripError::NoCnftsInPool)?;
        Ok(self.items.remove(index))
    }
}

#[account]
#[derive(Default)]
pub struct NftStore {
    pub asset_id: Pubkey,
    pub bump: u8,
}

impl NftStore {
    pub const LEN: usize = 8 + 32 + 1;
}

/// A drawn position waiting to be claimed from `pool`.
#[account]
#[derive(Default)]
pub struct CnftClaimCoupon {
    pub pool: Pubkey,
    pub bump: u8,
    pub coupon: u8,
}

impl CnftClaimCoupon {
    pub const LEN: usize = 8 + 32 + 1 + 1;

    pub fn redeemable_in(&self, pool: &Pubkey) -> bool {
        self.pool == *pool
    }
}

/// `price` whole tokens times `count`, scaled to the mint's base units.
pub fn base_units(price: u64, count: u64, decimals: u8) -> Result<u64> {
    10u64
        .checked_pow(decimals as u32)
        .and_then(|scale| price.checked_mul(scale))
        .and_then(|per_unit| per_unit.checked_mul(count))
        .ok_or_else(|| error!(DripError::MathOverflow))
}

/// Pseudo-random draw target in `1..=255` from raw SlotHashes sysvar data.
///
/// SlotHashes serializes as a u64 entry count followed by `(slot, hash)`
/// pairs, newest first. The first eight bytes of the newest hash are mixed
/// with the clock so two draws in the same slot still differ across time.
/// This is not a secure source of randomness.
pub fn draw_target(slot_hashes: &[u8], unix_timestamp: i64) -> Result<u8> {
    require!(slot_hashes.len() >= 8 + 8 + 32, DripError::SlotHashesUnavailable);
    let entries = u64::from_le_bytes(*array_ref![slot_hashes, 0, 8]);
    require!(entries > 0, DripError::SlotHashesUnavailable);

    let recent = u64::from_le_bytes(*array_ref![slot_hashes, 16, 8]);
    let seed = recent.wrapping_sub(unix_timestamp as u64);
    Ok((seed % 255) as u8 + 1)
}

/* ---------------------- METADATA ---------------------- */

// Mirrors of the Bubblegum metadata types so leaf metadata can be passed as
// an Anchor instruction argument and rehashed on chain.

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct AnchorMetadataArgs {
    /// The name of the asset
    pub name: String,
    /// The symbol for the asset
    pub symbol: String,
    /// URI pointing to JSON representing the asset
    pub uri: String,
    /// Royalty basis points that goes to creators in secondary sales (0-10000)
    pub seller_fee_basis_points: u16,
    pub primary_sale_happened: bool,
    pub is_mutable: bool,
    pub edition_nonce: Option<u8>,
    pub token_standard: Option<TokenStandard>,
    pub collection: Option<Collection>,
    pub uses: Option<Uses>,
    pub token_program_version: TokenProgramVersion,
    pub creators: Vec<Creator>,
}

impl From<AnchorMetadataArgs> for MetadataArgs {
    fn from(args: AnchorMetadataArgs) -> Self {
        MetadataArgs {
            name: args.name,
            symbol: args.symbol,
            uri: args.uri,
            seller_fee_basis_points: args.seller_fee_basis_points,
            primary_sale_happened: args.primary_sale_happened,
            is_mutable: args.is_mutable,
            edition_nonce: args.edition_nonce,
            token_standard: args.token_standard.map(Into::into),
            collection: args.collection.map(Into::into),
            uses: args.uses.map(Into::into),
            token_program_version: args.token_program_version.into(),
            creators: args.creators.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenStandard {
    NonFungible,
    FungibleAsset,
    Fungible,
    NonFungibleEdition,
}

impl From<TokenStandard> for BubblegumTokenStandard {
    fn from(standard: TokenStandard) -> Self {
        match standard {
            TokenStandard::NonFungible => BubblegumTokenStandard::NonFungible,
            TokenStandard::FungibleAsset => BubblegumTokenStandard::FungibleAsset,
            TokenStandard::Fungible => BubblegumTokenStandard::Fungible,
            TokenStandard::NonFungibleEdition => BubblegumTokenStandard::NonFungibleEdition,
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Collection {
    pub verified: bool,
    pub key: Pubkey,
}

impl From<Collection> for BubblegumCollection {
    fn from(collection: Collection) -> Self {
        BubblegumCollection {
            verified: collection.verified,
            key: collection.key,
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Creator {
    pub address: Pubkey,
    pub verified: bool,
    /// The percentage share.
    ///
    /// The value is a percentage, not basis points.
    pub share: u8,
}

impl From<Creator> for BubblegumCreator {
    fn from(creator: Creator) -> Self {
        BubblegumCreator {
            address: creator.address,
            verified: creator.verified,
            share: creator.share,
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Uses {
    pub use_method: UseMethod,
    pub remaining: u64,
    pub total: u64,
}

impl From<Uses> for BubblegumUses {
    fn from(uses: Uses) -> Self {
        BubblegumUses {
            use_method: uses.use_method.into(),
            remaining: uses.remaining,
            total: uses.total,
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum UseMethod {
    Burn,
    Multiple,
    Single,
}

impl From<UseMethod> for BubblegumUseMethod {
    fn from(method: UseMethod) -> Self {
        match method {
            UseMethod::Burn => BubblegumUseMethod::Burn,
            UseMethod::Multiple => BubblegumUseMethod::Multiple,
            UseMethod::Single => BubblegumUseMethod::Single,
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenProgramVersion {
    Original,
    Token2022,
}

impl From<TokenProgramVersion> for BubblegumTokenProgramVersion {
    fn from(version: TokenProgramVersion) -> Self {
        match version {
            TokenProgramVersion::Original => BubblegumTokenProgramVersion::Original,
            TokenProgramVersion::Token2022 => BubblegumTokenProgramVersion::Token2022,
        }
    }
}
