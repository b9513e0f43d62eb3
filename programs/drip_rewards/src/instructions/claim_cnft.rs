use anchor_lang::prelude::*;
use mpl_bubblegum::instructions::TransferInstructionArgs;

use crate::bubblegum::{transfer_leaf, TreeAccounts};
use crate::constants::{CLAIM_COUPON_SEED, NFT_STORE_SEED};
use crate::errors::DripError;
use crate::state::{CnftClaimCoupon, HybridPoolConfig, NftStore};

#[derive(Accounts)]
pub struct ClaimCnft<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    pub pool: Account<'info, HybridPoolConfig>,

    #[account(
        mut,
        constraint = cnft_claim_coupon.redeemable_in(&pool.key()) @ DripError::CouponPoolMismatch,
        seeds = [CLAIM_COUPON_SEED, authority.key().as_ref()],
        bump = cnft_claim_coupon.bump,
        close = authority,
    )]
    pub cnft_claim_coupon: Account<'info, CnftClaimCoupon>,

    #[account(
        mut,
        seeds = [NFT_STORE_SEED, pool.key().as_ref(), &[cnft_claim_coupon.coupon]],
        bump = nft_store.bump,
        close = authority,
    )]
    pub nft_store: Account<'info, NftStore>,

    /// CHECK: Bubblegum tree config PDA, verified via seeds
    #[account(
        seeds = [merkle_tree.key().as_ref()],
        bump,
        seeds::program = mpl_bubblegum::ID
    )]
    pub tree_authority: UncheckedAccount<'info>,
    /// CHECK: Checked in CPI
    #[account(mut)]
    pub merkle_tree: UncheckedAccount<'info>,
    /// CHECK: Checked in CPI
    pub log_wrapper: UncheckedAccount<'info>,
    /// CHECK: Address constrained to Bubblegum
    #[account(address = mpl_bubblegum::ID)]
    pub bubblegum_program: UncheckedAccount<'info>,
    /// CHECK: Checked in CPI
    pub compression_program: UncheckedAccount<'info>,
    pub system_program: Program<'info, System>,
}

impl<'info> ClaimCnft<'info> {
    fn tree(&self) -> TreeAccounts<'info> {
        TreeAccounts {
            bubblegum_program: self.bubblegum_program.to_account_info(),
            tree_config: self.tree_authority.to_account_info(),
            merkle_tree: self.merkle_tree.to_account_info(),
            log_wrapper: self.log_wrapper.to_account_info(),
            compression_program: self.compression_program.to_account_info(),
            system_program: self.system_program.to_account_info(),
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct ClaimCnftArgs {
    pub root: [u8; 32],
    pub data_hash: [u8; 32],
    pub creator_hash: [u8; 32],
    pub nonce: u64,
    pub index: u32,
}

pub fn handler<'info>(
    ctx: Context<'_, '_, '_, 'info, ClaimCnft<'info>>,
    args: ClaimCnftArgs,
) -> Result<()> {
    let pool_key = ctx.accounts.pool.key();
    let coupon = [ctx.accounts.cnft_claim_coupon.coupon];
    let store_bump = [ctx.accounts.nft_store.bump];
    let seeds = &[NFT_STORE_SEED, pool_key.as_ref(), &coupon, &store_bump];
    let signer = &[&seeds[..]];

    msg!(
        "claim_cnft: user={} pos={} asset_id={}",
        ctx.accounts.authority.key(),
        coupon[0],
        ctx.accounts.nft_store.asset_id
    );

    transfer_leaf(
        &ctx.accounts.tree(),
        &ctx.accounts.nft_store.to_account_info(),
        &ctx.accounts.authority.to_account_info(),
        TransferInstructionArgs {
            root: args.root,
            data_hash: args.data_hash,
            creator_hash: args.creator_hash,
            nonce: args.nonce,
            index: args.index,
        },
        ctx.remaining_accounts,
        signer,
    )?;

    Ok(())
}
