use anchor_lang::prelude::*;
use mpl_bubblegum::instructions::TransferInstructionArgs;
use mpl_bubblegum::utils::get_asset_id;

use crate::bubblegum::{transfer_leaf, verify_leaf_metadata, TreeAccounts};
use crate::constants::NFT_STORE_SEED;
use crate::state::{AnchorMetadataArgs, HybridPoolConfig, NftStore};

#[derive(Accounts)]
#[instruction(args: DepositCnftArgs)]
pub struct DepositCnft<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(mut, has_one = authority)]
    pub pool: Account<'info, HybridPoolConfig>,

    /// Custody PDA for the leaf at `args.pos`
    #[account(
        init,
        payer = authority,
        space = NftStore::LEN,
        seeds = [NFT_STORE_SEED, pool.key().as_ref(), &[args.pos]],
        bump,
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

impl<'info> DepositCnft<'info> {
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
pub struct DepositCnftArgs {
    pub root: [u8; 32],
    pub data_hash: [u8; 32],
    pub creator_hash: [u8; 32],
    pub nonce: u64,
    pub index: u32,
    pub pos: u8,
    pub metadata: AnchorMetadataArgs,
}

pub fn handler<'info>(
    ctx: Context<'_, '_, '_, 'info, DepositCnft<'info>>,
    args: DepositCnftArgs,
) -> Result<()> {
    ctx.accounts.pool.ensure_accepting_deposits()?;
    ctx.accounts.pool.hold(args.pos)?;
    verify_leaf_metadata(args.metadata, &args.data_hash, &ctx.accounts.pool.collections)?;

    transfer_leaf(
        &ctx.accounts.tree(),
        &ctx.accounts.authority.to_account_info(),
        &ctx.accounts.nft_store.to_account_info(),
        TransferInstructionArgs {
            root: args.root,
            data_hash: args.data_hash,
            creator_hash: args.creator_hash,
            nonce: args.nonce,
            index: args.index,
        },
        ctx.remaining_accounts,
        &[],
    )?;

    let asset_id = get_asset_id(&ctx.accounts.merkle_tree.key(), args.nonce);
    ctx.accounts.nft_store.set_inner(NftStore {
        asset_id,
        bump: ctx.bumps.nft_store,
    });

    msg!(
        "deposit_cnft: pos={} asset_id={} held={}",
        args.pos,
        asset_id,
        ctx.accounts.pool.items.len()
    );

    Ok(())
}
