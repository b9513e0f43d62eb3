use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, Mint, Token, TokenAccount, Transfer},
};
use mpl_bubblegum::instructions::TransferInstructionArgs;
use mpl_bubblegum::utils::get_asset_id;

use crate::bubblegum::{transfer_leaf, verify_leaf_metadata, TreeAccounts};
use crate::constants::{NFT_STORE_SEED, POOL_SEED};
use crate::state::{AnchorMetadataArgs, HybridPoolConfig, NftStore};

#[derive(Accounts)]
#[instruction(args: SwapCnftArgs)]
pub struct SwapCnft<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(mut)]
    pub pool: Account<'info, HybridPoolConfig>,

    #[account(
        init,
        payer = authority,
        space = NftStore::LEN,
        seeds = [NFT_STORE_SEED, pool.key().as_ref(), &[args.pos]],
        bump,
    )]
    pub nft_store: Account<'info, NftStore>,

    #[account(constraint = pool.token == mint.key())]
    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = pool,
    )]
    pub pool_token_account: Account<'info, TokenAccount>,

    /// Payout ATA (auto-create if missing)
    #[account(
        init_if_needed,
        payer = authority,
        associated_token::mint = mint,
        associated_token::authority = authority,
    )]
    pub authority_token_account: Account<'info, TokenAccount>,

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
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

impl<'info> SwapCnft<'info> {
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
pub struct SwapCnftArgs {
    pub root: [u8; 32],
    pub data_hash: [u8; 32],
    pub creator_hash: [u8; 32],
    pub nonce: u64,
    pub index: u32,
    pub pos: u8,
    pub metadata: AnchorMetadataArgs,
}

pub fn handler<'info>(
    ctx: Context<'_, '_, '_, 'info, SwapCnft<'info>>,
    args: SwapCnftArgs,
) -> Result<()> {
    ctx.accounts.pool.ensure_open()?;
    ctx.accounts.pool.hold(args.pos)?;
    verify_leaf_metadata(args.metadata, &args.data_hash, &ctx.accounts.pool.collections)?;

    // leaf: user -> pool custody
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

    // tokens: pool vault -> user, signed by the pool PDA
    let amount = ctx.accounts.pool.unit_price(ctx.accounts.mint.decimals)?;
    let pool_authority = ctx.accounts.pool.authority;
    let pool_bump = [ctx.accounts.pool.bump];
    let seeds = &[POOL_SEED, pool_authority.as_ref(), &pool_bump];
    let signer = &[&seeds[..]];

    let cpi_accounts = Transfer {
        from: ctx.accounts.pool_token_account.to_account_info(),
        to: ctx.accounts.authority_token_account.to_account_info(),
        authority: ctx.accounts.pool.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        cpi_accounts,
        signer,
    );
    token::transfer(cpi_ctx, amount)?;

    let asset_id = get_asset_id(&ctx.accounts.merkle_tree.key(), args.nonce);
    ctx.accounts.nft_store.set_inner(NftStore {
        asset_id,
        bump: ctx.bumps.nft_store,
    });

    msg!(
        "swap_cnft_to_token: user={} pos={} asset_id={} amount={}",
        ctx.accounts.authority.key(),
        args.pos,
        asset_id,
        amount
    );

    Ok(())
}
