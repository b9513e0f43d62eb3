use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::constants::POOL_SEED;
use crate::state::HybridPoolConfig;

#[derive(Accounts)]
pub struct InitPool<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Pool PDA: one per authority
    #[account(
        init,
        payer = authority,
        space = HybridPoolConfig::LEN,
        seeds = [POOL_SEED, authority.key().as_ref()],
        bump,
    )]
    pub pool: Account<'info, HybridPoolConfig>,

    /// Pricing mint; decimals are checked in the handler
    pub mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitPool>, collections: Vec<Pubkey>, price: u64) -> Result<()> {
    HybridPoolConfig::validate_new(&collections, price, ctx.accounts.mint.decimals)?;

    msg!(
        "init_pool: authority={} mint={} price={} collections={}",
        ctx.accounts.authority.key(),
        ctx.accounts.mint.key(),
        price,
        collections.len()
    );

    ctx.accounts.pool.set_inner(HybridPoolConfig {
        authority: ctx.accounts.authority.key(),
        bump: ctx.bumps.pool,
        token: ctx.accounts.mint.key(),
        price,
        collections,
        initiated: false,
        items: vec![],
    });

    Ok(())
}
