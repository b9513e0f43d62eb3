use anchor_lang::{prelude::*, solana_program::sysvar};
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, Mint, Token, TokenAccount, Transfer},
};

use crate::constants::CLAIM_COUPON_SEED;
use crate::state::{draw_target, CnftClaimCoupon, HybridPoolConfig};

#[derive(Accounts)]
pub struct SwapTokenToCnft<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(mut)]
    pub pool: Account<'info, HybridPoolConfig>,

    #[account(constraint = pool.token == mint.key())]
    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = pool,
    )]
    pub pool_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = authority,
    )]
    pub authority_token_account: Account<'info, TokenAccount>,

    /// One outstanding coupon per user
    #[account(
        init,
        payer = authority,
        space = CnftClaimCoupon::LEN,
        seeds = [CLAIM_COUPON_SEED, authority.key().as_ref()],
        bump,
    )]
    pub cnft_claim_coupon: Account<'info, CnftClaimCoupon>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    /// CHECK: Address constrained to the SlotHashes sysvar
    #[account(address = sysvar::slot_hashes::id())]
    pub recent_slot_hashes: UncheckedAccount<'info>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<SwapTokenToCnft>) -> Result<()> {
    let pool = &ctx.accounts.pool;
    pool.ensure_drawable()?;

    let amount = pool.unit_price(ctx.accounts.mint.decimals)?;

    let cpi_accounts = Transfer {
        from: ctx.accounts.authority_token_account.to_account_info(),
        to: ctx.accounts.pool_token_account.to_account_info(),
        authority: ctx.accounts.authority.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    let target = {
        let data = ctx.accounts.recent_slot_hashes.try_borrow_data()?;
        draw_target(&data, Clock::get()?.unix_timestamp)?
    };
    // the drawn position leaves the pool now so no other swap can draw it
    let coupon = ctx.accounts.pool.draw(target)?;

    ctx.accounts.cnft_claim_coupon.set_inner(CnftClaimCoupon {
        pool: ctx.accounts.pool.key(),
        bump: ctx.bumps.cnft_claim_coupon,
        coupon,
    });

    msg!(
        "swap_token_to_cnft: user={} amount={} target={} coupon={} remaining={}",
        ctx.accounts.authority.key(),
        amount,
        target,
        coupon,
        ctx.accounts.pool.items.len()
    );

    Ok(())
}
