use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, Mint, Token, TokenAccount, Transfer},
};

use crate::state::HybridPoolConfig;

#[derive(Accounts)]
pub struct DepositTokens<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(mut, has_one = authority)]
    pub pool: Account<'info, HybridPoolConfig>,

    #[account(constraint = pool.token == mint.key())]
    pub mint: Account<'info, Mint>,

    /// Pool vault, created on the single backing deposit
    #[account(
        init,
        payer = authority,
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

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

pub fn handler(ctx: Context<DepositTokens>) -> Result<()> {
    let pool = &ctx.accounts.pool;
    pool.ensure_backable()?;

    let total_amount = pool.backing_amount(ctx.accounts.mint.decimals)?;
    msg!(
        "deposit_tokens: items={} amount={}",
        pool.items.len(),
        total_amount
    );

    let cpi_accounts = Transfer {
        from: ctx.accounts.authority_token_account.to_account_info(),
        to: ctx.accounts.pool_token_account.to_account_info(),
        authority: ctx.accounts.authority.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
    token::transfer(cpi_ctx, total_amount)?;

    ctx.accounts.pool.initiated = true;

    Ok(())
}
