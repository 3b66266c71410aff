use anchor_lang::prelude::*;

use crate::constants::COUNTER_SEED;
use crate::events::CounterInitialized;
use crate::state::Counter;

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The counter owner; pays rent for the new account and becomes its
    /// authority.
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        init,
        payer = user,
        space = 8 + Counter::INIT_SPACE,
        seeds = [user.key().as_ref(), COUNTER_SEED],
        bump
    )]
    pub counter: Account<'info, Counter>,

    pub system_program: Program<'info, System>,
}

/// Creates the per-user counter at its PDA. Re-running this for the same user
/// fails in the system program because the account already exists.
pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let counter = &mut ctx.accounts.counter;
    counter.authority = ctx.accounts.user.key();
    counter.count = 0;
    counter.bump = ctx.bumps.counter;

    emit!(CounterInitialized {
        counter: counter.key(),
        authority: counter.authority,
    });

    Ok(())
}
