use anchor_lang::prelude::*;

use crate::errors::CounterError;
use crate::events::CounterIncremented;
use crate::state::Counter;

#[derive(Accounts)]
pub struct Increment<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        has_one = authority @ CounterError::Unauthorized
    )]
    pub counter: Account<'info, Counter>,
}

pub fn increment(ctx: Context<Increment>) -> Result<()> {
    let counter = &mut ctx.accounts.counter;
    counter.count = counter.checked_increment().ok_or(CounterError::Overflow)?;

    emit!(CounterIncremented {
        counter: counter.key(),
        authority: counter.authority,
        count: counter.count,
    });

    Ok(())
}
