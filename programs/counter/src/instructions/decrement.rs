use anchor_lang::prelude::*;

use crate::errors::CounterError;
use crate::events::CounterDecremented;
use crate::state::Counter;

#[derive(Accounts)]
pub struct Decrement<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        has_one = authority @ CounterError::Unauthorized
    )]
    pub counter: Account<'info, Counter>,
}

pub fn decrement(ctx: Context<Decrement>) -> Result<()> {
    let counter = &mut ctx.accounts.counter;
    counter.count = counter.checked_decrement().ok_or(CounterError::Underflow)?;

    emit!(CounterDecremented {
        counter: counter.key(),
        authority: counter.authority,
        count: counter.count,
    });

    Ok(())
}
