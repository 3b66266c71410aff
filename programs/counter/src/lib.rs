use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("BQj1XSrvSWCekExwJMPVUDEeFeW9rpzjPHPmYARbMLP5");

#[program]
pub mod counter_program {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    pub fn increment(ctx: Context<Increment>) -> Result<()> {
        instructions::increment(ctx)
    }

    pub fn decrement(ctx: Context<Decrement>) -> Result<()> {
        instructions::decrement(ctx)
    }
}
