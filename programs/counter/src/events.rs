use anchor_lang::prelude::*;

#[event]
pub struct CounterInitialized {
    pub counter: Pubkey,
    pub authority: Pubkey,
}

#[event]
pub struct CounterIncremented {
    pub counter: Pubkey,
    pub authority: Pubkey,
    pub count: u64,
}

#[event]
pub struct CounterDecremented {
    pub counter: Pubkey,
    pub authority: Pubkey,
    pub count: u64,
}
