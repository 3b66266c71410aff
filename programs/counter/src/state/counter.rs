use anchor_lang::prelude::*;

use crate::constants::COUNTER_SEED;

#[account]
#[derive(InitSpace)]
pub struct Counter {
    /// The only identity allowed to mutate `count`; set once at creation
    pub authority: Pubkey,

    /// Current counter value
    pub count: u64,

    /// Canonical PDA bump, persisted at initialization
    pub bump: u8,
}

impl Counter {
    /// Derives the counter PDA for an authority. Pure; anyone who knows the
    /// authority's public key can recompute it.
    pub fn find_pda(authority: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[authority.as_ref(), COUNTER_SEED], &crate::ID)
    }

    pub fn checked_increment(&self) -> Option<u64> {
        self.count.checked_add(1)
    }

    pub fn checked_decrement(&self) -> Option<u64> {
        self.count.checked_sub(1)
    }
}
