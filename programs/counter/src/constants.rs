pub const COUNTER_SEED: &[u8] = b"counter";
