// Configuration constants for problem generation
pub const MIN_FACTOR: i64 = 2;
pub const MAX_FACTOR: i64 = 9;
// Upper bound on the first factor when a product lands outside the result range
pub const MAX_RETRY_FACTOR: i64 = 5;

pub const FALLBACK_MIN: i64 = 1;
pub const FALLBACK_MAX: i64 = 10;

pub const DEFAULT_MIN_OPERAND: i64 = 1;
pub const DEFAULT_MAX_OPERAND: i64 = 100;
pub const DEFAULT_MIN_RESULT: i64 = 1;
pub const DEFAULT_MAX_RESULT: i64 = 100;

pub const MIN_BOUND: i64 = 1;
pub const MAX_BOUND: i64 = 999;

pub const MAX_GENERATION_ATTEMPTS: usize = 10;
pub const MAX_BATCH_SIZE: usize = 10_000;
