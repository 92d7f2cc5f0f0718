// Presentation constants for rendered problems
pub const BLANK: &str = "(     )";
pub const FALLBACK_PROBLEM: &str = "1 + 1 =";
pub const FALLBACK_ANSWER: i64 = 2;
