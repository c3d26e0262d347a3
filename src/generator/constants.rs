// Limits and defaults for expression generation
pub const DEFAULT_MAX_DIFFICULTY: u32 = 4;
pub const DEFAULT_MIN_OPERANDS: usize = 2;
pub const DEFAULT_MAX_OPERANDS: usize = 5;
// Six operands below one million keep every exact result inside i128
pub const MAX_SUPPORTED_DIFFICULTY: u32 = 6;
pub const MAX_SUPPORTED_OPERANDS: usize = 6;
pub const MAX_OPERAND_VALUE: u32 = 999_999;
pub const MAX_RESAMPLE_ATTEMPTS: usize = 100;
pub const DECIMAL_TOLERANCE: f64 = 1e-9;
