// Codomain of the registry: only whole results in this range are kept
pub const MIN_RESULT: u32 = 0;
pub const MAX_RESULT: u32 = 100;

// Operands are single decimal digits
pub const MAX_OPERAND: u8 = 9;
