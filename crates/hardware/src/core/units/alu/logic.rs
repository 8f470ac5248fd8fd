//! ALU bitwise operations.

/// `a & b`
pub const fn and(a: i32, b: i32) -> i32 {
    a & b
}

/// `a | b`
pub const fn or(a: i32, b: i32) -> i32 {
    a | b
}

/// `a ^ b`
pub const fn xor(a: i32, b: i32) -> i32 {
    a ^ b
}
