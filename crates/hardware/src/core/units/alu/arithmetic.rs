//! ALU arithmetic operations.
//!
//! Addition, subtraction and multiplication wrap on overflow. Division
//! truncates toward zero; `i32::MIN / -1` wraps to `i32::MIN`.

/// Wrapping `a + b`.
pub const fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Wrapping `a - b`.
pub const fn sub(a: i32, b: i32) -> i32 {
    a.wrapping_sub(b)
}

/// Wrapping `a * b`.
pub const fn mul(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}

/// Signed `a / b`, or `None` when `b` is zero.
pub const fn div(a: i32, b: i32) -> Option<i32> {
    if b == 0 { None } else { Some(a.wrapping_div(b)) }
}
