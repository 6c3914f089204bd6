//! Integer arithmetic used by the pool formulas.
//!
//! Inputs are `u64`; every product is taken in `u128` and every quotient is
//! floored.  No floating point is involved anywhere in accounting.

mod checked;
mod mul_div;
mod sqrt;

pub use checked::CheckedArithmetic;
pub use mul_div::{mul_div_floor, mul_div_wide};
pub use sqrt::isqrt;
