/// Checked integer helpers.
///
/// This module provides floor division and floor modulo for `i64`. Both round
/// toward negative infinity, so the remainder always takes the sign of the
/// divisor and `a == b * floor_div(a, b) + floor_mod(a, b)` holds for every
/// `b != 0` where the quotient is representable.
pub mod num;
