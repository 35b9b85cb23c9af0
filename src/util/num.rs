/// Divides `a` by `b`, rounding toward negative infinity.
///
/// ## Returns
/// - `Some(quotient)` on success.
/// - `None` if `b` is zero or the quotient overflows (`i64::MIN / -1`).
///
/// ## Example
/// ```
/// use meeny::util::num::checked_floor_div;
///
/// assert_eq!(checked_floor_div(7, 2), Some(3));
/// assert_eq!(checked_floor_div(-7, 2), Some(-4));
/// assert_eq!(checked_floor_div(7, -2), Some(-4));
/// assert_eq!(checked_floor_div(1, 0), None);
/// ```
#[must_use]
pub const fn checked_floor_div(a: i64, b: i64) -> Option<i64> {
    let Some(quotient) = a.checked_div(b) else {
        return None;
    };
    let remainder = a % b;
    if remainder != 0 && ((remainder < 0) != (b < 0)) {
        quotient.checked_sub(1)
    } else {
        Some(quotient)
    }
}

/// Remainder of the floor division of `a` by `b`; the result has the sign of
/// `b`.
///
/// ## Returns
/// - `Some(remainder)` on success.
/// - `None` if `b` is zero. Every remainder fits in an `i64`, so
///   `i64::MIN % -1` is `Some(0)`.
///
/// ## Example
/// ```
/// use meeny::util::num::checked_floor_mod;
///
/// assert_eq!(checked_floor_mod(7, 3), Some(1));
/// assert_eq!(checked_floor_mod(-7, 3), Some(2));
/// assert_eq!(checked_floor_mod(7, -3), Some(-2));
/// assert_eq!(checked_floor_mod(7, 0), None);
/// ```
#[must_use]
pub const fn checked_floor_mod(a: i64, b: i64) -> Option<i64> {
    if b == -1 {
        return Some(0);
    }
    let Some(remainder) = a.checked_rem(b) else {
        return None;
    };
    if remainder != 0 && ((remainder < 0) != (b < 0)) {
        Some(remainder + b)
    } else {
        Some(remainder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_identity_holds() {
        let values = [-17, -9, -3, -1, 0, 1, 2, 5, 9, 23, i64::MAX, i64::MIN + 1];
        for &a in &values {
            for &b in &values {
                if b == 0 {
                    continue;
                }
                let q = checked_floor_div(a, b).unwrap();
                let r = checked_floor_mod(a, b).unwrap();
                assert_eq!(q.wrapping_mul(b).wrapping_add(r), a, "a = {a}, b = {b}");
                assert!(r == 0 || (r < 0) == (b < 0), "a = {a}, b = {b}, r = {r}");
            }
        }
    }

    #[test]
    fn zero_divisor() {
        assert_eq!(checked_floor_div(0, 0), None);
        assert_eq!(checked_floor_mod(-4, 0), None);
    }

    #[test]
    fn min_over_minus_one() {
        assert_eq!(checked_floor_div(i64::MIN, -1), None);
        assert_eq!(checked_floor_mod(i64::MIN, -1), Some(0));
        assert_eq!(checked_floor_mod(-7, -1), Some(0));
    }
}
