//! Modular arithmetic over an alphabet of size `n`.
//!
//! Operands must already lie in `[0, n)`; callers validate them. Results lie
//! in `[0, n)`. Subtraction never goes through a negative intermediate, so
//! there is no remainder-sign pitfall to correct.

/// Returns `(a + b) mod n`.
///
/// # Parameters
/// - `a`, `b`: Operands in `[0, n)`.
/// - `n`: Modulus, must be non-zero.
pub(crate) fn add_mod(a: usize, b: usize, n: usize) -> usize {
    (a + b) % n
}

/// Returns `(a - b) mod n` as a non-negative remainder.
///
/// Equivalent to `((a - b) mod n + n) mod n` on signed integers.
///
/// # Parameters
/// - `a`: Minuend in `[0, n)`.
/// - `b`: Subtrahend in `[0, n)`.
/// - `n`: Modulus, must be non-zero.
pub(crate) fn sub_mod(a: usize, b: usize, n: usize) -> usize {
    (a + n - b) % n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_mod_wraps() {
        assert_eq!(add_mod(25, 1, 26), 0);
        assert_eq!(add_mod(22, 11, 26), 7);
        assert_eq!(add_mod(0, 0, 26), 0);
    }

    #[test]
    fn test_sub_mod_never_negative() {
        assert_eq!(sub_mod(0, 1, 26), 25);
        assert_eq!(sub_mod(3, 14, 26), 15);
        assert_eq!(sub_mod(7, 7, 26), 0);
    }

    #[test]
    fn test_sub_inverts_add() {
        let n = 26;
        for a in 0..n {
            for b in 0..n {
                assert_eq!(sub_mod(add_mod(a, b, n), b, n), a);
            }
        }
    }

    #[test]
    fn test_modulus_one() {
        assert_eq!(add_mod(0, 0, 1), 0);
        assert_eq!(sub_mod(0, 0, 1), 0);
    }
}
