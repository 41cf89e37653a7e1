/// Check if `n` is a prime number.
///
/// Uses trial division up to sqrt(n). Suitable for validating
/// moduli at construction, not for high-performance primality testing.
pub const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut i = 3;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Greatest common divisor by Euclid's algorithm.
///
/// `gcd(a, 0) == a`. The sign of the result follows the remainders, so pass
/// absolute values when a non-negative divisor is needed.
///
/// ```
/// use fieldkit::gcd;
///
/// assert_eq!(gcd(12, 18), 6);
/// assert_eq!(gcd(7, 0), 7);
/// ```
pub const fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// [`gcd`] over `u128`, for fractions whose parts are products of `i64`s.
pub(crate) const fn gcd_u128(a: u128, b: u128) -> u128 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Least common multiple, `a * b / gcd(a, b)`, with `lcm(0, 0) == 0`.
///
/// ```
/// use fieldkit::lcm;
///
/// assert_eq!(lcm(4, 6), 12);
/// ```
pub const fn lcm(a: i64, b: i64) -> i64 {
    if a == 0 && b == 0 {
        return 0;
    }
    a / gcd(a, b) * b
}

/// Inverse of `a` modulo `n`, if `a` and `n` are coprime.
pub fn mod_inverse(a: u64, n: u64) -> Option<u64> {
    let m = n as i128;
    let (g, x, _) = egcd((a % n) as i128, m);
    if g != 1 {
        return None;
    }
    Some(x.rem_euclid(m) as u64)
}

/// Returns `(g, x, y)` such that `g = gcd(a, b)` and `a*x + b*y = g`.
fn egcd(a: i128, b: i128) -> (i128, i128, i128) {
    if b == 0 {
        (a, 1, 0)
    } else {
        let (g, x1, y1) = egcd(b, a % b);
        (g, y1, x1 - (a / b) * y1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_primes() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(5));
        assert!(!is_prime(6));
        assert!(is_prime(7));
        assert!(!is_prime(9));
        assert!(is_prime(11));
        assert!(is_prime(13));
    }

    #[test]
    fn larger_numbers() {
        assert!(!is_prime(25));
        assert!(!is_prime(1000));
        assert!(is_prime(104729)); // 10000th prime
        assert!(is_prime(998244353));
    }

    #[test]
    fn gcd_and_lcm() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(18, 12), 6);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(17, 5), 1);
        assert_eq!(gcd(-12, 18).abs(), 6);

        assert_eq!(lcm(4, 6), 12);
        assert_eq!(lcm(3, 5), 15);
        assert_eq!(lcm(0, 5), 0);
        assert_eq!(lcm(0, 0), 0);
    }

    #[test]
    fn modular_inverses() {
        assert_eq!(mod_inverse(2, 5), Some(3));
        assert_eq!(mod_inverse(3, 7), Some(5));
        assert_eq!(mod_inverse(1, 2), Some(1));
        assert_eq!(mod_inverse(2, 6), None);
        assert_eq!(mod_inverse(0, 5), None);
        for x in 1..17 {
            let y = mod_inverse(x, 17).unwrap();
            assert_eq!(x * y % 17, 1);
        }
    }
}
