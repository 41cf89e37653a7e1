//! Rational numbers as pairs of `i64`.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};
use core::str::FromStr;

use crate::algebra::element::FieldElement;
use crate::algebra::field::{Field, FieldOps};
use crate::algebra::group::Group;
use crate::algebra::law::LawEq;
use crate::error::{Error, Result};
use crate::utils::gcd_u128;

/// A fraction `numer / denom`.
///
/// Arithmetic does not reduce its results; call [`reduce`](Ratio::reduce)
/// for lowest terms. Results are computed in `i128` and only reduced when the
/// unreduced form does not fit in `i64`. A value that does not fit even in
/// lowest terms panics, it never wraps. Equality compares values, so `2/4 == 1/2`, while
/// [`numer`](Ratio::numer) and [`denom`](Ratio::denom) expose the stored form.
///
/// # Example
///
/// ```
/// use fieldkit::Ratio;
///
/// let a = Ratio::new(1, 2).unwrap();
/// let b = Ratio::new(1, 3).unwrap();
/// let sum = a + b;
/// assert_eq!((sum.numer(), sum.denom()), (5, 6));
///
/// let r: Ratio = "6/8".parse().unwrap();
/// assert_eq!(r.reduce().to_string(), "3/4");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Ratio {
    numer: i64,
    denom: i64,
}

impl Ratio {
    pub const ZERO: Self = Self::raw(0, 1);
    pub const ONE: Self = Self::raw(1, 1);

    /// Build `numer / denom` without reducing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroDenominator`] if `denom == 0`.
    pub fn new(numer: i64, denom: i64) -> Result<Self> {
        if denom == 0 {
            return Err(Error::ZeroDenominator);
        }
        Ok(Self::raw(numer, denom))
    }

    pub const fn from_integer(n: i64) -> Self {
        Self::raw(n, 1)
    }

    const fn raw(numer: i64, denom: i64) -> Self {
        Self { numer, denom }
    }

    /// Parse `a` or `a/b`. See the [`FromStr`] impl.
    pub fn parse(text: &str) -> Result<Self> {
        text.parse()
    }

    pub const fn numer(&self) -> i64 {
        self.numer
    }

    pub const fn denom(&self) -> i64 {
        self.denom
    }

    pub const fn is_zero(&self) -> bool {
        self.numer == 0
    }

    /// Lowest terms with a positive denominator.
    ///
    /// # Panics
    ///
    /// If the reduced denominator is `2^63`, e.g. for `1 / i64::MIN`.
    pub fn reduce(&self) -> Self {
        let (numer, denom) = lowest_terms(self.numer as i128, self.denom as i128);
        fit(numer, denom)
    }

    pub fn to_f64(&self) -> f64 {
        self.numer as f64 / self.denom as f64
    }
}

fn lowest_terms(numer: i128, denom: i128) -> (i128, i128) {
    let g = gcd_u128(numer.unsigned_abs(), denom.unsigned_abs()) as i128;
    let sign = denom.signum();
    (sign * numer / g, sign * denom / g)
}

fn fit(numer: i128, denom: i128) -> Ratio {
    match (i64::try_from(numer), i64::try_from(denom)) {
        (Ok(n), Ok(d)) => Ratio::raw(n, d),
        _ => panic!("ratio {numer}/{denom} does not fit in i64 parts"),
    }
}

/// Keep an `i128` result unreduced when it fits, else reduce it first.
fn narrow(numer: i128, denom: i128) -> Ratio {
    if let (Ok(n), Ok(d)) = (i64::try_from(numer), i64::try_from(denom)) {
        return Ratio::raw(n, d);
    }
    let (numer, denom) = lowest_terms(numer, denom);
    fit(numer, denom)
}

impl PartialEq for Ratio {
    fn eq(&self, other: &Self) -> bool {
        self.numer as i128 * other.denom as i128 == other.numer as i128 * self.denom as i128
    }
}

impl Eq for Ratio {}

impl LawEq for Ratio {
    fn law_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl From<i64> for Ratio {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

// ============================================================================
// Groups and field
// ============================================================================

/// `a/b + c/d = (ad + bc) / bd`, unreduced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatioAdd;

/// `a/b × c/d = ac / bd`, unreduced, on the non-zero ratios.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatioMul;

impl Group for RatioAdd {
    type Elem = Ratio;

    fn identity(&self) -> Ratio {
        Ratio::ZERO
    }

    fn op(&self, a: &Ratio, b: &Ratio) -> Ratio {
        let (ad, bc) = (a.numer as i128 * b.denom as i128, a.denom as i128 * b.numer as i128);
        // Only overflows when every part is +-2^63
        let Some(numer) = ad.checked_add(bc) else {
            panic!("ratio sum {a} + {b} does not fit in i128");
        };
        narrow(numer, a.denom as i128 * b.denom as i128)
    }

    fn inverse(&self, a: &Ratio) -> Ratio {
        narrow(-(a.numer as i128), a.denom as i128)
    }
}

impl Group for RatioMul {
    type Elem = Ratio;

    fn identity(&self) -> Ratio {
        Ratio::ONE
    }

    fn op(&self, a: &Ratio, b: &Ratio) -> Ratio {
        narrow(a.numer as i128 * b.numer as i128, a.denom as i128 * b.denom as i128)
    }

    fn inverse(&self, a: &Ratio) -> Ratio {
        Ratio::raw(a.denom, a.numer)
    }

    fn contains(&self, a: &Ratio) -> bool {
        !a.is_zero()
    }
}

pub type RatioField = Field<RatioAdd, RatioMul>;

pub const RATIO_FIELD: RatioField = Field::new(RatioAdd, RatioMul);

impl FieldElement for Ratio {
    type Field = RatioField;

    fn field(&self) -> &RatioField {
        &RATIO_FIELD
    }
}

// ============================================================================
// Formatting and parsing
// ============================================================================

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}

/// Parses `a` or `a/b` with signed integer parts; the denominator defaults
/// to 1.
impl FromStr for Ratio {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let int = |t: &str| t.trim().parse::<i64>().map_err(|_| Error::parse("ratio", s));
        match s.split_once('/') {
            Some((numer, denom)) => Ratio::new(int(numer)?, int(denom)?),
            None => Ok(Ratio::from_integer(int(s)?)),
        }
    }
}

// ============================================================================
// Standard arithmetic operators
// ============================================================================

impl Add for Ratio {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        RATIO_FIELD.add(&self, &rhs)
    }
}

impl Sub for Ratio {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        RATIO_FIELD.sub(&self, &rhs)
    }
}

impl Mul for Ratio {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        RATIO_FIELD.mul(&self, &rhs)
    }
}

impl Neg for Ratio {
    type Output = Self;

    fn neg(self) -> Self {
        RATIO_FIELD.neg(&self)
    }
}

// ============================================================================
// Optional integrations
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Ratio {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Ratio {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "rand")]
impl rand::distributions::Distribution<Ratio> for rand::distributions::Standard {
    /// Numerator in `[-100, 100]`, denominator in `[1, 100]`.
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Ratio {
        Ratio::raw(rng.gen_range(-100..=100), rng.gen_range(1..=100))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(n: i64, d: i64) -> Ratio {
        Ratio::new(n, d).unwrap()
    }

    #[test]
    fn arithmetic_is_unreduced() {
        let sum = r(1, 2) + r(1, 4);
        assert_eq!((sum.numer(), sum.denom()), (6, 8));
        let prod = r(2, 3) * r(3, 4);
        assert_eq!((prod.numer(), prod.denom()), (6, 12));
        let diff = r(1, 2) - r(1, 2);
        assert_eq!((diff.numer(), diff.denom()), (0, 4));
        assert_eq!(-r(1, 2), r(-1, 2));
    }

    #[test]
    fn value_equality() {
        assert_eq!(r(2, 4), r(1, 2));
        assert_eq!(r(-1, 2), r(1, -2));
        assert_eq!(r(0, 5), Ratio::ZERO);
        assert_ne!(r(1, 2), r(1, 3));
    }

    #[test]
    fn reduce_to_lowest_terms() {
        let x = r(6, 8).reduce();
        assert_eq!((x.numer(), x.denom()), (3, 4));
        let y = r(3, -6).reduce();
        assert_eq!((y.numer(), y.denom()), (-1, 2));
        let z = r(0, -7).reduce();
        assert_eq!((z.numer(), z.denom()), (0, 1));
        let w = r(-10, -5).reduce();
        assert_eq!((w.numer(), w.denom()), (2, 1));
    }

    #[test]
    fn reduce_extreme_parts() {
        let min = Ratio::parse("-9223372036854775808").unwrap().reduce();
        assert_eq!((min.numer(), min.denom()), (i64::MIN, 1));
        let one = r(i64::MIN, i64::MIN).reduce();
        assert_eq!((one.numer(), one.denom()), (1, 1));
        let half = r(i64::MIN, -2).reduce();
        assert_eq!((half.numer(), half.denom()), (1 << 62, 1));
    }

    #[test]
    #[should_panic(expected = "does not fit in i64")]
    fn reduce_panics_when_denominator_is_two_to_63() {
        r(1, i64::MIN).reduce();
    }

    #[test]
    fn overflowing_results_are_reduced() {
        let big = r(1 << 40, 1 << 40);
        let prod = big * big;
        assert_eq!((prod.numer(), prod.denom()), (1, 1));

        let tiny = r(1, 1 << 40);
        let sum = tiny + tiny;
        assert_eq!((sum.numer(), sum.denom()), (1, 1 << 39));

        let sum = r(i64::MIN, 4) + r(i64::MIN, 4);
        assert_eq!(sum, Ratio::from(i64::MIN / 2));
        assert_eq!(-r(i64::MIN, 2), Ratio::from(1 << 62));
    }

    #[test]
    fn power_up_to_the_i64_boundary() {
        // 3^39 < 2^63 < 3^40
        let x = RATIO_FIELD.power(&r(2, 3), 39).unwrap();
        assert_eq!((x.numer(), x.denom()), (1 << 39, 4_052_555_153_018_976_267));
    }

    #[test]
    #[should_panic(expected = "does not fit in i64")]
    fn power_past_the_i64_boundary_panics() {
        let _ = RATIO_FIELD.power(&r(2, 3), 40);
    }

    #[test]
    #[should_panic(expected = "does not fit in i64")]
    fn negating_i64_min_panics() {
        let _ = -Ratio::from(i64::MIN);
    }

    #[test]
    fn zero_denominator_fails_fast() {
        assert_eq!(Ratio::new(1, 0), Err(Error::ZeroDenominator));
        assert_eq!(Ratio::parse("3/0"), Err(Error::ZeroDenominator));
    }

    #[test]
    fn division_by_zero_is_undefined() {
        assert_eq!(RATIO_FIELD.div(&r(3, 4), &Ratio::ZERO), Err(Error::DivisionUndefined));
        assert_eq!(RATIO_FIELD.inv(&r(0, 9)), Err(Error::DivisionUndefined));
        assert_eq!(r(0, 2).inv(), Err(Error::DivisionUndefined));
    }

    #[test]
    fn inverse_swaps_parts() {
        let x = RATIO_FIELD.inv(&r(3, 4)).unwrap();
        assert_eq!((x.numer(), x.denom()), (4, 3));
        assert_eq!(RATIO_FIELD.div(&r(1, 2), &r(3, 4)), Ok(r(2, 3)));
        assert_eq!(RATIO_FIELD.power(&r(2, 3), -2), Ok(r(9, 4)));
    }

    #[test]
    fn parse_forms() {
        assert_eq!(Ratio::parse("3/4").map(|x| (x.numer, x.denom)), Ok((3, 4)));
        assert_eq!(Ratio::parse("-3/4").map(|x| (x.numer, x.denom)), Ok((-3, 4)));
        assert_eq!(Ratio::parse("7").map(|x| (x.numer, x.denom)), Ok((7, 1)));
        assert_eq!(Ratio::parse(" 5 / -2 ").map(|x| (x.numer, x.denom)), Ok((5, -2)));
    }

    #[test]
    fn parse_rejects_garbage() {
        for bad in ["", "/", "1/", "/2", "a/b", "1.5", "1/2/3", "3+4i"] {
            assert!(
                matches!(Ratio::parse(bad), Err(Error::Parse { kind: "ratio", .. })),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn display_round_trips() {
        for x in [r(3, 4), r(-3, 4), r(5, 1), r(6, 8), r(0, 1), r(7, -3)] {
            let text = x.to_string();
            let back = Ratio::parse(&text).unwrap();
            assert_eq!((back.numer(), back.denom()), (x.numer(), x.denom()));
            let (a, b) = (back.reduce(), x.reduce());
            assert_eq!((a.numer(), a.denom()), (b.numer(), b.denom()));
        }
        assert_eq!(r(-3, 4).to_string(), "-3/4");
        assert_eq!(Ratio::from(5).to_string(), "5/1");
    }

    #[test]
    fn to_float() {
        assert_eq!(r(3, 4).to_f64(), 0.75);
        assert_eq!(r(-1, 8).to_f64(), -0.125);
    }

    #[test]
    fn laws_on_samples() {
        let samples = [r(0, 1), r(1, 2), r(-3, 4), r(5, 1), r(2, -7)];
        for a in samples {
            for b in samples {
                for c in samples {
                    assert_eq!(RATIO_FIELD.check_field_laws(&a, &b, &c), Ok(()));
                }
            }
        }
    }
}
