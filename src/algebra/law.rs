//! Axiom checks for algebraic structures.
//!
//! Every check is an assertion: it returns `Ok(())` when the law holds for
//! the supplied elements and [`Error::AxiomViolation`] otherwise. Elements are
//! compared with [`LawEq`], which is exact for integer-backed types and uses a
//! relative tolerance for floating point types.
//!
//! # Example
//!
//! ```
//! use fieldkit::law;
//!
//! let add = |a: &i64, b: &i64| a + b;
//! assert!(law::associativity(add, &1, &2, &3).is_ok());
//! assert!(law::identity(add, &0, &7).is_ok());
//!
//! let sub = |a: &i64, b: &i64| a - b;
//! assert!(law::associativity(sub, &1, &2, &3).is_err());
//! ```

use core::fmt::Debug;

use crate::error::{Error, Result};

/// Relative tolerance used when comparing floating point elements.
pub const FLOAT_TOLERANCE: f64 = 1e-9;

/// Equality used by the law checks.
pub trait LawEq {
    fn law_eq(&self, other: &Self) -> bool;
}

macro_rules! exact_law_eq {
    ($($t:ty)*) => {
        $(
            impl LawEq for $t {
                #[inline]
                fn law_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

exact_law_eq!(u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize);

impl LawEq for f64 {
    fn law_eq(&self, other: &Self) -> bool {
        if self == other {
            return true;
        }
        let scale = self.abs().max(other.abs()).max(1.0);
        (self - other).abs() <= FLOAT_TOLERANCE * scale
    }
}

fn expect_eq<E: LawEq + Debug>(law: &'static str, lhs: E, rhs: E) -> Result<()> {
    if lhs.law_eq(&rhs) {
        return Ok(());
    }
    tracing::debug!(law, ?lhs, ?rhs, "law check failed");
    Err(Error::AxiomViolation {
        law,
        lhs: format!("{lhs:?}"),
        rhs: format!("{rhs:?}"),
    })
}

/// Closure: `op(a, b)` is accepted by `contains`.
pub fn closure<E, C, O>(contains: C, op: O, a: &E, b: &E) -> Result<()>
where
    E: Debug,
    C: Fn(&E) -> bool,
    O: Fn(&E, &E) -> E,
{
    let c = op(a, b);
    if contains(&c) {
        return Ok(());
    }
    tracing::debug!(law = "closure", ?a, ?b, ?c, "law check failed");
    Err(Error::AxiomViolation {
        law: "closure",
        lhs: format!("{c:?}"),
        rhs: "a member of the set".to_owned(),
    })
}

/// Associativity: `(a • b) • c == a • (b • c)`.
pub fn associativity<E, O>(op: O, a: &E, b: &E, c: &E) -> Result<()>
where
    E: LawEq + Debug,
    O: Fn(&E, &E) -> E,
{
    let lhs = op(&op(a, b), c);
    let rhs = op(a, &op(b, c));
    expect_eq("associativity", lhs, rhs)
}

/// Identity: `e • a == a`.
pub fn identity<E, O>(op: O, e: &E, a: &E) -> Result<()>
where
    E: LawEq + Clone + Debug,
    O: Fn(&E, &E) -> E,
{
    expect_eq("identity", op(e, a), a.clone())
}

/// Inverse: `a • inv_a == e`.
pub fn inverse<E, O>(op: O, a: &E, inv_a: &E, e: &E) -> Result<()>
where
    E: LawEq + Clone + Debug,
    O: Fn(&E, &E) -> E,
{
    expect_eq("inverse", op(a, inv_a), e.clone())
}

/// Left distributivity: `a * (b + c) == a * b + a * c`.
pub fn distributivity<E, A, M>(add: A, mul: M, a: &E, b: &E, c: &E) -> Result<()>
where
    E: LawEq + Debug,
    A: Fn(&E, &E) -> E,
    M: Fn(&E, &E) -> E,
{
    let lhs = mul(a, &add(b, c));
    let rhs = add(&mul(a, b), &mul(a, c));
    expect_eq("distributivity", lhs, rhs)
}

/// Homomorphism within one structure: `h(a • b) == h(a) • h(b)`.
pub fn homomorphism<E, H, O>(h: H, op: O, a: &E, b: &E) -> Result<()>
where
    E: LawEq + Debug,
    H: Fn(&E) -> E,
    O: Fn(&E, &E) -> E,
{
    homomorphism_between(h, &op, &op, a, b)
}

/// Homomorphism between two structures: `h(a ∘ b) == h(a) • h(b)` where `∘`
/// is `src_op` and `•` is `dst_op`.
pub fn homomorphism_between<S, D, H, OS, OD>(
    h: H,
    src_op: OS,
    dst_op: OD,
    a: &S,
    b: &S,
) -> Result<()>
where
    D: LawEq + Debug,
    H: Fn(&S) -> D,
    OS: Fn(&S, &S) -> S,
    OD: Fn(&D, &D) -> D,
{
    let lhs = h(&src_op(a, b));
    let rhs = dst_op(&h(a), &h(b));
    expect_eq("homomorphism", lhs, rhs)
}

/// Isomorphism within one structure: `h1` is a homomorphism on `(a, b)` and
/// `h2` is a homomorphism on `(h1(a), h1(b))`.
pub fn isomorphism<E, H1, H2, O>(h1: H1, h2: H2, op: O, a: &E, b: &E) -> Result<()>
where
    E: LawEq + Debug,
    H1: Fn(&E) -> E,
    H2: Fn(&E) -> E,
    O: Fn(&E, &E) -> E,
{
    isomorphism_between(h1, h2, &op, &op, a, b)
}

/// Isomorphism between two structures, with `h1` mapping the source into the
/// destination and `h2` mapping back.
pub fn isomorphism_between<S, D, H1, H2, OS, OD>(
    h1: H1,
    h2: H2,
    src_op: OS,
    dst_op: OD,
    a: &S,
    b: &S,
) -> Result<()>
where
    S: LawEq + Debug,
    D: LawEq + Debug,
    H1: Fn(&S) -> D,
    H2: Fn(&D) -> S,
    OS: Fn(&S, &S) -> S,
    OD: Fn(&D, &D) -> D,
{
    homomorphism_between(&h1, &src_op, &dst_op, a, b)?;
    homomorphism_between(&h2, &dst_op, &src_op, &h1(a), &h1(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(a: &i64, b: &i64) -> i64 {
        a + b
    }

    #[test]
    fn closure_under_containment() {
        let even = |x: &i64| x % 2 == 0;
        assert!(closure(even, add, &2, &4).is_ok());

        let small = |x: &i64| *x < 5;
        let err = closure(small, add, &2, &4).unwrap_err();
        assert!(matches!(err, Error::AxiomViolation { law: "closure", .. }));
    }

    #[test]
    fn associativity_reports_both_sides() {
        let sub = |a: &i64, b: &i64| a - b;
        let err = associativity(sub, &10, &4, &3).unwrap_err();
        assert_eq!(
            err,
            Error::AxiomViolation {
                law: "associativity",
                lhs: "3".into(),
                rhs: "9".into(),
            }
        );
    }

    #[test]
    fn identity_and_inverse() {
        assert!(identity(add, &0, &42).is_ok());
        assert!(identity(add, &1, &42).is_err());
        assert!(inverse(add, &42, &-42, &0).is_ok());
        assert!(inverse(add, &42, &42, &0).is_err());
    }

    #[test]
    fn multiplication_distributes_over_addition() {
        let mul = |a: &i64, b: &i64| a * b;
        assert!(distributivity(add, mul, &3, &-4, &9).is_ok());
        assert!(distributivity(mul, add, &3, &4, &9).is_err());
    }

    #[test]
    fn doubling_is_additive_homomorphism() {
        let double = |x: &i64| 2 * x;
        let square = |x: &i64| x * x;
        assert!(homomorphism(double, add, &3, &5).is_ok());
        assert!(homomorphism(square, add, &3, &5).is_err());
    }

    #[test]
    fn negation_is_its_own_inverse_isomorphism() {
        let neg = |x: &i64| -x;
        assert!(isomorphism(neg, neg, add, &3, &-8).is_ok());
    }

    #[test]
    fn exp_maps_sums_to_products() {
        let mul = |a: &f64, b: &f64| a * b;
        let addf = |a: &f64, b: &f64| a + b;
        let exp = |x: &f64| x.exp();
        let ln = |x: &f64| x.ln();
        assert!(homomorphism_between(exp, addf, mul, &0.5, &1.25).is_ok());
        assert!(isomorphism_between(exp, ln, addf, mul, &0.5, &1.25).is_ok());
    }

    #[test]
    fn float_tolerance_is_relative() {
        assert!(0.1f64.law_eq(&(0.3 - 0.2)));
        assert!(1e12f64.law_eq(&(1e12 + 1e-3)));
        assert!(!1.0f64.law_eq(&1.001));
        assert!(f64::INFINITY.law_eq(&f64::INFINITY));
        assert!(!f64::NAN.law_eq(&f64::NAN));
    }
}
