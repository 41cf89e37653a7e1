use core::fmt::Debug;

use super::law::{self, LawEq};
use crate::error::Result;

/// A group structure over `Self::Elem`.
///
/// The group is a value (not the element type) so that structures with
/// parameters, such as integers modulo `n`, can carry them.
///
/// Laws (checked by the `check_*` helpers):
/// - closure: `contains(op(a, b))` for `a`, `b` in the group
/// - associativity: `op(op(a, b), c) == op(a, op(b, c))`
/// - identity: `op(identity(), a) == a`
/// - inverse: `op(a, inverse(a)) == identity()`
pub trait Group {
    type Elem: Clone + Debug + PartialEq + LawEq;

    /// Identity element `e`.
    fn identity(&self) -> Self::Elem;

    /// Group operation.
    fn op(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem;

    /// Inverse element. Only defined for elements accepted by
    /// [`contains`](Group::contains).
    fn inverse(&self, a: &Self::Elem) -> Self::Elem;

    /// Whether `a` belongs to the group. Multiplicative groups of a field
    /// exclude zero.
    fn contains(&self, _a: &Self::Elem) -> bool {
        true
    }

    /// Whether `a` acts as the identity. Structures whose elements have
    /// several representations of the identity override this.
    fn is_identity(&self, a: &Self::Elem) -> bool {
        *a == self.identity()
    }

    /// `op(a, inverse(b))`.
    fn inv_op(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem {
        self.op(a, &self.inverse(b))
    }

    /// `x` composed with itself `n` times, using square-and-multiply.
    /// `power(x, 0)` is the identity.
    fn power(&self, x: &Self::Elem, n: u64) -> Self::Elem {
        let mut base = x.clone();
        let mut result = self.identity();

        let mut e = n;
        while e > 0 {
            if e & 1 == 1 {
                result = self.op(&result, &base);
            }
            e >>= 1;
            if e > 0 {
                base = self.op(&base, &base);
            }
        }
        result
    }

    fn check_closure(&self, a: &Self::Elem, b: &Self::Elem) -> Result<()> {
        law::closure(|x| self.contains(x), |x, y| self.op(x, y), a, b)
    }

    fn check_associativity(&self, a: &Self::Elem, b: &Self::Elem, c: &Self::Elem) -> Result<()> {
        law::associativity(|x, y| self.op(x, y), a, b, c)
    }

    fn check_identity(&self, a: &Self::Elem) -> Result<()> {
        law::identity(|x, y| self.op(x, y), &self.identity(), a)
    }

    fn check_inverse(&self, a: &Self::Elem) -> Result<()> {
        law::inverse(|x, y| self.op(x, y), a, &self.inverse(a), &self.identity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    /// Integers under addition, used to exercise the provided methods.
    struct Integers;

    impl Group for Integers {
        type Elem = i64;

        fn identity(&self) -> i64 {
            0
        }

        fn op(&self, a: &i64, b: &i64) -> i64 {
            a + b
        }

        fn inverse(&self, a: &i64) -> i64 {
            -a
        }
    }

    /// Subtraction is not associative and has no two-sided identity.
    struct Broken;

    impl Group for Broken {
        type Elem = i64;

        fn identity(&self) -> i64 {
            0
        }

        fn op(&self, a: &i64, b: &i64) -> i64 {
            a - b
        }

        fn inverse(&self, a: &i64) -> i64 {
            *a
        }
    }

    #[test]
    fn power_is_repeated_operation() {
        let g = Integers;
        assert_eq!(g.power(&7, 0), 0);
        assert_eq!(g.power(&7, 1), 7);
        assert_eq!(g.power(&7, 13), 91);
        assert_eq!(g.power(&-3, 64), -192);
    }

    #[test]
    fn power_adds_exponents() {
        let g = Integers;
        for m in 0..10 {
            for n in 0..10 {
                assert_eq!(g.power(&5, m + n), g.op(&g.power(&5, m), &g.power(&5, n)));
            }
        }
    }

    #[test]
    fn inv_op_is_subtraction() {
        assert_eq!(Integers.inv_op(&10, &4), 6);
    }

    #[test]
    fn self_checks_pass_for_integers() {
        let g = Integers;
        assert!(g.check_closure(&1, &2).is_ok());
        assert!(g.check_associativity(&1, &2, &3).is_ok());
        assert!(g.check_identity(&5).is_ok());
        assert!(g.check_inverse(&5).is_ok());
    }

    #[test]
    fn self_checks_catch_violations() {
        let g = Broken;
        assert!(matches!(
            g.check_associativity(&1, &2, &3),
            Err(Error::AxiomViolation { law: "associativity", .. })
        ));
        // 0 - 5 != 5
        assert!(g.check_identity(&5).is_err());
        // 5 - 5 == 0 holds by accident
        assert!(g.check_inverse(&5).is_ok());
    }
}
