use core::fmt::Debug;

use super::group::Group;
use super::law::{self, LawEq};
use crate::error::{Error, Result};

/// The operations generic numeric code needs from a field of scalars.
///
/// Written against this trait, matrix or polynomial code runs unchanged over
/// every field in the crate.
///
/// # Example
///
/// ```
/// use fieldkit::{FieldOps, FiniteField, FLOAT_FIELD};
///
/// fn dot<F: FieldOps>(f: &F, xs: &[F::Elem], ys: &[F::Elem]) -> F::Elem {
///     xs.iter()
///         .zip(ys)
///         .fold(f.zero(), |acc, (x, y)| f.add(&acc, &f.mul(x, y)))
/// }
///
/// assert_eq!(dot(&FLOAT_FIELD, &[1.0, 2.0], &[3.0, 4.0]), 11.0);
///
/// let f7 = FiniteField::with_modulus(7).unwrap();
/// assert_eq!(dot(&f7, &[3, 5], &[4, 6]), 0); // 12 + 30 = 42 = 0 mod 7
/// ```
pub trait FieldOps {
    type Elem: Clone + Debug + PartialEq + LawEq;

    /// Additive identity.
    fn zero(&self) -> Self::Elem;

    /// Multiplicative identity.
    fn one(&self) -> Self::Elem;

    fn add(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem;

    fn sub(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem;

    fn neg(&self, a: &Self::Elem) -> Self::Elem;

    fn mul(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem;

    /// Multiplicative inverse.
    ///
    /// Fails with [`Error::DivisionUndefined`] for zero.
    fn inv(&self, a: &Self::Elem) -> Result<Self::Elem>;

    /// `a / b`.
    ///
    /// Fails with [`Error::DivisionUndefined`] when `b` is zero.
    fn div(&self, a: &Self::Elem, b: &Self::Elem) -> Result<Self::Elem>;

    /// `a^n`. Negative exponents invert first, so they fail for zero.
    fn power(&self, a: &Self::Elem, n: i64) -> Result<Self::Elem>;

    fn is_zero(&self, a: &Self::Elem) -> bool {
        *a == self.zero()
    }

    fn is_one(&self, a: &Self::Elem) -> bool {
        *a == self.one()
    }
}

/// A field assembled from an additive and a multiplicative group over the
/// same elements.
///
/// The multiplicative group is expected to reject zero through
/// [`Group::contains`]; `inv` and `div` check this before inverting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<A, M> {
    additive: A,
    multiplicative: M,
}

impl<A, M> Field<A, M> {
    pub const fn new(additive: A, multiplicative: M) -> Self {
        Self {
            additive,
            multiplicative,
        }
    }

    pub const fn additive(&self) -> &A {
        &self.additive
    }

    pub const fn multiplicative(&self) -> &M {
        &self.multiplicative
    }
}

impl<A, M> Field<A, M>
where
    A: Group,
    M: Group<Elem = A::Elem>,
{
    fn ensure_invertible(&self, a: &A::Elem) -> Result<()> {
        if self.additive.is_identity(a) {
            return Err(Error::DivisionUndefined);
        }
        if !self.multiplicative.contains(a) {
            return Err(Error::NotInvertible {
                element: format!("{a:?}"),
            });
        }
        Ok(())
    }

    /// Run every group law on the samples plus left distributivity.
    ///
    /// Multiplicative inverse is only checked for samples that have one.
    pub fn check_field_laws(&self, a: &A::Elem, b: &A::Elem, c: &A::Elem) -> Result<()> {
        let add = &self.additive;
        add.check_closure(a, b)?;
        add.check_associativity(a, b, c)?;
        add.check_identity(a)?;
        add.check_inverse(a)?;

        let mul = &self.multiplicative;
        mul.check_associativity(a, b, c)?;
        mul.check_identity(a)?;
        if !self.is_zero(a) && mul.contains(a) {
            mul.check_inverse(a)?;
        }
        if mul.contains(a) && mul.contains(b) {
            mul.check_closure(a, b)?;
        }

        law::distributivity(|x, y| self.add(x, y), |x, y| self.mul(x, y), a, b, c)
    }
}

impl<A, M> FieldOps for Field<A, M>
where
    A: Group,
    M: Group<Elem = A::Elem>,
{
    type Elem = A::Elem;

    fn zero(&self) -> A::Elem {
        self.additive.identity()
    }

    fn one(&self) -> A::Elem {
        self.multiplicative.identity()
    }

    fn is_zero(&self, a: &A::Elem) -> bool {
        self.additive.is_identity(a)
    }

    fn is_one(&self, a: &A::Elem) -> bool {
        self.multiplicative.is_identity(a)
    }

    fn add(&self, a: &A::Elem, b: &A::Elem) -> A::Elem {
        self.additive.op(a, b)
    }

    fn sub(&self, a: &A::Elem, b: &A::Elem) -> A::Elem {
        self.additive.inv_op(a, b)
    }

    fn neg(&self, a: &A::Elem) -> A::Elem {
        self.additive.inverse(a)
    }

    fn mul(&self, a: &A::Elem, b: &A::Elem) -> A::Elem {
        self.multiplicative.op(a, b)
    }

    fn inv(&self, a: &A::Elem) -> Result<A::Elem> {
        self.ensure_invertible(a)?;
        Ok(self.multiplicative.inverse(a))
    }

    fn div(&self, a: &A::Elem, b: &A::Elem) -> Result<A::Elem> {
        self.ensure_invertible(b)?;
        Ok(self.multiplicative.inv_op(a, b))
    }

    fn power(&self, a: &A::Elem, n: i64) -> Result<A::Elem> {
        if n >= 0 {
            return Ok(self.multiplicative.power(a, n.unsigned_abs()));
        }
        let inv = self.inv(a)?;
        Ok(self.multiplicative.power(&inv, n.unsigned_abs()))
    }
}
