use super::field::FieldOps;
use crate::error::Result;

/// An element that knows the field it belongs to.
///
/// Every operation forwards to [`field`](FieldElement::field), so code
/// holding only elements can do field arithmetic without threading the
/// field through.
///
/// ```
/// use fieldkit::{FieldElement, Ratio};
///
/// let half = Ratio::new(1, 2).unwrap();
/// let third = Ratio::new(1, 3).unwrap();
/// assert_eq!(half.add(&third), Ratio::new(5, 6).unwrap());
/// assert_eq!(half.div(&third).unwrap(), Ratio::new(3, 2).unwrap());
/// ```
pub trait FieldElement: Sized {
    type Field: FieldOps<Elem = Self> + 'static;

    fn field(&self) -> &Self::Field;

    fn add(&self, rhs: &Self) -> Self {
        self.field().add(self, rhs)
    }

    fn sub(&self, rhs: &Self) -> Self {
        self.field().sub(self, rhs)
    }

    fn mul(&self, rhs: &Self) -> Self {
        self.field().mul(self, rhs)
    }

    fn div(&self, rhs: &Self) -> Result<Self> {
        self.field().div(self, rhs)
    }

    fn neg(&self) -> Self {
        self.field().neg(self)
    }

    fn inv(&self) -> Result<Self> {
        self.field().inv(self)
    }

    fn power(&self, n: i64) -> Result<Self> {
        self.field().power(self, n)
    }
}
