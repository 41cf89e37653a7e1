//! Real numbers as `f64`.

use crate::algebra::element::FieldElement;
use crate::algebra::field::Field;
use crate::algebra::group::Group;

/// `(f64, +)` with identity `0` and inverse `-x`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FloatAdd;

/// `(f64 \ {0}, ×)` with identity `1` and inverse `1/x`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FloatMul;

impl Group for FloatAdd {
    type Elem = f64;

    #[inline]
    fn identity(&self) -> f64 {
        0.0
    }

    #[inline]
    fn op(&self, a: &f64, b: &f64) -> f64 {
        a + b
    }

    #[inline]
    fn inverse(&self, a: &f64) -> f64 {
        -a
    }

    /// Zero, or subnormal enough that `1/a` overflows.
    fn is_identity(&self, a: &f64) -> bool {
        a.recip().is_infinite()
    }
}

impl Group for FloatMul {
    type Elem = f64;

    #[inline]
    fn identity(&self) -> f64 {
        1.0
    }

    #[inline]
    fn op(&self, a: &f64, b: &f64) -> f64 {
        a * b
    }

    #[inline]
    fn inverse(&self, a: &f64) -> f64 {
        a.recip()
    }

    fn contains(&self, a: &f64) -> bool {
        !a.recip().is_infinite()
    }
}

/// The real numbers. Division by `0.0` fails instead of producing infinity.
pub type FloatField = Field<FloatAdd, FloatMul>;

pub const FLOAT_FIELD: FloatField = Field::new(FloatAdd, FloatMul);

impl FieldElement for f64 {
    type Field = FloatField;

    fn field(&self) -> &FloatField {
        &FLOAT_FIELD
    }
}
