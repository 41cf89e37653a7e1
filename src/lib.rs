//! Group and field abstractions with interchangeable scalar fields.
//!
//! A [`Group`] is a structure value exposing `identity`, `op` and `inverse`;
//! a [`Field`] pairs an additive and a multiplicative group over the same
//! elements. Generic numeric code is written once against [`FieldOps`] and
//! runs over real numbers ([`FLOAT_FIELD`]), integers modulo `n`
//! ([`FiniteField::with_modulus`]), complex numbers ([`COMPLEX_FIELD`]) and
//! rationals ([`RATIO_FIELD`]). The [`law`] module checks the group axioms on
//! sample elements.

pub mod algebra;
pub mod error;
pub mod structures;
pub mod utils;

pub use algebra::element::FieldElement;
pub use algebra::field::{Field, FieldOps};
pub use algebra::group::Group;
pub use algebra::law::{self, LawEq};

pub use error::{Error, Result};

pub use structures::complex::{Complex, ComplexField, COMPLEX_FIELD};
pub use structures::finite::{FiniteField, MAX_MODULUS};
pub use structures::float::{FloatField, FLOAT_FIELD};
pub use structures::ratio::{Ratio, RatioField, RATIO_FIELD};
pub use utils::{gcd, is_prime, lcm};
