//! Complex numbers over `f64`.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};
use core::str::FromStr;

use crate::algebra::element::FieldElement;
use crate::algebra::field::{Field, FieldOps};
use crate::algebra::group::Group;
use crate::algebra::law::{LawEq, FLOAT_TOLERANCE};
use crate::error::{Error, Result};

/// A complex number `re + im·i`.
///
/// Displays as `a+bi` or `a-bi` and parses back from the same form.
///
/// # Example
///
/// ```
/// use fieldkit::{Complex, FieldElement};
///
/// let z: Complex = "3-4i".parse().unwrap();
/// assert_eq!(z, Complex::new(3.0, -4.0));
/// assert_eq!(z.to_string(), "3-4i");
/// assert_eq!(z.conj(), Complex::new(3.0, 4.0));
///
/// let w = z.inv().unwrap();
/// assert_eq!(w, Complex::new(0.12, 0.16));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 0.0);
    pub const I: Self = Self::new(0.0, 1.0);

    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Parse `a`, `bi`, `a+bi` or `a-bi`. See the [`FromStr`] impl.
    pub fn parse(text: &str) -> Result<Self> {
        text.parse()
    }

    /// Complex conjugate `re - im·i`.
    pub fn conj(&self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// `re² + im²`.
    pub fn norm_sqr(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Modulus `|z|`.
    pub fn abs(&self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Natural logarithm `(ln |z|, acos(re / |z|))`.
    ///
    /// The imaginary part comes from `acos`, so it always lies in `[0, π]`.
    /// This is the principal logarithm only for `im >= 0`; for `im < 0` the
    /// result is the logarithm of the conjugate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LogarithmOfZero`] for `0 + 0i`.
    pub fn ln(&self) -> Result<Self> {
        // hypot rather than norm_sqr, which over- or underflows far sooner
        let r = self.abs();
        if r == 0.0 {
            return Err(Error::LogarithmOfZero);
        }
        let cos_arg = (self.re / r).clamp(-1.0, 1.0);
        Ok(Self::new(r.ln(), cos_arg.acos()))
    }

    /// Whether `1/z` overflows. Such values, zero included, have no
    /// representable inverse and count as the field's zero.
    fn is_negligible(&self) -> bool {
        self.re.abs().max(self.im.abs()).recip().is_infinite()
    }

    /// Exponential `e^re (cos im + i sin im)`.
    pub fn exp(&self) -> Self {
        let r = self.re.exp();
        Self::new(r * self.im.cos(), r * self.im.sin())
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Self::new(re, 0.0)
    }
}

impl LawEq for Complex {
    fn law_eq(&self, other: &Self) -> bool {
        if self == other {
            return true;
        }
        let diff = Complex::new(self.re - other.re, self.im - other.im).abs();
        let scale = self.abs().max(other.abs()).max(1.0);
        diff <= FLOAT_TOLERANCE * scale
    }
}

// ============================================================================
// Groups and field
// ============================================================================

/// Componentwise addition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComplexAdd;

/// Complex multiplication on the non-zero complex numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComplexMul;

impl Group for ComplexAdd {
    type Elem = Complex;

    fn identity(&self) -> Complex {
        Complex::ZERO
    }

    fn op(&self, a: &Complex, b: &Complex) -> Complex {
        Complex::new(a.re + b.re, a.im + b.im)
    }

    fn inverse(&self, a: &Complex) -> Complex {
        Complex::new(-a.re, -a.im)
    }

    fn is_identity(&self, a: &Complex) -> bool {
        a.is_negligible()
    }
}

impl Group for ComplexMul {
    type Elem = Complex;

    fn identity(&self) -> Complex {
        Complex::ONE
    }

    fn op(&self, a: &Complex, b: &Complex) -> Complex {
        Complex::new(a.re * b.re - a.im * b.im, a.re * b.im + a.im * b.re)
    }

    /// `conj(a) / |a|²`, scaled by the larger component first so that the
    /// squared magnitude stays near 1.
    fn inverse(&self, a: &Complex) -> Complex {
        let m = a.re.abs().max(a.im.abs());
        let (re, im) = (a.re / m, a.im / m);
        let r = re * re + im * im;
        Complex::new(re / r / m, -im / r / m)
    }

    fn contains(&self, a: &Complex) -> bool {
        !a.is_negligible()
    }
}

pub type ComplexField = Field<ComplexAdd, ComplexMul>;

pub const COMPLEX_FIELD: ComplexField = Field::new(ComplexAdd, ComplexMul);

impl FieldElement for Complex {
    type Field = ComplexField;

    fn field(&self) -> &ComplexField {
        &COMPLEX_FIELD
    }
}

// ============================================================================
// Formatting and parsing
// ============================================================================

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.im.is_sign_negative() { '-' } else { '+' };
        write!(f, "{}{}{}i", self.re, sign, self.im.abs())
    }
}

/// Index of the sign separating the real and imaginary terms: the last `+`
/// or `-` that is neither leading nor part of an exponent.
fn term_split(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    (1..bytes.len())
        .rev()
        .find(|&i| matches!(bytes[i], b'+' | b'-') && !matches!(bytes[i - 1], b'e' | b'E'))
}

fn parse_real(text: &str, input: &str) -> Result<f64> {
    text.trim()
        .parse()
        .map_err(|_| Error::parse("complex", input))
}

/// Parse a signed imaginary term such as `+4i`, `-i`, `i` or `+4`.
fn parse_imag(term: &str, input: &str) -> Result<f64> {
    let term = term.trim();
    let (term, has_unit) = match term.strip_suffix('i') {
        Some(rest) => (rest, true),
        None => (term, false),
    };
    let (negative, body) = match term.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, term.strip_prefix('+').unwrap_or(term)),
    };
    let body = body.trim();

    let coeff = if body.is_empty() {
        if !has_unit {
            return Err(Error::parse("complex", input));
        }
        1.0
    } else {
        parse_real(body, input)?
    };
    Ok(if negative { -coeff } else { coeff })
}

/// Parses `a`, `bi`, `a+bi` and `a-bi`, where a missing coefficient before
/// `i` means 1 (`"2-i"` is `2 - 1i`). A second term without the trailing
/// `i` is still read as the imaginary part (`"3+4"` is `3 + 4i`).
impl FromStr for Complex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        if text.is_empty() {
            return Err(Error::parse("complex", s));
        }

        match term_split(text) {
            Some(at) => Ok(Complex::new(
                parse_real(&text[..at], s)?,
                parse_imag(&text[at..], s)?,
            )),
            None if text.ends_with('i') => Ok(Complex::new(0.0, parse_imag(text, s)?)),
            None => Ok(Complex::new(parse_real(text, s)?, 0.0)),
        }
    }
}

// ============================================================================
// Standard arithmetic operators
// ============================================================================

impl Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        COMPLEX_FIELD.add(&self, &rhs)
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        COMPLEX_FIELD.sub(&self, &rhs)
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        COMPLEX_FIELD.mul(&self, &rhs)
    }
}

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self {
        COMPLEX_FIELD.neg(&self)
    }
}

#[cfg(feature = "rand")]
impl rand::distributions::Distribution<Complex> for rand::distributions::Standard {
    /// Both parts uniform in `[0, 1)`.
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Complex {
        Complex::new(rng.gen(), rng.gen())
    }
}
