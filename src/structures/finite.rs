//! Integers modulo `n`.
//!
//! Residues are plain `u64` values in `[0, n)`. Each modulus gets its own
//! field instance, built by [`FiniteField::with_modulus`], which precomputes
//! the multiplicative inverse of every invertible residue.

use crate::algebra::field::Field;
use crate::algebra::group::Group;
use crate::error::{Error, Result};
use crate::utils::{is_prime, mod_inverse};

/// Largest modulus [`FiniteField::with_modulus`] accepts. The inverse table
/// holds one entry per residue, so this bounds it at 16 MiB.
pub const MAX_MODULUS: u64 = 1 << 20;

/// `(Z/nZ, +)` with identity `0` and inverse `n - x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModularAdd {
    modulus: u64,
}

/// The units of `Z/nZ` under multiplication.
///
/// For prime `n` this is every non-zero residue. For composite `n`, residues
/// sharing a factor with `n` are outside the group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModularMul {
    modulus: u64,
    /// `inverses[x]` is the inverse of `x`, or `None` if `x` is not a unit.
    inverses: Vec<Option<u64>>,
}

impl ModularMul {
    fn new(modulus: u64) -> Self {
        let mut inverses = vec![None; modulus as usize];
        for x in 1..modulus {
            inverses[x as usize] = mod_inverse(x, modulus);
        }
        Self { modulus, inverses }
    }

    fn lookup(&self, x: u64) -> Option<u64> {
        self.inverses.get(x as usize).copied().flatten()
    }
}

impl Group for ModularAdd {
    type Elem = u64;

    #[inline]
    fn identity(&self) -> u64 {
        0
    }

    #[inline]
    fn op(&self, a: &u64, b: &u64) -> u64 {
        ((*a as u128 + *b as u128) % self.modulus as u128) as u64
    }

    #[inline]
    fn inverse(&self, a: &u64) -> u64 {
        (self.modulus - a % self.modulus) % self.modulus
    }

    fn contains(&self, a: &u64) -> bool {
        *a < self.modulus
    }

    fn is_identity(&self, a: &u64) -> bool {
        a % self.modulus == 0
    }
}

impl Group for ModularMul {
    type Elem = u64;

    #[inline]
    fn identity(&self) -> u64 {
        1 % self.modulus
    }

    #[inline]
    fn op(&self, a: &u64, b: &u64) -> u64 {
        ((*a as u128 * *b as u128) % self.modulus as u128) as u64
    }

    /// Table lookup. Residues outside the group map to `0`, which is never
    /// an inverse; [`Field`] rejects them before calling this.
    #[inline]
    fn inverse(&self, a: &u64) -> u64 {
        self.lookup(a % self.modulus).unwrap_or(0)
    }

    /// Residues are taken modulo `n`, so `7` is a unit mod 5.
    fn contains(&self, a: &u64) -> bool {
        self.lookup(a % self.modulus).is_some()
    }

    fn is_identity(&self, a: &u64) -> bool {
        a % self.modulus == 1 % self.modulus
    }
}

/// Integers modulo `n`. A field exactly when `n` is prime.
pub type FiniteField = Field<ModularAdd, ModularMul>;

impl Field<ModularAdd, ModularMul> {
    /// Build the field of integers modulo `modulus`.
    ///
    /// The inverse table is complete when this returns. A composite modulus is
    /// accepted (the result is a ring, and its non-units fail to invert) but
    /// logged as a warning.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidModulus`] if `modulus < 2` or
    /// `modulus > MAX_MODULUS`.
    ///
    /// # Example
    ///
    /// ```
    /// use fieldkit::{FieldOps, FiniteField};
    ///
    /// let f5 = FiniteField::with_modulus(5).unwrap();
    /// assert_eq!(f5.add(&3, &4), 2);
    /// assert_eq!(f5.neg(&2), 3);
    /// assert_eq!(f5.inv(&2).unwrap(), 3);
    /// assert_eq!(f5.div(&1, &3).unwrap(), 2);
    /// ```
    pub fn with_modulus(modulus: u64) -> Result<Self> {
        if !(2..=MAX_MODULUS).contains(&modulus) {
            return Err(Error::InvalidModulus(modulus));
        }
        if !is_prime(modulus) {
            tracing::warn!(modulus, "modulus is not prime, non-units will not be invertible");
        }

        let multiplicative = ModularMul::new(modulus);
        tracing::debug!(
            modulus,
            units = multiplicative.inverses.iter().flatten().count(),
            "built inverse table"
        );

        Ok(Field::new(ModularAdd { modulus }, multiplicative))
    }

    pub fn modulus(&self) -> u64 {
        self.additive().modulus
    }

    /// Reduce an integer to its residue.
    pub fn element(&self, value: u64) -> u64 {
        value % self.modulus()
    }

    /// Whether the modulus is prime, i.e. every non-zero residue is invertible.
    pub fn is_field(&self) -> bool {
        is_prime(self.modulus())
    }

    /// The precomputed `(x, x⁻¹)` pairs, in increasing `x`.
    pub fn inverse_table(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.multiplicative()
            .inverses
            .iter()
            .enumerate()
            .filter_map(|(x, inv)| inv.map(|inv| (x as u64, inv)))
    }
}
