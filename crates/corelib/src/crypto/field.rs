//! Arithmetic over the BN254 scalar field.
//!
//! Elements are kept as reduced `BigUint` values. Every constructor either
//! reduces (`new`, `from_bytes_le_mod_order`) or rejects non-canonical input
//! (`from_canonical`, `from_bytes_le`, `from_bytes_be`), so an `Fp` is always
//! in `[0, p)`.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub};

use num_bigint::BigUint;
use num_traits::{One, Zero};
use once_cell::sync::Lazy;

use crate::errors::HashError;

/// p = 21888242871839275222246405745257275088548364400416034343698204186575808495617
const MODULUS_HEX: &str = "30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001";

/// Bit length of the modulus.
pub const MODULUS_BITS: u64 = 254;

/// Fixed serialized width of one element: ceil(254 / 8).
pub const ELEMENT_BYTES: usize = 32;

static MODULUS: Lazy<BigUint> = Lazy::new(|| {
    BigUint::parse_bytes(MODULUS_HEX.as_bytes(), 16).expect("modulus literal is valid hex")
});

/// The field modulus.
pub fn modulus() -> &'static BigUint {
    &MODULUS
}

/// An element of the BN254 scalar field.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Fp(BigUint);

impl Fp {
    /// Reduce an arbitrary integer into the field.
    pub fn new(value: BigUint) -> Self {
        if value < *MODULUS {
            Fp(value)
        } else {
            Fp(value % &*MODULUS)
        }
    }

    pub fn zero() -> Self {
        Fp(BigUint::zero())
    }

    pub fn one() -> Self {
        Fp(BigUint::one())
    }

    pub fn from_u64(value: u64) -> Self {
        Fp(BigUint::from(value))
    }

    /// Accept `value` only if it is already reduced.
    pub fn from_canonical(value: BigUint) -> Result<Self, HashError> {
        if value < *MODULUS {
            Ok(Fp(value))
        } else {
            Err(HashError::NonCanonicalElement(format!("{value:x}")))
        }
    }

    /// Parse big-endian hex (no prefix); the value must be canonical.
    pub fn from_hex_be(s: &str) -> Result<Self, HashError> {
        let value = BigUint::parse_bytes(s.as_bytes(), 16)
            .ok_or_else(|| HashError::NonCanonicalElement(s.to_string()))?;
        Self::from_canonical(value)
    }

    /// Interpret arbitrary little-endian bytes as an integer and reduce it.
    pub fn from_bytes_le_mod_order(bytes: &[u8]) -> Self {
        Self::new(BigUint::from_bytes_le(bytes))
    }

    pub fn from_bytes_le(bytes: &[u8; ELEMENT_BYTES]) -> Result<Self, HashError> {
        Self::from_canonical(BigUint::from_bytes_le(bytes))
    }

    pub fn from_bytes_be(bytes: &[u8; ELEMENT_BYTES]) -> Result<Self, HashError> {
        Self::from_canonical(BigUint::from_bytes_be(bytes))
    }

    /// Canonical 32-byte little-endian encoding.
    pub fn to_bytes_le(&self) -> [u8; ELEMENT_BYTES] {
        let mut out = [0u8; ELEMENT_BYTES];
        let raw = self.0.to_bytes_le();
        out[..raw.len()].copy_from_slice(&raw);
        out
    }

    /// Canonical 32-byte big-endian encoding.
    pub fn to_bytes_be(&self) -> [u8; ELEMENT_BYTES] {
        let mut out = self.to_bytes_le();
        out.reverse();
        out
    }

    pub fn value(&self) -> &BigUint {
        &self.0
    }

    pub fn into_biguint(self) -> BigUint {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn square(&self) -> Self {
        self * self
    }

    pub fn pow(&self, exponent: u64) -> Self {
        Fp(self.0.modpow(&BigUint::from(exponent), &MODULUS))
    }

    /// x^5, the S-box of the permutation.
    #[inline]
    pub fn pow5(&self) -> Self {
        let x2 = self.square();
        let x4 = x2.square();
        &x4 * self
    }

    /// Multiplicative inverse via Fermat; `None` for zero.
    pub fn inverse(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        let exponent = &*MODULUS - BigUint::from(2u32);
        Some(Fp(self.0.modpow(&exponent, &MODULUS)))
    }
}

impl From<u64> for Fp {
    fn from(value: u64) -> Self {
        Fp::from_u64(value)
    }
}

impl<'a> Add<&'a Fp> for &'a Fp {
    type Output = Fp;

    fn add(self, rhs: &'a Fp) -> Fp {
        let sum = &self.0 + &rhs.0;
        if sum >= *MODULUS {
            Fp(sum - &*MODULUS)
        } else {
            Fp(sum)
        }
    }
}

impl Add for Fp {
    type Output = Fp;

    fn add(self, rhs: Fp) -> Fp {
        &self + &rhs
    }
}

impl AddAssign<&Fp> for Fp {
    fn add_assign(&mut self, rhs: &Fp) {
        *self = &*self + rhs;
    }
}

impl<'a> Sub<&'a Fp> for &'a Fp {
    type Output = Fp;

    fn sub(self, rhs: &'a Fp) -> Fp {
        if self.0 >= rhs.0 {
            Fp(&self.0 - &rhs.0)
        } else {
            Fp(&self.0 + &*MODULUS - &rhs.0)
        }
    }
}

impl Sub for Fp {
    type Output = Fp;

    fn sub(self, rhs: Fp) -> Fp {
        &self - &rhs
    }
}

impl<'a> Mul<&'a Fp> for &'a Fp {
    type Output = Fp;

    fn mul(self, rhs: &'a Fp) -> Fp {
        Fp((&self.0 * &rhs.0) % &*MODULUS)
    }
}

impl Mul for Fp {
    type Output = Fp;

    fn mul(self, rhs: Fp) -> Fp {
        &self * &rhs
    }
}

impl MulAssign<&Fp> for Fp {
    fn mul_assign(&mut self, rhs: &Fp) {
        *self = &*self * rhs;
    }
}

impl Neg for &Fp {
    type Output = Fp;

    fn neg(self) -> Fp {
        if self.is_zero() {
            Fp::zero()
        } else {
            Fp(&*MODULUS - &self.0)
        }
    }
}

impl Neg for Fp {
    type Output = Fp;

    fn neg(self) -> Fp {
        -&self
    }
}

impl fmt::Display for Fp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Fp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fp({})", self.0)
    }
}
