//! Digest container and its external encodings.
//!
//! Byte forms are 32 bytes per element, elements concatenated in squeeze
//! order; the endianness applies inside each element only. The integer form
//! recombines elements as `sum(e_i * p^i)`.

use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;
use serde::Serialize;

use crate::config::DigestFormat;
use crate::crypto::field::{modulus, Fp, ELEMENT_BYTES};
use crate::crypto::params::PARAMS_ID;
use crate::errors::HashError;

/// Output of one hash computation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digest {
    params_id: &'static str,
    elements: Vec<Fp>,
}

impl Digest {
    pub(crate) fn new(params_id: &'static str, elements: Vec<Fp>) -> Self {
        debug_assert!(!elements.is_empty());
        Self {
            params_id,
            elements,
        }
    }

    /// Id of the parameter set that produced this digest.
    pub fn params_id(&self) -> &'static str {
        self.params_id
    }

    pub fn elements(&self) -> &[Fp] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// First output element; for a one-element digest this is the digest.
    pub fn first(&self) -> &Fp {
        &self.elements[0]
    }

    /// Base-p recombination of the output elements.
    pub fn to_biguint(&self) -> BigUint {
        let p = modulus();
        self.elements
            .iter()
            .rev()
            .fold(BigUint::zero(), |acc, e| acc * p + e.value())
    }

    /// Inverse of [`Digest::to_biguint`] for a digest of `len` elements.
    pub fn from_biguint(value: &BigUint, len: usize) -> Result<Self, HashError> {
        if len == 0 {
            return Err(HashError::InvalidDigestLength(0));
        }
        let p = modulus();
        let mut rest = value.clone();
        let mut elements = Vec::with_capacity(len);
        for _ in 0..len {
            elements.push(Fp::new(&rest % p));
            rest /= p;
        }
        if !rest.is_zero() {
            return Err(HashError::NonCanonicalElement(value.to_string()));
        }
        Ok(Self::new(PARAMS_ID, elements))
    }

    pub fn to_bytes_le(&self) -> Vec<u8> {
        self.elements.iter().flat_map(|e| e.to_bytes_le()).collect()
    }

    pub fn to_bytes_be(&self) -> Vec<u8> {
        self.elements.iter().flat_map(|e| e.to_bytes_be()).collect()
    }

    pub fn from_bytes_le(bytes: &[u8]) -> Result<Self, HashError> {
        Self::from_bytes_with(bytes, Fp::from_bytes_le)
    }

    pub fn from_bytes_be(bytes: &[u8]) -> Result<Self, HashError> {
        Self::from_bytes_with(bytes, Fp::from_bytes_be)
    }

    fn from_bytes_with(
        bytes: &[u8],
        decode: fn(&[u8; ELEMENT_BYTES]) -> Result<Fp, HashError>,
    ) -> Result<Self, HashError> {
        if bytes.is_empty() || bytes.len() % ELEMENT_BYTES != 0 {
            return Err(HashError::InvalidDigestLength(bytes.len()));
        }
        let elements = bytes
            .chunks_exact(ELEMENT_BYTES)
            .map(|chunk| {
                let mut buf = [0u8; ELEMENT_BYTES];
                buf.copy_from_slice(chunk);
                decode(&buf)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(PARAMS_ID, elements))
    }

    pub fn to_hex_le(&self) -> String {
        hex::encode(self.to_bytes_le())
    }

    pub fn to_hex_be(&self) -> String {
        hex::encode(self.to_bytes_be())
    }

    /// Render in the requested external format.
    pub fn render(&self, format: DigestFormat) -> String {
        match format {
            DigestFormat::Decimal => self.to_biguint().to_string(),
            DigestFormat::HexLe => self.to_hex_le(),
            DigestFormat::HexBe => self.to_hex_be(),
            DigestFormat::Field => {
                let literals: Vec<String> =
                    self.elements.iter().map(|e| format!("{e}field")).collect();
                if literals.len() == 1 {
                    literals[0].clone()
                } else {
                    format!("[{}]", literals.join(", "))
                }
            }
        }
    }

    /// Serializable view for JSON consumers.
    pub fn report(&self, format: DigestFormat) -> DigestReport {
        DigestReport {
            params: self.params_id,
            format,
            digest: self.render(format),
            elements: self.elements.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DigestFormat::Decimal))
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DigestReport {
    pub params: &'static str,
    pub format: DigestFormat,
    pub digest: String,
    /// Output elements in decimal, squeeze order.
    pub elements: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digest(xs: &[u64]) -> Digest {
        Digest::new(PARAMS_ID, xs.iter().copied().map(Fp::from_u64).collect())
    }

    #[test]
    fn single_element_integer_is_element() {
        let d = digest(&[42]);
        assert_eq!(d.to_biguint(), BigUint::from(42u32));
        assert_eq!(d.render(DigestFormat::Decimal), "42");
        assert_eq!(d.render(DigestFormat::Field), "42field");
    }

    #[test]
    fn multi_element_integer_is_base_p() {
        let d = digest(&[3, 2]);
        let expected = modulus().clone() * 2u32 + 3u32;
        assert_eq!(d.to_biguint(), expected);
        assert_eq!(Digest::from_biguint(&expected, 2).unwrap(), d);
        assert!(Digest::from_biguint(&expected, 1).is_err());
        assert_eq!(d.render(DigestFormat::Field), "[3field, 2field]");
    }

    #[test]
    fn byte_layout_is_per_element() {
        let d = digest(&[1, 2]);
        let le = d.to_bytes_le();
        let be = d.to_bytes_be();
        assert_eq!(le.len(), 2 * ELEMENT_BYTES);
        assert_eq!(le[0], 1);
        assert_eq!(le[ELEMENT_BYTES], 2);
        assert_eq!(be[ELEMENT_BYTES - 1], 1);
        assert_eq!(be[2 * ELEMENT_BYTES - 1], 2);
        assert_eq!(Digest::from_bytes_le(&le).unwrap(), d);
        assert_eq!(Digest::from_bytes_be(&be).unwrap(), d);
        assert_ne!(Digest::from_bytes_le(&be).ok(), Some(d));
    }

    #[test]
    fn hex_forms() {
        let d = digest(&[0xab]);
        let le = d.render(DigestFormat::HexLe);
        let be = d.render(DigestFormat::HexBe);
        assert_eq!(le.len(), 64);
        assert!(le.starts_with("ab00"));
        assert!(be.ends_with("00ab"));
    }

    #[test]
    fn decoding_rejects_bad_lengths_and_values() {
        assert_eq!(
            Digest::from_bytes_le(&[]).unwrap_err(),
            HashError::InvalidDigestLength(0)
        );
        assert_eq!(
            Digest::from_bytes_le(&[0u8; 33]).unwrap_err(),
            HashError::InvalidDigestLength(33)
        );
        assert!(matches!(
            Digest::from_bytes_be(&[0xffu8; 32]),
            Err(HashError::NonCanonicalElement(_))
        ));
    }

    #[test]
    fn report_carries_params_and_elements() {
        let r = digest(&[5, 6]).report(DigestFormat::HexBe);
        assert_eq!(r.params, PARAMS_ID);
        assert_eq!(r.elements, vec!["5".to_string(), "6".to_string()]);
        assert_eq!(r.digest.len(), 128);
    }
}
