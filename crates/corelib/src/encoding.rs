//! Integer -> field element encoding.
//!
//! A (sign-mapped) non-negative integer is split into little-endian limbs of
//! `LIMB_BITS` bits with no most-significant zero limb, so zero encodes to no
//! limbs at all. The preimage absorbed by the sponge is
//! `[limb_count, limb_0, .., limb_{k-1}]`; the count makes the encoding
//! injective and the sponge's zero padding unambiguous.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};
use tracing::debug;

use crate::config::{HashConfig, SignPolicy, LIMB_BITS};
use crate::crypto::field::Fp;
use crate::errors::HashError;

const DOMAIN_PREFIX: &str = "zkhash.int.v1";

/// Field-level form of one input integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedInput {
    /// Capacity seed binding the digest to the sign policy and width.
    pub domain: Fp,
    /// `[limb_count, limbs..]`.
    pub elements: Vec<Fp>,
}

impl EncodedInput {
    pub fn limb_count(&self) -> usize {
        self.elements.len() - 1
    }
}

/// Label hashed into the capacity slot. Unsigned inputs share one domain
/// regardless of width; signed policies depend on W.
pub fn domain_label(policy: SignPolicy, width_bits: u64) -> String {
    match policy {
        SignPolicy::Reject => DOMAIN_PREFIX.to_string(),
        SignPolicy::TwosComplement => format!("{DOMAIN_PREFIX}:twos:{width_bits}"),
        SignPolicy::OffsetUnsigned => format!("{DOMAIN_PREFIX}:offset:{width_bits}"),
    }
}

/// The label's bytes read little-endian as a field element.
pub fn domain_separator(policy: SignPolicy, width_bits: u64) -> Fp {
    Fp::from_bytes_le_mod_order(domain_label(policy, width_bits).as_bytes())
}

fn limb_mask() -> BigUint {
    (BigUint::one() << LIMB_BITS) - BigUint::one()
}

/// Minimal little-endian base-2^LIMB_BITS digits.
pub fn to_limbs(n: &BigUint) -> Vec<BigUint> {
    let mask = limb_mask();
    let mut rest = n.clone();
    let mut limbs = Vec::with_capacity((n.bits() / LIMB_BITS + 1) as usize);
    while !rest.is_zero() {
        limbs.push(&rest & &mask);
        rest >>= LIMB_BITS;
    }
    limbs
}

/// Inverse of [`to_limbs`].
pub fn from_limbs(limbs: &[BigUint]) -> BigUint {
    limbs
        .iter()
        .rev()
        .fold(BigUint::zero(), |acc, limb| (acc << LIMB_BITS) + limb)
}

/// Map a signed input into `[0, 2^W)` according to `policy`.
pub fn apply_sign_policy(
    n: &BigInt,
    policy: SignPolicy,
    width_bits: u64,
) -> Result<BigUint, HashError> {
    let magnitude = n.magnitude();
    let negative = n.sign() == Sign::Minus;
    match policy {
        SignPolicy::Reject => {
            if negative {
                return Err(HashError::NegativeInput);
            }
            if magnitude.bits() > width_bits {
                return Err(HashError::InputTooLarge {
                    bits: magnitude.bits(),
                    max_bits: width_bits,
                });
            }
            Ok(magnitude.clone())
        }
        SignPolicy::TwosComplement | SignPolicy::OffsetUnsigned => {
            let half = BigUint::one() << (width_bits - 1);
            // Valid range is [-2^(W-1), 2^(W-1)).
            let in_range = if negative {
                *magnitude <= half
            } else {
                *magnitude < half
            };
            if !in_range {
                return Err(HashError::InputTooLarge {
                    bits: magnitude.bits() + 1,
                    max_bits: width_bits,
                });
            }
            let mapped = match (policy, negative) {
                (SignPolicy::TwosComplement, false) => magnitude.clone(),
                (SignPolicy::TwosComplement, true) => (&half << 1u32) - magnitude,
                (_, false) => half + magnitude,
                (_, true) => half - magnitude,
            };
            Ok(mapped)
        }
    }
}

/// Build the preimage for an already sign-mapped value.
pub fn encode_unsigned(value: &BigUint, domain: Fp) -> EncodedInput {
    let limbs = to_limbs(value);
    let mut elements = Vec::with_capacity(limbs.len() + 1);
    elements.push(Fp::from_u64(limbs.len() as u64));
    elements.extend(limbs.into_iter().map(Fp::new));
    EncodedInput { domain, elements }
}

/// Encode `n` under `cfg` into the sponge preimage.
pub fn encode_integer(n: &BigInt, cfg: &HashConfig) -> Result<EncodedInput, HashError> {
    let width_bits = cfg.width_bits();
    let mapped = apply_sign_policy(n, cfg.sign_policy, width_bits)?;
    let encoded = encode_unsigned(&mapped, domain_separator(cfg.sign_policy, width_bits));

    debug!(
        input_bits = n.bits(),
        limbs = encoded.limb_count(),
        policy = %cfg.sign_policy,
        "encoded integer"
    );
    Ok(encoded)
}
