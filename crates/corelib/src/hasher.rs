//! Integer hashing front door: encoder -> sponge -> digest.

use num_bigint::{BigInt, BigUint};
use tracing::debug;

use crate::config::{HashConfig, SignPolicy};
use crate::crypto::field::Fp;
use crate::crypto::params::PoseidonParams;
use crate::crypto::registry::params_by_id;
use crate::crypto::sponge::sponge_hash;
use crate::digest::Digest;
use crate::encoding::{domain_separator, encode_integer, encode_unsigned, EncodedInput};
use crate::errors::HashError;

/// A validated hashing configuration bound to its parameter set.
///
/// Holds no mutable state; one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct IntegerHasher {
    config: HashConfig,
    params: &'static PoseidonParams,
}

impl IntegerHasher {
    pub fn new(config: HashConfig) -> Result<Self, HashError> {
        config.validate()?;
        let params = params_by_id(&config.params_id)
            .ok_or_else(|| HashError::UnknownParams(config.params_id.clone()))?;
        Ok(Self { config, params })
    }

    pub fn config(&self) -> &HashConfig {
        &self.config
    }

    pub fn params(&self) -> &'static PoseidonParams {
        self.params
    }

    /// Hash `n`, failing if it lies outside the configured domain.
    pub fn hash(&self, n: &BigInt) -> Result<Digest, HashError> {
        let encoded = encode_integer(n, &self.config)?;
        Ok(self.absorb_encoded(&encoded))
    }

    /// Hash a non-negative integer.
    pub fn hash_unsigned(&self, n: &BigUint) -> Result<Digest, HashError> {
        self.hash(&BigInt::from(n.clone()))
    }

    /// Hash raw field elements under `domain`, squeezing `digest_len` outputs.
    ///
    /// No length prefix is added; callers hashing variable-length data must
    /// include one themselves.
    pub fn hash_elements(&self, domain: Fp, elements: &[Fp]) -> Digest {
        let out = sponge_hash(domain, elements, self.config.digest_len as usize);
        Digest::new(self.params.id, out)
    }

    fn absorb_encoded(&self, encoded: &EncodedInput) -> Digest {
        let digest = self.hash_elements(encoded.domain.clone(), &encoded.elements);
        debug!(
            params = self.params.id,
            absorbed = encoded.elements.len(),
            outputs = digest.len(),
            "hashed integer"
        );
        digest
    }
}

impl Default for IntegerHasher {
    fn default() -> Self {
        let config = HashConfig::default();
        let params = crate::crypto::params::params();
        Self { config, params }
    }
}

/// Hash `n` under the default configuration.
pub fn hash(n: &BigInt) -> Result<Digest, HashError> {
    IntegerHasher::default().hash(n)
}

/// Hash a `u64` under the default configuration; every `u64` is in range.
pub fn hash_u64(value: u64) -> Digest {
    let hasher = IntegerHasher::default();
    let width_bits = hasher.config.width_bits();
    let encoded = encode_unsigned(
        &BigUint::from(value),
        domain_separator(SignPolicy::Reject, width_bits),
    );
    hasher.absorb_encoded(&encoded)
}

/// Hash `n` under the default configuration, squeezing `n_outputs` elements.
pub fn hash_n(n: &BigInt, n_outputs: u32) -> Result<Digest, HashError> {
    let config = HashConfig {
        digest_len: n_outputs,
        ..HashConfig::default()
    };
    IntegerHasher::new(config)?.hash(n)
}
