use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::crypto::params::PARAMS_ID;
use crate::crypto::registry::params_by_id;
use crate::errors::HashError;

/// Bits carried by one limb of the encoded input.
pub const LIMB_BITS: u64 = 253;
pub const DEFAULT_MAX_LIMBS: u32 = 4;
pub const MAX_LIMBS_LIMIT: u32 = 64;
pub const MAX_DIGEST_LEN: u32 = 16;

/// How negative inputs are mapped into the unsigned encoding domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignPolicy {
    /// Negative inputs fail with `NegativeInput`.
    #[default]
    Reject,
    /// n < 0 maps to 2^W + n within a W-bit window.
    TwosComplement,
    /// n maps to n + 2^(W-1).
    OffsetUnsigned,
}

impl SignPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignPolicy::Reject => "reject",
            SignPolicy::TwosComplement => "twos-complement",
            SignPolicy::OffsetUnsigned => "offset-unsigned",
        }
    }
}

impl fmt::Display for SignPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignPolicy {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(SignPolicy::Reject),
            "twos-complement" | "twos" => Ok(SignPolicy::TwosComplement),
            "offset-unsigned" | "offset" => Ok(SignPolicy::OffsetUnsigned),
            other => Err(HashError::InvalidConfig(format!(
                "unknown sign policy '{other}'"
            ))),
        }
    }
}

/// External rendering of a digest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DigestFormat {
    /// Base-p recombined integer in decimal.
    #[default]
    Decimal,
    /// 32 little-endian bytes per element, hex.
    HexLe,
    /// 32 big-endian bytes per element, hex.
    HexBe,
    /// `<decimal>field` per element.
    Field,
}

impl DigestFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DigestFormat::Decimal => "decimal",
            DigestFormat::HexLe => "hex-le",
            DigestFormat::HexBe => "hex-be",
            DigestFormat::Field => "field",
        }
    }
}

impl fmt::Display for DigestFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DigestFormat {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "decimal" | "dec" => Ok(DigestFormat::Decimal),
            "hex-le" | "hex" => Ok(DigestFormat::HexLe),
            "hex-be" => Ok(DigestFormat::HexBe),
            "field" => Ok(DigestFormat::Field),
            other => Err(HashError::InvalidConfig(format!(
                "unknown digest format '{other}'"
            ))),
        }
    }
}

/// Hashing configuration, loadable from TOML.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct HashConfig {
    pub params_id: String,
    pub sign_policy: SignPolicy,
    /// Input capacity in limbs of `LIMB_BITS` bits.
    pub max_limbs: u32,
    /// Number of field elements squeezed into the digest.
    pub digest_len: u32,
    pub format: DigestFormat,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            params_id: PARAMS_ID.to_string(),
            sign_policy: SignPolicy::default(),
            max_limbs: DEFAULT_MAX_LIMBS,
            digest_len: 1,
            format: DigestFormat::default(),
        }
    }
}

impl HashConfig {
    pub fn validate(&self) -> Result<(), HashError> {
        if params_by_id(&self.params_id).is_none() {
            return Err(HashError::UnknownParams(self.params_id.clone()));
        }
        if !(1..=MAX_LIMBS_LIMIT).contains(&self.max_limbs) {
            return Err(HashError::InvalidConfig(format!(
                "max_limbs {} out of allowed range [1..{}]",
                self.max_limbs, MAX_LIMBS_LIMIT
            )));
        }
        if !(1..=MAX_DIGEST_LEN).contains(&self.digest_len) {
            return Err(HashError::InvalidConfig(format!(
                "digest_len {} out of allowed range [1..{}]",
                self.digest_len, MAX_DIGEST_LEN
            )));
        }
        Ok(())
    }

    /// Fixed encoding width W in bits.
    pub fn width_bits(&self) -> u64 {
        LIMB_BITS * u64::from(self.max_limbs)
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cfg: HashConfig = toml::from_str(s).context("parsing hash config")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path)
            .with_context(|| format!("reading hash config {}", path.display()))?;
        Self::from_toml_str(&s).with_context(|| format!("loading hash config {}", path.display()))
    }
}
