//! Core library: an algebraic (Poseidon) hash over arbitrary-precision integers.
//!
//! `integer -> encoding -> sponge(poseidon) -> digest`. The CLI and C ABI
//! crates are thin shells over [`IntegerHasher`].

pub mod config;
pub mod crypto;
pub mod digest;
pub mod encoding;
pub mod errors;
pub mod hasher;

pub use config::{DigestFormat, HashConfig, SignPolicy};
pub use crypto::field::Fp;
pub use crypto::params::{params, ParamsInfo, PARAMS_ID};
pub use crypto::registry::{available_params, params_by_id};
pub use digest::{Digest, DigestReport};
pub use errors::HashError;
pub use hasher::{hash, hash_n, hash_u64, IntegerHasher};

/// Version helper for CLI
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_params_and_version() {
        assert!(!available_params().is_empty());
        assert!(!version().is_empty());
        assert_eq!(params().id, PARAMS_ID);
    }
}
