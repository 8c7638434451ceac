//! Algebraic hashing primitives: field, Poseidon permutation and sponge.

pub(crate) mod constants;
pub mod field;
pub mod params;
pub mod poseidon;
pub mod registry;
pub mod sponge;
