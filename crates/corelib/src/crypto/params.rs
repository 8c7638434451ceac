//! Poseidon parameter set `zkhash/poseidon-bn254-t3-a5/v1`.
//!
//! Every digest is only meaningful together with the id of the parameter set
//! that produced it. Any change to the field, round counts, S-box or tables
//! must ship under a new id.

use once_cell::sync::Lazy;
use serde::Serialize;
use tiny_keccak::{Hasher, Sha3};

use super::constants::{MDS_MATRIX, ROUND_CONSTANTS};
use super::field::{modulus, Fp, MODULUS_BITS};

pub const PARAMS_ID: &str = "zkhash/poseidon-bn254-t3-a5/v1";

/// State width t.
pub const WIDTH: usize = 3;
/// Rate r; the rate occupies state slots `0..RATE`.
pub const RATE: usize = 2;
/// Capacity c; the capacity occupies state slots `RATE..WIDTH`.
pub const CAPACITY: usize = WIDTH - RATE;
pub const FULL_ROUNDS: usize = 8;
pub const PARTIAL_ROUNDS: usize = 57;
pub const NUM_ROUNDS: usize = FULL_ROUNDS + PARTIAL_ROUNDS;
/// S-box exponent; gcd(5, p - 1) = 1 so x^5 is a bijection.
pub const ALPHA: u64 = 5;

pub type State = [Fp; WIDTH];

/// Parsed constant tables.
#[derive(Debug, Clone)]
pub struct PoseidonParams {
    pub id: &'static str,
    pub mds: [[Fp; WIDTH]; WIDTH],
    pub round_constants: Vec<State>,
}

/// Serializable summary of a parameter set.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ParamsInfo {
    pub id: &'static str,
    pub modulus: String,
    pub modulus_bits: u64,
    pub width: usize,
    pub rate: usize,
    pub capacity: usize,
    pub full_rounds: usize,
    pub partial_rounds: usize,
    pub alpha: u64,
}

impl PoseidonParams {
    fn from_tables() -> Self {
        let parse =
            |hex: &str| Fp::from_hex_be(hex).expect("constant table entries are canonical");
        let mds = MDS_MATRIX.map(|row| row.map(parse));
        let round_constants = ROUND_CONSTANTS
            .iter()
            .map(|row| (*row).map(parse))
            .collect();
        Self {
            id: PARAMS_ID,
            mds,
            round_constants,
        }
    }

    pub fn info(&self) -> ParamsInfo {
        ParamsInfo {
            id: self.id,
            modulus: modulus().to_string(),
            modulus_bits: MODULUS_BITS,
            width: WIDTH,
            rate: RATE,
            capacity: CAPACITY,
            full_rounds: FULL_ROUNDS,
            partial_rounds: PARTIAL_ROUNDS,
            alpha: ALPHA,
        }
    }
}

static PARAMS: Lazy<PoseidonParams> = Lazy::new(PoseidonParams::from_tables);

/// The process-wide parameter set.
pub fn params() -> &'static PoseidonParams {
    &PARAMS
}

/// Round constant `k` as produced by the generation procedure:
/// `SHA3-256(PARAMS_ID || "/rc" || u32_be(k))`, big-endian, reduced mod p.
pub fn derive_round_constant(k: u32) -> Fp {
    let mut sha3 = Sha3::v256();
    sha3.update(PARAMS_ID.as_bytes());
    sha3.update(b"/rc");
    sha3.update(&k.to_be_bytes());
    let mut out = [0u8; 32];
    sha3.finalize(&mut out);
    out.reverse();
    Fp::from_bytes_le_mod_order(&out)
}

/// Cauchy MDS entry `1 / (i + j + WIDTH)`.
pub fn derive_mds_entry(i: usize, j: usize) -> Fp {
    Fp::from_u64((i + j + WIDTH) as u64)
        .inverse()
        .unwrap_or_else(Fp::zero)
}
