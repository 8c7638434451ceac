//! Poseidon permutation over `[Fp; WIDTH]`.
//!
//! Round r:
//! 1. add round constants `rc[r]` element-wise
//! 2. S-box `x^5`: every element in a full round, element 0 in a partial round
//! 3. multiply by the MDS matrix
//!
//! Rounds run as `FULL_ROUNDS / 2` full, `PARTIAL_ROUNDS` partial, then
//! `FULL_ROUNDS / 2` full.

use tracing::trace;

use super::field::Fp;
use super::params::{
    params, PoseidonParams, State, FULL_ROUNDS, NUM_ROUNDS, PARTIAL_ROUNDS, WIDTH,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundKind {
    Full,
    Partial,
}

fn round_kind(round: usize) -> RoundKind {
    let half = FULL_ROUNDS / 2;
    if round < half || round >= half + PARTIAL_ROUNDS {
        RoundKind::Full
    } else {
        RoundKind::Partial
    }
}

#[inline]
fn add_round_constants(state: &mut State, constants: &State) {
    for (s, c) in state.iter_mut().zip(constants) {
        *s += c;
    }
}

#[inline]
fn sbox(state: &mut State, kind: RoundKind) {
    match kind {
        RoundKind::Full => {
            for s in state.iter_mut() {
                *s = s.pow5();
            }
        }
        RoundKind::Partial => state[0] = state[0].pow5(),
    }
}

fn apply_mds(state: &State, mds: &[[Fp; WIDTH]; WIDTH]) -> State {
    core::array::from_fn(|i| {
        mds[i]
            .iter()
            .zip(state)
            .fold(Fp::zero(), |acc, (m, s)| &acc + &(m * s))
    })
}

fn round(state: &mut State, index: usize, p: &PoseidonParams) {
    add_round_constants(state, &p.round_constants[index]);
    sbox(state, round_kind(index));
    *state = apply_mds(state, &p.mds);
}

/// Apply the permutation in place.
pub fn permute(state: &mut State) {
    let p = params();
    for r in 0..NUM_ROUNDS {
        round(state, r, p);
    }
    trace!(target: "zkhash::poseidon", "permutation applied");
}

/// Apply the permutation and record the state after every round.
///
/// Used to localise the first diverging round when comparing against another
/// implementation.
pub fn permute_with_trace(state: &State) -> (State, Vec<State>) {
    let p = params();
    let mut st = state.clone();
    let mut rounds = Vec::with_capacity(NUM_ROUNDS);
    for r in 0..NUM_ROUNDS {
        round(&mut st, r, p);
        rounds.push(st.clone());
    }
    (st, rounds)
}
