use zkhash_corelib::crypto::poseidon::permute;
use zkhash_corelib::crypto::sponge::{sponge_hash, Mode, Sponge};
use zkhash_corelib::Fp;

fn elems(xs: &[u64]) -> Vec<Fp> {
    xs.iter().copied().map(Fp::from_u64).collect()
}

#[test]
fn single_squeeze_is_one_permutation_of_padded_block() {
    let domain = Fp::from_u64(9);
    let out = sponge_hash(domain.clone(), &elems(&[4]), 1);

    let mut state = [Fp::from_u64(4), Fp::zero(), domain];
    permute(&mut state);
    assert_eq!(out, vec![state[0].clone()]);
}

#[test]
fn incremental_absorb_matches_one_shot() {
    let input = elems(&[1, 2, 3, 4, 5]);
    let mut sponge = Sponge::new(Fp::from_u64(7));
    for x in &input {
        sponge.absorb_one(x);
    }
    assert_eq!(sponge.mode(), Mode::Absorbing);
    let out = sponge.squeeze(3);
    assert_eq!(sponge.mode(), Mode::Squeezing);
    assert_eq!(out, sponge_hash(Fp::from_u64(7), &input, 3));
}

#[test]
fn outputs_are_prefix_consistent() {
    let input = elems(&[10, 20]);
    let long = sponge_hash(Fp::zero(), &input, 5);
    for n in 1..5 {
        assert_eq!(sponge_hash(Fp::zero(), &input, n), long[..n].to_vec());
    }
}

#[test]
fn domain_separates_equal_inputs() {
    let input = elems(&[1, 2, 3]);
    assert_ne!(
        sponge_hash(Fp::from_u64(1), &input, 1),
        sponge_hash(Fp::from_u64(2), &input, 1)
    );
}

#[test]
fn absorb_after_squeeze_changes_later_outputs() {
    let mut a = Sponge::new(Fp::zero());
    a.absorb(&elems(&[1, 2]));
    let first = a.squeeze_one();
    a.absorb_one(&Fp::from_u64(3));
    let after = a.squeeze_one();

    let mut b = Sponge::new(Fp::zero());
    b.absorb(&elems(&[1, 2]));
    assert_eq!(b.squeeze_one(), first);
    assert_ne!(b.squeeze_one(), after);
}
