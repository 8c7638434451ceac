//! Frozen digests for `zkhash/poseidon-bn254-t3-a5/v1`.
//!
//! These values were cross-checked against an independent reference
//! implementation. They must never change under this parameter-set id.

use num_bigint::{BigInt, BigUint};
use num_traits::One;
use zkhash_corelib::{
    hash, hash_n, hash_u64, DigestFormat, HashConfig, IntegerHasher, SignPolicy, PARAMS_ID,
};

fn pow2(k: u32) -> BigInt {
    BigInt::one() << k
}

fn dec(n: &BigInt) -> String {
    hash(n).unwrap().render(DigestFormat::Decimal)
}

fn signed(policy: SignPolicy) -> IntegerHasher {
    IntegerHasher::new(HashConfig {
        sign_policy: policy,
        ..HashConfig::default()
    })
    .unwrap()
}

#[test]
fn small_integer_vectors() {
    assert_eq!(
        dec(&BigInt::from(0)),
        "6027846939266419405338493999040895496993886229427443582177353235936002669276"
    );
    assert_eq!(
        dec(&BigInt::from(1)),
        "20132805197949958181383189834528192378509055379267827197933318417369349689689"
    );
    assert_eq!(
        dec(&BigInt::from(2)),
        "18515418944299677974264855639778822869499102294601433994377474204254968452784"
    );
}

#[test]
fn u64_boundary_vectors() {
    assert_eq!(
        hash_u64(u64::MAX).to_string(),
        "3062861600413515030438826516828970218912035063642311905673349059408021269927"
    );
    assert_eq!(
        dec(&pow2(64)),
        "14222559481530859788328006904506343057976490184182563350522460911945171265842"
    );
}

#[test]
fn multi_limb_vectors() {
    assert_eq!(
        dec(&pow2(253)),
        "21845944069557754517061476042440518609213545585091700792891297127439203823404"
    );
    assert_eq!(
        dec(&(pow2(1012) - 1)),
        "8408392666674619601030130523126747282240321233459587413825753046664756095424"
    );
}

#[test]
fn narrow_width_max_vector() {
    let hasher = IntegerHasher::new(HashConfig {
        max_limbs: 1,
        ..HashConfig::default()
    })
    .unwrap();
    let d = hasher.hash(&(pow2(253) - 1)).unwrap();
    assert_eq!(
        d.to_string(),
        "424462150701956343533647952288505608741818655342257218194473647433783762315"
    );
}

#[test]
fn two_element_vector() {
    let d = hash_n(&BigInt::from(1), 2).unwrap();
    let elems: Vec<String> = d.elements().iter().map(|e| e.to_string()).collect();
    assert_eq!(
        elems,
        vec![
            "20132805197949958181383189834528192378509055379267827197933318417369349689689",
            "5926368951871643447936118107010172954815562338826933510018274583815460093200",
        ]
    );
    let expected: BigUint = "129717802966694096425537869047706372813824042629871456202038689279318844261652432072459133504746432293547641635439585372338718769670930305829559961194089"
        .parse()
        .unwrap();
    assert_eq!(d.to_biguint(), expected);
}

#[test]
fn signed_policy_vectors() {
    let twos = signed(SignPolicy::TwosComplement);
    let offset = signed(SignPolicy::OffsetUnsigned);
    assert_eq!(
        twos.hash(&BigInt::from(-1)).unwrap().to_string(),
        "17730009733229164340958241463333765180518305266902845540648167205053120362115"
    );
    assert_eq!(
        offset.hash(&BigInt::from(-1)).unwrap().to_string(),
        "4146618848837307175296726520601141870201748525991775557535780238446595993902"
    );
    assert_eq!(
        twos.hash(&BigInt::from(5)).unwrap().to_string(),
        "18705520309831256804031483378832182397645764814844699256285061929101659447140"
    );
    assert_eq!(
        twos.hash(&-pow2(1011)).unwrap().to_string(),
        "6277230493115131459519844409871751936195277961818524536513220405197232699295"
    );
    assert_eq!(
        offset.hash(&(pow2(1011) - 1)).unwrap().to_string(),
        "5782586989599987601946890125388186547693040837037048146044154668926965934256"
    );
}

#[test]
fn byte_encodings_of_zero_digest() {
    let d = hash_u64(0);
    assert_eq!(
        d.render(DigestFormat::HexBe),
        "0d53a3f56ce008f420662afb534c3bccf5e33fdd742754600afa7149063b7adc"
    );
    assert_eq!(
        d.render(DigestFormat::HexLe),
        "dc7a3b064971fa0a60542774dd3fe3f5cc3b4c53fb2a6620f408e06cf5a3530d"
    );
    assert_eq!(
        d.render(DigestFormat::Field),
        "6027846939266419405338493999040895496993886229427443582177353235936002669276field"
    );
    assert_eq!(d.params_id(), PARAMS_ID);
}
