use num_bigint::BigInt;
use serde_json::Value;
use zkhash_corelib::{hash_n, DigestFormat, PARAMS_ID};

#[test]
fn report_serializes_with_kebab_case_format() {
    let digest = hash_n(&BigInt::from(1), 2).unwrap();
    let value: Value = serde_json::to_value(digest.report(DigestFormat::HexLe)).unwrap();
    assert_eq!(value["params"], PARAMS_ID);
    assert_eq!(value["format"], "hex-le");
    assert_eq!(value["digest"].as_str().map(str::len), Some(128));
    assert_eq!(value["elements"].as_array().map(Vec::len), Some(2));
}

#[test]
fn params_info_serializes() {
    let value: Value = serde_json::to_value(zkhash_corelib::params().info()).unwrap();
    assert_eq!(value["id"], PARAMS_ID);
    assert_eq!(value["rate"], 2);
    assert_eq!(value["capacity"], 1);
    assert_eq!(value["alpha"], 5);
}
