//! String-id -> parameter set lookup.

use super::params::{params, PoseidonParams, PARAMS_ID};

fn normalize(id: &str) -> String {
    id.trim().to_ascii_lowercase()
}

/// Ids of every parameter set compiled into this build.
pub fn available_params() -> &'static [&'static str] {
    &[PARAMS_ID]
}

/// Look up a parameter set by id.
///
/// Supported ids: "zkhash/poseidon-bn254-t3-a5/v1".
pub fn params_by_id(id: &str) -> Option<&'static PoseidonParams> {
    match normalize(id).as_str() {
        PARAMS_ID => Some(params()),
        _ => None,
    }
}
