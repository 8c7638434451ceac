//! C ABI over `zkhash-corelib`.
//!
//! Every call writes a JSON envelope (see [`Envelope`]) into `*out` and
//! returns its `code`. Strings returned through `out` are owned by this
//! library and must be released with [`zkh_free`].

mod error;
mod ffi_json;

use std::ffi::{c_char, CStr, CString};
use std::str::FromStr;

use num_bigint::BigInt;
use zkhash_corelib::{self as zkhash, DigestFormat, HashConfig, IntegerHasher};

pub use error::{ErrorCode, ZKH_ERR_INTERNAL, ZKH_ERR_INVALID_ARG, ZKH_ERR_OUT_OF_RANGE, ZKH_OK};
pub use ffi_json::Envelope;

fn version_envelope() -> Envelope {
    Envelope::ok()
        .with_field("version", zkhash::version())
        .with_field("params", zkhash::PARAMS_ID)
}

fn params_envelope() -> Envelope {
    Envelope::ok().with_field("params", zkhash::params().info())
}

fn hash_envelope(input: &str, digest_len: u32) -> Envelope {
    let n = match BigInt::from_str(input.trim()) {
        Ok(n) => n,
        Err(_) => {
            return Envelope::err(
                ErrorCode::InvalidArg,
                format!("invalid input '{input}': expected a decimal integer"),
            )
        }
    };
    let config = HashConfig {
        digest_len,
        ..HashConfig::default()
    };
    let digest = match IntegerHasher::new(config).and_then(|h| h.hash(&n)) {
        Ok(d) => d,
        Err(e) => return Envelope::from_hash_error(&e),
    };
    let report = digest.report(DigestFormat::Decimal);
    Envelope::ok()
        .with_field("digest", report.digest)
        .with_field("elements", report.elements)
        .with_field("params", report.params)
}

/// # Safety
/// `input` must be null or a NUL-terminated string.
unsafe fn read_str<'a>(input: *const c_char) -> Result<&'a str, Envelope> {
    if input.is_null() {
        return Err(Envelope::err(ErrorCode::InvalidArg, "input is null"));
    }
    CStr::from_ptr(input)
        .to_str()
        .map_err(|_| Envelope::err(ErrorCode::InvalidArg, "input is not valid UTF-8"))
}

/// Library version as `{"version": "...", "params": "..."}`.
///
/// # Safety
/// `out` must be null or valid for a pointer write.
#[no_mangle]
pub unsafe extern "C" fn zkh_version(out: *mut *mut c_char) -> i32 {
    version_envelope().write_to(out)
}

/// Parameter set description under `"params"`.
///
/// # Safety
/// `out` must be null or valid for a pointer write.
#[no_mangle]
pub unsafe extern "C" fn zkh_params(out: *mut *mut c_char) -> i32 {
    params_envelope().write_to(out)
}

/// Hash a decimal integer string with the default configuration and
/// `digest_len` output elements.
///
/// # Safety
/// `input` must be null or a NUL-terminated string; `out` must be null or
/// valid for a pointer write.
#[no_mangle]
pub unsafe extern "C" fn zkh_hash_decimal(
    input: *const c_char,
    digest_len: u32,
    out: *mut *mut c_char,
) -> i32 {
    let envelope = match read_str(input) {
        Ok(s) => hash_envelope(s, digest_len),
        Err(env) => env,
    };
    envelope.write_to(out)
}

/// Release a string returned by this library. Null is ignored.
///
/// # Safety
/// `ptr` must be null or a pointer previously returned through `out` by
/// this library, not yet freed.
#[no_mangle]
pub unsafe extern "C" fn zkh_free(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}
