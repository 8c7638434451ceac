use std::ffi::{c_char, CString};

use serde::Serialize;
use serde_json::{Map, Value};
use zkhash_corelib::HashError;

use crate::error::ErrorCode;

const RESERVED_FIELDS: &[&str] = &["ok", "code", "msg"];

/// JSON object handed across the C boundary: `{ok, code, msg, ...fields}`.
pub struct Envelope {
    code: ErrorCode,
    map: Map<String, Value>,
}

impl Envelope {
    fn new(code: ErrorCode, msg: String) -> Self {
        let mut map = Map::new();
        map.insert("ok".into(), Value::Bool(code == ErrorCode::Ok));
        map.insert("code".into(), Value::from(code.code()));
        map.insert("msg".into(), Value::String(msg));
        Self { code, map }
    }

    pub fn ok() -> Self {
        Self::new(ErrorCode::Ok, "OK".into())
    }

    pub fn err(code: ErrorCode, msg: impl Into<String>) -> Self {
        Self::new(code, msg.into())
    }

    pub fn from_hash_error(err: &HashError) -> Self {
        Self::err(ErrorCode::from(err), err.to_string())
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Attach an extra field. Fields that fail to serialize turn the
    /// envelope into an `Internal` error.
    pub fn with_field<T>(mut self, key: &str, value: T) -> Self
    where
        T: Serialize,
    {
        assert!(
            !RESERVED_FIELDS.contains(&key),
            "field '{key}' is reserved by the FFI envelope"
        );
        match serde_json::to_value(value) {
            Ok(value) => {
                self.map.insert(key.to_string(), value);
                self
            }
            Err(e) => Self::err(ErrorCode::Internal, format!("serializing '{key}': {e}")),
        }
    }

    pub fn into_string(self) -> String {
        // A `Map` of `Value`s always serializes.
        Value::Object(self.map).to_string()
    }

    pub fn into_cstring(self) -> CString {
        // serde_json escapes NUL as \u0000, so the output never contains one.
        CString::new(self.into_string()).unwrap_or_default()
    }

    /// Store the envelope in `*out` (when non-null) and return its code.
    ///
    /// # Safety
    /// `out` must be null or valid for a single pointer write.
    pub unsafe fn write_to(self, out: *mut *mut c_char) -> i32 {
        let code = self.code.code();
        if !out.is_null() {
            *out = self.into_cstring().into_raw();
        }
        code
    }
}
