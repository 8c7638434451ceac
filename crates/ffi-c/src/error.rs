#[repr(i32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    Ok = 0,
    InvalidArg = 1,
    OutOfRange = 2,
    Internal = 6,
}

impl ErrorCode {
    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl From<&zkhash_corelib::HashError> for ErrorCode {
    fn from(err: &zkhash_corelib::HashError) -> Self {
        if err.is_out_of_domain() {
            ErrorCode::OutOfRange
        } else {
            ErrorCode::InvalidArg
        }
    }
}

pub const ZKH_OK: i32 = ErrorCode::Ok.code();
pub const ZKH_ERR_INVALID_ARG: i32 = ErrorCode::InvalidArg.code();
pub const ZKH_ERR_OUT_OF_RANGE: i32 = ErrorCode::OutOfRange.code();
pub const ZKH_ERR_INTERNAL: i32 = ErrorCode::Internal.code();
