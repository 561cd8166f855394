use std::ffi::{c_char, CStr, CString};
use std::ptr;

use super::cptr_to_bytes;
use crate::boundary::{self, ArgumentTypeError, Operation};

/// Same text as [`boundary::ARGUMENT_TYPE_MESSAGE`], NUL-terminated.
const ARGUMENT_TYPE_MESSAGE: &CStr = c"[MeCab] Error! Argument of 'parse' must be String.";

/// Reported when the converted text cannot cross as a C string. Only a custom
/// katakana table whose values contain NUL can produce this.
pub(super) const INTERIOR_NUL_MESSAGE: &CStr = c"converted text contains an interior NUL byte";

/// Result of a conversion, returned to C.
/// Exactly one of `text` / `error` is non-null; `error` is static.
#[repr(C)]
pub struct KanaConvertResult {
    pub text: *const c_char,
    pub error: *const c_char,
    _owned: *mut CString,
}

impl KanaConvertResult {
    fn type_error(_: ArgumentTypeError) -> Self {
        Self {
            text: ptr::null(),
            error: ARGUMENT_TYPE_MESSAGE.as_ptr(),
            _owned: ptr::null_mut(),
        }
    }

    pub(super) fn text(text: String) -> Self {
        let Ok(cs) = CString::new(text) else {
            return Self {
                text: ptr::null(),
                error: INTERIOR_NUL_MESSAGE.as_ptr(),
                _owned: ptr::null_mut(),
            };
        };
        let text = cs.as_ptr();
        let owned = Box::into_raw(Box::new(cs));
        Self {
            text,
            error: ptr::null(),
            _owned: owned,
        }
    }

    fn from_outcome(outcome: Result<String, ArgumentTypeError>) -> Self {
        match outcome {
            Ok(text) => Self::text(text),
            Err(e) => Self::type_error(e),
        }
    }
}

fn convert(operation: Operation, input: *const c_char) -> KanaConvertResult {
    let arg = unsafe { cptr_to_bytes(input) };
    KanaConvertResult::from_outcome(boundary::invoke(operation, arg))
}

#[no_mangle]
pub extern "C" fn kana_kana2romaji(input: *const c_char) -> KanaConvertResult {
    convert(Operation::Kana2Romaji, input)
}

#[no_mangle]
pub extern "C" fn kana_kana2voca(input: *const c_char) -> KanaConvertResult {
    convert(Operation::Kana2Voca, input)
}

#[no_mangle]
pub extern "C" fn kana_convert_result_free(result: KanaConvertResult) {
    if !result._owned.is_null() {
        unsafe {
            drop(Box::from_raw(result._owned));
        }
    }
}
