//! C ABI for hosts that hand over raw, possibly-not-a-string arguments.
//!
//! Every string returned to C is owned by a result struct and must be
//! released with the matching `*_free` function.

use std::ffi::{c_char, CStr};
use std::path::Path;

pub mod convert;


pub use convert::*;

/// Safely convert a C string pointer to a `&str`.
/// Returns `None` if the pointer is null or contains invalid UTF-8.
pub(crate) unsafe fn cptr_to_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    cptr_to_bytes(ptr).and_then(|bytes| std::str::from_utf8(bytes).ok())
}

/// Borrow the bytes of a C string, or `None` for a null pointer.
pub(crate) unsafe fn cptr_to_bytes<'a>(ptr: *const c_char) -> Option<&'a [u8]> {
    if ptr.is_null() {
        return None;
    }
    Some(CStr::from_ptr(ptr).to_bytes())
}

/// Validate one or more C string arguments and bind them as `&str`,
/// returning `$on_err` from the **calling** function if any check fails.
///
/// ```ignore
/// ffi_guard!(();
///     str: dir = log_dir,
/// );
/// ```
macro_rules! ffi_guard {
    ($on_err:expr ; ) => {};

    ($on_err:expr ; str: $name:ident = $ptr:expr , $($rest:tt)*) => {
        let Some($name) = (unsafe { $crate::ffi::cptr_to_str($ptr) }) else {
            return $on_err;
        };
        $crate::ffi::ffi_guard!($on_err ; $($rest)*);
    };
}

pub(crate) use ffi_guard;

// --- Top-level FFI functions ---

#[no_mangle]
pub extern "C" fn kana_engine_version() -> *const c_char {
    c"0.1.0".as_ptr()
}

#[no_mangle]
#[allow(clippy::unused_unit)]
pub extern "C" fn kana_trace_init(log_dir: *const c_char) {
    ffi_guard!(();
        str: dir_str = log_dir,
    );
    crate::trace_init::init_tracing(Path::new(dir_str));
}
