// FFI functions perform null checks before dereferencing raw pointers.
// Clippy cannot verify this statically, so we allow it at crate level.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

//! Host-facing bindings for the katakana → romaji / voca pipeline.
//!
//! - [`api`]: UniFFI exports (typed, generated bindings)
//! - [`ffi`]: C ABI for hosts that marshal raw strings
//! - [`boundary`]: the argument guard both share

uniffi::setup_scaffolding!();

pub mod api;
pub mod boundary;
pub mod ffi;
mod trace_init;

pub use boundary::{ArgumentTypeError, Operation};
pub use kana_core::{kana2romaji, kana2voca};
