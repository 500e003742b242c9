// src/ffi/mod.rs
//
// The C surface lives here: exported entry points in `core`, the
// #[repr(C)] structs in `types`, conversion helpers in `scaffold`.

mod core;
mod scaffold;
pub mod types;

pub use core::*;
pub use scaffold::{cstr_arg, free_c_string, to_c_string};
pub use types::*;
