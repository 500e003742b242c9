//! Conversion helpers shared by the FFI entry points.

use std::ffi::{CStr, CString, c_char, c_int};

/// Reads a borrowed C string argument. None on null or invalid UTF-8.
pub unsafe fn cstr_arg(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        None
    } else {
        unsafe { CStr::from_ptr(ptr) }
            .to_str()
            .ok()
            .map(|s| s.to_string())
    }
}

/// Allocates an owned C string for a result field. Interior NUL bytes cannot
/// occur in broker-supplied names; if one ever does, the string is dropped
/// and null is returned instead of truncated garbage.
pub fn to_c_string(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(cstr) => cstr.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

pub fn opt_c_string(s: Option<String>) -> *mut c_char {
    match s {
        Some(s) => to_c_string(s),
        None => std::ptr::null_mut(),
    }
}

/// Releases a string previously produced by [`to_c_string`]. Null-safe.
pub unsafe fn free_c_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        let _ = unsafe { CString::from_raw(ptr) };
    }
}

/// Moves a Vec into a caller-visible (length, pointer) pair. Empty vectors
/// become a null pointer with length 0.
pub fn boxed_array<T>(items: Vec<T>) -> (c_int, *mut T) {
    if items.is_empty() {
        return (0, std::ptr::null_mut());
    }
    let len = items.len() as c_int;
    let ptr = Box::into_raw(items.into_boxed_slice()) as *mut T;
    (len, ptr)
}

/// Releases an array produced by [`boxed_array`]. Null-safe. `len` must be
/// the length returned alongside the pointer.
pub unsafe fn free_boxed_array<T>(len: c_int, ptr: *mut T) {
    if ptr.is_null() || len <= 0 {
        return;
    }
    let len = len as usize;
    let _ = unsafe { Vec::from_raw_parts(ptr, len, len) };
}
