//! FFI bindings for somascale
//!
//! This module provides C-compatible functions for calling the engine from
//! host applications. All functions return allocated strings that must be
//! freed by the caller using `somascale_free_string`.

use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

use crate::engine::compute_bmi;
use crate::report::AssessmentEncoder;
use crate::types::Measurement;

// Thread-local storage for the last error message
thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

/// Set the last error message
fn set_last_error(msg: &str) {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok();
    });
}

/// Clear the last error message
fn clear_last_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}

/// Helper to convert a Rust string to a C string (caller must free)
fn string_to_cstr(s: &str) -> *mut c_char {
    match CString::new(s) {
        Ok(cstr) => cstr.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Compute a full assessment payload as JSON.
///
/// Returns a null-terminated JSON string (`bmi.assessment.v1`) on success,
/// or null on failure; retrieve the failure with `somascale_last_error`.
///
/// # Safety
/// The returned pointer must be freed with `somascale_free_string`.
#[no_mangle]
pub extern "C" fn somascale_compute(height_cm: f64, weight_kg: f64) -> *mut c_char {
    clear_last_error();

    let result = match compute_bmi(height_cm, weight_kg) {
        Ok(result) => result,
        Err(e) => {
            set_last_error(&e.to_string());
            return ptr::null_mut();
        }
    };

    // Validation already happened inside compute_bmi
    let measurement = Measurement {
        height_cm,
        weight_kg,
    };

    match AssessmentEncoder::new().encode_to_json(&measurement, &result) {
        Ok(json) => string_to_cstr(&json),
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

/// Classify a height/weight pair, returning just the category key
/// (`underweight`, `normal`, `overweight`, `obese`).
///
/// Returns null on invalid input; retrieve the failure with
/// `somascale_last_error`.
///
/// # Safety
/// The returned pointer must be freed with `somascale_free_string`.
#[no_mangle]
pub extern "C" fn somascale_classify(height_cm: f64, weight_kg: f64) -> *mut c_char {
    clear_last_error();

    match compute_bmi(height_cm, weight_kg) {
        Ok(result) => string_to_cstr(result.category.as_str()),
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

/// Get the last error message for the current thread.
///
/// Returns null if no error occurred. The returned pointer is owned by the
/// library and remains valid until the next engine call on this thread; do
/// NOT free it.
#[no_mangle]
pub extern "C" fn somascale_last_error() -> *const c_char {
    LAST_ERROR.with(|e| match &*e.borrow() {
        Some(cstr) => cstr.as_ptr(),
        None => ptr::null(),
    })
}

/// Free a string allocated by this library.
///
/// # Safety
/// `ptr` must be a pointer previously returned by `somascale_compute` or
/// `somascale_classify`, and must not be used after this call.
#[no_mangle]
pub unsafe extern "C" fn somascale_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    fn take_string(ptr: *mut c_char) -> String {
        assert!(!ptr.is_null());
        let s = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_string();
        unsafe { somascale_free_string(ptr) };
        s
    }

    #[test]
    fn test_compute_returns_payload_json() {
        let ptr = somascale_compute(170.0, 70.0);
        let json = take_string(ptr);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["result"]["value"], 24.2);
        assert_eq!(value["result"]["category"], "normal");
    }

    #[test]
    fn test_classify_returns_bare_key() {
        let ptr = somascale_classify(180.0, 95.0);
        assert_eq!(take_string(ptr), "overweight");
    }

    #[test]
    fn test_invalid_input_sets_last_error() {
        let ptr = somascale_compute(0.0, 70.0);
        assert!(ptr.is_null());

        let err = somascale_last_error();
        assert!(!err.is_null());
        let msg = unsafe { CStr::from_ptr(err) }.to_str().unwrap();
        assert!(msg.contains("Invalid height"));
    }

    #[test]
    fn test_error_cleared_on_success() {
        let ptr = somascale_classify(170.0, -1.0);
        assert!(ptr.is_null());
        assert!(!somascale_last_error().is_null());

        let ptr = somascale_classify(170.0, 70.0);
        assert_eq!(take_string(ptr), "normal");
        assert!(somascale_last_error().is_null());
    }

    #[test]
    fn test_free_null_is_noop() {
        unsafe { somascale_free_string(ptr::null_mut()) };
    }
}
