//! Mutex access that survives poisoning.
//!
//! The only shared state in this crate is the output sink of
//! [`PlainLogger`](crate::logging::PlainLogger) and its last printed
//! timestamp. A panic while one of those locks is held must not silence
//! logging for the rest of the process, so locks are taken through
//! [`lock_recover`], which hands back the guard of a poisoned mutex
//! instead of an error.
//!
//! Tests should keep using `.lock().unwrap()` so that poisoning fails fast.
//!
//! ```rust
//! use std::sync::Mutex;
//! use simple_table::sync::lock_recover;
//!
//! let data = Mutex::new(vec![1, 2, 3]);
//! let guard = lock_recover(&data);
//! assert_eq!(guard.len(), 3);
//! ```

use std::sync::{Mutex, MutexGuard};

/// Lock a mutex, recovering from poison if necessary.
///
/// # Panics
///
/// This function never panics. It always recovers from poison.
#[inline]
pub fn lock_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Lock a mutex, reporting poison recovery on stderr in debug builds.
///
/// `context` names the call site, e.g. `"PlainLogger::log"`.
#[inline]
pub fn lock_recover_debug<'a, T>(mutex: &'a Mutex<T>, context: &str) -> MutexGuard<'a, T> {
    mutex.lock().unwrap_or_else(|e| {
        #[cfg(debug_assertions)]
        eprintln!("[simple_table::sync] mutex poison recovered at: {context}");
        #[cfg(not(debug_assertions))]
        let _ = context;
        e.into_inner()
    })
}
