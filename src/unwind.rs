//! Per-thread count of panics in flight.
//!
//! The standard library only answers the boolean question "is this thread
//! panicking?" ([`std::thread::panicking`]). That is not enough for success
//! and failure guards: a guard created inside a destructor that runs during
//! unwinding must not mistake the panic that was already unwinding for one
//! that started during its own lifetime. The guards therefore compare a
//! *count* of panics in flight against a snapshot taken at construction.
//!
//! This module maintains that count. A panic hook (installed once, on first
//! use, chaining whatever hook was installed before) increments the panicking
//! thread's count when a panic begins. Handling the panic is the caller's
//! side of the bargain: catch panics with [`catch`] rather than
//! `std::panic::catch_unwind` directly, and re-raise a caught payload with
//! [`resume`] rather than `std::panic::resume_unwind` (which bypasses the
//! panic hook). Panics handled outside this module leave the count elevated,
//! and replacing the process-wide panic hook after this module has installed
//! its own disables counting entirely.

use std::any::Any;
use std::cell::Cell;
use std::panic::{self, UnwindSafe};
use std::sync::Once;
use std::thread;

thread_local! {
	static PANICS_IN_FLIGHT: Cell<usize> = Cell::new(0);
}

static INSTALL: Once = Once::new();

// The hook runs on the panicking thread, so it bumps that thread's counter.
fn install_counting_hook() {
	INSTALL.call_once(|| {
		let previous = panic::take_hook();
		panic::set_hook(Box::new(move |info| {
			PANICS_IN_FLIGHT.with(|count| count.set(count.get() + 1));
			previous(info);
		}));
	});
}

/// Number of panics currently unwinding the calling thread's stack.
///
/// Zero on the happy path; observed from a destructor running during
/// unwinding it is at least one. Only panics that began after this crate's
/// first use on any thread are counted.
pub fn panic_count() -> usize {
	install_counting_hook();
	PANICS_IN_FLIGHT.with(Cell::get)
}

/// Run `f`, catching an unwinding panic and marking it handled.
///
/// Identical to [`std::panic::catch_unwind`] except that a caught panic is
/// subtracted from the thread's in-flight count, so guards in enclosing
/// scopes no longer see it. Destructors inside `f` still observe the
/// elevated count while the panic unwinds.
///
/// ```
/// use scope_exit::unwind;
///
/// assert_eq!(unwind::panic_count(), 0);
/// let result = unwind::catch(|| panic!("boom"));
/// assert!(result.is_err());
/// assert_eq!(unwind::panic_count(), 0);
/// ```
pub fn catch<F, R>(f: F) -> thread::Result<R>
	where F: FnOnce() -> R + UnwindSafe
{
	install_counting_hook();
	let outcome = panic::catch_unwind(f);
	if outcome.is_err() {
		// Saturate in case the panic predates hook installation.
		PANICS_IN_FLIGHT.with(|count| count.set(count.get().saturating_sub(1)));
	}
	outcome
}

/// Re-raise a panic payload previously obtained from [`catch`].
///
/// `std::panic::resume_unwind` does not run the panic hook, so it would
/// re-raise without the count reflecting the new unwinding. This function
/// restores the count first; failure guards between the re-raise point and
/// the next [`catch`] fire as they would for a fresh panic.
pub fn resume(payload: Box<dyn Any + Send>) -> ! {
	install_counting_hook();
	PANICS_IN_FLIGHT.with(|count| count.set(count.get() + 1));
	panic::resume_unwind(payload)
}
