//! Scope guards: run a closure when the enclosing scope exits, however
//! control leaves it — regular fall-through, early return, or an unwinding
//! panic (as long as panic doesn't abort, so that destructors run).
//!
//! Three variants are provided, all created at the point of declaration and
//! all running in reverse declaration order on scope exit:
//!
//! - [`scope_exit`] — the closure always runs.
//! - [`scope_success`] — the closure runs unless a *new* panic started
//!   unwinding during the guard's lifetime.
//! - [`scope_failure`] — the closure runs only if a new panic started
//!   unwinding during the guard's lifetime.
//!
//! “New” is the important word: the success and failure decisions compare a
//! per-thread count of panics in flight (see [`unwind`]) against a snapshot
//! taken when the guard was created. A guard created inside a destructor
//! that is itself running during unwinding still sees its own scope exit as
//! a success, because the panic tearing things down predates the guard. The
//! boolean `std::thread::panicking()` cannot express this distinction.
//!
//! The guards store their closure inline and allocate nothing. The
//! unconditional guard works without `std`; the success and failure variants
//! need the `use_std` crate feature (on by default) for the panic counting.
//!
//! ```
//! use std::cell::RefCell;
//! use scope_exit::{scope_exit, scope_failure, scope_success};
//!
//! let log = RefCell::new(Vec::new());
//! {
//!     let _a = scope_exit(|| log.borrow_mut().push("released"));
//!     let _b = scope_success(|| log.borrow_mut().push("committed"));
//!     let _c = scope_failure(|| log.borrow_mut().push("rolled back"));
//! }
//! // Normal exit: the failure guard stays quiet, the rest run in
//! // reverse declaration order.
//! assert_eq!(*log.borrow(), ["committed", "released"]);
//! ```
//!
//! The macros [`defer!`], [`defer_on_success!`] and [`defer_on_failure!`]
//! are shorthands that bind an anonymous guard local.
//!
//! Panics raised by a guard's closure propagate from the drop site exactly
//! as if the code had been written inline there; nothing is wrapped or
//! swallowed. If that happens while another panic is already unwinding, the
//! usual double-panic abort applies.

#![cfg_attr(not(any(test, feature = "use_std")), no_std)]

#[macro_use]
mod macros;

mod guard;
mod strategy;
#[cfg(feature = "use_std")]
pub mod unwind;

pub use crate::guard::{scope_exit, ScopeGuard};
#[cfg(feature = "use_std")]
pub use crate::guard::{scope_failure, scope_success};
pub use crate::strategy::{Always, Strategy};
#[cfg(feature = "use_std")]
pub use crate::strategy::{OnFailure, OnSuccess};
