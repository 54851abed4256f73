use core::fmt;
use core::marker::PhantomData;
use core::mem::ManuallyDrop;
use core::ptr;

use crate::strategy::{Always, Strategy};
#[cfg(feature = "use_std")]
use crate::strategy::{OnFailure, OnSuccess};

/// `ScopeGuard` runs a deferred closure when it goes out of scope.
///
/// If you place a guard in a local variable, the closure can run regardless
/// how you leave the scope — through regular return, early return or panic
/// (except if panic or other code aborts; so as long as destructors run). It
/// runs at most once.
///
/// The `S` parameter for [`Strategy`] determines if the closure actually
/// runs; the decision is made exactly once, when the guard is dropped.
/// Guards dropped in the same scope run in reverse declaration order,
/// whatever mix of strategies they use, because that is how Rust drops
/// locals.
///
/// A guard is `!Send` and `!Sync`: the snapshot taken by the success and
/// failure strategies is only meaningful against the panic count of the
/// thread that created the guard, so a guard must be dropped where it was
/// made.
pub struct ScopeGuard<F, S = Always>
	where F: FnOnce(),
		S: Strategy,
{
	action: ManuallyDrop<F>,
	strategy: S,
	_not_send: PhantomData<*const ()>,
}

impl<F, S> ScopeGuard<F, S>
	where F: FnOnce(),
		S: Strategy,
{
	/// Create a `ScopeGuard` that calls `action` when its destructor runs,
	/// if the `Strategy` agrees.
	///
	/// The strategy is armed in the same expression that binds the closure,
	/// so there is no observable state in between.
	///
	/// ```
	/// use scope_exit::{Always, ScopeGuard};
	///
	/// let guard: ScopeGuard<_, Always> = ScopeGuard::with_strategy(|| println!("bye"));
	/// drop(guard);
	/// ```
	#[inline]
	pub fn with_strategy(action: F) -> ScopeGuard<F, S> {
		ScopeGuard {
			action: ManuallyDrop::new(action),
			strategy: S::arm(),
			_not_send: PhantomData,
		}
	}
}

/// Create a new `ScopeGuard` that always calls `action` on scope exit.
///
/// ```
/// use std::cell::Cell;
///
/// let cleaned_up = Cell::new(false);
/// {
///     let _guard = scope_exit::scope_exit(|| cleaned_up.set(true));
/// }
/// assert!(cleaned_up.get());
/// ```
#[inline]
pub fn scope_exit<F>(action: F) -> ScopeGuard<F, Always>
	where F: FnOnce()
{
	ScopeGuard::with_strategy(action)
}

/// Create a new `ScopeGuard` that calls `action` on scope exit unless a new
/// panic started unwinding during the guard's lifetime.
///
/// The action runs on normal fall-through and on early return. It does not
/// run when the scope is being torn down by a panic that began after the
/// guard was created; a panic that was already unwinding beforehand does not
/// suppress it (see [`OnSuccess`]).
///
/// Requires crate feature `use_std`.
///
/// ```
/// use std::cell::Cell;
///
/// let committed = Cell::new(false);
/// {
///     let _guard = scope_exit::scope_success(|| committed.set(true));
/// }
/// assert!(committed.get());
/// ```
#[cfg(feature = "use_std")]
#[inline]
pub fn scope_success<F>(action: F) -> ScopeGuard<F, OnSuccess>
	where F: FnOnce()
{
	ScopeGuard::with_strategy(action)
}

/// Create a new `ScopeGuard` that calls `action` on scope exit only if a new
/// panic started unwinding during the guard's lifetime.
///
/// This is the rollback counterpart of [`scope_success`]: the action runs
/// precisely when the scope is unwinding because of a panic that began after
/// the guard was created, and never on normal exit or early return (see
/// [`OnFailure`]).
///
/// Requires crate feature `use_std`.
///
/// ```
/// use std::cell::Cell;
/// use std::panic::AssertUnwindSafe;
/// use scope_exit::unwind;
///
/// let rolled_back = Cell::new(false);
/// let _ = unwind::catch(AssertUnwindSafe(|| {
///     let _guard = scope_exit::scope_failure(|| rolled_back.set(true));
///     panic!("abort the transaction");
/// }));
/// assert!(rolled_back.get());
/// ```
#[cfg(feature = "use_std")]
#[inline]
pub fn scope_failure<F>(action: F) -> ScopeGuard<F, OnFailure>
	where F: FnOnce()
{
	ScopeGuard::with_strategy(action)
}

impl<F, S> Drop for ScopeGuard<F, S>
	where F: FnOnce(),
		S: Strategy,
{
	fn drop(&mut self) {
		// The field is `ManuallyDrop`, so the compiler will not drop the
		// closure again. If the strategy declines, `action` falls out of
		// scope here and its captures are still dropped, exactly once.
		let action = unsafe { ptr::read(&*self.action) };
		if self.strategy.should_run() {
			action();
		}
	}
}

impl<F, S> fmt::Debug for ScopeGuard<F, S>
	where F: FnOnce(),
		S: Strategy + fmt::Debug,
{
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct(stringify!(ScopeGuard))
			.field("strategy", &self.strategy)
			.finish()
	}
}
