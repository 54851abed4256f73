#[cfg(feature = "use_std")]
use crate::unwind;

/// Controls in which cases the associated code should be run.
///
/// A strategy is armed when the guard is constructed and queried exactly
/// once, when the guard is dropped.
pub trait Strategy {
	/// Capture whatever state the decision needs, at guard construction.
	fn arm() -> Self;
	/// Return `true` if the guard's associated code should run, at guard
	/// destruction.
	fn should_run(&self) -> bool;
}

/// Always run on scope exit.
///
/// “Always” run: on regular exit from a scope or on unwinding from a panic.
/// Can not run on abort, process exit, and other catastrophic events where
/// destructors don’t run.
#[derive(Debug)]
pub struct Always;

/// Run on scope exit only if no new panic started unwinding since the guard
/// was created.
///
/// The decision compares the thread's panic count (see
/// [`unwind`](crate::unwind)) against a snapshot taken at construction, not
/// the boolean `std::thread::panicking()`. A panic that was already
/// unwinding when the guard was created — for example when the guard lives
/// inside a destructor running during that unwinding — does not suppress the
/// action; only a panic that began during the guard's lifetime does.
///
/// Requires crate feature `use_std`.
#[cfg(feature = "use_std")]
#[derive(Debug)]
pub struct OnSuccess {
	baseline: usize,
}

/// Run on scope exit only if a new panic started unwinding since the guard
/// was created.
///
/// The exact negation of [`OnSuccess`]: the action runs iff the thread's
/// panic count at destruction exceeds the construction-time snapshot. A
/// panic already in flight before construction does not count; a normal
/// exit or early return never triggers it.
///
/// Requires crate feature `use_std`.
#[cfg(feature = "use_std")]
#[derive(Debug)]
pub struct OnFailure {
	baseline: usize,
}

impl Strategy for Always {
	#[inline(always)]
	fn arm() -> Self {
		Always
	}

	#[inline(always)]
	fn should_run(&self) -> bool {
		true
	}
}

#[cfg(feature = "use_std")]
impl Strategy for OnSuccess {
	#[inline]
	fn arm() -> Self {
		OnSuccess { baseline: unwind::panic_count() }
	}

	#[inline]
	fn should_run(&self) -> bool {
		unwind::panic_count() == self.baseline
	}
}

#[cfg(feature = "use_std")]
impl Strategy for OnFailure {
	#[inline]
	fn arm() -> Self {
		OnFailure { baseline: unwind::panic_count() }
	}

	#[inline]
	fn should_run(&self) -> bool {
		unwind::panic_count() > self.baseline
	}
}
