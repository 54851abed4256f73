/// Macro to create a `ScopeGuard` (always run).
///
/// The macro takes statements, which are the body of a closure
/// that will run when the scope is exited.
///
/// ```
/// use std::cell::Cell;
/// use scope_exit::defer;
///
/// let closed = Cell::new(false);
/// {
///     defer! {
///         closed.set(true);
///     }
/// }
/// assert!(closed.get());
/// ```
#[macro_export]
macro_rules! defer {
	($($t:tt)*) => {
		let _guard = $crate::scope_exit(|| { $($t)* });
	};
}

/// Macro to create a `ScopeGuard` (run unless a new panic is unwinding).
///
/// The macro takes statements, which are the body of a closure
/// that will run when the scope is exited.
///
/// Requires crate feature `use_std`.
#[cfg(feature = "use_std")]
#[macro_export]
macro_rules! defer_on_success {
	($($t:tt)*) => {
		let _guard = $crate::scope_success(|| { $($t)* });
	};
}

/// Macro to create a `ScopeGuard` (run only if a new panic is unwinding).
///
/// The macro takes statements, which are the body of a closure
/// that will run when the scope is exited.
///
/// Requires crate feature `use_std`.
#[cfg(feature = "use_std")]
#[macro_export]
macro_rules! defer_on_failure {
	($($t:tt)*) => {
		let _guard = $crate::scope_failure(|| { $($t)* });
	};
}
