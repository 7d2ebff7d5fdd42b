//! # Scope Guards
//!
//! `with` pairs an acquired resource with its release; `defer` schedules an
//! action for the end of the enclosing block. Both are built on `Drop`, so the
//! release runs on every exit path out of the scope: fall-through, early
//! `return`, `?`, `break`, and panic unwinding.
//!
//! Guards are plain locals. They never escape the scope that created them
//! unless moved out explicitly, and need no synchronisation.

use std::ops::{Deref, DerefMut};

// ============================================================================
// SCOPE GUARD
// ============================================================================

/// Owns a resource and the operation that releases it.
///
/// The release runs exactly once, when the guard is dropped. A guard that is
/// never created never releases anything.
pub struct ScopeGuard<T, F>
where
    F: FnOnce(T),
{
    // Some(..) while armed.
    armed: Option<(T, F)>,
}

impl<T, F> ScopeGuard<T, F>
where
    F: FnOnce(T),
{
    pub fn new(resource: T, release: F) -> Self {
        Self {
            armed: Some((resource, release)),
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    fn fire(&mut self) {
        if let Some((resource, release)) = self.armed.take() {
            release(resource);
        }
    }
}

impl<T, F> Deref for ScopeGuard<T, F>
where
    F: FnOnce(T),
{
    type Target = T;

    fn deref(&self) -> &T {
        match &self.armed {
            Some((resource, _)) => resource,
            None => unreachable!("scope guard accessed after release"),
        }
    }
}

impl<T, F> DerefMut for ScopeGuard<T, F>
where
    F: FnOnce(T),
{
    fn deref_mut(&mut self) -> &mut T {
        match &mut self.armed {
            Some((resource, _)) => resource,
            None => unreachable!("scope guard accessed after release"),
        }
    }
}

impl<T, F> Drop for ScopeGuard<T, F>
where
    F: FnOnce(T),
{
    fn drop(&mut self) {
        self.fire();
    }
}

impl<T: std::fmt::Debug, F: FnOnce(T)> std::fmt::Debug for ScopeGuard<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopeGuard")
            .field("resource", &self.armed.as_ref().map(|(resource, _)| resource))
            .finish()
    }
}

/// Runs `body` with `resource`, then hands the resource to `release`.
///
/// The resource is acquired (evaluated) once, by the caller. `release` receives
/// exactly the value `body` saw, including any changes `body` made to it, and
/// runs even if `body` panics.
///
/// Usage:
/// ```rust
/// use pretty::guard::with;
/// let mut released = Vec::new();
/// let len = with(vec![1, 2, 3], |v| released = v, |v| {
///     v.push(4);
///     v.len()
/// });
/// assert_eq!(len, 4);
/// assert_eq!(released, vec![1, 2, 3, 4]);
/// ```
pub fn with<T, R>(resource: T, release: impl FnOnce(T), body: impl FnOnce(&mut T) -> R) -> R {
    let mut guard = ScopeGuard::new(resource, release);
    body(&mut guard)
}

// ============================================================================
// DEFER
// ============================================================================

/// Runs an action once, when dropped.
pub struct Defer<F: FnOnce()>(Option<F>);

impl<F: FnOnce()> Defer<F> {
    pub fn new(action: F) -> Self {
        Defer(Some(action))
    }
}

impl<F: FnOnce()> Drop for Defer<F> {
    fn drop(&mut self) {
        if let Some(action) = self.0.take() {
            action();
        }
    }
}

/// Binds a [`ScopeGuard`] for the rest of the enclosing block.
///
/// `with!(name = acquire, release)` evaluates `acquire` once and binds `name`
/// to a guard that derefs to the resource. `release` runs when the block exits.
///
/// ```rust
/// use pretty::with;
/// let log = std::cell::RefCell::new(Vec::new());
/// {
///     with!(file = String::from("data"), |s: String| log.borrow_mut().push(s));
///     file.push_str(".txt");
///     log.borrow_mut().push(String::from("body"));
/// }
/// assert_eq!(*log.borrow(), ["body", "data.txt"]);
/// ```
#[macro_export]
macro_rules! with {
    ($name:ident = $acquire:expr, $release:expr $(,)?) => {
        #[allow(unused_mut)]
        let mut $name = $crate::guard::ScopeGuard::new($acquire, $release);
    };
}

/// Runs the given statements when the enclosing block exits.
///
/// Several defers in one block run in reverse order of declaration.
///
/// ```rust
/// use pretty::defer;
/// let order = std::cell::RefCell::new(Vec::new());
/// {
///     defer!(order.borrow_mut().push(3));
///     defer!(order.borrow_mut().push(2));
///     order.borrow_mut().push(1);
/// }
/// assert_eq!(*order.borrow(), [1, 2, 3]);
/// ```
#[macro_export]
macro_rules! defer {
    ($($body:tt)*) => {
        let _defer = $crate::guard::Defer::new(|| {
            $($body)*;
        });
    };
}
