//! `MonadError` type class - raising and recovering from errors.
//!
//! The error channel is disjoint from the success values: an error is
//! raised with [`MonadError::raise_error`], short-circuits every subsequent
//! `flat_map`, and is only observed by [`MonadError::handle_error_with`].
//!
//! # Laws
//!
//! ## Raise Then Handle
//!
//! ```text
//! handle_error_with(raise_error(e), f) == f(e)
//! ```
//!
//! ## Handle Pure
//!
//! ```text
//! handle_error_with(pure(a), f) == pure(a)
//! ```
//!
//! ## Raise Short-Circuit
//!
//! ```text
//! flat_map(raise_error(e), f) == raise_error(e)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::instances::ResultInstances;
//! use kindred::typeclass::{IntoKind, MonadError};
//!
//! let instances = ResultInstances::<String>::new();
//! let failed = instances.raise_error::<i32>("error".to_string());
//! let recovered = instances.handle_error_with(failed, |e: String| Ok(e.len() as i32).kind());
//! assert_eq!(recovered.fix(), Ok(5));
//! ```

use super::higher::{Kind, Value, Witness};
use super::monad::Monad;

/// A monad with an error channel carrying values of type `E`.
pub trait MonadError<F: Witness, E: Value>: Monad<F> {
    /// A computation that fails with `error`.
    fn raise_error<A: Value>(&self, error: E) -> Kind<F, A>;

    /// Recovers from a failure of `fa` with `handler`.
    ///
    /// Successful computations pass through unchanged and `handler` is not
    /// invoked.
    fn handle_error_with<A, Handler>(&self, fa: Kind<F, A>, handler: Handler) -> Kind<F, A>
    where
        A: Value,
        Handler: Fn(E) -> Kind<F, A> + Send + Sync + 'static;

    /// Recovers from a failure with a plain value.
    fn handle_error<A, Handler>(&self, fa: Kind<F, A>, handler: Handler) -> Kind<F, A>
    where
        Self: Clone + Send + Sync + Sized + 'static,
        A: Value,
        Handler: Fn(E) -> A + Send + Sync + 'static,
    {
        let instance = self.clone();
        self.handle_error_with(fa, move |error| instance.pure(handler(error)))
    }

    /// Exposes the error channel as a `Result` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::instances::ResultInstances;
    /// use kindred::typeclass::{IntoKind, MonadError};
    ///
    /// let instances = ResultInstances::<String>::new();
    /// let failed = instances.raise_error::<i32>("boom".to_string());
    /// assert_eq!(instances.attempt(failed).fix(), Ok(Err("boom".to_string())));
    /// ```
    fn attempt<A: Value>(&self, fa: Kind<F, A>) -> Kind<F, Result<A, E>>
    where
        Self: Clone + Send + Sync + Sized + 'static,
    {
        let instance = self.clone();
        let succeeded = self.map(fa, |value| Ok(value));
        self.handle_error_with(succeeded, move |error| instance.pure(Err(error)))
    }

    /// Lifts a `Result` into `F`.
    fn from_result<A: Value>(&self, result: Result<A, E>) -> Kind<F, A>
    where
        Self: Sized,
    {
        match result {
            Ok(value) => self.pure(value),
            Err(error) => self.raise_error(error),
        }
    }

    /// Fails with `error()` when `predicate` rejects the value.
    fn ensure<A, Predicate, Error>(
        &self,
        fa: Kind<F, A>,
        predicate: Predicate,
        error: Error,
    ) -> Kind<F, A>
    where
        Self: Clone + Send + Sync + Sized + 'static,
        A: Value,
        Predicate: Fn(&A) -> bool + Send + Sync + 'static,
        Error: Fn() -> E + Send + Sync + 'static,
    {
        let instance = self.clone();
        self.flat_map(fa, move |value| {
            if predicate(&value) {
                instance.pure(value)
            } else {
                instance.raise_error(error())
            }
        })
    }
}

/// Names the error channel of an instance for `F`.
///
/// `MonadError<F, E>` is generic in `E`; this associates the one error type
/// an instance raises, so capability checks can be written per witness.
pub trait ErrorChannel<F: Witness> {
    /// The error type raised by this instance.
    type Error: Value;
}
