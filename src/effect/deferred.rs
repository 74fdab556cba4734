//! Deferred - a re-runnable synchronous computation with an error channel.
//!
//! `Deferred<A, E>` describes a computation producing `Result<A, E>`.
//! Constructing or composing it does no work; [`Deferred::run`] executes the
//! producer on the calling thread, every time it is called.
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::Deferred;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let runs = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&runs);
//! let computation = Deferred::<i32, String>::succeed(move || {
//!     counter.fetch_add(1, Ordering::SeqCst);
//!     20
//! })
//! .map(|n| n + 1)
//! .flat_map(|n| Deferred::pure(n * 2));
//!
//! assert_eq!(runs.load(Ordering::SeqCst), 0);
//! assert_eq!(computation.run(), Ok(42));
//! assert_eq!(computation.run(), Ok(42));
//! assert_eq!(runs.load(Ordering::SeqCst), 2);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::binding::guard;
use crate::error::StepPanic;
use crate::typeclass::{
    Applicative, Equality, ErrorChannel, Functor, IntoKind, Invariant, Kind, Monad, MonadError, Morphism, Value,
    Witness,
};

type Producer<A, E> = Arc<dyn Fn() -> Result<A, E> + Send + Sync>;

/// A deferred computation that succeeds with `A` or fails with `E`.
///
/// # Monad Laws
///
/// Two `Deferred` values are equal when running them gives equal results
/// (see [`SameOutcome`]). Under that equality `Deferred` satisfies the
/// monad and monad error laws.
pub struct Deferred<A, E> {
    producer: Producer<A, E>,
}

impl<A: Value, E: Value> Deferred<A, E> {
    /// Defers a fallible producer.
    pub fn new<Function>(producer: Function) -> Self
    where
        Function: Fn() -> Result<A, E> + Send + Sync + 'static,
    {
        Self {
            producer: Arc::new(producer),
        }
    }

    /// Defers an infallible producer.
    pub fn succeed<Function>(producer: Function) -> Self
    where
        Function: Fn() -> A + Send + Sync + 'static,
    {
        Self::new(move || Ok(producer()))
    }

    /// A computation that always succeeds with `value`.
    pub fn pure(value: A) -> Self {
        Self::new(move || Ok(value.clone()))
    }

    /// A computation that always fails with `error`.
    pub fn raise(error: E) -> Self {
        Self::new(move || Err(error.clone()))
    }

    /// A computation that always produces `result`.
    pub fn from_result(result: Result<A, E>) -> Self {
        Self::new(move || result.clone())
    }

    /// Defers a producer whose panics become errors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::Deferred;
    ///
    /// let computation = Deferred::<i32, String>::catching(|| panic!("oops"));
    /// assert_eq!(computation.run(), Err("step panicked: oops".to_string()));
    /// ```
    pub fn catching<Function>(producer: Function) -> Self
    where
        E: From<StepPanic>,
        Function: Fn() -> Result<A, E> + Send + Sync + 'static,
    {
        Self::new(move || guard(&producer))
    }

    /// Runs the computation.
    pub fn run(&self) -> Result<A, E> {
        (self.producer)()
    }

    /// Transforms the success value.
    pub fn map<B, Function>(self, function: Function) -> Deferred<B, E>
    where
        B: Value,
        Function: Fn(A) -> B + Send + Sync + 'static,
    {
        Deferred::new(move || self.run().map(&function))
    }

    /// Sequences a dependent computation.
    ///
    /// `function` runs only after this computation succeeds.
    pub fn flat_map<B, Function>(self, function: Function) -> Deferred<B, E>
    where
        B: Value,
        Function: Fn(A) -> Deferred<B, E> + Send + Sync + 'static,
    {
        Deferred::new(move || self.run().and_then(|value| function(value).run()))
    }

    /// Recovers from a failure with another computation.
    pub fn handle_error_with<Handler>(self, handler: Handler) -> Self
    where
        Handler: Fn(E) -> Self + Send + Sync + 'static,
    {
        Self::new(move || self.run().or_else(|error| handler(error).run()))
    }
}

impl<A, E> Clone for Deferred<A, E> {
    fn clone(&self) -> Self {
        Self {
            producer: Arc::clone(&self.producer),
        }
    }
}

impl<A, E> fmt::Debug for Deferred<A, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Deferred").finish_non_exhaustive()
    }
}

/// Witness for [`Deferred`] with a fixed error type `E`.
pub struct ForDeferred<E>(PhantomData<fn() -> E>);

impl<E: Value> Witness for ForDeferred<E> {
    type Of<A: Value> = Deferred<A, E>;
}

impl<A: Value, E: Value> IntoKind for Deferred<A, E> {
    type Witness = ForDeferred<E>;
    type Inner = A;

    fn kind(self) -> Kind<ForDeferred<E>, A> {
        Kind::new(self)
    }
}

/// Every capability `Deferred<_, E>` supports. The error channel is `E`.
pub struct DeferredInstances<E> {
    marker: PhantomData<fn() -> E>,
}

impl<E> DeferredInstances<E> {
    /// The instance for `Deferred<_, E>`.
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<E> Clone for DeferredInstances<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for DeferredInstances<E> {}

impl<E> Default for DeferredInstances<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for DeferredInstances<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("DeferredInstances")
    }
}

impl<E: Value> Invariant<ForDeferred<E>> for DeferredInstances<E> {
    fn imap<A, B, To, Back>(&self, fa: Kind<ForDeferred<E>, A>, to: To, _from: Back) -> Kind<ForDeferred<E>, B>
    where
        A: Value,
        B: Value,
        To: Fn(A) -> B + Send + Sync + 'static,
        Back: Fn(B) -> A + Send + Sync + 'static,
    {
        self.map(fa, to)
    }
}

impl<E: Value> Functor<ForDeferred<E>> for DeferredInstances<E> {
    fn map<A, B, Function>(&self, fa: Kind<ForDeferred<E>, A>, function: Function) -> Kind<ForDeferred<E>, B>
    where
        A: Value,
        B: Value,
        Function: Fn(A) -> B + Send + Sync + 'static,
    {
        fa.fix().map(function).kind()
    }
}

impl<E: Value> Applicative<ForDeferred<E>> for DeferredInstances<E> {
    fn pure<A: Value>(&self, value: A) -> Kind<ForDeferred<E>, A> {
        Deferred::pure(value).kind()
    }

    fn ap<A: Value, B: Value>(
        &self,
        ff: Kind<ForDeferred<E>, Morphism<A, B>>,
        fa: Kind<ForDeferred<E>, A>,
    ) -> Kind<ForDeferred<E>, B> {
        let functions = ff.fix();
        let values = fa.fix();
        Deferred::new(move || {
            let function = functions.run()?;
            values.run().map(|value| function(value))
        })
        .kind()
    }
}

impl<E: Value> Monad<ForDeferred<E>> for DeferredInstances<E> {
    fn flat_map<A, B, Function>(&self, fa: Kind<ForDeferred<E>, A>, function: Function) -> Kind<ForDeferred<E>, B>
    where
        A: Value,
        B: Value,
        Function: Fn(A) -> Kind<ForDeferred<E>, B> + Send + Sync + 'static,
    {
        fa.fix().flat_map(move |value| function(value).fix()).kind()
    }
}

impl<E: Value> MonadError<ForDeferred<E>, E> for DeferredInstances<E> {
    fn raise_error<A: Value>(&self, error: E) -> Kind<ForDeferred<E>, A> {
        Deferred::raise(error).kind()
    }

    fn handle_error_with<A, Handler>(&self, fa: Kind<ForDeferred<E>, A>, handler: Handler) -> Kind<ForDeferred<E>, A>
    where
        A: Value,
        Handler: Fn(E) -> Kind<ForDeferred<E>, A> + Send + Sync + 'static,
    {
        fa.fix()
            .handle_error_with(move |error| handler(error).fix())
            .kind()
    }
}

impl<E: Value> ErrorChannel<ForDeferred<E>> for DeferredInstances<E> {
    type Error = E;
}

/// Equality of deferred computations: both are run and their results compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SameOutcome;

impl<A, E> Equality<Deferred<A, E>> for SameOutcome
where
    A: Value + PartialEq,
    E: Value + PartialEq,
{
    fn equal(&self, left: &Deferred<A, E>, right: &Deferred<A, E>) -> bool {
        left.run() == right.run()
    }
}

impl<A, E> Equality<Kind<ForDeferred<E>, A>> for SameOutcome
where
    A: Value + PartialEq,
    E: Value + PartialEq,
{
    fn equal(&self, left: &Kind<ForDeferred<E>, A>, right: &Kind<ForDeferred<E>, A>) -> bool {
        <Self as Equality<Deferred<A, E>>>::equal(self, left.as_fixed(), right.as_fixed())
    }
}

static_assertions::assert_impl_all!(Deferred<i32, String>: Clone, Send, Sync);
static_assertions::assert_impl_all!(DeferredInstances<String>: Copy, Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[rstest]
    fn construction_does_no_work() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let _computation = Deferred::<i32, String>::succeed(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            1
        })
        .map(|n| n + 1);
        assert_eq!(runs.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    fn flat_map_skips_continuation_after_error() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let computation = Deferred::<i32, String>::raise("stop".to_string()).flat_map(move |n| {
            counter.fetch_add(1, Ordering::SeqCst);
            Deferred::pure(n)
        });
        assert_eq!(computation.run(), Err("stop".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    #[case(Ok(3), Ok(3))]
    #[case(Err("bad".to_string()), Ok(-1))]
    fn handle_error_with_recovers(#[case] input: Result<i32, String>, #[case] expected: Result<i32, String>) {
        let recovered = Deferred::from_result(input).handle_error_with(|_| Deferred::pure(-1));
        assert_eq!(recovered.run(), expected);
    }

    #[rstest]
    fn catching_passes_success_through() {
        assert_eq!(Deferred::<i32, String>::catching(|| Ok(5)).run(), Ok(5));
    }

    #[rstest]
    fn instances_follow_methods() {
        let instances = DeferredInstances::<String>::new();
        let product = instances.product(Deferred::pure(1).kind(), Deferred::pure('a').kind());
        assert_eq!(product.fix().run(), Ok((1, 'a')));
        let raised = instances.raise_error::<i32>("e".to_string());
        assert_eq!(instances.attempt(raised).fix().run(), Ok(Err("e".to_string())));
    }

    #[rstest]
    fn same_outcome_runs_both_sides() {
        let left = Deferred::<i32, String>::succeed(|| 2 + 2);
        let right = Deferred::pure(4);
        assert!(SameOutcome.equal(&left, &right));
        assert!(!SameOutcome.equal(&left, &Deferred::raise("x".to_string())));
    }

    #[rstest]
    fn debug_hides_producer() {
        assert_eq!(format!("{:?}", Deferred::<i32, String>::pure(1)), "Deferred { .. }");
    }
}
