//! Maybe - a cold asynchronous source of at most one value.
//!
//! `Maybe<A, E>` describes an asynchronous computation that ends in exactly
//! one of three ways: a value, completion without a value, or an error.
//! Nothing runs until the source is realized, either by awaiting
//! [`Maybe::realize`] or by [`Maybe::subscribe`], which drives it on the
//! current Tokio runtime and records the terminal [`Signal`].
//!
//! Each realization runs the whole chain again. Dropping a realized future
//! cancels it: the step in flight is dropped and later steps never start.
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::Maybe;
//!
//! let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! let doubled = Maybe::<i32, String>::just(21).map(|n| n * 2);
//! assert_eq!(runtime.block_on(doubled.realize()), Ok(Some(42)));
//!
//! let skipped = Maybe::<i32, String>::empty().flat_map(|n| Maybe::just(n + 1));
//! assert_eq!(runtime.block_on(skipped.realize()), Ok(None));
//! ```

use std::fmt;
use std::future::Future;
use std::marker::PhantomData;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::error::{StepPanic, SubscribeError};
use crate::typeclass::{
    Applicative, ErrorChannel, Functor, IntoKind, Invariant, Kind, Monad, MonadError, Morphism, Value, Witness,
};

type Source<A, E> = Arc<dyn Fn() -> BoxFuture<'static, Result<Option<A>, E>> + Send + Sync>;

/// A cold asynchronous computation yielding a value, nothing, or an error.
pub struct Maybe<A, E> {
    source: Source<A, E>,
}

impl<A: Value, E: Value> Maybe<A, E> {
    /// Defers a future factory. The factory is called once per realization.
    pub fn defer<Factory, Fut>(factory: Factory) -> Self
    where
        Factory: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Option<A>, E>> + Send + 'static,
    {
        Self {
            source: Arc::new(move || factory().boxed()),
        }
    }

    /// Yields `value`.
    pub fn just(value: A) -> Self {
        Self::defer(move || futures::future::ready(Ok(Some(value.clone()))))
    }

    /// Completes without a value.
    pub fn empty() -> Self {
        Self::defer(|| futures::future::ready(Ok(None)))
    }

    /// Fails with `error`.
    pub fn error(error: E) -> Self {
        Self::defer(move || futures::future::ready(Err(error.clone())))
    }

    /// Yields the success value or fails with the error.
    pub fn from_result(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::just(value),
            Err(error) => Self::error(error),
        }
    }

    /// Waits `duration` on the Tokio timer, then yields this source's outcome.
    pub fn delay(self, duration: Duration) -> Self {
        Self::defer(move || {
            let upstream = self.realize();
            async move {
                tokio::time::sleep(duration).await;
                upstream.await
            }
        })
    }

    /// Starts one realization of the source.
    ///
    /// The returned future is the only handle on the work; dropping it
    /// cancels the realization.
    pub fn realize(&self) -> BoxFuture<'static, Result<Option<A>, E>> {
        (self.source)()
    }

    /// Transforms the value, if one arrives.
    pub fn map<B, Function>(self, function: Function) -> Maybe<B, E>
    where
        B: Value,
        Function: Fn(A) -> B + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        Maybe::defer(move || {
            let upstream = self.realize();
            let function = Arc::clone(&function);
            async move { upstream.await.map(|value| value.map(|value| function(value))) }
        })
    }

    /// Sequences a dependent source.
    ///
    /// `function` is called only once an upstream value has arrived; an
    /// empty or failed upstream skips it.
    pub fn flat_map<B, Function>(self, function: Function) -> Maybe<B, E>
    where
        B: Value,
        Function: Fn(A) -> Maybe<B, E> + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        Maybe::defer(move || {
            let upstream = self.realize();
            let function = Arc::clone(&function);
            async move {
                match upstream.await {
                    Ok(Some(value)) => function(value).realize().await,
                    Ok(None) => Ok(None),
                    Err(error) => Err(error),
                }
            }
        })
    }

    /// Recovers from a failure with another source.
    pub fn handle_error_with<Handler>(self, handler: Handler) -> Self
    where
        Handler: Fn(E) -> Self + Send + Sync + 'static,
    {
        let handler = Arc::new(handler);
        Self::defer(move || {
            let upstream = self.realize();
            let handler = Arc::clone(&handler);
            async move {
                match upstream.await {
                    Err(error) => handler(error).realize().await,
                    outcome => outcome,
                }
            }
        })
    }
}

impl<A: Value, E: Value + From<StepPanic>> Maybe<A, E> {
    /// Realizes the source on the current Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`SubscribeError::NoRuntime`] when called outside a runtime.
    pub fn subscribe(&self) -> Result<Subscription<A, E>, SubscribeError> {
        let runtime = Handle::try_current().map_err(|_| SubscribeError::NoRuntime)?;
        Ok(self.subscribe_on(&runtime))
    }

    /// Realizes the source on the given runtime.
    ///
    /// A panic inside the realization is recorded as an [`Signal::Error`]
    /// carrying the [`StepPanic`], so the subscription always terminates
    /// unless it is cancelled.
    pub fn subscribe_on(&self, runtime: &Handle) -> Subscription<A, E> {
        let state = Arc::new(SubscriptionState::new());
        let realization = match catch_unwind(AssertUnwindSafe(|| self.realize())) {
            Ok(future) => AssertUnwindSafe(future).catch_unwind().boxed(),
            Err(payload) => futures::future::ready(Err(payload)).boxed(),
        };
        let task_state = Arc::clone(&state);
        let task = runtime.spawn(async move {
            let signal = match realization.await {
                Ok(Ok(Some(value))) => Signal::Success(value),
                Ok(Ok(None)) => Signal::Complete,
                Ok(Err(error)) => Signal::Error(error),
                Err(payload) => {
                    let panic = StepPanic::from_payload(payload.as_ref());
                    debug!(message = %panic.message, "realization panicked");
                    Signal::Error(E::from(panic))
                }
            };
            task_state.terminate(signal);
        });
        trace!("subscribed");
        Subscription { state, task }
    }
}

impl<E: Value> Maybe<u64, E> {
    /// Yields `0` once `delay` has elapsed on the Tokio timer.
    ///
    /// Each realization starts its own timer.
    pub fn timer(delay: Duration) -> Self {
        Self::defer(move || async move {
            tokio::time::sleep(delay).await;
            Ok(Some(0))
        })
    }
}

impl<A, E> Clone for Maybe<A, E> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<A, E> fmt::Debug for Maybe<A, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Maybe").finish_non_exhaustive()
    }
}

// =============================================================================
// Subscription
// =============================================================================

/// The terminal event of a realized source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal<A, E> {
    /// A value arrived.
    Success(A),
    /// The source completed without a value.
    Complete,
    /// The source failed.
    Error(E),
}

struct SubscriptionState<A, E> {
    signals: Mutex<Vec<Signal<A, E>>>,
    terminated: AtomicBool,
    cancelled: AtomicBool,
    changed: Notify,
}

impl<A, E> SubscriptionState<A, E> {
    fn new() -> Self {
        Self {
            signals: Mutex::new(Vec::new()),
            terminated: AtomicBool::new(false),
            cancelled: AtomicBool::new(false),
            changed: Notify::new(),
        }
    }

    fn terminate(&self, signal: Signal<A, E>) {
        self.signals.lock().push(signal);
        self.terminated.store(true, Ordering::SeqCst);
        trace!("subscription terminated");
        self.changed.notify_waiters();
    }
}

/// A running realization of a [`Maybe`].
pub struct Subscription<A, E> {
    state: Arc<SubscriptionState<A, E>>,
    task: JoinHandle<()>,
}

impl<A: Clone, E: Clone> Subscription<A, E> {
    /// Waits until the source terminates or `timeout` elapses.
    ///
    /// Returns whether the source terminated. A cancelled subscription
    /// returns immediately.
    pub async fn await_done(&self, timeout: Duration) -> bool {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            let changed = self.state.changed.notified();
            if self.is_terminated() || self.is_cancelled() {
                return self.is_terminated();
            }
            if tokio::time::timeout_at(deadline, changed).await.is_err() {
                return self.is_terminated();
            }
        }
    }

    /// Cancels the realization: the step in flight is dropped and no later
    /// step starts.
    ///
    /// Has no effect once a terminal signal has been recorded.
    pub fn cancel(&self) {
        if self.is_terminated() {
            return;
        }
        self.task.abort();
        self.state.cancelled.store(true, Ordering::SeqCst);
        trace!("subscription cancelled");
        self.state.changed.notify_waiters();
    }

    /// The terminal signals observed so far.
    pub fn signals(&self) -> Vec<Signal<A, E>> {
        self.state.signals.lock().clone()
    }

    /// Whether a terminal signal has been recorded.
    pub fn is_terminated(&self) -> bool {
        self.state.terminated.load(Ordering::SeqCst)
    }

    /// Whether [`Subscription::cancel`] has been called.
    pub fn is_cancelled(&self) -> bool {
        self.state.cancelled.load(Ordering::SeqCst)
    }
}

impl<A, E> fmt::Debug for Subscription<A, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Subscription")
            .field("terminated", &self.state.terminated.load(Ordering::SeqCst))
            .field("cancelled", &self.state.cancelled.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Instances
// =============================================================================

/// Witness for [`Maybe`] with a fixed error type `E`.
pub struct ForMaybe<E>(PhantomData<fn() -> E>);

impl<E: Value> Witness for ForMaybe<E> {
    type Of<A: Value> = Maybe<A, E>;
}

impl<A: Value, E: Value> IntoKind for Maybe<A, E> {
    type Witness = ForMaybe<E>;
    type Inner = A;

    fn kind(self) -> Kind<ForMaybe<E>, A> {
        Kind::new(self)
    }
}

/// Every capability `Maybe<_, E>` supports. The error channel is `E`.
pub struct MaybeInstances<E> {
    marker: PhantomData<fn() -> E>,
}

impl<E> MaybeInstances<E> {
    /// The instance for `Maybe<_, E>`.
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<E> Clone for MaybeInstances<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for MaybeInstances<E> {}

impl<E> Default for MaybeInstances<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for MaybeInstances<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("MaybeInstances")
    }
}

impl<E: Value> Invariant<ForMaybe<E>> for MaybeInstances<E> {
    fn imap<A, B, To, Back>(&self, fa: Kind<ForMaybe<E>, A>, to: To, _from: Back) -> Kind<ForMaybe<E>, B>
    where
        A: Value,
        B: Value,
        To: Fn(A) -> B + Send + Sync + 'static,
        Back: Fn(B) -> A + Send + Sync + 'static,
    {
        self.map(fa, to)
    }
}

impl<E: Value> Functor<ForMaybe<E>> for MaybeInstances<E> {
    fn map<A, B, Function>(&self, fa: Kind<ForMaybe<E>, A>, function: Function) -> Kind<ForMaybe<E>, B>
    where
        A: Value,
        B: Value,
        Function: Fn(A) -> B + Send + Sync + 'static,
    {
        fa.fix().map(function).kind()
    }
}

impl<E: Value> Applicative<ForMaybe<E>> for MaybeInstances<E> {
    fn pure<A: Value>(&self, value: A) -> Kind<ForMaybe<E>, A> {
        Maybe::just(value).kind()
    }

    fn ap<A: Value, B: Value>(
        &self,
        ff: Kind<ForMaybe<E>, Morphism<A, B>>,
        fa: Kind<ForMaybe<E>, A>,
    ) -> Kind<ForMaybe<E>, B> {
        let values = fa.fix();
        ff.fix()
            .flat_map(move |function| values.clone().map(move |value| function(value)))
            .kind()
    }
}

impl<E: Value> Monad<ForMaybe<E>> for MaybeInstances<E> {
    fn flat_map<A, B, Function>(&self, fa: Kind<ForMaybe<E>, A>, function: Function) -> Kind<ForMaybe<E>, B>
    where
        A: Value,
        B: Value,
        Function: Fn(A) -> Kind<ForMaybe<E>, B> + Send + Sync + 'static,
    {
        fa.fix().flat_map(move |value| function(value).fix()).kind()
    }
}

impl<E: Value> MonadError<ForMaybe<E>, E> for MaybeInstances<E> {
    fn raise_error<A: Value>(&self, error: E) -> Kind<ForMaybe<E>, A> {
        Maybe::error(error).kind()
    }

    fn handle_error_with<A, Handler>(&self, fa: Kind<ForMaybe<E>, A>, handler: Handler) -> Kind<ForMaybe<E>, A>
    where
        A: Value,
        Handler: Fn(E) -> Kind<ForMaybe<E>, A> + Send + Sync + 'static,
    {
        fa.fix()
            .handle_error_with(move |error| handler(error).fix())
            .kind()
    }
}

impl<E: Value> ErrorChannel<ForMaybe<E>> for MaybeInstances<E> {
    type Error = E;
}

static_assertions::assert_impl_all!(Maybe<i32, String>: Clone, Send, Sync);
static_assertions::assert_impl_all!(MaybeInstances<String>: Copy, Send, Sync);
static_assertions::assert_impl_all!(Subscription<i32, String>: Send, Sync);
