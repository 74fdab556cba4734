//! The catching boundary: user step logic that fails by returning `Err` or by
//! panicking is turned into an ordinary `Result`.

use std::panic::{AssertUnwindSafe, catch_unwind};

use tracing::debug;

use crate::error::StepPanic;
use crate::typeclass::{ErrorChannel, Kind, MonadError, Value, Witness};

/// Runs `body`, turning a panic into `Err(E::from(StepPanic))`.
pub(crate) fn guard<T, E, Body>(body: Body) -> Result<T, E>
where
    E: From<StepPanic>,
    Body: FnOnce() -> Result<T, E>,
{
    catch_unwind(AssertUnwindSafe(body)).unwrap_or_else(|payload| {
        let panic = StepPanic::from_payload(payload.as_ref());
        debug!(message = %panic.message, "step panicked inside a catching boundary");
        Err(E::from(panic))
    })
}

/// Builds a wrapped value, raising a panic during construction in the
/// error channel of `instance`.
///
/// This is the boundary used by `bind! { catching instance => .. }`: the
/// expression on the right of each `<=`, every `let` and the final value are
/// evaluated inside it.
///
/// # Examples
///
/// ```rust
/// use kindred::binding::catch_kind;
/// use kindred::instances::ResultInstances;
/// use kindred::typeclass::{ForResult, IntoKind, Kind};
///
/// let instances = ResultInstances::<String>::new();
/// let built: Kind<ForResult<String>, i32> = catch_kind(&instances, || panic!("not ready"));
/// assert_eq!(built.fix(), Err("step panicked: not ready".to_string()));
/// assert_eq!(catch_kind(&instances, || Ok::<i32, String>(1).kind()).fix(), Ok(1));
/// ```
pub fn catch_kind<M, F, A, Body>(instance: &M, body: Body) -> Kind<F, A>
where
    M: MonadError<F, <M as ErrorChannel<F>>::Error> + ErrorChannel<F>,
    <M as ErrorChannel<F>>::Error: From<StepPanic>,
    F: Witness,
    A: Value,
    Body: FnOnce() -> Kind<F, A>,
{
    catch_unwind(AssertUnwindSafe(body)).unwrap_or_else(|payload| {
        let panic = StepPanic::from_payload(payload.as_ref());
        debug!(message = %panic.message, "step panicked while building a wrapped value");
        instance.raise_error(panic.into())
    })
}

/// Wraps a fallible step so that a panic inside it becomes an error.
///
/// # Examples
///
/// ```rust
/// use kindred::binding::catch_step;
///
/// let divide = catch_step(|n: i32| -> Result<i32, String> {
///     if n == 0 { panic!("division by zero") } else { Ok(100 / n) }
/// });
/// assert_eq!(divide(4), Ok(25));
/// assert_eq!(divide(0), Err("step panicked: division by zero".to_string()));
/// ```
pub fn catch_step<A, B, E, Step>(step: Step) -> impl Fn(A) -> Result<B, E> + Send + Sync + 'static
where
    E: From<StepPanic>,
    Step: Fn(A) -> Result<B, E> + Send + Sync + 'static,
{
    move |value| guard(|| step(value))
}
