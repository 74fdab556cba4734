//! Sequential composition of dependent effectful steps.
//!
//! The binding runtime threads a chain of steps through one chosen
//! [`Monad`] instance. It adds no scheduling of its own: every step is a
//! `flat_map` on the instance, so suspension, asynchrony and cancellation
//! belong to the effect, and a failure of the effect short-circuits the
//! remaining steps.
//!
//! Three surfaces share those semantics:
//!
//! - [`bind!`](crate::bind): do-style syntax desugaring to nested `flat_map`
//! - [`Binding`]: a builder for chains assembled in code
//! - [`sequence`] / [`sequence_catching`]: folds over a list of steps
//!
//! The *catching* variants turn an `Err` returned by user logic, and any
//! panic inside it, into a raised error of a [`MonadError`] instance. For
//! `bind!` this is the `bind! { catching instance => .. }` form, built on
//! [`catch_kind`].
//!
//! # Examples
//!
//! ```rust
//! use kindred::binding::{Step, sequence};
//! use kindred::instances::OptionInstances;
//! use kindred::typeclass::{ForOption, IntoKind};
//! use std::sync::Arc;
//!
//! let steps: Vec<Step<ForOption, i32, i32>> = vec![
//!     Arc::new(|n: i32| Some(n + 1).kind()),
//!     Arc::new(|n: i32| Some(n * 10).kind()),
//! ];
//! assert_eq!(sequence(&OptionInstances, Some(1).kind(), steps).fix(), Some(20));
//! ```

mod bind_macro;
mod builder;
mod catching;

use std::sync::Arc;

pub use builder::Binding;
pub use catching::{catch_kind, catch_step};
pub(crate) use catching::guard;

use crate::error::StepPanic;
use crate::typeclass::{Kind, Monad, MonadError, Value, Witness};

/// A dependent step producing the next wrapped value.
pub type Step<F, A, B> = Arc<dyn Fn(A) -> Kind<F, B> + Send + Sync>;

/// A step of user logic that may fail (or panic).
pub type FallibleStep<A, B, E> = Arc<dyn Fn(A) -> Result<B, E> + Send + Sync>;

/// Runs `steps` in order, feeding each one the previous value.
///
/// A step only runs once its predecessor has produced a value; when the
/// effect fails, no later step runs.
pub fn sequence<M, F, A>(instance: &M, initial: Kind<F, A>, steps: Vec<Step<F, A, A>>) -> Kind<F, A>
where
    M: Monad<F>,
    F: Witness,
    A: Value,
{
    steps.into_iter().fold(initial, |current, step| {
        instance.flat_map(current, move |value| step(value))
    })
}

/// Runs fallible `steps` in order inside the catching boundary.
///
/// An `Err` returned by a step, or a panic inside it, is raised in the
/// error channel of `instance` and skips the remaining steps.
///
/// # Examples
///
/// ```rust
/// use kindred::binding::{FallibleStep, sequence_catching};
/// use kindred::instances::ResultInstances;
/// use kindred::typeclass::IntoKind;
/// use std::sync::Arc;
///
/// let steps: Vec<FallibleStep<i32, i32, String>> = vec![
///     Arc::new(|n: i32| -> Result<i32, String> { Ok(n - 1) }),
///     Arc::new(|n: i32| -> Result<i32, String> {
///         if n == 0 { Err("reached zero".to_string()) } else { Ok(n) }
///     }),
///     Arc::new(|_: i32| -> Result<i32, String> { unreachable!() }),
/// ];
/// let instances = ResultInstances::<String>::new();
/// let result = sequence_catching(&instances, Ok(1).kind(), steps);
/// assert_eq!(result.fix(), Err("reached zero".to_string()));
/// ```
pub fn sequence_catching<M, F, A, E>(
    instance: &M,
    initial: Kind<F, A>,
    steps: Vec<FallibleStep<A, A, E>>,
) -> Kind<F, A>
where
    M: MonadError<F, E> + Clone + Send + Sync + 'static,
    F: Witness,
    A: Value,
    E: Value + From<StepPanic>,
{
    steps.into_iter().fold(initial, |current, step| {
        let raising = instance.clone();
        instance.flat_map(current, move |value| {
            raising.from_result(guard(|| step(value)))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::{Deferred, DeferredInstances, ForDeferred};
    use crate::instances::{OptionInstances, ResultInstances, VecInstances};
    use crate::typeclass::{ForVec, IntoKind};
    use rstest::rstest;
    use std::sync::Mutex;

    #[rstest]
    fn sequence_without_steps_returns_initial() {
        assert_eq!(sequence(&OptionInstances, Some(3).kind(), Vec::new()).fix(), Some(3));
    }

    #[rstest]
    fn sequence_over_vec_branches() {
        let steps: Vec<Step<ForVec, i32, i32>> = vec![Arc::new(|n: i32| vec![n, n + 100].kind())];
        assert_eq!(sequence(&VecInstances, vec![1, 2].kind(), steps).fix(), vec![1, 101, 2, 102]);
    }

    #[rstest]
    fn deferred_steps_run_in_order_only_when_run() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let steps: Vec<Step<ForDeferred<String>, i32, i32>> = (1..=3)
            .map(|index: i32| {
                let log = Arc::clone(&log);
                let step: Step<ForDeferred<String>, i32, i32> = Arc::new(move |n: i32| {
                    let log = Arc::clone(&log);
                    Deferred::succeed(move || {
                        log.lock().unwrap().push(index);
                        n + index
                    })
                    .kind()
                });
                step
            })
            .collect();
        let instances = DeferredInstances::<String>::new();
        let composed = sequence(&instances, Deferred::pure(0).kind(), steps);
        assert!(log.lock().unwrap().is_empty());
        assert_eq!(composed.fix().run(), Ok(6));
        assert_eq!(*log.lock().unwrap(), vec![1, 2, 3]);
    }

    #[rstest]
    fn sequence_catching_turns_panics_into_errors() {
        let steps: Vec<FallibleStep<i32, i32, String>> =
            vec![Arc::new(|_: i32| -> Result<i32, String> { panic!("broken step") })];
        let instances = ResultInstances::<String>::new();
        let result = sequence_catching(&instances, Ok(1).kind(), steps);
        assert_eq!(result.fix(), Err("step panicked: broken step".to_string()));
    }
}
