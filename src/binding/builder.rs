//! A builder threading dependent steps through one chosen monad instance.

use super::catching::{catch_step, guard};
use crate::error::StepPanic;
use crate::typeclass::{Kind, Monad, MonadError, Value, Witness};

/// A sequence of dependent steps under the monad instance `M` for `F`.
///
/// Each `bind` is a `flat_map` on the chosen instance, so step *i + 1* is
/// only built once step *i* has produced its value, and a failure of the
/// instance's effect skips every later step.
///
/// # Examples
///
/// ```rust
/// use kindred::binding::Binding;
/// use kindred::instances::ResultInstances;
/// use kindred::typeclass::IntoKind;
///
/// let instances = ResultInstances::<String>::new();
/// let total = Binding::pure(instances, 2)
///     .bind(|n: i32| Ok::<i32, String>(n * 10).kind())
///     .map(|n| n + 1)
///     .finish();
/// assert_eq!(total.fix(), Ok(21));
/// ```
pub struct Binding<M, F: Witness, A: Value> {
    instance: M,
    current: Kind<F, A>,
}

impl<M, F, A> Binding<M, F, A>
where
    M: Monad<F> + Clone + Send + Sync + 'static,
    F: Witness,
    A: Value,
{
    /// Starts from an existing wrapped value.
    pub fn start(instance: M, fa: Kind<F, A>) -> Self {
        Self {
            instance,
            current: fa,
        }
    }

    /// Starts from a plain value lifted with `pure`.
    pub fn pure(instance: M, value: A) -> Self {
        let current = instance.pure(value);
        Self::start(instance, current)
    }

    /// Starts from a producer whose `Err` or panic is raised in the error channel.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::binding::Binding;
    /// use kindred::instances::ResultInstances;
    ///
    /// let started = Binding::start_catching(ResultInstances::<String>::new(), || -> Result<i32, String> {
    ///     panic!("no input")
    /// });
    /// assert_eq!(started.finish().fix(), Err("step panicked: no input".to_string()));
    /// ```
    pub fn start_catching<E, Producer>(instance: M, producer: Producer) -> Self
    where
        M: MonadError<F, E>,
        E: Value + From<StepPanic>,
        Producer: FnOnce() -> Result<A, E>,
    {
        let current = instance.from_result(guard(producer));
        Self::start(instance, current)
    }

    /// Appends a dependent step.
    pub fn bind<B, Step>(self, step: Step) -> Binding<M, F, B>
    where
        B: Value,
        Step: Fn(A) -> Kind<F, B> + Send + Sync + 'static,
    {
        let current = self.instance.flat_map(self.current, step);
        Binding::start(self.instance, current)
    }

    /// Transforms the current value.
    pub fn map<B, Function>(self, function: Function) -> Binding<M, F, B>
    where
        B: Value,
        Function: Fn(A) -> B + Send + Sync + 'static,
    {
        let current = self.instance.map(self.current, function);
        Binding::start(self.instance, current)
    }

    /// Appends a fallible step inside the catching boundary.
    ///
    /// `Err(e)` returned by the step and a panic inside it are both raised
    /// in the instance's error channel.
    pub fn bind_catching<B, E, Step>(self, step: Step) -> Binding<M, F, B>
    where
        M: MonadError<F, E>,
        B: Value,
        E: Value + From<StepPanic>,
        Step: Fn(A) -> Result<B, E> + Send + Sync + 'static,
    {
        let instance = self.instance.clone();
        let step = catch_step(step);
        let current = self
            .instance
            .flat_map(self.current, move |value| instance.from_result(step(value)));
        Binding::start(self.instance, current)
    }

    /// Recovers from a failure of the steps so far.
    pub fn handle_error_with<E, Handler>(self, handler: Handler) -> Self
    where
        M: MonadError<F, E>,
        E: Value,
        Handler: Fn(E) -> Kind<F, A> + Send + Sync + 'static,
    {
        let current = self.instance.handle_error_with(self.current, handler);
        Self::start(self.instance, current)
    }

    /// Returns the composed wrapped value.
    pub fn finish(self) -> Kind<F, A> {
        self.current
    }
}
