//! Instances for [`Result`] with a fixed error type.

use std::fmt;
use std::marker::PhantomData;

use crate::typeclass::{
    Applicative, ErrorChannel, Foldable, ForResult, Functor, Invariant, Kind, Monad, MonadError, Morphism, Value,
};

/// Every capability `Result<_, E>` supports. The error channel is `E`.
///
/// # Examples
///
/// ```rust
/// use kindred::instances::ResultInstances;
/// use kindred::typeclass::{IntoKind, Monad};
///
/// let instances = ResultInstances::<String>::new();
/// let parsed = instances.flat_map(Ok::<&str, String>("42").kind(), |text: &str| {
///     text.parse::<i32>().map_err(|error| error.to_string()).kind()
/// });
/// assert_eq!(parsed.fix(), Ok(42));
/// ```
pub struct ResultInstances<E> {
    marker: PhantomData<fn() -> E>,
}

impl<E> ResultInstances<E> {
    /// The instance for `Result<_, E>`.
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<E> Clone for ResultInstances<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for ResultInstances<E> {}

impl<E> Default for ResultInstances<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for ResultInstances<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("ResultInstances")
    }
}

impl<E: Value> Invariant<ForResult<E>> for ResultInstances<E> {
    fn imap<A, B, To, Back>(&self, fa: Kind<ForResult<E>, A>, to: To, _from: Back) -> Kind<ForResult<E>, B>
    where
        A: Value,
        B: Value,
        To: Fn(A) -> B + Send + Sync + 'static,
        Back: Fn(B) -> A + Send + Sync + 'static,
    {
        self.map(fa, to)
    }
}

impl<E: Value> Functor<ForResult<E>> for ResultInstances<E> {
    fn map<A, B, Function>(&self, fa: Kind<ForResult<E>, A>, function: Function) -> Kind<ForResult<E>, B>
    where
        A: Value,
        B: Value,
        Function: Fn(A) -> B + Send + Sync + 'static,
    {
        Kind::new(fa.fix().map(function))
    }
}

impl<E: Value> Applicative<ForResult<E>> for ResultInstances<E> {
    fn pure<A: Value>(&self, value: A) -> Kind<ForResult<E>, A> {
        Kind::new(Ok(value))
    }

    fn ap<A: Value, B: Value>(
        &self,
        ff: Kind<ForResult<E>, Morphism<A, B>>,
        fa: Kind<ForResult<E>, A>,
    ) -> Kind<ForResult<E>, B> {
        Kind::new(match (ff.fix(), fa.fix()) {
            (Ok(function), Ok(value)) => Ok(function(value)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        })
    }
}

impl<E: Value> Monad<ForResult<E>> for ResultInstances<E> {
    fn flat_map<A, B, Function>(&self, fa: Kind<ForResult<E>, A>, function: Function) -> Kind<ForResult<E>, B>
    where
        A: Value,
        B: Value,
        Function: Fn(A) -> Kind<ForResult<E>, B> + Send + Sync + 'static,
    {
        Kind::new(fa.fix().and_then(|value| function(value).fix()))
    }
}

impl<E: Value> MonadError<ForResult<E>, E> for ResultInstances<E> {
    fn raise_error<A: Value>(&self, error: E) -> Kind<ForResult<E>, A> {
        Kind::new(Err(error))
    }

    fn handle_error_with<A, Handler>(&self, fa: Kind<ForResult<E>, A>, handler: Handler) -> Kind<ForResult<E>, A>
    where
        A: Value,
        Handler: Fn(E) -> Kind<ForResult<E>, A> + Send + Sync + 'static,
    {
        match fa.fix() {
            Ok(value) => Kind::new(Ok(value)),
            Err(error) => handler(error),
        }
    }
}

impl<E: Value> ErrorChannel<ForResult<E>> for ResultInstances<E> {
    type Error = E;
}

impl<E: Value> Foldable<ForResult<E>> for ResultInstances<E> {
    fn fold_left<A, B, Function>(&self, fa: Kind<ForResult<E>, A>, init: B, function: Function) -> B
    where
        A: Value,
        Function: FnMut(B, A) -> B,
    {
        fa.fix().into_iter().fold(init, function)
    }
}

static_assertions::assert_impl_all!(ResultInstances<String>: Copy, Send, Sync);
