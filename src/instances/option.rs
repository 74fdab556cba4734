//! Instances for [`Option`].
//!
//! The error channel is `()`: `raise_error(())` is `None`, and recovering
//! means replacing `None`.

use crate::typeclass::{
    Applicative, ErrorChannel, Foldable, ForOption, Functor, Invariant, Kind, Monad, MonadError, MonoidK,
    Morphism, SemigroupK, Value,
};

/// Every capability `Option` supports.
///
/// # Examples
///
/// ```rust
/// use kindred::instances::OptionInstances;
/// use kindred::typeclass::{IntoKind, SemigroupK};
///
/// let first = OptionInstances.combine_k(None.kind(), Some(2).kind());
/// assert_eq!(first.fix(), Some(2));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OptionInstances;

impl Invariant<ForOption> for OptionInstances {
    fn imap<A, B, To, Back>(&self, fa: Kind<ForOption, A>, to: To, _from: Back) -> Kind<ForOption, B>
    where
        A: Value,
        B: Value,
        To: Fn(A) -> B + Send + Sync + 'static,
        Back: Fn(B) -> A + Send + Sync + 'static,
    {
        self.map(fa, to)
    }
}

impl Functor<ForOption> for OptionInstances {
    fn map<A, B, Function>(&self, fa: Kind<ForOption, A>, function: Function) -> Kind<ForOption, B>
    where
        A: Value,
        B: Value,
        Function: Fn(A) -> B + Send + Sync + 'static,
    {
        Kind::new(fa.fix().map(function))
    }
}

impl Applicative<ForOption> for OptionInstances {
    fn pure<A: Value>(&self, value: A) -> Kind<ForOption, A> {
        Kind::new(Some(value))
    }

    fn ap<A: Value, B: Value>(
        &self,
        ff: Kind<ForOption, Morphism<A, B>>,
        fa: Kind<ForOption, A>,
    ) -> Kind<ForOption, B> {
        Kind::new(match (ff.fix(), fa.fix()) {
            (Some(function), Some(value)) => Some(function(value)),
            _ => None,
        })
    }
}

impl Monad<ForOption> for OptionInstances {
    fn flat_map<A, B, Function>(&self, fa: Kind<ForOption, A>, function: Function) -> Kind<ForOption, B>
    where
        A: Value,
        B: Value,
        Function: Fn(A) -> Kind<ForOption, B> + Send + Sync + 'static,
    {
        Kind::new(fa.fix().and_then(|value| function(value).fix()))
    }
}

impl MonadError<ForOption, ()> for OptionInstances {
    fn raise_error<A: Value>(&self, (): ()) -> Kind<ForOption, A> {
        Kind::new(None)
    }

    fn handle_error_with<A, Handler>(&self, fa: Kind<ForOption, A>, handler: Handler) -> Kind<ForOption, A>
    where
        A: Value,
        Handler: Fn(()) -> Kind<ForOption, A> + Send + Sync + 'static,
    {
        match fa.fix() {
            Some(value) => Kind::new(Some(value)),
            None => handler(()),
        }
    }
}

impl ErrorChannel<ForOption> for OptionInstances {
    type Error = ();
}

impl SemigroupK<ForOption> for OptionInstances {
    fn combine_k<A: Value>(&self, left: Kind<ForOption, A>, right: Kind<ForOption, A>) -> Kind<ForOption, A> {
        Kind::new(left.fix().or_else(|| right.fix()))
    }
}

impl MonoidK<ForOption> for OptionInstances {
    fn empty_k<A: Value>(&self) -> Kind<ForOption, A> {
        Kind::new(None)
    }
}

impl Foldable<ForOption> for OptionInstances {
    fn fold_left<A, B, Function>(&self, fa: Kind<ForOption, A>, init: B, function: Function) -> B
    where
        A: Value,
        Function: FnMut(B, A) -> B,
    {
        fa.fix().into_iter().fold(init, function)
    }
}

static_assertions::assert_impl_all!(OptionInstances: Copy, Send, Sync);
