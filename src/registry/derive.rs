//! Deriving instances through structure-preserving conversions.
//!
//! Two levels of derivation are provided:
//!
//! - [`derive`] turns a [`Semigroup`] or [`Monoid`] on `A` into one on `B`,
//!   given conversions `A -> B` and `B -> A`. [`MonoidInvariant`] exposes the
//!   same construction as the `Invariant` instance of [`ForMonoid`].
//! - [`transport`] turns any kind-level instance for `F` into one for `G`,
//!   given a [`NaturalIso`] between them.
//!
//! # Laws
//!
//! The conversions must be mutual inverses:
//!
//! ```text
//! to(from(b)) == b
//! from(to(a)) == a
//! ```
//!
//! Nothing checks this when an instance is derived. A derived instance built
//! from a pair that is not inverse may break the laws of its source; the laws
//! harness reports it (see `DerivedMonoidLaws`).
//!
//! # Examples
//!
//! ```rust
//! use kindred::instances::Sum;
//! use kindred::registry::derive;
//! use kindred::typeclass::Monoid;
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! struct Meters(u32);
//!
//! let meters = derive(Sum, |n: u32| Meters(n), |m: Meters| m.0);
//! assert_eq!(meters.combine_all(vec![Meters(3), Meters(4)]), Meters(7));
//! assert_eq!(meters.empty(), Meters(0));
//! ```

use std::fmt;
use std::sync::Arc;

use crate::typeclass::{
    Applicative, ErrorChannel, Foldable, ForMonoid, ForOption, ForResult, Functor, IntoKind,
    Invariant, Kind, Monad, MonadError, Monoid, MonoidK, MonoidOf, Morphism, Semigroup, SemigroupK,
    Value, Witness,
};

/// An algebra on `B` obtained from one on `A` and a pair of conversions.
pub struct Derived<S, A, B> {
    source: S,
    to: Morphism<A, B>,
    from: Morphism<B, A>,
}

/// Derives an algebra on `B` from `source`, an algebra on `A`.
///
/// `to` and `from` must be inverse to each other; this is not verified.
pub fn derive<S, A, B, To, Back>(source: S, to: To, from: Back) -> Derived<S, A, B>
where
    A: Value,
    B: Value,
    To: Fn(A) -> B + Send + Sync + 'static,
    Back: Fn(B) -> A + Send + Sync + 'static,
{
    Derived {
        source,
        to: Arc::new(to),
        from: Arc::new(from),
    }
}

impl<S, A, B> Derived<S, A, B> {
    /// Sends `value` to `A` and back.
    ///
    /// Equal to `value` whenever the conversions are inverse.
    pub fn round_trip(&self, value: B) -> B {
        (self.to)((self.from)(value))
    }

    /// The algebra this instance was derived from.
    pub const fn source(&self) -> &S {
        &self.source
    }
}

impl<S: Clone, A, B> Clone for Derived<S, A, B> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            to: Arc::clone(&self.to),
            from: Arc::clone(&self.from),
        }
    }
}

impl<S: fmt::Debug, A, B> fmt::Debug for Derived<S, A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Derived")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl<S: Semigroup<A>, A, B> Semigroup<B> for Derived<S, A, B> {
    fn combine(&self, left: B, right: B) -> B {
        (self.to)(self.source.combine((self.from)(left), (self.from)(right)))
    }
}

impl<S: Monoid<A>, A, B> Monoid<B> for Derived<S, A, B> {
    fn empty(&self) -> B {
        (self.to)(self.source.empty())
    }
}

/// The invariant functor of monoids: `imap` is [`derive`].
///
/// # Examples
///
/// ```rust
/// use kindred::instances::Concat;
/// use kindred::registry::MonoidInvariant;
/// use kindred::typeclass::{IntoKind, Invariant, MonoidOf, Semigroup};
///
/// let strings = MonoidOf::new(Concat).kind();
/// let chars = MonoidInvariant.imap(
///     strings,
///     |text: String| text.chars().collect::<Vec<char>>(),
///     |chars: Vec<char>| chars.into_iter().collect::<String>(),
/// );
/// let combined = chars.fix().combine(vec!['a'], vec!['b']);
/// assert_eq!(combined, vec!['a', 'b']);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MonoidInvariant;

impl Invariant<ForMonoid> for MonoidInvariant {
    fn imap<A, B, To, Back>(&self, fa: Kind<ForMonoid, A>, to: To, from: Back) -> Kind<ForMonoid, B>
    where
        A: Value,
        B: Value,
        To: Fn(A) -> B + Send + Sync + 'static,
        Back: Fn(B) -> A + Send + Sync + 'static,
    {
        MonoidOf::new(derive(fa.fix(), to, from)).kind()
    }
}

/// A natural isomorphism between two type constructors.
///
/// # Laws
///
/// For every `A`:
/// ```text
/// backward(forward(fa)) == fa
/// forward(backward(ga)) == ga
/// ```
pub trait NaturalIso: Clone + Send + Sync + 'static {
    /// The constructor the source instance is written for.
    type Source: Witness;
    /// The constructor the transported instance is written for.
    type Target: Witness;

    /// Converts from the source constructor.
    fn forward<A: Value>(&self, fa: Kind<Self::Source, A>) -> Kind<Self::Target, A>;

    /// Converts back to the source constructor.
    fn backward<A: Value>(&self, ga: Kind<Self::Target, A>) -> Kind<Self::Source, A>;
}

/// `Option<A>` and `Result<A, ()>` carry the same information.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OptionAsResult;

impl NaturalIso for OptionAsResult {
    type Source = ForOption;
    type Target = ForResult<()>;

    fn forward<A: Value>(&self, fa: Kind<ForOption, A>) -> Kind<ForResult<()>, A> {
        fa.fix().ok_or(()).kind()
    }

    fn backward<A: Value>(&self, ga: Kind<ForResult<()>, A>) -> Kind<ForOption, A> {
        ga.fix().ok().kind()
    }
}

/// Instances for `N::Target` obtained from instances `I` for `N::Source`.
///
/// Every operation converts its arguments backwards, runs the source
/// instance and converts the result forwards.
///
/// # Examples
///
/// ```rust
/// use kindred::instances::OptionInstances;
/// use kindred::registry::{OptionAsResult, transport};
/// use kindred::typeclass::{IntoKind, Monad, MonadError};
///
/// let results = transport(OptionInstances, OptionAsResult);
/// let halved = results.flat_map(Ok::<i32, ()>(8).kind(), |n: i32| Ok(n / 2).kind());
/// assert_eq!(halved.fix(), Ok(4));
/// assert_eq!(results.raise_error::<i32>(()).fix(), Err(()));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Transported<I, N> {
    source: I,
    iso: N,
}

/// Transports the instance `source` along `iso`.
pub const fn transport<I, N: NaturalIso>(source: I, iso: N) -> Transported<I, N> {
    Transported { source, iso }
}

impl<I, N> Invariant<N::Target> for Transported<I, N>
where
    I: Invariant<N::Source>,
    N: NaturalIso,
{
    fn imap<A, B, To, Back>(&self, ga: Kind<N::Target, A>, to: To, from: Back) -> Kind<N::Target, B>
    where
        A: Value,
        B: Value,
        To: Fn(A) -> B + Send + Sync + 'static,
        Back: Fn(B) -> A + Send + Sync + 'static,
    {
        self.iso
            .forward(self.source.imap(self.iso.backward(ga), to, from))
    }
}

impl<I, N> Functor<N::Target> for Transported<I, N>
where
    I: Functor<N::Source>,
    N: NaturalIso,
{
    fn map<A, B, Function>(&self, ga: Kind<N::Target, A>, function: Function) -> Kind<N::Target, B>
    where
        A: Value,
        B: Value,
        Function: Fn(A) -> B + Send + Sync + 'static,
    {
        self.iso
            .forward(self.source.map(self.iso.backward(ga), function))
    }
}

impl<I, N> Applicative<N::Target> for Transported<I, N>
where
    I: Applicative<N::Source>,
    N: NaturalIso,
{
    fn pure<A: Value>(&self, value: A) -> Kind<N::Target, A> {
        self.iso.forward(self.source.pure(value))
    }

    fn ap<A: Value, B: Value>(
        &self,
        gf: Kind<N::Target, Morphism<A, B>>,
        ga: Kind<N::Target, A>,
    ) -> Kind<N::Target, B> {
        let applied = self
            .source
            .ap(self.iso.backward(gf), self.iso.backward(ga));
        self.iso.forward(applied)
    }
}

impl<I, N> Monad<N::Target> for Transported<I, N>
where
    I: Monad<N::Source>,
    N: NaturalIso,
{
    fn flat_map<A, B, Function>(&self, ga: Kind<N::Target, A>, function: Function) -> Kind<N::Target, B>
    where
        A: Value,
        B: Value,
        Function: Fn(A) -> Kind<N::Target, B> + Send + Sync + 'static,
    {
        let iso = self.iso.clone();
        let bound = self
            .source
            .flat_map(self.iso.backward(ga), move |value| iso.backward(function(value)));
        self.iso.forward(bound)
    }
}

impl<I, N, E> MonadError<N::Target, E> for Transported<I, N>
where
    I: MonadError<N::Source, E>,
    N: NaturalIso,
    E: Value,
{
    fn raise_error<A: Value>(&self, error: E) -> Kind<N::Target, A> {
        self.iso.forward(self.source.raise_error(error))
    }

    fn handle_error_with<A, Handler>(&self, ga: Kind<N::Target, A>, handler: Handler) -> Kind<N::Target, A>
    where
        A: Value,
        Handler: Fn(E) -> Kind<N::Target, A> + Send + Sync + 'static,
    {
        let iso = self.iso.clone();
        let recovered = self
            .source
            .handle_error_with(self.iso.backward(ga), move |error| iso.backward(handler(error)));
        self.iso.forward(recovered)
    }
}

impl<I, N> ErrorChannel<N::Target> for Transported<I, N>
where
    I: ErrorChannel<N::Source>,
    N: NaturalIso,
{
    type Error = I::Error;
}

impl<I, N> SemigroupK<N::Target> for Transported<I, N>
where
    I: SemigroupK<N::Source>,
    N: NaturalIso,
{
    fn combine_k<A: Value>(&self, left: Kind<N::Target, A>, right: Kind<N::Target, A>) -> Kind<N::Target, A> {
        let combined = self
            .source
            .combine_k(self.iso.backward(left), self.iso.backward(right));
        self.iso.forward(combined)
    }
}

impl<I, N> MonoidK<N::Target> for Transported<I, N>
where
    I: MonoidK<N::Source>,
    N: NaturalIso,
{
    fn empty_k<A: Value>(&self) -> Kind<N::Target, A> {
        self.iso.forward(self.source.empty_k())
    }
}

impl<I, N> Foldable<N::Target> for Transported<I, N>
where
    I: Foldable<N::Source>,
    N: NaturalIso,
{
    fn fold_left<A, B, Function>(&self, ga: Kind<N::Target, A>, init: B, function: Function) -> B
    where
        A: Value,
        Function: FnMut(B, A) -> B,
    {
        self.source.fold_left(self.iso.backward(ga), init, function)
    }
}

static_assertions::assert_impl_all!(
    Derived<crate::instances::Sum, u32, u64>: Clone, Send, Sync
);
static_assertions::assert_impl_all!(
    Transported<crate::instances::OptionInstances, OptionAsResult>: Copy, Send, Sync
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instances::{Concat, OptionInstances, Product, ResultInstances, Sum};
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq)]
    struct Word(String);

    fn words() -> Derived<Concat, String, Word> {
        derive(Concat, Word, |word: Word| word.0)
    }

    #[rstest]
    fn derived_semigroup_combines_through_source() {
        let combined = words().combine(Word("ab".into()), Word("cd".into()));
        assert_eq!(combined, Word("abcd".into()));
    }

    #[rstest]
    fn derived_monoid_empty_is_converted_identity() {
        assert_eq!(words().empty(), Word(String::new()));
    }

    #[rstest]
    fn round_trip_of_inverse_pair_is_identity() {
        assert_eq!(words().round_trip(Word("x".into())), Word("x".into()));
    }

    #[rstest]
    fn round_trip_exposes_lossy_pair() {
        let clamped = derive(Product, |n: i32| n.clamp(0, 10), |n: i32| n);
        assert_eq!(clamped.round_trip(42), 10);
    }

    #[rstest]
    fn monoid_invariant_matches_derive() {
        let doubled = MonoidInvariant.imap(MonoidOf::new(Sum).kind(), |n: i64| n * 2, |n: i64| n / 2);
        assert_eq!(doubled.fix().combine(4, 6), 10);
    }

    #[rstest]
    #[case(Ok(3), Ok(6))]
    #[case(Err(()), Err(()))]
    fn transported_monad_agrees_with_result(
        #[case] input: Result<i32, ()>,
        #[case] expected: Result<i32, ()>,
    ) {
        let transported = transport(OptionInstances, OptionAsResult);
        let native = ResultInstances::<()>::new();
        let double = |n: i32| Ok::<i32, ()>(n * 2).kind();

        let via_option = transported.flat_map(input.kind(), double);
        let direct = native.flat_map(input.kind(), double);
        assert_eq!(via_option.fix(), expected);
        assert_eq!(direct.fix(), expected);
    }

    #[rstest]
    fn transported_error_recovery() {
        let transported = transport(OptionInstances, OptionAsResult);
        let recovered = transported.handle_error_with(Err::<i32, ()>(()).kind(), |()| Ok(1).kind());
        assert_eq!(recovered.fix(), Ok(1));
    }

    #[rstest]
    fn transported_monoid_k_and_fold() {
        let transported = transport(OptionInstances, OptionAsResult);
        let first = transported.combine_k(transported.empty_k(), Ok::<i32, ()>(5).kind());
        assert_eq!(first.clone().fix(), Ok(5));
        assert_eq!(transported.fold_left(first, 1, |total, n| total + n), 6);
    }
}
