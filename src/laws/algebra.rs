//! Law sets for algebras on values: semigroups, monoids and `MonoidK`.

use std::fmt;
use std::marker::PhantomData;

use super::{Equation, LawSet};
use crate::registry::Derived;
use crate::typeclass::{Capability, Kind, Law, Monoid, MonoidK, Semigroup, Value, Witness};

fn semigroup_law<S, A>(instance: &S, law: Law, (x, y, z): &(A, A, A)) -> Option<Equation<A>>
where
    S: Semigroup<A>,
    A: Clone,
{
    match law {
        Law::Associativity => Some(Equation::new(
            instance.combine(instance.combine(x.clone(), y.clone()), z.clone()),
            instance.combine(x.clone(), instance.combine(y.clone(), z.clone())),
        )),
        _ => None,
    }
}

fn monoid_law<M, A>(instance: &M, law: Law, sample: &(A, A, A)) -> Option<Equation<A>>
where
    M: Monoid<A>,
    A: Clone,
{
    let x = &sample.0;
    match law {
        Law::LeftIdentity => Some(Equation::new(
            instance.combine(instance.empty(), x.clone()),
            x.clone(),
        )),
        Law::RightIdentity => Some(Equation::new(
            instance.combine(x.clone(), instance.empty()),
            x.clone(),
        )),
        _ => semigroup_law(instance, law, sample),
    }
}

/// Associativity of a [`Semigroup`] on `A`, sampled on triples.
pub struct SemigroupLaws<S, A> {
    instance: S,
    marker: PhantomData<fn() -> A>,
}

impl<S, A> SemigroupLaws<S, A> {
    /// Laws of `instance`.
    pub const fn new(instance: S) -> Self {
        Self {
            instance,
            marker: PhantomData,
        }
    }
}

impl<S, A> LawSet for SemigroupLaws<S, A>
where
    S: Semigroup<A>,
    A: Clone + fmt::Debug,
{
    type Sample = (A, A, A);
    type Output = A;

    fn capability(&self) -> Capability {
        Capability::Semigroup
    }

    fn evaluate(&self, law: Law, sample: &Self::Sample) -> Option<Equation<A>> {
        semigroup_law(&self.instance, law, sample)
    }
}

/// Associativity and identity of a [`Monoid`] on `A`.
///
/// Identity laws use the first element of each sampled triple.
pub struct MonoidLaws<M, A> {
    instance: M,
    marker: PhantomData<fn() -> A>,
}

impl<M, A> MonoidLaws<M, A> {
    /// Laws of `instance`.
    pub const fn new(instance: M) -> Self {
        Self {
            instance,
            marker: PhantomData,
        }
    }
}

impl<M, A> LawSet for MonoidLaws<M, A>
where
    M: Monoid<A>,
    A: Clone + fmt::Debug,
{
    type Sample = (A, A, A);
    type Output = A;

    fn capability(&self) -> Capability {
        Capability::Monoid
    }

    fn evaluate(&self, law: Law, sample: &Self::Sample) -> Option<Equation<A>> {
        monoid_law(&self.instance, law, sample)
    }
}

/// The monoid laws of a [`MonoidK`] instance at element type `A`.
///
/// `MonoidK` laws hold for every `A`; checking them at one `A` is the usual
/// approximation.
pub struct MonoidKLaws<M, F, A> {
    instance: M,
    marker: PhantomData<fn() -> (F, A)>,
}

impl<M, F, A> MonoidKLaws<M, F, A> {
    /// Laws of `instance`.
    pub const fn new(instance: M) -> Self {
        Self {
            instance,
            marker: PhantomData,
        }
    }
}

impl<M, F, A> LawSet for MonoidKLaws<M, F, A>
where
    M: MonoidK<F> + Clone,
    F: Witness,
    A: Value,
    Kind<F, A>: fmt::Debug,
{
    type Sample = (Kind<F, A>, Kind<F, A>, Kind<F, A>);
    type Output = Kind<F, A>;

    fn capability(&self) -> Capability {
        Capability::MonoidK
    }

    fn evaluate(&self, law: Law, sample: &Self::Sample) -> Option<Equation<Kind<F, A>>> {
        monoid_law(&self.instance.algebra::<A>(), law, sample)
    }
}

/// The monoid laws of a derived monoid, plus the round trip of its
/// conversions.
///
/// A pair of conversions that are not inverse usually shows up as a
/// [`Law::RoundTrip`] violation, and often as identity violations too.
pub struct DerivedMonoidLaws<S, A, B> {
    derived: Derived<S, A, B>,
}

impl<S, A, B> DerivedMonoidLaws<S, A, B> {
    /// Laws of `derived`.
    pub const fn new(derived: Derived<S, A, B>) -> Self {
        Self { derived }
    }
}

impl<S, A, B> LawSet for DerivedMonoidLaws<S, A, B>
where
    S: Monoid<A>,
    B: Clone + fmt::Debug,
{
    type Sample = (B, B, B);
    type Output = B;

    fn capability(&self) -> Capability {
        Capability::Monoid
    }

    fn laws(&self) -> Vec<Law> {
        let mut laws = Capability::Monoid.all_laws();
        laws.push(Law::RoundTrip);
        laws
    }

    fn evaluate(&self, law: Law, sample: &Self::Sample) -> Option<Equation<B>> {
        match law {
            Law::RoundTrip => Some(Equation::new(
                self.derived.round_trip(sample.0.clone()),
                sample.0.clone(),
            )),
            _ => monoid_law(&self.derived, law, sample),
        }
    }
}
