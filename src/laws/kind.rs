//! Law sets for kind-level capabilities, from `Invariant` to `MonadError`.
//!
//! Every set is evaluated on a [`KindSample`]: a wrapped `i64` plus two plain
//! `i64`s used to build the functions that appear in the laws. Arithmetic
//! wraps, so every function is total and the conversions used by the
//! invariant laws are exact inverses.
//!
//! [`MonadLaws`] and [`MonadErrorLaws`] also take caller-supplied functions:
//! a Kleisli arrow `i64 -> F<i64>` and, for errors, a recovery
//! `E -> F<i64>`. Picking arrows that can fail makes the laws exercise the
//! short-circuiting paths.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use proptest::strategy::Strategy;

use super::{Equation, LawSet};
use crate::typeclass::{
    Applicative, Capability, Functor, Invariant, Kind, Law, Monad, MonadError, Morphism, Value,
    Witness, morphism,
};

/// The generated input of a kind-level law.
pub struct KindSample<F: Witness> {
    /// The wrapped value the laws transform.
    pub fa: Kind<F, i64>,
    /// A plain value, lifted with `pure` where a law needs one.
    pub value: i64,
    /// A parameter of the sampled functions.
    pub shift: i64,
}

impl<F: Witness> Clone for KindSample<F> {
    fn clone(&self) -> Self {
        Self {
            fa: self.fa.clone(),
            value: self.value,
            shift: self.shift,
        }
    }
}

impl<F: Witness> fmt::Debug for KindSample<F>
where
    Kind<F, i64>: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("KindSample")
            .field("fa", &self.fa)
            .field("value", &self.value)
            .field("shift", &self.shift)
            .finish()
    }
}

/// Builds a [`KindSample`] strategy from a strategy of wrapped values.
///
/// # Examples
///
/// ```rust
/// use kindred::laws::kind_sample;
/// use kindred::typeclass::IntoKind;
/// use proptest::prelude::*;
///
/// let samples = kind_sample(any::<Option<i64>>().prop_map(IntoKind::kind));
/// # let _ = samples;
/// ```
pub fn kind_sample<F, S>(fa: S) -> impl Strategy<Value = KindSample<F>>
where
    F: Witness,
    S: Strategy<Value = Kind<F, i64>>,
    Kind<F, i64>: fmt::Debug,
{
    (fa, proptest::arbitrary::any::<i64>(), proptest::arbitrary::any::<i64>())
        .prop_map(|(fa, value, shift)| KindSample { fa, value, shift })
}

/// A Kleisli arrow `i64 -> F<i64>`.
pub type Kleisli<F> = Arc<dyn Fn(i64) -> Kind<F, i64> + Send + Sync>;

type Recovery<F, E> = Arc<dyn Fn(E) -> Kind<F, i64> + Send + Sync>;

fn invariant_law<I, F>(instance: &I, law: Law, sample: &KindSample<F>) -> Option<Equation<Kind<F, i64>>>
where
    I: Invariant<F>,
    F: Witness,
{
    let shift = sample.shift;
    let mask = sample.value;
    match law {
        Law::InvariantIdentity => Some(Equation::new(
            instance.imap(sample.fa.clone(), |a: i64| a, |a: i64| a),
            sample.fa.clone(),
        )),
        Law::InvariantComposition => {
            let once = instance.imap(
                sample.fa.clone(),
                move |a: i64| a.wrapping_add(shift),
                move |a: i64| a.wrapping_sub(shift),
            );
            let twice = instance.imap(once, move |a: i64| a ^ mask, move |a: i64| a ^ mask);
            let composed = instance.imap(
                sample.fa.clone(),
                move |a: i64| a.wrapping_add(shift) ^ mask,
                move |a: i64| (a ^ mask).wrapping_sub(shift),
            );
            Some(Equation::new(twice, composed))
        }
        _ => None,
    }
}

fn functor_law<I, F>(instance: &I, law: Law, sample: &KindSample<F>) -> Option<Equation<Kind<F, i64>>>
where
    I: Functor<F>,
    F: Witness,
{
    let shift = sample.shift;
    let factor = sample.value;
    match law {
        Law::CovariantIdentity => Some(Equation::new(
            instance.map(sample.fa.clone(), |a: i64| a),
            sample.fa.clone(),
        )),
        Law::CovariantComposition => {
            let mapped = instance.map(sample.fa.clone(), move |a: i64| a.wrapping_add(shift));
            let left = instance.map(mapped, move |a: i64| a.wrapping_mul(factor));
            let right = instance.map(sample.fa.clone(), move |a: i64| {
                a.wrapping_add(shift).wrapping_mul(factor)
            });
            Some(Equation::new(left, right))
        }
        _ => invariant_law(instance, law, sample),
    }
}

fn applicative_law<I, F>(instance: &I, law: Law, sample: &KindSample<F>) -> Option<Equation<Kind<F, i64>>>
where
    I: Applicative<F>,
    F: Witness,
{
    let shift = sample.shift;
    let value = sample.value;
    match law {
        Law::ApplicativeIdentity => Some(Equation::new(
            instance.ap(instance.pure(morphism(|a: i64| a)), sample.fa.clone()),
            sample.fa.clone(),
        )),
        Law::ApplicativeHomomorphism => {
            let add = move |a: i64| a.wrapping_add(shift);
            Some(Equation::new(
                instance.ap(instance.pure(morphism(add)), instance.pure(value)),
                instance.pure(add(value)),
            ))
        }
        Law::ApplicativeInterchange => {
            let functions = instance.map(sample.fa.clone(), |a: i64| {
                morphism(move |b: i64| a.wrapping_sub(b))
            });
            let apply_to_value = morphism(move |function: Morphism<i64, i64>| function(value));
            Some(Equation::new(
                instance.ap(functions.clone(), instance.pure(value)),
                instance.ap(instance.pure(apply_to_value), functions),
            ))
        }
        Law::ApplicativeComposition => {
            let outer = instance.map(sample.fa.clone(), |a: i64| {
                morphism(move |b: i64| b.wrapping_add(a))
            });
            let inner = instance.pure(morphism(move |b: i64| b.wrapping_mul(shift)));
            let compose = morphism(|f: Morphism<i64, i64>| {
                morphism(move |g: Morphism<i64, i64>| {
                    let f = Arc::clone(&f);
                    morphism(move |a: i64| f(g(a)))
                })
            });
            let left = instance.ap(
                instance.ap(instance.ap(instance.pure(compose), outer.clone()), inner.clone()),
                sample.fa.clone(),
            );
            let right = instance.ap(outer, instance.ap(inner, sample.fa.clone()));
            Some(Equation::new(left, right))
        }
        _ => functor_law(instance, law, sample),
    }
}

fn monad_law<I, F>(
    instance: &I,
    kleisli: &Kleisli<F>,
    law: Law,
    sample: &KindSample<F>,
) -> Option<Equation<Kind<F, i64>>>
where
    I: Monad<F> + Clone + Send + Sync + 'static,
    F: Witness,
{
    let shift = sample.shift;
    match law {
        Law::MonadLeftIdentity => {
            let arrow = Arc::clone(kleisli);
            Some(Equation::new(
                instance.flat_map(instance.pure(sample.value), move |a| arrow(a)),
                kleisli(sample.value),
            ))
        }
        Law::MonadRightIdentity => {
            let lift = instance.clone();
            Some(Equation::new(
                instance.flat_map(sample.fa.clone(), move |a: i64| lift.pure(a)),
                sample.fa.clone(),
            ))
        }
        Law::MonadAssociativity => {
            let first = Arc::clone(kleisli);
            let second: Kleisli<F> = {
                let arrow = Arc::clone(kleisli);
                Arc::new(move |a: i64| arrow(a.wrapping_add(shift)))
            };
            let left = {
                let second = Arc::clone(&second);
                let bound = instance.flat_map(sample.fa.clone(), {
                    let first = Arc::clone(&first);
                    move |a| first(a)
                });
                instance.flat_map(bound, move |b| second(b))
            };
            let nested = instance.clone();
            let right = instance.flat_map(sample.fa.clone(), move |a| {
                let second = Arc::clone(&second);
                nested.flat_map(first(a), move |b| second(b))
            });
            Some(Equation::new(left, right))
        }
        _ => applicative_law(instance, law, sample),
    }
}

/// Identity and composition of `imap`.
pub struct InvariantLaws<I, F> {
    instance: I,
    marker: PhantomData<fn() -> F>,
}

impl<I, F> InvariantLaws<I, F> {
    /// Laws of `instance`.
    pub const fn new(instance: I) -> Self {
        Self {
            instance,
            marker: PhantomData,
        }
    }
}

impl<I, F> LawSet for InvariantLaws<I, F>
where
    I: Invariant<F>,
    F: Witness,
    Kind<F, i64>: fmt::Debug,
{
    type Sample = KindSample<F>;
    type Output = Kind<F, i64>;

    fn capability(&self) -> Capability {
        Capability::Invariant
    }

    fn evaluate(&self, law: Law, sample: &KindSample<F>) -> Option<Equation<Kind<F, i64>>> {
        invariant_law(&self.instance, law, sample)
    }
}

/// The functor laws, and the invariant laws they imply.
pub struct FunctorLaws<I, F> {
    instance: I,
    marker: PhantomData<fn() -> F>,
}

impl<I, F> FunctorLaws<I, F> {
    /// Laws of `instance`.
    pub const fn new(instance: I) -> Self {
        Self {
            instance,
            marker: PhantomData,
        }
    }
}

impl<I, F> LawSet for FunctorLaws<I, F>
where
    I: Functor<F>,
    F: Witness,
    Kind<F, i64>: fmt::Debug,
{
    type Sample = KindSample<F>;
    type Output = Kind<F, i64>;

    fn capability(&self) -> Capability {
        Capability::Functor
    }

    fn evaluate(&self, law: Law, sample: &KindSample<F>) -> Option<Equation<Kind<F, i64>>> {
        functor_law(&self.instance, law, sample)
    }
}

/// The applicative laws and those of every ancestor.
pub struct ApplicativeLaws<I, F> {
    instance: I,
    marker: PhantomData<fn() -> F>,
}

impl<I, F> ApplicativeLaws<I, F> {
    /// Laws of `instance`.
    pub const fn new(instance: I) -> Self {
        Self {
            instance,
            marker: PhantomData,
        }
    }
}

impl<I, F> LawSet for ApplicativeLaws<I, F>
where
    I: Applicative<F>,
    F: Witness,
    Kind<F, i64>: fmt::Debug,
{
    type Sample = KindSample<F>;
    type Output = Kind<F, i64>;

    fn capability(&self) -> Capability {
        Capability::Applicative
    }

    fn evaluate(&self, law: Law, sample: &KindSample<F>) -> Option<Equation<Kind<F, i64>>> {
        applicative_law(&self.instance, law, sample)
    }
}

/// The monad laws and those of every ancestor.
///
/// # Examples
///
/// ```rust
/// use kindred::instances::OptionInstances;
/// use kindred::laws::{MonadLaws, check, kind_sample};
/// use kindred::typeclass::{IntoKind, Natural};
/// use proptest::prelude::*;
///
/// let laws = MonadLaws::new(OptionInstances, |n: i64| (n % 3 != 0).then_some(n / 3).kind());
/// let samples = kind_sample(any::<Option<i64>>().prop_map(IntoKind::kind));
/// let report = check(&laws, &Natural, samples, 32).unwrap();
/// assert!(report.conforms());
/// ```
pub struct MonadLaws<I, F: Witness> {
    instance: I,
    kleisli: Kleisli<F>,
}

impl<I, F: Witness> MonadLaws<I, F> {
    /// Laws of `instance`, with `kleisli` as the bound function.
    pub fn new<Arrow>(instance: I, kleisli: Arrow) -> Self
    where
        Arrow: Fn(i64) -> Kind<F, i64> + Send + Sync + 'static,
    {
        Self {
            instance,
            kleisli: Arc::new(kleisli),
        }
    }
}

impl<I, F> LawSet for MonadLaws<I, F>
where
    I: Monad<F> + Clone + Send + Sync + 'static,
    F: Witness,
    Kind<F, i64>: fmt::Debug,
{
    type Sample = KindSample<F>;
    type Output = Kind<F, i64>;

    fn capability(&self) -> Capability {
        Capability::Monad
    }

    fn evaluate(&self, law: Law, sample: &KindSample<F>) -> Option<Equation<Kind<F, i64>>> {
        monad_law(&self.instance, &self.kleisli, law, sample)
    }
}

/// The monad error laws and those of every ancestor.
///
/// Samples pair a [`KindSample`] with a generated error.
pub struct MonadErrorLaws<I, F: Witness, E> {
    instance: I,
    kleisli: Kleisli<F>,
    recover: Recovery<F, E>,
}

impl<I, F: Witness, E> MonadErrorLaws<I, F, E> {
    /// Laws of `instance`, with `kleisli` as the bound function and
    /// `recover` as the error handler.
    pub fn new<Arrow, Handler>(instance: I, kleisli: Arrow, recover: Handler) -> Self
    where
        Arrow: Fn(i64) -> Kind<F, i64> + Send + Sync + 'static,
        Handler: Fn(E) -> Kind<F, i64> + Send + Sync + 'static,
    {
        Self {
            instance,
            kleisli: Arc::new(kleisli),
            recover: Arc::new(recover),
        }
    }
}

impl<I, F, E> LawSet for MonadErrorLaws<I, F, E>
where
    I: MonadError<F, E> + Clone + Send + Sync + 'static,
    F: Witness,
    E: Value + fmt::Debug,
    Kind<F, i64>: fmt::Debug,
{
    type Sample = (KindSample<F>, E);
    type Output = Kind<F, i64>;

    fn capability(&self) -> Capability {
        Capability::MonadError
    }

    fn evaluate(&self, law: Law, (sample, error): &Self::Sample) -> Option<Equation<Kind<F, i64>>> {
        let instance = &self.instance;
        match law {
            Law::RaiseErrorHandleWith => {
                let recover = Arc::clone(&self.recover);
                Some(Equation::new(
                    instance.handle_error_with(instance.raise_error(error.clone()), move |e| recover(e)),
                    (self.recover)(error.clone()),
                ))
            }
            Law::HandleErrorWithPure => {
                let recover = Arc::clone(&self.recover);
                Some(Equation::new(
                    instance.handle_error_with(instance.pure(sample.value), move |e| recover(e)),
                    instance.pure(sample.value),
                ))
            }
            Law::RaiseErrorFlatMap => {
                let kleisli = Arc::clone(&self.kleisli);
                Some(Equation::new(
                    instance.flat_map(instance.raise_error(error.clone()), move |a| kleisli(a)),
                    instance.raise_error(error.clone()),
                ))
            }
            _ => monad_law(instance, &self.kleisli, law, sample),
        }
    }
}
