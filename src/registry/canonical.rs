//! Canonical instances for the witnesses and value types of this crate.

use super::Provide;
use super::derive::MonoidInvariant;
use crate::instances::{Concat, OptionInstances, ResultInstances, Sum, VecInstances};
use crate::typeclass::{ForMonoid, ForOption, ForResult, ForVec, Value, cap};

#[cfg(feature = "async")]
use crate::effect::{ForMaybe, MaybeInstances};
use crate::effect::{DeferredInstances, ForDeferred};

/// Implements [`Provide`] for one subject and a list of capabilities.
macro_rules! provide {
    (impl[$($generics:tt)*] $subject:ty => $instance:ty = $constructor:expr;) => {};

    (impl[$($generics:tt)*] $subject:ty => $instance:ty = $constructor:expr; $capability:ident $(, $rest:ident)*) => {
        impl<$($generics)*> Provide<cap::$capability> for $subject {
            type Instance = $instance;

            fn instance() -> Self::Instance {
                $constructor
            }
        }

        provide!(impl[$($generics)*] $subject => $instance = $constructor; $($rest),*);
    };

    ($subject:ty => $instance:ty = $constructor:expr; $($capabilities:ident),+) => {
        provide!(impl[] $subject => $instance = $constructor; $($capabilities),+);
    };
}

provide!(ForOption => OptionInstances = OptionInstances;
    Invariant, Functor, Applicative, Monad, MonadError, SemigroupK, MonoidK, Foldable);

provide!(ForVec => VecInstances = VecInstances;
    Invariant, Functor, Applicative, Monad, SemigroupK, MonoidK, Foldable);

provide!(impl[E: Value] ForResult<E> => ResultInstances<E> = ResultInstances::new();
    Invariant, Functor, Applicative, Monad, MonadError, Foldable);

provide!(impl[E: Value] ForDeferred<E> => DeferredInstances<E> = DeferredInstances::new();
    Invariant, Functor, Applicative, Monad, MonadError);

#[cfg(feature = "async")]
provide!(impl[E: Value] ForMaybe<E> => MaybeInstances<E> = MaybeInstances::new();
    Invariant, Functor, Applicative, Monad, MonadError);

provide!(ForMonoid => MonoidInvariant = MonoidInvariant; Invariant);

provide!(String => Concat = Concat; Semigroup, Monoid);

provide!(impl[T: 'static] Vec<T> => Concat = Concat; Semigroup, Monoid);

provide!(i32 => Sum = Sum; Semigroup, Monoid);
provide!(i64 => Sum = Sum; Semigroup, Monoid);
provide!(u32 => Sum = Sum; Semigroup, Monoid);
provide!(u64 => Sum = Sum; Semigroup, Monoid);
provide!(usize => Sum = Sum; Semigroup, Monoid);
