//! Instance resolution: associating an algebra with a witness.
//!
//! Instances are selected explicitly at the call site. This module offers two
//! ways to find the canonical one:
//!
//! - **Statically**, through [`Provide`] and [`lookup`]. Each
//!   `(subject, capability)` pair has at most one implementation, which trait
//!   coherence enforces; asking for a pair with no implementation does not
//!   compile.
//! - **Dynamically**, through an [`InstanceRegistry`] assembled by a
//!   [`RegistryBuilder`]. Registration statically requires the instance to
//!   implement the capability; duplicates and misses are reported as
//!   [`RegistryError`] values.
//!
//! New instances can be derived from existing ones with [`derive`] (value
//! level) and [`transport`] (kind level).
//!
//! # Examples
//!
//! ```rust
//! use kindred::registry::lookup;
//! use kindred::typeclass::{ForOption, IntoKind, Monad, cap};
//!
//! let monad = lookup::<ForOption, cap::Monad>();
//! let result = monad.flat_map(Some(20).kind(), |n: i32| Some(n + 1).kind());
//! assert_eq!(result.fix(), Some(21));
//! ```
//!
//! A capability the witness does not have is a compile error:
//!
//! ```compile_fail
//! use kindred::registry::lookup;
//! use kindred::typeclass::{ForVec, cap};
//!
//! let _ = lookup::<ForVec, cap::MonadError>();
//! ```

mod canonical;
mod derive;

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::collections::hash_map::Entry as Slot;
use std::fmt;

use tracing::{debug, warn};

use crate::error::RegistryError;
use crate::typeclass::{
    Applicative, Capability, ErrorChannel, Foldable, Functor, Invariant, Monad, MonadError,
    Monoid, MonoidK, Semigroup, SemigroupK, Witness, cap,
};

pub use derive::{Derived, MonoidInvariant, NaturalIso, OptionAsResult, Transported, derive, transport};

/// Holds when `Self` is an instance of capability `C` for the subject `T`.
///
/// `T` is a witness for kind-level capabilities and a plain value type for
/// [`Semigroup`] and [`Monoid`]. Every capability has one blanket
/// implementation, so this trait never needs to be implemented by hand.
pub trait Satisfies<T, C: cap::Descriptor> {}

impl<T, I: Semigroup<T>> Satisfies<T, cap::Semigroup> for I {}

impl<T, I: Monoid<T>> Satisfies<T, cap::Monoid> for I {}

impl<F: Witness, I: SemigroupK<F>> Satisfies<F, cap::SemigroupK> for I {}

impl<F: Witness, I: MonoidK<F>> Satisfies<F, cap::MonoidK> for I {}

impl<F: Witness, I: Invariant<F>> Satisfies<F, cap::Invariant> for I {}

impl<F: Witness, I: Functor<F>> Satisfies<F, cap::Functor> for I {}

impl<F: Witness, I: Applicative<F>> Satisfies<F, cap::Applicative> for I {}

impl<F: Witness, I: Monad<F>> Satisfies<F, cap::Monad> for I {}

impl<F, I> Satisfies<F, cap::MonadError> for I
where
    F: Witness,
    I: ErrorChannel<F> + MonadError<F, <I as ErrorChannel<F>>::Error>,
{
}

impl<F: Witness, I: Foldable<F>> Satisfies<F, cap::Foldable> for I {}

/// The canonical instance of capability `C` for `Self`.
///
/// Implemented in this crate for every reference witness; downstream
/// crates implement it for their own witnesses.
pub trait Provide<C: cap::Descriptor>: Sized + 'static {
    /// The instance type.
    type Instance: Satisfies<Self, C> + Clone + Send + Sync + 'static;

    /// Returns the instance.
    fn instance() -> Self::Instance;
}

/// Resolves the canonical instance of capability `C` for `T`.
///
/// # Examples
///
/// ```rust
/// use kindred::registry::lookup;
/// use kindred::typeclass::{Monoid, cap};
///
/// let concat = lookup::<String, cap::Monoid>();
/// assert_eq!(concat.combine_all(vec!["a".to_string(), "b".to_string()]), "ab");
/// ```
#[must_use]
pub fn lookup<T, C>() -> T::Instance
where
    T: Provide<C>,
    C: cap::Descriptor,
{
    T::instance()
}

type Key = (TypeId, Capability);

struct Registered {
    instance_name: &'static str,
    instance: Box<dyn Any + Send + Sync>,
}

/// Collects instances before freezing them into an [`InstanceRegistry`].
///
/// # Examples
///
/// ```rust
/// use kindred::error::RegistryError;
/// use kindred::instances::{OptionInstances, Sum};
/// use kindred::registry::RegistryBuilder;
/// use kindred::typeclass::{ForOption, cap};
///
/// # fn main() -> Result<(), RegistryError> {
/// let mut builder = RegistryBuilder::new();
/// builder
///     .register::<ForOption, cap::Monad, _>(OptionInstances)?
///     .register::<i32, cap::Monoid, _>(Sum)?;
/// let registry = builder.build();
///
/// assert!(registry.contains::<ForOption, cap::Monad>());
/// assert!(registry.lookup::<ForOption, cap::Functor, OptionInstances>().is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct RegistryBuilder {
    entries: HashMap<Key, Registered>,
}

impl RegistryBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `instance` as the `C` instance for `T`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Ambiguous`] if the pair already has an
    /// instance. The existing registration is kept.
    pub fn register<T, C, I>(&mut self, instance: I) -> Result<&mut Self, RegistryError>
    where
        T: 'static,
        C: cap::Descriptor,
        I: Satisfies<T, C> + Send + Sync + 'static,
    {
        let capability = C::CAPABILITY;
        match self.entries.entry((TypeId::of::<T>(), capability)) {
            Slot::Occupied(occupied) => {
                let error = RegistryError::Ambiguous {
                    witness: type_name::<T>(),
                    capability,
                    existing: occupied.get().instance_name,
                    rejected: type_name::<I>(),
                };
                warn!(%error, "rejected duplicate instance");
                Err(error)
            }
            Slot::Vacant(vacant) => {
                debug!(
                    witness = type_name::<T>(),
                    %capability,
                    instance = type_name::<I>(),
                    "registered instance"
                );
                vacant.insert(Registered {
                    instance_name: type_name::<I>(),
                    instance: Box::new(instance),
                });
                Ok(self)
            }
        }
    }

    /// Registers the canonical instance returned by [`lookup`].
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Ambiguous`] if the pair already has an
    /// instance.
    pub fn register_canonical<T, C>(&mut self) -> Result<&mut Self, RegistryError>
    where
        T: Provide<C>,
        C: cap::Descriptor,
    {
        self.register::<T, C, T::Instance>(T::instance())
    }

    /// Freezes the registrations.
    #[must_use]
    pub fn build(self) -> InstanceRegistry {
        debug!(instances = self.entries.len(), "built instance registry");
        InstanceRegistry {
            entries: self.entries,
        }
    }
}

impl fmt::Debug for RegistryBuilder {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RegistryBuilder")
            .field("instances", &self.entries.len())
            .finish()
    }
}

/// An immutable map from `(subject, capability)` to an instance.
///
/// Shared freely between threads once built.
pub struct InstanceRegistry {
    entries: HashMap<Key, Registered>,
}

impl InstanceRegistry {
    /// Returns the `C` instance for `T`, which must be of type `I`.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotFound`] if nothing is registered for the pair.
    /// - [`RegistryError::InstanceType`] if the registered instance is not an
    ///   `I`.
    pub fn lookup<T, C, I>(&self) -> Result<&I, RegistryError>
    where
        T: 'static,
        C: cap::Descriptor,
        I: Satisfies<T, C> + 'static,
    {
        let capability = C::CAPABILITY;
        let registered = self
            .entries
            .get(&(TypeId::of::<T>(), capability))
            .ok_or_else(|| RegistryError::NotFound {
                witness: type_name::<T>(),
                capability,
            })?;
        registered
            .instance
            .downcast_ref::<I>()
            .ok_or_else(|| RegistryError::InstanceType {
                witness: type_name::<T>(),
                capability,
                expected: type_name::<I>(),
                actual: registered.instance_name,
            })
    }

    /// Returns whether a `C` instance is registered for `T`.
    #[must_use]
    pub fn contains<T: 'static, C: cap::Descriptor>(&self) -> bool {
        self.entries
            .contains_key(&(TypeId::of::<T>(), C::CAPABILITY))
    }

    /// The number of registrations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for InstanceRegistry {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut instances: Vec<_> = self
            .entries
            .iter()
            .map(|((_, capability), registered)| (capability, registered.instance_name))
            .collect();
        instances.sort_unstable();
        formatter
            .debug_struct("InstanceRegistry")
            .field("instances", &instances)
            .finish()
    }
}

static_assertions::assert_impl_all!(InstanceRegistry: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instances::{Max, OptionInstances, Product, ResultInstances, Sum, VecInstances};
    use crate::typeclass::{ForOption, ForResult, ForVec, IntoKind};
    use rstest::rstest;

    #[rstest]
    fn static_lookup_resolves_canonical_instances() {
        let functor = lookup::<ForVec, cap::Functor>();
        assert_eq!(functor.map(vec![1, 2].kind(), |n: i32| n * 10).fix(), vec![10, 20]);

        let errors = lookup::<ForResult<String>, cap::MonadError>();
        let raised = errors.raise_error::<i32>("boom".to_string());
        assert_eq!(raised.fix(), Err("boom".to_string()));
    }

    #[rstest]
    fn value_subjects_resolve_algebras() {
        assert_eq!(lookup::<i64, cap::Monoid>().combine_all(vec![1_i64, 2, 3]), 6);
        assert_eq!(lookup::<Vec<u8>, cap::Semigroup>().combine(vec![1], vec![2]), vec![1, 2]);
    }

    #[rstest]
    fn duplicate_registration_is_ambiguous() {
        let mut builder = RegistryBuilder::new();
        assert!(builder.register::<i32, cap::Semigroup, _>(Sum).is_ok());

        let error = builder.register::<i32, cap::Semigroup, _>(Max).err();
        assert!(matches!(
            error,
            Some(RegistryError::Ambiguous { capability: Capability::Semigroup, .. })
        ));

        let registry = builder.build();
        assert!(registry.lookup::<i32, cap::Semigroup, Sum>().is_ok());
    }

    #[rstest]
    fn missing_pair_is_not_found() {
        let registry = RegistryBuilder::new().build();
        let error = registry.lookup::<ForOption, cap::Monad, OptionInstances>().err();
        assert!(matches!(
            error,
            Some(RegistryError::NotFound { capability: Capability::Monad, .. })
        ));
        assert!(registry.is_empty());
    }

    #[rstest]
    fn wrong_instance_type_is_reported() {
        let mut builder = RegistryBuilder::new();
        assert!(builder.register::<i32, cap::Monoid, _>(Sum).is_ok());
        let registry = builder.build();

        let error = registry.lookup::<i32, cap::Monoid, Product>().err();
        assert!(matches!(error, Some(RegistryError::InstanceType { actual, .. }) if actual.ends_with("Sum")));
    }

    #[rstest]
    fn same_instance_for_several_capabilities() {
        let mut builder = RegistryBuilder::new();
        let registered = builder
            .register_canonical::<ForOption, cap::Functor>()
            .and_then(|builder| builder.register_canonical::<ForOption, cap::Monad>())
            .and_then(|builder| builder.register::<ForVec, cap::Foldable, _>(VecInstances))
            .and_then(|builder| {
                builder.register::<ForResult<()>, cap::MonadError, _>(ResultInstances::<()>::new())
            });
        assert!(registered.is_ok());

        let registry = builder.build();
        assert_eq!(registry.len(), 4);
        assert!(registry.contains::<ForOption, cap::Monad>());
        assert!(!registry.contains::<ForOption, cap::MonadError>());
    }
}
