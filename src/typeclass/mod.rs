//! Capability traits and the witness encoding they are written against.
//!
//! Every capability is a trait implemented by an *instance value*, not by
//! the data type itself:
//!
//! - [`Semigroup`], [`Monoid`]: algebras on a plain type `A`
//! - [`SemigroupK`], [`MonoidK`]: algebras on `F<A>` for every `A`
//! - [`Invariant`], [`Functor`]: mapping through conversions
//! - [`Applicative`], [`Monad`]: lifting and sequencing
//! - [`MonadError`]: sequencing with a disjoint error channel
//! - [`Foldable`]: reducing to a summary value
//!
//! Choosing the instance at the call site is what lets one type carry
//! several algebras (`Sum` and `Product` over the same integers) and lets
//! generic code be written once against `Kind<F, A>`.
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no higher-kinded types. A [`Witness`] tag with a Generic
//! Associated Type names each type constructor, and [`Kind<F, A>`] carries a
//! concrete `F<A>` tagged with it.
//!
//! ## Capability descriptors
//!
//! [`Capability`] and [`Law`] describe the hierarchy at runtime (for the
//! registry and the laws harness); the marker types in [`cap`] name the same
//! capabilities at the type level.
//!
//! # Examples
//!
//! ```rust
//! use kindred::instances::OptionInstances;
//! use kindred::typeclass::{Applicative, IntoKind, Monad};
//!
//! let result = OptionInstances.flat_map(Some(2).kind(), |x: i32| OptionInstances.pure(x * 21));
//! assert_eq!(result.fix(), Some(42));
//! ```

mod applicative;
mod capability;
mod equality;
mod foldable;
mod functor;
mod higher;
mod monad;
mod monad_error;
mod monoid;
mod semigroup;

pub use applicative::Applicative;
pub use capability::{Capability, Law, cap};
pub use equality::{Equality, Natural};
pub use foldable::Foldable;
pub use functor::{Functor, Invariant};
pub use higher::{ForOption, ForResult, ForVec, IntoKind, Kind, Morphism, Value, Witness, morphism};
pub use monad::Monad;
pub use monad_error::{ErrorChannel, MonadError};
pub use monoid::{ForMonoid, Monoid, MonoidK, MonoidKAlgebra, MonoidOf};
pub use semigroup::{Semigroup, SemigroupK};
