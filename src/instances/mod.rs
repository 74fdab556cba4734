//! Reference instances for the standard library constructors and the
//! common value-level algebras.
//!
//! Instances are zero-sized values. Pick the algebra at the call site:
//!
//! ```rust
//! use kindred::instances::{Max, Product, Sum};
//! use kindred::typeclass::{Monoid, Semigroup};
//!
//! assert_eq!(Sum.combine(2, 3), 5);
//! assert_eq!(Product.combine_all(vec![2, 3, 4]), 24);
//! assert_eq!(Monoid::<i32>::empty(&Max), i32::MIN);
//! ```
//!
//! | Instance | Witness | Capabilities |
//! |---|---|---|
//! | [`OptionInstances`] | `ForOption` | Functor .. `MonadError<_, ()>`, `MonoidK` (first present wins), Foldable |
//! | [`VecInstances`] | `ForVec` | Functor .. Monad, `MonoidK` (concatenation), Foldable |
//! | [`ResultInstances<E>`] | `ForResult<E>` | Functor .. `MonadError<_, E>`, Foldable |

mod monoids;
mod numeric;
mod option;
mod result;
mod vec;

pub use monoids::{Concat, OptionMonoid};
pub use numeric::{Bounded, Max, Min, Numeric, Product, Sum};
pub use option::OptionInstances;
pub use result::ResultInstances;
pub use vec::VecInstances;
