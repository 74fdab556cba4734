//! # kindred
//!
//! Capability-based functional abstractions for Rust: write generic code once
//! against Semigroup, Monoid, `MonoidK`, Invariant, Functor, Applicative,
//! Monad and `MonadError`, and choose the algebra at the call site.
//!
//! ## Overview
//!
//! - **Witness encoding**: `Kind<F, A>` emulates higher-kinded types
//!   ([`typeclass`])
//! - **Instances as values**: every capability is implemented by an
//!   instance value such as `OptionInstances` or `Sum` ([`instances`])
//! - **Registry**: canonical instances by `(witness, capability)`, plus
//!   derivation through conversions ([`registry`])
//! - **Binding runtime**: do-style sequencing through one chosen monad
//!   ([`binding`], [`bind!`])
//! - **Effects**: a deferred computation and an asynchronous
//!   value-or-nothing source ([`effect`])
//! - **Laws harness**: property-based conformance checks ([`laws`])
//!
//! ## Feature Flags
//!
//! - `async`: the Tokio-backed `Maybe` effect (default)
//! - `laws`: the laws harness, backed by `proptest` (default)
//! - `serde`: `Serialize`/`Deserialize` for the harness configuration
//! - `full`: every feature
//!
//! ## Example
//!
//! ```rust
//! use kindred::prelude::*;
//!
//! let total = bind! { OptionInstances =>
//!     x <= Some(20).kind();
//!     y <= Some(1).kind();
//!     yield x + y
//! };
//! assert_eq!(total.fix(), Some(21));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use kindred::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bind;
    pub use crate::binding::{Binding, sequence, sequence_catching};
    pub use crate::effect::{Deferred, DeferredInstances};
    #[cfg(feature = "async")]
    pub use crate::effect::{Maybe, MaybeInstances};
    pub use crate::instances::*;
    pub use crate::registry::{derive, lookup, transport};
    pub use crate::typeclass::*;
}

pub mod binding;
pub mod effect;
pub mod error;
pub mod instances;
#[cfg(feature = "laws")]
pub mod laws;
pub mod registry;
pub mod typeclass;
