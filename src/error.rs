//! Error types raised outside of every algebra.
//!
//! None of these flow through a `MonadError` error channel: a registry
//! misconfiguration or a harness failure is reported as a plain `Result`
//! and can never be recovered by `handle_error_with`. The one exception is
//! [`StepPanic`], which the catching boundary of the binding runtime turns
//! into an algebra error for error types that opt in with `From<StepPanic>`.

use std::any::Any;

use thiserror::Error;

use crate::typeclass::Capability;
#[cfg(feature = "laws")]
use crate::typeclass::Law;

/// Failures resolving or registering instances.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No instance was registered for the pair.
    #[error("no {capability} instance registered for {witness}")]
    NotFound {
        /// The witness type name.
        witness: &'static str,
        /// The requested capability.
        capability: Capability,
    },

    /// A second instance was offered for a pair that already has one.
    #[error(
        "ambiguous {capability} instance for {witness}: {existing} is registered, {rejected} was rejected"
    )]
    Ambiguous {
        /// The witness type name.
        witness: &'static str,
        /// The capability of both instances.
        capability: Capability,
        /// The instance already registered.
        existing: &'static str,
        /// The instance that was refused.
        rejected: &'static str,
    },

    /// The registered instance is not of the requested type.
    #[error("{capability} instance for {witness} is {actual}, not {expected}")]
    InstanceType {
        /// The witness type name.
        witness: &'static str,
        /// The requested capability.
        capability: Capability,
        /// The instance type the caller asked for.
        expected: &'static str,
        /// The instance type that is registered.
        actual: &'static str,
    },
}

/// A panic raised by user step logic inside a catching boundary.
///
/// # Examples
///
/// ```rust
/// use kindred::error::StepPanic;
///
/// let panic = StepPanic::new("division by zero");
/// assert_eq!(panic.to_string(), "step panicked: division by zero");
/// let as_string: String = panic.into();
/// assert_eq!(as_string, "step panicked: division by zero");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("step panicked: {message}")]
pub struct StepPanic {
    /// The panic message, when the payload was a string.
    pub message: String,
}

impl StepPanic {
    /// Creates a `StepPanic` with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Extracts the message of a payload caught by `catch_unwind`.
    #[must_use]
    pub fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        Self { message }
    }
}

impl From<StepPanic> for String {
    fn from(panic: StepPanic) -> Self {
        panic.to_string()
    }
}

impl From<StepPanic> for () {
    fn from(_: StepPanic) -> Self {}
}

/// Failures of the laws harness itself, as opposed to law violations.
#[cfg(feature = "laws")]
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LawsError {
    /// The generator could not produce a sample.
    #[error("could not generate a sample for {law}: {reason}")]
    Generation {
        /// The law being checked.
        law: Law,
        /// The generator's explanation.
        reason: String,
    },

    /// A setting, or the environment variable it was read from, holds an
    /// unusable value.
    #[error("invalid value {value:?} for {variable}")]
    InvalidConfig {
        /// The setting or variable name.
        variable: &'static str,
        /// The rejected value.
        value: String,
    },
}

/// Failures starting a subscription.
#[cfg(feature = "async")]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SubscribeError {
    /// `subscribe` was called outside of a Tokio runtime.
    #[error("no Tokio runtime is running on this thread")]
    NoRuntime,
}
