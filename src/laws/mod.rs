//! A harness checking that an instance satisfies the laws of its capability.
//!
//! A [`LawSet`] knows how to evaluate both sides of every law of one
//! capability for a generated sample. [`check`] draws samples from a
//! `proptest` strategy with a seeded runner, compares the two sides with an
//! [`Equality`] instance, and collects every failing sample into a
//! [`LawReport`]. It never stops at the first violation.
//!
//! A conforming report means "no violation found at this sample count". It
//! is evidence, not proof.
//!
//! # Examples
//!
//! ```rust
//! use kindred::instances::Sum;
//! use kindred::laws::{MonoidLaws, check};
//! use kindred::typeclass::Natural;
//! use proptest::prelude::*;
//!
//! let report = check(&MonoidLaws::new(Sum), &Natural, any::<(i32, i32, i32)>(), 64).unwrap();
//! assert!(report.conforms());
//! assert_eq!(report.laws_checked.len(), 3);
//! ```
//!
//! # Configuration
//!
//! [`LawsConfig::from_env`] reads `KINDRED_LAW_SAMPLES` and `KINDRED_LAW_SEED`
//! so the sample count can be raised in CI without touching code.

mod algebra;
mod kind;

use std::env;
use std::fmt;

use proptest::strategy::{Strategy, ValueTree};
use proptest::test_runner::{Config, RngAlgorithm, TestRng, TestRunner};
use tracing::{debug, warn};

pub use algebra::{DerivedMonoidLaws, MonoidKLaws, MonoidLaws, SemigroupLaws};
pub use kind::{
    ApplicativeLaws, FunctorLaws, InvariantLaws, KindSample, Kleisli, MonadErrorLaws, MonadLaws,
    kind_sample,
};

use crate::error::LawsError;
use crate::typeclass::{Capability, Equality, Law};

/// Samples drawn per law unless configured otherwise.
pub const DEFAULT_SAMPLE_COUNT: usize = 100;

const DEFAULT_SEED: u64 = 0x6b69_6e64_7265_6421;

const SAMPLES_VARIABLE: &str = "KINDRED_LAW_SAMPLES";
const SEED_VARIABLE: &str = "KINDRED_LAW_SEED";

/// The two sides of one law, evaluated for one sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation<T> {
    /// The left-hand side.
    pub left: T,
    /// The right-hand side.
    pub right: T,
}

impl<T> Equation<T> {
    /// Pairs two sides.
    pub const fn new(left: T, right: T) -> Self {
        Self { left, right }
    }
}

/// The laws of one capability, ready to be evaluated on samples.
pub trait LawSet {
    /// The generated input of every law.
    type Sample: Clone + fmt::Debug;
    /// The type both sides of a law evaluate to.
    type Output: fmt::Debug;

    /// The capability whose laws are checked.
    fn capability(&self) -> Capability;

    /// The laws to check, in order.
    fn laws(&self) -> Vec<Law> {
        self.capability().all_laws()
    }

    /// Evaluates both sides of `law`, or `None` if this set cannot check it.
    fn evaluate(&self, law: Law, sample: &Self::Sample) -> Option<Equation<Self::Output>>;
}

/// One failing sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The violated law.
    pub law: Law,
    /// The sample, rendered with `Debug`.
    pub sample: String,
    /// The left-hand side, rendered with `Debug`.
    pub left: String,
    /// The right-hand side, rendered with `Debug`.
    pub right: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{} violated for {}: {} != {}",
            self.law, self.sample, self.left, self.right
        )
    }
}

/// The outcome of checking one [`LawSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LawReport {
    /// The checked capability.
    pub capability: Capability,
    /// Samples drawn per law.
    pub sample_count: usize,
    /// The laws that were evaluated.
    pub laws_checked: Vec<Law>,
    /// Every failing sample, grouped by law in checking order.
    pub violations: Vec<Violation>,
}

impl LawReport {
    /// Returns `true` if no sample violated any law.
    #[must_use]
    pub fn conforms(&self) -> bool {
        self.violations.is_empty()
    }

    /// The violations of one law.
    pub fn violations_of(&self, law: Law) -> impl Iterator<Item = &Violation> {
        self.violations
            .iter()
            .filter(move |violation| violation.law == law)
    }

    /// The distinct laws with at least one violation.
    #[must_use]
    pub fn violated_laws(&self) -> Vec<Law> {
        let mut laws: Vec<Law> = self.violations.iter().map(|violation| violation.law).collect();
        laws.dedup();
        laws
    }
}

/// Sample count and seed of a harness run.
///
/// # Examples
///
/// ```rust
/// use kindred::laws::LawsConfig;
///
/// let config = LawsConfig::default().with_sample_count(500).with_seed(7);
/// assert_eq!(config.sample_count, 500);
/// assert_eq!(config.seed, 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LawsConfig {
    /// Samples drawn per law.
    pub sample_count: usize,
    /// Seed of the sample generator.
    pub seed: u64,
}

impl Default for LawsConfig {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            seed: DEFAULT_SEED,
        }
    }
}

impl LawsConfig {
    /// Sets the number of samples drawn per law.
    #[must_use]
    pub const fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Sets the generator seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Reads `KINDRED_LAW_SAMPLES` and `KINDRED_LAW_SEED`, falling back to the
    /// defaults for unset variables.
    ///
    /// # Errors
    ///
    /// Returns [`LawsError::InvalidConfig`] if a variable is set but is not a
    /// number, or if the sample count is zero.
    pub fn from_env() -> Result<Self, LawsError> {
        let defaults = Self::default();
        let sample_count = read_variable(SAMPLES_VARIABLE, defaults.sample_count)?;
        if sample_count == 0 {
            return Err(LawsError::InvalidConfig {
                variable: SAMPLES_VARIABLE,
                value: sample_count.to_string(),
            });
        }
        let seed = read_variable(SEED_VARIABLE, defaults.seed)?;
        Ok(Self { sample_count, seed })
    }
}

fn read_variable<T: std::str::FromStr>(variable: &'static str, default: T) -> Result<T, LawsError> {
    match env::var(variable) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| LawsError::InvalidConfig { variable, value }),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(env::VarError::NotUnicode(raw)) => Err(LawsError::InvalidConfig {
            variable,
            value: raw.to_string_lossy().into_owned(),
        }),
    }
}

/// Checks `laws` on `sample_count` samples per law with the default seed.
///
/// # Errors
///
/// Returns [`LawsError::InvalidConfig`] if `sample_count` is zero, and
/// [`LawsError::Generation`] if `generator` cannot produce a sample.
pub fn check<L, Q, G>(
    laws: &L,
    equality: &Q,
    generator: G,
    sample_count: usize,
) -> Result<LawReport, LawsError>
where
    L: LawSet,
    Q: Equality<L::Output>,
    G: Strategy<Value = L::Sample>,
{
    let config = LawsConfig::default().with_sample_count(sample_count);
    check_with(laws, equality, generator, &config)
}

/// Checks `laws` with an explicit configuration.
///
/// Every law sees the same sample sequence for a given seed.
///
/// # Errors
///
/// Returns [`LawsError::InvalidConfig`] if the configured sample count is
/// zero, and [`LawsError::Generation`] if `generator` cannot produce a
/// sample.
pub fn check_with<L, Q, G>(
    laws: &L,
    equality: &Q,
    generator: G,
    config: &LawsConfig,
) -> Result<LawReport, LawsError>
where
    L: LawSet,
    Q: Equality<L::Output>,
    G: Strategy<Value = L::Sample>,
{
    if config.sample_count == 0 {
        return Err(LawsError::InvalidConfig {
            variable: "sample_count",
            value: config.sample_count.to_string(),
        });
    }
    let capability = laws.capability();
    let mut report = LawReport {
        capability,
        sample_count: config.sample_count,
        laws_checked: Vec::new(),
        violations: Vec::new(),
    };

    for law in laws.laws() {
        let mut runner = seeded_runner(config.seed);
        let mut evaluated = false;
        let mut failures = 0_usize;

        for _ in 0..config.sample_count {
            let sample = generator
                .new_tree(&mut runner)
                .map_err(|reason| LawsError::Generation {
                    law,
                    reason: reason.to_string(),
                })?
                .current();
            let Some(equation) = laws.evaluate(law, &sample) else {
                break;
            };
            evaluated = true;
            if !equality.equal(&equation.left, &equation.right) {
                let violation = Violation {
                    law,
                    sample: format!("{sample:?}"),
                    left: format!("{:?}", equation.left),
                    right: format!("{:?}", equation.right),
                };
                warn!(%capability, %law, sample = %violation.sample, "law violated");
                report.violations.push(violation);
                failures += 1;
            }
        }

        if evaluated {
            debug!(%capability, %law, samples = config.sample_count, failures, "checked law");
            report.laws_checked.push(law);
        }
    }

    Ok(report)
}

fn seeded_runner(seed: u64) -> TestRunner {
    let mut bytes = [0_u8; 32];
    for chunk in bytes.chunks_exact_mut(8) {
        chunk.copy_from_slice(&seed.to_le_bytes());
    }
    TestRunner::new_with_rng(
        Config::default(),
        TestRng::from_seed(RngAlgorithm::ChaCha, &bytes),
    )
}
