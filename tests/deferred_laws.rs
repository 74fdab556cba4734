#![cfg(feature = "laws")]
//! Laws for the `Deferred` effect.
//!
//! Deferred computations are compared with `SameOutcome`: both sides are run
//! and their results compared.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use kindred::bind;
use kindred::effect::{Deferred, DeferredInstances, ForDeferred, SameOutcome};
use kindred::laws::{ApplicativeLaws, FunctorLaws, MonadErrorLaws, check, kind_sample};
use kindred::typeclass::{Capability, IntoKind, Kind, Law, MonadError};
use proptest::prelude::*;
use rstest::rstest;

type Computation = Kind<ForDeferred<String>, i64>;

fn computations() -> impl Strategy<Value = Computation> {
    prop_oneof![
        3 => any::<i64>().prop_map(|n| Deferred::<i64, String>::pure(n).kind()),
        1 => "[a-z]{1,8}".prop_map(|e| Deferred::<i64, String>::raise(e).kind()),
        1 => any::<i64>().prop_map(|n| Deferred::<i64, String>::succeed(move || n.wrapping_mul(3)).kind()),
    ]
}

fn checked_decrement(n: i64) -> Computation {
    Deferred::new(move || n.checked_sub(1).filter(|m| *m >= 0).ok_or_else(|| format!("{n} is not positive")))
        .kind()
}

// =============================================================================
// Laws
// =============================================================================

#[rstest]
fn deferred_is_a_functor() {
    let report = check(
        &FunctorLaws::new(DeferredInstances::<String>::new()),
        &SameOutcome,
        kind_sample(computations()),
        64,
    )
    .unwrap();
    assert!(report.conforms(), "{:?}", report.violations);
}

#[rstest]
fn deferred_is_applicative() {
    let report = check(
        &ApplicativeLaws::new(DeferredInstances::<String>::new()),
        &SameOutcome,
        kind_sample(computations()),
        64,
    )
    .unwrap();
    assert!(report.conforms(), "{:?}", report.violations);
    assert_eq!(report.laws_checked, Capability::Applicative.all_laws());
}

#[rstest]
fn deferred_satisfies_monad_error_laws() {
    let laws = MonadErrorLaws::new(
        DeferredInstances::<String>::new(),
        checked_decrement,
        |error: String| Deferred::pure(i64::try_from(error.len()).unwrap_or(0)).kind(),
    );
    let samples = (kind_sample(computations()), "[a-z]{1,8}");

    let report = check(&laws, &SameOutcome, samples, 128).unwrap();

    assert!(report.conforms(), "{:?}", report.violations);
    assert!(report.laws_checked.contains(&Law::RaiseErrorFlatMap));
    assert!(report.laws_checked.contains(&Law::MonadAssociativity));
}

// =============================================================================
// Deferred execution
// =============================================================================

#[rstest]
fn nothing_runs_until_run() {
    let runs = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&runs);
    let computation = bind! { DeferredInstances::<String>::new() =>
        x <= Deferred::succeed(move || counter.fetch_add(1, Ordering::SeqCst) + 1).kind();
        yield x * 10
    };

    assert_eq!(runs.load(Ordering::SeqCst), 0);
    let computation = computation.fix();
    assert_eq!(computation.run(), Ok(10));
    assert_eq!(computation.run(), Ok(20));
    assert_eq!(runs.load(Ordering::SeqCst), 2);
}

#[rstest]
fn raised_error_skips_later_steps() {
    let runs = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&runs);
    let instances = DeferredInstances::<String>::new();
    let computation = bind! { instances =>
        x <= instances.raise_error::<i64>("stopped".to_string());
        y <= Deferred::succeed({
            let counter = Arc::clone(&counter);
            move || {
                counter.fetch_add(1, Ordering::SeqCst);
                x + 1
            }
        })
        .kind();
        yield y
    };

    assert_eq!(computation.fix().run(), Err("stopped".to_string()));
    assert_eq!(runs.load(Ordering::SeqCst), 0);
}
