//! Tests for the binding runtime.
//!
//! - `bind!` expands to the same `flat_map` chain written by hand
//! - Steps run in order and only after their predecessor produced a value
//! - The catching boundary turns `Err` and panics into the error channel

use std::sync::{Arc, Mutex};

use kindred::bind;
use kindred::binding::{Binding, FallibleStep, Step, catch_step, sequence, sequence_catching};
use kindred::effect::{Deferred, DeferredInstances, ForDeferred};
use kindred::instances::{OptionInstances, ResultInstances, VecInstances};
use kindred::typeclass::{ForOption, ForResult, IntoKind, Monad};
use proptest::prelude::*;
use rstest::rstest;

fn positive(n: i32) -> Option<i32> {
    (n > 0).then_some(n)
}

// =============================================================================
// bind! against hand-written chains
// =============================================================================

proptest! {
    #[test]
    fn bind_matches_hand_written_option_chain(a in any::<Option<i32>>(), b in -50_i32..50) {
        let expanded = bind! { OptionInstances =>
            x <= a.kind();
            y <= positive(b).kind();
            let total = x.wrapping_add(y);
            yield total
        };
        let by_hand = OptionInstances.flat_map(a.kind(), move |x: i32| {
            OptionInstances.flat_map(positive(b).kind(), move |y: i32| {
                Some(x.wrapping_add(y)).kind()
            })
        });
        prop_assert_eq!(expanded, by_hand);
    }

    #[test]
    fn bind_over_vec_is_a_cartesian_product(xs in prop::collection::vec(0_u8..10, 0..5), ys in prop::collection::vec(0_u8..10, 0..5)) {
        let inner = ys.clone();
        let pairs = bind! { VecInstances =>
            x <= xs.clone().kind();
            y <= inner.clone().kind();
            yield (x, y)
        };
        let expected: Vec<(u8, u8)> = xs.iter().flat_map(|&x| ys.iter().map(move |&y| (x, y))).collect();
        prop_assert_eq!(pairs.fix(), expected);
    }
}

#[rstest]
fn tuple_patterns_and_final_wrapped_expression() {
    let instances = ResultInstances::<String>::new();
    let result = bind! { instances =>
        (name, age) <= Ok::<(&'static str, u32), String>(("ada", 36)).kind();
        _ <= Ok::<(), String>(()).kind();
        Ok::<String, String>(format!("{name}:{age}")).kind()
    };
    assert_eq!(result.fix(), Ok("ada:36".to_string()));
}

#[rstest]
fn result_short_circuits_on_first_error() {
    let instances = ResultInstances::<String>::new();
    let result = bind! { instances =>
        x <= Ok::<i32, String>(1).kind();
        y <= Err::<i32, String>(format!("failed after {x}")).kind();
        yield x + y
    };
    assert_eq!(result.fix(), Err("failed after 1".to_string()));
}

// =============================================================================
// sequence
// =============================================================================

#[rstest]
fn sequence_runs_steps_in_order() {
    let trace = Arc::new(Mutex::new(Vec::new()));
    let steps: Vec<Step<ForOption, i32, i32>> = (1..=3)
        .map(|index| -> Step<ForOption, i32, i32> {
            let trace = Arc::clone(&trace);
            Arc::new(move |value: i32| {
                trace.lock().unwrap().push(index);
                Some(value * 10 + index).kind()
            })
        })
        .collect();

    let result = sequence(&OptionInstances, Some(0).kind(), steps);

    assert_eq!(result.fix(), Some(123));
    assert_eq!(*trace.lock().unwrap(), vec![1, 2, 3]);
}

#[rstest]
fn sequence_stops_at_nothing() {
    let trace = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&trace);
    let steps: Vec<Step<ForOption, i32, i32>> = vec![
        Arc::new(|_: i32| None::<i32>.kind()),
        Arc::new(move |value: i32| {
            recorded.lock().unwrap().push(value);
            Some(value).kind()
        }),
    ];

    assert_eq!(sequence(&OptionInstances, Some(1).kind(), steps).fix(), None);
    assert!(trace.lock().unwrap().is_empty());
}

#[rstest]
#[case(5, Ok(3))]
#[case(1, Err("cannot go below zero".to_string()))]
fn sequence_catching_stops_on_err(#[case] start: u32, #[case] expected: Result<u32, String>) {
    let decrement = || -> FallibleStep<u32, u32, String> {
        Arc::new(|n: u32| n.checked_sub(1).ok_or_else(|| "cannot go below zero".to_string()))
    };
    let steps = vec![decrement(), decrement()];

    let result = sequence_catching(&ResultInstances::<String>::new(), Ok::<u32, String>(start).kind(), steps);

    assert_eq!(result.fix(), expected);
}

#[rstest]
fn sequence_catching_raises_panics_in_deferred() {
    let steps: Vec<FallibleStep<i32, i32, String>> = vec![
        Arc::new(|n: i32| -> Result<i32, String> { Ok(n + 1) }),
        Arc::new(|n: i32| -> Result<i32, String> {
            assert!(n < 0, "unexpected value {n}");
            Ok(n)
        }),
    ];
    let instances = DeferredInstances::<String>::new();

    let result = sequence_catching(&instances, Deferred::<i32, String>::pure(1).kind(), steps);

    assert_eq!(result.fix().run(), Err("step panicked: unexpected value 2".to_string()));
}

// =============================================================================
// Binding builder
// =============================================================================

#[rstest]
fn builder_matches_macro() {
    let built = Binding::pure(OptionInstances, 4)
        .bind(|n: i32| positive(n - 1).kind())
        .map(|n| n * 3)
        .finish();
    let expanded = bind! { OptionInstances =>
        n <= Some(4).kind();
        m <= positive(n - 1).kind();
        yield m * 3
    };
    assert_eq!(built, expanded);
}

#[rstest]
fn builder_catches_and_recovers() {
    let recovered = Binding::start_catching(ResultInstances::<String>::new(), || Ok::<i32, String>(10))
        .bind_catching(|n: i32| -> Result<i32, String> {
            if n > 5 {
                panic!("limit exceeded by {}", n - 5);
            }
            Ok(n)
        })
        .handle_error_with(|error: String| Ok::<i32, String>(i32::try_from(error.len()).unwrap_or(0)).kind())
        .finish();

    let expected = i32::try_from("step panicked: limit exceeded by 5".len()).unwrap();
    assert_eq!(recovered.fix(), Ok(expected));
}

#[rstest]
fn builder_over_deferred_is_lazy() {
    let trace = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&trace);
    let computation = Binding::pure(DeferredInstances::<String>::new(), 2)
        .map(move |n: i32| {
            recorded.lock().unwrap().push(n);
            n + 1
        })
        .finish();

    assert!(trace.lock().unwrap().is_empty());
    let computation: Deferred<i32, String> = computation.fix();
    assert_eq!(computation.run(), Ok(3));
    assert_eq!(*trace.lock().unwrap(), vec![2]);
}

#[rstest]
fn catch_step_is_reusable() {
    let parse = catch_step(|text: String| -> Result<i32, String> {
        text.parse::<i32>().map_err(|error| error.to_string())
    });
    assert_eq!(parse("17".to_string()), Ok(17));
    assert!(parse("seventeen".to_string()).is_err());
}

#[rstest]
fn witnesses_are_explicit_in_step_types() {
    let _: Step<ForResult<String>, i32, i32> = Arc::new(|n: i32| Ok::<i32, String>(n).kind());
    let _: Step<ForDeferred<String>, i32, i32> = Arc::new(|n: i32| Deferred::<i32, String>::pure(n).kind());
}
