//! Do-style syntax for the binding runtime.
//!
//! This module provides the `bind!` macro, which chains dependent steps
//! through an explicitly chosen [`Monad`](crate::typeclass::Monad) instance.
//!
//! # Syntax
//!
//! ```text
//! bind! { instance =>
//!     pattern <= wrapped_expression;   // bind the value of a wrapped expression
//!     let pattern = expression;        // plain binding
//!     yield expression                 // lift the final value with `pure`
//! }
//! ```
//!
//! The last line is either `yield expression` or an expression that is
//! already a wrapped value. Binding sites accept an identifier, a tuple
//! pattern or `_`.
//!
//! Prefixing the instance with `catching` builds every step inside the
//! catching boundary: a panic while evaluating the right of a `<=`, a `let`
//! or the final value is raised in the instance's error channel as a
//! [`StepPanic`](crate::error::StepPanic) and skips the remaining steps.
//!
//! ```text
//! bind! { catching instance =>
//!     pattern <= wrapped_expression;
//!     yield expression
//! }
//! ```
//!
//! Each `<=` becomes a `flat_map` on the instance; the expression on the
//! right of `<=` is evaluated only once every earlier step has produced a
//! value. Bound variables are captured by the continuation closures, so
//! a non-`Copy` variable used after a later bind must be cloned.
//!
//! # Examples
//!
//! ```rust
//! use kindred::bind;
//! use kindred::instances::OptionInstances;
//! use kindred::typeclass::IntoKind;
//!
//! let result = bind! { OptionInstances =>
//!     x <= Some(5).kind();
//!     y <= Some(10).kind();
//!     let z = x + y;
//!     yield z * 2
//! };
//! assert_eq!(result.fix(), Some(30));
//! ```

/// Chains dependent steps through a monad instance.
///
/// See the [module documentation](crate::binding) for the syntax.
#[macro_export]
macro_rules! bind {
    (@bind $instance:ident; yield $value:expr) => {
        $crate::typeclass::Applicative::pure(&$instance, $value)
    };

    (@bind $instance:ident; $pattern:ident <= $wrapped:expr; $($rest:tt)+) => {{
        let continuation = ::core::clone::Clone::clone(&$instance);
        $crate::typeclass::Monad::flat_map(&$instance, $wrapped, move |$pattern| {
            let $instance = ::core::clone::Clone::clone(&continuation);
            $crate::bind!(@bind $instance; $($rest)+)
        })
    }};

    (@bind $instance:ident; ($($pattern:tt)*) <= $wrapped:expr; $($rest:tt)+) => {{
        let continuation = ::core::clone::Clone::clone(&$instance);
        $crate::typeclass::Monad::flat_map(&$instance, $wrapped, move |($($pattern)*)| {
            let $instance = ::core::clone::Clone::clone(&continuation);
            $crate::bind!(@bind $instance; $($rest)+)
        })
    }};

    (@bind $instance:ident; _ <= $wrapped:expr; $($rest:tt)+) => {{
        let continuation = ::core::clone::Clone::clone(&$instance);
        $crate::typeclass::Monad::flat_map(&$instance, $wrapped, move |_| {
            let $instance = ::core::clone::Clone::clone(&continuation);
            $crate::bind!(@bind $instance; $($rest)+)
        })
    }};

    (@bind $instance:ident; let $pattern:pat = $value:expr; $($rest:tt)+) => {{
        let $pattern = $value;
        $crate::bind!(@bind $instance; $($rest)+)
    }};

    (@bind $instance:ident; $result:expr) => {
        $result
    };

    (@catch $instance:ident; yield $value:expr) => {
        $crate::typeclass::Applicative::pure(&$instance, $value)
    };

    (@catch $instance:ident; $pattern:ident <= $wrapped:expr; $($rest:tt)+) => {{
        let continuation = ::core::clone::Clone::clone(&$instance);
        $crate::typeclass::Monad::flat_map(&$instance, $wrapped, move |$pattern| {
            let $instance = ::core::clone::Clone::clone(&continuation);
            $crate::binding::catch_kind(&$instance, || $crate::bind!(@catch $instance; $($rest)+))
        })
    }};

    (@catch $instance:ident; ($($pattern:tt)*) <= $wrapped:expr; $($rest:tt)+) => {{
        let continuation = ::core::clone::Clone::clone(&$instance);
        $crate::typeclass::Monad::flat_map(&$instance, $wrapped, move |($($pattern)*)| {
            let $instance = ::core::clone::Clone::clone(&continuation);
            $crate::binding::catch_kind(&$instance, || $crate::bind!(@catch $instance; $($rest)+))
        })
    }};

    (@catch $instance:ident; _ <= $wrapped:expr; $($rest:tt)+) => {{
        let continuation = ::core::clone::Clone::clone(&$instance);
        $crate::typeclass::Monad::flat_map(&$instance, $wrapped, move |_| {
            let $instance = ::core::clone::Clone::clone(&continuation);
            $crate::binding::catch_kind(&$instance, || $crate::bind!(@catch $instance; $($rest)+))
        })
    }};

    (@catch $instance:ident; let $pattern:pat = $value:expr; $($rest:tt)+) => {{
        let $pattern = $value;
        $crate::bind!(@catch $instance; $($rest)+)
    }};

    (@catch $instance:ident; $result:expr) => {
        $result
    };

    (catching $instance:expr => $($body:tt)+) => {{
        let instance = ::core::clone::Clone::clone(&$instance);
        $crate::binding::catch_kind(&instance, || $crate::bind!(@catch instance; $($body)+))
    }};

    ($instance:expr => $($body:tt)+) => {{
        let instance = ::core::clone::Clone::clone(&$instance);
        $crate::bind!(@bind instance; $($body)+)
    }};
}
