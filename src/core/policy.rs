use crate::core::CallValue;
use crate::core::call::Wrapped;
use crate::core::error::FailureKind;
use crate::core::measure::new_measured;
use crate::core::suppress::new_suppressed;
use crate::core::validate::new_validated;

/// The behavior variant a wrapper applies.
///
/// A policy is plain data composed in code at startup; it carries all
/// the configuration there is (the suppression kind set and fallback
/// value). Applying one never changes the callable's declared
/// input/output value types.
#[derive(Clone)]
pub enum Policy {
    /// Reject an empty string argument before the base callable runs.
    Validate,
    /// Record wall-clock elapsed time around each invocation.
    Measure,
    /// Catch failures of the given kinds and return the fallback instead.
    Suppress {
        kinds: Vec<FailureKind>,
        fallback: CallValue,
    },
}

/// Applies a policy to a callable, producing a new callable with the
/// same external call signature.
///
/// Since the result is again a [`Wrapped`], policies stack:
///
/// ```rust
/// use filigree::prelude::*;
///
/// let echo = from_fn("echo", Ok);
/// let echo = wrap(wrap(echo, Policy::Validate), Policy::Measure);
///
/// assert_eq!(echo.call("hi".into()).unwrap(), CallValue::from("hi"));
/// assert_eq!(echo.name(), "echo");
/// ```
pub fn wrap(base: Wrapped, policy: Policy) -> Wrapped {
    match policy {
        Policy::Validate => new_validated(base),
        Policy::Measure => new_measured(base),
        Policy::Suppress { kinds, fallback } => new_suppressed(base, kinds, fallback),
    }
}
