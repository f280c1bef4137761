//! # Filigree
//!
//! A small, composable function-wrapping toolkit: take a callable, get back
//! a callable with the same external signature and a little extra behavior
//! around it.
//!
//! ## Features
//!
//! - **Validation**: reject bad input before the base callable ever runs
//! - **Timing**: wall-clock measurement around each invocation, with a
//!   pluggable sink for structured records
//! - **Fallback-on-error**: swallow a configured set of failure kinds and
//!   substitute a default value; everything else propagates untouched
//! - **Composable Design**: a wrapped callable is itself wrappable, so
//!   policies stack without ceremony
//!
//! ## Quick Start
//!
//! ```rust
//! use filigree::prelude::*;
//!
//! // Any closure over a CallValue becomes a callable
//! let shout = from_fn("shout", |args| {
//!     let text = args.as_str().unwrap_or_default();
//!     Ok(CallValue::from(format!("{}!", text.to_uppercase())))
//! });
//!
//! // Wrapping adds behavior without changing the call signature
//! let shout = wrap(shout, Policy::Validate);
//!
//! assert_eq!(shout.call("hey".into()).unwrap(), CallValue::from("HEY!"));
//! assert!(shout.call("".into()).is_err());
//! ```
//!
//! ## Module Organization
//!
//! - [`Wrapped`] and [`CallLogic`] for defining callables
//! - [`Policy`] and [`wrap`] for applying a wrapping policy
//! - [`Timing`] and friends for observing measured durations
//! - [`prelude`]: commonly used types and functions (import with
//!   `use filigree::prelude::*`)

// ============================================================================
// Core Module
// ============================================================================

mod core;

// ============================================================================
// Public Re-exports - Granular Imports
// ============================================================================

// Callables
pub use crate::core::CallValue;
pub use crate::core::call::{CallLogic, FnLogic, Wrapped, from_fn};

// Errors
pub use crate::core::error::{CallError, FailureKind};

// Policies
pub use crate::core::measure::{MeasureLogic, new_measured, new_measured_with_sink};
pub use crate::core::policy::{Policy, wrap};
pub use crate::core::suppress::{SuppressLogic, new_suppressed};
pub use crate::core::validate::{ValidateLogic, new_validated};

// Timing
pub use crate::core::timing::{MemoryTimings, Timing, TimingEntry};

// ============================================================================
// Prelude Module - Convenient Bulk Imports
// ============================================================================

/// The prelude: imports everything you need to wrap callables.
///
/// # Example
/// ```rust
/// use filigree::prelude::*;
/// ```
pub mod prelude {
    pub use super::{
        CallError,
        CallLogic,
        CallValue,
        FailureKind,
        MemoryTimings,
        // Policies
        Policy,
        Timing,
        TimingEntry,
        // Core
        Wrapped,
        from_fn,
        new_measured,
        new_measured_with_sink,
        new_suppressed,
        new_validated,
        wrap,
    };
}

// ============================================================================
// Library Metadata
// ============================================================================

/// The version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of this crate.
pub const NAME: &str = env!("CARGO_PKG_NAME");
