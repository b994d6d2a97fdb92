//! # sift
//!
//! Generic filter/map/consume pipelines for Rust.
//!
//! ## Overview
//!
//! The crate is built around a single higher-order operation: walk a
//! sequence once, test every element, transform the accepted ones and hand
//! each derived value to a sink. Everything else is there to make that
//! operation pleasant to call:
//!
//! - **Pipeline**: [`process_elements`](pipeline::process_elements) and its
//!   mapper-less and fallible variants, plus a method form
//! - **Predicates**: combinators (`not`, `and`, `or`, `contramap`, `within`, ...)
//!   for building testers out of smaller pieces
//! - **Transfer**: copying a sequence into a collection produced by a factory
//!
//! ## Feature Flags
//!
//! - `pipeline`: The filter/map/consume pipeline
//! - `predicate`: Predicate combinators
//! - `transfer`: Factory-driven element transfer
//! - `tracing`: Emit `tracing` spans and events from every pipeline pass
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use sift::prelude::*;
//!
//! struct Member {
//!     name: &'static str,
//!     age: u32,
//! }
//!
//! let roster = [
//!     Member { name: "Ann", age: 20 },
//!     Member { name: "Bo", age: 15 },
//! ];
//!
//! let mut adults = Vec::new();
//! process_elements(
//!     &roster,
//!     within(|member: &&Member| member.age, 18..),
//!     |member| member.name,
//!     |name| adults.push(name),
//! );
//! assert_eq!(adults, vec!["Ann"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the public items of every enabled module.
///
/// # Usage
///
/// ```rust
/// use sift::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "pipeline")]
    pub use crate::pipeline::*;

    #[cfg(feature = "predicate")]
    pub use crate::predicate::*;

    #[cfg(feature = "transfer")]
    pub use crate::transfer::*;
}

#[cfg(feature = "pipeline")]
pub mod pipeline;

#[cfg(feature = "predicate")]
pub mod predicate;

#[cfg(feature = "transfer")]
pub mod transfer;
