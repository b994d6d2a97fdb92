//! The filter/map/consume pipeline.
//!
//! This module provides a single reusable control-flow shape: walk a
//! sequence once, decide for every element whether it takes part, turn the
//! accepted ones into derived values and hand those to a sink. The caller
//! supplies all three steps as closures, so the same function serves
//! in-memory collection, printing, writing to a socket or anything else.
//!
//! # Overview
//!
//! - [`process_elements`]: test, map and consume
//! - [`process_matching`]: test and consume, with no mapping step
//! - [`try_process_elements`], [`try_process_matching`]: the same passes with
//!   callbacks that can fail
//! - [`ProcessElements`]: all of the above as methods on any [`IntoIterator`]
//!
//! # Guarantees
//!
//! For each element, in source order:
//!
//! ```text
//! tester(&x) == false  =>  nothing else happens for x
//! tester(&x) == true   =>  block(mapper(x))
//! ```
//!
//! - exactly one forward pass; the source is never re-iterated
//! - no reordering, batching or parallelism
//! - no buffering: a derived value is consumed before the next element is tested
//! - no state survives the call
//!
//! # Relation to iterator adapters
//!
//! ```text
//! process_elements(s, p, f, b)  ==  s.into_iter().filter(p).map(f).for_each(b)
//! ```
//!
//! The difference is only in how the steps are named: the pipeline takes the
//! three behaviors as arguments, which makes it a natural target for
//! predicates built with [`crate::predicate`] combinators.
//!
//! # Failure
//!
//! The infallible forms let panics unwind through unchanged. The `try_`
//! forms return the first callback error as-is; nothing is wrapped and no
//! further element is processed.
//!
//! # Examples
//!
//! ```
//! use sift::pipeline::process_elements;
//!
//! struct Member {
//!     name: &'static str,
//!     age: u32,
//! }
//!
//! let roster = vec![Member { name: "Ann", age: 20 }, Member { name: "Bo", age: 15 }];
//!
//! let mut collected = Vec::new();
//! process_elements(
//!     &roster,
//!     |member| member.age >= 18,
//!     |member| member.name,
//!     |name| collected.push(name),
//! );
//! assert_eq!(collected, vec!["Ann"]);
//! ```

#[macro_use]
mod trace;

mod ext;
mod process;

pub use ext::ProcessElements;
pub use process::{process_elements, process_matching, try_process_elements, try_process_matching};
