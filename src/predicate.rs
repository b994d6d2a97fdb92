//! Predicate combinators.
//!
//! A predicate here is any `FnMut(&X) -> bool`, the same shape the pipeline
//! expects for its tester. The combinators in this module build larger
//! predicates out of smaller ones without writing a new closure for every
//! search criterion:
//!
//! - [`not`]: Logical negation
//! - [`and`], [`or`]: Short-circuit conjunction and disjunction
//! - [`always`], [`never`]: Constant predicates (the units of `and` and `or`)
//! - [`contramap`]: Test a value derived from the element
//! - [`within`]: Test that a derived value falls inside a range
//!
//! # Laws
//!
//! - **Double Negation**: `not(not(p)) == p`
//! - **And Identity**: `and(p, always()) == p`
//! - **Or Identity**: `or(p, never()) == p`
//! - **De Morgan**: `not(and(p, q)) == or(not(p), not(q))`
//!
//! # Examples
//!
//! ```
//! use sift::pipeline::process_matching;
//! use sift::predicate::{and, contramap, within};
//!
//! struct Member {
//!     name: &'static str,
//!     age: u32,
//!     enlisted: bool,
//! }
//!
//! let roster = [
//!     Member { name: "Fred", age: 21, enlisted: true },
//!     Member { name: "Jane", age: 19, enlisted: false },
//!     Member { name: "George", age: 30, enlisted: true },
//! ];
//!
//! let mut eligible = Vec::new();
//! process_matching(
//!     &roster,
//!     and(
//!         contramap(|member: &&Member| member.enlisted, |enlisted: &bool| *enlisted),
//!         within(|member: &&Member| member.age, 18..=25),
//!     ),
//!     |member| eligible.push(member.name),
//! );
//! assert_eq!(eligible, vec!["Fred"]);
//! ```

use std::ops::RangeBounds;

/// Negates a predicate.
///
/// # Examples
///
/// ```
/// use sift::predicate::not;
///
/// let mut is_odd = not(|number: &i32| number % 2 == 0);
/// assert!(is_odd(&3));
/// assert!(!is_odd(&4));
/// ```
#[inline]
pub fn not<X, P>(mut predicate: P) -> impl FnMut(&X) -> bool
where
    P: FnMut(&X) -> bool,
{
    move |element: &X| !predicate(element)
}

/// Combines two predicates with short-circuit AND.
///
/// `second` is only evaluated when `first` accepted the element.
///
/// # Examples
///
/// ```
/// use sift::predicate::and;
///
/// let mut teen = and(|age: &u32| *age >= 13, |age: &u32| *age <= 19);
/// assert!(teen(&15));
/// assert!(!teen(&20));
/// ```
#[inline]
pub fn and<X, P, Q>(mut first: P, mut second: Q) -> impl FnMut(&X) -> bool
where
    P: FnMut(&X) -> bool,
    Q: FnMut(&X) -> bool,
{
    move |element: &X| first(element) && second(element)
}

/// Combines two predicates with short-circuit OR.
///
/// `second` is only evaluated when `first` rejected the element.
///
/// # Examples
///
/// ```
/// use sift::predicate::or;
///
/// let mut extreme = or(|value: &i32| *value < -100, |value: &i32| *value > 100);
/// assert!(extreme(&-500));
/// assert!(!extreme(&0));
/// ```
#[inline]
pub fn or<X, P, Q>(mut first: P, mut second: Q) -> impl FnMut(&X) -> bool
where
    P: FnMut(&X) -> bool,
    Q: FnMut(&X) -> bool,
{
    move |element: &X| first(element) || second(element)
}

/// A predicate that accepts every element.
///
/// # Examples
///
/// ```
/// use sift::predicate::always;
///
/// let mut accept = always::<String>();
/// assert!(accept(&String::from("anything")));
/// ```
#[inline]
pub fn always<X>() -> impl FnMut(&X) -> bool {
    |_: &X| true
}

/// A predicate that rejects every element.
///
/// # Examples
///
/// ```
/// use sift::predicate::never;
///
/// let mut reject = never::<i32>();
/// assert!(!reject(&0));
/// ```
#[inline]
pub fn never<X>() -> impl FnMut(&X) -> bool {
    |_: &X| false
}

/// Tests a value derived from each element instead of the element itself.
///
/// `contramap(key, p)(x) == p(&key(x))`.
///
/// # Type Parameters
///
/// * `X` - The element type
/// * `K` - The type of the derived key
///
/// # Examples
///
/// ```
/// use sift::predicate::contramap;
///
/// let mut long_word = contramap(|word: &&str| word.len(), |length: &usize| *length > 4);
/// assert!(long_word(&"lambda"));
/// assert!(!long_word(&"fn"));
/// ```
#[inline]
pub fn contramap<X, K, F, P>(mut key: F, mut predicate: P) -> impl FnMut(&X) -> bool
where
    F: FnMut(&X) -> K,
    P: FnMut(&K) -> bool,
{
    move |element: &X| predicate(&key(element))
}

/// Accepts elements whose derived key lies inside `range`.
///
/// Any [`RangeBounds`] works, so both the half-open `low..high` search and
/// inclusive or open-ended ranges are covered.
///
/// # Examples
///
/// ```
/// use sift::predicate::within;
///
/// let mut working_age = within(|age: &u32| *age, 14..30);
/// assert!(working_age(&14));
/// assert!(!working_age(&30));
///
/// let mut adult = within(|age: &u32| *age, 18..);
/// assert!(adult(&65));
/// ```
#[inline]
pub fn within<X, K, F, R>(mut key: F, range: R) -> impl FnMut(&X) -> bool
where
    F: FnMut(&X) -> K,
    R: RangeBounds<K>,
    K: PartialOrd,
{
    move |element: &X| range.contains(&key(element))
}
