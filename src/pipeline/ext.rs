//! Method-call syntax for the pipeline.

use super::process::{process_elements, process_matching, try_process_elements, try_process_matching};

/// Extension trait exposing the pipeline as methods on any [`IntoIterator`].
///
/// Every method delegates to the free function of the same name and has
/// exactly the same ordering, short-circuit and failure behavior.
///
/// # Examples
///
/// ```
/// use sift::pipeline::ProcessElements;
///
/// let mut initials = String::new();
/// ["Ann", "bo", "Cy"].process_elements(
///     |name| name.starts_with(char::is_uppercase),
///     |name| name.chars().next(),
///     |initial| initials.extend(initial),
/// );
/// assert_eq!(initials, "AC");
/// ```
pub trait ProcessElements: IntoIterator + Sized {
    /// See [`process_elements`](super::process_elements).
    ///
    /// # Examples
    ///
    /// ```
    /// use sift::pipeline::ProcessElements;
    ///
    /// let mut halves = Vec::new();
    /// vec![3, 8, 10].process_elements(|number| number % 2 == 0, |number| number / 2, |half| halves.push(half));
    /// assert_eq!(halves, vec![4, 5]);
    /// ```
    #[inline]
    fn process_elements<Y, T, M, B>(self, tester: T, mapper: M, block: B)
    where
        T: FnMut(&Self::Item) -> bool,
        M: FnMut(Self::Item) -> Y,
        B: FnMut(Y),
    {
        process_elements(self, tester, mapper, block);
    }

    /// See [`process_matching`](super::process_matching).
    ///
    /// # Examples
    ///
    /// ```
    /// use sift::pipeline::ProcessElements;
    ///
    /// let ages = [12, 40, 17, 65];
    /// let mut adults = Vec::new();
    /// ages.iter().process_matching(|age| **age >= 18, |age| adults.push(*age));
    /// assert_eq!(adults, vec![40, 65]);
    /// ```
    #[inline]
    fn process_matching<T, B>(self, tester: T, block: B)
    where
        T: FnMut(&Self::Item) -> bool,
        B: FnMut(Self::Item),
    {
        process_matching(self, tester, block);
    }

    /// See [`try_process_elements`](super::try_process_elements).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `tester`, `mapper` or `block`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sift::pipeline::ProcessElements;
    ///
    /// let mut total = 0;
    /// let result = ["4", "-", "5", "many", "6"].try_process_elements(
    ///     |text| Ok(*text != "-"),
    ///     |text| text.parse::<u32>(),
    ///     |count| {
    ///         total += count;
    ///         Ok(())
    ///     },
    /// );
    ///
    /// assert!(result.is_err());
    /// assert_eq!(total, 9);
    /// ```
    #[inline]
    fn try_process_elements<Y, E, T, M, B>(self, tester: T, mapper: M, block: B) -> Result<(), E>
    where
        T: FnMut(&Self::Item) -> Result<bool, E>,
        M: FnMut(Self::Item) -> Result<Y, E>,
        B: FnMut(Y) -> Result<(), E>,
    {
        try_process_elements(self, tester, mapper, block)
    }

    /// See [`try_process_matching`](super::try_process_matching).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `tester` or `block`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sift::pipeline::ProcessElements;
    ///
    /// let mut accepted = Vec::new();
    /// let result: Result<(), &str> = ["ok", "ok", "stop", "ok"].try_process_matching(
    ///     |word| if *word == "stop" { Err("stopped") } else { Ok(true) },
    ///     |word| {
    ///         accepted.push(word);
    ///         Ok(())
    ///     },
    /// );
    ///
    /// assert_eq!(result, Err("stopped"));
    /// assert_eq!(accepted, vec!["ok", "ok"]);
    /// ```
    #[inline]
    fn try_process_matching<E, T, B>(self, tester: T, block: B) -> Result<(), E>
    where
        T: FnMut(&Self::Item) -> Result<bool, E>,
        B: FnMut(Self::Item) -> Result<(), E>,
    {
        try_process_matching(self, tester, block)
    }
}

impl<S: IntoIterator> ProcessElements for S {}
