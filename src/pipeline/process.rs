//! Free-function forms of the pipeline.

/// Tests every element of `source`, maps the accepted ones and hands each
/// derived value to `block`.
///
/// The pass is single, forward and in source order. For every element the
/// call sequence is `tester`, then (only when the tester accepted it)
/// `mapper`, then `block` with the value `mapper` just produced. Nothing is
/// buffered: each derived value is consumed before the next element is
/// tested.
///
/// A panic raised by any callback unwinds straight through this function and
/// no further element is processed. Use [`try_process_elements`] when the
/// callbacks report failure through `Result`.
///
/// # Type Parameters
///
/// * `S` - The source sequence
/// * `X` - The element type yielded by `source`
/// * `Y` - The derived value type produced by `mapper`
///
/// # Arguments
///
/// * `source` - Any finite sequence; pass `&collection` to keep ownership
/// * `tester` - Called once per element with a reference to it
/// * `mapper` - Called once per accepted element, taking it by value
/// * `block` - Called once per derived value
///
/// # Examples
///
/// ```
/// use sift::pipeline::process_elements;
///
/// let mut squares_of_evens = Vec::new();
/// process_elements(
///     1..=6,
///     |number| number % 2 == 0,
///     |number| number * number,
///     |square| squares_of_evens.push(square),
/// );
/// assert_eq!(squares_of_evens, vec![4, 16, 36]);
/// ```
///
/// Borrowing the source leaves the caller's collection untouched:
///
/// ```
/// use sift::pipeline::process_elements;
///
/// let words = vec![String::from("alpha"), String::from("be"), String::from("gamma")];
/// let mut lengths = Vec::new();
/// process_elements(&words, |word| word.len() > 2, |word| word.len(), |length| lengths.push(length));
///
/// assert_eq!(lengths, vec![5, 5]);
/// assert_eq!(words.len(), 3);
/// ```
#[inline]
pub fn process_elements<S, X, Y, T, M, B>(source: S, mut tester: T, mut mapper: M, mut block: B)
where
    S: IntoIterator<Item = X>,
    T: FnMut(&X) -> bool,
    M: FnMut(X) -> Y,
    B: FnMut(Y),
{
    enter_pass!("process_elements");
    for element in source {
        let accepted = tester(&element);
        trace_decision!(accepted);
        if accepted {
            block(mapper(element));
        }
    }
}

/// Tests every element of `source` and hands the accepted ones to `block`
/// unchanged.
///
/// Equivalent to [`process_elements`] with an identity mapper.
///
/// # Examples
///
/// ```
/// use sift::pipeline::process_matching;
///
/// let mut short_words = Vec::new();
/// process_matching(["a", "bb", "ccc", "d"], |word| word.len() < 2, |word| short_words.push(word));
/// assert_eq!(short_words, vec!["a", "d"]);
/// ```
#[inline]
pub fn process_matching<S, X, T, B>(source: S, mut tester: T, mut block: B)
where
    S: IntoIterator<Item = X>,
    T: FnMut(&X) -> bool,
    B: FnMut(X),
{
    enter_pass!("process_matching");
    for element in source {
        let accepted = tester(&element);
        trace_decision!(accepted);
        if accepted {
            block(element);
        }
    }
}

/// Fallible form of [`process_elements`].
///
/// Each callback returns a `Result`. The first `Err` stops the pass
/// immediately and is returned exactly as the callback produced it: later
/// stages for the failing element are skipped and no later element is
/// tested. On success the result carries nothing, so callers that need to
/// know how far a failed pass got must count inside `block`.
///
/// # Errors
///
/// Returns the first error produced by `tester`, `mapper` or `block`.
///
/// # Examples
///
/// ```
/// use sift::pipeline::try_process_elements;
///
/// let mut parsed = Vec::new();
/// let result = try_process_elements(
///     ["1", "", "2", "x", "3"],
///     |text| Ok(!text.is_empty()),
///     |text| text.parse::<i32>(),
///     |number| {
///         parsed.push(number);
///         Ok(())
///     },
/// );
///
/// assert!(result.is_err());
/// assert_eq!(parsed, vec![1, 2]);
/// ```
#[inline]
pub fn try_process_elements<S, X, Y, E, T, M, B>(
    source: S,
    mut tester: T,
    mut mapper: M,
    mut block: B,
) -> Result<(), E>
where
    S: IntoIterator<Item = X>,
    T: FnMut(&X) -> Result<bool, E>,
    M: FnMut(X) -> Result<Y, E>,
    B: FnMut(Y) -> Result<(), E>,
{
    enter_pass!("try_process_elements");
    for element in source {
        let accepted = tester(&element).inspect_err(|_| {
            trace_failure!("tester");
        })?;
        trace_decision!(accepted);
        if accepted {
            let derived = mapper(element).inspect_err(|_| {
                trace_failure!("mapper");
            })?;
            block(derived).inspect_err(|_| {
                trace_failure!("block");
            })?;
        }
    }
    Ok(())
}

/// Fallible form of [`process_matching`].
///
/// # Errors
///
/// Returns the first error produced by `tester` or `block`.
///
/// # Examples
///
/// ```
/// use sift::pipeline::try_process_matching;
///
/// let mut budget = 10;
/// let result: Result<(), String> = try_process_matching(
///     [4, 3, 7, 2],
///     |cost| Ok(*cost > 2),
///     |cost| {
///         budget = u32::checked_sub(budget, cost).ok_or_else(|| format!("cannot afford {cost}"))?;
///         Ok(())
///     },
/// );
///
/// assert_eq!(result, Err(String::from("cannot afford 7")));
/// assert_eq!(budget, 3);
/// ```
#[inline]
pub fn try_process_matching<S, X, E, T, B>(source: S, mut tester: T, mut block: B) -> Result<(), E>
where
    S: IntoIterator<Item = X>,
    T: FnMut(&X) -> Result<bool, E>,
    B: FnMut(X) -> Result<(), E>,
{
    enter_pass!("try_process_matching");
    for element in source {
        let accepted = tester(&element).inspect_err(|_| {
            trace_failure!("tester");
        })?;
        trace_decision!(accepted);
        if accepted {
            block(element).inspect_err(|_| {
                trace_failure!("block");
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_process_elements_interleaves_callbacks_per_element() {
        let calls = RefCell::new(Vec::new());

        process_elements(
            [1, 2, 3],
            |number| {
                calls.borrow_mut().push(format!("test {number}"));
                *number != 2
            },
            |number| {
                calls.borrow_mut().push(format!("map {number}"));
                number * 10
            },
            |derived| calls.borrow_mut().push(format!("consume {derived}")),
        );

        assert_eq!(
            calls.into_inner(),
            vec![
                "test 1", "map 1", "consume 10", "test 2", "test 3", "map 3", "consume 30",
            ]
        );
    }

    #[test]
    fn test_process_matching_with_empty_source() {
        let mut consumed: Vec<i32> = Vec::new();
        process_matching(Vec::new(), |_| panic!("tester must not run"), |number| consumed.push(number));
        assert!(consumed.is_empty());
    }

    #[test]
    fn test_try_process_elements_returns_ok_when_nothing_fails() {
        let mut total = 0;
        let result: Result<(), ()> = try_process_elements(
            1..=4,
            |number| Ok(*number > 1),
            |number| Ok(number * 2),
            |doubled| {
                total += doubled;
                Ok(())
            },
        );
        assert_eq!(result, Ok(()));
        assert_eq!(total, 18);
    }

    #[test]
    fn test_try_process_matching_stops_at_tester_error() {
        let mut tested = Vec::new();
        let result = try_process_matching(
            ["ok", "bad", "ok"],
            |word| {
                tested.push(*word);
                if *word == "bad" { Err("rejected") } else { Ok(true) }
            },
            |_| Ok(()),
        );
        assert_eq!(result, Err("rejected"));
        assert_eq!(tested, vec!["ok", "bad"]);
    }
}
