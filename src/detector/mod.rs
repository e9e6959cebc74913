//! PII detection primitives
//!
//! A [`Matcher`] is a pure predicate over a single token. Detectors are built
//! by composing primitive shape and checksum predicates with boolean
//! combinators, so the false-positive policy of each detector reads as a small
//! boolean expression:
//!
//! ```
//! use leakscan::detector::{and, any, not, patterns};
//!
//! let phone = and(
//!     any(vec![patterns::phone(), patterns::phone_with_extension()]),
//!     not(any(vec![
//!         patterns::email(),
//!         patterns::filename(),
//!         patterns::repeating_number(),
//!     ])),
//! );
//! assert!(phone.matches("+55-11-98765-4321"));
//! assert!(!phone.matches("555-555-5555"));
//! ```

pub mod builtin;
pub mod checksum;
pub mod patterns;

pub use builtin::DetectorKind;

use std::fmt;
use std::sync::Arc;

/// A pure `&str -> bool` predicate.
///
/// Cloning is cheap and shares the underlying closure. Matchers hold no
/// mutable state, so one value can be used from many threads at once.
#[derive(Clone)]
pub struct Matcher {
    test: Arc<dyn Fn(&str) -> bool + Send + Sync>,
}

impl Matcher {
    /// Wrap a predicate function
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            test: Arc::new(test),
        }
    }

    /// Evaluate the matcher against a token
    pub fn matches(&self, s: &str) -> bool {
        (self.test)(s)
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Matcher(..)")
    }
}

/// Logical negation of a matcher
pub fn not(m: Matcher) -> Matcher {
    Matcher::new(move |s| !m.matches(s))
}

/// Requires at least `n` of the supplied matchers to pass.
///
/// `n` is clamped to `[1, matchers.len()]`. Children are evaluated left to
/// right and evaluation stops once the outcome is decided: as soon as `n`
/// children passed, or as soon as too few children remain to reach `n`.
/// An empty list never matches.
pub fn at_least_n(n: usize, matchers: Vec<Matcher>) -> Matcher {
    let total = matchers.len();
    let required = n.max(1).min(total);

    Matcher::new(move |s| {
        let mut passes = 0;
        let mut fails = 0;
        for m in &matchers {
            if m.matches(s) {
                passes += 1;
            } else {
                fails += 1;
            }
            if total - fails < required {
                return false;
            }
            if passes >= required {
                return true;
            }
        }
        false
    })
}

/// All of the supplied matchers must pass
pub fn all(matchers: Vec<Matcher>) -> Matcher {
    let n = matchers.len();
    at_least_n(n, matchers)
}

/// Any one of the supplied matchers must pass
pub fn any(matchers: Vec<Matcher>) -> Matcher {
    at_least_n(1, matchers)
}

/// Logical AND of two matchers
pub fn and(a: Matcher, b: Matcher) -> Matcher {
    all(vec![a, b])
}

/// Logical OR of two matchers
pub fn or(a: Matcher, b: Matcher) -> Matcher {
    any(vec![a, b])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn always(result: bool) -> Matcher {
        Matcher::new(move |_| result)
    }

    fn counting(result: bool, counter: Arc<AtomicUsize>) -> Matcher {
        Matcher::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            result
        })
    }

    #[test]
    fn test_not() {
        assert!(not(always(false)).matches("x"));
        assert!(!not(always(true)).matches("x"));
    }

    #[test]
    fn test_and_or() {
        assert!(and(always(true), always(true)).matches(""));
        assert!(!and(always(true), always(false)).matches(""));
        assert!(or(always(false), always(true)).matches(""));
        assert!(!or(always(false), always(false)).matches(""));
    }

    #[test]
    fn test_at_least_n() {
        let m = at_least_n(2, vec![always(true), always(false), always(true)]);
        assert!(m.matches(""));

        let m = at_least_n(2, vec![always(true), always(false), always(false)]);
        assert!(!m.matches(""));
    }

    #[test]
    fn test_at_least_n_clamps() {
        // n above the number of matchers behaves like all()
        let m = at_least_n(10, vec![always(true), always(true)]);
        assert!(m.matches(""));
        let m = at_least_n(10, vec![always(true), always(false)]);
        assert!(!m.matches(""));

        // n of zero behaves like any()
        let m = at_least_n(0, vec![always(false), always(true)]);
        assert!(m.matches(""));
    }

    #[test]
    fn test_empty_matcher_list_never_matches() {
        assert!(!any(Vec::new()).matches("anything"));
        assert!(!all(Vec::new()).matches("anything"));
    }

    #[test]
    fn test_any_short_circuits_on_first_pass() {
        let counter = Arc::new(AtomicUsize::new(0));
        let m = any(vec![
            counting(true, counter.clone()),
            counting(true, counter.clone()),
            counting(true, counter.clone()),
        ]);
        assert!(m.matches(""));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_all_short_circuits_on_first_failure() {
        let counter = Arc::new(AtomicUsize::new(0));
        let m = all(vec![
            counting(true, counter.clone()),
            counting(false, counter.clone()),
            counting(true, counter.clone()),
        ]);
        assert!(!m.matches(""));
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_at_least_n_stops_when_unreachable() {
        let counter = Arc::new(AtomicUsize::new(0));
        // Needs 3 of 4; two early failures make it impossible
        let m = at_least_n(
            3,
            vec![
                counting(false, counter.clone()),
                counting(false, counter.clone()),
                counting(true, counter.clone()),
                counting(true, counter.clone()),
            ],
        );
        assert!(!m.matches(""));
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_matcher_is_shareable_across_threads() {
        let m = and(
            Matcher::new(|s| s.len() > 2),
            not(Matcher::new(|s| s.contains('@'))),
        );
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let m = m.clone();
                std::thread::spawn(move || m.matches("hello") && !m.matches("a@b"))
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
