//! Regression test parameters and comparisons

use spotter_core::{Point, Rect};
use std::fmt::Debug;

/// Regression test parameters
///
/// Tracks the state of a regression test: the test name, the index of the
/// current check and every recorded failure. Checks keep running after a
/// failure so one run reports all mismatches; [`RegParams::cleanup`]
/// returns the overall verdict.
pub struct RegParams {
    /// Name of the test (e.g., "pattern")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// Also installs the test logger so `RUST_LOG=debug` shows the library's
    /// timing messages.
    pub fn new(test_name: &str) -> Self {
        crate::init_logging();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `actual` is within `delta` of `expected`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            self.fail(format!(
                "value comparison: difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                diff, delta, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Compare two point sequences, order included
    pub fn compare_points(&mut self, expected: &[Point], actual: &[Point]) -> bool {
        self.compare_seq("point", expected, actual)
    }

    /// Compare two rectangle sequences, order included
    pub fn compare_rects(&mut self, expected: &[Rect], actual: &[Rect]) -> bool {
        self.compare_seq("rect", expected, actual)
    }

    /// Check a boolean condition
    pub fn check(&mut self, condition: bool, what: &str) -> bool {
        self.index += 1;
        if !condition {
            self.fail(format!("condition failed: {}", what));
        }
        condition
    }

    fn compare_seq<T: PartialEq + Debug>(&mut self, kind: &str, expected: &[T], actual: &[T]) -> bool {
        self.index += 1;

        if expected.len() != actual.len() {
            self.fail(format!(
                "{} comparison: length {} != expected {}\nactual = {:?}",
                kind,
                actual.len(),
                expected.len(),
                truncate(actual)
            ));
            return false;
        }

        if let Some(i) = expected.iter().zip(actual).position(|(e, a)| e != a) {
            self.fail(format!(
                "{} comparison: mismatch at position {}: expected {:?}, actual {:?}",
                kind, i, expected[i], actual[i]
            ));
            return false;
        }

        true
    }

    fn fail(&mut self, detail: String) {
        let msg = format!(
            "Failure in {}_reg: check {}: {}",
            self.test_name, self.index, detail
        );
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Finish the test and report the result
    ///
    /// Returns `true` if every check passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg ({} checks)", self.test_name, self.index);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        self.success
    }
}

fn truncate<T>(items: &[T]) -> &[T] {
    &items[..items.len().min(16)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_values() {
        let mut rp = RegParams::new("params_values");
        assert!(rp.compare_values(1.0, 1.0, 0.0));
        assert!(rp.compare_values(1.0, 1.05, 0.1));
        assert!(!rp.compare_values(1.0, 2.0, 0.5));
        assert_eq!(rp.index(), 3);
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_compare_points() {
        let mut rp = RegParams::new("params_points");
        let a = [Point::new(1, 2), Point::new(3, 4)];
        assert!(rp.compare_points(&a, &a));
        assert!(!rp.compare_points(&a, &a[..1]));
        assert!(!rp.compare_points(&a, &[Point::new(1, 2), Point::new(4, 3)]));
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_all_passing() {
        let mut rp = RegParams::new("params_ok");
        rp.check(true, "trivially true");
        rp.compare_rects(&[], &[]);
        assert!(rp.cleanup());
    }
}
