//! Regression test parameters and operations

use crate::error::TestError;
use spriteseg_region::LabelMap;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare results (default)
    #[default]
    Compare,
    /// Compare and also print intermediate label maps
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the test name, the index of the current check and every failed
/// check. Checks never panic; call [`RegParams::cleanup`] at the end and
/// assert on its result.
pub struct RegParams {
    /// Name of the test (e.g., "spritesheet")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Recorded failures
    failures: Vec<TestError>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            self.fail(TestError::ValueMismatch {
                index: self.index,
                expected,
                actual,
                delta,
            });
            false
        } else {
            true
        }
    }

    /// Compare a label map against expected rows
    ///
    /// Returns `true` if the map has the same shape and every label matches.
    pub fn compare_label_rows(&mut self, expected: &[&[u32]], actual: &LabelMap) -> bool {
        self.index += 1;
        if self.display() {
            eprintln!("{}_reg index {}:\n{}", self.test_name, self.index, actual);
        }

        let exp_h = expected.len() as u32;
        let exp_w = expected.first().map_or(0, |r| r.len() as u32);
        if exp_w != actual.width() || exp_h != actual.height() {
            self.fail(TestError::LabelMapSize {
                index: self.index,
                expected: (exp_w, exp_h),
                actual: (actual.width(), actual.height()),
            });
            return false;
        }

        for (y, row) in expected.iter().enumerate() {
            for (x, &want) in row.iter().enumerate() {
                let got = actual.get(x as u32, y as u32).unwrap_or(u32::MAX);
                if got != want {
                    self.fail(TestError::LabelMapMismatch {
                        index: self.index,
                        x: x as u32,
                        y: y as u32,
                        expected: want,
                        actual: got,
                    });
                    return false;
                }
            }
        }
        true
    }

    /// Compare two label maps for exact equality
    pub fn compare_label_maps(&mut self, expected: &LabelMap, actual: &LabelMap) -> bool {
        let rows = expected.to_rows();
        let rows: Vec<&[u32]> = rows.iter().map(Vec::as_slice).collect();
        self.compare_label_rows(&rows, actual)
    }

    /// Compare two byte strings
    pub fn compare_strings(&mut self, expected: &[u8], actual: &[u8]) -> bool {
        self.index += 1;

        if expected != actual {
            self.fail(TestError::StringMismatch {
                index: self.index,
                expected_len: expected.len(),
                actual_len: actual.len(),
            });
            false
        } else {
            true
        }
    }

    fn fail(&mut self, err: TestError) {
        eprintln!("Failure in {}_reg: {}", self.test_name, err);
        self.failures.push(err);
    }

    /// Clean up and report results
    ///
    /// Returns `true` if every check passed.
    pub fn cleanup(self) -> bool {
        if self.failures.is_empty() {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.failures.is_empty()
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Get list of failures
    pub fn failures(&self) -> &[TestError] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spriteseg_region::build_label_map;

    #[test]
    fn test_compare_values() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.index(), 3);
        assert!(matches!(
            rp.failures()[0],
            TestError::ValueMismatch { index: 3, .. }
        ));
    }

    #[test]
    fn test_compare_label_rows() {
        let map = build_label_map(2, 2, vec![1, 0, 0, 2]).unwrap();
        let mut rp = RegParams::new("test");
        assert!(rp.compare_label_rows(&[&[1, 0], &[0, 2]], &map));
        assert!(!rp.compare_label_rows(&[&[1, 0], &[0, 3]], &map));
        assert!(!rp.compare_label_rows(&[&[1, 0]], &map));
        assert!(matches!(
            rp.failures()[0],
            TestError::LabelMapMismatch { x: 1, y: 1, .. }
        ));
        assert!(matches!(rp.failures()[1], TestError::LabelMapSize { .. }));
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_compare_strings() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_strings(b"abc", b"abc"));
        assert!(!rp.compare_strings(b"abc", b"ab"));
    }
}
