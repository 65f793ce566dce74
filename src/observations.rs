//! Tallies of binary outcomes in an observation string.

/// The symbol that marks a success (water).
pub const SUCCESS: char = 'W';
/// The symbol that marks a failure (land).
pub const FAILURE: char = 'L';

/// The number of successes and failures in a sequence of observations.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Observations {
    /// The original observation string, kept for titles and logs.
    data: String,
    successes: u32,
    failures: u32,
}

impl Observations {
    /// Count the success and failure markers in 'data'. Other symbols are
    /// skipped.
    pub fn parse(data: &str) -> Self {
        let mut successes = 0;
        let mut failures = 0;
        for c in data.chars() {
            match c {
                SUCCESS => successes += 1,
                FAILURE => failures += 1,
                _ => {}
            }
        }

        Self {
            data: data.to_string(),
            successes,
            failures,
        }
    }

    pub fn successes(&self) -> u32 {
        self.successes
    }

    pub fn failures(&self) -> u32 {
        self.failures
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }

    /// Returns the number of recognized observations.
    pub fn len(&self) -> usize {
        (self.successes + self.failures) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the probability of observing this sequence when the chance of
    /// a success is 'p'. The empty sequence has probability 1 everywhere,
    /// including the endpoints (0^0 = 1).
    pub fn likelihood(&self, p: f64) -> f64 {
        p.powi(self.successes as i32) * (1. - p).powi(self.failures as i32)
    }
}

#[test]
fn test_parse_counts() {
    let obs = Observations::parse("LWWLWWW");
    assert_eq!(obs.successes(), 5);
    assert_eq!(obs.failures(), 2);
    assert_eq!(obs.len(), 7);
    assert_eq!(obs.as_str(), "LWWLWWW");

    // Lowercase and unknown symbols don't count.
    let obs = Observations::parse("w?W L-x");
    assert_eq!(obs.successes(), 1);
    assert_eq!(obs.failures(), 1);
}

#[test]
fn test_empty_likelihood() {
    let obs = Observations::parse("");
    assert!(obs.is_empty());
    assert_eq!(obs.likelihood(0.), 1.);
    assert_eq!(obs.likelihood(0.3), 1.);
    assert_eq!(obs.likelihood(1.), 1.);
}
