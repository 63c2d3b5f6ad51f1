//! Per-session robots.txt state
//!
//! A policy is fetched at most once. After the first fetch attempt completes the
//! state is frozen: the ruleset (or its absence) is what every later permission
//! check sees.

use crate::robots::ParsedRobots;

/// Cached robots.txt state for one crawl session
#[derive(Debug, Clone, Default)]
pub struct RobotsPolicy {
    /// The parsed robots.txt, if one was successfully fetched
    ruleset: Option<ParsedRobots>,

    /// Whether the single fetch attempt has completed
    fetched: bool,
}

impl RobotsPolicy {
    /// Creates an unfetched policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once the fetch attempt has completed, whatever its outcome
    pub fn is_fetched(&self) -> bool {
        self.fetched
    }

    /// Records the outcome of the fetch attempt
    ///
    /// `None` means robots.txt was unavailable or unusable and everything is
    /// allowed. Calls after the first are ignored and return `false`.
    pub fn record(&mut self, ruleset: Option<ParsedRobots>) -> bool {
        if self.fetched {
            return false;
        }

        self.ruleset = ruleset;
        self.fetched = true;
        true
    }

    /// Returns the ruleset in force, if any
    pub fn ruleset(&self) -> Option<&ParsedRobots> {
        if self.fetched {
            self.ruleset.as_ref()
        } else {
            None
        }
    }

    /// Checks a request target against the policy
    ///
    /// An unfetched policy or one without a ruleset allows everything.
    pub fn is_allowed(&self, target: &str, agent: &str) -> bool {
        match self.ruleset() {
            Some(robots) => robots.is_allowed(target, agent),
            None => true,
        }
    }
}
