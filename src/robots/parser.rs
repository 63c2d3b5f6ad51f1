//! Robots.txt ruleset wrapper
//!
//! Rule matching is delegated to the robotstxt crate (a port of Google's
//! matcher), which implements user-agent group selection and longest-match
//! Allow/Disallow evaluation.

use robotstxt::DefaultMatcher;
use thiserror::Error;

/// Origin prefixed to request targets before matching, so that a target such
/// as `//docs` is never mistaken for a network path
const MATCH_ORIGIN: &str = "http://robots.invalid";

/// Reasons a robots.txt body is rejected
#[derive(Debug, Error)]
pub enum RobotsParseError {
    #[error("robots.txt body is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
}

/// Parsed robots.txt data
///
/// Holds the robots.txt text for one site. Only bodies that decode as text are
/// accepted; anything else is reported as a parse failure so that the caller can
/// fall back to allowing everything.
#[derive(Debug, Clone)]
pub struct ParsedRobots {
    content: String,
}

impl ParsedRobots {
    /// Parses a raw robots.txt response body
    ///
    /// # Arguments
    ///
    /// * `body` - The bytes of the robots.txt response
    ///
    /// # Returns
    ///
    /// * `Ok(ParsedRobots)` - The body is usable as a ruleset
    /// * `Err(RobotsParseError)` - The body cannot be read as robots.txt text
    pub fn parse(body: &[u8]) -> Result<Self, RobotsParseError> {
        let text = std::str::from_utf8(body)?;
        Ok(Self::from_content(text))
    }

    /// Creates a ruleset from robots.txt text
    pub fn from_content(content: &str) -> Self {
        Self {
            content: content.trim_start_matches('\u{feff}').to_string(),
        }
    }

    /// Returns the robots.txt text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Checks if a request target is allowed for the given robots agent token
    ///
    /// # Arguments
    ///
    /// * `target` - Path plus optional query (e.g., "/docs/page?x=1")
    /// * `agent` - The product token that robots.txt groups are matched against
    ///
    /// # Returns
    ///
    /// * `true` - If the target is allowed
    /// * `false` - If the target is disallowed
    pub fn is_allowed(&self, target: &str, agent: &str) -> bool {
        if self.content.trim().is_empty() {
            return true;
        }

        let url = format!("{}{}", MATCH_ORIGIN, target);
        let mut matcher = DefaultMatcher::default();
        matcher.one_agent_allowed_by_robots(&self.content, agent, &url)
    }

    /// Gets the crawl delay (in seconds) that applies to the given agent token
    ///
    /// A group naming the agent takes precedence over the `*` group. Groups are
    /// runs of `User-agent` lines followed by their directives.
    pub fn crawl_delay(&self, agent: &str) -> Option<f64> {
        let mut group_agents: Vec<String> = Vec::new();
        let mut in_directives = false;
        let mut specific: Option<f64> = None;
        let mut wildcard: Option<f64> = None;

        for line in self.content.lines() {
            let line = match line.split_once('#') {
                Some((before, _)) => before.trim(),
                None => line.trim(),
            };

            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim().to_ascii_lowercase();
            let value = value.trim();

            match key.as_str() {
                "user-agent" => {
                    if in_directives {
                        group_agents.clear();
                        in_directives = false;
                    }
                    group_agents.push(value.to_string());
                }
                "crawl-delay" => {
                    in_directives = true;
                    let Ok(delay) = value.parse::<f64>() else {
                        continue;
                    };
                    if !delay.is_finite() || delay < 0.0 {
                        continue;
                    }
                    if group_agents.iter().any(|ua| ua.eq_ignore_ascii_case(agent)) {
                        specific.get_or_insert(delay);
                    } else if group_agents.iter().any(|ua| ua == "*") {
                        wildcard.get_or_insert(delay);
                    }
                }
                _ => in_directives = true,
            }
        }

        specific.or(wildcard)
    }
}
