use std::time::Duration;

use crate::base::KeywordCase;

/// Default bound on the external syntax check
pub const DEFAULT_PRECHECK_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings shared by every module content in a design
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ContentConfig {
    /// Render reserved keywords in upper case in messages and new templates
    pub upper_case_keywords: bool,
    /// `None` runs the syntax check on the calling thread without a bound
    pub precheck_timeout: Option<Duration>,
    /// Replacement for the built-in template used by `ModuleContent::create`.
    /// `%modulename%` is substituted.
    pub template: Option<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            upper_case_keywords: false,
            precheck_timeout: Some(DEFAULT_PRECHECK_TIMEOUT),
            template: None,
        }
    }
}

impl ContentConfig {
    pub fn with_upper_case_keywords(mut self, upper: bool) -> Self {
        self.upper_case_keywords = upper;
        self
    }

    pub fn with_precheck_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.precheck_timeout = timeout;
        self
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn keyword_case(&self) -> KeywordCase {
        KeywordCase::from_upper_case(self.upper_case_keywords)
    }
}
