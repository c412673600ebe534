//! Pattern-based filtering of dispatch logging
//!
//! Combined reducers emit `tracing` events while routing actions. A
//! [`LogConfig`] decides which action types those events are emitted for.

/// Include/exclude glob patterns over action type labels.
///
/// Patterns support:
/// - `*` matches any sequence of characters
/// - `?` matches any single character
/// - Literal text matches exactly
///
/// # Examples
///
/// - `SET_*` matches SET_NAME, SET_AGE, etc.
/// - `*_FAILED` matches FETCH_FAILED, SAVE_FAILED, etc.
/// - `TICK` matches only TICK
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    /// If non-empty, only log action types matching these patterns
    pub include_patterns: Vec<String>,
    /// Skip action types matching these patterns (applied after include)
    pub exclude_patterns: Vec<String>,
}

impl LogConfig {
    /// Create a config from comma-separated pattern strings
    ///
    /// # Example
    /// ```
    /// use action_kit_core::LogConfig;
    ///
    /// let config = LogConfig::new(Some("SET_*,RESET"), Some("SET_CURSOR"));
    /// assert!(config.should_log("SET_NAME"));
    /// assert!(config.should_log("RESET"));
    /// assert!(!config.should_log("SET_CURSOR"));
    /// assert!(!config.should_log("TICK"));
    /// ```
    pub fn new(include: Option<&str>, exclude: Option<&str>) -> Self {
        Self {
            include_patterns: include.map(split_patterns).unwrap_or_default(),
            exclude_patterns: exclude.map(split_patterns).unwrap_or_default(),
        }
    }

    /// Create a config with specific pattern vectors
    pub fn with_patterns(include: Vec<String>, exclude: Vec<String>) -> Self {
        Self {
            include_patterns: include,
            exclude_patterns: exclude,
        }
    }

    /// A config that logs nothing
    pub fn silent() -> Self {
        Self::with_patterns(Vec::new(), vec!["*".to_string()])
    }

    /// Check if an action type should be logged
    pub fn should_log(&self, action_type: &str) -> bool {
        if !self.include_patterns.is_empty()
            && !self
                .include_patterns
                .iter()
                .any(|p| glob_match(p, action_type))
        {
            return false;
        }

        !self
            .exclude_patterns
            .iter()
            .any(|p| glob_match(p, action_type))
    }
}

fn split_patterns(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Simple glob matching supporting `*` and `?`
pub(crate) fn glob_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();

    let mut pi = 0;
    let mut ti = 0;
    let mut star_pi = None;
    let mut star_ti = 0;

    while ti < text.len() {
        if pi < pattern.len() && (pattern[pi] == '?' || pattern[pi] == text[ti]) {
            pi += 1;
            ti += 1;
        } else if pi < pattern.len() && pattern[pi] == '*' {
            star_pi = Some(pi);
            star_ti = ti;
            pi += 1;
        } else if let Some(spi) = star_pi {
            // backtrack: let the last star swallow one more char
            pi = spi + 1;
            star_ti += 1;
            ti = star_ti;
        } else {
            return false;
        }
    }

    while pi < pattern.len() && pattern[pi] == '*' {
        pi += 1;
    }

    pi == pattern.len()
}
