use std::fmt;

/// Session configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionOptions {
    /// Compute the legal destination set when a piece is selected.
    pub highlight_destinations: bool,
    /// Log a notice when a move gives check.
    pub announce_check: bool,
    /// Hand a snapshot to the store after every committed move.
    pub persist_after_move: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions {
            highlight_destinations: true,
            announce_check: true,
            persist_after_move: true,
        }
    }
}

impl SessionOptions {
    #[must_use]
    pub const fn with_highlights(mut self, enabled: bool) -> Self {
        self.highlight_destinations = enabled;
        self
    }

    #[must_use]
    pub const fn with_check_announcements(mut self, enabled: bool) -> Self {
        self.announce_check = enabled;
        self
    }

    #[must_use]
    pub const fn with_persistence(mut self, enabled: bool) -> Self {
        self.persist_after_move = enabled;
        self
    }

    /// Set an option by name. Names are case-insensitive and may use spaces,
    /// dashes or underscores between words; values are `true`/`false`
    /// (also `on`/`off`, `1`/`0`).
    pub fn apply(&mut self, name: &str, value: &str) -> Result<(), OptionError> {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let slot = match normalized.as_str() {
            "highlightdestinations" | "highlights" => &mut self.highlight_destinations,
            "announcecheck" => &mut self.announce_check,
            "persistaftermove" | "persist" => &mut self.persist_after_move,
            _ => {
                return Err(OptionError::UnknownOption {
                    name: name.to_string(),
                })
            }
        };

        *slot = parse_flag(value).ok_or_else(|| OptionError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        })?;
        Ok(())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "1" => Some(true),
        "false" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Error type for option updates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    UnknownOption { name: String },
    InvalidValue { name: String, value: String },
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionError::UnknownOption { name } => write!(f, "Unknown option '{name}'"),
            OptionError::InvalidValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}'")
            }
        }
    }
}

impl std::error::Error for OptionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_enable_everything() {
        let options = SessionOptions::default();
        assert!(options.highlight_destinations);
        assert!(options.announce_check);
        assert!(options.persist_after_move);
    }

    #[test]
    fn test_apply_normalizes_names() {
        let mut options = SessionOptions::default();
        options.apply("Persist After Move", "false").unwrap();
        options.apply("highlight_destinations", "OFF").unwrap();
        assert!(!options.persist_after_move);
        assert!(!options.highlight_destinations);
        assert!(options.announce_check);
    }

    #[test]
    fn test_apply_rejects_unknown_and_bad_values() {
        let mut options = SessionOptions::default();
        assert_eq!(
            options.apply("Hash", "16"),
            Err(OptionError::UnknownOption {
                name: "Hash".to_string()
            })
        );
        assert!(matches!(
            options.apply("announce-check", "maybe"),
            Err(OptionError::InvalidValue { .. })
        ));
        assert!(options.announce_check);
    }

    #[test]
    fn test_builder_setters() {
        let options = SessionOptions::default()
            .with_highlights(false)
            .with_persistence(false);
        assert!(!options.highlight_destinations);
        assert!(!options.persist_after_move);
    }
}
