//! Error types for resolution, theming, and stagger scheduling.

use thiserror::Error;

/// Errors that can occur while resolving a property bag or loading a
/// theme.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A bag names an attribute the resolver has no mapping for.
    ///
    /// This is a hard error on purpose: silently skipping the attribute
    /// would hide authoring mistakes until someone notices the missing
    /// declaration on screen.
    #[error("unknown attribute: '{name}'")]
    UnknownAttribute { name: String },

    /// A breakpoint key the theme does not declare.
    #[error("unknown breakpoint: '{name}'")]
    UnknownBreakpoint { name: String },

    /// A raw-literal segment without a `prop: value` shape.
    #[error("malformed raw declaration: '{segment}'")]
    MalformedRaw { segment: String },

    /// Theme YAML failed to parse.
    #[error("theme parse error: {0}")]
    ThemeParse(#[from] serde_yaml::Error),

    /// Theme file could not be read.
    #[error("theme load error: {message}")]
    ThemeLoad { message: String },
}

/// Errors from the stagger scheduler.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StaggerError {
    /// Inputs outside the valid domain: an index at or past `total`, or
    /// a non-finite or negative base delay.
    #[error("degenerate stagger input: {reason}")]
    DegenerateInput { reason: String },
}

/// Result type for resolution operations.
pub type Result<T> = std::result::Result<T, ResolveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ResolveError::UnknownAttribute {
            name: "marging".to_string(),
        };
        assert!(err.to_string().contains("marging"));

        let err = StaggerError::DegenerateInput {
            reason: "index 4 out of range for total 3".to_string(),
        };
        assert!(err.to_string().contains("out of range"));
    }
}
