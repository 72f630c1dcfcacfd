use super::node::SegmentKind;

#[derive(Debug, thiserror::Error)]
#[error("{kind}: pattern = {pattern:?}")]
pub struct RouterError {
    #[source]
    kind: ErrorKind,
    pattern: Box<str>,
}

/// The reason a pattern was rejected at registration time.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ErrorKind {
    #[error("pattern can not be empty")]
    EmptyPattern,

    #[error("pattern must start with '/'")]
    MissingLeadingSlash,

    #[error("pattern can not end with '/'")]
    TrailingSlash,

    #[error("pattern can not contain an empty segment")]
    EmptySegment,

    #[error("pattern has unbalanced parentheses")]
    UnbalancedParentheses,

    #[error("capture name can not be empty")]
    EmptyParamName,

    #[error("regex segment must end with ')'")]
    MalformedRegexSegment,

    #[error("invalid regex constraint")]
    InvalidRegex(#[source] regex::Error),

    #[error("route is already registered")]
    DuplicateRoute,

    #[error("{inserted} segment conflicts with existing {existing} segment")]
    KindConflict {
        existing: SegmentKind,
        inserted: SegmentKind,
    },

    #[error("segment conflicts with existing {existing:?}")]
    ParamMismatch { existing: Box<str> },
}

impl RouterError {
    pub(super) fn new(kind: ErrorKind, pattern: &str) -> Self {
        Self {
            kind,
            pattern: pattern.into(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}
