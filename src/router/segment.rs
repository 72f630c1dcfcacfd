use super::error::ErrorKind;
use super::node::{Kind, SegmentKind};

use regex::Regex;
use smallvec::SmallVec;

pub(super) const STAR: &str = "*";
pub(super) const COLON: char = ':';
pub(super) const SLASH: char = '/';

const OPEN: char = '(';
const CLOSE: char = ')';

pub(super) type Parts<'a> = SmallVec<[&'a str; 8]>;

/// Parsed segments paired with their raw pattern text.
pub(super) type Segments<'a> = SmallVec<[(&'a str, Segment<'a>); 8]>;

/// One parsed pattern segment.
#[derive(Debug)]
pub(super) enum Segment<'a> {
    Static(&'a str),
    Wildcard,
    Param(&'a str),
    Regex { name: &'a str, regex: Regex },
}

impl Segment<'_> {
    pub(super) fn kind(&self) -> SegmentKind {
        match self {
            Self::Static(_) => SegmentKind::Static,
            Self::Wildcard => SegmentKind::Wildcard,
            Self::Param(_) => SegmentKind::Param,
            Self::Regex { .. } => SegmentKind::Regex,
        }
    }

    pub(super) fn into_kind(self) -> Kind {
        match self {
            Self::Static(_) => Kind::Static,
            Self::Wildcard => Kind::Wildcard,
            Self::Param(name) => Kind::Param { name: name.into() },
            Self::Regex { name, regex } => Kind::Regex {
                name: name.into(),
                regex,
            },
        }
    }
}

/// Splits on '/' outside of parenthesis groups.
///
/// `path` must already have its leading slash removed.
pub(super) fn split(path: &str) -> Result<Parts<'_>, ErrorKind> {
    let mut parts = Parts::new();
    let mut depth: usize = 0;
    let mut start = 0;

    for (i, c) in path.char_indices() {
        match c {
            OPEN => depth += 1,
            CLOSE => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(ErrorKind::UnbalancedParentheses)?
            }
            SLASH if depth == 0 => {
                parts.push(&path[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(ErrorKind::UnbalancedParentheses);
    }
    parts.push(&path[start..]);
    Ok(parts)
}

/// Validates a registration pattern and parses it into segments.
///
/// The root pattern `"/"` yields no segments.
pub(super) fn parse_pattern(pattern: &str) -> Result<Segments<'_>, ErrorKind> {
    if pattern.is_empty() {
        return Err(ErrorKind::EmptyPattern);
    }
    if !pattern.starts_with(SLASH) {
        return Err(ErrorKind::MissingLeadingSlash);
    }
    if pattern.len() == 1 {
        return Ok(SmallVec::new());
    }
    if pattern.ends_with(SLASH) {
        return Err(ErrorKind::TrailingSlash);
    }

    split(&pattern[1..])?
        .into_iter()
        .map(|part| parse_segment(part).map(|segment| (part, segment)))
        .collect()
}

fn parse_segment(part: &str) -> Result<Segment<'_>, ErrorKind> {
    if part.is_empty() {
        return Err(ErrorKind::EmptySegment);
    }
    if part == STAR {
        return Ok(Segment::Wildcard);
    }
    let param = match part.strip_prefix(COLON) {
        Some(p) => p,
        None => return Ok(Segment::Static(part)),
    };

    match param.find(OPEN) {
        None => {
            if param.is_empty() {
                return Err(ErrorKind::EmptyParamName);
            }
            Ok(Segment::Param(param))
        }
        Some(pos) => {
            let name = &param[..pos];
            if name.is_empty() {
                return Err(ErrorKind::EmptyParamName);
            }
            let expr = param[pos + 1..]
                .strip_suffix(CLOSE)
                .ok_or(ErrorKind::MalformedRegexSegment)?;
            let regex = Regex::new(expr).map_err(ErrorKind::InvalidRegex)?;
            Ok(Segment::Regex { name, regex })
        }
    }
}
