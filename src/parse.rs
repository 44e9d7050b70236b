use log::trace;
use nom::{
    branch::alt,
    bytes::complete::{is_not, take_till},
    character::complete::char,
    combinator::{cut, rest},
    error::{ErrorKind, ParseError},
    multi::many0,
    sequence::{preceded, separated_pair, terminated},
    IResult, Parser,
};

use crate::types::{Assignment, Error, KeyPath, PathFault};

type Res<'a, T> = IResult<&'a str, T, Fault>;

/// Parser error carrying the bracket violation.
///
/// Inside a committed `[...]` run the only primitives that can fail are
/// `is_not("[]")` and `char(']')`, so the character they stopped at tells
/// the violation apart.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Fault(PathFault);

impl<'a> ParseError<&'a str> for Fault {
    fn from_error_kind(input: &'a str, _kind: ErrorKind) -> Self {
        Fault(match input.chars().next() {
            None => PathFault::UnclosedBracket,
            Some('[') => PathFault::NestedBrackets,
            Some(_) => PathFault::EmptySegment,
        })
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

/// Parses a raw token into an [`Assignment`].
///
/// ## Arguments
///
/// * `token` - The raw token, e.g., "users[123][name]=Ann"
///
/// ## Returns
///
/// Returns an `Assignment` if successful, `Error::InvalidFormat` if the token has no `=`,
/// or `Error::MalformedPath` if the bracket syntax of the key is broken.
pub fn parse_assignment(token: &str) -> Result<Assignment, Error> {
    let (key, value) = split_token(token).ok_or_else(|| Error::InvalidFormat {
        token: token.to_string(),
    })?;

    let path = if key.contains(['[', ']']) {
        parse_key_path(key).map_err(|reason| Error::MalformedPath {
            token: token.to_string(),
            path: key.to_string(),
            reason,
        })?
    } else {
        KeyPath::single(key)
    };

    trace!("parsed {token:?} into {path}");
    Ok(Assignment {
        path,
        value: value.to_string(),
    })
}

/// Tokenizes a bracketed key path into its segments.
///
/// `a[b][c]` yields `["a", "b", "c"]`. Bare text after a closing bracket starts a new
/// segment, and an empty prefix is dropped, so `[a]` is the same path as `a`.
pub fn parse_key_path(input: &str) -> Result<KeyPath, PathFault> {
    let (remaining, segments) = match segments(input) {
        Ok(parsed) => parsed,
        Err(nom::Err::Error(Fault(fault)) | nom::Err::Failure(Fault(fault))) => return Err(fault),
        Err(nom::Err::Incomplete(_)) => return Err(PathFault::UnclosedBracket),
    };

    // Bare runs and bracketed runs consume everything except a stray `]`.
    if !remaining.is_empty() {
        return Err(PathFault::UnmatchedClose);
    }

    KeyPath::new(segments)
}

fn split_token(token: &str) -> Option<(&str, &str)> {
    let parsed: IResult<&str, (&str, &str)> =
        separated_pair(take_till(|c: char| c == '='), char('='), rest).parse(token);
    parsed.ok().map(|(_, pair)| pair)
}

fn segments(input: &str) -> Res<'_, Vec<&str>> {
    many0(alt((bare_segment, bracketed_segment))).parse(input)
}

fn bare_segment(input: &str) -> Res<'_, &str> {
    is_not("[]").parse(input)
}

fn bracketed_segment(input: &str) -> Res<'_, &str> {
    preceded(char('['), cut(terminated(is_not("[]"), char(']')))).parse(input)
}
