use std::str::FromStr;

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{LocationError, Result};
use crate::location::{Location, Range};

pub const COMPLEMENT_MODIFIER: &str = "complement";
pub const JOIN_MODIFIER: &str = "join";

static MODIFIER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z_]+)\((.*)\)$").expect("valid modifier pattern"));
static RANGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\.\.(\d+)$").expect("valid range pattern"));
static POINT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+$").expect("valid point pattern"));

///
/// Parse a GenBank feature location expression.
///
/// Supports single positions (`467`), ranges (`340..565`), partial markers
/// (`<1..>888`), `complement(...)` and `join(...)`, nested to any depth.
///
/// # Arguments
/// - text: a single location expression, e.g. `complement(join(1..5,10..20))`
///
/// # Errors
/// - [LocationError::UnsupportedModifier] for any modifier other than `complement`/`join`
/// - [LocationError::UnparseableLocation] when the text is not a recognized location
///
pub fn parse_location(text: &str) -> Result<Location> {
    let text = text.trim();
    trace!("parsing location {}", text);

    if let Some(caps) = MODIFIER_PATTERN.captures(text) {
        let inner = caps.get(2).map_or("", |m| m.as_str());

        return match &caps[1] {
            COMPLEMENT_MODIFIER => Ok(parse_location(inner)?.complement()),
            JOIN_MODIFIER => {
                let parts = split_top_level(inner)
                    .into_iter()
                    .map(parse_location)
                    .collect::<Result<Vec<_>>>()?;
                Ok(Location::Joined(parts))
            }
            other => Err(LocationError::UnsupportedModifier(other.to_string())),
        };
    }

    parse_range(text).map(Location::Range)
}

///
/// Parse a plain position or range, with optional `<`/`>` markers.
///
fn parse_range(text: &str) -> Result<Range> {
    let unparseable = || LocationError::UnparseableLocation(text.to_string());

    let partial_3prime = text.contains('<');
    let partial_5prime = text.contains('>');
    let stripped: String = text.chars().filter(|c| !matches!(c, '<' | '>')).collect();

    let (start, end) = if let Some(caps) = RANGE_PATTERN.captures(&stripped) {
        let start = caps[1].parse::<u64>().map_err(|_| unparseable())?;
        let end = caps[2].parse::<u64>().map_err(|_| unparseable())?;
        (start, end)
    } else if POINT_PATTERN.is_match(text) {
        let position = text.parse::<u64>().map_err(|_| unparseable())?;
        (position, position)
    } else {
        return Err(unparseable());
    };

    Ok(Range {
        start,
        end,
        partial_5prime,
        partial_3prime,
        strand: None,
    })
}

///
/// Split on commas that are not nested inside parentheses.
///
fn split_top_level(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth: usize = 0;
    let mut begin = 0;

    for (i, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&text[begin..i]);
                begin = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&text[begin..]);

    parts
}

impl FromStr for Location {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self> {
        parse_location(s)
    }
}
