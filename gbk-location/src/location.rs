use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

///
/// Strand marker attached by a `complement(...)` modifier.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strand {
    Complementary,
}

///
/// A single position or a `start..end` range, 1-based and inclusive.
///
/// `start` and `end` are kept exactly as written; no reordering happens, not even
/// under `complement`. The partial flags record which of the `>`/`<` markers
/// appeared in the expression: `partial_5prime` for `>` and `partial_3prime`
/// for `<`.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Range {
    pub start: u64,
    pub end: u64,
    #[cfg_attr(feature = "serde", serde(rename = "partial5Prime"))]
    pub partial_5prime: bool,
    #[cfg_attr(feature = "serde", serde(rename = "partial3Prime"))]
    pub partial_3prime: bool,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub strand: Option<Strand>,
}

impl Range {
    pub fn new(start: u64, end: u64) -> Self {
        Range {
            start,
            end,
            partial_5prime: false,
            partial_3prime: false,
            strand: None,
        }
    }

    pub fn is_complement(&self) -> bool {
        self.strand == Some(Strand::Complementary)
    }

    fn is_partial(&self) -> bool {
        self.partial_5prime || self.partial_3prime
    }
}

impl Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = if self.start == self.end && !self.is_partial() {
            self.start.to_string()
        } else {
            format!(
                "{}{}..{}{}",
                if self.partial_3prime { "<" } else { "" },
                self.start,
                if self.partial_5prime { ">" } else { "" },
                self.end
            )
        };

        match self.strand {
            Some(Strand::Complementary) => write!(f, "complement({})", body),
            None => write!(f, "{}", body),
        }
    }
}

///
/// A parsed feature location: either one range or the ordered parts of a `join`.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Location {
    Range(Range),
    Joined(Vec<Location>),
}

impl Location {
    ///
    /// Mark every range in this location as lying on the complementary strand.
    ///
    /// For a joined location the strand goes onto each part; the group itself
    /// has no strand of its own.
    ///
    pub fn complement(self) -> Location {
        match self {
            Location::Range(range) => Location::Range(Range {
                strand: Some(Strand::Complementary),
                ..range
            }),
            Location::Joined(parts) => {
                Location::Joined(parts.into_iter().map(Location::complement).collect())
            }
        }
    }

    ///
    /// All ranges of this location, in the order they were written.
    ///
    pub fn ranges(&self) -> Vec<&Range> {
        let mut out = Vec::new();
        self.collect_ranges(&mut out);
        out
    }

    fn collect_ranges<'a>(&'a self, out: &mut Vec<&'a Range>) {
        match self {
            Location::Range(range) => out.push(range),
            Location::Joined(parts) => {
                for part in parts {
                    part.collect_ranges(out);
                }
            }
        }
    }

    ///
    /// Smallest start and largest end over every range, or `None` for an empty join.
    ///
    pub fn span(&self) -> Option<(u64, u64)> {
        let ranges = self.ranges();
        let start = ranges.iter().map(|r| r.start.min(r.end)).min()?;
        let end = ranges.iter().map(|r| r.start.max(r.end)).max()?;
        Some((start, end))
    }

    /// True when the location has ranges and all of them are complementary.
    pub fn is_complement(&self) -> bool {
        let ranges = self.ranges();
        !ranges.is_empty() && ranges.iter().all(|r| r.is_complement())
    }
}

impl From<Range> for Location {
    fn from(range: Range) -> Self {
        Location::Range(range)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Range(range) => write!(f, "{}", range),
            Location::Joined(parts) => {
                let parts: Vec<String> = parts.iter().map(|p| p.to_string()).collect();
                write!(f, "join({})", parts.join(","))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn joined() -> Location {
        Location::Joined(vec![
            Range::new(10, 20).into(),
            Range::new(1, 5).into(),
            Range::new(30, 30).into(),
        ])
    }

    #[rstest]
    fn test_complement_propagates_to_every_range(joined: Location) {
        let complemented = joined.complement();
        assert_eq!(complemented.is_complement(), true);
        assert_eq!(complemented.ranges().len(), 3);
    }

    #[rstest]
    fn test_ranges_keep_written_order(joined: Location) {
        let starts: Vec<u64> = joined.ranges().iter().map(|r| r.start).collect();
        assert_eq!(starts, vec![10, 1, 30]);
    }

    #[rstest]
    fn test_span(joined: Location) {
        assert_eq!(joined.span(), Some((1, 30)));
        assert_eq!(Location::Joined(vec![]).span(), None);
    }

    #[rstest]
    fn test_display(joined: Location) {
        assert_eq!(joined.to_string(), "join(10..20,1..5,30)");
        assert_eq!(joined.complement().to_string(), "join(complement(10..20),complement(1..5),complement(30))");
    }

    #[rstest]
    #[case(Range { start: 1, end: 20, partial_5prime: true, partial_3prime: true, strand: None }, "<1..>20")]
    #[case(Range { start: 7, end: 7, partial_5prime: false, partial_3prime: true, strand: None }, "<7..7")]
    #[case(Range { start: 3, end: 9, partial_5prime: false, partial_3prime: false, strand: Some(Strand::Complementary) }, "complement(3..9)")]
    fn test_range_display(#[case] range: Range, #[case] expected: &str) {
        assert_eq!(range.to_string(), expected);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn test_serde_shape(joined: Location) {
        let json = serde_json::to_value(&joined.complement()).unwrap();
        assert_eq!(
            json[0],
            serde_json::json!({
                "start": 10,
                "end": 20,
                "partial5Prime": false,
                "partial3Prime": false,
                "strand": "complementary"
            })
        );
    }
}
