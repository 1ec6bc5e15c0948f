///
/// Controls which parts of a record get materialized.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Collapse the block after ORIGIN into `Record::sequence`
    pub store_sequence: bool,
    /// Parse the FEATURES table (locations and qualifiers)
    pub parse_features: bool,
}

impl ParseOptions {
    pub const FULL: Self = Self {
        store_sequence: true,
        parse_features: true,
    };
    pub const HEADER_ONLY: Self = Self {
        store_sequence: false,
        parse_features: false,
    };
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions::FULL
    }
}
