use std::collections::BTreeMap;

use gbk_location::Location;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

///
/// One entry of the FEATURES table.
///
/// Qualifier names are kept exactly as written, including the leading `/`.
/// Repeated qualifiers accumulate their values in file order.
///
#[derive(Eq, PartialEq, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Feature {
    pub key: String,
    pub location: Location,
    pub qualifiers: BTreeMap<String, Vec<String>>,
}

impl Feature {
    pub fn new<K: Into<String>>(key: K, location: Location) -> Self {
        Feature {
            key: key.into(),
            location,
            qualifiers: BTreeMap::new(),
        }
    }

    ///
    /// All values of a qualifier. The name may be given with or without the
    /// leading `/`.
    ///
    pub fn qualifier(&self, name: &str) -> Option<&[String]> {
        let found = if name.starts_with('/') {
            self.qualifiers.get(name)
        } else {
            self.qualifiers.get(&format!("/{}", name))
        };
        found.map(Vec::as_slice)
    }

    /// First value of a qualifier.
    pub fn first_qualifier(&self, name: &str) -> Option<&str> {
        self.qualifier(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use gbk_location::Range;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn gene() -> Feature {
        let mut feature = Feature::new("gene", Range::new(687, 3158).into());
        feature
            .qualifiers
            .insert("/gene".to_string(), vec!["AXL2".to_string()]);
        feature.qualifiers.insert(
            "/db_xref".to_string(),
            vec!["GI:1293615".to_string(), "SGD:S000001489".to_string()],
        );
        feature
    }

    #[rstest]
    fn test_qualifier_lookup_with_and_without_slash(gene: Feature) {
        assert_eq!(gene.first_qualifier("gene"), Some("AXL2"));
        assert_eq!(gene.first_qualifier("/gene"), Some("AXL2"));
        assert_eq!(gene.qualifier("db_xref").map(|v| v.len()), Some(2));
        assert_eq!(gene.qualifier("product"), None);
    }
}
