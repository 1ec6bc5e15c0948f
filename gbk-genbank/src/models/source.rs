#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

///
/// SOURCE entry of a record: the free-text source name and, when an ORGANISM
/// subfield is present, the scientific name with its taxonomic lineage.
///
#[derive(Eq, PartialEq, Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Source {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub organism: Option<Organism>,
}

#[derive(Eq, PartialEq, Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Organism {
    pub name: String,
    pub lineage: Vec<String>,
}
