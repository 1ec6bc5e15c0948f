use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Record;

// LOCUS       SCU49845     5028 bp    DNA     linear   PLN 21-JUN-1999
static LOCUS_WITH_TOPOLOGY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\S+)\s+(\d+)\s+(?:bp|aa)\s+(\S+)\s+([a-z]+)\s+([A-Z]+)\s+(\d\d-[A-Z]{3}-\d{4})")
        .expect("valid LOCUS pattern")
});

// LOCUS       SCU49845     5028 bp    DNA     PLN 21-JUN-1999
static LOCUS_PLAIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\S+)\s+(\d+)\s+(?:bp|aa)\s+(\S+)\s+([A-Z]+)\s+(\d\d-[A-Z]{3}-\d{4})")
        .expect("valid LOCUS pattern")
});

///
/// Header values of a LOCUS line.
///
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Locus {
    pub name: String,
    pub length: u64,
    pub molecule_type: String,
    pub topology: Option<String>,
    pub division: String,
    pub modified: String,
}

impl Locus {
    pub fn apply_to(self, record: &mut Record) {
        record.locus_name = Some(self.name);
        record.sequence_length = Some(self.length);
        record.molecule_type = Some(self.molecule_type);
        record.molecule_type_disp = self.topology;
        record.division = Some(self.division);
        record.modified = Some(self.modified);
    }
}

///
/// Parse the value of a LOCUS field, with or without a topology column.
///
/// Returns `None` when the line matches neither layout.
///
pub fn parse_locus(value: &str) -> Option<Locus> {
    if let Some(caps) = LOCUS_WITH_TOPOLOGY.captures(value) {
        return Some(Locus {
            name: caps[1].to_string(),
            length: caps[2].parse().ok()?,
            molecule_type: caps[3].to_string(),
            topology: Some(caps[4].to_string()),
            division: caps[5].to_string(),
            modified: caps[6].to_string(),
        });
    }

    let caps = LOCUS_PLAIN.captures(value)?;
    Some(Locus {
        name: caps[1].to_string(),
        length: caps[2].parse().ok()?,
        molecule_type: caps[3].to_string(),
        topology: None,
        division: caps[4].to_string(),
        modified: caps[5].to_string(),
    })
}
