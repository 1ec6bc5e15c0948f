pub const ORIGIN_TOKEN: &str = "ORIGIN";
pub const RECORD_TERMINATOR: &str = "//";

pub const LOCUS_FIELD: &str = "LOCUS";
pub const DEFINITION_FIELD: &str = "DEFINITION";
pub const ACCESSION_FIELD: &str = "ACCESSION";
pub const VERSION_FIELD: &str = "VERSION";
pub const KEYWORDS_FIELD: &str = "KEYWORDS";
pub const SOURCE_FIELD: &str = "SOURCE";
pub const REFERENCE_FIELD: &str = "REFERENCE";
pub const FEATURES_FIELD: &str = "FEATURES";

pub const ORGANISM_SUBFIELD: &str = "ORGANISM";
pub const AUTHORS_SUBFIELD: &str = "AUTHORS";
pub const CONSORTIUM_SUBFIELD: &str = "CONSRTM";
pub const TITLE_SUBFIELD: &str = "TITLE";
pub const JOURNAL_SUBFIELD: &str = "JOURNAL";
pub const PUBMED_SUBFIELD: &str = "PUBMED";
pub const REMARK_SUBFIELD: &str = "REMARK";

pub const LINEAGE_SEPARATOR: &str = "; ";
pub const TRANSLATION_QUALIFIER: &str = "/translation";
