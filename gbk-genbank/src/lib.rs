//! # GenBank flat-file records
//!
//! Parses the text of a GenBank record into a [Record]:
//!
//! - the block after `ORIGIN` becomes the sequence string
//! - everything before it is tokenized by indentation ([gbk_flatfile])
//! - known fields (LOCUS, DEFINITION, ACCESSION, VERSION, SOURCE, REFERENCE,
//!   FEATURES) are interpreted; unknown ones are ignored
//! - feature locations go through [gbk_location]
//!
//! Reading files and serializing the result are left to the caller. With the
//! `serde` feature every output type derives `Serialize`/`Deserialize`.
//!
//! ```no_run
//! use gbk_genbank::parse_records;
//!
//! let text = std::fs::read_to_string("sequence.gb").unwrap();
//! for record in parse_records(&text).unwrap() {
//!     println!("{:?}: {} features", record.accession, record.features.len());
//! }
//! ```
pub mod consts;
pub mod errors;
pub mod locus;
pub mod models;
pub mod options;
pub mod parser;
pub mod qualifiers;
pub mod sequence;

// re-exports
pub use errors::*;
pub use models::{Feature, Organism, Record, Reference, Source};
pub use options::ParseOptions;
pub use parser::{parse_record, parse_record_with_options, parse_records, split_records};

pub use gbk_location::{Location, Range, Strand};
