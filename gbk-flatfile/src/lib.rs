//! # Flat-file tokenizer
//!
//! Turns the indented field/subfield/continuation layout used by GenBank (and the
//! other INSDC flat files) into a tree of [Field]s. Structure is inferred from
//! column positions only:
//!
//! - a line at the current indent opens a new field, named by its first token
//! - a deeper line at the field's value column continues the field's value
//! - any other deeper line opens a block of child fields
//!
//! ```
//! use gbk_flatfile::tokenize;
//!
//! let lines = [
//!     "REFERENCE   1  (bases 1 to 5028)",
//!     "  AUTHORS   Torpey,L.E. and Lawrence,C.W.",
//!     "  TITLE     Cloning and sequence of REV7,",
//!     "            a gene required for mutagenesis",
//! ];
//! let fields = tokenize(&lines).unwrap();
//!
//! assert_eq!(fields[0].children[1].value.len(), 2);
//! ```
pub mod error;
pub mod field;
pub mod tokenizer;

// re-exports
pub use error::*;
pub use field::{Field, render_fields};
pub use tokenizer::{LineCursor, indent_of, read_fields, tokenize};
