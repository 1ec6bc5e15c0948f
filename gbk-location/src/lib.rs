//! # GenBank feature locations
//!
//! Parses the compact location expressions found in a feature table
//! (`345..500`, `<1..>20`, `complement(join(1..5,10..20))`) into a [Location]
//! value. The grammar is deliberately small: single positions, ranges, partial
//! markers, `complement` and `join`. Anything else is rejected instead of being
//! guessed at.
//!
//! ```
//! use gbk_location::{parse_location, Location};
//!
//! let location = parse_location("complement(join(1..5,10..20))").unwrap();
//!
//! assert!(matches!(location, Location::Joined(_)));
//! assert!(location.is_complement());
//! assert_eq!(location.span(), Some((1, 20)));
//! ```
pub mod error;
pub mod location;
pub mod parser;

// re-exports
pub use error::*;
pub use location::{Location, Range, Strand};
pub use parser::parse_location;
