pub mod feature;
pub mod record;
pub mod reference;
pub mod source;

// re-export for cleaner imports
pub use self::feature::Feature;
pub use self::record::Record;
pub use self::reference::Reference;
pub use self::source::{Organism, Source};
