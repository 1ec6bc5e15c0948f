#[cfg(feature = "flatfile")]
#[doc(inline)]
pub use gbk_flatfile as flatfile;

#[cfg(feature = "location")]
#[doc(inline)]
pub use gbk_location as location;

#[cfg(feature = "genbank")]
#[doc(inline)]
pub use gbk_genbank as genbank;
