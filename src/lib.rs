//! Build genelists of all genes in TADs harboring significant SNPs.

pub mod config;
pub mod genelist;
pub mod io;
pub mod nearest;
pub mod output;
pub mod records;
pub mod tad_index;
