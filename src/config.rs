use std::path::{Path, PathBuf};

/// Everything a run needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub snp_data_file: PathBuf,
    pub output_file: PathBuf,
    /// TAD cell type label, e.g. `IMR90`.
    pub tad_boundary: String,
    pub data_dir: PathBuf,
}

impl Config {
    pub fn index_path(&self) -> PathBuf {
        self.data_dir
            .join(format!("GENE_index_hg19_{}.tsv.bz2", self.tad_boundary))
    }

    pub fn nearest_gene_path(&self) -> PathBuf {
        nearest_gene_path(&self.output_file)
    }
}

/// `results/gwas.tsv` -> `results/gwas_nearest_gene.tsv`
pub fn nearest_gene_path(output_file: &Path) -> PathBuf {
    let stem = output_file
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    output_file.with_file_name(format!("{}_nearest_gene.tsv", stem))
}
