use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use tadgenes::config::Config;
use tadgenes::genelist;

#[derive(Parser)]
#[command(author, version, about = "Build genelists of all genes in TADs harboring significant SNPs")]
struct Args {
    /// SNP table (tab-separated, with snp, chrom, position and group columns)
    #[arg(short = 's', long = "snp_data_file")]
    snp_data_file: PathBuf,

    /// Match table to write; nearest genes go to <stem>_nearest_gene.tsv beside it
    #[arg(short = 'o', long = "output_file")]
    output_file: PathBuf,

    /// TAD cell type, selects GENE_index_hg19_<TAD_Boundary>.tsv.bz2
    #[arg(short = 't', long = "TAD_Boundary")]
    tad_boundary: String,

    /// Directory holding the gene index files
    #[arg(long = "data_dir", default_value = "data")]
    data_dir: PathBuf,

    /// Number of threads to use (default: number of logical CPUs)
    #[arg(long)]
    threads: Option<usize>,

    /// Verbosity level (0=error, 1=info, 2=debug)
    #[arg(short, long, default_value = "1")]
    verbose: u8,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            snp_data_file: self.snp_data_file.clone(),
            output_file: self.output_file.clone(),
            tad_boundary: self.tad_boundary.clone(),
            data_dir: self.data_dir.clone(),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Error,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    if let Some(n) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .context("Failed to initialize thread pool")?;
    }

    let summary = genelist::run(&args.config())?;
    info!(
        "{} of {} SNP(s) fall in a TAD ({} skipped): {} TAD gene row(s), {} SNP(s) without a protein coding gene",
        summary.snps_matched,
        summary.snps_read,
        summary.snps_skipped,
        summary.match_rows,
        summary.without_protein_coding
    );

    Ok(())
}
