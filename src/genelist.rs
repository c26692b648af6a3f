use std::collections::HashMap;

use anyhow::Result;
use log::{debug, info, warn};
use rayon::prelude::*;

use crate::config::Config;
use crate::io::read_tsv;
use crate::nearest::{gene_distance, nearest_protein_coding};
use crate::output::{write_matches, write_nearest_genes};
use crate::records::{NearestGene, Snp, TadMatch};
use crate::tad_index::TadIndex;

/// Genes of every SNP-harboring TAD, plus one nearest-gene row per matched SNP.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Genelist {
    pub matches: Vec<TadMatch>,
    pub nearest: Vec<NearestGene>,
}

/// Counts reported at the end of a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub snps_read: usize,
    pub snps_matched: usize,
    pub snps_skipped: usize,
    pub match_rows: usize,
    pub without_protein_coding: usize,
}

impl Genelist {
    pub fn summary(&self, snps_read: usize) -> RunSummary {
        RunSummary {
            snps_read,
            snps_matched: self.nearest.len(),
            snps_skipped: snps_read - self.nearest.len(),
            match_rows: self.matches.len(),
            without_protein_coding: self.nearest.iter().filter(|n| n.gene.is_empty()).count(),
        }
    }
}

/// SNPs grouped by label, groups in order of first appearance, SNPs in file
/// order within each group.
pub fn group_order(snps: &[Snp]) -> Vec<&Snp> {
    let mut rank: HashMap<&str, usize> = HashMap::new();
    for snp in snps {
        let next = rank.len();
        rank.entry(snp.group.as_str()).or_insert(next);
    }

    let mut ordered: Vec<&Snp> = snps.iter().collect();
    ordered.sort_by_key(|snp| rank[snp.group.as_str()]);
    ordered
}

/// TAD genes and nearest protein-coding gene for one SNP, or `None` when the
/// SNP lies outside every TAD.
pub fn annotate_snp(index: &TadIndex, snp: &Snp) -> Option<(Vec<TadMatch>, NearestGene)> {
    let genes = index.lookup(&snp.chrom, snp.position);
    if genes.is_empty() {
        debug!("{} ({}:{}) is not in any TAD", snp.rsid, snp.chrom, snp.position);
        return None;
    }

    let nearest_gene = match nearest_protein_coding(&genes, snp.position) {
        Some(gene) => {
            debug!(
                "{} -> {} ({}bp, {} gene(s) in TAD)",
                snp.rsid,
                gene.gene_name,
                gene_distance(gene, snp.position),
                genes.len()
            );
            gene.gene_name.clone()
        }
        None => {
            debug!("{} has no protein coding gene in its TAD", snp.rsid);
            String::new()
        }
    };

    let matches = genes.iter().map(|gene| TadMatch::new(gene, snp)).collect();
    let nearest = NearestGene {
        gene: nearest_gene,
        snp: snp.rsid.clone(),
        group: snp.group.clone(),
    };
    Some((matches, nearest))
}

/// Map every SNP onto the index. Output rows follow `group_order`.
pub fn build_genelist(index: &TadIndex, snps: &[Snp]) -> Genelist {
    let ordered = group_order(snps);

    // Order-preserving collect keeps the output independent of thread count
    let hits: Vec<Option<(Vec<TadMatch>, NearestGene)>> = ordered
        .par_iter()
        .map(|snp| annotate_snp(index, snp))
        .collect();

    let mut genelist = Genelist::default();
    for (matches, nearest) in hits.into_iter().flatten() {
        genelist.matches.extend(matches);
        genelist.nearest.push(nearest);
    }
    genelist
}

/// Load both inputs, build the genelist and write both tables.
pub fn run(config: &Config) -> Result<RunSummary> {
    let index_path = config.index_path();
    let index = TadIndex::from_path(&index_path)?;
    info!("Loaded {} TAD gene(s) from {}", index.len(), index_path.display());
    if index.is_empty() {
        warn!("{} holds no genes; every SNP will be skipped", index_path.display());
    }

    let snps: Vec<Snp> = read_tsv(&config.snp_data_file)?;
    info!("Loaded {} SNP(s) from {}", snps.len(), config.snp_data_file.display());

    let genelist = build_genelist(&index, &snps);

    write_matches(&config.output_file, &genelist.matches)?;
    let nearest_path = config.nearest_gene_path();
    write_nearest_genes(&nearest_path, &genelist.nearest)?;
    info!(
        "Wrote {} and {}",
        config.output_file.display(),
        nearest_path.display()
    );

    Ok(genelist.summary(snps.len()))
}
