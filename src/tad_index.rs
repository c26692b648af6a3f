use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use bio::data_structures::interval_tree::ArrayBackedIntervalTree;
use log::{debug, warn};

use crate::io::read_tsv;
use crate::records::TadGene;

const CHROM_PREFIX: &str = "chr";

/// Strip the `chr` prefix so `chr1` in a SNP table matches `1` in the index.
pub fn normalize_chrom(chrom: &str) -> &str {
    chrom.strip_prefix(CHROM_PREFIX).unwrap_or(chrom)
}

/// Gene index with one interval tree of TADs per chromosome.
pub struct TadIndex {
    genes: Vec<TadGene>,
    trees: HashMap<String, ArrayBackedIntervalTree<u64, usize>>,
}

impl TadIndex {
    pub fn new(genes: Vec<TadGene>) -> Self {
        let mut trees: HashMap<String, ArrayBackedIntervalTree<u64, usize>> = HashMap::new();

        for (row, gene) in genes.iter().enumerate() {
            if gene.tad_start > gene.tad_end {
                warn!(
                    "Skipping {} in TAD {}: start {} is past end {}",
                    gene.gene_name, gene.tad_id, gene.tad_start, gene.tad_end
                );
                continue;
            }
            trees
                .entry(normalize_chrom(&gene.chromosome).to_string())
                .or_insert_with(ArrayBackedIntervalTree::new)
                .insert(gene.tad_start..gene.tad_end, row);
        }

        for tree in trees.values_mut() {
            tree.index();
        }

        debug!("Indexed {} genes on {} chromosome(s)", genes.len(), trees.len());
        TadIndex { genes, trees }
    }

    /// Load a gene index table (`GENE_index_hg19_<cell>.tsv.bz2` or any TSV).
    pub fn from_path(path: &Path) -> Result<Self> {
        let genes: Vec<TadGene> = read_tsv(path)?;
        Ok(TadIndex::new(genes))
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// All genes whose TAD contains `position` on `chrom`, in index row order.
    /// Empty when the SNP falls outside every TAD.
    pub fn lookup(&self, chrom: &str, position: u64) -> Vec<&TadGene> {
        let Some(tree) = self.trees.get(normalize_chrom(chrom)) else {
            return Vec::new();
        };

        let mut rows: Vec<usize> = tree
            .find(position..position.saturating_add(1))
            .iter()
            .map(|entry| *entry.data())
            .filter(|&row| self.genes[row].tad_contains(position))
            .collect();
        rows.sort_unstable();

        rows.into_iter().map(|row| &self.genes[row]).collect()
    }
}
