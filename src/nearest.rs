use crate::records::TadGene;

pub const PROTEIN_CODING: &str = "protein_coding";

/// Distance from `position` to the closer of the gene's start and stop.
pub fn gene_distance(gene: &TadGene, position: u64) -> u64 {
    gene.start.abs_diff(position).min(gene.stop.abs_diff(position))
}

/// Pick the protein-coding gene closest to `position`.
///
/// Genes are compared on `gene_distance`. When several genes share the
/// minimum, the one that comes first in `genes` wins; ties are settled by
/// file order, not by which gene's start is closer. Returns `None` when no
/// protein-coding gene is present.
pub fn nearest_protein_coding<'a>(genes: &[&'a TadGene], position: u64) -> Option<&'a TadGene> {
    genes
        .iter()
        .copied()
        .filter(|gene| gene.gene_type == PROTEIN_CODING)
        .min_by_key(|gene| gene_distance(gene, position))
}
