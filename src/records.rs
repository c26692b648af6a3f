use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// One row of the gene index: a gene and the TAD it falls in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TadGene {
    #[serde(alias = "chrom")]
    pub chromosome: String,
    #[serde(rename = "TAD_start")]
    pub tad_start: u64,
    #[serde(rename = "TAD_end")]
    pub tad_end: u64,
    #[serde(rename = "TAD_id", alias = "TADidx")]
    pub tad_id: String,
    pub gene_name: String,
    pub gene_type: String,
    pub start: u64,
    pub stop: u64,
    pub strand: String,
    #[serde(rename = "type", default)]
    pub feature_type: String,
    pub db: String,
}

impl TadGene {
    /// Half-open containment: `TAD_start <= position < TAD_end`.
    pub fn tad_contains(&self, position: u64) -> bool {
        self.tad_start <= position && position < self.tad_end
    }
}

/// A significant SNP. Columns other than these four are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Snp {
    #[serde(rename = "snp")]
    pub rsid: String,
    pub chrom: String,
    #[serde(deserialize_with = "deserialize_position")]
    pub position: u64,
    pub group: String,
}

/// Accept integral positions written as floats by R or pandas (`150.0`, `1e+05`).
fn deserialize_position<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();
    if let Ok(position) = raw.parse::<u64>() {
        return Ok(position);
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64 => {
            Ok(value as u64)
        }
        _ => Err(D::Error::custom(format!("invalid SNP position '{}'", raw))),
    }
}

/// Column order of the match table.
pub const MATCH_HEADER: [&str; 13] = [
    "TADEnd",
    "TADidx",
    "TADStart",
    "chrom",
    "custom_snp",
    "db",
    "gene_name",
    "gene_type",
    "group",
    "start",
    "stop",
    "strand",
    "type",
];

/// A gene in a TAD that harbors `custom_snp`. Field order follows `MATCH_HEADER`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TadMatch {
    #[serde(rename = "TADEnd")]
    pub tad_end: u64,
    #[serde(rename = "TADidx")]
    pub tad_id: String,
    #[serde(rename = "TADStart")]
    pub tad_start: u64,
    pub chrom: String,
    pub custom_snp: String,
    pub db: String,
    pub gene_name: String,
    pub gene_type: String,
    pub group: String,
    pub start: u64,
    pub stop: u64,
    pub strand: String,
    #[serde(rename = "type")]
    pub feature_type: String,
}

impl TadMatch {
    pub fn new(gene: &TadGene, snp: &Snp) -> Self {
        TadMatch {
            tad_end: gene.tad_end,
            tad_id: gene.tad_id.clone(),
            tad_start: gene.tad_start,
            chrom: gene.chromosome.clone(),
            custom_snp: snp.rsid.clone(),
            db: gene.db.clone(),
            gene_name: gene.gene_name.clone(),
            gene_type: gene.gene_type.clone(),
            group: snp.group.clone(),
            start: gene.start,
            stop: gene.stop,
            strand: gene.strand.clone(),
            feature_type: gene.feature_type.clone(),
        }
    }
}

/// Nearest protein-coding gene for one SNP; `gene` is empty when the
/// SNP's TAD holds no protein-coding gene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NearestGene {
    pub gene: String,
    pub snp: String,
    pub group: String,
}
