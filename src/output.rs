use std::path::Path;

use anyhow::{Context, Result};

use crate::io::tsv_writer;
use crate::records::{NearestGene, TadMatch, MATCH_HEADER};

/// Header of the nearest-gene table; the first column holds the row number.
pub const NEAREST_GENE_HEADER: [&str; 4] = ["", "MAPPED_GENE", "snp", "group"];

/// Write the match table. The header is written even when `matches` is empty.
pub fn write_matches(path: &Path, matches: &[TadMatch]) -> Result<()> {
    let mut writer = tsv_writer(path)?;
    writer.write_record(MATCH_HEADER)?;
    for row in matches {
        writer
            .serialize(row)
            .with_context(|| format!("Error writing {}", path.display()))?;
    }
    writer.flush().with_context(|| format!("Error writing {}", path.display()))?;
    Ok(())
}

/// Write the nearest-gene table with a leading 0-based row number column.
pub fn write_nearest_genes(path: &Path, nearest: &[NearestGene]) -> Result<()> {
    let mut writer = tsv_writer(path)?;
    writer.write_record(NEAREST_GENE_HEADER)?;
    for (row, hit) in nearest.iter().enumerate() {
        writer
            .write_record([
                row.to_string().as_str(),
                hit.gene.as_str(),
                hit.snp.as_str(),
                hit.group.as_str(),
            ])
            .with_context(|| format!("Error writing {}", path.display()))?;
    }
    writer.flush().with_context(|| format!("Error writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Snp;
    use crate::tad_index::tests::gene;

    #[test]
    fn test_write_matches_column_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.tsv");
        let snp = Snp {
            rsid: "rs1".to_string(),
            chrom: "chr1".to_string(),
            position: 150,
            group: "BMD".to_string(),
        };
        let row = TadMatch::new(&gene("1", (100, 200), "A", "protein_coding", (110, 190)), &snp);

        write_matches(&path, &[row]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "TADEnd\tTADidx\tTADStart\tchrom\tcustom_snp\tdb\tgene_name\tgene_type\tgroup\tstart\tstop\tstrand\ttype"
        );
        assert_eq!(
            lines[1],
            "200\t1:100-200\t100\t1\trs1\tHAVANA\tA\tprotein_coding\tBMD\t110\t190\t+\tgene"
        );
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_write_matches_empty_keeps_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.tsv");
        write_matches(&path, &[]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("TADEnd\t"));
    }

    #[test]
    fn test_write_nearest_genes_with_row_numbers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out_nearest_gene.tsv");
        let nearest = vec![
            NearestGene { gene: "A".to_string(), snp: "rs1".to_string(), group: "BMD".to_string() },
            NearestGene { gene: String::new(), snp: "rs2".to_string(), group: "BMD".to_string() },
        ];

        write_nearest_genes(&path, &nearest).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "\tMAPPED_GENE\tsnp\tgroup\n0\tA\trs1\tBMD\n1\t\trs2\tBMD\n");
    }
}
