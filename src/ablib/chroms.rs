use crate::ablib::Table;
use std::collections::HashSet;

lazy_static::lazy_static! {
    static ref MAIN_CHROMS: HashSet<&'static str> = {
        let mut chroms = HashSet::new();
        for name in [
            "chr1", "chr2", "chr3", "chr4", "chr5", "chr6", "chr7", "chr8", "chr9", "chr10",
            "chr11", "chr12", "chr13", "chr14", "chr15", "chr16", "chr17", "chr18", "chr19",
            "chr20", "chr21", "chr22", "chrX", "chrY", "chrMT",
        ] {
            chroms.insert(name);
        }
        chroms
    };
}

/// MAINCHR: keep only rows whose `Chr` is a main chromosome.
/// Alternate contigs, patches, and decoys are dropped.
pub fn main_chr(mut table: Table) -> Table {
    let keep: Vec<bool> = table
        .require("Chr")
        .iter()
        .map(|chrom| MAIN_CHROMS.contains(chrom.as_str()))
        .collect();
    table.retain_rows(&keep);
    table
}

/// REMOVECHR: strip the leading "chr" from `Chr` values and fold the
/// mitochondrial spellings (MT, Mt, m) onto "M".
pub fn remove_chr(mut table: Table) -> Table {
    table.require_index("Chr");
    if let Some(values) = table.column_mut("Chr") {
        for value in values.iter_mut() {
            let stripped = value.strip_prefix("chr").unwrap_or(value.as_str()).to_string();
            *value = match stripped.as_str() {
                "MT" | "Mt" | "m" => "M".to_string(),
                _ => stripped,
            };
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_main_chr_filters_to_allow_set() {
        let mut table = Table::new();
        table.push_column(
            "Chr",
            strings(&["chr1", "chr11_gl000202_random", "chrX", "chrUn_gl000220", "chrMT"]),
        );
        table.push_column("Start", strings(&["1", "2", "3", "4", "5"]));

        let before = table.n_rows();
        let table = main_chr(table);

        assert!(table.n_rows() <= before);
        assert_eq!(table.column("Chr").unwrap(), &["chr1", "chrX", "chrMT"]);
        assert_eq!(table.column("Start").unwrap(), &["1", "3", "5"]);
        for chrom in table.column("Chr").unwrap() {
            assert!(MAIN_CHROMS.contains(chrom.as_str()));
        }
    }

    #[test]
    fn test_remove_chr_normalizes() {
        let mut table = Table::new();
        table.push_column("Chr", strings(&["chr7", "chrX", "chrMT", "Mt", "m", "12"]));

        let table = remove_chr(table);
        assert_eq!(table.column("Chr").unwrap(), &["7", "X", "M", "M", "M", "12"]);
    }
}
