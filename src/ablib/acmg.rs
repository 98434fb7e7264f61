use crate::ablib::Table;
use itertools::Itertools;

const ANCHOR_COLUMN: &str = "InterVar_automated";

/// The InterVar evidence columns, in the order they follow `InterVar_automated`
pub const EVIDENCE_COLUMNS: [&str; 28] = [
    "PVS1", "PS1", "PS2", "PS3", "PS4", "PM1", "PM2", "PM3", "PM4", "PM5", "PM6", "PP1", "PP2",
    "PP3", "PP4", "PP5", "BA1", "BS1", "BS2", "BS3", "BS4", "BP1", "BP2", "BP3", "BP4", "BP5",
    "BP6", "BP7",
];

/// ACMG: collapse the 28 one-hot evidence columns into a single `ACMG`
/// column holding the ";"-joined names of the codes that fired ("." when
/// none did). The summary sits right after `InterVar_automated` and the
/// raw evidence columns are dropped.
pub fn acmg_summary(mut table: Table) -> Table {
    table.require_index(ANCHOR_COLUMN);

    let mut hits: Vec<Vec<&str>> = vec![Vec::new(); table.n_rows()];
    for name in EVIDENCE_COLUMNS {
        for (row, value) in table.require(name).iter().enumerate() {
            if value == "1" {
                hits[row].push(name);
            }
        }
    }
    let summary: Vec<String> = hits
        .into_iter()
        .map(|codes| {
            if codes.is_empty() {
                ".".to_string()
            } else {
                codes.iter().join(";")
            }
        })
        .collect();

    for name in EVIDENCE_COLUMNS {
        table.drop_column(name);
    }
    let anchor = table.require_index(ANCHOR_COLUMN);
    table.insert_column(anchor + 1, "ACMG", summary);
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn build() -> Table {
        let mut table = Table::new();
        table.push_column("Gene.refGene", strings(&["BRCA1", "TP53", "TTN"]));
        table.push_column(
            "InterVar_automated",
            strings(&["Pathogenic", "Benign", "Uncertain significance"]),
        );
        for name in EVIDENCE_COLUMNS {
            let values = match name {
                "PVS1" => strings(&["1", "0", "0"]),
                "PM2" => strings(&["1", "0", "0"]),
                "BA1" => strings(&["0", "1", "0"]),
                _ => strings(&["0", "0", "0"]),
            };
            table.push_column(name, values);
        }
        table.push_column("Otherinfo1", strings(&["het", "het", "hom"]));
        table
    }

    #[test]
    fn test_acmg_summary() {
        let table = acmg_summary(build());

        assert_eq!(table.column("ACMG").unwrap(), &["PVS1;PM2", "BA1", "."]);
        // summary lands right after the anchor, evidence columns are gone
        assert_eq!(
            table.position("ACMG").unwrap(),
            table.position("InterVar_automated").unwrap() + 1
        );
        for name in EVIDENCE_COLUMNS {
            assert!(!table.contains(name));
        }
        // trailing columns survive
        assert!(table.contains("Otherinfo1"));
        assert_eq!(table.n_cols(), 4);
    }
}
