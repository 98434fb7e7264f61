use crate::ablib::Table;

// ANNOVAR's 1-based locus columns, superseded by the VCF-derived ones
const ORIGINAL_LOCUS_COLUMNS: [&str; 5] = ["Chr", "Start", "End", "Ref", "Alt"];

// OtherinfoN columns carrying the original VCF CHROM/POS/REF/ALT
const PROMOTED_COLUMNS: [(&str, &str); 4] = [
    ("Otherinfo4", "Chr"),
    ("Otherinfo5", "position"),
    ("Otherinfo7", "Reference"),
    ("Otherinfo8", "Alternate"),
];

/// CHR-POS-REF-ALT: drop the five original locus columns, rename the
/// VCF-derived `OtherinfoN` locus columns to their final names, and move
/// them to the front of the table in Chr/position/Reference/Alternate order.
pub fn chr_pos_ref_alt(mut table: Table) -> Table {
    for name in ORIGINAL_LOCUS_COLUMNS {
        table.require_index(name);
    }
    for (old, _) in PROMOTED_COLUMNS {
        table.require_index(old);
    }

    for name in ORIGINAL_LOCUS_COLUMNS {
        table.drop_column(name);
    }
    for (old, new) in PROMOTED_COLUMNS {
        table.rename_column(old, new);
    }
    for (front, (_, new)) in PROMOTED_COLUMNS.into_iter().enumerate() {
        table.move_column(new, front);
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
    fn test_locus_promotion() {
        let mut table = Table::new();
        table.push_column("Chr", strings(&["chr1"]));
        table.push_column("Start", strings(&["100"]));
        table.push_column("End", strings(&["100"]));
        table.push_column("Ref", strings(&["A"]));
        table.push_column("Alt", strings(&["T"]));
        table.push_column("Gene.refGene", strings(&["BRCA1"]));
        table.push_column("Otherinfo4", strings(&["chr1"]));
        table.push_column("Otherinfo5", strings(&["99"]));
        table.push_column("Otherinfo6", strings(&["rs123"]));
        table.push_column("Otherinfo7", strings(&["CA"]));
        table.push_column("Otherinfo8", strings(&["C"]));

        let table = chr_pos_ref_alt(table);

        assert_eq!(
            table.header().take(4).collect::<Vec<_>>(),
            vec!["Chr", "position", "Reference", "Alternate"]
        );
        // the VCF representation wins over the ANNOVAR one
        assert_eq!(table.column("position").unwrap(), &["99"]);
        assert_eq!(table.column("Reference").unwrap(), &["CA"]);
        assert_eq!(table.column("Alternate").unwrap(), &["C"]);
        assert!(!table.contains("Start"));
        assert!(!table.contains("End"));
        assert!(!table.contains("Ref"));
        assert!(!table.contains("Alt"));
        // untouched columns keep their relative order behind the locus block
        assert!(table.position("Gene.refGene").unwrap() > 3);
        assert!(table.contains("Otherinfo6"));
    }
}
