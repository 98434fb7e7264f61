use crate::ablib::Table;

/// Merges a refGene/ensGene annotation pair into one value.
///
/// # Returns
/// - both "." -> "."
/// - one "." -> the other value
/// - otherwise `"A |B"` (first value, space, pipe, second value)
pub fn merge_annotations(a: &str, b: &str) -> String {
    match (a == ".", b == ".") {
        (true, true) => ".".to_string(),
        (false, true) => a.to_string(),
        (true, false) => b.to_string(),
        (false, false) => format!("{} |{}", a, b),
    }
}

/// HGVSC_P: merge the refGene and ensGene amino-acid-change annotations
/// into a single `HGVSc_p` column at the refGene column's position.
pub fn hgvsc_p(table: Table) -> Table {
    merge_pair(table, "AAChange.refGene", "AAChange.ensGene", "HGVSc_p")
}

/// TRANSCRIPT: same merge for the transcript detail annotations,
/// producing `Transcript`.
pub fn transcript(table: Table) -> Table {
    merge_pair(table, "GeneDetail.refGene", "GeneDetail.ensGene", "Transcript")
}

fn merge_pair(mut table: Table, first: &str, second: &str, merged_name: &str) -> Table {
    let first_idx = table.require_index(first);
    let second_idx = table.require_index(second);

    let merged: Vec<String> = table
        .require(first)
        .iter()
        .zip(table.require(second))
        .map(|(a, b)| merge_annotations(a, b))
        .collect();

    table.drop_column(first);
    table.drop_column(second);
    // the merged column takes the first one's slot
    let insert_at = if second_idx < first_idx {
        first_idx - 1
    } else {
        first_idx
    };
    table.insert_column(insert_at, merged_name, merged);
    table
}
