use crate::ablib::Table;

const GENE_COLUMN: &str = "Gene.refGene";

/// SPLITGENE: explode rows annotated against several genes at once.
/// `Gene.refGene` is split on "," and every other column is duplicated,
/// so each output row carries exactly one gene.
pub fn split_gene(table: Table) -> Table {
    let parts: Vec<Vec<String>> = table
        .require(GENE_COLUMN)
        .iter()
        .map(|genes| genes.split(',').map(str::to_string).collect())
        .collect();

    let mut out = Table::new();
    for (name, values) in table.iter() {
        let expanded: Vec<String> = if name == GENE_COLUMN {
            parts.iter().flatten().cloned().collect()
        } else {
            values
                .iter()
                .zip(&parts)
                .flat_map(|(value, genes)| std::iter::repeat(value.clone()).take(genes.len()))
                .collect()
        };
        out.push_column(name, expanded);
    }
    out
}
