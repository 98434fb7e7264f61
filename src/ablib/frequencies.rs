use crate::ablib::Table;

const FREQUENCY_COLUMNS: [&str; 2] = ["gnomAD_genome_ALL", "gnomAD_exome_ALL"];

/// GNOMAD0: variants absent from gnomAD carry the "." sentinel in their
/// allele-frequency columns. Downstream filtering wants a number, so the
/// sentinel becomes "0".
pub fn gnomad_zero(mut table: Table) -> Table {
    for name in FREQUENCY_COLUMNS {
        table.require_index(name);
        if let Some(values) = table.column_mut(name) {
            for value in values.iter_mut() {
                if value == "." {
                    *value = "0".to_string();
                }
            }
        }
    }
    table
}
