use crate::ablib::Table;
use csv::ReaderBuilder;
use std::path::Path;

/// Loads a tab-separated annotation table with every cell kept as a string.
/// Ragged lines and duplicated headers are fatal.
pub fn read_tsv(path: &Path) -> Table {
    let mut reader = match ReaderBuilder::new().delimiter(b'\t').from_path(path) {
        Ok(reader) => reader,
        Err(e) => {
            error!("unable to open {}: {}", path.display(), e);
            std::process::exit(1);
        }
    };

    let headers: Vec<String> = match reader.headers() {
        Ok(headers) => headers.iter().map(str::to_string).collect(),
        Err(e) => {
            error!("unable to read header of {}: {}", path.display(), e);
            std::process::exit(1);
        }
    };

    let mut columns: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                error!("malformed line in {}: {}", path.display(), e);
                std::process::exit(1);
            }
        };
        for (col, field) in record.iter().enumerate() {
            columns[col].push(field.to_string());
        }
    }

    let mut table = Table::new();
    for (name, values) in headers.into_iter().zip(columns) {
        table.push_column(name, values);
    }
    table
}
