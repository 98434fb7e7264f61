use crate::ablib::Table;
use csv::WriterBuilder;
use std::fs;
use std::path::{Path, PathBuf};

/// Output lands in a subdirectory beside the input, always named output.txt
pub fn make_output_path(input: &Path, subdir: &str) -> PathBuf {
    let parent = match input.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let out_dir = parent.join(subdir);
    if let Err(e) = fs::create_dir_all(&out_dir) {
        error!("unable to create {}: {}", out_dir.display(), e);
        std::process::exit(1);
    }
    out_dir.join("output.txt")
}

/// Serializes the table back to tab-separated text
pub fn write_tsv(table: &Table, path: &Path) {
    let mut writer = match WriterBuilder::new().delimiter(b'\t').from_path(path) {
        Ok(writer) => writer,
        Err(e) => {
            error!("unable to create {}: {}", path.display(), e);
            std::process::exit(1);
        }
    };

    if let Err(e) = writer.write_record(table.header()) {
        error!("unable to write {}: {}", path.display(), e);
        std::process::exit(1);
    }
    for row in 0..table.n_rows() {
        if let Err(e) = writer.write_record(table.row(row)) {
            error!("unable to write {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }
    if let Err(e) = writer.flush() {
        error!("unable to write {}: {}", path.display(), e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ablib::read_tsv;
    use tempfile::tempdir;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_output_path() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("anno.txt");
        std::fs::write(&input, "Chr\n").unwrap();

        let out = make_output_path(&input, "stage1");
        assert_eq!(out, dir.path().join("stage1").join("output.txt"));
        assert!(out.parent().unwrap().is_dir());
    }

    #[test]
    fn test_round_trip() {
        let mut table = Table::new();
        table.push_column("Chr", strings(&["chr1", "chr2"]));
        table.push_column("Alt", strings(&["T", "."]));

        let dir = tempdir().unwrap();
        let path = dir.path().join("output.txt");
        write_tsv(&table, &path);

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "Chr\tAlt\nchr1\tT\nchr2\t.\n");

        let reloaded = read_tsv(&path);
        assert_eq!(reloaded.n_rows(), 2);
        assert_eq!(reloaded.column("Alt").unwrap(), &["T", "."]);
    }
}
