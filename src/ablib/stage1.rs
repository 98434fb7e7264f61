use crate::ablib::{make_output_path, read_tsv, registry, write_tsv, Stage1Args};

/// Runs the flag pipeline over one annotation table and writes the result
/// to `<input_dir>/stage1/output.txt`.
pub fn stage1_main(args: Stage1Args) {
    info!("processing {}", args.input.display());
    let table = read_tsv(&args.input);
    info!("loaded {} rows x {} columns", table.n_rows(), table.n_cols());

    let table = registry::apply_flags(table, &args.flags);

    let out_path = make_output_path(&args.input, "stage1");
    write_tsv(&table, &out_path);

    let applied: Vec<&str> = args.flags.iter().map(|f| registry::normalize(f)).collect();
    info!("applied flags: {:?}", applied);
    info!("wrote {} rows to {}", table.n_rows(), out_path.display());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_stage1_round_trip() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("anno.txt");
        std::fs::write(
            &input,
            "Chr\tGene.refGene\n\
             chr1\tBRCA1\n\
             chrUn_gl000220\tFAKE\n\
             chrMT\tMT-ND1\n",
        )
        .unwrap();

        let args = Stage1Args {
            input: input.clone(),
            flags: vec!["-MAINCHR".to_string(), "-REMOVECHR".to_string()],
            debug: false,
        };
        stage1_main(args);

        let out: PathBuf = dir.path().join("stage1").join("output.txt");
        let written = std::fs::read_to_string(&out).unwrap();
        assert_eq!(
            written,
            "Chr\tGene.refGene\n1\tBRCA1\nM\tMT-ND1\n"
        );
    }
}
