use crate::ablib::{chroms, make_output_path, read_tsv, write_tsv, Wlda6Args};

/// Standalone main-chromosome filter. Same filter as the MAINCHR flag,
/// written to `<input_dir>/WLDA-6/output.txt`.
pub fn wlda6_main(args: Wlda6Args) {
    info!("processing {}", args.input.display());
    let table = read_tsv(&args.input);
    let before = table.n_rows();

    let table = chroms::main_chr(table);

    let out_path = make_output_path(&args.input, "WLDA-6");
    write_tsv(&table, &out_path);

    info!("rows removed: {}", before - table.n_rows());
    info!("wrote {}", out_path.display());
}
