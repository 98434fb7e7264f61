#[macro_use]
extern crate log;

mod ablib;
pub use self::{
    ablib::acmg_summary, ablib::apply_flags, ablib::chr_pos_ref_alt, ablib::del_col,
    ablib::gnomad_zero, ablib::hgvsc_p, ablib::is_known, ablib::known_flags, ablib::main_chr,
    ablib::make_output_path, ablib::merge_annotations, ablib::read_tsv, ablib::remove_chr,
    ablib::rename_fixed, ablib::reorder, ablib::split_gene, ablib::stage1_main, ablib::transcript,
    ablib::wlda6_main, ablib::write_tsv, ablib::zygo, ablib::AnnotabParams, ablib::ArgParser,
    ablib::Commands, ablib::Stage1Args, ablib::Table, ablib::Transform, ablib::Wlda6Args,
    ablib::Zygosity, ablib::CANONICAL_ORDER, ablib::DELETE_COLUMNS, ablib::EVIDENCE_COLUMNS,
};
