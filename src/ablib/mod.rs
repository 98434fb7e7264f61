mod acmg;
pub use crate::ablib::acmg::{acmg_summary, EVIDENCE_COLUMNS};

mod chroms;
pub use crate::ablib::chroms::{main_chr, remove_chr};

mod cli;
pub use crate::ablib::cli::{AnnotabParams, ArgParser, Commands, Stage1Args, Wlda6Args};

mod columns;
pub use crate::ablib::columns::{del_col, rename_fixed, reorder, CANONICAL_ORDER, DELETE_COLUMNS};

mod frequencies;
pub use crate::ablib::frequencies::gnomad_zero;

mod genes;
pub use crate::ablib::genes::split_gene;

mod locus;
pub use crate::ablib::locus::chr_pos_ref_alt;

mod reader;
pub use crate::ablib::reader::read_tsv;

mod registry;
pub use crate::ablib::registry::{apply_flags, is_known, known_flags, Transform};

mod stage1;
pub use crate::ablib::stage1::stage1_main;

mod table;
pub use crate::ablib::table::Table;

mod transcripts;
pub use crate::ablib::transcripts::{hgvsc_p, merge_annotations, transcript};

mod wlda6;
pub use crate::ablib::wlda6::wlda6_main;

mod writer;
pub use crate::ablib::writer::{make_output_path, write_tsv};

mod zygosity;
pub use crate::ablib::zygosity::{zygo, Zygosity};
