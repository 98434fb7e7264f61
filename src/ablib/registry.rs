use crate::ablib::{acmg, chroms, columns, frequencies, genes, locus, transcripts, zygosity};
use crate::ablib::Table;
use indexmap::IndexMap;

pub type Transform = fn(Table) -> Table;

lazy_static::lazy_static! {
    static ref FLAGS: IndexMap<&'static str, Transform> = {
        let mut flags: IndexMap<&'static str, Transform> = IndexMap::new();
        flags.insert("MAINCHR", chroms::main_chr);
        flags.insert("SPLITGENE", genes::split_gene);
        flags.insert("GNOMAD0", frequencies::gnomad_zero);
        flags.insert("ACMG", acmg::acmg_summary);
        flags.insert("CHR-POS-REF-ALT", locus::chr_pos_ref_alt);
        flags.insert("ZYGO", zygosity::zygo);
        flags.insert("HGVSC_P", transcripts::hgvsc_p);
        flags.insert("TRANSCRIPT", transcripts::transcript);
        flags.insert("DELCOL", columns::del_col);
        flags.insert("RENAME", columns::rename_fixed);
        flags.insert("REMOVECHR", chroms::remove_chr);
        flags.insert("REORDER", columns::reorder);
        flags
    };
}

/// Flags may be spelled with the original scripts' leading dash (-MAINCHR)
pub fn normalize(flag: &str) -> &str {
    flag.trim_start_matches('-')
}

pub fn is_known(flag: &str) -> bool {
    FLAGS.contains_key(normalize(flag))
}

pub fn known_flags() -> impl Iterator<Item = &'static str> {
    FLAGS.keys().copied()
}

/// Applies the requested flags in order. Unknown flags are fatal, though
/// argument validation should have rejected them before any table work.
pub fn apply_flags(mut table: Table, flags: &[String]) -> Table {
    for flag in flags {
        match FLAGS.get(normalize(flag)).copied() {
            Some(transform) => {
                debug!("applying {}", normalize(flag));
                table = transform(table);
            }
            None => {
                error!("unknown flag '{}'", flag);
                std::process::exit(1);
            }
        }
    }
    table
}
