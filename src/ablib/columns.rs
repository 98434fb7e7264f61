use crate::ablib::Table;
use std::collections::HashSet;

/// Columns retired from the final report: dbNSFP raw scores and rankscores
/// whose _pred counterparts are kept, plus the ensGene annotations left
/// over once the merge flags have run
pub const DELETE_COLUMNS: [&str; 38] = [
    "Func.ensGene",
    "Gene.ensGene",
    "ExonicFunc.ensGene",
    "SIFT_score",
    "SIFT_converted_rankscore",
    "Polyphen2_HDIV_score",
    "Polyphen2_HDIV_rankscore",
    "Polyphen2_HVAR_score",
    "Polyphen2_HVAR_rankscore",
    "LRT_score",
    "LRT_converted_rankscore",
    "MutationTaster_score",
    "MutationTaster_converted_rankscore",
    "MutationAssessor_score",
    "MutationAssessor_score_rankscore",
    "FATHMM_score",
    "FATHMM_converted_rankscore",
    "PROVEAN_score",
    "PROVEAN_converted_rankscore",
    "VEST3_score",
    "VEST3_rankscore",
    "MetaSVM_score",
    "MetaSVM_rankscore",
    "MetaLR_score",
    "MetaLR_rankscore",
    "M-CAP_score",
    "M-CAP_rankscore",
    "CADD_raw_rankscore",
    "DANN_rankscore",
    "fathmm-MKL_coding_score",
    "fathmm-MKL_coding_rankscore",
    "Eigen_coding_or_noncoding",
    "GenoCanyon_score_rankscore",
    "integrated_fitCons_score_rankscore",
    "GERP++_RS_rankscore",
    "phyloP100way_vertebrate_rankscore",
    "phyloP20way_mammalian_rankscore",
    "SiPhy_29way_logOdds_rankscore",
];

const RENAMED_COLUMNS: [(&str, &str); 3] = [
    ("Func.refGene", "Function"),
    ("Gene.refGene", "Gene"),
    ("ExonicFunc.refGene", "ExonicFunction"),
];

/// The final report layout. REORDER refuses anything outside this list.
pub const CANONICAL_ORDER: [&str; 57] = [
    "Chr",
    "position",
    "Reference",
    "Alternate",
    "Zygosity",
    "VAF",
    "Coverage",
    "RefReads",
    "AltReads",
    "Function",
    "Gene",
    "ExonicFunction",
    "Transcript",
    "HGVSc_p",
    "cytoBand",
    "avsnp150",
    "gnomAD_genome_ALL",
    "gnomAD_exome_ALL",
    "esp6500siv2_all",
    "1000g2015aug_all",
    "ExAC_ALL",
    "CLNALLELEID",
    "CLNDN",
    "CLNDISDB",
    "CLNREVSTAT",
    "CLNSIG",
    "InterVar_automated",
    "ACMG",
    "SIFT_pred",
    "Polyphen2_HDIV_pred",
    "Polyphen2_HVAR_pred",
    "LRT_pred",
    "MutationTaster_pred",
    "MutationAssessor_pred",
    "FATHMM_pred",
    "PROVEAN_pred",
    "MetaSVM_pred",
    "MetaLR_pred",
    "M-CAP_pred",
    "fathmm-MKL_coding_pred",
    "GenoCanyon_score",
    "integrated_fitCons_score",
    "GERP++_RS",
    "phyloP100way_vertebrate",
    "phyloP20way_mammalian",
    "phastCons100way_vertebrate",
    "phastCons20way_mammalian",
    "SiPhy_29way_logOdds",
    "REVEL",
    "CADD_raw",
    "CADD_phred",
    "DANN_score",
    "Eigen",
    "GTEx_V6p_gene",
    "GTEx_V6p_tissue",
    "Interpro_domain",
    "rmsk",
];

/// DELCOL: drop the retired annotation columns, each only if present
pub fn del_col(mut table: Table) -> Table {
    for name in DELETE_COLUMNS {
        table.drop_column(name);
    }
    table
}

/// RENAME: final report names for the refGene annotation columns,
/// each only if present
pub fn rename_fixed(mut table: Table) -> Table {
    for (old, new) in RENAMED_COLUMNS {
        table.rename_column(old, new);
    }
    table
}

/// REORDER: rewrite the table in the canonical 57-column order. A column
/// outside the canonical set means an upstream flag was skipped and is
/// fatal; an expected column that's missing only warns.
pub fn reorder(mut table: Table) -> Table {
    let canonical: HashSet<&str> = CANONICAL_ORDER.iter().copied().collect();
    for name in table.header() {
        if !canonical.contains(name) {
            error!("unexpected column '{}' at reorder", name);
            std::process::exit(1);
        }
    }

    let mut out = Table::new();
    for name in CANONICAL_ORDER {
        match table.drop_column(name) {
            Some(values) => out.push_column(name, values),
            None => warn!("expected column '{}' missing at reorder", name),
        }
    }
    out
}
