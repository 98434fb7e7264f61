use crate::ablib::Table;

// Per-sample GT:AD:DP string from the source VCF
const SAMPLE_COLUMN: &str = "Otherinfo12";

// Raw VCF passthrough columns retired once the derived fields exist
const RAW_SAMPLE_COLUMNS: [&str; 8] = [
    "Otherinfo1",
    "Otherinfo2",
    "Otherinfo3",
    "Otherinfo6",
    "Otherinfo9",
    "Otherinfo10",
    "Otherinfo11",
    "Otherinfo12",
];

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Zygosity {
    FpHet,
    Het,
    HetHom,
    Hom,
}

impl Zygosity {
    /// Classifies a variant allele fraction into a zygosity bucket.
    ///
    /// # Parameters
    /// - `vaf`: variant allele fraction, altReads / coverage.
    ///
    /// # Returns
    /// A `Zygosity` bucket:
    /// - below 0.25, `FpHet` (too few alt reads for a clean het call)
    /// - below 0.75, `Het`
    /// - below 0.85, `HetHom` (ambiguous)
    /// - otherwise `Hom`
    pub fn from_vaf(vaf: f64) -> Self {
        if vaf < 0.25 {
            Zygosity::FpHet
        } else if vaf < 0.75 {
            Zygosity::Het
        } else if vaf < 0.85 {
            Zygosity::HetHom
        } else {
            Zygosity::Hom
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Zygosity::FpHet => "FP/HET",
            Zygosity::Het => "HET",
            Zygosity::HetHom => "HET/HOM",
            Zygosity::Hom => "HOM",
        }
    }
}

/// Parses a colon-delimited sample string of the shape
/// `GT:refReads,altReads:coverage` (e.g. "0/1:3,7:10").
///
/// # Returns
/// `(refReads, altReads, coverage)`, or `None` when the string doesn't
/// have that shape.
fn parse_sample(field: &str) -> Option<(u64, u64, u64)> {
    let mut parts = field.split(':');
    let _genotype = parts.next()?;
    let mut depths = parts.next()?.split(',');
    let coverage = parts.next()?.trim().parse::<u64>().ok()?;

    let ref_reads = depths.next()?.trim().parse::<u64>().ok()?;
    let alt_reads = depths.next()?.trim().parse::<u64>().ok()?;
    Some((ref_reads, alt_reads, coverage))
}

/// ZYGO: derive Zygosity/VAF/Coverage/RefReads/AltReads from the per-sample
/// genotype string and retire the raw OtherinfoN passthrough columns. Rows
/// whose sample string can't be parsed get "." in all five derived columns.
pub fn zygo(mut table: Table) -> Table {
    let samples = table.require(SAMPLE_COLUMN).to_vec();

    let mut zygosity = Vec::with_capacity(samples.len());
    let mut vaf = Vec::with_capacity(samples.len());
    let mut coverage = Vec::with_capacity(samples.len());
    let mut ref_reads = Vec::with_capacity(samples.len());
    let mut alt_reads = Vec::with_capacity(samples.len());

    for sample in &samples {
        match parse_sample(sample) {
            Some((refr, altr, cov)) => {
                let frac = if cov == 0 {
                    0.0
                } else {
                    altr as f64 / cov as f64
                };
                zygosity.push(Zygosity::from_vaf(frac).as_str().to_string());
                vaf.push(format!("{:.3}", frac));
                coverage.push(cov.to_string());
                ref_reads.push(refr.to_string());
                alt_reads.push(altr.to_string());
            }
            None => {
                debug!("unparseable sample string '{}'", sample);
                for derived in [
                    &mut zygosity,
                    &mut vaf,
                    &mut coverage,
                    &mut ref_reads,
                    &mut alt_reads,
                ] {
                    derived.push(".".to_string());
                }
            }
        }
    }

    let anchor = table.require_index("Alternate");
    table.insert_column(anchor + 1, "Zygosity", zygosity);
    table.insert_column(anchor + 2, "VAF", vaf);
    table.insert_column(anchor + 3, "Coverage", coverage);
    table.insert_column(anchor + 4, "RefReads", ref_reads);
    table.insert_column(anchor + 5, "AltReads", alt_reads);

    for name in RAW_SAMPLE_COLUMNS {
        table.drop_column(name);
    }
    table
}
