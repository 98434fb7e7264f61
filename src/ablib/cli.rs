use crate::ablib::registry;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser, Clone, Debug)]
#[command(name = "annotab")]
#[command(about = "ANNOtation TABle transformer for variant reports")]
#[command(version)]
pub struct ArgParser {
    #[command(subcommand)]
    pub command: Commands,
}

pub trait AnnotabParams: std::fmt::Debug {
    fn validate(&self) -> bool;
    fn debug(&self) -> bool;
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    #[command(about = "Apply transformation flags to an annotation table")]
    Stage1(Stage1Args),

    #[command(about = "Standalone main-chromosome filter")]
    Wlda6(Wlda6Args),
}

#[derive(Parser, Debug, Clone)]
pub struct Stage1Args {
    /// Input annotation table (tab-separated)
    pub input: PathBuf,

    /// Transformation flags, applied in order (e.g. MAINCHR REMOVECHR)
    #[arg(required = true, allow_hyphen_values = true)]
    pub flags: Vec<String>,

    /// Verbose logging
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

impl AnnotabParams for Stage1Args {
    fn debug(&self) -> bool {
        self.debug
    }

    fn validate(&self) -> bool {
        let mut is_ok = validate_file(&self.input, "<input>");

        for flag in &self.flags {
            if !registry::is_known(flag) {
                error!(
                    "unknown flag '{}' (known: {})",
                    flag,
                    registry::known_flags().collect::<Vec<_>>().join(", ")
                );
                is_ok = false;
            }
        }

        is_ok
    }
}

#[derive(Parser, Debug, Clone)]
pub struct Wlda6Args {
    /// Input annotation table (tab-separated)
    pub input: PathBuf,

    /// Verbose logging
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

impl AnnotabParams for Wlda6Args {
    fn debug(&self) -> bool {
        self.debug
    }

    fn validate(&self) -> bool {
        validate_file(&self.input, "<input>")
    }
}

/// Helper function to validate a file's existence and type
fn validate_file(path: &Path, label: &str) -> bool {
    if !path.exists() {
        error!("{} does not exist", label);
        return false;
    }
    if !path.is_file() {
        error!("{} is not a file", label);
        return false;
    }
    true
}
