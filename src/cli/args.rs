use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "dimprep",
    version,
    about = "Prepare a Sentinel-1 BEAM-DIMAP scene for datacube indexing",
    after_help = "Bulk usage: for file in *.dim; do dimprep $file; done"
)]
pub struct CliArgs {
    /// BEAM-DIMAP header file (.dim) of the scene to describe
    pub input: PathBuf,

    /// Output YAML path (defaults to the header path with a .yaml suffix)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
