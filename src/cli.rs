use clap::Parser;
use std::path::PathBuf;

use crate::writer::elm::{DEFAULT_FILE_NAME, DEFAULT_MODULE};

#[derive(Parser, Debug)]
#[command(author, version, about = "Convert a Tiled JSON level into an Elm levels module")]
pub struct Cli {
    /// Input Tiled .json level
    pub input: PathBuf,
    /// Output directory
    pub output: PathBuf,
    /// Name of the generated file inside the output directory
    #[arg(long, default_value = DEFAULT_FILE_NAME)]
    pub file_name: String,
    /// Elm module name written in the header
    #[arg(long, default_value = DEFAULT_MODULE)]
    pub module: String,
    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
