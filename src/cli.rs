use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sealdrop", version, about = "Seal files with a passphrase for storage on untrusted servers")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt a file into a sealed envelope
    Seal(SealArgs),
    /// Decrypt a sealed envelope back into the original file
    Open(OpenArgs),
}

#[derive(Parser)]
pub struct SealArgs {
    /// Path of the file to seal
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output path (default: <FILE>.sealed)
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// MIME content type recorded in the envelope metadata
    #[arg(long, value_name = "TYPE", default_value = "application/octet-stream")]
    pub content_type: String,
}

#[derive(Parser)]
pub struct OpenArgs {
    /// Path of the sealed envelope
    #[arg(value_name = "ENVELOPE")]
    pub envelope: PathBuf,

    /// Output path (default: the filename recorded in the metadata)
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Overwrite the output file if it already exists
    #[arg(long, short = 'f')]
    pub force: bool,
}
