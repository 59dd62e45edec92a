/// Seal command — reads a file, builds its metadata record, prompts for a
/// passphrase, seals everything into one envelope, and writes it next to the
/// original (or to `-o PATH`).
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{SecondsFormat, Utc};
use owo_colors::{OwoColorize, Stream::Stdout};

use crate::crypto::{self, OsRandom};
use crate::frame::Metadata;
use crate::util::human_size;

/// Read `input`, seal it with `passphrase`, and write the envelope to
/// `output`. Returns (file size, envelope size) for reporting.
fn seal_to_path(
    input: &Path,
    output: &Path,
    content_type: &str,
    passphrase: &str,
) -> anyhow::Result<(u64, u64)> {
    let file_bytes =
        std::fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;

    let filename = input
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("{} has no usable filename", input.display()))?
        .to_string();

    let metadata = Metadata {
        content_type: content_type.to_string(),
        created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        filename,
    };

    let envelope = crypto::seal_file(&file_bytes, &metadata, passphrase, &OsRandom)?;

    std::fs::write(output, &envelope)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    Ok((file_bytes.len() as u64, envelope.len() as u64))
}

/// Default envelope path: the input path with ".sealed" appended.
fn default_output(input: &Path) -> PathBuf {
    let mut path = input.to_path_buf().into_os_string();
    path.push(".sealed");
    path.into()
}

/// Run the seal flow.
pub fn run_seal(args: crate::cli::SealArgs) -> anyhow::Result<()> {
    let passphrase = crate::commands::read_passphrase("Passphrase for this file", true)?;

    let output = args.output.unwrap_or_else(|| default_output(&args.file));
    let (file_size, envelope_size) =
        seal_to_path(&args.file, &output, &args.content_type, &passphrase)?;

    println!("{}", "Sealed!".if_supports_color(Stdout, |t| t.green()));
    println!(
        "  {} ({}) -> {} ({})",
        args.file.display().if_supports_color(Stdout, |t| t.cyan()),
        human_size(file_size),
        output.display().if_supports_color(Stdout, |t| t.cyan()),
        human_size(envelope_size)
    );
    println!("  Share the envelope and the passphrase over separate channels.");

    Ok(())
}
