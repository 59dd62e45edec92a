/// Open command — reads a sealed envelope, prompts for the passphrase,
/// decrypts, and writes the recovered file under its recorded filename.
use std::path::{Path, PathBuf};

use anyhow::Context;
use owo_colors::{OwoColorize, Stream::Stderr, Stream::Stdout};

use crate::crypto;
use crate::error::SealdropError;
use crate::frame::Metadata;
use crate::util::human_size;

/// Resolve the output path for a recovered file.
///
/// The filename in the metadata is attacker-adjacent data (anyone with the
/// passphrase could have sealed the envelope), so only its final path
/// component is used: a recorded name like `../../etc/cron.d/x` must not
/// escape the working directory.
fn output_path(recorded: &str, override_path: Option<PathBuf>) -> PathBuf {
    if let Some(path) = override_path {
        return path;
    }
    Path::new(recorded)
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sealdrop.out"))
}

/// Read the envelope at `envelope_path`, open it with `passphrase`, and
/// write the recovered file. Returns the metadata, the path written, and
/// the recovered size for reporting.
fn open_to_path(
    envelope_path: &Path,
    output_override: Option<PathBuf>,
    force: bool,
    passphrase: &str,
) -> anyhow::Result<(Metadata, PathBuf, u64)> {
    let envelope_bytes = std::fs::read(envelope_path)
        .with_context(|| format!("Failed to read {}", envelope_path.display()))?;

    let (metadata, file_bytes) = crypto::open_envelope(&envelope_bytes, passphrase)?;

    let output = output_path(&metadata.filename, output_override);
    if output.exists() && !force {
        anyhow::bail!(
            "{} already exists. Pass --force to overwrite.",
            output.display()
        );
    }
    std::fs::write(&output, &file_bytes)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    Ok((metadata, output, file_bytes.len() as u64))
}

/// Run the open flow.
pub fn run_open(args: crate::cli::OpenArgs) -> anyhow::Result<()> {
    let passphrase = crate::commands::read_passphrase("Passphrase", false)?;

    let (metadata, output, file_size) =
        match open_to_path(&args.envelope, args.output, args.force, &passphrase) {
            Ok(opened) => opened,
            Err(e) => {
                // The one failure a user can act on: retry with the right passphrase
                if matches!(
                    e.downcast_ref::<SealdropError>(),
                    Some(SealdropError::DecryptionFailed)
                ) {
                    eprintln!(
                        "{}",
                        "Invalid passphrase or corrupted data."
                            .if_supports_color(Stderr, |t| t.red())
                    );
                }
                return Err(e);
            }
        };

    println!("{}", "Opened!".if_supports_color(Stdout, |t| t.green()));
    println!(
        "  {} ({}, {})",
        output.display().if_supports_color(Stdout, |t| t.cyan()),
        metadata.content_type,
        human_size(file_size)
    );
    println!("  Sealed at {}", metadata.created_at);

    Ok(())
}
