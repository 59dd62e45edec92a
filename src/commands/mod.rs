pub mod open;
pub mod seal;

use std::io::IsTerminal;

/// Read a passphrase, interactively or from piped stdin.
///
/// On a TTY, prompts with hidden input via dialoguer (with a confirmation
/// round when `confirm` is set, as sealing should never proceed on a typo).
/// When stdin is not a terminal, reads a single line instead so the commands
/// stay scriptable. The interactive prompt rejects an empty passphrase; the
/// protocol itself does not.
pub fn read_passphrase(prompt: &str, confirm: bool) -> anyhow::Result<String> {
    if !std::io::stdin().is_terminal() {
        let mut line = String::new();
        std::io::Read::read_to_string(&mut std::io::stdin(), &mut line)?;
        let passphrase = line.trim_end_matches(['\r', '\n']).to_string();
        if passphrase.is_empty() {
            anyhow::bail!("empty passphrase on stdin");
        }
        return Ok(passphrase);
    }

    let mut password = dialoguer::Password::new().with_prompt(prompt);
    if confirm {
        password = password.with_confirmation("Confirm passphrase", "Passphrases don't match");
    }
    password
        .interact()
        .map_err(|e| anyhow::anyhow!("passphrase prompt failed: {}", e))
}
