use crate::config::DeobfuscationConfig;
use crate::escape::EscapeError;
use crate::{escape, noise, xor};

/// Reverses the obfuscation chain: per cycle, strip bracketed noise, parse
/// the `\xHH` tokens and XOR against the leading key byte. The cycle count
/// must match the one the text was encoded with; the two tools do not
/// negotiate it.
pub fn deobfuscate_text(input: &str, config: &DeobfuscationConfig) -> Result<String, EscapeError> {
    let mut output = input.to_string();
    for _ in 0..config.cycles {
        output = decrypt_once(&output, config)?;
    }
    Ok(output)
}

fn decrypt_once(input: &str, config: &DeobfuscationConfig) -> Result<String, EscapeError> {
    let cleaned = noise::strip(input);
    let bytes = escape::decode(&cleaned, config.on_malformed_escape)?;
    Ok(match xor::apply(&bytes) {
        Some(decrypted) => String::from_utf8_lossy(&decrypted).into_owned(),
        // No escape tokens found, so there is nothing to decrypt; the
        // stripped text passes through unchanged.
        None => cleaned,
    })
}
