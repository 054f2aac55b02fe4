use rand::Rng;

use crate::escape;

/// Single-byte-key XOR. `bytes[0]` is the key; every later byte is XORed
/// against it. The key itself is never part of the output. `None` on empty
/// input: nothing to decrypt, the caller passes its text through unchanged.
pub fn apply(bytes: &[u8]) -> Option<Vec<u8>> {
    let (&key, payload) = bytes.split_first()?;
    Some(payload.iter().map(|&b| b ^ key).collect())
}

/// XORs every byte of `text` against `key` and serializes the key followed by
/// the ciphertext through the escape codec.
pub fn encrypt_with_key(text: &str, key: u8) -> String {
    let mut bytes = Vec::with_capacity(text.len() + 1);
    bytes.push(key);
    bytes.extend(text.bytes().map(|b| b ^ key));
    escape::encode(&bytes)
}

/// Draws a key in [1,255] and encrypts. Key 0 would make the ciphertext equal
/// the plaintext, so it is excluded from the draw.
pub fn encrypt_with_random_key<R: Rng>(text: &str, rng: &mut R) -> String {
    encrypt_with_key(text, rng.gen_range(1..=255u8))
}
