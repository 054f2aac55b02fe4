use rand::Rng;

const NOISE_MIN_LEN: usize = 3;
const NOISE_MAX_LEN: usize = 8;
const NOISE_BYTE_LO: u8 = 33;
const NOISE_BYTE_HI: u8 = 126;

/// Removes every bracketed span in a single pass. One boolean of state, no
/// nesting counter: `[` enters the bracketed state (or re-affirms it), `]`
/// exits it, everything else is copied only while outside. An unterminated
/// `[` drops the remainder of the input.
pub fn strip(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut inside_bracket = false;
    for c in text.chars() {
        match c {
            '[' => inside_bracket = true,
            ']' => inside_bracket = false,
            _ if !inside_bracket => output.push(c),
            _ => {}
        }
    }
    output
}

/// Copies `text` and, after each copied character, draws one value in
/// [0,100); if it is below `intensity * 5`, appends one noise token. Returns
/// the expanded text together with the number of tokens emitted, for the
/// caller to fold into its metrics.
pub fn insert<R: Rng>(text: &str, rng: &mut R, intensity: u8) -> (String, u64) {
    let threshold = u32::from(intensity) * 5;
    let mut output = String::with_capacity(text.len());
    let mut inserted = 0u64;
    for c in text.chars() {
        output.push(c);
        if rng.gen_range(0..100u32) < threshold {
            output.push_str(&random_noise(rng));
            inserted += 1;
        }
    }
    (output, inserted)
}

/// One bracket-delimited token of 3-8 random printable-ASCII characters.
fn random_noise<R: Rng>(rng: &mut R) -> String {
    let len = rng.gen_range(NOISE_MIN_LEN..=NOISE_MAX_LEN);
    let mut noise = String::with_capacity(len + 2);
    noise.push('[');
    for _ in 0..len {
        noise.push(char::from(rng.gen_range(NOISE_BYTE_LO..=NOISE_BYTE_HI)));
    }
    noise.push(']');
    noise
}
