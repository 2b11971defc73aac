//! Best-effort query recovery from the opaque `pvq`/`lqi` search blob.
//!
//! The blob is a base64-wrapped binary serialization with no published
//! schema. Rather than parse it, we pull out the printable ASCII runs and
//! keep the longest one that does not look like an internal token or a URL.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;

const MIN_RUN_LEN: usize = 3;
const EXCLUDED_PREFIXES: [&str; 2] = ["/g/", "http"];

/// Accepts unpadded input and non-zero trailing bits.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode a search blob into its most likely human query.
///
/// Returns `None` when the blob does not decode or holds no qualifying
/// printable run. Ties on length go to the earliest run.
#[must_use]
pub fn decode_search_blob(blob: &str) -> Option<String> {
    let bytes = lenient_base64_decode(blob)?;
    longest_printable_run(&bytes)
}

fn lenient_base64_decode(blob: &str) -> Option<Vec<u8>> {
    let mut normalised: String = blob
        .chars()
        .filter_map(|c| match c {
            '-' => Some('+'),
            '_' => Some('/'),
            c if c.is_ascii_alphanumeric() || c == '+' || c == '/' => Some(c),
            _ => None,
        })
        .collect();

    // A single dangling sextet cannot encode a byte.
    if normalised.len() % 4 == 1 {
        normalised.pop();
    }
    if normalised.is_empty() {
        return None;
    }

    LENIENT_BASE64.decode(normalised.as_bytes()).ok()
}

/// Scans `bytes` as Latin-1 text for maximal runs of `[\x20-\x7E]`.
fn longest_printable_run(bytes: &[u8]) -> Option<String> {
    let mut best: Option<&[u8]> = None;

    for run in bytes.split(|b| !(0x20..=0x7E).contains(b)) {
        if run.len() < MIN_RUN_LEN {
            continue;
        }
        if EXCLUDED_PREFIXES
            .iter()
            .any(|prefix| run.starts_with(prefix.as_bytes()))
        {
            continue;
        }
        if best.is_none_or(|b| run.len() > b.len()) {
            best = Some(run);
        }
    }

    best.map(|run| String::from_utf8_lossy(run).into_owned())
}
