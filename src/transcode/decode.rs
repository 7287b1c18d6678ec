//! URL-safe base64 decoding with padding normalization.
//!
//! Upstreams frequently strip the trailing `=` padding, so it is re-appended
//! before decoding with a strict (padding-required) engine. Line breaks are
//! skipped wherever they appear; any other whitespace is invalid input. The
//! decoded document is returned as raw bytes: names in legacy encodings such
//! as GBK pass through untouched.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;

/// URL-safe alphabet, canonical padding required, non-zero trailing bits
/// tolerated the way lenient decoders accept them.
const URL_SAFE_PADDED: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical)
        .with_decode_allow_trailing_bits(true),
);

/// How many `=` characters to append before decoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaddingMode {
    /// `(4 - len % 4) % 4`: aligned input receives no padding.
    #[default]
    Aligned,
    /// `4 - len % 4`: aligned input receives `====` and then fails to decode.
    /// Kept for byte-exact compatibility with older deployments.
    Legacy,
}

impl PaddingMode {
    pub fn padding_for(self, len: usize) -> usize {
        match self {
            PaddingMode::Aligned => (4 - len % 4) % 4,
            PaddingMode::Legacy => 4 - len % 4,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("failed to decode subscription: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Decode a raw subscription body into the document bytes.
pub fn decode(raw: &[u8], mode: PaddingMode) -> Result<Vec<u8>, DecodeError> {
    let mut padded: Vec<u8> = raw
        .iter()
        .copied()
        .filter(|b| !matches!(b, b'\r' | b'\n'))
        .collect();

    let pad = mode.padding_for(padded.len());
    padded.resize(padded.len() + pad, b'=');

    Ok(URL_SAFE_PADDED.decode(&padded)?)
}
