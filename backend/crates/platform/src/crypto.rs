//! Cryptographic Utilities

use base64::{Engine, engine::general_purpose};
use hmac::{Hmac, Mac};
use rand::{Rng, rngs::OsRng};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Alphabet for human-facing opaque tokens.
///
/// Omits `0 O 1 I l o` so a token read aloud or copied by hand survives.
pub const UNAMBIGUOUS_ALPHABET: &[u8] =
    b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnpqrstuvwxyz23456789";

/// Random token of `len` characters drawn uniformly from [`UNAMBIGUOUS_ALPHABET`]
pub fn random_token(len: usize) -> String {
    (0..len)
        .map(|_| UNAMBIGUOUS_ALPHABET[OsRng.gen_range(0..UNAMBIGUOUS_ALPHABET.len())] as char)
        .collect()
}

fn mac_for(secret: &[u8], value: &str) -> HmacSha256 {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(value.as_bytes());
    mac
}

/// Sign a cookie value: `value.base64url(hmac_sha256(secret, value))`
pub fn sign_value(secret: &[u8], value: &str) -> String {
    let signature = mac_for(secret, value).finalize().into_bytes();
    format!(
        "{}.{}",
        value,
        general_purpose::URL_SAFE_NO_PAD.encode(signature)
    )
}

/// Verify a value produced by [`sign_value`] and return the inner value.
///
/// The signature is split at the last `.`, so the inner value may itself
/// contain dots. Comparison is constant-time.
pub fn unsign_value<'a>(secret: &[u8], signed: &'a str) -> Option<&'a str> {
    let (value, signature_b64) = signed.rsplit_once('.')?;
    let signature = general_purpose::URL_SAFE_NO_PAD
        .decode(signature_b64)
        .ok()?;

    mac_for(secret, value).verify_slice(&signature).ok()?;
    Some(value)
}
