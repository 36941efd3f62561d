//! Random session key generation.

use base64::Engine as _;
use rand::RngCore;

/// Random bytes per key before encoding.
const SESSION_KEY_BYTES: usize = 32;

/// Generates an opaque session key.
///
/// 32 bytes from the thread-local CSPRNG, URL-safe base64 without padding
/// (43 characters), safe to place in a cookie value.
pub fn generate_session_key() -> String {
    let mut buffer = [0u8; SESSION_KEY_BYTES];
    rand::rng().fill_bytes(&mut buffer);

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}
