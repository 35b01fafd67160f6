//! Session Token Signing
//!
//! The cookie carries `<session_id>.<signature>`: a UUID plus an
//! HMAC-SHA256 signature over its string form, base64url encoded. The
//! token is opaque to the client; a forged or truncated token fails
//! verification before the store is ever consulted.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// Issue a signed session token for a session ID
pub fn issue(secret: &[u8; 32], session_id: Uuid) -> String {
    let session_id = session_id.to_string();

    let mut mac =
        HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(session_id.as_bytes());
    let signature = mac.finalize().into_bytes();

    format!("{}.{}", session_id, URL_SAFE_NO_PAD.encode(signature))
}

/// Verify a session token and extract the session ID
///
/// Returns `None` for any malformed, tampered, or re-signed token.
pub fn verify(secret: &[u8; 32], token: &str) -> Option<Uuid> {
    let (session_id_str, signature_b64) = token.split_once('.')?;
    if signature_b64.contains('.') {
        return None;
    }

    let mut mac =
        HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(session_id_str.as_bytes());

    let signature = URL_SAFE_NO_PAD.decode(signature_b64).ok()?;
    mac.verify_slice(&signature).ok()?;

    session_id_str.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: [u8; 32] = [7u8; 32];

    #[test]
    fn test_issue_verify_roundtrip() {
        let session_id = Uuid::new_v4();
        let token = issue(&SECRET, session_id);
        assert_eq!(verify(&SECRET, &token), Some(session_id));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let token = issue(&SECRET, Uuid::new_v4());
        let mut tampered = token.clone();
        tampered.pop();
        assert_eq!(verify(&SECRET, &tampered), None);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = issue(&SECRET, Uuid::new_v4());
        let other_secret = [8u8; 32];
        assert_eq!(verify(&other_secret, &token), None);
    }

    #[test]
    fn test_malformed_token_rejected() {
        assert_eq!(verify(&SECRET, ""), None);
        assert_eq!(verify(&SECRET, "no-dot-here"), None);
        assert_eq!(verify(&SECRET, "a.b.c"), None);
        assert_eq!(verify(&SECRET, "not-a-uuid.c2ln"), None);
    }
}
