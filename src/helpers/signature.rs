use hmac::{Hmac, Mac};
use sha2::Sha256;

/// Header carrying the hex HMAC-SHA256 of the raw webhook body.
pub const SIGNATURE_HEADER: &str = "X-Chat-Signature";

pub fn sign(secret: &[u8], body: &[u8]) -> Result<String, String> {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret).map_err(|err| {
        tracing::error!("error generating hmac {err:?}");
        "invalid webhook secret".to_string()
    })?;
    mac.update(body);

    Ok(format!("{:x}", mac.finalize().into_bytes()))
}

/// Checks a hex signature against the body in constant time.
pub fn verify(secret: &[u8], body: &[u8], signature: &str) -> bool {
    let given = match hex::decode(signature.trim()) {
        Ok(given) => given,
        Err(_) => return false,
    };
    let mut mac = match Hmac::<Sha256>::new_from_slice(secret) {
        Ok(mac) => mac,
        Err(_) => return false,
    };
    mac.update(body);

    mac.verify_slice(&given).is_ok()
}
