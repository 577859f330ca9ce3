//! Request signing for the domain reseller API.
//!
//! Every reseller call carries a one-time request id and a signature over
//! that id keyed with the reseller API key. Both are lowercase hex MD5
//! digests, which is what the reseller verifies on its side.

use chrono::Utc;
use md5::{Digest, Md5};

/// Header carrying the one-time request id
pub const REQUEST_ID_HEADER: &str = "Api-Request-Id";

/// Header carrying the signature over the request id
pub const SIGNATURE_HEADER: &str = "Api-Signature";

/// Header carrying the reseller account id
pub const RESELLER_ID_HEADER: &str = "Reseller-ID";

/// A request id and its signature, valid for exactly one outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    pub request_id: String,
    pub signature: String,
}

impl SignedRequest {
    /// Generates a fresh request id and signs it with `secret`.
    pub fn generate(secret: &str) -> Self {
        let request_id = generate_request_id();
        let signature = generate_signature(&request_id, secret);
        Self {
            request_id,
            signature,
        }
    }
}

/// Generates a request id from the current time and a random value.
///
/// The id is the hex MD5 of `<unix millis><random u64>`, so two ids issued
/// in the same millisecond still differ.
pub fn generate_request_id() -> String {
    let seed = format!("{}{}", Utc::now().timestamp_millis(), rand::random::<u64>());
    hex::encode(Md5::digest(seed.as_bytes()))
}

/// Signs a request id: hex MD5 of `request_id` followed by `secret`.
pub fn generate_signature(request_id: &str, secret: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(request_id.as_bytes());
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}
