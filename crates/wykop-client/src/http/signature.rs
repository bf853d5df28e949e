/*
[INPUT]:  App secret, request URL and sorted POST fields
[OUTPUT]: Signed request header value (apisign)
[POS]:    HTTP layer - request signing for API calls
[UPDATE]: When changing signing algorithm or header format
*/

use std::collections::BTreeMap;

use md5::{Digest, Md5};

use crate::http::{Result, WykopError};

/// Signs HTTP requests with the MD5-based `apisign` scheme of Wykop API v2
#[derive(Debug, Clone)]
pub struct RequestSigner {
    secret: String,
}

impl RequestSigner {
    /// Create a new request signer with the given app secret
    pub fn new(secret: impl Into<String>) -> Result<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(WykopError::Config("missing app secret".to_string()));
        }
        Ok(Self { secret })
    }

    /// Sign a request according to the Wykop API v2 specification
    ///
    /// Digest input: `{secret}{url}{values}` where `values` are the POST
    /// field values sorted by field key and joined with `,` (empty for a
    /// request without a body). Returns the lowercase hex digest.
    pub fn sign_request(&self, url: &str, post: &BTreeMap<String, String>) -> String {
        let mut hasher = Md5::new();
        hasher.update(self.secret.as_bytes());
        hasher.update(url.as_bytes());
        if !post.is_empty() {
            let values: Vec<&str> = post.values().map(String::as_str).collect();
            hasher.update(values.join(",").as_bytes());
        }
        hex::encode(hasher.finalize())
    }

    /// Sign a Wykop Connect redirect URL
    ///
    /// Digest input: `{secret}{return_url}`.
    pub fn sign_connect_redirect(&self, return_url: &str) -> String {
        let mut hasher = Md5::new();
        hasher.update(self.secret.as_bytes());
        hasher.update(return_url.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Compute the expected signature of a Wykop Connect callback payload
    ///
    /// Digest input: `{secret}{appkey}{login}{token}`.
    pub fn sign_connect_data(&self, appkey: &str, login: &str, token: &str) -> String {
        let mut hasher = Md5::new();
        hasher.update(self.secret.as_bytes());
        hasher.update(appkey.as_bytes());
        hasher.update(login.as_bytes());
        hasher.update(token.as_bytes());
        hex::encode(hasher.finalize())
    }
}
