/*
[INPUT]:  Return URLs and Wykop Connect callback payloads
[OUTPUT]: Connect links and verified ConnectHandshake entities
[POS]:    Auth layer - app/user linking via Wykop Connect
[UPDATE]: When the connect URL layout or callback payload changes
*/

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use crate::http::{Result, WykopClient, WykopError};
use crate::types::ConnectHandshake;

impl WykopClient {
    /// Build the Wykop Connect URL that lets a user link their account with
    /// the app
    ///
    /// With a return URL the link carries a base64-encoded `redirect` segment
    /// and a `secure` hash over the secret and the return URL.
    pub fn connect_url(&self, return_url: Option<&str>) -> Result<String> {
        let mut url = self
            .base_url()
            .join(&format!("login/connect/appkey/{}", self.app_key()))?
            .to_string();

        if let Some(return_url) = return_url {
            let redirect: String =
                url::form_urlencoded::byte_serialize(BASE64.encode(return_url).as_bytes())
                    .collect();
            url.push_str(&format!(
                "/redirect/{redirect}/secure/{}",
                self.signer().sign_connect_redirect(return_url)
            ));
        }

        Ok(url)
    }

    /// Decode and verify the data Wykop Connect appends to the return URL
    ///
    /// The payload is base64-encoded JSON carrying `appkey`, `login`, `token`
    /// and `sign`. The appkey must match this client's and the signature must
    /// check out against the app secret.
    pub fn parse_connect_data(&self, raw: &str) -> Result<ConnectHandshake> {
        let decoded = BASE64.decode(raw.trim()).map_err(|source| {
            WykopError::InvalidResponse(format!("connect data is not valid base64: {source}"))
        })?;
        let handshake: ConnectHandshake = serde_json::from_slice(&decoded)?;

        for (field, value) in [
            ("appkey", &handshake.appkey),
            ("login", &handshake.login),
            ("token", &handshake.token),
            ("sign", &handshake.sign),
        ] {
            if value.is_empty() {
                return Err(WykopError::InvalidResponse(format!(
                    "connect data is missing `{field}`"
                )));
            }
        }

        if handshake.appkey != self.app_key() {
            return Err(WykopError::InvalidResponse(
                "connect data was issued for a different app key".to_string(),
            ));
        }

        let expected =
            self.signer()
                .sign_connect_data(&handshake.appkey, &handshake.login, &handshake.token);
        if expected != handshake.sign {
            return Err(WykopError::InvalidSignature);
        }

        Ok(handshake)
    }

    /// Adopt the connection key carried by a verified handshake
    pub fn adopt_connect_handshake(&self, handshake: &ConnectHandshake) -> Result<()> {
        self.set_connection_key(&handshake.token)
    }
}
