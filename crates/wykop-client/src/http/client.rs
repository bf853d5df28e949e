/*
[INPUT]:  HTTP configuration (base URL, timeouts, app credentials)
[OUTPUT]: Configured reqwest client with signing and envelope handling
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::sync::RwLock;
use std::time::Duration;

use reqwest::{Client, StatusCode, multipart};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::auth::Session;
use crate::http::{RequestSigner, Result, WykopError};
use crate::types::{FileAttachment, HtmlOutput, PostFields, ResponseFormat};

/// Base URL of the Wykop API v2 endpoint
const ENDPOINT_BASE_URL: &str = "https://a2.wykop.pl/";

const DEFAULT_USER_AGENT: &str = "Application based on the wykop-client library";

/// Error code the service reports for a rejected userkey
const INVALID_USERKEY_ERROR_CODE: i64 = 14;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
    pub format: ResponseFormat,
    pub html_output: HtmlOutput,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(15),
            connect_timeout: Duration::from_secs(15),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            format: ResponseFormat::default(),
            html_output: HtmlOutput::default(),
        }
    }
}

/// Application credentials issued on Wykop's developer page
#[derive(Debug, Clone)]
pub struct AppCredentials {
    /// App key ("Klucz" column)
    pub app_key: String,
    /// App secret ("Sekret" column)
    pub secret: String,
    /// Connection key between the user and the app ("Połączenie" column)
    pub connection_key: Option<String>,
}

impl AppCredentials {
    pub fn new(app_key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            app_key: app_key.into(),
            secret: secret.into(),
            connection_key: None,
        }
    }

    pub fn with_connection_key(mut self, connection_key: impl Into<String>) -> Self {
        self.connection_key = Some(connection_key.into());
        self
    }
}

/// Main HTTP client for the Wykop API
#[derive(Debug)]
pub struct WykopClient {
    http_client: Client,
    base_url: Url,
    app_key: String,
    signer: RequestSigner,
    format: ResponseFormat,
    html_output: HtmlOutput,
    connection_key: RwLock<Option<String>>,
    session: Session,
    last_response: RwLock<Option<String>>,
}

impl WykopClient {
    /// Create a new client with default configuration
    pub fn new(credentials: AppCredentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: AppCredentials, config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(credentials, config, ENDPOINT_BASE_URL)
    }

    /// Create a new client against a custom endpoint base URL
    pub fn with_config_and_base_url(
        credentials: AppCredentials,
        config: ClientConfig,
        base_url: &str,
    ) -> Result<Self> {
        if credentials.app_key.is_empty() {
            return Err(WykopError::Config("missing app key".to_string()));
        }
        let signer = RequestSigner::new(credentials.secret)?;

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            app_key: credentials.app_key,
            signer,
            format: config.format,
            html_output: config.html_output,
            connection_key: RwLock::new(credentials.connection_key.filter(|key| !key.is_empty())),
            session: Session::new(),
            last_response: RwLock::new(None),
        })
    }

    /// App key used for requests
    pub fn app_key(&self) -> &str {
        &self.app_key
    }

    /// User session state (login and userkey)
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Connection key between the user and the app, if set
    pub fn connection_key(&self) -> Option<String> {
        self.connection_key.read().unwrap().clone()
    }

    /// Set the connection key between the user and the app
    pub fn set_connection_key(&self, connection_key: &str) -> Result<()> {
        if connection_key.is_empty() {
            return Err(WykopError::Config(
                "connection key must be a non-empty string".to_string(),
            ));
        }
        *self.connection_key.write().unwrap() = Some(connection_key.to_string());
        Ok(())
    }

    /// Last raw response body received from the service
    pub fn last_response(&self) -> Option<String> {
        self.last_response.read().unwrap().clone()
    }

    pub(crate) fn signer(&self) -> &RequestSigner {
        &self.signer
    }

    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the full URL for an action
    ///
    /// Layout: `{base}{action}{sep}appkey/{key}/format/{format}/output/{output}`
    /// plus `/userkey/{userkey}` when a session is active and `/page/{n}` when
    /// paginating. Wykop's inline named-parameter style ("entries/index/id,123")
    /// keeps appending with commas instead of opening a new path segment.
    pub(crate) fn action_url(&self, action: &str, page: Option<u32>) -> Result<Url> {
        if action.is_empty() {
            return Err(WykopError::Config("missing action".to_string()));
        }

        let sep = if action.contains(',') { ',' } else { '/' };
        let mut path = format!(
            "{action}{sep}appkey/{}/format/{}/output/{}",
            self.app_key,
            self.format.as_str(),
            self.html_output.as_str()
        );
        if let Some(userkey) = self.session.userkey() {
            path.push_str(&format!("/userkey/{userkey}"));
        }
        if let Some(page) = page {
            path.push_str(&format!("/page/{page}"));
        }

        Ok(self.base_url.join(&path)?)
    }

    /// Sign and dispatch an API call, returning the decoded envelope
    ///
    /// Every call is a POST; the `apisign` header covers the URL and the text
    /// fields. File attachments switch the body to multipart and are excluded
    /// from the signature.
    pub(crate) async fn send(
        &self,
        action: &str,
        post: &PostFields,
        files: Option<Vec<FileAttachment>>,
        page: Option<u32>,
    ) -> Result<Value> {
        let url = self.action_url(action, page)?;
        let apisign = self.signer.sign_request(url.as_str(), post);
        debug!(action, url = %url, "dispatching api request");

        let builder = self.http_client.post(url).header("apisign", apisign);
        let builder = match files {
            Some(files) if !files.is_empty() => {
                let mut form = multipart::Form::new();
                for (field, value) in post {
                    form = form.text(field.clone(), value.clone());
                }
                for file in files {
                    let part = multipart::Part::bytes(file.bytes)
                        .file_name(file.file_name)
                        .mime_str(&file.mime)?;
                    form = form.part(file.field, part);
                }
                builder.multipart(form)
            }
            _ => builder.form(post),
        };

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        *self.last_response.write().unwrap() = Some(body.clone());

        if status == StatusCode::UNAUTHORIZED {
            return Err(WykopError::InvalidCredentials {
                code: status.as_u16() as i32,
                message: "service rejected the request credentials".to_string(),
            });
        }
        if !status.is_success() {
            return Err(WykopError::Api {
                code: status.as_u16() as i32,
                message: format!("unexpected http status {status}"),
            });
        }
        if body.is_empty() {
            return Err(WykopError::EmptyResponse);
        }

        let envelope: Value = serde_json::from_str(&body)?;
        check_envelope_error(&envelope)?;
        Ok(envelope)
    }
}

/// Map an `error` object in the envelope to a crate error
///
/// Error code 14 means the userkey was rejected and is surfaced as a
/// credentials failure so callers can re-authenticate.
fn check_envelope_error(envelope: &Value) -> Result<()> {
    let Some(error) = envelope.get("error").filter(|error| !error.is_null()) else {
        return Ok(());
    };

    let code = error.get("code").and_then(Value::as_i64).unwrap_or(0);
    let message = error
        .get("message_en")
        .or_else(|| error.get("message_pl"))
        .and_then(Value::as_str)
        .unwrap_or("unknown api error")
        .to_string();

    if code == INVALID_USERKEY_ERROR_CODE {
        Err(WykopError::InvalidCredentials {
            code: code as i32,
            message,
        })
    } else {
        Err(WykopError::Api {
            code: code as i32,
            message,
        })
    }
}
