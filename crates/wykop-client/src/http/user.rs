/*
[INPUT]:  Session state and caller-provided actions
[OUTPUT]: High-level API operations (login, notifications, generic execute)
[POS]:    HTTP layer - user-facing operations
[UPDATE]: When adding new operations or changing the session flow
*/

use crate::http::{ApiResponse, Notifications, Result, WykopClient, WykopError};
use crate::types::{FileAttachment, PostFields, Profile};

impl WykopClient {
    /// Generic call for endpoints without a dedicated method
    ///
    /// POST {action}/appkey/.../format/json/output/...
    pub async fn execute(
        &self,
        action: &str,
        post: PostFields,
        files: Option<Vec<FileAttachment>>,
        page: Option<u32>,
    ) -> Result<ApiResponse> {
        let envelope = self.send(action, &post, files, page).await?;
        ApiResponse::from_envelope(envelope)
    }

    /// Sign in as the given user
    ///
    /// POST login/index with `accountkey` + `login`; stores the returned
    /// userkey as the session. Requires a connection key.
    pub async fn login(&self, login: &str) -> Result<Profile> {
        let Some(connection_key) = self.connection_key() else {
            return Err(WykopError::State("connection key not set".to_string()));
        };
        if login.is_empty() {
            return Err(WykopError::Config("login cannot be empty".to_string()));
        }

        let mut post = PostFields::new();
        post.insert("accountkey".to_string(), connection_key);
        post.insert("login".to_string(), login.to_string());

        let envelope = self.send("login/index", &post, None, None).await?;
        let response = ApiResponse::from_envelope(envelope)?;
        let profile = Profile::from_login_data(response.data())?;
        self.session().sign_in(login, &profile.userkey);
        Ok(profile)
    }

    /// Adopt previously obtained session credentials without a round-trip
    pub fn login_manually(&self, login: &str, userkey: &str) -> Result<()> {
        if self.connection_key().is_none() {
            return Err(WykopError::State("connection key not set".to_string()));
        }
        if login.is_empty() {
            return Err(WykopError::Config("login cannot be empty".to_string()));
        }
        if userkey.is_empty() {
            return Err(WykopError::Config("userkey cannot be empty".to_string()));
        }

        self.session().sign_in(login, userkey);
        Ok(())
    }

    /// Drop the local session
    ///
    /// The service has no call to invalidate a userkey, so this only clears
    /// local state.
    pub fn logout(&self) {
        self.session().clear();
    }

    /// Fetch the user's notifications
    ///
    /// POST notifications/index
    pub async fn notifications(&self, page: Option<u32>) -> Result<Notifications> {
        self.fetch_notifications("notifications/index", page).await
    }

    /// Fetch the user's hashtag notifications
    ///
    /// POST notifications/HashTags
    pub async fn hashtag_notifications(&self, page: Option<u32>) -> Result<Notifications> {
        self.fetch_notifications("notifications/HashTags", page)
            .await
    }

    async fn fetch_notifications(&self, action: &str, page: Option<u32>) -> Result<Notifications> {
        let login = self.ensure_session().await?;

        let mut post = PostFields::new();
        post.insert("login".to_string(), login);

        let envelope = self.send(action, &post, None, page).await?;
        Notifications::from_envelope(envelope)
    }

    /// Require a signed-in session, re-logging in when only the login is known
    async fn ensure_session(&self) -> Result<String> {
        let Some(login) = self.session().login() else {
            return Err(WykopError::State(
                "operation requires a signed-in user".to_string(),
            ));
        };

        if self.session().userkey().is_none() {
            self.login(&login).await?;
        }

        Ok(login)
    }
}
