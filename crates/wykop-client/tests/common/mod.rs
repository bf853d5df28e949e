/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for wykop-client tests

use serde_json::json;
use wiremock::MockServer;
use wykop_client::{AppCredentials, ClientConfig, WykopClient};

pub const TEST_APP_KEY: &str = "k3y";
pub const TEST_APP_SECRET: &str = "s3cr3t";
pub const TEST_CONNECTION_KEY: &str = "conn";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// App credentials used across tests
pub fn test_credentials() -> AppCredentials {
    AppCredentials::new(TEST_APP_KEY, TEST_APP_SECRET).with_connection_key(TEST_CONNECTION_KEY)
}

/// Client wired against the given mock server
pub fn test_client(server: &MockServer) -> WykopClient {
    WykopClient::with_config_and_base_url(test_credentials(), ClientConfig::default(), &server.uri())
        .expect("client init")
}

/// Envelope returned by login/index
#[allow(dead_code)]
pub fn login_envelope(login: &str, userkey: &str) -> serde_json::Value {
    json!({
        "data": {
            "userkey": userkey,
            "profile": {
                "login": login,
                "color": 2,
                "avatar": "https://cdn.wykop.pl/avatar.jpg",
                "sex": "male",
                "signup_at": "2012-05-01 08:00:00",
                "rank": 100,
            },
        },
    })
}

/// Envelope returned by notifications/index
#[allow(dead_code)]
pub fn notifications_envelope() -> serde_json::Value {
    json!({
        "data": [
            {
                "id": 1,
                "author": {"login": "alice", "color": 5},
                "date": "2019-10-01 12:30:00",
                "body": {"text": "mentioned you"},
                "type": "entry_comment_directed",
                "item_id": 4567,
                "url": "https://www.wykop.pl/wpis/4567/",
                "new": true,
            },
            {
                "id": 2,
                "type": "observe",
                "new": false,
            },
        ],
        "pagination": {
            "next": "https://a2.wykop.pl/notifications/index/page/2",
            "prev": "",
        },
    })
}
