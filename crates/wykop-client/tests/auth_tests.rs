/*
[INPUT]:  Mock authentication responses
[OUTPUT]: Test results for auth flow
[POS]:    Integration tests - authentication
[UPDATE]: When auth endpoints or flow changes
*/

mod common;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use common::{
    TEST_APP_KEY, login_envelope, notifications_envelope, setup_mock_server, test_client,
    test_credentials,
};
use serde_json::json;
use tokio_test::assert_ok;
use wiremock::matchers::{body_string, method, path};
use wiremock::{Mock, ResponseTemplate};
use wykop_client::{AppCredentials, ClientConfig, WykopClient, WykopError};

#[tokio::test]
async fn test_login_happy_path() {
    let server = setup_mock_server().await;
    let client = test_client(&server);

    Mock::given(method("POST"))
        .and(path("/login/index/appkey/k3y/format/json/output/both"))
        .and(body_string("accountkey=conn&login=bob"))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_envelope("bob", "uk-1")))
        .expect(1)
        .mount(&server)
        .await;

    let profile = assert_ok!(client.login("bob").await);
    assert_eq!(profile.login, "bob");
    assert_eq!(profile.userkey, "uk-1");
    assert_eq!(profile.avatar.as_deref(), Some("https://cdn.wykop.pl/avatar.jpg"));

    assert!(client.session().is_signed_in());
    assert_eq!(client.session().login(), Some("bob".to_string()));
}

#[tokio::test]
async fn test_login_rejected_userkey() {
    let server = setup_mock_server().await;
    let client = test_client(&server);

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": {"code": 14, "message_en": "Invalid user key"},
        })))
        .mount(&server)
        .await;

    let err = client.login("bob").await.unwrap_err();
    assert!(matches!(err, WykopError::InvalidCredentials { code: 14, .. }));
    assert!(err.is_auth_error());
    assert!(!client.session().is_signed_in());
}

#[tokio::test]
async fn test_login_then_notifications() {
    let server = setup_mock_server().await;
    let client = test_client(&server);

    Mock::given(method("POST"))
        .and(path("/login/index/appkey/k3y/format/json/output/both"))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_envelope("bob", "uk-1")))
        .expect(1)
        .mount(&server)
        .await;

    // The userkey obtained at login must show up in the request URL.
    Mock::given(method("POST"))
        .and(path(
            "/notifications/index/appkey/k3y/format/json/output/both/userkey/uk-1",
        ))
        .and(body_string("login=bob"))
        .respond_with(ResponseTemplate::new(200).set_body_json(notifications_envelope()))
        .expect(1)
        .mount(&server)
        .await;

    assert_ok!(client.login("bob").await);
    let notifications = assert_ok!(client.notifications(None).await);
    assert_eq!(notifications.len(), 2);
    assert_eq!(
        notifications.pagination_next(),
        Some("https://a2.wykop.pl/notifications/index/page/2")
    );

    let first = notifications
        .into_iter()
        .next()
        .expect("first notification")
        .expect("first notification maps");
    assert_eq!(first.author.as_ref().unwrap().login, "alice");
    assert_eq!(first.body_as("text"), Some("mentioned you"));
}

#[test]
fn test_login_manually_requires_connection_key() {
    let client = WykopClient::new(AppCredentials::new("k3y", "s3cr3t")).unwrap();

    let err = client.login_manually("bob", "uk-1").unwrap_err();
    assert!(matches!(err, WykopError::State(_)));

    client.set_connection_key("conn").unwrap();
    assert_ok!(client.login_manually("bob", "uk-1"));
    assert!(client.session().is_signed_in());
}

#[tokio::test]
async fn test_connect_handshake_supplies_connection_key() {
    let server = setup_mock_server().await;
    let client = WykopClient::with_config_and_base_url(
        AppCredentials::new(TEST_APP_KEY, "s3cr3t"),
        ClientConfig::default(),
        &server.uri(),
    )
    .unwrap();

    // Simulate the payload Wykop Connect appends to the return URL.
    let signer = wykop_client::RequestSigner::new("s3cr3t").unwrap();
    let sign = signer.sign_connect_data(TEST_APP_KEY, "bob", "tok3n");
    let raw = BASE64.encode(
        serde_json::to_vec(&json!({
            "appkey": TEST_APP_KEY,
            "login": "bob",
            "token": "tok3n",
            "sign": sign,
        }))
        .unwrap(),
    );

    let handshake = assert_ok!(client.parse_connect_data(&raw));
    assert_ok!(client.adopt_connect_handshake(&handshake));

    Mock::given(method("POST"))
        .and(path("/login/index/appkey/k3y/format/json/output/both"))
        .and(body_string("accountkey=tok3n&login=bob"))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_envelope("bob", "uk-1")))
        .expect(1)
        .mount(&server)
        .await;

    let profile = assert_ok!(client.login("bob").await);
    assert_eq!(profile.userkey, "uk-1");
}

#[test]
fn test_connect_url_carries_app_key() {
    let client = WykopClient::new(test_credentials()).unwrap();
    let url = client.connect_url(None).unwrap();
    assert_eq!(url, "https://a2.wykop.pl/login/connect/appkey/k3y");

    let with_redirect = client
        .connect_url(Some("https://example.com/callback"))
        .unwrap();
    assert!(with_redirect.starts_with("https://a2.wykop.pl/login/connect/appkey/k3y/redirect/"));
    assert!(with_redirect.contains("/secure/"));
}
