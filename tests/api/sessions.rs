use crate::helpers::{
    create_user, get_random_email, FailingSessionStore, TestApp,
    SESSION_BACKEND_ERROR,
};
use axum_extra::extract::cookie::Key;
use http_rest_api::{
    services::data_stores::HashmapUserStore,
    utils::constants::SESSION_COOKIE_NAME, ErrorResponse,
};
use serde_json::json;
use std::sync::Arc;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_200_and_set_cookie_if_valid_credentials(
    app: &mut TestApp,
) {
    let email = get_random_email();
    create_user(app, &email, "password").await;

    let response = app
        .post_sessions(&json!({
            "email": email,
            "password": "password"
        }))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let session_cookie = response
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
        .expect("No session cookie found");
    assert!(!session_cookie.value().is_empty());
    assert!(session_cookie.http_only());
    assert_eq!(session_cookie.path(), Some("/"));

    let body = response.text().await.expect("Failed to read body");
    assert!(body.is_empty(), "Expected no body, got: {body}");
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_401_if_credentials_incorrect(app: &mut TestApp) {
    let email = get_random_email();
    let password = "abcd1234";
    create_user(app, &email, password).await;

    let login_data = [
        json!({
            "email": get_random_email(),
            "password": password
        }),
        json!({
            "email": email,
            "password": "incorrect"
        }),
        json!({
            "email": email,
            "password": ""
        }),
        json!({
            "email": email
        }),
    ];

    for invalid_login in login_data {
        let response = app.post_sessions(&invalid_login).await;
        assert_eq!(
            response.status().as_u16(),
            401,
            "Should fail with HTTP401 for input: {}",
            invalid_login
        );
        assert!(
            response
                .cookies()
                .all(|cookie| cookie.name() != SESSION_COOKIE_NAME),
            "No session cookie should be set"
        );
        assert_eq!(
            response
                .json::<ErrorResponse>()
                .await
                .expect("Could not deserialise response body to ErrorResponse")
                .error,
            "incorrect email or password".to_owned()
        );
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_if_malformed_json(app: &mut TestApp) {
    let test_cases = ["{", r#"{"email": true, "password": "password"}"#];

    for test_case in test_cases {
        let response = app.post_sessions_raw(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Should fail with HTTP400 for input: {}",
            test_case
        );
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_accept_json_without_content_type(app: &mut TestApp) {
    let email = get_random_email();
    create_user(app, &email, "password").await;

    let response = app
        .http_client
        .post(format!("{}/sessions", &app.address))
        .body(json!({"email": email, "password": "password"}).to_string())
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    assert!(response
        .cookies()
        .any(|cookie| cookie.name() == SESSION_COOKIE_NAME));
}

#[tokio::test]
async fn should_return_500_if_session_store_fails() {
    let app = TestApp::with_stores(
        Arc::new(HashmapUserStore::default()),
        Arc::new(FailingSessionStore),
        Key::generate(),
    )
    .await;
    let email = get_random_email();
    create_user(&app, &email, "password").await;

    let response = app
        .post_sessions(&json!({"email": email, "password": "password"}))
        .await;
    assert_eq!(response.status().as_u16(), 500);
    assert_eq!(
        response
            .json::<ErrorResponse>()
            .await
            .expect("Could not deserialise response body to ErrorResponse")
            .error,
        SESSION_BACKEND_ERROR.to_owned()
    );
}
