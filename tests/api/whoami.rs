use crate::helpers::{
    get_json_response_body, get_random_email, get_session, login,
    FailingSessionStore, TestApp, SESSION_BACKEND_ERROR,
};
use axum_extra::extract::cookie::Key;
use http_rest_api::{
    services::data_stores::{CookieSessionStore, HashmapUserStore},
    utils::constants::SESSION_COOKIE_NAME,
    ErrorResponse,
};
use serde_json::json;
use std::sync::Arc;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_401_without_session(app: &mut TestApp) {
    let response = app.get_whoami().await;
    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(
        response
            .json::<ErrorResponse>()
            .await
            .expect("Could not deserialise response body to ErrorResponse")
            .error,
        "not authenticated".to_owned()
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_200_with_logged_in_user(app: &mut TestApp) {
    let (id, email) = get_session(app).await;

    let response = app.get_whoami().await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        get_json_response_body(response).await,
        json!({"id": id, "email": email})
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_switch_user_on_new_login(app: &mut TestApp) {
    let (_, _first_email) = get_session(app).await;
    let (second_id, second_email) = get_session(app).await;

    let response = app.get_whoami().await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        get_json_response_body(response).await,
        json!({"id": second_id, "email": second_email})
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_401_if_session_cookie_tampered(app: &mut TestApp) {
    let _ = get_session(app).await;

    let test_cases = [
        format!("{SESSION_COOKIE_NAME}=garbage"),
        format!("{SESSION_COOKIE_NAME}="),
        "other=value".to_owned(),
    ];

    for cookie in test_cases {
        let response = app.get_whoami_with_cookie(&cookie).await;
        assert_eq!(
            response.status().as_u16(),
            401,
            "Should fail with HTTP401 for cookie: {cookie}"
        );
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_not_authenticate_after_failed_login(app: &mut TestApp) {
    let email = get_random_email();
    crate::helpers::create_user(app, &email, "password").await;

    let response = app
        .post_sessions(&json!({"email": email, "password": "wrong-password"}))
        .await;
    assert_eq!(response.status().as_u16(), 401);

    assert_eq!(app.get_whoami().await.status().as_u16(), 401);

    login(app, &email, "password").await;
    assert_eq!(app.get_whoami().await.status().as_u16(), 200);
}

// Walks through registration, login and whoami with fixed credentials.
#[test_context(TestApp)]
#[tokio::test]
async fn should_register_login_and_identify_user(app: &mut TestApp) {
    let credentials = json!({
        "email": "user@example.org",
        "password": "password"
    });

    let response = app.post_users(&credentials).await;
    assert_eq!(response.status().as_u16(), 201);
    let body = get_json_response_body(response).await;
    assert_eq!(body["email"], "user@example.org");
    assert!(body.get("password").is_none());
    let id = body["id"].as_i64().expect("No id in response");

    let response = app.post_sessions(&credentials).await;
    assert_eq!(response.status().as_u16(), 200);
    assert!(response
        .cookies()
        .any(|cookie| cookie.name() == SESSION_COOKIE_NAME));

    let response = app.get_whoami().await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        get_json_response_body(response).await,
        json!({"id": id, "email": "user@example.org"})
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_401_if_session_user_no_longer_exists(app: &mut TestApp) {
    let _ = get_session(app).await;
    let cookie = app.session_cookie().expect("No session cookie stored");

    let response = app.get_whoami_with_cookie(&cookie).await;
    assert_eq!(response.status().as_u16(), 200);

    // Same key, so the cookie decrypts, but the user table is empty.
    let other_app = TestApp::with_stores(
        Arc::new(HashmapUserStore::default()),
        Arc::new(CookieSessionStore::default()),
        app.session_key.clone(),
    )
    .await;

    let response = other_app.get_whoami_with_cookie(&cookie).await;
    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(
        response
            .json::<ErrorResponse>()
            .await
            .expect("Could not deserialise response body to ErrorResponse")
            .error,
        "not authenticated".to_owned()
    );
}

#[tokio::test]
async fn should_return_500_if_session_store_fails() {
    let app = TestApp::with_stores(
        Arc::new(HashmapUserStore::default()),
        Arc::new(FailingSessionStore),
        Key::generate(),
    )
    .await;

    let response = app.get_whoami().await;
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
