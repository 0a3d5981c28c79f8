//! Integration tests for the login flow.

mod common;

use ims_core::error::ErrorKind;
use ims_core::traits::storage::LocalStorage;
use ims_core::types::NoticeLevel;
use ims_entity::user::Role;

#[tokio::test]
async fn test_admin_lands_on_dashboard() {
    let app = common::TestApp::new().await;
    let outcome = app.ctx.login.login("admin@ims.io", "secret").await.unwrap();

    assert_eq!(outcome.landing, "/dashboard");
    assert!(app.ctx.session.is_authenticated());
    assert_eq!(app.ctx.session.current_role(), Some(Role::Admin));
    assert_eq!(app.ctx.session.token().as_deref(), Some(common::ADMIN_TOKEN));
}

#[tokio::test]
async fn test_manager_lands_on_profile() {
    let app = common::TestApp::new().await;
    let outcome = app.ctx.login.login(" manager@ims.io ", "secret").await.unwrap();
    assert_eq!(outcome.landing, "/profile");
    assert_eq!(outcome.role, "MANAGER");
}

#[tokio::test]
async fn test_credentials_are_not_stored_in_plaintext() {
    let app = common::TestApp::new().await;
    app.login_admin().await;

    let raw_token = app.ctx.storage.get_item("token").unwrap().unwrap();
    let raw_role = app.ctx.storage.get_item("role").unwrap().unwrap();
    assert_ne!(raw_token, common::ADMIN_TOKEN);
    assert_ne!(raw_role, "ADMIN");
}

#[tokio::test]
async fn test_empty_fields_are_rejected_locally() {
    let app = common::TestApp::new().await;
    let err = app.ctx.login.login("", "secret").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    assert_eq!(err.message, "All fields are required");

    let notice = app.ctx.notices.current().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "All fields are required");
    assert!(!app.ctx.session.is_authenticated());
}

#[tokio::test]
async fn test_wrong_password_shows_server_message() {
    let app = common::TestApp::new().await;
    let err = app.ctx.login.login("admin@ims.io", "nope").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Remote);
    assert_eq!(app.ctx.notices.current().unwrap().message, "Password Does Not Match");
    assert!(!app.ctx.session.is_authenticated());
}

#[tokio::test]
async fn test_response_without_token_is_invalid() {
    let app = common::TestApp::new().await;
    let err = app
        .ctx
        .login
        .login("tokenless@ims.io", "secret")
        .await
        .unwrap_err();
    assert_eq!(err.message, "Invalid response from server.");
    assert!(!app.ctx.session.is_authenticated());
}

#[tokio::test]
async fn test_logout_twice() {
    let app = common::TestApp::new().await;
    app.login_admin().await;

    app.ctx.login.logout().unwrap();
    assert!(!app.ctx.session.is_authenticated());
    app.ctx.login.logout().unwrap();
    assert!(!app.ctx.session.is_authenticated());
    assert_eq!(app.ctx.session.current_role(), None);
}
