//! Integration tests for guarded navigation after a real login.

mod common;

use ims_auth::guard::GuardDecision;
use ims_core::traits::storage::LocalStorage;

#[tokio::test]
async fn test_anonymous_navigation_redirects_to_login() {
    let app = common::TestApp::new().await;
    let nav = app.ctx.navigator.navigate("/product?page=2").unwrap();
    assert_eq!(
        nav.decision,
        GuardDecision::RedirectToLogin {
            return_url: "/product?page=2".into()
        }
    );
    assert_eq!(nav.target, "/login?returnUrl=%2Fproduct%3Fpage%3D2");
}

#[tokio::test]
async fn test_manager_reaches_allow_list_only() {
    let app = common::TestApp::new().await;
    app.login_manager().await;

    for url in ["/transactions", "/purchase", "/sell", "/profile", "/dashboard"] {
        let nav = app.ctx.navigator.navigate(url).unwrap();
        assert!(nav.decision.is_allowed(), "{url} should be allowed");
    }
    for url in ["/category", "/supplier", "/product", "/add-product", "/edit-product/5"] {
        let nav = app.ctx.navigator.navigate(url).unwrap();
        assert_eq!(nav.decision, GuardDecision::RedirectToForbidden, "{url}");
        assert_eq!(nav.target, "/forbidden");
    }
}

#[tokio::test]
async fn test_admin_reaches_everything() {
    let app = common::TestApp::new().await;
    app.login_admin().await;
    for url in ["/category", "/supplier", "/product", "/edit-supplier/3", "/transactions"] {
        assert!(app.ctx.navigator.navigate(url).unwrap().decision.is_allowed());
    }
}

#[tokio::test]
async fn test_logout_revokes_access_immediately() {
    let app = common::TestApp::new().await;
    app.login_admin().await;
    assert!(app.ctx.navigator.navigate("/category").unwrap().decision.is_allowed());

    app.ctx.login.logout().unwrap();
    let nav = app.ctx.navigator.navigate("/category").unwrap();
    assert!(matches!(nav.decision, GuardDecision::RedirectToLogin { .. }));
}

#[tokio::test]
async fn test_corrupted_token_is_treated_as_absent() {
    let app = common::TestApp::new().await;
    app.login_admin().await;
    app.ctx.storage.set_item("token", "not-a-ciphertext").unwrap();

    assert!(!app.ctx.session.is_authenticated());
    let nav = app.ctx.navigator.navigate("/dashboard").unwrap();
    assert!(matches!(nav.decision, GuardDecision::RedirectToLogin { .. }));
}
