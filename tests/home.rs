mod common;

use common::{get_raw, TestContext};

#[tokio::test]
async fn index_serves_the_profile_form() {
    let ctx = TestContext::new().await;

    let (status, body) = get_raw(&ctx.app, "/").await;

    assert_eq!(status, 200);
    assert!(body.contains("Add a Profile"));
    assert!(body.contains(r#"<form action="/submit" method="POST">"#));
    assert!(body.contains(r#"name="name""#));
    assert!(body.contains(r#"name="age""#));
    assert!(body.contains(r#"name="profession""#));
}

#[tokio::test]
async fn index_is_served_even_when_storage_is_down() {
    let ctx = TestContext::new().await;
    ctx.drop_storage().await;

    let (status, body) = get_raw(&ctx.app, "/").await;

    assert_eq!(status, 200);
    assert!(body.contains("Add a Profile"));
}
