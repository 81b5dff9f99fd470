use account_client::password_reset::MSG_PASSWORD_RESET;
use axum::http::StatusCode;

use crate::tests::types::{unreachable_url, TestAccountApi, TestPages, TestResponse};

const PW: &str = "MySup3rStrong@Pw";

fn unused() -> TestResponse {
    TestResponse::new(StatusCode::IM_A_TEAPOT, "{}")
}

#[tokio::test]
async fn password_reset_form() {
    let test = async move {
        let api = TestAccountApi::new(unused(), unused()).await?;
        let pages = TestPages::new(api.url.clone()).await?;

        let (status, html) = pages.get("/").await?;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Reset Password"));
        assert!(html.contains("name=\"new_password\""));
        assert!(!html.contains("notice"));

        pages.destroy();
        api.destroy();
        anyhow::Ok(())
    };
    test.await.unwrap();
}

/// Tests related to client side validation of the reset form
#[tokio::test]
async fn password_reset_validation() {
    let test = async move {
        let api = TestAccountApi::new(unused(), unused()).await?;
        let pages = TestPages::new(api.url.clone()).await?;

        let (_, html) = pages
            .post(
                "/",
                &[
                    ("token", "reset-token"),
                    ("new_password", PW),
                    ("confirm_password", "MySup3rStrong@Pw2"),
                ],
            )
            .await?;
        assert!(html.contains("Passwords do not match"));
        // the token stays, passwords don't
        assert!(html.contains("value=\"reset-token\""));
        assert!(!html.contains(PW));

        let (_, html) = pages
            .post(
                "/",
                &[
                    ("token", "reset-token"),
                    ("new_password", "short"),
                    ("confirm_password", "short"),
                ],
            )
            .await?;
        assert!(html.contains("Password must be at least 8 characters long"));

        let (_, html) = pages.post("/", &[("token", "reset-token")]).await?;
        assert!(html.contains("Please fill in all fields."));

        assert_eq!(api.password_reset_calls(), 0);

        pages.destroy();
        api.destroy();
        anyhow::Ok(())
    };
    test.await.unwrap();
}

#[tokio::test]
async fn password_reset_success() {
    let test = async move {
        let api = TestAccountApi::new(unused(), TestResponse::new(StatusCode::OK, "{}")).await?;
        let pages = TestPages::new(api.url.clone()).await?;

        let (_, html) = pages
            .post(
                "/",
                &[
                    ("token", "reset-token"),
                    ("new_password", PW),
                    ("confirm_password", PW),
                ],
            )
            .await?;
        assert!(html.contains(MSG_PASSWORD_RESET));
        assert!(html.contains("notice success"));
        // fields are cleared
        assert!(html.contains("value=\"\""));
        assert_eq!(api.password_reset_calls(), 1);
        let req = api.last_password_reset.lock().clone().unwrap();
        assert_eq!(req.token, "reset-token");
        assert_eq!(req.new_password, PW);
        assert_eq!(api.confirm_delete_calls(), 0);

        pages.destroy();
        api.destroy();
        anyhow::Ok(())
    };
    test.await.unwrap();
}

#[tokio::test]
async fn password_reset_failures() {
    let test = async move {
        let form = [
            ("token", "reset-token"),
            ("new_password", PW),
            ("confirm_password", PW),
        ];

        let api = TestAccountApi::new(
            unused(),
            TestResponse::new(StatusCode::BAD_REQUEST, r#"{"message":"Token expired"}"#),
        )
        .await?;
        let pages = TestPages::new(api.url.clone()).await?;
        let (_, html) = pages.post("/", &form).await?;
        assert!(html.contains("Token expired"));
        assert!(html.contains("notice error"));
        assert!(html.contains("value=\"reset-token\""));
        pages.destroy();
        api.destroy();

        let api = TestAccountApi::new(
            unused(),
            TestResponse::new(StatusCode::BAD_GATEWAY, "Bad Gateway"),
        )
        .await?;
        let pages = TestPages::new(api.url.clone()).await?;
        let (_, html) = pages.post("/", &form).await?;
        assert!(html.contains("Failed to reset password. Please try again."));
        pages.destroy();
        api.destroy();

        let pages = TestPages::new(unreachable_url().await?).await?;
        let (_, html) = pages.post("/", &form).await?;
        assert!(html.contains("Network error. Please check your connection and try again."));
        pages.destroy();

        anyhow::Ok(())
    };
    test.await.unwrap();
}
