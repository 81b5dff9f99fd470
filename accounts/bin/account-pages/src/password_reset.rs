use std::sync::Arc;

use account_client::password_reset::{password_reset, PasswordResetForm};
use axum::{response::Html, Form};

use crate::{
    html::{self, ResetNotice},
    shared::Shared,
};

/// The empty form.
pub async fn password_reset_page() -> Html<String> {
    Html(html::password_reset_page("", None))
}

/// The form was submitted.
pub async fn password_reset_request(
    shared: Arc<Shared>,
    Form(form): Form<PasswordResetForm>,
) -> Html<String> {
    match password_reset(&form, &*shared.io).await {
        // all fields are cleared after success
        Ok(()) => Html(html::password_reset_page("", Some(&ResetNotice::Success))),
        Err(err) => Html(html::password_reset_page(
            &form.token,
            Some(&ResetNotice::Error(err.user_message())),
        )),
    }
}
