use account_client::{
    password_reset::MSG_PASSWORD_RESET,
    view::{Outcome, View},
};

/// Escapes text for use in html content and attribute values.
pub fn escape(text: &str) -> String {
    let mut res = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => res.push_str("&amp;"),
            '<' => res.push_str("&lt;"),
            '>' => res.push_str("&gt;"),
            '"' => res.push_str("&quot;"),
            '\'' => res.push_str("&#39;"),
            c => res.push(c),
        }
    }
    res
}

/// Seconds until a busy page reloads itself.
pub const BUSY_REFRESH_SECS: u32 = 2;

fn document(title: &str, head_extra: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         {head_extra}\
         <title>{title}</title>\n\
         </head>\n\
         <body>\n\
         <main class=\"card\">\n\
         {body}\
         </main>\n\
         </body>\n\
         </html>\n",
        title = escape(title),
    )
}

fn deletion_page_url(page_id: &str) -> String {
    format!("/confirmdelete/{}", escape(page_id))
}

/// Renders the deletion confirmation page.
/// Controls are only rendered for pages that have an id.
pub fn deletion_page(page_id: Option<&str>, view: &View) -> String {
    let title = escape(view.title());
    let message = escape(view.message());
    match (view, page_id) {
        (View::Confirm { controls, .. }, Some(page_id)) => {
            let url = deletion_page_url(page_id);
            let confirm_disabled = if controls.confirm_enabled { "" } else { " disabled" };
            let cancel_disabled = if controls.cancel_enabled { "" } else { " disabled" };
            document(
                view.title(),
                "",
                &format!(
                    "<div class=\"icon alert\"></div>\n\
                     <h2>{title}</h2>\n\
                     <p class=\"message\">{message}</p>\n\
                     <div class=\"controls\">\n\
                     <form method=\"post\" action=\"{url}/confirm\">\
                     <button type=\"submit\" class=\"danger\"{confirm_disabled}>Yes, Permanently Delete My Account</button>\
                     </form>\n\
                     <form method=\"post\" action=\"{url}/cancel\">\
                     <button type=\"submit\"{cancel_disabled}>Cancel</button>\
                     </form>\n\
                     </div>\n"
                ),
            )
        }
        (View::Busy { .. }, page_id) => {
            let refresh = page_id
                .map(|page_id| {
                    format!(
                        "<meta http-equiv=\"refresh\" content=\"{BUSY_REFRESH_SECS};url={}\">\n",
                        deletion_page_url(page_id)
                    )
                })
                .unwrap_or_default();
            document(
                view.title(),
                &refresh,
                &format!(
                    "<div class=\"icon spinner\" aria-busy=\"true\"></div>\n\
                     <h2>{title}</h2>\n\
                     <p class=\"message\">{message}</p>\n"
                ),
            )
        }
        (View::Done { outcome, .. }, _) => {
            let icon = match outcome {
                Outcome::Success => "success",
                Outcome::Failure => "failure",
            };
            document(
                view.title(),
                "",
                &format!(
                    "<div class=\"icon {icon}\"></div>\n\
                     <h2>{title}</h2>\n\
                     <p class=\"message\">{message}</p>\n"
                ),
            )
        }
        // a confirm view without a page to post to can't offer controls
        (View::Confirm { .. }, None) => document(
            view.title(),
            "",
            &format!("<h2>{title}</h2>\n<p class=\"message\">{message}</p>\n"),
        ),
    }
}

/// Shown for unknown or expired page ids.
pub fn expired_page() -> String {
    document(
        "Page Expired",
        "",
        "<div class=\"icon failure\"></div>\n\
         <h2>Page Expired</h2>\n\
         <p class=\"message\">This page has expired. Please open the link from your email again.</p>\n",
    )
}

/// The message below the password reset form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetNotice {
    /// The password was reset.
    Success,
    /// Something went wrong, the text says what.
    Error(String),
}

/// Renders the password reset form.
/// Only the token is ever filled back in, passwords are not.
pub fn password_reset_page(token: &str, notice: Option<&ResetNotice>) -> String {
    let notice = match notice {
        Some(ResetNotice::Success) => format!(
            "<div class=\"notice success\"><p>{}</p></div>\n",
            escape(MSG_PASSWORD_RESET)
        ),
        Some(ResetNotice::Error(message)) => format!(
            "<div class=\"notice error\"><p>{}</p></div>\n",
            escape(message)
        ),
        None => String::new(),
    };
    document(
        "Reset Password",
        "",
        &format!(
            "<h1>Reset Password</h1>\n\
             <p>Enter your reset token and new password</p>\n\
             <form method=\"post\" action=\"/\">\n\
             <label for=\"token\">Reset Token</label>\n\
             <input id=\"token\" name=\"token\" type=\"text\" placeholder=\"Enter your reset token\" value=\"{token}\" required>\n\
             <label for=\"new_password\">New Password</label>\n\
             <input id=\"new_password\" name=\"new_password\" type=\"password\" placeholder=\"Enter new password\" minlength=\"8\" required>\n\
             <label for=\"confirm_password\">Confirm Password</label>\n\
             <input id=\"confirm_password\" name=\"confirm_password\" type=\"password\" placeholder=\"Confirm new password\" minlength=\"8\" required>\n\
             {notice}\
             <button type=\"submit\">Reset Password</button>\n\
             </form>\n",
            token = escape(token),
        ),
    )
}

#[cfg(test)]
mod test {
    use account_client::deletion_flow::{DeleteConfirmation, FlowState, Status};
    use account_client::view::View;

    use super::{deletion_page, escape, password_reset_page, ResetNotice};

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn confirm_view_has_both_forms() {
        let flow = DeleteConfirmation::from_query(Some("token=abc"));
        let html = deletion_page(Some("page-1"), &flow.view());
        assert!(html.contains("action=\"/confirmdelete/page-1/confirm\""));
        assert!(html.contains("action=\"/confirmdelete/page-1/cancel\""));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn busy_view_refreshes() {
        let view = View::render(&Status {
            state: FlowState::Processing,
            message: "wait".into(),
        });
        let html = deletion_page(Some("page-1"), &view);
        assert!(html.contains("http-equiv=\"refresh\""));
        assert!(html.contains("url=/confirmdelete/page-1"));
        assert!(!html.contains("<form"));
    }

    #[test]
    fn terminal_view_has_no_forms() {
        let flow = DeleteConfirmation::from_query(None);
        let html = deletion_page(None, &flow.view());
        assert!(!html.contains("<form"));
        assert!(html.contains("Action Failed"));
    }

    #[test]
    fn reset_form_keeps_token_escaped() {
        let html = password_reset_page(
            "a\"b",
            Some(&ResetNotice::Error("Passwords do not match".into())),
        );
        assert!(html.contains("value=\"a&quot;b\""));
        assert!(html.contains("Passwords do not match"));
        assert!(html.contains("notice error"));
    }
}
