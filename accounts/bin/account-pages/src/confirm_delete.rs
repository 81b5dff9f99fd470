use std::sync::Arc;

use account_client::{deletion_flow::DeleteConfirmation, view::View};
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::{html, shared::Shared};

fn expired() -> Response {
    (StatusCode::NOT_FOUND, Html(html::expired_page())).into_response()
}

/// A deletion link was opened, `query` is the raw query string of the link.
pub async fn deletion_page(shared: Arc<Shared>, query: Option<String>) -> Response {
    let flow = DeleteConfirmation::from_query(query.as_deref());
    // nothing can happen on such a page anymore, no need to remember it
    if flow.status().state.is_terminal() {
        return Html(html::deletion_page(None, &flow.view())).into_response();
    }

    let (page_id, flow) = shared.pages.open(flow);
    log::debug!(
        target: "pages",
        "opened deletion page {page_id}, {} pages open",
        shared.pages.count()
    );
    Html(html::deletion_page(Some(&page_id), &flow.view())).into_response()
}

/// Shows the current state of an opened page.
pub async fn deletion_page_view(shared: Arc<Shared>, page_id: String) -> Response {
    let Some(flow) = shared.pages.get(&page_id) else {
        return expired();
    };
    Html(html::deletion_page(Some(&page_id), &flow.view())).into_response()
}

/// The user confirmed the deletion on an opened page.
pub async fn confirm_request(shared: Arc<Shared>, page_id: String) -> Response {
    let Some(flow) = shared.pages.get(&page_id) else {
        return expired();
    };
    // the request must finish even if the browser gives up on this one
    let io = shared.io.clone();
    let task_flow = flow.clone();
    let status = match tokio::spawn(async move { task_flow.confirm(&*io).await }).await {
        Ok(status) => status,
        Err(err) => {
            log::error!(target: "pages", "confirm task of deletion page {page_id} failed: {err}");
            flow.status()
        }
    };
    log::debug!(target: "pages", "deletion page {page_id} is {:?}", status.state);
    Html(html::deletion_page(Some(&page_id), &View::render(&status))).into_response()
}

/// The user cancelled the deletion on an opened page.
pub async fn cancel_request(shared: Arc<Shared>, page_id: String) -> Response {
    let Some(flow) = shared.pages.get(&page_id) else {
        return expired();
    };
    let status = flow.cancel();
    log::debug!(target: "pages", "deletion page {page_id} is {:?}", status.state);
    Html(html::deletion_page(Some(&page_id), &View::render(&status))).into_response()
}
