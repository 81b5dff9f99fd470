use serde::{Deserialize, Serialize};

/// Path of the confirm-delete endpoint, relative to the
/// base url of the account api.
pub const CONFIRM_DELETE_PATH: &str = "users/confirm-delete";

/// Name of the query parameter that carries the deletion token,
/// both in the link the user opens and in the request to the
/// account api.
pub const TOKEN_QUERY_PARAM: &str = "token";

/// The query of a confirm-delete request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmDeleteQuery {
    /// The deletion token from the email link.
    pub token: String,
}
