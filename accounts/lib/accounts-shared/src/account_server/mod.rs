/// The generic `{ "message": ... }` response body.
pub mod message;
