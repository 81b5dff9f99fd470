//! Data types shared between the account pages and
//! the account api (the remote account management service).
//! Everything in here is plain data that crosses the wire,
//! plus the few rules both sides agree on.

#![deny(missing_docs)]
#![deny(warnings)]
#![deny(clippy::nursery)]
#![deny(clippy::all)]

/// Types the account api sends back.
pub mod account_server;
/// Types the client sends to the account api.
pub mod client;
