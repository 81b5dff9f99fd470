//! The [`account_client::interface::Io`] implementation
//! that talks to the account api over http, using [`reqwest`].

#![deny(missing_docs)]
#![deny(warnings)]
#![deny(clippy::nursery)]
#![deny(clippy::all)]

/// The client that implements the account client's io interface.
pub mod client;
/// A thin http layer over [`reqwest`].
pub mod http;
