//! This crate contains a base implementation for
//! the account pages a user reaches through email links.
//! It drives the flows and tells what to show,
//! but it is not intended for creating UI
//! nor knowing about the communication details
//! (be it HTTP or other stuff).
//! It uses interfaces to abstract such concepts away.

#![deny(missing_docs)]
#![deny(warnings)]
#![deny(clippy::nursery)]
#![deny(clippy::all)]

pub(crate) mod safe_interface;
#[cfg(test)]
pub(crate) mod test_io;

/// Data types and operations required to confirm
/// the deletion of an account on the account api.
pub mod confirm_delete;
/// The state machine behind a deletion confirmation page.
pub mod deletion_flow;
/// Types related to errors during client operations.
pub mod errors;
/// Communication interface for the client to
/// do requests to the account api.
pub mod interface;
/// Data types and operations required to reset
/// a password on the account api.
pub mod password_reset;
/// What a deletion confirmation page shows for a given state.
pub mod view;
