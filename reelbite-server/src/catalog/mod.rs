//! Feed, upload, and creator-profile surface. Every handler is a single
//! ledger or storage call.

pub mod handlers;
