//! Reelbite server: the engagement ledger (canonical like/follow
//! membership sets with materialized counters) and the feed/upload/comment
//! HTTP surface around it.

pub mod auth;
pub mod catalog;
pub mod comments;
pub mod engagement;
pub mod errors;
pub mod infra;
pub mod routes;
pub mod storage;

pub use infra::app_state::AppState;
pub use infra::config::Config;
