//! Remote task service client.
//!
//! A narrow, blocking client over a Google-Tasks-shaped REST API. The
//! interactive consent flow lives outside this tool; `auth` loads and
//! refreshes the tokens that flow produced.

pub mod auth;
pub mod client;
pub mod types;

pub use auth::{load_access_token, StoredTokens};
pub use client::{find_list_by_title, TasksClient};
pub use types::{Task, TaskList, TaskStatus};
