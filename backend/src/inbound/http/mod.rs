//! HTTP inbound adapter exposing the JSON API.

pub mod error;
pub mod health;
pub mod schemas;
pub mod site;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;
pub use validation::{json_config, query_config};
