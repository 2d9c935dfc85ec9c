pub mod brief;
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod page_facts;
pub mod server;
pub mod topic;

pub use error::{Result, SeoError};
