pub mod config;
pub mod logging;

pub mod checksum;
pub mod dedup;
pub mod fetcher;
pub mod report;
pub mod session;
pub mod url_model;
