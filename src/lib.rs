// Library for tests to access modules

pub mod aggregation;
pub mod collector;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod source;
pub mod version;
