pub mod args;
pub mod config;
pub mod country;
pub mod logging;
pub mod lookup;
pub mod query;
pub mod ui;
