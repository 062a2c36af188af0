pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod graph;
pub mod lang;
pub mod scan;
pub mod watch;
