pub mod config;
pub mod cookie;
pub mod datetime;
pub mod dirs;
pub mod env_var;
pub mod logging;
