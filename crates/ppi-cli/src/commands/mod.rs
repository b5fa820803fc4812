pub mod auth;
pub mod batch;
pub mod config;
pub mod history;
pub mod predict;
pub mod status;
pub mod theme;
