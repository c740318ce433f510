pub mod check;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod logic;
pub mod models;
pub mod predictor;
pub mod server;
