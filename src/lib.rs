pub mod cli;
pub mod config;
pub mod consumer;
pub mod demo;
pub mod logging;
pub mod resource;
pub mod session;
