pub mod config;
pub mod logging;
pub mod openai;
pub mod webhook;
