pub mod message_generator;
pub mod notifier;
pub mod pipeline;
pub mod user_service;
