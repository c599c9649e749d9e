//! Application layer: workflows built on top of the infrastructure adapters.

pub mod settings_session;
