//! Request handlers
//!
//! HTTP handlers for orchestration, action execution, audit, and health endpoints.

pub mod actions;
pub mod changes;
pub mod health;
pub mod orchestration;
