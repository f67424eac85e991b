//! Request handlers.

pub mod dispatch;
