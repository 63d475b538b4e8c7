// Domain module - Shared types
pub mod error;
