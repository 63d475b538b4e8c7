// Core module - Greeting composition
pub mod greeting;

pub use greeting::render;
