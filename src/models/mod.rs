//! Data models for the Travel API

pub mod client;
pub mod registration;
pub mod trip;

// Re-export commonly used types
pub use client::{Client, CreateClient};
pub use registration::{ClientTrip, Registration};
pub use trip::{Country, Trip};
