//! Shared types for the Multiwatch stream wall.
//!
//! This crate contains the domain models shared between the wall
//! controller and every rendering surface (browser and native).

pub mod capacity;
pub mod registry;
pub mod source;

// Re-export commonly used types
pub use capacity::{Capacity, CapacityError};
pub use registry::{Registry, RegistryError};
pub use source::{Source, SourceId};
