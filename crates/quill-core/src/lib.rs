//! # Quill Core
//!
//! The domain layer of the Quill blog platform.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod feed;
pub mod follow;
pub mod media;
pub mod ports;

pub use error::DomainError;
