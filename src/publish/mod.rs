//! Hand-off of encoded artifacts.
//!
//! Credential handling and the remote upload protocol live behind [`publisher::Publisher`];
//! this crate only ships a local directory implementation.

/// Scoped ownership of output files.
pub mod artifact;
/// Publisher interface and the directory publisher.
pub mod publisher;
