//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `payment` - Amount normalization, processor status, metadata, error taxonomy

pub mod payment;
