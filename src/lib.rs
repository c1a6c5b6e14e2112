//! Ticket Checkout - Payment facade for concert ticket sales
//!
//! This crate fronts the Mollie payment processor with three HTTP operations:
//! create a payment, read its status, and acknowledge processor webhooks.
//! Payment state lives at the processor; nothing is persisted here.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
