//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Payment Ports
//!
//! - `PaymentProcessor` - Third-party processor issuing checkouts and reporting status

mod payment_processor;

pub use payment_processor::{
    CreatePaymentRequest, Money, PaymentProcessor, ProcessorError, ProcessorErrorCode,
    ProcessorPayment,
};
