//! Payment module - value objects for ticket checkout.
//!
//! Nothing here is persisted. Payments live at the processor; these types
//! describe what crosses the boundary.

mod amount;
mod errors;
mod metadata;
mod status;

pub use amount::{Amount, Currency};
pub use errors::{PaymentError, CREATION_FAILED_MESSAGE, LOOKUP_FAILED_MESSAGE};
pub use metadata::PaymentMetadata;
pub use status::PaymentStatus;
