// --- File: crates/ptslot_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod models; // Shared wire models
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{
    config_error, external_service_error, internal_error, not_found, parse_error,
    service_unavailable, validation_error, Context, HttpStatusCode, PtslotError,
};

// Re-export HTTP utilities for easier access
pub use http::{
    client::{create_client, endpoint_url},
    IntoHttpResponse,
};

// Re-export logging utilities for easier access
pub use logging::{init, init_from_config, init_with_level, log_error, log_result};

pub use models::{
    AvailabilityRequest, AvailabilityRequestResult, ConflictingShift, RawTimeSlot, RequestStatus,
    TimeOfDay, TimeSlot,
};
pub use services::{AvailabilityService, BoxFuture};
