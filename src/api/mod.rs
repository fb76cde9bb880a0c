// Re-export the API module components
pub use self::{
    client::VerificationClient,
    errors::ApiClientError,
    models::{HealthStatus, LookupRecord, Origin, UnknownOrigin, VerificationRequest},
    transport::{HttpTransport, RawResponse, Transport},
    types::{MessageCategory, Outcome, Verification},
};

// Module declarations
mod client;
mod errors;
mod models;
mod transport;
mod types;
