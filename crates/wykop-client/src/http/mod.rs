/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod response;
pub mod signature;
pub mod user;

pub use error::{Result, WykopError};
pub use response::{ApiResponse, Notifications};
pub use signature::RequestSigner;

pub use client::{AppCredentials, ClientConfig, WykopClient};
