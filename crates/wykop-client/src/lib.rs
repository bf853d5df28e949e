/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Wykop client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{
    Session,
    SessionData,
};

// Re-export commonly used types from http
pub use http::{
    ApiResponse,
    AppCredentials,
    ClientConfig,
    Notifications,
    RequestSigner,
    Result,
    WykopClient,
    WykopError,
};

// Re-export all types
pub use types::*;
