/*
[INPUT]:  Session state and Wykop Connect payloads
[OUTPUT]: Authentication and app/user linking support
[POS]:    Auth layer - session and connect handling
[UPDATE]: When the auth flow or connect handshake changes
*/

pub mod connect;
pub mod session;

pub use session::{Session, SessionData};
