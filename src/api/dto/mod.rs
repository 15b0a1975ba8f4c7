//! Request and response data transfer objects.

pub mod submit;

pub use submit::SubmitRequest;
