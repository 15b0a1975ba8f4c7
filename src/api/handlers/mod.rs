//! HTTP request handlers.

pub mod redirect;
pub mod submit;

pub use redirect::{favicon_handler, redirect_handler};
pub use submit::submit_handler;
