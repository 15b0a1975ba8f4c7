//! HTTP API layer: handlers, DTOs, and extractors.

pub mod dto;
pub mod extract;
pub mod handlers;
