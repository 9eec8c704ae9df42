//! Application layer - Use cases, ports and API-facing DTOs

pub mod dto;
pub mod ports;
pub mod services;
