//! HTTP adapter for the contact gateway port

pub mod gateway;

pub use gateway::HttpContactGateway;
