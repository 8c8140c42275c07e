//! Infrastructure adapters for the application ports.

#![forbid(unsafe_code)]

mod http_roster_gateway;

pub use http_roster_gateway::HttpRosterGateway;
