//! Weighted failover application layer: provider port and use cases.
pub mod ports;
pub mod use_cases;
