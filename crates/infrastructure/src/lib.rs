//! Adapters for weighted failover: the Route 53 record set provider and
//! alarm trigger decoding.
pub mod route53;
pub mod trigger;
