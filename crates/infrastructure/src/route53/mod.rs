pub mod mapping;
pub mod provider;

pub use provider::Route53RecordSetProvider;
