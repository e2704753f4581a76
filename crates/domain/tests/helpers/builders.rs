#![allow(dead_code)]
use weighted_failover_domain::{AliasTarget, RecordSetDescriptor, RecordType};

pub struct DescriptorBuilder {
    name: String,
    record_type: RecordType,
    set_identifier: Option<String>,
    weight: Option<u32>,
    alias_target: Option<AliasTarget>,
}

impl DescriptorBuilder {
    pub fn new() -> Self {
        Self {
            name: "api.example.com.".to_string(),
            record_type: RecordType::A,
            set_identifier: None,
            weight: None,
            alias_target: None,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self
    }

    pub fn set_identifier(mut self, id: &str) -> Self {
        self.set_identifier = Some(id.to_string());
        self
    }

    pub fn weight(mut self, weight: u32) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn alias(mut self, dns_name: &str, hosted_zone_id: &str) -> Self {
        self.alias_target = Some(AliasTarget::new(dns_name, hosted_zone_id));
        self
    }

    pub fn build(self) -> RecordSetDescriptor {
        RecordSetDescriptor {
            name: self.name,
            record_type: self.record_type,
            set_identifier: self.set_identifier,
            weight: self.weight,
            alias_target: self.alias_target,
        }
    }
}
