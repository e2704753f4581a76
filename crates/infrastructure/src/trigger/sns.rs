//! Decoding of CloudWatch alarm notifications.
//!
//! Accepted payloads:
//! - an SNS event (`{"Records":[{"Sns":{"Message": ...}}]}`), where the
//!   message is the alarm JSON either encoded as a string or inline;
//! - an HTTP-style wrapper (`{"body": ...}`) around one of the other shapes;
//! - the bare alarm message (`{"NewStateValue": "ALARM", ...}`).

use serde::Deserialize;
use serde_json::Value;
use weighted_failover_domain::{AlarmState, DomainError};

/// The parts of an alarm notification the failover acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlarmNotification {
    pub state: AlarmState,
    pub alarm_name: Option<String>,
}

#[derive(Deserialize)]
struct SnsEvent {
    #[serde(rename = "Records")]
    records: Vec<SnsRecord>,
}

#[derive(Deserialize)]
struct SnsRecord {
    #[serde(rename = "Sns")]
    sns: SnsMessage,
}

#[derive(Deserialize)]
struct SnsMessage {
    #[serde(rename = "Message")]
    message: Value,
}

#[derive(Deserialize)]
struct AlarmMessage {
    #[serde(rename = "NewStateValue")]
    new_state_value: String,
    #[serde(rename = "AlarmName", default)]
    alarm_name: Option<String>,
}

pub fn decode_alarm_notification_str(payload: &str) -> Result<AlarmNotification, DomainError> {
    let value: Value = serde_json::from_str(payload)
        .map_err(|e| DomainError::MalformedTrigger(format!("invalid JSON: {}", e)))?;
    decode_alarm_notification(&value)
}

pub fn decode_alarm_notification(payload: &Value) -> Result<AlarmNotification, DomainError> {
    decode(payload, true)
}

fn decode(payload: &Value, unwrap_body: bool) -> Result<AlarmNotification, DomainError> {
    let Some(object) = payload.as_object() else {
        return Err(malformed("payload is not a JSON object"));
    };

    if unwrap_body {
        if let Some(body) = object.get("body") {
            let inner = embedded_json(body, "body")?;
            return decode(&inner, false);
        }
    }

    if object.contains_key("Records") {
        let event: SnsEvent = serde_json::from_value(payload.clone())
            .map_err(|e| malformed(&format!("invalid SNS event: {}", e)))?;
        let record = event
            .records
            .into_iter()
            .next()
            .ok_or_else(|| malformed("SNS event has no records"))?;
        let message = embedded_json(&record.sns.message, "Sns.Message")?;
        return alarm_from(&message);
    }

    if object.contains_key("NewStateValue") {
        return alarm_from(payload);
    }

    Err(malformed("no SNS records or NewStateValue field"))
}

/// Fields that carry JSON may hold it as an encoded string or inline.
fn embedded_json(value: &Value, field: &str) -> Result<Value, DomainError> {
    match value {
        Value::String(encoded) => serde_json::from_str(encoded)
            .map_err(|e| malformed(&format!("{} is not valid JSON: {}", field, e))),
        Value::Object(_) => Ok(value.clone()),
        _ => Err(malformed(&format!("{} must be a JSON object or string", field))),
    }
}

fn alarm_from(message: &Value) -> Result<AlarmNotification, DomainError> {
    let alarm: AlarmMessage = serde_json::from_value(message.clone())
        .map_err(|e| malformed(&format!("invalid alarm message: {}", e)))?;

    Ok(AlarmNotification {
        state: AlarmState::parse(&alarm.new_state_value),
        alarm_name: alarm.alarm_name,
    })
}

fn malformed(reason: &str) -> DomainError {
    DomainError::MalformedTrigger(reason.to_string())
}
