mod sns;

pub use sns::{decode_alarm_notification, decode_alarm_notification_str, AlarmNotification};
