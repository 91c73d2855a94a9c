pub mod alert_record;
pub mod decoded_alert;
