pub mod action_type;
pub mod alert_type;
pub mod bias;
pub mod confidence;
pub mod risk;
pub mod timeframe;
pub mod urgency;
