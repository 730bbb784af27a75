pub mod channel_alert_notifier;

pub use channel_alert_notifier::ChannelAlertNotifier;
