//! Concrete senders behind [`crate::Notifier`].

pub mod dry_run;
pub mod wecom_robot;
