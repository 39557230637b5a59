//! Plain data carried by the shell: navigation entries, icons and records

pub mod icon;
pub mod nav;
pub mod records;
pub mod sample;

pub use icon::{IconId, IconSet};
pub use nav::{NavigationEntry, NavigationRegistry};
pub use records::{
    BadgeVariant, DashboardData, MetricRecord, ProgressRecord, QuickStatRecord, Tone,
    TransactionRecord, TransactionStatus, TrendDirection,
};
