//! Built-in business data used when no dataset file is supplied

use super::icon::IconId;
use super::nav::{NavigationEntry, NavigationRegistry};
use super::records::{
    DashboardData, MetricRecord, ProgressRecord, QuickStatRecord, Tone, TransactionRecord,
    TrendDirection,
};

pub fn navigation() -> NavigationRegistry {
    NavigationRegistry::new([
        NavigationEntry::new("Dashboard", "#", IconId::LayoutDashboard),
        NavigationEntry::new("Analytics", "#", IconId::BarChart),
        NavigationEntry::new("Reports", "#", IconId::FileText),
        NavigationEntry::new("Customers", "#", IconId::Users),
        NavigationEntry::new("Orders", "#", IconId::ShoppingCart),
        NavigationEntry::new("Products", "#", IconId::Package),
        NavigationEntry::new("Performance", "#", IconId::TrendingUp),
        NavigationEntry::new("Settings", "#", IconId::Settings),
    ])
}

pub fn dashboard() -> DashboardData {
    DashboardData {
        metrics: metrics(),
        progress: progress(),
        quick_stats: quick_stats(),
        transactions: transactions(),
    }
}

pub fn metrics() -> Vec<MetricRecord> {
    vec![
        metric(
            "Total Revenue",
            "$45,231.89",
            "+20.1%",
            TrendDirection::Up,
            IconId::DollarSign,
            "from last month",
        ),
        metric(
            "Active Users",
            "+2,350",
            "+18.1%",
            TrendDirection::Up,
            IconId::Users,
            "from last month",
        ),
        metric(
            "Orders",
            "+12,234",
            "-4.5%",
            TrendDirection::Down,
            IconId::ShoppingCart,
            "from last month",
        ),
        metric(
            "Active Now",
            "+573",
            "+12.5%",
            TrendDirection::Up,
            IconId::Activity,
            "from last hour",
        ),
    ]
}

pub fn progress() -> Vec<ProgressRecord> {
    [
        ("Sales", 78, Tone::Primary),
        ("Customer Satisfaction", 92, Tone::Green),
        ("Product Inventory", 65, Tone::Yellow),
        ("Delivery Rate", 88, Tone::Blue),
    ]
    .into_iter()
    .map(|(label, percent, tone)| ProgressRecord {
        label: label.to_string(),
        percent,
        tone,
    })
    .collect()
}

pub fn quick_stats() -> Vec<QuickStatRecord> {
    [
        ("Conversion Rate", "3.24%", "+0.5%", Tone::Green),
        ("Avg. Order Value", "$123.45", "+$12", Tone::Blue),
        ("Customer Retention", "87.2%", "+2.1%", Tone::Purple),
        ("Return Rate", "2.4%", "-0.3%", Tone::Destructive),
    ]
    .into_iter()
    .map(|(label, value, badge, tone)| QuickStatRecord {
        label: label.to_string(),
        value: value.to_string(),
        badge: badge.to_string(),
        tone,
    })
    .collect()
}

pub fn transactions() -> Vec<TransactionRecord> {
    [
        ("John Doe", "john@example.com", "$250.00", "Completed"),
        ("Jane Smith", "jane@example.com", "$150.00", "Processing"),
        ("Bob Johnson", "bob@example.com", "$350.00", "Completed"),
        ("Alice Williams", "alice@example.com", "$125.00", "Pending"),
    ]
    .into_iter()
    .map(|(customer, email, amount, status)| TransactionRecord {
        customer: customer.to_string(),
        email: email.to_string(),
        amount: amount.to_string(),
        status: status.into(),
    })
    .collect()
}

fn metric(
    label: &str,
    value: &str,
    delta: &str,
    direction: TrendDirection,
    icon: IconId,
    period: &str,
) -> MetricRecord {
    MetricRecord {
        label: label.to_string(),
        value: value.to_string(),
        delta: delta.to_string(),
        direction,
        icon,
        period: period.to_string(),
    }
}
