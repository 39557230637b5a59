//! Literal records rendered by the dashboard content panel

use serde::Deserialize;

use super::icon::IconId;

/// Declared trend of a metric. Chosen per record, never parsed from the delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
}

impl TrendDirection {
    pub fn icon(self) -> IconId {
        match self {
            TrendDirection::Up => IconId::TrendingUp,
            TrendDirection::Down => IconId::TrendingDown,
        }
    }

    pub fn is_favorable(self) -> bool {
        matches!(self, TrendDirection::Up)
    }
}

/// Accent color family for bars and badges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Primary,
    Green,
    Yellow,
    Blue,
    Purple,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MetricRecord {
    pub label: String,
    pub value: String,
    pub delta: String,
    pub direction: TrendDirection,
    pub icon: IconId,
    #[serde(default = "default_period")]
    pub period: String,
}

fn default_period() -> String {
    "from last month".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProgressRecord {
    pub label: String,
    pub percent: u32,
    #[serde(default)]
    pub tone: Tone,
}

impl ProgressRecord {
    /// Fill fraction of the bar; the displayed percent stays verbatim.
    pub fn ratio(&self) -> f64 {
        f64::from(self.percent.min(100)) / 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuickStatRecord {
    pub label: String,
    pub value: String,
    pub badge: String,
    #[serde(default)]
    pub tone: Tone,
}

/// Visual variant of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Primary,
    Secondary,
    Outline,
    Destructive,
}

/// Open enumeration of transaction states. Anything unrecognised is kept
/// verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum TransactionStatus {
    Completed,
    Processing,
    Other(String),
}

impl TransactionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TransactionStatus::Completed => "Completed",
            TransactionStatus::Processing => "Processing",
            TransactionStatus::Other(raw) => raw,
        }
    }

    pub fn variant(&self) -> BadgeVariant {
        match self {
            TransactionStatus::Completed => BadgeVariant::Primary,
            TransactionStatus::Processing => BadgeVariant::Secondary,
            TransactionStatus::Other(_) => BadgeVariant::Outline,
        }
    }
}

impl From<&str> for TransactionStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "Completed" => TransactionStatus::Completed,
            "Processing" => TransactionStatus::Processing,
            other => TransactionStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for TransactionStatus {
    fn from(raw: String) -> Self {
        TransactionStatus::from(raw.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransactionRecord {
    pub customer: String,
    pub email: String,
    pub amount: String,
    pub status: TransactionStatus,
}

/// Everything the content panel paints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardData {
    pub metrics: Vec<MetricRecord>,
    pub progress: Vec<ProgressRecord>,
    pub quick_stats: Vec<QuickStatRecord>,
    pub transactions: Vec<TransactionRecord>,
}
