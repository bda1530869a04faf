//! Invoice review data model.
//!
//! Field names serialize in camelCase to match the JSON API.

use std::fmt;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::outcome::AnalysisSource;

/// Review status of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    New,
    Review,
    Approved,
    Disputed,
    Paid,
}

impl InvoiceStatus {
    /// Wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::New => "new",
            InvoiceStatus::Review => "review",
            InvoiceStatus::Approved => "approved",
            InvoiceStatus::Disputed => "disputed",
            InvoiceStatus::Paid => "paid",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Action recommended by an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendedAction {
    Approve,
    Review,
    Dispute,
}

impl RecommendedAction {
    /// Wire name of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendedAction::Approve => "approve",
            RecommendedAction::Review => "review",
            RecommendedAction::Dispute => "dispute",
        }
    }

    /// Whether the action asks a human to look at the invoice.
    pub fn needs_attention(&self) -> bool {
        matches!(self, RecommendedAction::Review | RecommendedAction::Dispute)
    }

    /// Initial status of a freshly analyzed invoice.
    pub fn initial_status(&self) -> InvoiceStatus {
        match self {
            RecommendedAction::Approve => InvoiceStatus::Approved,
            RecommendedAction::Review | RecommendedAction::Dispute => InvoiceStatus::Review,
        }
    }
}

impl fmt::Display for RecommendedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trade category of a vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trade {
    Plumbing,
    Hvac,
    Electrical,
    General,
    Landscaping,
    Appliance,
}

impl Trade {
    /// Wire name of the trade.
    pub fn as_str(&self) -> &'static str {
        match self {
            Trade::Plumbing => "plumbing",
            Trade::Hvac => "hvac",
            Trade::Electrical => "electrical",
            Trade::General => "general",
            Trade::Landscaping => "landscaping",
            Trade::Appliance => "appliance",
        }
    }
}

impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One charge line within an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: String,
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Whether the analysis considers this line anomalous.
    #[serde(default)]
    pub flagged: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag_reason: Option<String>,
    /// What this line should cost.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variance_percent: Option<f64>,
}

/// Assessment of an invoice's trustworthiness and savings potential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceAnalysis {
    /// 0-100, higher is more trustworthy. Not range checked.
    pub trust_score: f64,
    pub summary: String,
    #[serde(default)]
    pub flags: Vec<String>,
    /// Estimated overbilling in dollars.
    pub savings_potential: f64,
    pub recommended_action: RecommendedAction,
}

/// A vendor billing record under review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub org_id: String,
    pub vendor_id: String,
    pub property_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_order_id: Option<String>,
    pub invoice_number: String,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    pub subtotal: f64,
    pub tax: f64,
    pub total_amount: f64,
    pub status: InvoiceStatus,
    pub file_url: String,
    pub line_items: Vec<LineItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<InvoiceAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_source: Option<AnalysisSource>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Invoice {
    /// Recommended action of the attached analysis, if any.
    pub fn recommended_action(&self) -> Option<RecommendedAction> {
        self.analysis.as_ref().map(|a| a.recommended_action)
    }

    /// Whether the analysis recommends review or dispute.
    pub fn is_flagged(&self) -> bool {
        self.recommended_action()
            .map(|action| action.needs_attention())
            .unwrap_or(false)
    }

    /// Savings potential of the attached analysis, 0 when absent.
    pub fn savings_potential(&self) -> f64 {
        self.analysis
            .as_ref()
            .map(|a| a.savings_potential)
            .unwrap_or(0.0)
    }

    /// Trust score of the attached analysis, 0 when absent.
    pub fn trust_score(&self) -> f64 {
        self.analysis.as_ref().map(|a| a.trust_score).unwrap_or(0.0)
    }

    /// Analysis flags, empty when there is no analysis.
    pub fn flags(&self) -> &[String] {
        self.analysis
            .as_ref()
            .map(|a| a.flags.as_slice())
            .unwrap_or(&[])
    }
}

/// A service vendor. Read-only seed data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: String,
    pub org_id: String,
    pub name: String,
    pub trade: Trade,
    pub email: String,
    pub phone: String,
    pub trust_score: f64,
    pub is_preferred: bool,
    pub service_area: String,
    /// Base price per common service item.
    pub pricing: IndexMap<String, f64>,
}

/// A managed property. Read-only seed data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub org_id: String,
    pub name: String,
    pub address: String,
    pub units: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
