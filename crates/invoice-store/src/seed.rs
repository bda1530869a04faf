//! Demo seed data.
//!
//! One organization with three properties, three vendors and five invoices.

use analysis_core::{
    Invoice, InvoiceAnalysis, InvoiceStatus, LineItem, Property, RecommendedAction, Trade, Vendor,
};
use chrono::{DateTime, TimeZone, Utc};
use indexmap::IndexMap;

/// Organization every seed record belongs to.
pub const ORG_ID: &str = "org-1";

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn pricing(items: &[(&str, f64)]) -> IndexMap<String, f64> {
    items
        .iter()
        .map(|(name, price)| (name.to_string(), *price))
        .collect()
}

fn item(id: &str, description: &str, unit_price: f64) -> LineItem {
    LineItem {
        id: id.to_string(),
        description: description.to_string(),
        quantity: 1.0,
        unit_price,
        total: unit_price,
        category: None,
        flagged: false,
        flag_reason: None,
        baseline_price: None,
        variance_percent: None,
    }
}

fn flagged(item: LineItem, reason: &str, baseline: f64, variance: f64) -> LineItem {
    LineItem {
        flagged: true,
        flag_reason: Some(reason.to_string()),
        baseline_price: Some(baseline),
        variance_percent: Some(variance),
        ..item
    }
}

fn analysis(
    trust_score: f64,
    summary: &str,
    flags: &[&str],
    savings_potential: f64,
    recommended_action: RecommendedAction,
) -> Option<InvoiceAnalysis> {
    Some(InvoiceAnalysis {
        trust_score,
        summary: summary.to_string(),
        flags: flags.iter().map(|f| f.to_string()).collect(),
        savings_potential,
        recommended_action,
    })
}

/// Seed properties.
pub fn properties() -> Vec<Property> {
    vec![
        Property {
            id: "prop-1".to_string(),
            org_id: ORG_ID.to_string(),
            name: "Sunset Heights".to_string(),
            address: "1200 Sunset Blvd, Los Angeles, CA".to_string(),
            units: 45,
            image_url: Some("https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?auto=format&fit=crop&w=800&q=80".to_string()),
        },
        Property {
            id: "prop-2".to_string(),
            org_id: ORG_ID.to_string(),
            name: "Highland Park Lofts".to_string(),
            address: "5400 N Figueroa St, Los Angeles, CA".to_string(),
            units: 12,
            image_url: Some("https://images.unsplash.com/photo-1545324418-cc1a3fa10c00?auto=format&fit=crop&w=800&q=80".to_string()),
        },
        Property {
            id: "prop-3".to_string(),
            org_id: ORG_ID.to_string(),
            name: "The Wilshire".to_string(),
            address: "3000 Wilshire Blvd, Los Angeles, CA".to_string(),
            units: 120,
            image_url: Some("https://images.unsplash.com/photo-1460317442991-0ec209397118?auto=format&fit=crop&w=800&q=80".to_string()),
        },
    ]
}

/// Seed vendors.
pub fn vendors() -> Vec<Vendor> {
    vec![
        Vendor {
            id: "vend-1".to_string(),
            org_id: ORG_ID.to_string(),
            name: "Rapid Rooter Plumbing".to_string(),
            trade: Trade::Plumbing,
            email: "dispatch@rapidrooter.com".to_string(),
            phone: "555-0101".to_string(),
            trust_score: 88.0,
            is_preferred: true,
            service_area: "Los Angeles".to_string(),
            pricing: pricing(&[
                ("Drain Snake", 150.0),
                ("Faucet Replace", 200.0),
                ("Toilet Repair", 180.0),
            ]),
        },
        Vendor {
            id: "vend-2".to_string(),
            org_id: ORG_ID.to_string(),
            name: "Budget Fixers".to_string(),
            trade: Trade::General,
            email: "joe@budgetfix.com".to_string(),
            phone: "555-0102".to_string(),
            trust_score: 45.0,
            is_preferred: false,
            service_area: "East LA".to_string(),
            pricing: pricing(&[
                ("Patch Drywall", 50.0),
                ("Paint Room", 200.0),
                ("Door Repair", 75.0),
            ]),
        },
        Vendor {
            id: "vend-3".to_string(),
            org_id: ORG_ID.to_string(),
            name: "Elite HVAC Systems".to_string(),
            trade: Trade::Hvac,
            email: "service@elitehvac.com".to_string(),
            phone: "555-0103".to_string(),
            trust_score: 95.0,
            is_preferred: true,
            service_area: "Los Angeles County".to_string(),
            pricing: pricing(&[
                ("AC Tuneup", 120.0),
                ("Filter Change", 40.0),
                ("Compressor Check", 95.0),
            ]),
        },
    ]
}

/// Seed invoices, in listing order.
pub fn invoices() -> Vec<Invoice> {
    vec![
        Invoice {
            id: "inv-1".to_string(),
            org_id: ORG_ID.to_string(),
            vendor_id: "vend-1".to_string(),
            property_id: "prop-1".to_string(),
            work_order_id: None,
            invoice_number: "RR-2023-001".to_string(),
            date: at(2023, 10, 15, 0, 0),
            due_date: None,
            subtotal: 350.0,
            tax: 0.0,
            total_amount: 350.0,
            status: InvoiceStatus::Approved,
            file_url: "/invoices/sample1.pdf".to_string(),
            line_items: vec![
                item("li-1", "Kitchen Sink Clog - Snaked drain", 150.0),
                item("li-2", "Replaced P-Trap", 200.0),
            ],
            analysis: analysis(
                92.0,
                "Pricing is within standard range for this type of plumbing work.",
                &[],
                0.0,
                RecommendedAction::Approve,
            ),
            analysis_source: None,
            created_at: at(2023, 10, 16, 10, 0),
            updated_at: at(2023, 10, 16, 14, 0),
        },
        Invoice {
            id: "inv-2".to_string(),
            org_id: ORG_ID.to_string(),
            vendor_id: "vend-2".to_string(),
            property_id: "prop-2".to_string(),
            work_order_id: None,
            invoice_number: "BF-992".to_string(),
            date: at(2023, 11, 1, 0, 0),
            due_date: None,
            subtotal: 850.0,
            tax: 50.0,
            total_amount: 900.0,
            status: InvoiceStatus::Review,
            file_url: "/invoices/sample2.pdf".to_string(),
            line_items: vec![
                flagged(
                    item("li-3", "Patch drywall hole", 450.0),
                    "Price is 200% above baseline ($150)",
                    150.0,
                    200.0,
                ),
                flagged(
                    item("li-4", "Paint wall", 400.0),
                    "Possible duplicate charge",
                    200.0,
                    100.0,
                ),
            ],
            analysis: analysis(
                35.0,
                "High risk of overbilling. Drywall patch is significantly overpriced compared to market rates.",
                &["Excessive Unit Price", "Possible Duplicate"],
                550.0,
                RecommendedAction::Review,
            ),
            analysis_source: None,
            created_at: at(2023, 11, 2, 9, 0),
            updated_at: at(2023, 11, 2, 9, 5),
        },
        Invoice {
            id: "inv-3".to_string(),
            org_id: ORG_ID.to_string(),
            vendor_id: "vend-3".to_string(),
            property_id: "prop-3".to_string(),
            work_order_id: None,
            invoice_number: "HVAC-451".to_string(),
            date: at(2023, 11, 10, 0, 0),
            due_date: None,
            subtotal: 120.0,
            tax: 0.0,
            total_amount: 120.0,
            status: InvoiceStatus::Approved,
            file_url: "/invoices/sample3.pdf".to_string(),
            line_items: vec![item("li-5", "Annual AC Maintenance & Tuneup", 120.0)],
            analysis: analysis(
                98.0,
                "Standard preventive maintenance pricing. Vendor pricing matches baseline.",
                &[],
                0.0,
                RecommendedAction::Approve,
            ),
            analysis_source: None,
            created_at: at(2023, 11, 11, 8, 0),
            updated_at: at(2023, 11, 11, 8, 30),
        },
        Invoice {
            id: "inv-4".to_string(),
            org_id: ORG_ID.to_string(),
            vendor_id: "vend-1".to_string(),
            property_id: "prop-2".to_string(),
            work_order_id: None,
            invoice_number: "RR-2023-045".to_string(),
            date: at(2023, 11, 15, 0, 0),
            due_date: None,
            subtotal: 380.0,
            tax: 0.0,
            total_amount: 380.0,
            status: InvoiceStatus::Approved,
            file_url: "/invoices/sample4.pdf".to_string(),
            line_items: vec![
                item("li-6", "Toilet Tank Repair - Replace flapper", 180.0),
                item("li-7", "Faucet Cartridge Replacement", 200.0),
            ],
            analysis: analysis(
                90.0,
                "Standard plumbing repair pricing from preferred vendor.",
                &[],
                0.0,
                RecommendedAction::Approve,
            ),
            analysis_source: None,
            created_at: at(2023, 11, 16, 11, 0),
            updated_at: at(2023, 11, 16, 11, 20),
        },
        Invoice {
            id: "inv-5".to_string(),
            org_id: ORG_ID.to_string(),
            vendor_id: "vend-2".to_string(),
            property_id: "prop-1".to_string(),
            work_order_id: None,
            invoice_number: "BF-1003".to_string(),
            date: at(2023, 11, 20, 0, 0),
            due_date: None,
            subtotal: 325.0,
            tax: 0.0,
            total_amount: 325.0,
            status: InvoiceStatus::Disputed,
            file_url: "/invoices/sample5.pdf".to_string(),
            line_items: vec![
                flagged(
                    item("li-8", "Door Frame Repair", 225.0),
                    "Price exceeds baseline by 200%",
                    75.0,
                    200.0,
                ),
                flagged(
                    item("li-9", "Trip Charge", 100.0),
                    "Unexpected fee not in contract",
                    0.0,
                    100.0,
                ),
            ],
            analysis: analysis(
                25.0,
                "Multiple pricing violations detected. Recommend disputing this invoice and considering alternative vendors.",
                &["Excessive Markup", "Uncontracted Fee", "Poor Value"],
                250.0,
                RecommendedAction::Dispute,
            ),
            analysis_source: None,
            created_at: at(2023, 11, 21, 13, 0),
            updated_at: at(2023, 11, 21, 15, 0),
        },
    ]
}
