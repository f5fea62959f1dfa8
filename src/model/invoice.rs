use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::table::{serialized_fields, Record};

/// One basis point is 0.01%.
const BPS_PER_UNIT: i64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 4] = [
        InvoiceStatus::Draft,
        InvoiceStatus::Sent,
        InvoiceStatus::Paid,
        InvoiceStatus::Overdue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Sent => "sent",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InvoiceStatus::Draft => "Draft",
            InvoiceStatus::Sent => "Sent",
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Overdue => "Overdue",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    pub quantity: u32,
    pub unit_price_cents: i64,
}

impl LineItem {
    pub fn amount_cents(&self) -> i64 {
        i64::from(self.quantity).saturating_mul(self.unit_price_cents)
    }
}

/// A fee invoice. Money is kept in integer cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub number: String,
    pub customer: String,
    pub issued_on: NaiveDate,
    pub due_on: NaiveDate,
    pub status: InvoiceStatus,
    #[serde(default)]
    pub items: Vec<LineItem>,
    /// Tax rate in basis points (825 = 8.25%).
    #[serde(default)]
    pub tax_rate_bps: u32,
    #[serde(default)]
    pub discount_cents: i64,
}

impl Invoice {
    pub fn subtotal_cents(&self) -> i64 {
        self.items
            .iter()
            .map(LineItem::amount_cents)
            .fold(0, i64::saturating_add)
    }

    /// Discount actually applied: never negative and never more than the subtotal.
    pub fn applied_discount_cents(&self) -> i64 {
        self.discount_cents.clamp(0, self.subtotal_cents().max(0))
    }

    pub fn taxable_cents(&self) -> i64 {
        self.subtotal_cents()
            .saturating_sub(self.applied_discount_cents())
    }

    /// Tax on the discounted amount, rounded half up to the cent.
    pub fn tax_cents(&self) -> i64 {
        let raw = self
            .taxable_cents()
            .saturating_mul(i64::from(self.tax_rate_bps));
        raw.saturating_add(BPS_PER_UNIT / 2).div_euclid(BPS_PER_UNIT)
    }

    pub fn total_cents(&self) -> i64 {
        self.taxable_cents().saturating_add(self.tax_cents())
    }
}

impl Record for Invoice {
    fn key(&self) -> String {
        self.id.clone()
    }

    /// Also searchable by the status label and formatted total, e.g. "$1,082.50".
    fn search_fields(&self) -> Vec<String> {
        let mut fields = serialized_fields(self);
        fields.push(self.status.to_string());
        fields.push(format_cents(self.total_cents()));
        fields
    }
}

/// Format cents as dollars with thousands separators: `-$1,234.05`.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let dollars = (abs / 100).to_string();
    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}${}.{:02}", sign, grouped, abs % 100)
}
