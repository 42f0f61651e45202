//! Investment record and creation payload types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One saved investment, as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentRecord {
    /// Backend-assigned id, immutable once created.
    pub id: i64,
    pub name: String,
    /// Free-form category, e.g. "Mutual Fund" or "FD".
    #[serde(rename = "type")]
    pub kind: String,
    /// Invested principal.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Current market value; may be below, equal to, or above `amount`.
    #[serde(with = "rust_decimal::serde::float")]
    pub current_val: Decimal,
    pub invest_date: NaiveDate,
    #[serde(default)]
    pub note: Option<String>,
}

impl InvestmentRecord {
    /// Derived, never stored.
    pub fn gain(&self) -> Decimal {
        self.current_val - self.amount
    }
}

/// Client-side creation input, before validation.
#[derive(Debug, Clone, Default)]
pub struct InvestmentDraft {
    pub name: String,
    pub kind: String,
    pub amount: Decimal,
    /// Defaults to `amount` when absent, matching the backend's own default.
    pub current_val: Option<Decimal>,
    pub invest_date: Option<NaiveDate>,
    pub note: String,
}

impl InvestmentDraft {
    /// Check the required fields and produce the creation payload.
    ///
    /// Name, amount, and invest date must all be present and non-zero; the
    /// failure message is surfaced to the user as a notification, so it is
    /// a single human-readable line rather than a field list.
    pub fn validate(self) -> std::result::Result<NewInvestment, String> {
        let name = self.name.trim().to_string();
        match self.invest_date {
            Some(invest_date) if !name.is_empty() && self.amount > Decimal::ZERO => {
                Ok(NewInvestment {
                    current_val: self.current_val.unwrap_or(self.amount),
                    invest_date,
                    name,
                    kind: self.kind,
                    amount: self.amount,
                    note: self.note,
                })
            }
            _ => Err("Name, amount and invest date are required".to_string()),
        }
    }
}

/// Creation payload sent to `POST /api/investments`.
#[derive(Debug, Clone, Serialize)]
pub struct NewInvestment {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Money fields go over the wire as JSON numbers, like the backend's
    /// own responses.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub current_val: Decimal,
    pub invest_date: NaiveDate,
    pub note: String,
}
