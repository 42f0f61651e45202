//! View construction: turn a record set into a rendering instruction set.
//!
//! `build_view` is pure. Aggregation happens here, fresh from the full
//! record set on every call; nothing is persisted or incrementally updated.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::format::format_currency;

use super::types::InvestmentRecord;

/// Color token selected by the sign of a gain or net figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tone {
    Success,
    Danger,
}

/// One rendered investment card.
#[derive(Debug, Clone, Serialize)]
pub struct CardView {
    /// Parameter for the card's delete action.
    pub id: i64,
    pub name: String,
    pub kind: String,
    pub invested: String,
    pub current: String,
    /// "Gain" when the gain is non-negative, "Loss" otherwise.
    pub gain_label: &'static str,
    /// Formatted absolute value of the gain.
    pub gain_amount: String,
    pub gain_tone: Tone,
}

/// Aggregate totals over the full record set.
#[derive(Debug, Clone, Serialize)]
pub struct TotalsView {
    pub invested: String,
    pub value: String,
    pub net: String,
    pub net_tone: Tone,
}

/// Rendering instruction set for one read/render cycle.
///
/// The empty variant carries no totals: a renderer keeps whatever totals it
/// last showed, which is the documented behavior of the empty branch.
#[derive(Debug, Clone, Serialize)]
pub enum InvestmentsView {
    Empty,
    Populated {
        cards: Vec<CardView>,
        totals: TotalsView,
    },
}

/// Where a built view gets drawn. The view-model renders through this seam
/// so tests can capture views with an in-memory fake.
pub trait RenderTarget {
    fn render(&self, view: &InvestmentsView);
}

pub fn build_view(records: &[InvestmentRecord]) -> InvestmentsView {
    if records.is_empty() {
        return InvestmentsView::Empty;
    }

    let mut total_invested = Decimal::ZERO;
    let mut total_value = Decimal::ZERO;

    let cards: Vec<CardView> = records
        .iter()
        .map(|record| {
            total_invested += record.amount;
            total_value += record.current_val;

            let gain = record.gain();
            let (gain_label, gain_tone) = if gain >= Decimal::ZERO {
                ("Gain", Tone::Success)
            } else {
                ("Loss", Tone::Danger)
            };

            CardView {
                id: record.id,
                name: record.name.clone(),
                kind: record.kind.clone(),
                invested: format_currency(record.amount),
                current: format_currency(record.current_val),
                gain_label,
                gain_amount: format_currency(gain.abs()),
                gain_tone,
            }
        })
        .collect();

    let net = total_value - total_invested;
    let totals = TotalsView {
        invested: format_currency(total_invested),
        value: format_currency(total_value),
        net: format_currency(net),
        net_tone: if net >= Decimal::ZERO {
            Tone::Success
        } else {
            Tone::Danger
        },
    };

    InvestmentsView::Populated { cards, totals }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn record(id: i64, amount: Decimal, current_val: Decimal) -> InvestmentRecord {
        InvestmentRecord {
            id,
            name: format!("inv-{id}"),
            kind: "Stocks".to_string(),
            amount,
            current_val,
            invest_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            note: None,
        }
    }

    #[test]
    fn empty_set_builds_empty_state_without_totals() {
        assert!(matches!(build_view(&[]), InvestmentsView::Empty));
    }

    #[test]
    fn totals_are_sums_over_the_record_set() {
        let view = build_view(&[
            record(1, dec!(10000), dec!(12000)),
            record(2, dec!(5000), dec!(4000)),
        ]);
        let InvestmentsView::Populated { totals, cards } = view else {
            panic!("expected populated view");
        };

        assert_eq!(cards.len(), 2);
        assert_eq!(totals.invested, "₹15,000.00");
        assert_eq!(totals.value, "₹16,000.00");
        assert_eq!(totals.net, "₹1,000.00");
        assert_eq!(totals.net_tone, Tone::Success);
    }

    #[test]
    fn positive_gain_gets_gain_label_and_success_tone() {
        let view = build_view(&[record(1, dec!(10000), dec!(12000))]);
        let InvestmentsView::Populated { cards, .. } = view else {
            panic!("expected populated view");
        };

        assert_eq!(cards[0].gain_label, "Gain");
        assert_eq!(cards[0].gain_amount, "₹2,000.00");
        assert_eq!(cards[0].gain_tone, Tone::Success);
    }

    #[test]
    fn negative_gain_shows_loss_with_absolute_magnitude() {
        let view = build_view(&[record(1, dec!(5000), dec!(4000))]);
        let InvestmentsView::Populated { cards, totals } = view else {
            panic!("expected populated view");
        };

        assert_eq!(cards[0].gain_label, "Loss");
        assert_eq!(cards[0].gain_amount, "₹1,000.00");
        assert_eq!(cards[0].gain_tone, Tone::Danger);
        assert_eq!(totals.net_tone, Tone::Danger);
    }

    #[test]
    fn zero_gain_counts_as_gain() {
        let view = build_view(&[record(1, dec!(5000), dec!(5000))]);
        let InvestmentsView::Populated { cards, totals } = view else {
            panic!("expected populated view");
        };

        assert_eq!(cards[0].gain_label, "Gain");
        assert_eq!(cards[0].gain_amount, "₹0.00");
        assert_eq!(totals.net_tone, Tone::Success);
    }

    #[test]
    fn cards_carry_delete_parameters_in_input_order() {
        let view = build_view(&[
            record(9, dec!(1), dec!(1)),
            record(4, dec!(1), dec!(1)),
        ]);
        let InvestmentsView::Populated { cards, .. } = view else {
            panic!("expected populated view");
        };

        assert_eq!(cards.iter().map(|c| c.id).collect::<Vec<_>>(), vec![9, 4]);
    }
}
