use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;

use crate::investments::display::TermRenderer;
use crate::investments::{InvestmentDraft, InvestmentsService, ADD_OVERLAY};
use crate::transport::ApiClient;
use crate::ui::{TermUi, UiHandle};

#[derive(Args)]
pub struct AddArgs {
    /// Display name for the investment
    #[arg(long)]
    pub name: String,

    /// Category, e.g. "Mutual Fund" or "FD"
    #[arg(long, default_value = "")]
    pub kind: String,

    /// Invested principal
    #[arg(long)]
    pub amount: Decimal,

    /// Current market value (defaults to the invested amount)
    #[arg(long)]
    pub current_val: Option<Decimal>,

    /// Investment date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Free-text note
    #[arg(long, default_value = "")]
    pub note: String,
}

pub async fn execute(api: &ApiClient, args: AddArgs) -> Result<()> {
    let draft = InvestmentDraft {
        name: args.name,
        kind: args.kind,
        amount: args.amount,
        current_val: args.current_val,
        invest_date: args.date,
        note: args.note,
    };

    let ui = TermUi::new(false);
    ui.open_overlay(ADD_OVERLAY);

    let investments = InvestmentsService::new(api, TermRenderer, ui);
    investments.add(draft).await;
    Ok(())
}
