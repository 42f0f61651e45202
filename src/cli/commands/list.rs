use anyhow::Result;
use clap::Args;

use crate::investments::display::TermRenderer;
use crate::investments::InvestmentsService;
use crate::transport::ApiClient;
use crate::ui::TermUi;

#[derive(Args)]
pub struct ListArgs {}

pub async fn execute(api: &ApiClient, _args: ListArgs) -> Result<()> {
    let investments = InvestmentsService::new(api, TermRenderer, TermUi::new(false));
    investments.load().await;
    Ok(())
}
