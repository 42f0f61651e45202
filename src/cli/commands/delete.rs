use anyhow::Result;
use clap::Args;

use crate::investments::display::TermRenderer;
use crate::investments::InvestmentsService;
use crate::transport::ApiClient;
use crate::ui::TermUi;

#[derive(Args)]
pub struct DeleteArgs {
    /// Record id
    pub id: i64,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

pub async fn execute(api: &ApiClient, args: DeleteArgs) -> Result<()> {
    let investments = InvestmentsService::new(api, TermRenderer, TermUi::new(args.yes));
    investments.delete(args.id).await;
    Ok(())
}
