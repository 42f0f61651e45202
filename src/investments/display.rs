//! Terminal renderer for investment views.

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use owo_colors::OwoColorize;

use super::view::{InvestmentsView, RenderTarget, Tone};

/// Renders cards as a table and totals as a footer line.
pub struct TermRenderer;

impl TermRenderer {
    fn toned(text: &str, tone: Tone) -> String {
        match tone {
            Tone::Success => text.green().to_string(),
            Tone::Danger => text.red().to_string(),
        }
    }
}

impl RenderTarget for TermRenderer {
    fn render(&self, view: &InvestmentsView) {
        match view {
            InvestmentsView::Empty => {
                println!("\nNo investments added yet\n");
            }
            InvestmentsView::Populated { cards, totals } => {
                let mut table = Table::new();
                table
                    .load_preset(UTF8_FULL)
                    .set_content_arrangement(ContentArrangement::Dynamic)
                    .set_header(vec!["ID", "Name", "Type", "Invested", "Current", "Gain/Loss"]);

                for card in cards {
                    let gain_line = format!("{}: {}", card.gain_label, card.gain_amount);
                    table.add_row(vec![
                        card.id.to_string(),
                        card.name.clone(),
                        card.kind.clone(),
                        card.invested.clone(),
                        card.current.clone(),
                        Self::toned(&gain_line, card.gain_tone),
                    ]);
                }

                println!("{table}");
                println!(
                    "Invested: {}   Current: {}   Net: {}",
                    totals.invested.bold(),
                    totals.value.bold(),
                    Self::toned(&totals.net, totals.net_tone).bold(),
                );
            }
        }
    }
}
