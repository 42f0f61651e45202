//! Investment flows: load, add, delete.
//!
//! Each flow is a linear sequence: orchestrate transport calls, emit
//! feedback through the UI capability, and re-run the read/render cycle
//! after a mutation. Every transport failure funnels into a notification;
//! no flow fails without user-visible feedback.

use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::transport::{ApiClient, TransportError};
use crate::ui::{NoticeKind, UiHandle};

use super::types::{InvestmentDraft, InvestmentRecord};
use super::view::{build_view, RenderTarget};

/// Collection endpoint; single records live at `{COLLECTION_PATH}/{id}`.
pub const COLLECTION_PATH: &str = "/api/investments";

/// Overlay hosting the add form.
pub const ADD_OVERLAY: &str = "add-investment";

pub struct InvestmentsService<'a, R, U> {
    api: &'a ApiClient,
    render: R,
    ui: U,
    /// Load generation counter. A load only renders if no newer load has
    /// started since it began, so a late response from a superseded load
    /// cannot overwrite a newer render.
    generation: AtomicU64,
}

impl<'a, R: RenderTarget, U: UiHandle> InvestmentsService<'a, R, U> {
    pub fn new(api: &'a ApiClient, render: R, ui: U) -> Self {
        Self {
            api,
            render,
            ui,
            generation: AtomicU64::new(0),
        }
    }

    /// The read/render cycle: fetch, aggregate, render. A full re-read
    /// every time; the render target is the only state carried across
    /// cycles.
    pub async fn load(&self) {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(token, "loading investments");

        let records: Vec<InvestmentRecord> = match self.api.get_json(COLLECTION_PATH).await {
            Ok(records) => records,
            Err(err) => return self.report(&err),
        };

        if self.generation.load(Ordering::SeqCst) != token {
            debug!(token, "discarding superseded load");
            return;
        }

        info!(count = records.len(), "rendering investments");
        self.render.render(&build_view(&records));
    }

    /// The create flow. Validation failures surface as a notification and
    /// make no network call; on success the add overlay is closed and the
    /// view refreshed. A rejected create leaves the overlay open so the
    /// user's input survives.
    pub async fn add(&self, draft: InvestmentDraft) {
        let payload = match draft.validate() {
            Ok(payload) => payload,
            Err(message) => {
                warn!(%message, "rejected investment draft");
                return self.ui.notify(&message, NoticeKind::Error);
            }
        };

        let status: Value = match self.api.post_json(COLLECTION_PATH, &payload).await {
            Ok(status) => status,
            Err(err) => return self.report(&err),
        };
        debug!(%status, name = %payload.name, "investment created");

        self.ui.close_overlay(ADD_OVERLAY);
        self.ui.notify("Investment added", NoticeKind::Success);
        self.load().await;
    }

    /// The delete flow. A declined confirmation is a silent no-op with
    /// zero network calls.
    pub async fn delete(&self, id: i64) {
        if !self.ui.confirm("Delete this investment?") {
            debug!(id, "delete declined");
            return;
        }

        let path = format!("{COLLECTION_PATH}/{id}");
        let status: Value = match self.api.delete_json(&path).await {
            Ok(status) => status,
            Err(err) => return self.report(&err),
        };
        debug!(%status, id, "investment deleted");

        self.ui.notify("Investment removed", NoticeKind::Success);
        self.load().await;
    }

    fn report(&self, err: &TransportError) {
        warn!(error = %err, "investments request failed");
        self.ui.notify(&err.to_string(), NoticeKind::Error);
    }
}
