//! Investments view-model: fetch, aggregate, render, mutate, re-fetch.

pub mod display;
pub mod service;
pub mod types;
pub mod view;

pub use service::{InvestmentsService, ADD_OVERLAY, COLLECTION_PATH};
pub use types::{InvestmentDraft, InvestmentRecord, NewInvestment};
pub use view::{build_view, CardView, InvestmentsView, RenderTarget, Tone, TotalsView};
