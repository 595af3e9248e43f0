//! Unauthenticated viewer endpoints.
//!
//! Reached after a successful code validation; gated only by knowledge of the
//! resource id, which the validate endpoint hands out. No session checks here
//! by design.

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::error::PortalError;
use crate::handlers::invoice::InvoiceResponse;
use crate::handlers::proposal::ProposalResponse;
use crate::state::AppState;
use crate::usecase::invoice::GetInvoiceUseCase;
use crate::usecase::proposal::GetProposalUseCase;

// ── GET /public/proposals/{id} ───────────────────────────────────────────────

pub async fn get_public_proposal(
    State(state): State<AppState>,
    Path(proposal_id): Path<Uuid>,
) -> Result<Json<ProposalResponse>, PortalError> {
    let usecase = GetProposalUseCase {
        proposals: state.proposal_repo(),
    };
    let proposal = usecase.execute(proposal_id).await?;
    Ok(Json(proposal.into()))
}

// ── GET /public/invoices/{id} ────────────────────────────────────────────────

pub async fn get_public_invoice(
    State(state): State<AppState>,
    Path(invoice_id): Path<Uuid>,
) -> Result<Json<InvoiceResponse>, PortalError> {
    let usecase = GetInvoiceUseCase {
        invoices: state.invoice_repo(),
    };
    let out = usecase.execute(invoice_id).await?;
    Ok(Json(InvoiceResponse::new(out.invoice, out.items)))
}
