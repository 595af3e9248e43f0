use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use portico_session::identity::StaffIdentity;

use crate::domain::types::Proposal;
use crate::error::PortalError;
use crate::handlers::access::AccessCodeSummary;
use crate::state::AppState;
use crate::usecase::proposal::{
    CreateProposalInput, CreateProposalUseCase, DeleteProposalUseCase, GetProposalUseCase,
};

#[derive(Serialize)]
pub struct ProposalResponse {
    pub id: Uuid,
    pub client_name: String,
    pub title: String,
    pub body: String,
    #[serde(serialize_with = "portico_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Proposal> for ProposalResponse {
    fn from(proposal: Proposal) -> Self {
        Self {
            id: proposal.id,
            client_name: proposal.client_name,
            title: proposal.title,
            body: proposal.body,
            created_at: proposal.created_at,
        }
    }
}

// ── POST /proposals ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateProposalRequest {
    pub client_name: String,
    pub title: String,
    pub body: String,
}

#[derive(Serialize)]
pub struct CreateProposalResponse {
    #[serde(flatten)]
    pub proposal: ProposalResponse,
    pub access_code: Option<AccessCodeSummary>,
}

pub async fn create_proposal(
    _identity: StaffIdentity,
    State(state): State<AppState>,
    Json(body): Json<CreateProposalRequest>,
) -> Result<(StatusCode, Json<CreateProposalResponse>), PortalError> {
    let usecase = CreateProposalUseCase {
        proposals: state.proposal_repo(),
        access_codes: state.access_code_repo(),
    };
    let out = usecase
        .execute(CreateProposalInput {
            client_name: body.client_name,
            title: body.title,
            body: body.body,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateProposalResponse {
            proposal: out.proposal.into(),
            access_code: out.access_code.map(Into::into),
        }),
    ))
}

// ── GET /proposals/{id} ──────────────────────────────────────────────────────

pub async fn get_proposal(
    _identity: StaffIdentity,
    State(state): State<AppState>,
    Path(proposal_id): Path<Uuid>,
) -> Result<Json<ProposalResponse>, PortalError> {
    let usecase = GetProposalUseCase {
        proposals: state.proposal_repo(),
    };
    let proposal = usecase.execute(proposal_id).await?;
    Ok(Json(proposal.into()))
}

// ── DELETE /proposals/{id} ───────────────────────────────────────────────────

pub async fn delete_proposal(
    _identity: StaffIdentity,
    State(state): State<AppState>,
    Path(proposal_id): Path<Uuid>,
) -> Result<StatusCode, PortalError> {
    let usecase = DeleteProposalUseCase {
        proposals: state.proposal_repo(),
        access_codes: state.access_code_repo(),
    };
    usecase.execute(proposal_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
