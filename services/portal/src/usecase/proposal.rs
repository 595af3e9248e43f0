use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::{AccessCodeRepository, ProposalRepository};
use crate::domain::types::{AccessCode, Proposal, ResourceRef};
use crate::error::PortalError;
use crate::usecase::access_code::issue_access_code;

// ── CreateProposal ───────────────────────────────────────────────────────────

pub struct CreateProposalInput {
    pub client_name: String,
    pub title: String,
    pub body: String,
}

#[derive(Debug)]
pub struct CreateProposalOutput {
    pub proposal: Proposal,
    /// Absent when share-code issuance failed; the proposal itself stands.
    pub access_code: Option<AccessCode>,
}

pub struct CreateProposalUseCase<P, A>
where
    P: ProposalRepository,
    A: AccessCodeRepository,
{
    pub proposals: P,
    pub access_codes: A,
}

impl<P, A> CreateProposalUseCase<P, A>
where
    P: ProposalRepository,
    A: AccessCodeRepository,
{
    pub async fn execute(
        &self,
        input: CreateProposalInput,
    ) -> Result<CreateProposalOutput, PortalError> {
        let proposal = Proposal {
            id: Uuid::now_v7(),
            client_name: input.client_name,
            title: input.title,
            body: input.body,
            created_at: Utc::now(),
        };
        self.proposals.create(&proposal).await?;

        // Code issuance failure is non-fatal: the proposal is already
        // persisted and the response simply carries no code.
        let access_code = match issue_access_code(
            &self.access_codes,
            ResourceRef::Proposal(proposal.id),
            &proposal.client_name,
        )
        .await
        {
            Ok(code) => Some(code),
            Err(e) => {
                tracing::warn!(error = %e, proposal_id = %proposal.id, "failed to issue access code");
                None
            }
        };

        Ok(CreateProposalOutput {
            proposal,
            access_code,
        })
    }
}

// ── GetProposal ──────────────────────────────────────────────────────────────

pub struct GetProposalUseCase<P: ProposalRepository> {
    pub proposals: P,
}

impl<P: ProposalRepository> GetProposalUseCase<P> {
    pub async fn execute(&self, proposal_id: Uuid) -> Result<Proposal, PortalError> {
        self.proposals
            .find_by_id(proposal_id)
            .await?
            .ok_or(PortalError::ProposalNotFound)
    }
}

// ── DeleteProposal ───────────────────────────────────────────────────────────

pub struct DeleteProposalUseCase<P, A>
where
    P: ProposalRepository,
    A: AccessCodeRepository,
{
    pub proposals: P,
    pub access_codes: A,
}

impl<P, A> DeleteProposalUseCase<P, A>
where
    P: ProposalRepository,
    A: AccessCodeRepository,
{
    /// Delete the proposal, then any codes bound to it — a dangling code would
    /// otherwise survive until its next use.
    pub async fn execute(&self, proposal_id: Uuid) -> Result<(), PortalError> {
        if !self.proposals.delete(proposal_id).await? {
            return Err(PortalError::ProposalNotFound);
        }
        self.access_codes
            .delete_by_resource(ResourceRef::Proposal(proposal_id))
            .await
    }
}
