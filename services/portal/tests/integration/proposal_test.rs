use chrono::Duration;
use uuid::Uuid;

use portico_portal::domain::types::{CODE_LEN, CODE_TTL_HOURS, ResourceRef};
use portico_portal::error::PortalError;
use portico_portal::usecase::access_code::{ValidateAccessCodeInput, ValidateAccessCodeUseCase};
use portico_portal::usecase::proposal::{
    CreateProposalInput, CreateProposalUseCase, DeleteProposalUseCase, GetProposalUseCase,
};

use crate::helpers::{MockAccessCodeRepo, MockProposalRepo, test_access_code, test_proposal};

fn create_input() -> CreateProposalInput {
    CreateProposalInput {
        client_name: "Acme Studio".to_owned(),
        title: "Site redesign".to_owned(),
        body: "Scope, timeline, and pricing.".to_owned(),
    }
}

#[tokio::test]
async fn should_create_proposal_with_share_code() {
    let proposals = MockProposalRepo::empty();
    let access_codes = MockAccessCodeRepo::empty();
    let proposals_handle = proposals.proposals.clone();

    let uc = CreateProposalUseCase {
        proposals,
        access_codes,
    };
    let out = uc.execute(create_input()).await.unwrap();

    assert_eq!(proposals_handle.lock().unwrap().len(), 1);
    assert_eq!(out.proposal.client_name, "Acme Studio");

    let code = out.access_code.expect("creation should mint a share code");
    assert_eq!(code.code.len(), CODE_LEN);
    assert_eq!(code.resource, ResourceRef::Proposal(out.proposal.id));
    assert_eq!(code.client_name, out.proposal.client_name);
    assert_eq!(
        code.expires_at - code.created_at,
        Duration::hours(CODE_TTL_HOURS)
    );
}

#[tokio::test]
async fn should_create_proposal_even_when_code_issuance_fails() {
    let proposals = MockProposalRepo::empty();
    let proposals_handle = proposals.proposals.clone();

    let uc = CreateProposalUseCase {
        proposals,
        access_codes: MockAccessCodeRepo::failing(),
    };
    let out = uc.execute(create_input()).await.unwrap();

    // The proposal stands; only the code is missing from the response.
    assert_eq!(proposals_handle.lock().unwrap().len(), 1);
    assert!(out.access_code.is_none());
}

#[tokio::test]
async fn should_get_proposal_by_id() {
    let proposal = test_proposal();
    let uc = GetProposalUseCase {
        proposals: MockProposalRepo::new(vec![proposal.clone()]),
    };

    let found = uc.execute(proposal.id).await.unwrap();
    assert_eq!(found.id, proposal.id);
    assert_eq!(found.title, proposal.title);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_proposal() {
    let uc = GetProposalUseCase {
        proposals: MockProposalRepo::empty(),
    };

    let result = uc.execute(Uuid::now_v7()).await;
    assert!(
        matches!(result, Err(PortalError::ProposalNotFound)),
        "expected ProposalNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_delete_proposal_and_cascade_its_codes() {
    let proposal = test_proposal();
    let code = test_access_code(ResourceRef::Proposal(proposal.id));
    let proposals = MockProposalRepo::new(vec![proposal.clone()]);
    let access_codes = MockAccessCodeRepo::new(vec![code.clone()]);
    let codes_handle = access_codes.codes_handle();

    let uc = DeleteProposalUseCase {
        proposals,
        access_codes: access_codes.clone(),
    };
    uc.execute(proposal.id).await.unwrap();

    assert!(codes_handle.lock().unwrap().is_empty());

    // A deleted resource leaves no code behind to validate.
    let validate = ValidateAccessCodeUseCase { access_codes };
    let result = validate
        .execute(ValidateAccessCodeInput { code: code.code })
        .await;
    assert!(
        matches!(result, Err(PortalError::InvalidCode)),
        "expected InvalidCode, got {result:?}"
    );
}

#[tokio::test]
async fn should_return_not_found_when_deleting_unknown_proposal() {
    let uc = DeleteProposalUseCase {
        proposals: MockProposalRepo::empty(),
        access_codes: MockAccessCodeRepo::empty(),
    };

    let result = uc.execute(Uuid::now_v7()).await;
    assert!(
        matches!(result, Err(PortalError::ProposalNotFound)),
        "expected ProposalNotFound, got {result:?}"
    );
}
