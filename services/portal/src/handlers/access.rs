use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::AccessCode;
use crate::error::PortalError;
use crate::state::AppState;
use crate::usecase::access_code::{ValidateAccessCodeInput, ValidateAccessCodeUseCase};

/// Share-code fields exposed on creation responses.
#[derive(Debug, Serialize)]
pub struct AccessCodeSummary {
    pub code: String,
    #[serde(serialize_with = "portico_core::serde::to_rfc3339_ms")]
    pub expires_at: DateTime<Utc>,
}

impl From<AccessCode> for AccessCodeSummary {
    fn from(code: AccessCode) -> Self {
        Self {
            code: code.code,
            expires_at: code.expires_at,
        }
    }
}

// ── POST /access/validate ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ValidateCodeRequest {
    pub code: String,
}

#[derive(Serialize)]
pub struct ValidateCodeResponse {
    pub success: bool,
    #[serde(rename = "type")]
    pub resource_type: &'static str,
    pub id: Uuid,
}

/// The one deliberately public entry point: no session, no identity — the code
/// itself is the credential.
pub async fn validate_code(
    State(state): State<AppState>,
    Json(body): Json<ValidateCodeRequest>,
) -> Result<Json<ValidateCodeResponse>, PortalError> {
    let usecase = ValidateAccessCodeUseCase {
        access_codes: state.access_code_repo(),
    };
    let out = usecase
        .execute(ValidateAccessCodeInput { code: body.code })
        .await?;

    Ok(Json(ValidateCodeResponse {
        success: true,
        resource_type: out.resource.kind(),
        id: out.resource.id(),
    }))
}
