use chrono::{Duration, Utc};
use rand::RngExt;
use uuid::Uuid;

use crate::domain::repository::AccessCodeRepository;
use crate::domain::types::{AccessCode, CODE_LEN, CODE_TTL_HOURS, MAX_CODE_ATTEMPTS, ResourceRef};
use crate::error::PortalError;

/// Charset for generating share codes (mixed-case alphanumeric, 62 symbols).
/// 62^8 ≈ 2.2e14 — sized for a 24-hour bearer code guarding business
/// documents, not a long-lived cryptographic secret.
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

fn generate_code() -> String {
    let mut rng = rand::rng();
    (0..CODE_LEN)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

/// Mint and persist a share code bound to `resource`, valid for 24 hours.
///
/// Generated codes carry no uniqueness guarantee, so the issue path checks for
/// an existing row and regenerates on collision, up to [`MAX_CODE_ATTEMPTS`].
/// Returns the full record including the code for out-of-band sharing.
pub async fn issue_access_code<A: AccessCodeRepository>(
    access_codes: &A,
    resource: ResourceRef,
    client_name: &str,
) -> Result<AccessCode, PortalError> {
    for _ in 0..MAX_CODE_ATTEMPTS {
        let code = generate_code();
        if access_codes.find_by_code(&code).await?.is_some() {
            continue;
        }

        let now = Utc::now();
        let record = AccessCode {
            id: Uuid::new_v4(),
            code,
            resource,
            client_name: client_name.to_owned(),
            expires_at: now + Duration::hours(CODE_TTL_HOURS),
            created_at: now,
        };
        access_codes.insert(&record).await?;
        return Ok(record);
    }

    Err(PortalError::Internal(anyhow::anyhow!(
        "no collision-free access code after {MAX_CODE_ATTEMPTS} attempts"
    )))
}

// ── ValidateAccessCode (public gateway) ──────────────────────────────────────

pub struct ValidateAccessCodeInput {
    pub code: String,
}

#[derive(Debug)]
pub struct ValidateAccessCodeOutput {
    pub resource: ResourceRef,
}

pub struct ValidateAccessCodeUseCase<A: AccessCodeRepository> {
    pub access_codes: A,
}

impl<A: AccessCodeRepository> ValidateAccessCodeUseCase<A> {
    /// Resolve a presented code to the resource it unlocks.
    ///
    /// Expiry is enforced lazily: a validation attempt that discovers an
    /// expired row deletes it before reporting [`PortalError::CodeExpired`].
    /// An active code is left untouched — it stays valid until expiry.
    pub async fn execute(
        &self,
        input: ValidateAccessCodeInput,
    ) -> Result<ValidateAccessCodeOutput, PortalError> {
        if input.code.is_empty() {
            return Err(PortalError::MissingCode);
        }

        let record = self
            .access_codes
            .find_by_code(&input.code)
            .await?
            .ok_or(PortalError::InvalidCode)?;

        if record.is_expired(Utc::now()) {
            self.access_codes.delete_by_id(record.id).await?;
            return Err(PortalError::CodeExpired);
        }

        Ok(ValidateAccessCodeOutput {
            resource: record.resource,
        })
    }
}
