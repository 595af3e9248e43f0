use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Portal service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    #[error("missing code")]
    MissingCode,
    #[error("invalid access code")]
    InvalidCode,
    #[error("access code expired")]
    CodeExpired,
    #[error("access code record is corrupt")]
    CorruptAccessCode,
    #[error("proposal not found")]
    ProposalNotFound,
    #[error("invoice not found")]
    InvoiceNotFound,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl PortalError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingCode => "MISSING_CODE",
            Self::InvalidCode => "INVALID_CODE",
            Self::CodeExpired => "CODE_EXPIRED",
            Self::CorruptAccessCode => "CORRUPT_ACCESS_CODE",
            Self::ProposalNotFound => "PROPOSAL_NOT_FOUND",
            Self::InvoiceNotFound => "INVOICE_NOT_FOUND",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for PortalError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingCode => StatusCode::BAD_REQUEST,
            // An unknown code is an auth failure; an expired one is Gone so the
            // caller can tell "never existed" from "no longer valid".
            Self::InvalidCode => StatusCode::UNAUTHORIZED,
            Self::CodeExpired => StatusCode::GONE,
            Self::ProposalNotFound | Self::InvoiceNotFound => StatusCode::NOT_FOUND,
            Self::CorruptAccessCode | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        // Internal errors need the anyhow chain logged so the root cause is traceable.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
