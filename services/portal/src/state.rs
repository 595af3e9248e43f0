use sea_orm::DatabaseConnection;

use portico_session::identity::SessionSecret;

use crate::infra::db::{DbAccessCodeRepository, DbInvoiceRepository, DbProposalRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
}

impl AppState {
    pub fn access_code_repo(&self) -> DbAccessCodeRepository {
        DbAccessCodeRepository {
            db: self.db.clone(),
        }
    }

    pub fn proposal_repo(&self) -> DbProposalRepository {
        DbProposalRepository {
            db: self.db.clone(),
        }
    }

    pub fn invoice_repo(&self) -> DbInvoiceRepository {
        DbInvoiceRepository {
            db: self.db.clone(),
        }
    }
}

impl SessionSecret for AppState {
    fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }
}
