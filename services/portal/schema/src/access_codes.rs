use sea_orm::entity::prelude::*;

/// Share code gating public access to one proposal or one invoice.
/// Exactly one of `proposal_id` / `invoice_id` is populated; expired rows are
/// removed lazily when a validation attempt discovers them.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "access_codes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub code: String,
    pub proposal_id: Option<Uuid>,
    pub invoice_id: Option<Uuid>,
    pub client_name: String,
    pub expires_at: chrono::DateTime<chrono::Utc>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
