use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, QueryFilter, TransactionTrait,
};
use uuid::Uuid;

use portico_portal_schema::{access_codes, invoice_items, invoices, proposals};

use crate::domain::repository::{AccessCodeRepository, InvoiceRepository, ProposalRepository};
use crate::domain::types::{AccessCode, Invoice, InvoiceItem, Proposal, ResourceRef};
use crate::error::PortalError;

// ── AccessCode repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAccessCodeRepository {
    pub db: DatabaseConnection,
}

impl AccessCodeRepository for DbAccessCodeRepository {
    async fn insert(&self, code: &AccessCode) -> Result<(), PortalError> {
        let (proposal_id, invoice_id) = resource_columns(code.resource);
        access_codes::ActiveModel {
            id: Set(code.id),
            code: Set(code.code.clone()),
            proposal_id: Set(proposal_id),
            invoice_id: Set(invoice_id),
            client_name: Set(code.client_name.clone()),
            expires_at: Set(code.expires_at),
            created_at: Set(code.created_at),
        }
        .insert(&self.db)
        .await
        .context("insert access code")?;
        Ok(())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<AccessCode>, PortalError> {
        let model = access_codes::Entity::find()
            .filter(access_codes::Column::Code.eq(code))
            .one(&self.db)
            .await
            .context("find access code by code")?;
        model.map(access_code_from_model).transpose()
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), PortalError> {
        // Zero rows affected is fine — a concurrent validation got there first.
        access_codes::Entity::delete_many()
            .filter(access_codes::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("delete access code by id")?;
        Ok(())
    }

    async fn delete_by_resource(&self, resource: ResourceRef) -> Result<(), PortalError> {
        let query = match resource {
            ResourceRef::Proposal(id) => access_codes::Entity::delete_many()
                .filter(access_codes::Column::ProposalId.eq(id)),
            ResourceRef::Invoice(id) => access_codes::Entity::delete_many()
                .filter(access_codes::Column::InvoiceId.eq(id)),
        };
        query
            .exec(&self.db)
            .await
            .context("delete access codes by resource")?;
        Ok(())
    }
}

/// Split the tagged reference into the two nullable columns.
fn resource_columns(resource: ResourceRef) -> (Option<Uuid>, Option<Uuid>) {
    match resource {
        ResourceRef::Proposal(id) => (Some(id), None),
        ResourceRef::Invoice(id) => (None, Some(id)),
    }
}

/// Rebuild the tagged reference from the two nullable columns. A row with
/// neither column populated indicates a producer bug and is rejected as
/// corrupt rather than mapped.
fn access_code_from_model(model: access_codes::Model) -> Result<AccessCode, PortalError> {
    let resource = match (model.proposal_id, model.invoice_id) {
        (Some(id), _) => ResourceRef::Proposal(id),
        (None, Some(id)) => ResourceRef::Invoice(id),
        (None, None) => {
            tracing::error!(access_code_id = %model.id, "access code row references no resource");
            return Err(PortalError::CorruptAccessCode);
        }
    };
    Ok(AccessCode {
        id: model.id,
        code: model.code,
        resource,
        client_name: model.client_name,
        expires_at: model.expires_at,
        created_at: model.created_at,
    })
}

// ── Proposal repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProposalRepository {
    pub db: DatabaseConnection,
}

impl ProposalRepository for DbProposalRepository {
    async fn create(&self, proposal: &Proposal) -> Result<(), PortalError> {
        proposals::ActiveModel {
            id: Set(proposal.id),
            client_name: Set(proposal.client_name.clone()),
            title: Set(proposal.title.clone()),
            body: Set(proposal.body.clone()),
            created_at: Set(proposal.created_at),
        }
        .insert(&self.db)
        .await
        .context("create proposal")?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Proposal>, PortalError> {
        let model = proposals::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find proposal by id")?;
        Ok(model.map(proposal_from_model))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, PortalError> {
        let result = proposals::Entity::delete_many()
            .filter(proposals::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("delete proposal")?;
        Ok(result.rows_affected > 0)
    }
}

fn proposal_from_model(model: proposals::Model) -> Proposal {
    Proposal {
        id: model.id,
        client_name: model.client_name,
        title: model.title,
        body: model.body,
        created_at: model.created_at,
    }
}

// ── Invoice repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbInvoiceRepository {
    pub db: DatabaseConnection,
}

impl InvoiceRepository for DbInvoiceRepository {
    async fn create_with_items(
        &self,
        invoice: &Invoice,
        items: &[InvoiceItem],
    ) -> Result<(), PortalError> {
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                let invoice = invoice.clone();
                let items = items.to_vec();
                Box::pin(async move {
                    insert_invoice(txn, &invoice).await?;
                    for item in &items {
                        insert_invoice_item(txn, item).await?;
                    }
                    Ok(())
                })
            })
            .await
            .context("create invoice with items")?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Invoice>, PortalError> {
        let model = invoices::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find invoice by id")?;
        Ok(model.map(invoice_from_model))
    }

    async fn list_items(&self, invoice_id: Uuid) -> Result<Vec<InvoiceItem>, PortalError> {
        let models = invoice_items::Entity::find()
            .filter(invoice_items::Column::InvoiceId.eq(invoice_id))
            .all(&self.db)
            .await
            .context("list invoice items")?;
        Ok(models.into_iter().map(invoice_item_from_model).collect())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, PortalError> {
        // Line items are removed by the FK cascade.
        let result = invoices::Entity::delete_many()
            .filter(invoices::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("delete invoice")?;
        Ok(result.rows_affected > 0)
    }
}

async fn insert_invoice(txn: &DatabaseTransaction, invoice: &Invoice) -> Result<(), sea_orm::DbErr> {
    invoices::ActiveModel {
        id: Set(invoice.id),
        client_name: Set(invoice.client_name.clone()),
        title: Set(invoice.title.clone()),
        total_cents: Set(invoice.total_cents),
        due_date: Set(invoice.due_date),
        created_at: Set(invoice.created_at),
    }
    .insert(txn)
    .await?;
    Ok(())
}

async fn insert_invoice_item(
    txn: &DatabaseTransaction,
    item: &InvoiceItem,
) -> Result<(), sea_orm::DbErr> {
    invoice_items::ActiveModel {
        id: Set(item.id),
        invoice_id: Set(item.invoice_id),
        description: Set(item.description.clone()),
        quantity: Set(item.quantity),
        unit_price_cents: Set(item.unit_price_cents),
    }
    .insert(txn)
    .await?;
    Ok(())
}

fn invoice_from_model(model: invoices::Model) -> Invoice {
    Invoice {
        id: model.id,
        client_name: model.client_name,
        title: model.title,
        total_cents: model.total_cents,
        due_date: model.due_date,
        created_at: model.created_at,
    }
}

fn invoice_item_from_model(model: invoice_items::Model) -> InvoiceItem {
    InvoiceItem {
        id: model.id,
        invoice_id: model.invoice_id,
        description: model.description,
        quantity: model.quantity,
        unit_price_cents: model.unit_price_cents,
    }
}
