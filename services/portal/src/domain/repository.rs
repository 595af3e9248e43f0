#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{AccessCode, Invoice, InvoiceItem, Proposal, ResourceRef};
use crate::error::PortalError;

/// Repository for share codes.
pub trait AccessCodeRepository: Send + Sync {
    async fn insert(&self, code: &AccessCode) -> Result<(), PortalError>;

    /// Exact, case-sensitive lookup by code string.
    async fn find_by_code(&self, code: &str) -> Result<Option<AccessCode>, PortalError>;

    /// Delete by row id. Deleting an already-removed row is not an error —
    /// concurrent validations may race on lazy cleanup.
    async fn delete_by_id(&self, id: Uuid) -> Result<(), PortalError>;

    /// Delete every code bound to the given resource (resource-deletion cascade).
    async fn delete_by_resource(&self, resource: ResourceRef) -> Result<(), PortalError>;
}

/// Repository for proposals.
pub trait ProposalRepository: Send + Sync {
    async fn create(&self, proposal: &Proposal) -> Result<(), PortalError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Proposal>, PortalError>;

    /// Delete a proposal. Returns `true` if deleted, `false` if not found.
    async fn delete(&self, id: Uuid) -> Result<bool, PortalError>;
}

/// Repository for invoices and their line items.
pub trait InvoiceRepository: Send + Sync {
    /// Insert an invoice and its line items atomically (same transaction).
    async fn create_with_items(
        &self,
        invoice: &Invoice,
        items: &[InvoiceItem],
    ) -> Result<(), PortalError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Invoice>, PortalError>;

    async fn list_items(&self, invoice_id: Uuid) -> Result<Vec<InvoiceItem>, PortalError>;

    /// Delete an invoice (line items go with it). Returns `true` if deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, PortalError>;
}
