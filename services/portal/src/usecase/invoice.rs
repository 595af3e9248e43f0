use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::repository::{AccessCodeRepository, InvoiceRepository};
use crate::domain::types::{AccessCode, Invoice, InvoiceItem, ResourceRef};
use crate::error::PortalError;
use crate::usecase::access_code::issue_access_code;

// ── CreateInvoice ────────────────────────────────────────────────────────────

pub struct InvoiceItemInput {
    pub description: String,
    pub quantity: i32,
    pub unit_price_cents: i64,
}

pub struct CreateInvoiceInput {
    pub client_name: String,
    pub title: String,
    pub due_date: Option<DateTime<Utc>>,
    pub items: Vec<InvoiceItemInput>,
}

#[derive(Debug)]
pub struct CreateInvoiceOutput {
    pub invoice: Invoice,
    pub items: Vec<InvoiceItem>,
    /// Absent when share-code issuance failed; the invoice itself stands.
    pub access_code: Option<AccessCode>,
}

pub struct CreateInvoiceUseCase<I, A>
where
    I: InvoiceRepository,
    A: AccessCodeRepository,
{
    pub invoices: I,
    pub access_codes: A,
}

impl<I, A> CreateInvoiceUseCase<I, A>
where
    I: InvoiceRepository,
    A: AccessCodeRepository,
{
    pub async fn execute(
        &self,
        input: CreateInvoiceInput,
    ) -> Result<CreateInvoiceOutput, PortalError> {
        let invoice_id = Uuid::now_v7();
        let items: Vec<InvoiceItem> = input
            .items
            .into_iter()
            .map(|item| InvoiceItem {
                id: Uuid::new_v4(),
                invoice_id,
                description: item.description,
                quantity: item.quantity,
                unit_price_cents: item.unit_price_cents,
            })
            .collect();
        let total_cents = items
            .iter()
            .map(|item| i64::from(item.quantity) * item.unit_price_cents)
            .sum();

        let invoice = Invoice {
            id: invoice_id,
            client_name: input.client_name,
            title: input.title,
            total_cents,
            due_date: input.due_date,
            created_at: Utc::now(),
        };
        self.invoices.create_with_items(&invoice, &items).await?;

        // Code issuance failure is non-fatal: the invoice is already
        // persisted and the response simply carries no code.
        let access_code = match issue_access_code(
            &self.access_codes,
            ResourceRef::Invoice(invoice.id),
            &invoice.client_name,
        )
        .await
        {
            Ok(code) => Some(code),
            Err(e) => {
                tracing::warn!(error = %e, invoice_id = %invoice.id, "failed to issue access code");
                None
            }
        };

        Ok(CreateInvoiceOutput {
            invoice,
            items,
            access_code,
        })
    }
}

// ── GetInvoice ───────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct GetInvoiceOutput {
    pub invoice: Invoice,
    pub items: Vec<InvoiceItem>,
}

pub struct GetInvoiceUseCase<I: InvoiceRepository> {
    pub invoices: I,
}

impl<I: InvoiceRepository> GetInvoiceUseCase<I> {
    pub async fn execute(&self, invoice_id: Uuid) -> Result<GetInvoiceOutput, PortalError> {
        let invoice = self
            .invoices
            .find_by_id(invoice_id)
            .await?
            .ok_or(PortalError::InvoiceNotFound)?;
        let items = self.invoices.list_items(invoice_id).await?;
        Ok(GetInvoiceOutput { invoice, items })
    }
}

// ── DeleteInvoice ────────────────────────────────────────────────────────────

pub struct DeleteInvoiceUseCase<I, A>
where
    I: InvoiceRepository,
    A: AccessCodeRepository,
{
    pub invoices: I,
    pub access_codes: A,
}

impl<I, A> DeleteInvoiceUseCase<I, A>
where
    I: InvoiceRepository,
    A: AccessCodeRepository,
{
    /// Delete the invoice (line items go with it), then any codes bound to it.
    pub async fn execute(&self, invoice_id: Uuid) -> Result<(), PortalError> {
        if !self.invoices.delete(invoice_id).await? {
            return Err(PortalError::InvoiceNotFound);
        }
        self.access_codes
            .delete_by_resource(ResourceRef::Invoice(invoice_id))
            .await
    }
}
