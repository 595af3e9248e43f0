use std::sync::{Arc, Mutex};

use chrono::{Duration, Utc};
use uuid::Uuid;

use portico_portal::domain::repository::{
    AccessCodeRepository, InvoiceRepository, ProposalRepository,
};
use portico_portal::domain::types::{
    AccessCode, CODE_TTL_HOURS, Invoice, InvoiceItem, Proposal, ResourceRef,
};
use portico_portal::error::PortalError;

// ── MockAccessCodeRepo ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockAccessCodeRepo {
    pub codes: Arc<Mutex<Vec<AccessCode>>>,
    /// When true, `insert` fails with an internal error.
    pub fail_inserts: bool,
    /// Pretend the next N `find_by_code` lookups hit an existing row,
    /// regardless of the code asked for.
    pub forced_collisions: Arc<Mutex<usize>>,
}

impl MockAccessCodeRepo {
    pub fn new(codes: Vec<AccessCode>) -> Self {
        Self {
            codes: Arc::new(Mutex::new(codes)),
            fail_inserts: false,
            forced_collisions: Arc::new(Mutex::new(0)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn failing() -> Self {
        Self {
            fail_inserts: true,
            ..Self::empty()
        }
    }

    pub fn with_collisions(n: usize) -> Self {
        let repo = Self::empty();
        *repo.forced_collisions.lock().unwrap() = n;
        repo
    }

    /// Shared handle to the internal code list for post-execution inspection.
    pub fn codes_handle(&self) -> Arc<Mutex<Vec<AccessCode>>> {
        Arc::clone(&self.codes)
    }
}

impl AccessCodeRepository for MockAccessCodeRepo {
    async fn insert(&self, code: &AccessCode) -> Result<(), PortalError> {
        if self.fail_inserts {
            return Err(PortalError::Internal(anyhow::anyhow!(
                "mock insert failure"
            )));
        }
        self.codes.lock().unwrap().push(code.clone());
        Ok(())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<AccessCode>, PortalError> {
        {
            let mut collisions = self.forced_collisions.lock().unwrap();
            if *collisions > 0 {
                *collisions -= 1;
                return Ok(Some(test_access_code(ResourceRef::Proposal(
                    Uuid::new_v4(),
                ))));
            }
        }
        Ok(self
            .codes
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.code == code)
            .cloned())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), PortalError> {
        self.codes.lock().unwrap().retain(|c| c.id != id);
        Ok(())
    }

    async fn delete_by_resource(&self, resource: ResourceRef) -> Result<(), PortalError> {
        self.codes.lock().unwrap().retain(|c| c.resource != resource);
        Ok(())
    }
}

// ── MockProposalRepo ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockProposalRepo {
    pub proposals: Arc<Mutex<Vec<Proposal>>>,
}

impl MockProposalRepo {
    pub fn new(proposals: Vec<Proposal>) -> Self {
        Self {
            proposals: Arc::new(Mutex::new(proposals)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }
}

impl ProposalRepository for MockProposalRepo {
    async fn create(&self, proposal: &Proposal) -> Result<(), PortalError> {
        self.proposals.lock().unwrap().push(proposal.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Proposal>, PortalError> {
        Ok(self
            .proposals
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, PortalError> {
        let mut proposals = self.proposals.lock().unwrap();
        let before = proposals.len();
        proposals.retain(|p| p.id != id);
        Ok(proposals.len() < before)
    }
}

// ── MockInvoiceRepo ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockInvoiceRepo {
    pub invoices: Arc<Mutex<Vec<Invoice>>>,
    pub items: Arc<Mutex<Vec<InvoiceItem>>>,
}

impl MockInvoiceRepo {
    pub fn empty() -> Self {
        Self {
            invoices: Arc::new(Mutex::new(vec![])),
            items: Arc::new(Mutex::new(vec![])),
        }
    }
}

impl InvoiceRepository for MockInvoiceRepo {
    async fn create_with_items(
        &self,
        invoice: &Invoice,
        items: &[InvoiceItem],
    ) -> Result<(), PortalError> {
        self.invoices.lock().unwrap().push(invoice.clone());
        self.items.lock().unwrap().extend(items.iter().cloned());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Invoice>, PortalError> {
        Ok(self
            .invoices
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id == id)
            .cloned())
    }

    async fn list_items(&self, invoice_id: Uuid) -> Result<Vec<InvoiceItem>, PortalError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.invoice_id == invoice_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, PortalError> {
        let mut invoices = self.invoices.lock().unwrap();
        let before = invoices.len();
        invoices.retain(|i| i.id != id);
        // FK cascade removes the line items in the real store.
        self.items.lock().unwrap().retain(|i| i.invoice_id != id);
        Ok(invoices.len() < before)
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn test_access_code(resource: ResourceRef) -> AccessCode {
    let now = Utc::now();
    AccessCode {
        id: Uuid::new_v4(),
        code: "aB3dE9fX".to_owned(),
        resource,
        client_name: "Acme Studio".to_owned(),
        expires_at: now + Duration::hours(CODE_TTL_HOURS),
        created_at: now,
    }
}

/// A code whose 24-hour window passed an hour ago.
pub fn expired_access_code(resource: ResourceRef) -> AccessCode {
    let now = Utc::now();
    AccessCode {
        id: Uuid::new_v4(),
        code: "zZ9yY8xX".to_owned(),
        resource,
        client_name: "Acme Studio".to_owned(),
        expires_at: now - Duration::hours(1),
        created_at: now - Duration::hours(CODE_TTL_HOURS + 1),
    }
}

pub fn test_proposal() -> Proposal {
    Proposal {
        id: Uuid::now_v7(),
        client_name: "Acme Studio".to_owned(),
        title: "Site redesign".to_owned(),
        body: "Scope, timeline, and pricing.".to_owned(),
        created_at: Utc::now(),
    }
}
