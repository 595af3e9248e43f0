use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use portico_session::identity::StaffIdentity;

use crate::domain::types::{Invoice, InvoiceItem};
use crate::error::PortalError;
use crate::handlers::access::AccessCodeSummary;
use crate::state::AppState;
use crate::usecase::invoice::{
    CreateInvoiceInput, CreateInvoiceUseCase, DeleteInvoiceUseCase, GetInvoiceUseCase,
    InvoiceItemInput,
};

#[derive(Serialize)]
pub struct InvoiceItemResponse {
    pub id: Uuid,
    pub description: String,
    pub quantity: i32,
    pub unit_price_cents: i64,
}

impl From<InvoiceItem> for InvoiceItemResponse {
    fn from(item: InvoiceItem) -> Self {
        Self {
            id: item.id,
            description: item.description,
            quantity: item.quantity,
            unit_price_cents: item.unit_price_cents,
        }
    }
}

#[derive(Serialize)]
pub struct InvoiceResponse {
    pub id: Uuid,
    pub client_name: String,
    pub title: String,
    pub total_cents: i64,
    #[serde(serialize_with = "portico_core::serde::opt_to_rfc3339_ms")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(serialize_with = "portico_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    pub items: Vec<InvoiceItemResponse>,
}

impl InvoiceResponse {
    pub fn new(invoice: Invoice, items: Vec<InvoiceItem>) -> Self {
        Self {
            id: invoice.id,
            client_name: invoice.client_name,
            title: invoice.title,
            total_cents: invoice.total_cents,
            due_date: invoice.due_date,
            created_at: invoice.created_at,
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

// ── POST /invoices ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct InvoiceItemRequest {
    pub description: String,
    pub quantity: i32,
    pub unit_price_cents: i64,
}

#[derive(Deserialize)]
pub struct CreateInvoiceRequest {
    pub client_name: String,
    pub title: String,
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub items: Vec<InvoiceItemRequest>,
}

#[derive(Serialize)]
pub struct CreateInvoiceResponse {
    #[serde(flatten)]
    pub invoice: InvoiceResponse,
    pub access_code: Option<AccessCodeSummary>,
}

pub async fn create_invoice(
    _identity: StaffIdentity,
    State(state): State<AppState>,
    Json(body): Json<CreateInvoiceRequest>,
) -> Result<(StatusCode, Json<CreateInvoiceResponse>), PortalError> {
    let usecase = CreateInvoiceUseCase {
        invoices: state.invoice_repo(),
        access_codes: state.access_code_repo(),
    };
    let out = usecase
        .execute(CreateInvoiceInput {
            client_name: body.client_name,
            title: body.title,
            due_date: body.due_date,
            items: body
                .items
                .into_iter()
                .map(|item| InvoiceItemInput {
                    description: item.description,
                    quantity: item.quantity,
                    unit_price_cents: item.unit_price_cents,
                })
                .collect(),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateInvoiceResponse {
            invoice: InvoiceResponse::new(out.invoice, out.items),
            access_code: out.access_code.map(Into::into),
        }),
    ))
}

// ── GET /invoices/{id} ───────────────────────────────────────────────────────

pub async fn get_invoice(
    _identity: StaffIdentity,
    State(state): State<AppState>,
    Path(invoice_id): Path<Uuid>,
) -> Result<Json<InvoiceResponse>, PortalError> {
    let usecase = GetInvoiceUseCase {
        invoices: state.invoice_repo(),
    };
    let out = usecase.execute(invoice_id).await?;
    Ok(Json(InvoiceResponse::new(out.invoice, out.items)))
}

// ── DELETE /invoices/{id} ────────────────────────────────────────────────────

pub async fn delete_invoice(
    _identity: StaffIdentity,
    State(state): State<AppState>,
    Path(invoice_id): Path<Uuid>,
) -> Result<StatusCode, PortalError> {
    let usecase = DeleteInvoiceUseCase {
        invoices: state.invoice_repo(),
        access_codes: state.access_code_repo(),
    };
    usecase.execute(invoice_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
