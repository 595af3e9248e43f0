use uuid::Uuid;

use portico_portal::domain::types::ResourceRef;
use portico_portal::error::PortalError;
use portico_portal::usecase::invoice::{
    CreateInvoiceInput, CreateInvoiceUseCase, DeleteInvoiceUseCase, GetInvoiceUseCase,
    InvoiceItemInput,
};

use crate::helpers::{MockAccessCodeRepo, MockInvoiceRepo, test_access_code};

fn create_input() -> CreateInvoiceInput {
    CreateInvoiceInput {
        client_name: "Acme Studio".to_owned(),
        title: "March retainer".to_owned(),
        due_date: None,
        items: vec![
            InvoiceItemInput {
                description: "Design hours".to_owned(),
                quantity: 2,
                unit_price_cents: 1_500,
            },
            InvoiceItemInput {
                description: "Hosting".to_owned(),
                quantity: 1,
                unit_price_cents: 5_000,
            },
        ],
    }
}

#[tokio::test]
async fn should_create_invoice_with_items_and_share_code() {
    let invoices = MockInvoiceRepo::empty();
    let access_codes = MockAccessCodeRepo::empty();
    let items_handle = invoices.items.clone();

    let uc = CreateInvoiceUseCase {
        invoices,
        access_codes,
    };
    let out = uc.execute(create_input()).await.unwrap();

    assert_eq!(out.invoice.total_cents, 2 * 1_500 + 5_000);
    assert_eq!(out.items.len(), 2);
    assert!(out.items.iter().all(|i| i.invoice_id == out.invoice.id));
    assert_eq!(items_handle.lock().unwrap().len(), 2);

    let code = out.access_code.expect("creation should mint a share code");
    assert_eq!(code.resource, ResourceRef::Invoice(out.invoice.id));
    assert_eq!(code.resource.kind(), "invoice");
    assert_eq!(code.client_name, out.invoice.client_name);
}

#[tokio::test]
async fn should_create_invoice_even_when_code_issuance_fails() {
    let invoices = MockInvoiceRepo::empty();
    let invoices_handle = invoices.invoices.clone();

    let uc = CreateInvoiceUseCase {
        invoices,
        access_codes: MockAccessCodeRepo::failing(),
    };
    let out = uc.execute(create_input()).await.unwrap();

    assert_eq!(invoices_handle.lock().unwrap().len(), 1);
    assert!(out.access_code.is_none());
}

#[tokio::test]
async fn should_get_invoice_with_items() {
    let invoices = MockInvoiceRepo::empty();
    let create = CreateInvoiceUseCase {
        invoices: invoices.clone(),
        access_codes: MockAccessCodeRepo::empty(),
    };
    let created = create.execute(create_input()).await.unwrap();

    let uc = GetInvoiceUseCase { invoices };
    let out = uc.execute(created.invoice.id).await.unwrap();

    assert_eq!(out.invoice.id, created.invoice.id);
    assert_eq!(out.items.len(), 2);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_invoice() {
    let uc = GetInvoiceUseCase {
        invoices: MockInvoiceRepo::empty(),
    };

    let result = uc.execute(Uuid::now_v7()).await;
    assert!(
        matches!(result, Err(PortalError::InvoiceNotFound)),
        "expected InvoiceNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_delete_invoice_with_items_and_cascade_codes() {
    let invoices = MockInvoiceRepo::empty();
    let create = CreateInvoiceUseCase {
        invoices: invoices.clone(),
        access_codes: MockAccessCodeRepo::empty(),
    };
    let created = create.execute(create_input()).await.unwrap();

    let code = test_access_code(ResourceRef::Invoice(created.invoice.id));
    let access_codes = MockAccessCodeRepo::new(vec![code]);
    let codes_handle = access_codes.codes_handle();
    let items_handle = invoices.items.clone();

    let uc = DeleteInvoiceUseCase {
        invoices,
        access_codes,
    };
    uc.execute(created.invoice.id).await.unwrap();

    assert!(items_handle.lock().unwrap().is_empty());
    assert!(codes_handle.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_return_not_found_when_deleting_unknown_invoice() {
    let uc = DeleteInvoiceUseCase {
        invoices: MockInvoiceRepo::empty(),
        access_codes: MockAccessCodeRepo::empty(),
    };

    let result = uc.execute(Uuid::now_v7()).await;
    assert!(
        matches!(result, Err(PortalError::InvoiceNotFound)),
        "expected InvoiceNotFound, got {result:?}"
    );
}
