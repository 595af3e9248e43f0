use sea_orm_migration::prelude::*;

mod m20260401_000001_create_proposals;
mod m20260401_000002_create_invoices;
mod m20260401_000003_create_invoice_items;
mod m20260401_000004_create_access_codes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260401_000001_create_proposals::Migration),
            Box::new(m20260401_000002_create_invoices::Migration),
            Box::new(m20260401_000003_create_invoice_items::Migration),
            Box::new(m20260401_000004_create_access_codes::Migration),
        ]
    }
}

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
