mod helpers;

mod invoice_test;
mod proposal_test;
