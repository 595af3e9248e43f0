pub mod access;
pub mod invoice;
pub mod proposal;
pub mod public;
