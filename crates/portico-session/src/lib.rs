//! Staff-session types for the Portico portal.
//!
//! The portal only *validates* staff tokens — issuance lives in the external
//! identity service. Provides JWT validation and the `StaffIdentity` extractor
//! that gates the staff-only routes.

pub mod identity;
pub mod token;
