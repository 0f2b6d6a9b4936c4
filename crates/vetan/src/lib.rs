//! VETAN: internship matching for the PM Internship Scheme for Rural Youth.
//!
//! The crate owns the full match pipeline: an immutable opportunity catalog,
//! a ranking client that consults an external oracle and normalizes whatever
//! comes back, the partitioning of the catalog into recommended and other
//! groups, and the four-stage application wizard that ties it together per
//! session. Presentation is out of scope; everything exposed here is either
//! domain state or a read-only view of it.

pub mod config;
pub mod error;
pub mod localization;
pub mod telemetry;
pub mod workflows;
