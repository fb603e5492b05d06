//! Audit logging for Stockroom
//!
//! Preset saves and deletes and completed exports are appended to a JSONL
//! audit log, one `AuditEntry` per line.
//!
//! ```rust,ignore
//! use stockroom::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(
//!     EntityType::Preset,
//!     preset.id.full(),
//!     Some(preset.name.clone()),
//!     &preset,
//! ))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
