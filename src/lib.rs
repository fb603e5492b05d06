//! Stockroom - inventory reports engine
//!
//! The reports subsystem of an inventory administration console: a static
//! catalog of report types and filter fields, synthetic row generation, a
//! memoized search/sort view, saved filter presets and a delayed export flow.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `catalog`: Report types and filter fields
//! - `reports`: Row generation, the visible view and summary stats (`ReportSession`)
//! - `modals`: Preset save/load/delete and the export dialog (`ReportModals`)
//! - `export`: Export jobs and engines
//! - `notify`: Notifications emitted by the modal flows
//! - `models`: Core data models
//! - `storage`: JSON file storage for presets
//! - `audit`: Audit logging system
//! - `config`: Configuration and path management
//! - `display`: Terminal tables
//! - `cli`: Command handlers for the `stockroom` binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use stockroom::notify::NotificationQueue;
//! use stockroom::reports::ReportSession;
//! use stockroom::modals::ReportModals;
//!
//! let mut session = ReportSession::new();
//! session.load_report("inventory-summary")?;
//! session.set_search("steel");
//!
//! let mut modals = ReportModals::new();
//! let mut queue = NotificationQueue::new();
//! modals.presets.set_name("Steel Items");
//! modals.presets.save_preset(session.active_filters(), &mut queue)?;
//! ```

pub mod audit;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod modals;
pub mod models;
pub mod notify;
pub mod reports;
pub mod storage;

pub use error::{StockroomError, StockroomResult};
