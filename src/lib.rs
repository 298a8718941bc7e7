//! Local HTTP bridge to a device's accessibility automation service.
//!
//! The bridge answers a fixed set of query-string commands (`/ping`, `/dump`,
//! `/tap`, `/swipe`, `/input`, `/back`, `/home`, `/wake`) with flat JSON
//! objects. Reads go through [`accessibility::flatten`]; everything else is
//! forwarded to the registered [`accessibility::AutomationService`].

pub mod accessibility;
pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
