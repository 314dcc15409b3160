//! # Camelia Core
//!
//! Core business logic and domain models for the Camelia flower shop back
//! office.
//!
//! This crate provides the fundamental types and operations behind the
//! administrative dashboard: the five record stores (orders, pricing,
//! clients, logistics, staff), the status/branch/shift registries with their
//! rename cascades, the kanban board projection and the table sort/edit
//! helpers, without any dependency on specific UI implementations. All state
//! is in-memory and lives for a single page session.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod seed;

// Re-export commonly used types
pub use app::Dashboard;
pub use config::{
    Branch, BranchRegistry, Catalog, NotifyPrefs, Shift, ShiftRegistry, Status, StatusPatch,
    StatusRegistry,
};
pub use domain::{
    ClientRecord, DragState, EditSession, FieldKind, FieldValue, KanbanColumn, Order, OrderField,
    PricingEntry, Record, RecordId, RecordStore, Shipment, SortOrder, SortSpec, StaffTask,
};
pub use error::{CameliaError, Result};
