pub mod board;
pub mod client;
pub mod editing;
pub mod field;
pub mod logistics;
pub mod order;
pub mod pricing;
pub mod record;
pub mod sorting;
pub mod staff;
pub mod store;

pub use board::{kanban_columns, orphaned_orders, DragState, KanbanColumn};
pub use client::{ClientField, ClientRecord};
pub use editing::EditSession;
pub use field::{FieldDef, FieldKind, FieldValue};
pub use logistics::{Shipment, ShipmentField};
pub use order::{Order, OrderField};
pub use pricing::{PricingEntry, PricingField};
pub use record::{Record, RecordId};
pub use sorting::{filter_by_status, search, sort_records, SortOrder, SortSpec};
pub use staff::{StaffField, StaffTask};
pub use store::RecordStore;
