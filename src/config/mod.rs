pub mod branch;
pub mod catalog;
pub mod shift;
pub mod status;

pub use branch::{Branch, BranchRegistry};
pub use catalog::{Catalog, ClientAccount, CompanyProfile, Courier, PaymentMethod, Product, Zone};
pub use shift::{Shift, ShiftRegistry};
pub use status::{NotifyPrefs, Status, StatusPatch, StatusRegistry};
