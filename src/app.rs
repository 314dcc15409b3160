use crate::config::branch::{Branch, BranchRegistry};
use crate::config::catalog::Catalog;
use crate::config::shift::{Shift, ShiftRegistry};
use crate::config::status::{NotifyPrefs, Status, StatusPatch, StatusRegistry};
use crate::domain::board::{self, DragState, KanbanColumn};
use crate::domain::client::ClientRecord;
use crate::domain::field::FieldValue;
use crate::domain::logistics::Shipment;
use crate::domain::order::{Order, OrderField};
use crate::domain::pricing::PricingEntry;
use crate::domain::record::{Record, RecordId};
use crate::domain::staff::StaffTask;
use crate::domain::store::RecordStore;
use crate::error::{CameliaError, Result};
use crate::seed;
use serde::{Deserialize, Serialize};

/// The whole back-office state: three registries, the configuration catalog
/// and the five record stores
///
/// Views read snapshots through the accessors and mutate through the methods
/// below; registry renames are only reachable here so the cascade over
/// dependent records can never be skipped. Everything is in-memory for the
/// lifetime of one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    statuses: StatusRegistry,
    branches: BranchRegistry,
    shifts: ShiftRegistry,
    catalog: Catalog,
    orders: RecordStore<Order>,
    pricing: RecordStore<PricingEntry>,
    clients: RecordStore<ClientRecord>,
    shipments: RecordStore<Shipment>,
    staff: RecordStore<StaffTask>,
}

impl Dashboard {
    /// Empty dashboard; the status registry still carries its default six
    /// statuses since the kanban board is meaningless without columns
    pub fn new() -> Self {
        Self {
            statuses: StatusRegistry::default(),
            branches: BranchRegistry::new(),
            shifts: ShiftRegistry::new(),
            catalog: Catalog::new(),
            orders: RecordStore::new(),
            pricing: RecordStore::new(),
            clients: RecordStore::new(),
            shipments: RecordStore::new(),
            staff: RecordStore::new(),
        }
    }

    /// The full startup data set the page session begins with
    pub fn seeded() -> Self {
        Self {
            statuses: StatusRegistry::default(),
            branches: BranchRegistry::seed(seed::branches()),
            shifts: ShiftRegistry::seed(seed::shifts()),
            catalog: seed::catalog(),
            orders: RecordStore::seed(seed::orders()),
            pricing: RecordStore::seed(seed::pricing()),
            clients: RecordStore::seed(seed::clients()),
            shipments: RecordStore::seed(seed::shipments()),
            staff: RecordStore::seed(seed::staff_tasks()),
        }
    }

    // --- registries (read) ---

    pub fn statuses(&self) -> &StatusRegistry {
        &self.statuses
    }

    pub fn branches(&self) -> &BranchRegistry {
        &self.branches
    }

    pub fn shifts(&self) -> &ShiftRegistry {
        &self.shifts
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    // --- record stores ---

    pub fn orders(&self) -> &RecordStore<Order> {
        &self.orders
    }

    pub fn orders_mut(&mut self) -> &mut RecordStore<Order> {
        &mut self.orders
    }

    pub fn pricing(&self) -> &RecordStore<PricingEntry> {
        &self.pricing
    }

    pub fn pricing_mut(&mut self) -> &mut RecordStore<PricingEntry> {
        &mut self.pricing
    }

    pub fn clients(&self) -> &RecordStore<ClientRecord> {
        &self.clients
    }

    pub fn clients_mut(&mut self) -> &mut RecordStore<ClientRecord> {
        &mut self.clients
    }

    pub fn shipments(&self) -> &RecordStore<Shipment> {
        &self.shipments
    }

    pub fn shipments_mut(&mut self) -> &mut RecordStore<Shipment> {
        &mut self.shipments
    }

    pub fn staff(&self) -> &RecordStore<StaffTask> {
        &self.staff
    }

    pub fn staff_mut(&mut self) -> &mut RecordStore<StaffTask> {
        &mut self.staff
    }

    // --- status registry operations ---

    pub fn add_status(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        notify: NotifyPrefs,
    ) -> Result<u32> {
        self.statuses.add(name, description, notify)
    }

    pub fn edit_status(&mut self, ordinal: u32, patch: StatusPatch) -> Result<()> {
        self.statuses.edit(ordinal, patch)
    }

    /// Renames a status and rewrites the denormalized name on every record
    /// in every store, in one synchronous call
    ///
    /// Validation runs before the registry or any store is touched, so a
    /// failed rename is observable nowhere. Returns how many records the
    /// cascade rewrote.
    pub fn rename_status(&mut self, ordinal: u32, new_name: &str) -> Result<usize> {
        let old = self.statuses.rename(ordinal, new_name)?;
        if old == new_name {
            return Ok(0);
        }
        let changed = self.orders.rewrite(|r| retag(r, &old, new_name))
            + self.pricing.rewrite(|r| retag(r, &old, new_name))
            + self.clients.rewrite(|r| retag(r, &old, new_name))
            + self.shipments.rewrite(|r| retag(r, &old, new_name))
            + self.staff.rewrite(|r| retag(r, &old, new_name));
        log::debug!(
            "status rename cascade '{}' -> '{}' rewrote {} record(s)",
            old,
            new_name,
            changed
        );
        Ok(changed)
    }

    /// Removes a status unless any record still references it by name
    pub fn remove_status(&mut self, ordinal: u32) -> Result<Status> {
        let name = self
            .statuses
            .get(ordinal)
            .ok_or_else(|| CameliaError::StatusNotFound(ordinal.to_string()))?
            .name()
            .to_string();
        let count = self.count_status_references(&name);
        if count > 0 {
            log::warn!("refusing to remove status '{}': {} reference(s)", name, count);
            return Err(CameliaError::NameInUse { name, count });
        }
        self.statuses.remove(ordinal)
    }

    /// References to a status name across all five stores
    pub fn count_status_references(&self, name: &str) -> usize {
        self.orders.count_with_status(name)
            + self.pricing.count_with_status(name)
            + self.clients.count_with_status(name)
            + self.shipments.count_with_status(name)
            + self.staff.count_with_status(name)
    }

    // --- branch registry operations ---

    pub fn add_branch(&mut self, branch: Branch) -> Result<String> {
        self.branches.add(branch)
    }

    pub fn edit_branch(&mut self, id: &str, updated: Branch) -> Result<()> {
        self.branches.edit(id, updated)
    }

    /// Renames a branch and rewrites `branch` on every order naming it
    pub fn rename_branch(&mut self, id: &str, new_name: &str) -> Result<usize> {
        let old = self.branches.rename(id, new_name)?;
        if old == new_name {
            return Ok(0);
        }
        let changed = self.orders.rewrite(|o| {
            if o.branch() == old {
                o.set_branch(new_name);
                true
            } else {
                false
            }
        });
        log::debug!(
            "branch rename cascade '{}' -> '{}' rewrote {} order(s)",
            old,
            new_name,
            changed
        );
        Ok(changed)
    }

    pub fn remove_branch(&mut self, id: &str) -> Result<Branch> {
        let name = self
            .branches
            .get(id)
            .ok_or_else(|| CameliaError::BranchNotFound(id.to_string()))?
            .name()
            .to_string();
        let count = self
            .orders
            .records()
            .iter()
            .filter(|o| o.branch() == name)
            .count();
        if count > 0 {
            return Err(CameliaError::NameInUse { name, count });
        }
        self.branches.remove(id)
    }

    // --- shift registry operations ---

    pub fn add_shift(
        &mut self,
        name: impl Into<String>,
        schedule: impl Into<String>,
    ) -> Result<String> {
        self.shifts.add(name, schedule)
    }

    pub fn edit_shift_schedule(&mut self, id: &str, schedule: impl Into<String>) -> Result<()> {
        self.shifts.edit_schedule(id, schedule)
    }

    /// Renames a shift and rewrites `shift` on every order naming it
    ///
    /// Shifts share the status/branch reference-by-name pattern, so they get
    /// the same cascade.
    pub fn rename_shift(&mut self, id: &str, new_name: &str) -> Result<usize> {
        let old = self.shifts.rename(id, new_name)?;
        if old == new_name {
            return Ok(0);
        }
        let changed = self.orders.rewrite(|o| {
            if o.shift() == old {
                o.set_shift(new_name);
                true
            } else {
                false
            }
        });
        log::debug!(
            "shift rename cascade '{}' -> '{}' rewrote {} order(s)",
            old,
            new_name,
            changed
        );
        Ok(changed)
    }

    pub fn remove_shift(&mut self, id: &str) -> Result<Shift> {
        let name = self
            .shifts
            .get(id)
            .ok_or_else(|| CameliaError::ShiftNotFound(id.to_string()))?
            .name()
            .to_string();
        let count = self
            .orders
            .records()
            .iter()
            .filter(|o| o.shift() == name)
            .count();
        if count > 0 {
            return Err(CameliaError::NameInUse { name, count });
        }
        self.shifts.remove(id)
    }

    // --- kanban ---

    /// One column per status in ordinal order
    pub fn kanban_columns(&self) -> Vec<KanbanColumn<'_>> {
        board::kanban_columns(self.orders.records(), &self.statuses)
    }

    /// Orders whose status matches no registry entry
    pub fn orphaned_orders(&self) -> Vec<&Order> {
        board::orphaned_orders(self.orders.records(), &self.statuses)
    }

    /// Moves an order to another kanban column
    ///
    /// Dropping a card on the column it came from is an idempotent no-op
    /// returning `false`; the target name is not re-validated because the
    /// drop source is always a live column.
    pub fn move_order(&mut self, id: &RecordId, target_status: &str) -> Result<bool> {
        let order = self
            .orders
            .get(id)
            .ok_or_else(|| CameliaError::RecordNotFound(id.to_string()))?;
        if order.status() == target_status {
            return Ok(false);
        }
        self.orders.cell_update(
            id,
            OrderField::Status,
            FieldValue::Status(target_status.to_string()),
        )?;
        Ok(true)
    }

    /// Applies a finished drag, if it ended on a column
    pub fn apply_drop(&mut self, drag: &mut DragState) -> Result<bool> {
        match drag.commit() {
            Some((id, target)) => self.move_order(&id, &target),
            None => Ok(false),
        }
    }

    /// JSON snapshot of the whole state, with the original wire field names
    pub fn export(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

fn retag<R: Record>(record: &mut R, old: &str, new: &str) -> bool {
    if record.status() == old {
        record.set_status(new);
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_dashboard_counts() {
        let dashboard = Dashboard::seeded();

        assert_eq!(dashboard.orders().len(), 6);
        assert_eq!(dashboard.pricing().len(), 3);
        assert_eq!(dashboard.clients().len(), 3);
        assert_eq!(dashboard.shipments().len(), 3);
        assert_eq!(dashboard.staff().len(), 3);
        assert_eq!(dashboard.statuses().len(), 6);
        assert_eq!(dashboard.branches().len(), 3);
        assert_eq!(dashboard.shifts().len(), 3);
        assert_eq!(dashboard.catalog().products().len(), 3);
    }

    #[test]
    fn test_status_rename_cascades_across_all_stores() {
        let mut dashboard = Dashboard::seeded();

        // Put a second order into "En Espera" so the cascade has two to move
        let ord6 = RecordId::new("ORD", 6);
        dashboard.move_order(&ord6, "En Espera").unwrap();
        assert_eq!(dashboard.orders().count_with_status("En Espera"), 2);

        // Seeds hold one "En Espera" row in each of the other four stores
        let changed = dashboard.rename_status(1, "Recibido").unwrap();
        assert_eq!(changed, 6);

        assert_eq!(dashboard.count_status_references("En Espera"), 0);
        assert_eq!(dashboard.orders().count_with_status("Recibido"), 2);
        assert_eq!(dashboard.pricing().count_with_status("Recibido"), 1);
        assert_eq!(dashboard.clients().count_with_status("Recibido"), 1);
        assert_eq!(dashboard.shipments().count_with_status("Recibido"), 1);
        assert_eq!(dashboard.staff().count_with_status("Recibido"), 1);

        // The registry has exactly one entry under the new name
        let hits = dashboard
            .statuses()
            .list()
            .iter()
            .filter(|s| s.name() == "Recibido")
            .count();
        assert_eq!(hits, 1);
    }

    #[test]
    fn test_duplicate_rename_mutates_nothing() {
        let mut dashboard = Dashboard::seeded();
        let before = dashboard.clone();

        let err = dashboard.rename_status(1, "Entregado").unwrap_err();
        assert!(matches!(err, CameliaError::DuplicateName(_)));
        assert_eq!(dashboard, before);
    }

    #[test]
    fn test_rename_to_own_name_cascades_zero_records() {
        let mut dashboard = Dashboard::seeded();
        let before = dashboard.clone();

        let changed = dashboard.rename_status(4, "Entregado").unwrap();
        assert_eq!(changed, 0);
        assert_eq!(dashboard, before);
    }

    #[test]
    fn test_branch_rename_cascades_into_orders() {
        let mut dashboard = Dashboard::seeded();

        // ORD-001 and ORD-004 sit at the Centro branch
        let changed = dashboard.rename_branch("SUC-01", "Centro Histórico").unwrap();
        assert_eq!(changed, 2);

        assert_eq!(
            dashboard.branches().get("SUC-01").unwrap().name(),
            "Centro Histórico"
        );
        let at_old: usize = dashboard
            .orders()
            .records()
            .iter()
            .filter(|o| o.branch() == "Centro")
            .count();
        assert_eq!(at_old, 0);
    }

    #[test]
    fn test_shift_rename_cascades_into_orders() {
        let mut dashboard = Dashboard::seeded();

        // Three seed orders run on the Matutino shift
        let changed = dashboard.rename_shift("T-01", "Temprano").unwrap();
        assert_eq!(changed, 3);
        assert!(dashboard
            .orders()
            .records()
            .iter()
            .all(|o| o.shift() != "Matutino"));
    }

    #[test]
    fn test_move_order_between_columns() {
        let mut dashboard = Dashboard::seeded();
        let ord3 = RecordId::new("ORD", 3);

        let moved = dashboard.move_order(&ord3, "Entregado").unwrap();
        assert!(moved);
        assert_eq!(dashboard.orders().get(&ord3).unwrap().status(), "Entregado");
    }

    #[test]
    fn test_move_order_to_current_column_is_noop() {
        let mut dashboard = Dashboard::seeded();
        let ord1 = RecordId::new("ORD", 1);
        assert_eq!(dashboard.orders().get(&ord1).unwrap().status(), "Entregado");
        let before = dashboard.orders().clone();

        let moved = dashboard.move_order(&ord1, "Entregado").unwrap();
        assert!(!moved);
        assert_eq!(dashboard.orders(), &before);
    }

    #[test]
    fn test_move_unknown_order() {
        let mut dashboard = Dashboard::seeded();
        let ghost = RecordId::new("ORD", 99);
        assert!(matches!(
            dashboard.move_order(&ghost, "Entregado"),
            Err(CameliaError::RecordNotFound(_))
        ));
    }

    #[test]
    fn test_drag_drop_commits_through_move_order() {
        let mut dashboard = Dashboard::seeded();
        let mut drag = DragState::new();

        drag.begin(RecordId::new("ORD", 3));
        drag.hover("Entregado");
        let moved = dashboard.apply_drop(&mut drag).unwrap();

        assert!(moved);
        assert_eq!(
            dashboard
                .orders()
                .get(&RecordId::new("ORD", 3))
                .unwrap()
                .status(),
            "Entregado"
        );
    }

    #[test]
    fn test_kanban_columns_over_seed_data() {
        let dashboard = Dashboard::seeded();
        let columns = dashboard.kanban_columns();

        assert_eq!(columns.len(), 6);
        // Each seed order sits in exactly one column
        let total: usize = columns.iter().map(|c| c.orders.len()).sum();
        assert_eq!(total, 6);
        for column in &columns {
            assert_eq!(column.orders.len(), 1);
            assert_eq!(column.orders[0].status(), column.status.name());
        }
    }

    #[test]
    fn test_remove_referenced_status_is_refused() {
        let mut dashboard = Dashboard::seeded();
        let before = dashboard.clone();

        let err = dashboard.remove_status(4).unwrap_err();
        assert!(matches!(err, CameliaError::NameInUse { .. }));
        assert_eq!(dashboard, before);
    }

    #[test]
    fn test_remove_unreferenced_status_succeeds() {
        let mut dashboard = Dashboard::seeded();
        let ordinal = dashboard
            .add_status("Recolección", "", NotifyPrefs::new(false, false, false))
            .unwrap();

        let removed = dashboard.remove_status(ordinal).unwrap();
        assert_eq!(removed.name(), "Recolección");
        assert_eq!(dashboard.statuses().len(), 6);
    }

    #[test]
    fn test_remove_referenced_branch_is_refused() {
        let mut dashboard = Dashboard::seeded();
        assert!(matches!(
            dashboard.remove_branch("SUC-01"),
            Err(CameliaError::NameInUse { .. })
        ));
        assert_eq!(dashboard.branches().len(), 3);
    }

    #[test]
    fn test_remove_unreferenced_shift_succeeds() {
        let mut dashboard = Dashboard::seeded();
        // No seed order runs on a shift named "Madrugada"
        let id = dashboard.add_shift("Madrugada", "02:00 a 06:00").unwrap();
        assert!(dashboard.remove_shift(&id).is_ok());
    }

    #[test]
    fn test_orphaned_order_reported_and_out_of_board() {
        let mut dashboard = Dashboard::seeded();
        let mut stray = dashboard.orders().records()[0].clone();
        stray.set_status("Estatus Fantasma");
        dashboard.orders_mut().add(stray).unwrap();

        let orphans = dashboard.orphaned_orders();
        assert_eq!(orphans.len(), 1);

        let on_board: usize = dashboard
            .kanban_columns()
            .iter()
            .map(|c| c.orders.len())
            .sum();
        assert_eq!(on_board, 6);
    }

    #[test]
    fn test_export_round_trip() {
        let dashboard = Dashboard::seeded();
        let json = dashboard.export().unwrap();

        // Wire keys survive into the snapshot
        assert!(json.contains("\"fentrega\""));
        assert!(json.contains("\"nombreFloreria\""));

        let back: Dashboard = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dashboard);
    }

    #[test]
    fn test_added_order_lands_on_the_board() {
        let mut dashboard = Dashboard::seeded();
        let mut draft = dashboard.orders().records()[2].clone();
        draft.set_status("Preparación");
        let id = dashboard.orders_mut().add(draft).unwrap();
        assert_eq!(id.as_str(), "ORD-007");

        let columns = dashboard.kanban_columns();
        let prep = columns
            .iter()
            .find(|c| c.status.name() == "Preparación")
            .unwrap();
        assert_eq!(prep.orders.len(), 2);
    }
}
