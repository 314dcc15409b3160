use crate::domain::field::FieldValue;
use crate::domain::record::{Record, RecordId};
use crate::domain::store::RecordStore;
use crate::error::{CameliaError, Result};

/// Edit state of one table: at most one row or one cell at a time
///
/// A table offers two editing modes that are mutually exclusive per row:
/// whole-row edit (pencil button, a draft copy of the row) and inline cell
/// edit (double click on a cell). Starting a row edit discards any pending
/// cell edit; a cell edit on a row that is already in row-edit mode is
/// refused.
#[derive(Debug, Clone, PartialEq)]
pub enum EditSession<R: Record> {
    Idle,
    Row(R),
    Cell { id: RecordId, field: R::Field },
}

impl<R: Record> EditSession<R> {
    pub fn new() -> Self {
        Self::Idle
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Starts whole-row editing on a draft copy of `record`
    pub fn begin_row(&mut self, record: &R) {
        *self = Self::Row(record.clone());
    }

    /// Starts inline editing of one cell
    pub fn begin_cell(&mut self, id: RecordId, field: R::Field) -> Result<()> {
        if let Self::Row(draft) = self {
            if draft.id() == &id {
                return Err(CameliaError::EditInProgress(id.to_string()));
            }
        }
        *self = Self::Cell { id, field };
        Ok(())
    }

    /// The row draft, when in row-edit mode
    pub fn draft(&self) -> Option<&R> {
        match self {
            Self::Row(draft) => Some(draft),
            _ => None,
        }
    }

    /// Mutable draft for form bindings
    pub fn draft_mut(&mut self) -> Option<&mut R> {
        match self {
            Self::Row(draft) => Some(draft),
            _ => None,
        }
    }

    pub fn is_editing_row(&self, id: &RecordId) -> bool {
        matches!(self, Self::Row(draft) if draft.id() == id)
    }

    pub fn editing_cell(&self) -> Option<(&RecordId, R::Field)> {
        match self {
            Self::Cell { id, field } => Some((id, *field)),
            _ => None,
        }
    }

    /// Commits the row draft through the store and returns to idle
    pub fn save_row(&mut self, store: &mut RecordStore<R>) -> Result<()> {
        let draft = match std::mem::replace(self, Self::Idle) {
            Self::Row(draft) => draft,
            other => {
                *self = other;
                return Err(CameliaError::NoActiveEdit);
            }
        };
        let id = draft.id().clone();
        if let Err(err) = store.edit(&id, draft.clone()) {
            // Rejected saves keep the edit open so nothing typed is lost
            *self = Self::Row(draft);
            return Err(err);
        }
        Ok(())
    }

    /// Commits one cell value through the store and returns to idle
    pub fn save_cell(&mut self, store: &mut RecordStore<R>, value: FieldValue) -> Result<()> {
        let (id, field) = match self {
            Self::Cell { id, field } => (id.clone(), *field),
            _ => return Err(CameliaError::NoActiveEdit),
        };
        store.cell_update(&id, field, value)?;
        *self = Self::Idle;
        Ok(())
    }

    /// Discards whatever edit is in flight
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }
}

impl<R: Record> Default for EditSession<R> {
    fn default() -> Self {
        Self::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::staff::{StaffField, StaffTask};
    use chrono::NaiveDate;

    fn store_with_rows() -> RecordStore<StaffTask> {
        let mut store = RecordStore::new();
        for customer in ["Global Imports", "Creative Minds"] {
            store
                .add(StaffTask::new(
                    RecordId::new("PER", 0),
                    "FP-001",
                    "Pendiente",
                    NaiveDate::from_ymd_opt(2023, 12, 15).unwrap(),
                    customer,
                    "Con aprecio.",
                    "",
                ))
                .unwrap();
        }
        store
    }

    #[test]
    fn test_row_edit_saves_through_store() {
        let mut store = store_with_rows();
        let id = store.records()[0].id().clone();

        let mut session = EditSession::new();
        session.begin_row(store.get(&id).unwrap());
        session
            .draft_mut()
            .unwrap()
            .set(StaffField::Notes, FieldValue::text("Entregar en recepción."))
            .unwrap();
        session.save_row(&mut store).unwrap();

        assert!(session.is_idle());
        assert_eq!(store.get(&id).unwrap().notes(), "Entregar en recepción.");
    }

    #[test]
    fn test_row_edit_cancels_pending_cell_edit() {
        let store = store_with_rows();
        let first = store.records()[0].id().clone();

        let mut session = EditSession::new();
        session.begin_cell(first, StaffField::Notes).unwrap();
        session.begin_row(&store.records()[1]);

        assert!(session.editing_cell().is_none());
        assert!(session.is_editing_row(store.records()[1].id()));
    }

    #[test]
    fn test_cell_edit_refused_on_row_being_edited() {
        let store = store_with_rows();
        let id = store.records()[0].id().clone();

        let mut session = EditSession::new();
        session.begin_row(store.get(&id).unwrap());

        let err = session.begin_cell(id.clone(), StaffField::Notes).unwrap_err();
        assert!(matches!(err, CameliaError::EditInProgress(_)));
        assert!(session.is_editing_row(&id));
    }

    #[test]
    fn test_cell_edit_on_other_row_replaces_row_edit() {
        let store = store_with_rows();
        let other = store.records()[1].id().clone();

        let mut session = EditSession::new();
        session.begin_row(&store.records()[0]);
        session.begin_cell(other.clone(), StaffField::Customer).unwrap();

        assert_eq!(session.editing_cell(), Some((&other, StaffField::Customer)));
    }

    #[test]
    fn test_save_cell_commits_value() {
        let mut store = store_with_rows();
        let id = store.records()[0].id().clone();

        let mut session = EditSession::new();
        session.begin_cell(id.clone(), StaffField::Dedication).unwrap();
        session
            .save_cell(&mut store, FieldValue::text("Felices fiestas."))
            .unwrap();

        assert!(session.is_idle());
        assert_eq!(store.get(&id).unwrap().dedication(), "Felices fiestas.");
    }

    #[test]
    fn test_save_without_active_edit() {
        let mut store = store_with_rows();
        let mut session: EditSession<StaffTask> = EditSession::new();

        assert!(matches!(
            session.save_row(&mut store),
            Err(CameliaError::NoActiveEdit)
        ));
        assert!(matches!(
            session.save_cell(&mut store, FieldValue::text("x")),
            Err(CameliaError::NoActiveEdit)
        ));
    }

    #[test]
    fn test_invalid_draft_blocks_save_and_store_unchanged() {
        let mut store = store_with_rows();
        let id = store.records()[0].id().clone();
        let before = store.records().to_vec();

        let mut session = EditSession::new();
        session.begin_row(store.get(&id).unwrap());
        session
            .draft_mut()
            .unwrap()
            .set(StaffField::Customer, FieldValue::text(""))
            .unwrap();

        assert!(session.save_row(&mut store).is_err());
        assert_eq!(store.records(), before.as_slice());
    }

    #[test]
    fn test_cancel_discards_draft() {
        let store = store_with_rows();
        let mut session = EditSession::new();
        session.begin_row(&store.records()[0]);
        session.cancel();
        assert!(session.is_idle());
    }
}
