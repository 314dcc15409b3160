use crate::config::status::{Status, StatusRegistry};
use crate::domain::order::Order;
use crate::domain::record::{Record, RecordId};

/// One kanban column: a status and the orders currently in it
#[derive(Debug)]
pub struct KanbanColumn<'a> {
    pub status: &'a Status,
    pub orders: Vec<&'a Order>,
}

/// Derives the board from the current orders and status registry
///
/// One column per status in ordinal order. An order whose status matches no
/// registry entry lands in no column; see [`orphaned_orders`].
///
/// # Examples
/// ```
/// use camelia_core::config::status::StatusRegistry;
/// use camelia_core::domain::board::kanban_columns;
/// use camelia_core::seed;
///
/// let registry = StatusRegistry::default();
/// let orders = seed::orders();
///
/// let columns = kanban_columns(&orders, &registry);
/// assert_eq!(columns.len(), 6);
/// assert_eq!(columns[0].status.name(), "En Espera");
/// assert_eq!(columns[0].orders.len(), 1);
/// ```
pub fn kanban_columns<'a>(
    orders: &'a [Order],
    registry: &'a StatusRegistry,
) -> Vec<KanbanColumn<'a>> {
    registry
        .list()
        .into_iter()
        .map(|status| KanbanColumn {
            status,
            orders: orders
                .iter()
                .filter(|o| o.status() == status.name())
                .collect(),
        })
        .collect()
}

/// Orders silently omitted from every column
pub fn orphaned_orders<'a>(orders: &'a [Order], registry: &StatusRegistry) -> Vec<&'a Order> {
    orders
        .iter()
        .filter(|o| !registry.contains_name(o.status()))
        .collect()
}

/// Drag-and-drop interaction state for the board
///
/// Tracks which card is being dragged and which column it is hovering over;
/// the mutation itself goes through the dashboard's `move_order`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragState {
    dragging: Option<RecordId>,
    hover: Option<String>,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drag start: remembers the card
    pub fn begin(&mut self, id: RecordId) {
        self.dragging = Some(id);
        self.hover = None;
    }

    /// Drag over a column; ignored when nothing is being dragged
    pub fn hover(&mut self, status_name: &str) {
        if self.dragging.is_some() {
            self.hover = Some(status_name.to_string());
        }
    }

    /// Drag left the hovered column
    pub fn leave(&mut self) {
        self.hover = None;
    }

    /// Whether `status_name` should render as the highlighted drop target
    pub fn is_over(&self, status_name: &str) -> bool {
        self.hover.as_deref() == Some(status_name)
    }

    pub fn dragging(&self) -> Option<&RecordId> {
        self.dragging.as_ref()
    }

    /// Drop: yields the `(card, target column)` pair to commit and resets
    ///
    /// `None` when nothing was being dragged or the drop happened outside
    /// any column.
    pub fn commit(&mut self) -> Option<(RecordId, String)> {
        match (self.dragging.take(), self.hover.take()) {
            (Some(id), Some(target)) => Some((id, target)),
            _ => None,
        }
    }

    /// Drag cancelled (escape, drop outside the board)
    pub fn cancel(&mut self) {
        self.dragging = None;
        self.hover = None;
    }
}
