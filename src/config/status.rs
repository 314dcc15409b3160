use crate::error::{CameliaError, Result};
use serde::{Deserialize, Serialize};

/// Notification channels fired when an order enters a status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifyPrefs {
    pub push: bool,
    pub sms: bool,
    pub email: bool,
}

impl NotifyPrefs {
    pub fn new(push: bool, sms: bool, email: bool) -> Self {
        Self { push, sms, email }
    }
}

/// One entry of the status registry
///
/// `ordinal` is the display position (the kanban column order); records
/// reference a status by `name`, so renames cascade through the aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    #[serde(rename = "id")]
    ordinal: u32,
    #[serde(rename = "nombre")]
    name: String,
    #[serde(rename = "descripcion")]
    description: String,
    #[serde(rename = "notificaciones")]
    notify: NotifyPrefs,
}

impl Status {
    pub fn new(
        ordinal: u32,
        name: impl Into<String>,
        description: impl Into<String>,
        notify: NotifyPrefs,
    ) -> Self {
        Self {
            ordinal,
            name: name.into(),
            description: description.into(),
            notify,
        }
    }

    pub fn ordinal(&self) -> u32 {
        self.ordinal
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn notify(&self) -> NotifyPrefs {
        self.notify
    }
}

/// Partial update for the non-denormalized status fields
///
/// The name is deliberately absent: renames go through the aggregate so the
/// cascade can run.
#[derive(Debug, Clone, Default)]
pub struct StatusPatch {
    pub description: Option<String>,
    pub notify: Option<NotifyPrefs>,
}

/// The ordered list of order statuses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusRegistry {
    statuses: Vec<Status>,
}

impl StatusRegistry {
    pub fn empty() -> Self {
        Self {
            statuses: Vec::new(),
        }
    }

    /// All statuses, ordered by ordinal (display order, not creation order)
    pub fn list(&self) -> Vec<&Status> {
        let mut out: Vec<&Status> = self.statuses.iter().collect();
        out.sort_by_key(|s| s.ordinal);
        out
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    pub fn get(&self, ordinal: u32) -> Option<&Status> {
        self.statuses.iter().find(|s| s.ordinal == ordinal)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Status> {
        self.statuses.iter().find(|s| s.name == name)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    /// Appends a status after the current last ordinal
    pub fn add(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        notify: NotifyPrefs,
    ) -> Result<u32> {
        let name = name.into();
        if self.contains_name(&name) {
            return Err(CameliaError::DuplicateName(name));
        }
        let ordinal = self.statuses.iter().map(|s| s.ordinal).max().unwrap_or(0) + 1;
        self.statuses
            .push(Status::new(ordinal, name, description, notify));
        Ok(ordinal)
    }

    /// Renames a status, returning the old name for the caller's cascade
    ///
    /// The duplicate check runs before anything is touched; renaming a status
    /// to its own current name succeeds (and the cascade touches no record).
    pub(crate) fn rename(&mut self, ordinal: u32, new_name: &str) -> Result<String> {
        if self
            .statuses
            .iter()
            .any(|s| s.ordinal != ordinal && s.name == new_name)
        {
            return Err(CameliaError::DuplicateName(new_name.to_string()));
        }
        let status = self
            .statuses
            .iter_mut()
            .find(|s| s.ordinal == ordinal)
            .ok_or_else(|| CameliaError::StatusNotFound(ordinal.to_string()))?;
        let old = std::mem::replace(&mut status.name, new_name.to_string());
        log::debug!("status {} renamed: '{}' -> '{}'", ordinal, old, new_name);
        Ok(old)
    }

    /// Updates description and notification flags; never cascades
    pub fn edit(&mut self, ordinal: u32, patch: StatusPatch) -> Result<()> {
        let status = self
            .statuses
            .iter_mut()
            .find(|s| s.ordinal == ordinal)
            .ok_or_else(|| CameliaError::StatusNotFound(ordinal.to_string()))?;
        if let Some(description) = patch.description {
            status.description = description;
        }
        if let Some(notify) = patch.notify {
            status.notify = notify;
        }
        Ok(())
    }

    /// Removes a status; reference counting happens in the aggregate
    pub(crate) fn remove(&mut self, ordinal: u32) -> Result<Status> {
        let pos = self
            .statuses
            .iter()
            .position(|s| s.ordinal == ordinal)
            .ok_or_else(|| CameliaError::StatusNotFound(ordinal.to_string()))?;
        Ok(self.statuses.remove(pos))
    }
}

impl Default for StatusRegistry {
    fn default() -> Self {
        Self {
            statuses: vec![
                Status::new(
                    1,
                    "En Espera",
                    "El pedido ha sido recibido pero aún no se ha procesado.",
                    NotifyPrefs::new(true, false, true),
                ),
                Status::new(
                    2,
                    "Preparación",
                    "El pedido se está preparando en la sucursal.",
                    NotifyPrefs::new(true, true, true),
                ),
                Status::new(
                    3,
                    "En Tránsito",
                    "El repartidor ya recogió el pedido y se dirige al destino.",
                    NotifyPrefs::new(true, true, true),
                ),
                Status::new(
                    4,
                    "Entregado",
                    "El pedido ha sido entregado exitosamente al destinatario.",
                    NotifyPrefs::new(true, false, true),
                ),
                Status::new(
                    5,
                    "Cancelado",
                    "El pedido ha sido cancelado por el cliente o la florería.",
                    NotifyPrefs::new(true, false, true),
                ),
                Status::new(
                    6,
                    "Regresado",
                    "El pedido no pudo ser entregado y fue regresado a la sucursal.",
                    NotifyPrefs::new(false, false, true),
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_seeds_six_statuses() {
        let registry = StatusRegistry::default();
        assert_eq!(registry.len(), 6);

        let names: Vec<_> = registry.list().iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            [
                "En Espera",
                "Preparación",
                "En Tránsito",
                "Entregado",
                "Cancelado",
                "Regresado"
            ]
        );
    }

    #[test]
    fn test_list_orders_by_ordinal_not_insertion() {
        let mut registry = StatusRegistry::empty();
        registry.statuses.push(Status::new(
            3,
            "Entregado",
            "",
            NotifyPrefs::new(true, false, true),
        ));
        registry.statuses.push(Status::new(
            1,
            "En Espera",
            "",
            NotifyPrefs::new(true, false, true),
        ));

        let names: Vec<_> = registry.list().iter().map(|s| s.name()).collect();
        assert_eq!(names, ["En Espera", "Entregado"]);
    }

    #[test]
    fn test_rename_returns_old_name() {
        let mut registry = StatusRegistry::default();
        let old = registry.rename(1, "Recibido").unwrap();

        assert_eq!(old, "En Espera");
        assert_eq!(registry.get(1).unwrap().name(), "Recibido");
    }

    #[test]
    fn test_rename_to_own_name_is_allowed() {
        let mut registry = StatusRegistry::default();
        let old = registry.rename(4, "Entregado").unwrap();
        assert_eq!(old, "Entregado");
    }

    #[test]
    fn test_rename_rejects_duplicate() {
        let mut registry = StatusRegistry::default();
        let err = registry.rename(1, "Entregado").unwrap_err();

        assert!(matches!(err, CameliaError::DuplicateName(_)));
        assert_eq!(registry.get(1).unwrap().name(), "En Espera");
    }

    #[test]
    fn test_add_appends_after_max_ordinal() {
        let mut registry = StatusRegistry::default();
        let ordinal = registry
            .add("Recolección", "", NotifyPrefs::new(false, false, false))
            .unwrap();

        assert_eq!(ordinal, 7);
        assert_eq!(registry.list().last().unwrap().name(), "Recolección");
    }

    #[test]
    fn test_add_rejects_duplicate_name() {
        let mut registry = StatusRegistry::default();
        assert!(registry
            .add("Entregado", "", NotifyPrefs::new(false, false, false))
            .is_err());
        assert_eq!(registry.len(), 6);
    }

    #[test]
    fn test_edit_patches_description_and_notify() {
        let mut registry = StatusRegistry::default();
        registry
            .edit(
                2,
                StatusPatch {
                    description: Some("En mesa de trabajo.".to_string()),
                    notify: Some(NotifyPrefs::new(false, false, false)),
                },
            )
            .unwrap();

        let status = registry.get(2).unwrap();
        assert_eq!(status.description(), "En mesa de trabajo.");
        assert!(!status.notify().push);
        // The name is untouched
        assert_eq!(status.name(), "Preparación");
    }

    #[test]
    fn test_serialization_uses_original_keys() {
        let registry = StatusRegistry::default();
        let json = serde_json::to_value(registry.get(1).unwrap()).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["nombre"], "En Espera");
        assert_eq!(json["notificaciones"]["push"], true);
        assert_eq!(json["notificaciones"]["sms"], false);
    }
}
