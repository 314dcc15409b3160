use crate::error::{CameliaError, Result};
use serde::{Deserialize, Serialize};

/// A working shift; orders reference it by name, so renames cascade
/// (the same name-reference pattern as statuses and branches)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    id: String,
    #[serde(rename = "nombre")]
    name: String,
    #[serde(rename = "horario")]
    schedule: String,
}

impl Shift {
    pub fn new(id: impl Into<String>, name: impl Into<String>, schedule: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            schedule: schedule.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schedule(&self) -> &str {
        &self.schedule
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShiftRegistry {
    shifts: Vec<Shift>,
    next_seq: u32,
}

impl ShiftRegistry {
    pub fn new() -> Self {
        Self {
            shifts: Vec::new(),
            next_seq: 1,
        }
    }

    pub fn seed(shifts: Vec<Shift>) -> Self {
        let next_seq = shifts
            .iter()
            .filter_map(|s| s.id.rsplit_once('-'))
            .filter_map(|(_, n)| n.parse::<u32>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        Self { shifts, next_seq }
    }

    pub fn list(&self) -> &[Shift] {
        &self.shifts
    }

    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Shift> {
        self.shifts.iter().find(|s| s.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Shift> {
        self.shifts.iter().find(|s| s.name == name)
    }

    pub fn add(&mut self, name: impl Into<String>, schedule: impl Into<String>) -> Result<String> {
        let name = name.into();
        if self.find_by_name(&name).is_some() {
            return Err(CameliaError::DuplicateName(name));
        }
        let id = format!("T-{:02}", self.next_seq);
        self.next_seq += 1;
        self.shifts.push(Shift::new(id.clone(), name, schedule));
        Ok(id)
    }

    /// Renames a shift, returning the old name for the caller's cascade
    pub(crate) fn rename(&mut self, id: &str, new_name: &str) -> Result<String> {
        if self.shifts.iter().any(|s| s.id != id && s.name == new_name) {
            return Err(CameliaError::DuplicateName(new_name.to_string()));
        }
        let shift = self
            .shifts
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| CameliaError::ShiftNotFound(id.to_string()))?;
        let old = std::mem::replace(&mut shift.name, new_name.to_string());
        log::debug!("shift {} renamed: '{}' -> '{}'", id, old, new_name);
        Ok(old)
    }

    pub fn edit_schedule(&mut self, id: &str, schedule: impl Into<String>) -> Result<()> {
        let shift = self
            .shifts
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| CameliaError::ShiftNotFound(id.to_string()))?;
        shift.schedule = schedule.into();
        Ok(())
    }

    pub(crate) fn remove(&mut self, id: &str) -> Result<Shift> {
        let pos = self
            .shifts
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| CameliaError::ShiftNotFound(id.to_string()))?;
        Ok(self.shifts.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> ShiftRegistry {
        ShiftRegistry::seed(vec![
            Shift::new("T-01", "Matutino", "06:00 a 15:00"),
            Shift::new("T-02", "Vespertino", "15:00 a 20:00"),
        ])
    }

    #[test]
    fn test_add_assigns_next_id() {
        let mut registry = seeded();
        let id = registry.add("Nocturno", "20:00 a 02:00").unwrap();
        assert_eq!(id, "T-03");
        assert_eq!(registry.get("T-03").unwrap().name(), "Nocturno");
    }

    #[test]
    fn test_rename_rejects_duplicate() {
        let mut registry = seeded();
        assert!(matches!(
            registry.rename("T-01", "Vespertino"),
            Err(CameliaError::DuplicateName(_))
        ));
        assert_eq!(registry.get("T-01").unwrap().name(), "Matutino");
    }

    #[test]
    fn test_edit_schedule() {
        let mut registry = seeded();
        registry.edit_schedule("T-02", "14:00 a 21:00").unwrap();
        assert_eq!(registry.get("T-02").unwrap().schedule(), "14:00 a 21:00");
    }

    #[test]
    fn test_serialization_uses_original_keys() {
        let json = serde_json::to_value(Shift::new("T-01", "Matutino", "06:00 a 15:00")).unwrap();
        assert_eq!(json["id"], "T-01");
        assert_eq!(json["nombre"], "Matutino");
        assert_eq!(json["horario"], "06:00 a 15:00");
    }
}
