use crate::error::{CameliaError, Result};
use serde::{Deserialize, Serialize};

/// A store branch; orders reference it by name, so renames cascade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    id: String,
    #[serde(rename = "nombre")]
    name: String,
    #[serde(rename = "telefono")]
    phone: String,
    #[serde(rename = "pais")]
    country: String,
    #[serde(rename = "estado")]
    state: String,
    #[serde(rename = "ciudad")]
    city: String,
    #[serde(rename = "colonia")]
    district: String,
    #[serde(rename = "calle")]
    street: String,
    #[serde(rename = "mapsUrl")]
    maps_url: String,
}

impl Branch {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        phone: impl Into<String>,
        country: impl Into<String>,
        state: impl Into<String>,
        city: impl Into<String>,
        district: impl Into<String>,
        street: impl Into<String>,
        maps_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phone: phone.into(),
            country: country.into(),
            state: state.into(),
            city: city.into(),
            district: district.into(),
            street: street.into(),
            maps_url: maps_url.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn maps_url(&self) -> &str {
        &self.maps_url
    }

    /// The copy-to-clipboard text block shown on the branch page
    pub fn contact_card(&self) -> String {
        format!(
            "Sucursal {}\nTeléfono: {}\nDirección: {}, {}, {}, {}, {}\nGoogle Maps: {}",
            self.name,
            self.phone,
            self.street,
            self.district,
            self.city,
            self.state,
            self.country,
            self.maps_url
        )
    }
}

/// The list of branches, keyed by id, unique by name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BranchRegistry {
    branches: Vec<Branch>,
    next_seq: u32,
}

impl BranchRegistry {
    pub fn new() -> Self {
        Self {
            branches: Vec::new(),
            next_seq: 1,
        }
    }

    pub fn seed(branches: Vec<Branch>) -> Self {
        let next_seq = branches
            .iter()
            .filter_map(|b| b.id.rsplit_once('-'))
            .filter_map(|(_, n)| n.parse::<u32>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        Self { branches, next_seq }
    }

    pub fn list(&self) -> &[Branch] {
        &self.branches
    }

    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Branch> {
        self.branches.iter().find(|b| b.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Branch> {
        self.branches.iter().find(|b| b.name == name)
    }

    pub fn add(&mut self, mut branch: Branch) -> Result<String> {
        if self.find_by_name(&branch.name).is_some() {
            return Err(CameliaError::DuplicateName(branch.name));
        }
        branch.id = format!("SUC-{:02}", self.next_seq);
        self.next_seq += 1;
        let id = branch.id.clone();
        self.branches.push(branch);
        Ok(id)
    }

    /// Renames a branch, returning the old name for the caller's cascade
    pub(crate) fn rename(&mut self, id: &str, new_name: &str) -> Result<String> {
        if self
            .branches
            .iter()
            .any(|b| b.id != id && b.name == new_name)
        {
            return Err(CameliaError::DuplicateName(new_name.to_string()));
        }
        let branch = self
            .branches
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| CameliaError::BranchNotFound(id.to_string()))?;
        let old = std::mem::replace(&mut branch.name, new_name.to_string());
        log::debug!("branch {} renamed: '{}' -> '{}'", id, old, new_name);
        Ok(old)
    }

    /// Updates everything except id and name
    pub fn edit(&mut self, id: &str, mut updated: Branch) -> Result<()> {
        let branch = self
            .branches
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| CameliaError::BranchNotFound(id.to_string()))?;
        updated.id = branch.id.clone();
        updated.name = branch.name.clone();
        *branch = updated;
        Ok(())
    }

    pub(crate) fn remove(&mut self, id: &str) -> Result<Branch> {
        let pos = self
            .branches
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| CameliaError::BranchNotFound(id.to_string()))?;
        Ok(self.branches.remove(pos))
    }
}
