//! Non-cascading configuration records: payment methods, delivery staff,
//! zones, client summaries, products and the company profile.
//!
//! Nothing here is referenced by name from the record stores, so edits are
//! plain row replacements with no propagation.

use crate::error::{CameliaError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: u32,
    #[serde(rename = "nombre")]
    pub name: String,
}

/// A delivery driver and their vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Courier {
    pub id: String,
    #[serde(rename = "repartidor_id")]
    pub code: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "marca")]
    pub vehicle_make: String,
    #[serde(rename = "modelo")]
    pub vehicle_model: String,
    #[serde(rename = "placas")]
    pub plates: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    #[serde(rename = "pais")]
    pub country: String,
    #[serde(rename = "estado")]
    pub state: String,
    #[serde(rename = "ciudad")]
    pub city: String,
}

/// Per-client sales summary shown on the clients configuration page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientAccount {
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "ventas")]
    pub sales: u32,
    #[serde(rename = "montoTotal")]
    pub total_amount: f64,
    #[serde(rename = "pedidos")]
    pub orders: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    pub sku: String,
    #[serde(rename = "ingredientes")]
    pub ingredients: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "precioVenta")]
    pub list_price: f64,
    pub color: String,
    #[serde(rename = "descripcionCorta")]
    pub blurb: String,
    #[serde(rename = "imagenUrl")]
    pub image_url: String,
}

/// The single company-profile record, edited wholesale
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    #[serde(rename = "nombreFloreria")]
    pub store_name: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    pub whatsapp: String,
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "pais")]
    pub country: String,
    #[serde(rename = "estado")]
    pub state: String,
    #[serde(rename = "ciudad")]
    pub city: String,
    #[serde(rename = "colonia")]
    pub district: String,
    #[serde(rename = "calle")]
    pub street: String,
    #[serde(rename = "mapsUrl")]
    pub maps_url: String,
}

/// All non-cascading configuration held by the dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    payment_methods: Vec<PaymentMethod>,
    couriers: Vec<Courier>,
    zones: Vec<Zone>,
    client_accounts: Vec<ClientAccount>,
    products: Vec<Product>,
    profile: CompanyProfile,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(
        payment_methods: Vec<PaymentMethod>,
        couriers: Vec<Courier>,
        zones: Vec<Zone>,
        client_accounts: Vec<ClientAccount>,
        products: Vec<Product>,
        profile: CompanyProfile,
    ) -> Self {
        Self {
            payment_methods,
            couriers,
            zones,
            client_accounts,
            products,
            profile,
        }
    }

    pub fn payment_methods(&self) -> &[PaymentMethod] {
        &self.payment_methods
    }

    pub fn couriers(&self) -> &[Courier] {
        &self.couriers
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn client_accounts(&self) -> &[ClientAccount] {
        &self.client_accounts
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn profile(&self) -> &CompanyProfile {
        &self.profile
    }

    pub fn add_payment_method(&mut self, name: impl Into<String>) -> Result<u32> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CameliaError::MissingField("nombre"));
        }
        if self.payment_methods.iter().any(|p| p.name == name) {
            return Err(CameliaError::DuplicateName(name));
        }
        let id = self.payment_methods.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        self.payment_methods.push(PaymentMethod { id, name });
        Ok(id)
    }

    pub fn add_courier(&mut self, mut courier: Courier) -> Result<String> {
        if courier.name.trim().is_empty() {
            return Err(CameliaError::MissingField("nombre"));
        }
        let seq = next_suffix(self.couriers.iter().map(|c| c.id.as_str()));
        courier.id = format!("REP-{:03}", seq);
        courier.code = format!("R-{:02}", seq);
        let id = courier.id.clone();
        self.couriers.push(courier);
        Ok(id)
    }

    pub fn edit_courier(&mut self, id: &str, mut updated: Courier) -> Result<()> {
        let courier = self
            .couriers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| CameliaError::RecordNotFound(id.to_string()))?;
        updated.id = courier.id.clone();
        updated.code = courier.code.clone();
        *courier = updated;
        Ok(())
    }

    pub fn add_zone(
        &mut self,
        country: impl Into<String>,
        state: impl Into<String>,
        city: impl Into<String>,
    ) -> Result<String> {
        let city = city.into();
        if city.trim().is_empty() {
            return Err(CameliaError::MissingField("ciudad"));
        }
        let id = format!("Z-{:02}", next_suffix(self.zones.iter().map(|z| z.id.as_str())));
        self.zones.push(Zone {
            id: id.clone(),
            country: country.into(),
            state: state.into(),
            city,
        });
        Ok(id)
    }

    pub fn edit_client_account(&mut self, id: &str, mut updated: ClientAccount) -> Result<()> {
        let account = self
            .client_accounts
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| CameliaError::RecordNotFound(id.to_string()))?;
        updated.id = account.id.clone();
        *account = updated;
        Ok(())
    }

    pub fn add_product(&mut self, mut product: Product) -> Result<String> {
        if product.name.trim().is_empty() {
            return Err(CameliaError::MissingField("nombre"));
        }
        let seq = next_suffix(self.products.iter().map(|p| p.id.as_str()));
        product.id = format!("PROD-{:03}", seq);
        let id = product.id.clone();
        self.products.push(product);
        Ok(id)
    }

    pub fn edit_product(&mut self, id: &str, mut updated: Product) -> Result<()> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| CameliaError::RecordNotFound(id.to_string()))?;
        updated.id = product.id.clone();
        *product = updated;
        Ok(())
    }

    pub fn set_profile(&mut self, profile: CompanyProfile) -> Result<()> {
        if profile.store_name.trim().is_empty() {
            return Err(CameliaError::MissingField("nombreFloreria"));
        }
        self.profile = profile;
        Ok(())
    }
}

/// Highest numeric id suffix in the list, plus one
fn next_suffix<'a>(ids: impl Iterator<Item = &'a str>) -> u32 {
    ids.filter_map(|id| id.rsplit_once('-'))
        .filter_map(|(_, n)| n.parse::<u32>().ok())
        .max()
        .unwrap_or(0)
        + 1
}
