use crate::domain::field::{FieldDef, FieldKind, FieldValue};
use crate::domain::record::{require, Record, RecordId};
use crate::error::{CameliaError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A pricing row: sale price, shipping, cost and the derived profit
///
/// `profit` is never entered by hand. It is computed on construction and
/// recomputed whenever price or cost changes; writing it directly is
/// rejected as a read-only field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingEntry {
    id: RecordId,
    folio: String,
    #[serde(rename = "estatus")]
    status: String,
    #[serde(rename = "fentrega")]
    delivery_date: NaiveDate,
    #[serde(rename = "cliente")]
    customer: String,
    #[serde(rename = "fPago")]
    payment_method: String,
    #[serde(rename = "precio")]
    price: f64,
    #[serde(rename = "envio")]
    shipping: f64,
    #[serde(rename = "costo")]
    cost: f64,
    #[serde(rename = "ganancia")]
    profit: f64,
    #[serde(rename = "producto")]
    product: String,
    sku: String,
}

/// Columns of the pricing table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingField {
    Folio,
    Status,
    DeliveryDate,
    Customer,
    PaymentMethod,
    Price,
    Shipping,
    Cost,
    Profit,
    Product,
    Sku,
}

impl FieldDef for PricingField {
    fn key(&self) -> &'static str {
        match self {
            Self::Folio => "folio",
            Self::Status => "estatus",
            Self::DeliveryDate => "fentrega",
            Self::Customer => "cliente",
            Self::PaymentMethod => "fPago",
            Self::Price => "precio",
            Self::Shipping => "envio",
            Self::Cost => "costo",
            Self::Profit => "ganancia",
            Self::Product => "producto",
            Self::Sku => "sku",
        }
    }

    fn kind(&self) -> FieldKind {
        match self {
            Self::DeliveryDate => FieldKind::Date,
            Self::Status => FieldKind::Status,
            Self::Price | Self::Shipping | Self::Cost | Self::Profit => FieldKind::Number,
            _ => FieldKind::Text,
        }
    }
}

impl FromStr for PricingField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        PricingEntry::FIELDS
            .iter()
            .copied()
            .find(|f| f.key() == s)
            .ok_or_else(|| format!("Invalid pricing column '{}'", s))
    }
}

impl PricingEntry {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: RecordId,
        folio: impl Into<String>,
        status: impl Into<String>,
        delivery_date: NaiveDate,
        customer: impl Into<String>,
        payment_method: impl Into<String>,
        price: f64,
        shipping: f64,
        cost: f64,
        product: impl Into<String>,
        sku: impl Into<String>,
    ) -> Self {
        Self {
            id,
            folio: folio.into(),
            status: status.into(),
            delivery_date,
            customer: customer.into(),
            payment_method: payment_method.into(),
            price,
            shipping,
            cost,
            profit: price - cost,
            product: product.into(),
            sku: sku.into(),
        }
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn shipping(&self) -> f64 {
        self.shipping
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn profit(&self) -> f64 {
        self.profit
    }

    pub fn payment_method(&self) -> &str {
        &self.payment_method
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
        self.profit = self.price - self.cost;
    }

    pub fn set_cost(&mut self, cost: f64) {
        self.cost = cost;
        self.profit = self.price - self.cost;
    }
}

impl Record for PricingEntry {
    type Field = PricingField;

    const ID_PREFIX: &'static str = "PRC";

    const FIELDS: &'static [PricingField] = &[
        PricingField::Folio,
        PricingField::Status,
        PricingField::DeliveryDate,
        PricingField::Customer,
        PricingField::PaymentMethod,
        PricingField::Price,
        PricingField::Shipping,
        PricingField::Cost,
        PricingField::Profit,
        PricingField::Product,
        PricingField::Sku,
    ];

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn status(&self) -> &str {
        &self.status
    }

    fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    fn get(&self, field: PricingField) -> FieldValue {
        match field {
            PricingField::Folio => FieldValue::text(&self.folio),
            PricingField::Status => FieldValue::Status(self.status.clone()),
            PricingField::DeliveryDate => FieldValue::Date(self.delivery_date),
            PricingField::Customer => FieldValue::text(&self.customer),
            PricingField::PaymentMethod => FieldValue::text(&self.payment_method),
            PricingField::Price => FieldValue::Number(self.price),
            PricingField::Shipping => FieldValue::Number(self.shipping),
            PricingField::Cost => FieldValue::Number(self.cost),
            PricingField::Profit => FieldValue::Number(self.profit),
            PricingField::Product => FieldValue::text(&self.product),
            PricingField::Sku => FieldValue::text(&self.sku),
        }
    }

    fn set(&mut self, field: PricingField, value: FieldValue) -> Result<()> {
        match (field, value) {
            (PricingField::Folio, FieldValue::Text(s)) => self.folio = s,
            (PricingField::Status, FieldValue::Status(s)) => self.status = s,
            (PricingField::DeliveryDate, FieldValue::Date(d)) => self.delivery_date = d,
            (PricingField::Customer, FieldValue::Text(s)) => self.customer = s,
            (PricingField::PaymentMethod, FieldValue::Text(s)) => self.payment_method = s,
            (PricingField::Price, FieldValue::Number(n)) => self.set_price(n),
            (PricingField::Shipping, FieldValue::Number(n)) => self.shipping = n,
            (PricingField::Cost, FieldValue::Number(n)) => self.set_cost(n),
            (PricingField::Profit, _) => return Err(CameliaError::ReadOnlyField("ganancia")),
            (PricingField::Product, FieldValue::Text(s)) => self.product = s,
            (PricingField::Sku, FieldValue::Text(s)) => self.sku = s,
            (field, _) => {
                return Err(CameliaError::FieldMismatch {
                    field: field.key(),
                    expected: field.kind().as_str(),
                })
            }
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        require(&self.folio, "folio")?;
        require(&self.customer, "cliente")?;
        require(&self.status, "estatus")
    }

    // Whole-row edits may carry a stale profit; the stored prices win
    fn normalize(&mut self) {
        self.profit = self.price - self.cost;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::store::RecordStore;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> PricingEntry {
        PricingEntry::new(
            RecordId::new("PRC", 1),
            "Venta mayoreo",
            "Entregado",
            date(2023, 11, 5),
            "Tech Distributors",
            "PayPal",
            1200.0,
            50.0,
            800.0,
            "Laptop Stand",
            "LS-001",
        )
    }

    #[test]
    fn test_profit_derived_on_construction() {
        let entry = sample();
        assert_eq!(entry.profit(), 400.0);
    }

    #[test]
    fn test_profit_recomputed_on_cost_change() {
        let mut entry = sample();

        entry.set(PricingField::Cost, FieldValue::Number(900.0)).unwrap();
        assert_eq!(entry.profit(), 300.0);

        entry.set(PricingField::Price, FieldValue::Number(1500.0)).unwrap();
        assert_eq!(entry.profit(), 600.0);
    }

    #[test]
    fn test_profit_rejects_direct_write() {
        let mut entry = sample();
        let err = entry
            .set(PricingField::Profit, FieldValue::Number(9999.0))
            .unwrap_err();

        assert!(matches!(err, CameliaError::ReadOnlyField("ganancia")));
        assert_eq!(entry.profit(), 400.0);
    }

    #[test]
    fn test_shipping_does_not_affect_profit() {
        let mut entry = sample();
        entry
            .set(PricingField::Shipping, FieldValue::Number(200.0))
            .unwrap();
        assert_eq!(entry.profit(), 400.0);
    }

    #[test]
    fn test_row_edit_recomputes_stale_profit() {
        let mut store = RecordStore::new();
        let id = store.add(sample()).unwrap();

        // A whole-row save where the form changed cost but not the derived cell
        let mut edited = sample();
        edited.cost = 900.0;
        edited.profit = 400.0;
        store.edit(&id, edited).unwrap();

        assert_eq!(store.get(&id).unwrap().profit(), 300.0);
    }

    #[test]
    fn test_serialization_uses_original_keys() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["fPago"], "PayPal");
        assert_eq!(json["precio"], 1200.0);
        assert_eq!(json["envio"], 50.0);
        assert_eq!(json["costo"], 800.0);
        assert_eq!(json["ganancia"], 400.0);

        let back: PricingEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, sample());
    }
}
