use crate::domain::field::{FieldDef, FieldKind, FieldValue};
use crate::domain::record::{require, Record, RecordId};
use crate::error::{CameliaError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A flower-shop order, the row shape behind both the orders table and the
/// kanban board
///
/// `status`, `shift` and `branch` hold registry names, not keys; renaming a
/// registry entry rewrites them through the aggregate's cascade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: RecordId,
    folio: String,
    #[serde(rename = "cliente")]
    customer: String,
    #[serde(rename = "fcompra")]
    purchase_date: NaiveDate,
    #[serde(rename = "fentrega")]
    delivery_date: NaiveDate,
    #[serde(rename = "estatus")]
    status: String,
    #[serde(rename = "turno")]
    shift: String,
    #[serde(rename = "sucursal")]
    branch: String,
    #[serde(rename = "repartidor")]
    courier: String,
    #[serde(rename = "producto")]
    product: String,
}

/// Columns of the orders table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    Folio,
    Customer,
    PurchaseDate,
    DeliveryDate,
    Status,
    Shift,
    Branch,
    Courier,
    Product,
}

impl FieldDef for OrderField {
    fn key(&self) -> &'static str {
        match self {
            Self::Folio => "folio",
            Self::Customer => "cliente",
            Self::PurchaseDate => "fcompra",
            Self::DeliveryDate => "fentrega",
            Self::Status => "estatus",
            Self::Shift => "turno",
            Self::Branch => "sucursal",
            Self::Courier => "repartidor",
            Self::Product => "producto",
        }
    }

    fn kind(&self) -> FieldKind {
        match self {
            Self::PurchaseDate | Self::DeliveryDate => FieldKind::Date,
            Self::Status => FieldKind::Status,
            _ => FieldKind::Text,
        }
    }
}

impl FromStr for OrderField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Order::FIELDS
            .iter()
            .copied()
            .find(|f| f.key() == s)
            .ok_or_else(|| format!("Invalid order column '{}'", s))
    }
}

impl Order {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: RecordId,
        folio: impl Into<String>,
        customer: impl Into<String>,
        purchase_date: NaiveDate,
        delivery_date: NaiveDate,
        status: impl Into<String>,
        shift: impl Into<String>,
        branch: impl Into<String>,
        courier: impl Into<String>,
        product: impl Into<String>,
    ) -> Self {
        Self {
            id,
            folio: folio.into(),
            customer: customer.into(),
            purchase_date,
            delivery_date,
            status: status.into(),
            shift: shift.into(),
            branch: branch.into(),
            courier: courier.into(),
            product: product.into(),
        }
    }

    pub fn folio(&self) -> &str {
        &self.folio
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn purchase_date(&self) -> NaiveDate {
        self.purchase_date
    }

    pub fn delivery_date(&self) -> NaiveDate {
        self.delivery_date
    }

    pub fn shift(&self) -> &str {
        &self.shift
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn courier(&self) -> &str {
        &self.courier
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub(crate) fn set_shift(&mut self, shift: &str) {
        self.shift = shift.to_string();
    }

    pub(crate) fn set_branch(&mut self, branch: &str) {
        self.branch = branch.to_string();
    }
}

impl Record for Order {
    type Field = OrderField;

    const ID_PREFIX: &'static str = "ORD";

    const FIELDS: &'static [OrderField] = &[
        OrderField::Folio,
        OrderField::Customer,
        OrderField::PurchaseDate,
        OrderField::DeliveryDate,
        OrderField::Status,
        OrderField::Shift,
        OrderField::Branch,
        OrderField::Courier,
        OrderField::Product,
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

    fn get(&self, field: OrderField) -> FieldValue {
        match field {
            OrderField::Folio => FieldValue::text(&self.folio),
            OrderField::Customer => FieldValue::text(&self.customer),
            OrderField::PurchaseDate => FieldValue::Date(self.purchase_date),
            OrderField::DeliveryDate => FieldValue::Date(self.delivery_date),
            OrderField::Status => FieldValue::Status(self.status.clone()),
            OrderField::Shift => FieldValue::text(&self.shift),
            OrderField::Branch => FieldValue::text(&self.branch),
            OrderField::Courier => FieldValue::text(&self.courier),
            OrderField::Product => FieldValue::text(&self.product),
        }
    }

    fn set(&mut self, field: OrderField, value: FieldValue) -> Result<()> {
        match (field, value) {
            (OrderField::Folio, FieldValue::Text(s)) => self.folio = s,
            (OrderField::Customer, FieldValue::Text(s)) => self.customer = s,
            (OrderField::PurchaseDate, FieldValue::Date(d)) => self.purchase_date = d,
            (OrderField::DeliveryDate, FieldValue::Date(d)) => self.delivery_date = d,
            (OrderField::Status, FieldValue::Status(s)) => self.status = s,
            (OrderField::Shift, FieldValue::Text(s)) => self.shift = s,
            (OrderField::Branch, FieldValue::Text(s)) => self.branch = s,
            (OrderField::Courier, FieldValue::Text(s)) => self.courier = s,
            (OrderField::Product, FieldValue::Text(s)) => self.product = s,
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
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Order {
        Order::new(
            RecordId::new("ORD", 1),
            "F-A123",
            "Oficina Central",
            date(2023, 10, 26),
            date(2023, 10, 30),
            "Entregado",
            "Matutino",
            "Centro",
            "Juan Pérez",
            "Ramo de 24 Rosas Rojas",
        )
    }

    #[test]
    fn test_typed_cell_access() {
        let order = sample();

        assert_eq!(
            order.get(OrderField::Customer),
            FieldValue::text("Oficina Central")
        );
        assert_eq!(
            order.get(OrderField::DeliveryDate),
            FieldValue::Date(date(2023, 10, 30))
        );
        assert_eq!(
            order.get(OrderField::Status),
            FieldValue::Status("Entregado".to_string())
        );
    }

    #[test]
    fn test_set_rejects_kind_mismatch() {
        let mut order = sample();
        let err = order
            .set(OrderField::DeliveryDate, FieldValue::text("mañana"))
            .unwrap_err();

        assert!(matches!(
            err,
            CameliaError::FieldMismatch {
                field: "fentrega",
                expected: "date",
            }
        ));
        assert_eq!(order.delivery_date(), date(2023, 10, 30));
    }

    #[test]
    fn test_field_from_str() {
        assert_eq!(OrderField::from_str("fentrega").unwrap(), OrderField::DeliveryDate);
        assert_eq!(OrderField::from_str("sucursal").unwrap(), OrderField::Branch);
        assert!(OrderField::from_str("ganancia").is_err());
    }

    #[test]
    fn test_validate_requires_customer() {
        let mut order = sample();
        order.set(OrderField::Customer, FieldValue::text("")).unwrap();
        assert!(matches!(
            order.validate(),
            Err(CameliaError::MissingField("cliente"))
        ));
    }

    #[test]
    fn test_serialization_uses_original_keys() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["cliente"], "Oficina Central");
        assert_eq!(json["fcompra"], "2023-10-26");
        assert_eq!(json["fentrega"], "2023-10-30");
        assert_eq!(json["estatus"], "Entregado");
        assert_eq!(json["turno"], "Matutino");
        assert_eq!(json["sucursal"], "Centro");
        assert_eq!(json["repartidor"], "Juan Pérez");

        let back: Order = serde_json::from_value(json).unwrap();
        assert_eq!(back, sample());
    }
}
