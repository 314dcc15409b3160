use crate::domain::field::{FieldDef, FieldKind, FieldValue};
use crate::domain::record::{require, Record, RecordId};
use crate::error::{CameliaError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A shipment row: full delivery address plus the assigned courier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    id: RecordId,
    folio: String,
    #[serde(rename = "estatus")]
    status: String,
    #[serde(rename = "fentrega")]
    delivery_date: NaiveDate,
    #[serde(rename = "cliente")]
    customer: String,
    #[serde(rename = "repartidor")]
    courier: String,
    #[serde(rename = "pais")]
    country: String,
    #[serde(rename = "estado")]
    state: String,
    #[serde(rename = "ciudad")]
    city: String,
    #[serde(rename = "codigoPostal")]
    postal_code: String,
    #[serde(rename = "colonia")]
    district: String,
    #[serde(rename = "calle")]
    street: String,
    #[serde(rename = "referencias")]
    notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipmentField {
    Folio,
    Status,
    DeliveryDate,
    Customer,
    Courier,
    Country,
    State,
    City,
    PostalCode,
    District,
    Street,
    Notes,
}

impl FieldDef for ShipmentField {
    fn key(&self) -> &'static str {
        match self {
            Self::Folio => "folio",
            Self::Status => "estatus",
            Self::DeliveryDate => "fentrega",
            Self::Customer => "cliente",
            Self::Courier => "repartidor",
            Self::Country => "pais",
            Self::State => "estado",
            Self::City => "ciudad",
            Self::PostalCode => "codigoPostal",
            Self::District => "colonia",
            Self::Street => "calle",
            Self::Notes => "referencias",
        }
    }

    fn kind(&self) -> FieldKind {
        match self {
            Self::DeliveryDate => FieldKind::Date,
            Self::Status => FieldKind::Status,
            _ => FieldKind::Text,
        }
    }
}

impl FromStr for ShipmentField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Shipment::FIELDS
            .iter()
            .copied()
            .find(|f| f.key() == s)
            .ok_or_else(|| format!("Invalid logistics column '{}'", s))
    }
}

impl Shipment {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: RecordId,
        folio: impl Into<String>,
        status: impl Into<String>,
        delivery_date: NaiveDate,
        customer: impl Into<String>,
        courier: impl Into<String>,
        country: impl Into<String>,
        state: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
        district: impl Into<String>,
        street: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id,
            folio: folio.into(),
            status: status.into(),
            delivery_date,
            customer: customer.into(),
            courier: courier.into(),
            country: country.into(),
            state: state.into(),
            city: city.into(),
            postal_code: postal_code.into(),
            district: district.into(),
            street: street.into(),
            notes: notes.into(),
        }
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn courier(&self) -> &str {
        &self.courier
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

impl Record for Shipment {
    type Field = ShipmentField;

    const ID_PREFIX: &'static str = "LOG";

    const FIELDS: &'static [ShipmentField] = &[
        ShipmentField::Folio,
        ShipmentField::Status,
        ShipmentField::DeliveryDate,
        ShipmentField::Customer,
        ShipmentField::Courier,
        ShipmentField::Country,
        ShipmentField::State,
        ShipmentField::City,
        ShipmentField::PostalCode,
        ShipmentField::District,
        ShipmentField::Street,
        ShipmentField::Notes,
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

    fn get(&self, field: ShipmentField) -> FieldValue {
        match field {
            ShipmentField::Folio => FieldValue::text(&self.folio),
            ShipmentField::Status => FieldValue::Status(self.status.clone()),
            ShipmentField::DeliveryDate => FieldValue::Date(self.delivery_date),
            ShipmentField::Customer => FieldValue::text(&self.customer),
            ShipmentField::Courier => FieldValue::text(&self.courier),
            ShipmentField::Country => FieldValue::text(&self.country),
            ShipmentField::State => FieldValue::text(&self.state),
            ShipmentField::City => FieldValue::text(&self.city),
            ShipmentField::PostalCode => FieldValue::text(&self.postal_code),
            ShipmentField::District => FieldValue::text(&self.district),
            ShipmentField::Street => FieldValue::text(&self.street),
            ShipmentField::Notes => FieldValue::text(&self.notes),
        }
    }

    fn set(&mut self, field: ShipmentField, value: FieldValue) -> Result<()> {
        match (field, value) {
            (ShipmentField::Folio, FieldValue::Text(s)) => self.folio = s,
            (ShipmentField::Status, FieldValue::Status(s)) => self.status = s,
            (ShipmentField::DeliveryDate, FieldValue::Date(d)) => self.delivery_date = d,
            (ShipmentField::Customer, FieldValue::Text(s)) => self.customer = s,
            (ShipmentField::Courier, FieldValue::Text(s)) => self.courier = s,
            (ShipmentField::Country, FieldValue::Text(s)) => self.country = s,
            (ShipmentField::State, FieldValue::Text(s)) => self.state = s,
            (ShipmentField::City, FieldValue::Text(s)) => self.city = s,
            (ShipmentField::PostalCode, FieldValue::Text(s)) => self.postal_code = s,
            (ShipmentField::District, FieldValue::Text(s)) => self.district = s,
            (ShipmentField::Street, FieldValue::Text(s)) => self.street = s,
            (ShipmentField::Notes, FieldValue::Text(s)) => self.notes = s,
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
