use crate::domain::field::{FieldDef, FieldKind, FieldValue};
use crate::domain::record::{require, Record, RecordId};
use crate::error::{CameliaError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A staff assignment row: the dedication card to write and internal notes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffTask {
    id: RecordId,
    folio: String,
    #[serde(rename = "estatus")]
    status: String,
    #[serde(rename = "fentrega")]
    delivery_date: NaiveDate,
    #[serde(rename = "cliente")]
    customer: String,
    #[serde(rename = "dedicatoria")]
    dedication: String,
    #[serde(rename = "notas")]
    notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffField {
    Folio,
    Status,
    DeliveryDate,
    Customer,
    Dedication,
    Notes,
}

impl FieldDef for StaffField {
    fn key(&self) -> &'static str {
        match self {
            Self::Folio => "folio",
            Self::Status => "estatus",
            Self::DeliveryDate => "fentrega",
            Self::Customer => "cliente",
            Self::Dedication => "dedicatoria",
            Self::Notes => "notas",
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

impl FromStr for StaffField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        StaffTask::FIELDS
            .iter()
            .copied()
            .find(|f| f.key() == s)
            .ok_or_else(|| format!("Invalid staff column '{}'", s))
    }
}

impl StaffTask {
    pub fn new(
        id: RecordId,
        folio: impl Into<String>,
        status: impl Into<String>,
        delivery_date: NaiveDate,
        customer: impl Into<String>,
        dedication: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id,
            folio: folio.into(),
            status: status.into(),
            delivery_date,
            customer: customer.into(),
            dedication: dedication.into(),
            notes: notes.into(),
        }
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn dedication(&self) -> &str {
        &self.dedication
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }
}

impl Record for StaffTask {
    type Field = StaffField;

    const ID_PREFIX: &'static str = "PER";

    const FIELDS: &'static [StaffField] = &[
        StaffField::Folio,
        StaffField::Status,
        StaffField::DeliveryDate,
        StaffField::Customer,
        StaffField::Dedication,
        StaffField::Notes,
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

    fn get(&self, field: StaffField) -> FieldValue {
        match field {
            StaffField::Folio => FieldValue::text(&self.folio),
            StaffField::Status => FieldValue::Status(self.status.clone()),
            StaffField::DeliveryDate => FieldValue::Date(self.delivery_date),
            StaffField::Customer => FieldValue::text(&self.customer),
            StaffField::Dedication => FieldValue::text(&self.dedication),
            StaffField::Notes => FieldValue::text(&self.notes),
        }
    }

    fn set(&mut self, field: StaffField, value: FieldValue) -> Result<()> {
        match (field, value) {
            (StaffField::Folio, FieldValue::Text(s)) => self.folio = s,
            (StaffField::Status, FieldValue::Status(s)) => self.status = s,
            (StaffField::DeliveryDate, FieldValue::Date(d)) => self.delivery_date = d,
            (StaffField::Customer, FieldValue::Text(s)) => self.customer = s,
            (StaffField::Dedication, FieldValue::Text(s)) => self.dedication = s,
            (StaffField::Notes, FieldValue::Text(s)) => self.notes = s,
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
