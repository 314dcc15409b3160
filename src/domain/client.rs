use crate::domain::field::{FieldDef, FieldKind, FieldValue};
use crate::domain::record::{require, Record, RecordId};
use crate::error::{CameliaError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A client contact row: who ordered and who receives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRecord {
    id: RecordId,
    folio: String,
    #[serde(rename = "estatus")]
    status: String,
    #[serde(rename = "fentrega")]
    delivery_date: NaiveDate,
    #[serde(rename = "cliente")]
    customer: String,
    #[serde(rename = "correo")]
    email: String,
    #[serde(rename = "telefono")]
    phone: String,
    #[serde(rename = "destinatario")]
    recipient: String,
    #[serde(rename = "telDestino")]
    recipient_phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientField {
    Folio,
    Status,
    DeliveryDate,
    Customer,
    Email,
    Phone,
    Recipient,
    RecipientPhone,
}

impl FieldDef for ClientField {
    fn key(&self) -> &'static str {
        match self {
            Self::Folio => "folio",
            Self::Status => "estatus",
            Self::DeliveryDate => "fentrega",
            Self::Customer => "cliente",
            Self::Email => "correo",
            Self::Phone => "telefono",
            Self::Recipient => "destinatario",
            Self::RecipientPhone => "telDestino",
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

impl FromStr for ClientField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ClientRecord::FIELDS
            .iter()
            .copied()
            .find(|f| f.key() == s)
            .ok_or_else(|| format!("Invalid client column '{}'", s))
    }
}

impl ClientRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: RecordId,
        folio: impl Into<String>,
        status: impl Into<String>,
        delivery_date: NaiveDate,
        customer: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        recipient: impl Into<String>,
        recipient_phone: impl Into<String>,
    ) -> Self {
        Self {
            id,
            folio: folio.into(),
            status: status.into(),
            delivery_date,
            customer: customer.into(),
            email: email.into(),
            phone: phone.into(),
            recipient: recipient.into(),
            recipient_phone: recipient_phone.into(),
        }
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }
}

impl Record for ClientRecord {
    type Field = ClientField;

    const ID_PREFIX: &'static str = "CLI";

    const FIELDS: &'static [ClientField] = &[
        ClientField::Folio,
        ClientField::Status,
        ClientField::DeliveryDate,
        ClientField::Customer,
        ClientField::Email,
        ClientField::Phone,
        ClientField::Recipient,
        ClientField::RecipientPhone,
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

    fn get(&self, field: ClientField) -> FieldValue {
        match field {
            ClientField::Folio => FieldValue::text(&self.folio),
            ClientField::Status => FieldValue::Status(self.status.clone()),
            ClientField::DeliveryDate => FieldValue::Date(self.delivery_date),
            ClientField::Customer => FieldValue::text(&self.customer),
            ClientField::Email => FieldValue::text(&self.email),
            ClientField::Phone => FieldValue::text(&self.phone),
            ClientField::Recipient => FieldValue::text(&self.recipient),
            ClientField::RecipientPhone => FieldValue::text(&self.recipient_phone),
        }
    }

    fn set(&mut self, field: ClientField, value: FieldValue) -> Result<()> {
        match (field, value) {
            (ClientField::Folio, FieldValue::Text(s)) => self.folio = s,
            (ClientField::Status, FieldValue::Status(s)) => self.status = s,
            (ClientField::DeliveryDate, FieldValue::Date(d)) => self.delivery_date = d,
            (ClientField::Customer, FieldValue::Text(s)) => self.customer = s,
            (ClientField::Email, FieldValue::Text(s)) => self.email = s,
            (ClientField::Phone, FieldValue::Text(s)) => self.phone = s,
            (ClientField::Recipient, FieldValue::Text(s)) => self.recipient = s,
            (ClientField::RecipientPhone, FieldValue::Text(s)) => self.recipient_phone = s,
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
