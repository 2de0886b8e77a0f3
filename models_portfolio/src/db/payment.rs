//! Payment document type and conversions.

use serde::{Deserialize, Serialize};

use crate::shared::{Payment, PaymentMethod, PaymentStatus, PaymentType};

/// Raw payment document as stored in the `payments` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub tenant_id: String,
    pub property_id: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub payment_type: PaymentType,
    pub status: PaymentStatus,
    pub due_date: bson::DateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_date: Option<bson::DateTime>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<PaymentMethod>,
}

impl From<PaymentDocument> for Payment {
    fn from(doc: PaymentDocument) -> Self {
        Payment {
            id: doc.id,
            tenant_id: doc.tenant_id,
            property_id: doc.property_id,
            amount: doc.amount,
            payment_type: doc.payment_type,
            status: doc.status,
            due_date: doc.due_date.to_chrono(),
            paid_date: doc.paid_date.map(|d| d.to_chrono()),
            description: doc.description,
            method: doc.method,
        }
    }
}

impl From<Payment> for PaymentDocument {
    fn from(payment: Payment) -> Self {
        PaymentDocument {
            id: payment.id,
            tenant_id: payment.tenant_id,
            property_id: payment.property_id,
            amount: payment.amount,
            payment_type: payment.payment_type,
            status: payment.status,
            due_date: bson::DateTime::from_chrono(payment.due_date),
            paid_date: payment.paid_date.map(bson::DateTime::from_chrono),
            description: payment.description,
            method: payment.method,
        }
    }
}
