//! Payment insert operations.

use models_portfolio::Payment;
use models_portfolio::api::CreatePayment;
use models_portfolio::db::PaymentDocument;
use mongodb::Database;
use uuid::Uuid;

use crate::error::PortfolioDatabaseError;

type Result<T> = std::result::Result<T, PortfolioDatabaseError>;

/// Inserts a new payment record with a generated id.
#[tracing::instrument(skip(db, input), fields(tenant_id = %input.tenant_id, amount = input.amount))]
pub async fn create_payment(db: &Database, input: CreatePayment) -> Result<Payment> {
    let payment = Payment {
        id: Uuid::now_v7().to_string(),
        tenant_id: input.tenant_id,
        property_id: input.property_id,
        amount: input.amount,
        payment_type: input.payment_type,
        status: input.status,
        due_date: input.due_date,
        paid_date: input.paid_date,
        description: input.description,
        method: input.method,
    };

    super::collection(db)
        .insert_one(PaymentDocument::from(payment.clone()))
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "failed to insert payment");
            PortfolioDatabaseError::Query(e)
        })?;

    tracing::info!(id = %payment.id, "created payment");
    Ok(payment)
}
