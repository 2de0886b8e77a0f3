//! Payment collection operations. No delete module: payment records double
//! as the audit trail behind the collection-rate report.

pub mod create;
pub mod get;
pub mod list;
pub mod update;

pub(crate) const COLLECTION: &str = "payments";

pub(crate) fn collection(
    db: &mongodb::Database,
) -> mongodb::Collection<models_portfolio::db::PaymentDocument> {
    db.collection(COLLECTION)
}
