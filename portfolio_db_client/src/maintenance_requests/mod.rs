//! Maintenance request collection operations. No delete module: cancelled
//! requests are closed with status `cancelled` instead.

pub mod create;
pub mod get;
pub mod list;
pub mod update;

pub(crate) const COLLECTION: &str = "maintenance_requests";

pub(crate) fn collection(
    db: &mongodb::Database,
) -> mongodb::Collection<models_portfolio::db::MaintenanceRequestDocument> {
    db.collection(COLLECTION)
}
