//! Tenant collection operations. There is deliberately no delete module.

pub mod create;
pub mod get;
pub mod list;
pub mod update;

pub(crate) const COLLECTION: &str = "tenants";

pub(crate) fn collection(
    db: &mongodb::Database,
) -> mongodb::Collection<models_portfolio::db::TenantDocument> {
    db.collection(COLLECTION)
}
