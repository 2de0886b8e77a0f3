//! Property collection operations.

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

pub(crate) const COLLECTION: &str = "properties";

pub(crate) fn collection(
    db: &mongodb::Database,
) -> mongodb::Collection<models_portfolio::db::PropertyDocument> {
    db.collection(COLLECTION)
}
