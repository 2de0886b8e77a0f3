//! User collection operations.

pub mod create;
pub mod get;
pub mod list;
pub mod update;

pub(crate) const COLLECTION: &str = "users";

pub(crate) fn collection(
    db: &mongodb::Database,
) -> mongodb::Collection<model_user::db::UserDocument> {
    db.collection(COLLECTION)
}
