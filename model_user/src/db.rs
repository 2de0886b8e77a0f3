//! User document type and conversions.

use serde::{Deserialize, Serialize};

use crate::{Role, User};

/// Raw user document as stored in the `users` collection. The only place the
/// password hash appears.
#[derive(Clone, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub assigned_properties: Vec<String>,
    /// Argon2id hash in PHC string format.
    pub password_hash: String,
    pub created_at: bson::DateTime,
}

// NOTE: no Debug derive; a debug-logged document must not leak the hash
impl std::fmt::Debug for UserDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserDocument")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

impl From<UserDocument> for User {
    fn from(doc: UserDocument) -> Self {
        User {
            id: doc.id,
            name: doc.name,
            email: doc.email,
            role: doc.role,
            assigned_properties: doc.assigned_properties,
            created_at: doc.created_at.to_chrono(),
        }
    }
}
