//! Role-based visibility scope.
//!
//! A superadmin sees every document; a property_manager sees only documents
//! tied to the properties in their assignment list. The scope is applied in
//! the Mongo filter document on reads, and checked explicitly before writes,
//! so filtering happens in the service rather than in any client.

use bson::{Document, doc};
use model_user::{Role, User};

/// The set of properties a caller is allowed to see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisibilityScope {
    /// No restriction.
    Full,
    /// Restricted to the given property ids.
    Assigned(Vec<String>),
}

impl VisibilityScope {
    /// Derive the scope from a user record.
    pub fn for_user(user: &User) -> Self {
        match user.role {
            Role::Superadmin => VisibilityScope::Full,
            Role::PropertyManager => VisibilityScope::Assigned(user.assigned_properties.clone()),
        }
    }

    /// Whether documents tied to `property_id` are visible in this scope.
    pub fn allows_property(&self, property_id: &str) -> bool {
        match self {
            VisibilityScope::Full => true,
            VisibilityScope::Assigned(ids) => ids.iter().any(|id| id == property_id),
        }
    }

    /// Filter clause for collections keyed by a `property_id` field
    /// (tenants, payments, maintenance requests).
    pub fn property_id_filter(&self) -> Document {
        match self {
            VisibilityScope::Full => doc! {},
            VisibilityScope::Assigned(ids) => doc! { "property_id": { "$in": ids.clone() } },
        }
    }

    /// Filter clause for the properties collection itself, where the
    /// property id is the document key.
    pub fn document_id_filter(&self) -> Document {
        match self {
            VisibilityScope::Full => doc! {},
            VisibilityScope::Assigned(ids) => doc! { "_id": { "$in": ids.clone() } },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn manager_with(assigned: &[&str]) -> User {
        User {
            id: "u1".to_string(),
            name: "Test Manager".to_string(),
            email: "manager@example.com".to_string(),
            role: Role::PropertyManager,
            assigned_properties: assigned.iter().map(|s| s.to_string()).collect(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn superadmin_scope_is_unrestricted() {
        let user = User {
            role: Role::Superadmin,
            ..manager_with(&[])
        };
        let scope = VisibilityScope::for_user(&user);
        assert_eq!(scope, VisibilityScope::Full);
        assert!(scope.allows_property("anything"));
        assert_eq!(scope.property_id_filter(), doc! {});
    }

    #[test]
    fn manager_scope_allows_only_assigned_properties() {
        let scope = VisibilityScope::for_user(&manager_with(&["p1"]));
        assert!(scope.allows_property("p1"));
        assert!(!scope.allows_property("p2"));
    }

    #[test]
    fn manager_scope_filters_on_property_id() {
        let scope = VisibilityScope::for_user(&manager_with(&["p1", "p3"]));
        assert_eq!(
            scope.property_id_filter(),
            doc! { "property_id": { "$in": ["p1", "p3"] } }
        );
        assert_eq!(
            scope.document_id_filter(),
            doc! { "_id": { "$in": ["p1", "p3"] } }
        );
    }

    #[test]
    fn manager_with_no_assignments_sees_nothing() {
        let scope = VisibilityScope::for_user(&manager_with(&[]));
        assert!(!scope.allows_property("p1"));
        assert_eq!(
            scope.property_id_filter(),
            doc! { "property_id": { "$in": Vec::<String>::new() } }
        );
    }
}
