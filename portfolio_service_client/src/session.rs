//! Locally persisted session.
//!
//! The signed-in user and their token are serialized to a JSON file and read
//! back on start, so a restart does not force a fresh sign-in. Stale tokens
//! surface as 401s on the first call; callers drop the file and sign in
//! again.

use anyhow::{Context, Result};
use model_user::{AuthResponse, User};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl From<AuthResponse> for Session {
    fn from(auth: AuthResponse) -> Self {
        Session {
            token: auth.token,
            user: auth.user,
        }
    }
}

impl Session {
    /// Read a persisted session. `Ok(None)` when none has been saved yet.
    pub fn load(path: &Path) -> Result<Option<Session>> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e).context("could not read session file"),
        };
        let session = serde_json::from_str(&raw).context("could not parse session file")?;
        Ok(Some(session))
    }

    /// Persist the session, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("could not create session directory")?;
        }
        let raw = serde_json::to_string_pretty(self).context("could not serialize session")?;
        std::fs::write(path, raw).context("could not write session file")?;
        Ok(())
    }

    /// Forget the persisted session, e.g. on sign-out. Missing file is fine.
    pub fn clear(path: &Path) -> Result<()> {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).context("could not remove session file"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use model_user::Role;

    fn session() -> Session {
        Session {
            token: "header.claims.signature".to_string(),
            user: User {
                id: "u1".to_string(),
                name: "Sarah Admin".to_string(),
                email: "sarah@example.com".to_string(),
                role: Role::Superadmin,
                assigned_properties: vec![],
                created_at: Utc::now(),
            },
        }
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        assert!(Session::load(&path).unwrap().is_none());

        session().save(&path).unwrap();
        let restored = Session::load(&path).unwrap().unwrap();
        assert_eq!(restored.token, "header.claims.signature");
        assert_eq!(restored.user.id, "u1");

        Session::clear(&path).unwrap();
        assert!(Session::load(&path).unwrap().is_none());
        // Clearing twice stays quiet
        Session::clear(&path).unwrap();
    }
}
