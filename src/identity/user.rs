/**
 * User Identity Record
 *
 * This module defines the identity record the auth backend returns from
 * `GET /auth/me/`. It is the single wire format shared by the client SDK
 * (session synchronization) and the edge gateway (route-guard verification).
 *
 * # Security
 *
 * The record never carries credentials or session tokens; those live in the
 * backend-issued `sessionid` / `csrftoken` cookies which this crate only
 * reads and forwards.
 */

use serde::{Deserialize, Serialize};

/// Role descriptor attached to a user
///
/// The backend models roles as named records; only the name is needed for
/// display and post-login routing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleInfo {
    /// Role name (e.g. "manager", "receptionist", "guest")
    pub name: String,
}

/// Current user identity as reported by the auth backend
///
/// # Fields
///
/// * `id` - Opaque user identifier (stringified; treated as hex-ish for the
///   routing-id derivation, never parsed for meaning anywhere else)
/// * `permissions` - Granted permission codes; membership checks happen in
///   the session store, not here
/// * `is_super_admin` - Implicitly satisfies every permission and role check
/// * `is_team_member` - Grants access to the staff management area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Opaque user id string
    pub id: String,
    /// User's email address
    pub email: String,
    /// User's first name
    pub first_name: String,
    /// User's last name
    pub last_name: String,
    /// Role descriptor
    pub role: RoleInfo,
    /// Granted permission codes
    #[serde(default)]
    pub permissions: Vec<String>,
    /// Super-admin flag; short-circuits all permission checks
    #[serde(default)]
    pub is_super_admin: bool,
    /// Staff/team-member flag; gates the management area
    #[serde(default)]
    pub is_team_member: bool,
}

impl SessionUser {
    /// Whether this user belongs in the staff area after login
    ///
    /// Super admins count as staff even if the team-member flag was never
    /// set on their record.
    pub fn is_staff(&self) -> bool {
        self.is_team_member || self.is_super_admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "id": "7f3a9c01d2b84e55",
            "email": "anna@innkeep.example",
            "first_name": "Anna",
            "last_name": "Marquez",
            "role": { "name": "manager" },
            "permissions": ["bookings.view", "invoices.view"],
            "is_super_admin": false,
            "is_team_member": true
        }"#
    }

    #[test]
    fn test_deserialize_full_record() {
        let user: SessionUser = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(user.email, "anna@innkeep.example");
        assert_eq!(user.role.name, "manager");
        assert_eq!(user.permissions.len(), 2);
        assert!(user.is_team_member);
        assert!(!user.is_super_admin);
    }

    #[test]
    fn test_missing_flags_default_to_false() {
        let json = r#"{
            "id": "1",
            "email": "g@example.com",
            "first_name": "G",
            "last_name": "Uest",
            "role": { "name": "guest" }
        }"#;
        let user: SessionUser = serde_json::from_str(json).unwrap();
        assert!(!user.is_super_admin);
        assert!(!user.is_team_member);
        assert!(user.permissions.is_empty());
    }

    #[test]
    fn test_is_staff() {
        let mut user: SessionUser = serde_json::from_str(sample_json()).unwrap();
        assert!(user.is_staff());

        user.is_team_member = false;
        assert!(!user.is_staff());

        user.is_super_admin = true;
        assert!(user.is_staff());
    }
}
