/**
 * Auth Client Types
 *
 * Request and response types for the backend's identity endpoints, shared
 * across the login, register, logout and password-reset operations, plus
 * the navigation targets the UI executes after an auth transition.
 */

use serde::{Deserialize, Serialize};

use crate::identity::user::SessionUser;

/// Login request
///
/// Credentials submitted to `POST /auth/login/`.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    /// User's email address
    pub email: String,
    /// User's password (verified by the backend, never stored here)
    pub password: String,
}

/// Registration request
///
/// Account details submitted to `POST /auth/register/`.
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// User's email address
    pub email: String,
    /// User's password
    pub password: String,
    /// User's first name
    pub first_name: String,
    /// User's last name
    pub last_name: String,
}

/// Password-reset request for `POST /auth/password-reset/`
#[derive(Debug, Serialize, Deserialize)]
pub struct PasswordResetRequest {
    /// Email address to send the reset link to
    pub email: String,
}

/// Password-reset confirmation for `POST /auth/password-reset/confirm/`
#[derive(Debug, Serialize, Deserialize)]
pub struct PasswordResetConfirmRequest {
    /// Out-of-band reset token from the email link
    pub token: String,
    /// Replacement password
    pub new_password: String,
}

/// Body returned by the login and register endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthPayload {
    /// The freshly authenticated user
    pub user: SessionUser,
}

/// Where the UI should navigate after an auth transition
///
/// The auth layer decides the destination; executing the navigation is the
/// embedding UI's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    /// Staff management area, for team members and super admins
    StaffArea,
    /// Guest dashboard, for everyone else
    GuestDashboard,
    /// Public home page
    Home,
}

impl NavTarget {
    /// Route path for this destination
    pub fn path(&self) -> &'static str {
        match self {
            NavTarget::StaffArea => "/management",
            NavTarget::GuestDashboard => "/dashboard",
            NavTarget::Home => "/",
        }
    }

    /// Destination after a successful login for this user
    pub fn after_login(user: &SessionUser) -> Self {
        if user.is_staff() {
            NavTarget::StaffArea
        } else {
            NavTarget::GuestDashboard
        }
    }
}

/// Result of a successful login or registration
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The authenticated user, as also written to the session store
    pub user: SessionUser,
    /// Where the UI should take the user next
    pub destination: NavTarget,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::user::RoleInfo;

    fn user(team: bool, admin: bool) -> SessionUser {
        SessionUser {
            id: "1a2b".to_string(),
            email: "u@innkeep.example".to_string(),
            first_name: "U".to_string(),
            last_name: "Ser".to_string(),
            role: RoleInfo { name: if team { "manager" } else { "guest" }.to_string() },
            permissions: Vec::new(),
            is_super_admin: admin,
            is_team_member: team,
        }
    }

    #[test]
    fn test_after_login_routes_staff_to_management() {
        assert_eq!(NavTarget::after_login(&user(true, false)), NavTarget::StaffArea);
        assert_eq!(NavTarget::after_login(&user(false, true)), NavTarget::StaffArea);
        assert_eq!(NavTarget::after_login(&user(false, false)), NavTarget::GuestDashboard);
    }

    #[test]
    fn test_paths() {
        assert_eq!(NavTarget::StaffArea.path(), "/management");
        assert_eq!(NavTarget::GuestDashboard.path(), "/dashboard");
        assert_eq!(NavTarget::Home.path(), "/");
    }
}
