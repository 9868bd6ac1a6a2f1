//! Shared helpers for the integration suites
//!
//! Provides a wiremock stand-in for the auth backend and a gateway test
//! server wired against it.
#![allow(dead_code)] // each suite uses a different subset of the helpers

use axum_test::TestServer;
use inngate::gateway::server::config::GatewayConfig;
use inngate::gateway::server::init::create_app;
use serde_json::json;

/// Identity body for a staff user, as `GET /auth/me/` reports it
pub fn team_member_body() -> serde_json::Value {
    json!({
        "id": "7f3a9c01d2b84e55",
        "email": "anna@innkeep.example",
        "first_name": "Anna",
        "last_name": "Marquez",
        "role": { "name": "manager" },
        "permissions": ["bookings.view", "invoices.view"],
        "is_super_admin": false,
        "is_team_member": true
    })
}

/// Identity body for a plain guest
pub fn guest_body() -> serde_json::Value {
    json!({
        "id": "0c11d2b84e557f3a",
        "email": "guest@innkeep.example",
        "first_name": "Gil",
        "last_name": "Espinoza",
        "role": { "name": "guest" },
        "permissions": [],
        "is_super_admin": false,
        "is_team_member": false
    })
}

/// Identity body for a super admin with an empty permission list
pub fn super_admin_body() -> serde_json::Value {
    json!({
        "id": "d2b84e557f3a9c01",
        "email": "root@innkeep.example",
        "first_name": "Rei",
        "last_name": "Okafor",
        "role": { "name": "owner" },
        "permissions": [],
        "is_super_admin": true,
        "is_team_member": false
    })
}

/// Gateway test server pointed at the given backend URL
///
/// Uses a short verification timeout so timeout scenarios stay fast.
pub async fn gateway_for(backend_url: &str) -> TestServer {
    let config: GatewayConfig = toml::from_str(&format!(
        r#"
        backend_url = "{backend_url}"
        verify_timeout_secs = 1
        "#
    ))
    .expect("test gateway config parses");

    let app = create_app(config).expect("test gateway app builds");
    TestServer::new(app).expect("test server starts")
}
