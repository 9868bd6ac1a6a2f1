//! Property-based tests for the routing-identifier deriver

use inngate::identity::routing_id::{generate_routing_id, verify_routing_id};
use inngate::identity::user::{RoleInfo, SessionUser};
use proptest::prelude::*;

fn user(id: String, first_name: String, last_name: String) -> SessionUser {
    SessionUser {
        id,
        email: "user@innkeep.example".to_string(),
        first_name,
        last_name,
        role: RoleInfo { name: "guest".to_string() },
        permissions: Vec::new(),
        is_super_admin: false,
        is_team_member: false,
    }
}

proptest! {
    #[test]
    fn token_is_deterministic(
        id in "[0-9a-fA-F-]{0,64}",
        first in "[A-Za-z]{1,12}",
        last in "[A-Za-z ]{1,16}",
    ) {
        let u = user(id, first, last);
        prop_assert_eq!(generate_routing_id(&u), generate_routing_id(&u));
    }

    #[test]
    fn suffix_stays_in_six_digit_range(id in ".{0,80}") {
        let u = user(id, "Anna".to_string(), "Marquez".to_string());
        let token = generate_routing_id(&u);
        let suffix: u64 = token
            .rsplit('-')
            .next()
            .expect("token has a suffix")
            .parse()
            .expect("suffix is numeric");
        prop_assert!((100_000..=999_999).contains(&suffix));
    }

    #[test]
    fn generated_token_always_verifies(
        id in "[0-9a-f]{1,40}",
        first in "[A-Za-z]{1,12}",
        last in "[A-Za-z]{1,16}",
    ) {
        let u = user(id, first, last);
        let token = generate_routing_id(&u);
        prop_assert!(verify_routing_id(&token, Some(&u)));
        prop_assert!(!verify_routing_id(&token, None));
    }

    #[test]
    fn name_part_contains_no_whitespace(
        first in "[A-Za-z]{1,12}",
        last in "[A-Za-z ]{1,24}",
    ) {
        let u = user("7f3a9c01".to_string(), first, last);
        let token = generate_routing_id(&u);
        prop_assert!(!token.contains(char::is_whitespace));
    }
}
