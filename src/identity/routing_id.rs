/**
 * Vanity Routing-Identifier Derivation
 *
 * Derives the stable per-user routing slug used for shareable "my page"
 * URLs, e.g. `AMARQUEZ-482913`. The slug is a presentation artifact: it is
 * reconstructible by anyone who knows the user's name, so it must never be
 * used as a capability. Access control stays with the session store and the
 * edge route guard.
 *
 * # Determinism
 *
 * The same identity record always yields the same token. Shared URLs must
 * stay valid across sessions and server restarts, so nothing here may read
 * clocks, counters or randomness.
 */

use crate::identity::user::SessionUser;

/// Hex chunk width used when folding the user id
const CHUNK_LEN: usize = 4;

/// Size of the inclusive suffix range [100000, 999999]
const SUFFIX_SPAN: u64 = 900_000;

/// Lower bound of the suffix range
const SUFFIX_OFFSET: u64 = 100_000;

/// Derive the routing slug for a user: `<INITIAL><LASTNAME>-<6 digits>`
///
/// The name part is the uppercased first-name initial followed by the
/// uppercased, whitespace-stripped last name. The numeric suffix is a
/// position-weighted fold of the id's hex digits into six digits.
pub fn generate_routing_id(user: &SessionUser) -> String {
    let initial: String = user
        .first_name
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default();

    let surname: String = user
        .last_name
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(|c| c.to_uppercase())
        .collect();

    format!("{}{}-{}", initial, surname, fold_id(&user.id))
}

/// Check whether a URL token matches the given user
///
/// Recomputes the expected token and compares for string equality. A `None`
/// user never matches. This confirms that a URL belongs to the viewer; it is
/// not an access check.
pub fn verify_routing_id(token: &str, user: Option<&SessionUser>) -> bool {
    match user {
        Some(user) => generate_routing_id(user) == token,
        None => false,
    }
}

/// Fold an opaque id string into the six-digit suffix range
///
/// Non-hex characters (UUID hyphens and the like) are skipped. The remaining
/// hex digits are split into `CHUNK_LEN`-wide chunks, each parsed base-16
/// and summed with weight = 1-based chunk position, then reduced modulo
/// `SUFFIX_SPAN` and offset into [100000, 999999].
fn fold_id(id: &str) -> u64 {
    let hex: String = id.chars().filter(|c| c.is_ascii_hexdigit()).collect();

    let mut hash: u64 = 0;
    for (position, chunk) in hex.as_bytes().chunks(CHUNK_LEN).enumerate() {
        // chunks of an ASCII-filtered string are valid UTF-8
        let chunk = std::str::from_utf8(chunk).unwrap_or("");
        let value = u64::from_str_radix(chunk, 16).unwrap_or(0);
        hash = hash.wrapping_add(value.wrapping_mul(position as u64 + 1));
    }

    hash % SUFFIX_SPAN + SUFFIX_OFFSET
}
