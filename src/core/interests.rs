use std::collections::HashSet;

/// Check whether a user's interest set overlaps the wanted list at all.
///
/// This is the only predicate the directory scan needs: one shared interest
/// makes a candidate a match.
#[inline]
pub fn intersects(have: &HashSet<String>, wanted: &[String]) -> bool {
    wanted.iter().any(|interest| have.contains(interest))
}

/// Collect the interests two users have in common.
///
/// Preserves the order of `wanted`, which callers keep in append order.
#[inline]
pub fn shared_interests(have: &HashSet<String>, wanted: &[String]) -> Vec<String> {
    wanted
        .iter()
        .filter(|interest| have.contains(*interest))
        .cloned()
        .collect()
}
