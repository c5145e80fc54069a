use wave_model::User;

/// Search term normalized for matching; `None` when it should not filter.
pub fn normalize_term(term: &str) -> Option<String> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Whether `user` matches an already normalized term on name or email.
pub fn matches_term(user: &User, normalized: &str) -> bool {
    user.name.to_lowercase().contains(normalized)
        || user.email.to_lowercase().contains(normalized)
}

/// Keep users whose name or email contains `term`, ignoring case and
/// surrounding whitespace. A blank term keeps everyone.
pub fn filter_users<'a>(users: &'a [User], term: &str) -> Vec<&'a User> {
    match normalize_term(term) {
        Some(normalized) => users
            .iter()
            .filter(|user| matches_term(user, &normalized))
            .collect(),
        None => users.iter().collect(),
    }
}
