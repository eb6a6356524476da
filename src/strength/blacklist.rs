// src/strength/blacklist.rs

/// Commonly leaked passwords. Stored lowercase; membership checks are
/// case-insensitive.
const BLACKLIST: [&str; 20] = [
    "password", "123456", "12345678", "qwerty", "abc123", "monkey", "master",
    "dragon", "letmein", "login", "admin", "welcome", "shadow", "sunshine",
    "princess", "football", "baseball", "iloveyou", "trustno1", "superman",
];

pub fn is_blacklisted(password: &str) -> bool {
    let lowered = password.to_lowercase();
    BLACKLIST.contains(&lowered.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_entries_match() {
        assert!(is_blacklisted("password"));
        assert!(is_blacklisted("letmein"));
        assert!(is_blacklisted("trustno1"));
    }

    #[test]
    fn membership_is_case_insensitive() {
        assert!(is_blacklisted("PASSWORD"));
        assert!(is_blacklisted("QwErTy"));
        assert!(is_blacklisted("ILoveYou"));
    }

    #[test]
    fn unlisted_passwords_pass() {
        assert!(!is_blacklisted(""));
        assert!(!is_blacklisted("password1"));
        assert!(!is_blacklisted("correct horse battery staple"));
    }
}
