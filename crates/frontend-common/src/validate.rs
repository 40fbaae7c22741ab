//! Form validation. Everything here runs before any network call and feeds
//! inline field errors; validation failures are never logged remotely.

/// Validate an email address for the magic-link form.
pub fn email(value: &str) -> Result<(), &'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("Email is required");
    }
    let Some((local, domain)) = trimmed.split_once('@') else {
        return Err("Enter a valid email address");
    };
    let domain_ok = domain
        .split_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty());
    if local.is_empty() || !domain_ok || trimmed.contains(char::is_whitespace) {
        return Err("Enter a valid email address");
    }
    Ok(())
}

/// Validate the onboarding display name. Returns the trimmed name.
pub fn display_name(value: &str) -> Result<&str, &'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("Please enter your name");
    }
    Ok(trimmed)
}

/// Validate a habit title. Returns the trimmed title.
pub fn habit_title(value: &str) -> Result<&str, &'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("Give your habit a name");
    }
    Ok(trimmed)
}

/// Optional age field: empty is fine, otherwise must parse to 1..=120.
pub fn age(value: &str) -> Result<Option<u8>, &'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<u8>() {
        Ok(age @ 1..=120) => Ok(Some(age)),
        _ => Err("Enter a valid age"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_emails_pass() {
        assert!(email("user@example.com").is_ok());
        assert!(email("  a.b+c@sub.example.org  ").is_ok());
    }

    #[test]
    fn malformed_emails_fail() {
        assert!(email("").is_err());
        assert!(email("   ").is_err());
        assert!(email("not-an-email").is_err());
        assert!(email("@example.com").is_err());
        assert!(email("user@").is_err());
        assert!(email("user@nodot").is_err());
        assert!(email("user name@example.com").is_err());
    }

    #[test]
    fn names_are_trimmed() {
        assert_eq!(display_name("  Ada  "), Ok("Ada"));
        assert!(display_name("   ").is_err());
    }

    #[test]
    fn habit_titles_require_content() {
        assert_eq!(habit_title("Reading"), Ok("Reading"));
        assert!(habit_title("").is_err());
    }

    #[test]
    fn age_is_optional_but_bounded() {
        assert_eq!(age(""), Ok(None));
        assert_eq!(age("30"), Ok(Some(30)));
        assert!(age("0").is_err());
        assert!(age("121").is_err());
        assert!(age("abc").is_err());
    }
}
