/// # Validate
/// Shape checks and character-class predicates. These never fail: malformed
/// input just answers `false`.
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// Shape heuristic, not full RFC validation. Anchored so the whole text has
/// to look like an address, not just some substring of it.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email pattern")
});

/// ### StrCheck
pub trait StrCheck {
    /// `true` if the whole text is shaped like an email address.
    fn is_email(&self) -> bool;
    /// `true` if the text starts with `http://` and parses as a URL.
    fn is_http_url(&self) -> bool;
    /// `true` if the text starts with `https://` and parses as a URL.
    fn is_https_url(&self) -> bool;
    /// `true` if the text contains at least one numeric character.
    fn has_numbers(&self) -> bool;
    /// `true` if the text contains at least one letter.
    fn has_letters(&self) -> bool;
    /// `true` if the text is non-empty and every character is alphanumeric.
    fn is_alphanumeric(&self) -> bool;
    /// `true` if the text has letters and no numbers.
    fn is_alphabetic(&self) -> bool;
    /// `true` if the text has numbers and no letters.
    fn is_numeric(&self) -> bool;
}

impl StrCheck for str {
    fn is_email(&self) -> bool {
        EMAIL_SHAPE.is_match(self)
    }

    fn is_http_url(&self) -> bool {
        self.starts_with("http://") && Url::parse(self).is_ok()
    }

    fn is_https_url(&self) -> bool {
        self.starts_with("https://") && Url::parse(self).is_ok()
    }

    fn has_numbers(&self) -> bool {
        self.chars().any(char::is_numeric)
    }

    fn has_letters(&self) -> bool {
        self.chars().any(char::is_alphabetic)
    }

    fn is_alphanumeric(&self) -> bool {
        !self.is_empty() && self.chars().all(char::is_alphanumeric)
    }

    fn is_alphabetic(&self) -> bool {
        self.has_letters() && !self.has_numbers()
    }

    fn is_numeric(&self) -> bool {
        self.has_numbers() && !self.has_letters()
    }
}
