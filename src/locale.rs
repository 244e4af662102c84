/// # Locale
/// The user's locale descriptor, straight from the environment.

/// Resolve the current locale the POSIX way: `LC_ALL` wins, then
/// `LC_MESSAGES`, then `LANG`. Falls back to `"C"` when none is set.
pub fn current_locale() -> String {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| String::from("C"))
}
