/// # Random
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Generate a string of `length` characters drawn uniformly, with
/// replacement, from `[a-zA-Z0-9]`. Length 0 gives the empty string.
/// Not a cryptographic source.
pub fn random_string(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
