/// Locale tests
/// All assertions share one #[test] because they tweak the process environment
use stringier::locale::current_locale;

#[test]
fn test_locale_resolution() {
    println!("Testing locale: POSIX resolution order.");

    std::env::set_var("LC_ALL", "en_US.UTF-8");
    std::env::set_var("LANG", "fr_FR.UTF-8");
    assert_eq!(current_locale(), "en_US.UTF-8");

    std::env::remove_var("LC_ALL");
    std::env::set_var("LC_MESSAGES", "de_DE.UTF-8");
    assert_eq!(current_locale(), "de_DE.UTF-8");

    std::env::remove_var("LC_MESSAGES");
    assert_eq!(current_locale(), "fr_FR.UTF-8");

    std::env::remove_var("LANG");
    assert_eq!(current_locale(), "C");
}
