/// Segment tests
/// Ensures counting, splitting, line enumeration and indexing treat text as
/// characters, not bytes
use stringier::ext::StrExt;

#[test]
fn test_segments() {
    test_count();
    test_prefix_suffix();
    test_split();
    test_lines();
    test_index();
    test_replace();
}

fn test_count() {
    println!("Testing segments: occurrence counts.");

    assert_eq!("ababab".count_of("ab"), 3);
    assert_eq!("aaa".count_of("aa"), 1); // non-overlapping
    assert_eq!("".count_of("x"), 0);
    assert_eq!("hello".count_of("z"), 0);

    // Empty pattern follows split semantics: segments minus one
    assert_eq!("abc".count_of(""), 4);
}

fn test_prefix_suffix() {
    println!("Testing segments: prefix and suffix.");

    assert!("hello".has_prefix("he"));
    assert!("hello".has_suffix("lo"));
    assert!(!"hello".has_prefix("hello world"));
    assert!(!"hello".has_suffix("hell"));

    // The empty string is a prefix and suffix of everything
    assert!("hello".has_prefix(""));
    assert!("hello".has_suffix(""));
    assert!("".has_prefix(""));
    assert!("".has_suffix(""));
}

fn test_split() {
    println!("Testing segments: split by character.");

    assert_eq!("a,b,,c".split_by(','), vec!["a", "b", "", "c"]);
    assert_eq!(",a,".split_by(','), vec!["", "a", ""]);
    assert_eq!("abc".split_by(','), vec!["abc"]);
}

fn test_lines() {
    println!("Testing segments: line boundaries.");

    assert_eq!("one\ntwo\r\nthree".split_lines(), vec!["one", "two", "three"]);
    assert_eq!("a\r\rb".split_lines(), vec!["a", "", "b"]);
    assert_eq!("a\u{2028}b\u{2029}c".split_lines(), vec!["a", "b", "c"]);
    assert_eq!("a\u{0085}b".split_lines(), vec!["a", "b"]);

    // A trailing terminator does not add an empty line, but a lone one is a line
    assert_eq!("a\n".split_lines(), vec!["a"]);
    assert_eq!("\n".split_lines(), vec![""]);
    assert!("".split_lines().is_empty());
}

fn test_index() {
    println!("Testing segments: first index.");

    assert_eq!("héllo".first_index("é"), Some(1));
    assert_eq!("hello".first_index("l"), Some(2));
    assert_eq!("hello".first_index("z"), None);
    assert_eq!("".first_index("a"), None);

    // Single-character granularity: longer targets never match
    assert_eq!("abc".first_index("ab"), None);

    // A combining sequence counts as one character
    assert_eq!("xe\u{301}y".first_index("e\u{301}"), Some(1));
}

fn test_replace() {
    println!("Testing segments: replace.");

    assert_eq!("a b c".replace_all(" ", "_"), "a_b_c");
    assert_eq!("aaa".replace_all("aa", "b"), "ba");
    assert_eq!("hello".replace_all("z", "y"), "hello");

    // Empty search leaves the text alone
    assert_eq!("abc".replace_all("", "-"), "abc");
}
