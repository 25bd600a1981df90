// Host-side tests for in-page link resolution.

#![allow(dead_code)]
mod anchor {
    include!("../src/core/anchor.rs");
}

use anchor::*;

#[test]
fn fragment_resolves_to_element_id() {
    assert_eq!(fragment_id("#about"), Some("about"));
    assert_eq!(fragment_id("#contact-me"), Some("contact-me"));
}

#[test]
fn bare_hash_has_no_target() {
    assert_eq!(fragment_id("#"), None);
}

#[test]
fn other_links_have_no_fragment_target() {
    assert_eq!(fragment_id(""), None);
    assert_eq!(fragment_id("about"), None);
    assert_eq!(fragment_id("/blog#latest"), None);
    assert_eq!(fragment_id("https://example.com/#top"), None);
}

#[test]
fn only_hash_links_are_intercepted() {
    assert!(is_in_page("#"));
    assert!(is_in_page("#projects"));
    assert!(!is_in_page("/projects"));
    assert!(!is_in_page("mailto:me@example.com"));
}
