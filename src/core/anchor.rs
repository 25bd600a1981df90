/// Element id an in-page link points at, or `None` for anything that is not
/// a usable `#fragment` (including a bare `#`).
#[inline]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Whether a link should have its click intercepted.
#[inline]
pub fn is_in_page(href: &str) -> bool {
    href.starts_with('#')
}
