//! Checks that versions mentioned in docs match the crate version.

#[test]
fn html_root_url_is_in_sync() {
    version_sync::assert_html_root_url_updated!("src/lib.rs");
}
