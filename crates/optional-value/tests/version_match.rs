//! Checks that versions mentioned in docs match the crate version.

#[test]
fn readme_is_in_sync() {
    version_sync::assert_markdown_deps_updated!("README.md");
}

#[test]
fn html_root_url_is_in_sync() {
    version_sync::assert_html_root_url_updated!("src/lib.rs");
}
