use super::*;

#[test]
fn nav_lists_dashboard_collections_and_media() {
    let hrefs: Vec<_> = nav_items().into_iter().map(|(_, href)| href).collect();
    assert_eq!(
        hrefs,
        ["/", "/articles", "/volunteers", "/partners", "/carousel", "/titles", "/comitards", "/media"]
    );
}

#[test]
fn dashboard_is_active_only_on_root() {
    assert!(is_active("/", "/"));
    assert!(!is_active("/", "/articles"));
}

#[test]
fn section_is_active_on_nested_routes() {
    assert!(is_active("/articles", "/articles"));
    assert!(is_active("/articles", "/articles/7/edit"));
    assert!(!is_active("/carousel", "/carousels"));
}
