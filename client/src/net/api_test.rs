use super::*;

#[test]
fn horse_endpoints_live_under_api_prefix() {
    assert_eq!(horses_endpoint(), "/api/horses");
    assert_eq!(horse_endpoint(-4), "/api/horses/-4");
    assert_eq!(family_endpoint(12), "/api/horses/12/family");
}

#[test]
fn owner_endpoints_live_under_api_prefix() {
    assert_eq!(owners_endpoint(), "/api/owners");
    assert_eq!(owner_endpoint(3), "/api/owners/3");
}

#[test]
fn image_url_points_at_image_endpoint() {
    assert_eq!(image_url(7), "/api/images/7");
}

#[test]
fn family_query_carries_generation_count() {
    assert_eq!(family_query(4), [("gen", "4".to_owned())]);
}

#[test]
fn owner_search_query_trims_name_and_sets_limit() {
    assert_eq!(
        owner_search_query("  Laz ", 5),
        vec![("name", "Laz".to_owned()), ("limit", "5".to_owned())]
    );
}

#[test]
fn parent_search_filters_by_sex_and_caps_results() {
    let search = parent_search("Wen", Sex::Female);
    assert_eq!(
        search.query_pairs(),
        vec![
            ("name", "Wen".to_owned()),
            ("sex", "FEMALE".to_owned()),
            ("limit", "5".to_owned()),
        ]
    );
}

// =============================================================
// Family body
// =============================================================

#[test]
fn empty_family_body_means_horse_not_found() {
    for body in ["", "  \n", "null"] {
        let err = parse_family(42, body).unwrap_err();
        assert!(err.is_not_found(), "body {body:?}");
        assert_eq!(
            crate::state::family::fetch_error_banner(42, &err),
            "Horse 42 not found."
        );
    }
}

#[test]
fn family_body_parses_tree() {
    let body = r#"{"id": 1, "name": "Larry", "dateOfBirth": "2018-05-02", "mother": null, "father": null}"#;
    let tree = parse_family(1, body).unwrap();
    assert_eq!(tree.name, "Larry");
    assert!(tree.is_leaf());
}

#[test]
fn malformed_family_body_is_a_decode_error() {
    let err = parse_family(1, "{\"id\":").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}
