use vetrina::catalog::Catalog;

#[test]
fn get_returns_the_matching_product() {
    let catalog = Catalog::demo();

    for (id, name) in [(0, "Watch"), (1, "Camera"), (2, "Glass"), (3, "Toy")] {
        let product = catalog.get(id).unwrap();

        assert_eq!(product.id, id);
        assert_eq!(product.name, name);
        assert!(product.image.starts_with("/assets/img/"));
        assert!(!product.description.is_empty());
    }
}

#[test]
fn get_outside_the_range_is_none() {
    let catalog = Catalog::demo();

    assert!(catalog.get(4).is_none());
    assert!(catalog.get(99).is_none());
}

#[test]
fn all_preserves_definition_order() {
    let ids: Vec<u32> = Catalog::demo()
        .all()
        .iter()
        .map(|product| product.id)
        .collect();

    assert_eq!(ids, vec![0, 1, 2, 3]);
}
