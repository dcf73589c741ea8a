use masthead_core::{
    AuthorRole, CatalogError, CatalogService, EntityKind, ImmutableFieldError, MagazineKind,
};

#[test]
fn rename_always_fails_and_keeps_name() {
    let mut catalog = CatalogService::in_memory();
    let author = catalog
        .create_author("Nathaniel Hawthorne", AuthorRole::Senior)
        .unwrap();

    for attempt in ["Someone Else", "", "Nathaniel Hawthorne"] {
        let err = catalog.rename_author(author, attempt).unwrap_err();
        assert_eq!(
            err,
            CatalogError::Immutable(ImmutableFieldError::author_name())
        );
    }
    assert_eq!(catalog.author(author).unwrap().name(), "Nathaniel Hawthorne");
    assert_eq!(catalog.author(author).unwrap().role(), AuthorRole::Senior);
}

#[test]
fn empty_author_name_is_rejected() {
    let mut catalog = CatalogService::in_memory();
    let err = catalog.create_author("", AuthorRole::General).unwrap_err();
    assert!(matches!(err, CatalogError::Validation(_)));
    assert_eq!(catalog.author_count(), 0);
}

#[test]
fn topic_areas_is_none_without_articles() {
    let mut catalog = CatalogService::in_memory();
    let author = catalog
        .create_author("Carry Bradshaw", AuthorRole::Junior)
        .unwrap();

    assert!(catalog.author_articles(author).unwrap().is_empty());
    assert!(catalog.author_magazines(author).unwrap().is_empty());
    assert_eq!(catalog.author_topic_areas(author).unwrap(), None);
}

#[test]
fn magazines_are_distinct() {
    let mut catalog = CatalogService::in_memory();
    let author = catalog
        .create_author("Carry Bradshaw", AuthorRole::General)
        .unwrap();
    let vogue = catalog
        .create_magazine("Vogue", "Fashion", MagazineKind::Lifestyle)
        .unwrap();
    let wired = catalog
        .create_magazine("Wired", "Technology", MagazineKind::Tech)
        .unwrap();

    catalog.create_article(author, vogue, "Tutus in the city").unwrap();
    catalog.create_article(author, vogue, "Heels and cobblestones").unwrap();
    catalog.create_article(author, wired, "Phones as accessories").unwrap();

    let magazines: Vec<_> = catalog
        .author_magazines(author)
        .unwrap()
        .into_iter()
        .map(|magazine| magazine.id())
        .collect();
    assert_eq!(magazines, vec![vogue, wired]);
    assert_eq!(catalog.author_articles(author).unwrap().len(), 3);
    assert_eq!(
        catalog.author_topic_areas(author).unwrap(),
        Some(vec!["Fashion", "Technology"])
    );
}

#[test]
fn queries_only_see_own_articles() {
    let mut catalog = CatalogService::in_memory();
    let carry = catalog
        .create_author("Carry Bradshaw", AuthorRole::General)
        .unwrap();
    let nathaniel = catalog
        .create_author("Nathaniel Hawthorne", AuthorRole::Senior)
        .unwrap();
    let vogue = catalog
        .create_magazine("Vogue", "Fashion", MagazineKind::Lifestyle)
        .unwrap();

    catalog.create_article(carry, vogue, "Tutus in the city").unwrap();

    assert_eq!(catalog.author_articles(carry).unwrap().len(), 1);
    assert!(catalog.author_articles(nathaniel).unwrap().is_empty());
}

#[test]
fn author_query_with_magazine_id_is_type_mismatch() {
    let mut catalog = CatalogService::in_memory();
    let vogue = catalog
        .create_magazine("Vogue", "Fashion", MagazineKind::Lifestyle)
        .unwrap();

    let err = catalog.author_articles(vogue).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::TypeMismatch {
            expected: EntityKind::Author,
            found: Some(EntityKind::Magazine),
            ..
        }
    ));
}

#[test]
fn rename_with_non_author_id_is_type_mismatch() {
    let mut catalog = CatalogService::in_memory();
    let vogue = catalog
        .create_magazine("Vogue", "Fashion", MagazineKind::Lifestyle)
        .unwrap();

    let err = catalog.rename_author(vogue, "Anyone").unwrap_err();
    assert_eq!(
        err,
        CatalogError::TypeMismatch {
            id: vogue,
            expected: EntityKind::Author,
            found: Some(EntityKind::Magazine),
        }
    );

    let unknown = uuid::Uuid::new_v4();
    let err = catalog.rename_author(unknown, "Anyone").unwrap_err();
    assert!(matches!(
        err,
        CatalogError::TypeMismatch { found: None, .. }
    ));
}
