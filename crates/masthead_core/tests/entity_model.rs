use masthead_core::{Article, Author, AuthorRole, Magazine, MagazineKind, ValidationError};

#[test]
fn author_serialization_uses_expected_wire_fields() {
    let author = Author::with_role("Carry Bradshaw", AuthorRole::Senior).unwrap();

    let json = serde_json::to_value(&author).unwrap();
    assert_eq!(json["id"], author.id().to_string());
    assert_eq!(json["name"], "Carry Bradshaw");
    assert_eq!(json["role"], "senior");
}

#[test]
fn magazine_serialization_uses_expected_wire_fields() {
    let magazine = Magazine::with_kind("Wired", "Technology", MagazineKind::Tech).unwrap();

    let json = serde_json::to_value(&magazine).unwrap();
    assert_eq!(json["name"], "Wired");
    assert_eq!(json["category"], "Technology");
    assert_eq!(json["kind"], "tech");
}

#[test]
fn article_serializes_references_as_ids() {
    let author = Author::new("Carry Bradshaw").unwrap();
    let magazine = Magazine::new("Vogue", "Fashion").unwrap();
    let article = Article::new(&author, &magazine, "Tutus in the city").unwrap();

    let json = serde_json::to_value(&article).unwrap();
    assert_eq!(json["author"], author.id().to_string());
    assert_eq!(json["magazine"], magazine.id().to_string());
    assert_eq!(json["title"], "Tutus in the city");
}

#[test]
fn default_classifiers_are_general() {
    assert_eq!(AuthorRole::default(), AuthorRole::General);
    assert_eq!(MagazineKind::default(), MagazineKind::General);
    assert_eq!(
        Magazine::new("Vogue", "Fashion").unwrap().kind().as_str(),
        "General"
    );
}

#[test]
fn fresh_entities_get_distinct_ids() {
    let first = Author::new("Same Name").unwrap();
    let second = Author::new("Same Name").unwrap();
    assert_ne!(first.id(), second.id());
    assert_ne!(first, second);
}

#[test]
fn validation_messages_name_the_bounds() {
    let err = Magazine::new("A", "News").unwrap_err();
    assert_eq!(err, ValidationError::MagazineNameLength { chars: 1 });
    assert_eq!(
        err.to_string(),
        "magazine name must be between 2 and 16 characters, got 1"
    );
}
