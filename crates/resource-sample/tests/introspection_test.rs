use resource_framework::{AccessorError, Resource, ResourceEntity, ResourceError, Value};
use resource_sample::catalog::Catalog;
use resource_sample::model::comment::comment;
use resource_sample::model::role::role;
use resource_sample::model::User;

/// A saved user resolves its member path.
#[test]
fn test_inspect_existing_resource() {
    let catalog = Catalog::new().expect("catalog should build");
    let user = User::new().with("id", 1).with("name", "Tobias Funke");

    let rendered = catalog.inspector().render(&user).unwrap();
    assert_eq!(rendered, "#<Foo::User(users/1) id=1 name=\"Tobias Funke\">");
}

/// The same attributes assigned in a different order render in that order;
/// re-assigning a key keeps its first position.
#[test]
fn test_inspect_order_follows_first_assignment() {
    let catalog = Catalog::new().unwrap();
    let user = User::new()
        .with("name", "Tobias Funke")
        .with("id", 1)
        .with("name", "Tobias Fünke");

    assert_eq!(
        catalog.inspector().render(&user).unwrap(),
        "#<Foo::User(users/1) name=\"Tobias Fünke\" id=1>"
    );
}

/// A user that was never saved falls back to the collection path.
#[test]
fn test_inspect_not_saved_resource() {
    let catalog = Catalog::new().unwrap();
    let user = User::new().with("name", "Tobias Funke");

    assert_eq!(
        catalog.inspector().render(&user).unwrap(),
        "#<Foo::User(users) name=\"Tobias Funke\">"
    );
}

/// Attributes are read through their accessors, not from storage.
#[test]
fn test_inspect_uses_getters() {
    let catalog = Catalog::new().unwrap();
    let user = User::new().with("name", "Tobias Funke").with("password", "Funke");

    let rendered = catalog.inspector().render(&user).unwrap();
    assert!(rendered.contains("name=\"Tobias Funke\""));
    assert!(rendered.contains("password=\"filtered\""));
    assert!(!rendered.contains("password=\"Funke\""));
}

/// Per-instance accessor overrides on a dynamic resource are honoured too.
#[test]
fn test_inspect_uses_instance_getter_override() {
    let catalog = Catalog::new().unwrap();
    let mut user = Resource::new("Foo::User")
        .with("name", "Tobias Funke")
        .with("password", "Funke");
    user.override_accessor("password", |_| Ok(Value::from("filtered")));

    let rendered = catalog.inspector().render(&user).unwrap();
    assert_eq!(
        rendered,
        "#<Foo::User(users) name=\"Tobias Funke\" password=\"filtered\">"
    );
}

#[test]
fn test_inspect_supports_dash_in_attribute_names() {
    let catalog = Catalog::new().unwrap();
    let user = User::new().with("life-span", "3 years");

    let rendered = catalog.inspector().render(&user).unwrap();
    assert!(rendered.contains("life-span=\"3 years\""));
}

/// Associated resources are summarized, never expanded.
#[test]
fn test_inspect_omits_association_details() {
    let catalog = Catalog::new().unwrap();
    let user = User::new()
        .with("id", 2)
        .with("name", "Lindsay Fünke")
        .with("role", role(1, "Member"))
        .with(
            "comments",
            vec![comment(1, "They're having a FIRESALE?").with("user_id", 2)],
        );

    let rendered = catalog.inspector().render(&user).unwrap();
    assert!(rendered.contains("role=#<Foo::Role>"));
    assert!(rendered.contains("comments=[#<Foo::Comment>(1)]"));
    assert!(!rendered.contains("Member"));
    assert!(!rendered.contains("FIRESALE"));
    assert_eq!(
        rendered,
        "#<Foo::User(users/2) id=2 name=\"Lindsay Fünke\" role=#<Foo::Role> comments=[#<Foo::Comment>(1)]>"
    );
}

#[test]
fn test_inspect_has_many_keeps_element_order() {
    let catalog = Catalog::new().unwrap();
    let user = User::new().with(
        "comments",
        vec![comment(3, "c"), comment(1, "a"), Resource::new("Foo::Comment").with("body", "draft")],
    );

    let rendered = catalog.inspector().render(&user).unwrap();
    assert!(rendered.contains("comments=[#<Foo::Comment>(3), #<Foo::Comment>(1), #<Foo::Comment>(nil)]"));
}

/// A comment fetched without its project scope cannot build any path.
#[test]
fn test_inspect_prints_unknown_resource_path() {
    let catalog = Catalog::new().unwrap();
    let comment = comment(1, "Hello!");

    let path = "<unknown path, missing `project_id`>";
    assert_eq!(
        catalog.inspector().render(&comment).unwrap(),
        format!("#<Foo::Comment({path}) id=1 body=\"Hello!\">")
    );
}

#[test]
fn test_inspect_nested_path_resolves_with_project_id() {
    let catalog = Catalog::new().unwrap();
    let saved = comment(1, "Hello!").with("project_id", 5);
    let unsaved = Resource::new("Foo::Comment").with("project_id", 5);

    let inspector = catalog.inspector();
    assert!(inspector
        .render(&saved)
        .unwrap()
        .starts_with("#<Foo::Comment(projects/5/comments/1) "));
    assert_eq!(
        inspector.render(&unsaved).unwrap(),
        "#<Foo::Comment(projects/5/comments) project_id=5>"
    );
}

#[test]
fn test_inspect_resource_without_attributes() {
    let catalog = Catalog::new().unwrap();
    assert_eq!(catalog.inspector().render(&User::new()).unwrap(), "#<Foo::User(users)>");
}

#[test]
fn test_inspect_does_not_mutate_resource() {
    let catalog = Catalog::new().unwrap();
    let user = User::new().with("id", 1).with("role", role(1, "Member"));
    let before = user.clone();

    let _ = catalog.inspector().render(&user).unwrap();
    assert_eq!(user, before);
}

#[test]
fn test_inspect_propagates_accessor_failure() {
    let catalog = Catalog::new().unwrap();
    let mut user = Resource::new("Foo::User").with("token", "abc");
    user.override_accessor("token", |_| Err(AccessorError::Failed("vault offline".into())));

    let err = catalog.inspector().render(&user).unwrap_err();
    assert!(matches!(err, ResourceError::Accessor { ref attribute, .. } if attribute == "token"));
    assert!(err.to_string().contains("vault offline"));
    assert_eq!(user.get_attribute("name"), Ok(Value::Null));
}
