//! Unit tests for library workflows

#[cfg(test)]
mod tests {
    use crate::library::{Container, Library, LibraryError};
    use crate::model::{ModelError, SortOrder, Tag};
    use crate::testing::{MemoryResources, key, sample_library};
    use std::path::Path;

    fn trip() -> Container {
        Container::Album("Trip".into())
    }

    #[test]
    fn test_login_returns_stored_user() {
        let (library, _) = sample_library();
        let user = library.login("bob", "secret").unwrap();
        assert_eq!(user.username(), "bob");
        assert_eq!(user.albums().len(), 2);
    }

    #[test]
    fn test_login_wrong_password_or_user() {
        let (library, _) = sample_library();
        assert!(matches!(library.login("bob", "nope"), Err(LibraryError::InvalidCredentials)));
        assert!(matches!(library.login("nobody", "secret"), Err(LibraryError::InvalidCredentials)));
        assert!(matches!(library.login("", ""), Err(LibraryError::InvalidCredentials)));
    }

    #[test]
    fn test_create_user_rejects_taken_username() {
        let (mut library, _) = sample_library();
        let result = library.create_user("bob", "different");
        assert!(matches!(result, Err(LibraryError::DuplicateUser(name)) if name == "bob"));
    }

    #[test]
    fn test_create_user_rejects_blank_username() {
        let mut library = Library::new();
        assert!(matches!(library.create_user("  ", "pw"), Err(LibraryError::EmptyUsername)));
    }

    #[test]
    fn test_create_and_delete_user() {
        let (mut library, _) = sample_library();
        library.create_user("dave", "pw").unwrap();
        assert!(library.login("dave", "pw").is_ok());

        library.delete_user("dave").unwrap();
        assert!(matches!(library.user("dave"), Err(LibraryError::UserNotFound(_))));
        assert!(matches!(library.delete_user("dave"), Err(LibraryError::UserNotFound(_))));
    }

    #[test]
    fn test_admin_cannot_be_deleted() {
        let (mut library, _) = sample_library();
        assert!(matches!(library.delete_user("admin"), Err(LibraryError::ReservedAccount(_))));
        assert!(library.user("admin").is_ok());
    }

    #[test]
    fn test_usernames_sorted() {
        let (library, _) = sample_library();
        assert_eq!(library.usernames(), vec!["admin", "bob", "carol"]);
    }

    #[test]
    fn test_create_album_duplicate_and_empty() {
        let (mut library, _) = sample_library();
        assert!(matches!(library.create_album("bob", ""), Err(LibraryError::EmptyAlbumName)));
        assert!(matches!(
            library.create_album("bob", "Trip"),
            Err(LibraryError::DuplicateAlbum(_))
        ));

        library.create_album("bob", "Party").unwrap();
        assert!(library.user("bob").unwrap().has_album("Party"));
    }

    #[test]
    fn test_create_album_named_inbox_is_allowed() {
        let (mut library, _) = sample_library();
        library.create_album("bob", "Inbox").unwrap();
        assert!(library.user("bob").unwrap().has_album("Inbox"));
    }

    #[test]
    fn test_rename_album_to_existing_name_rejected() {
        let (mut library, _) = sample_library();
        let result = library.rename_album("bob", "Home", "Trip");
        assert!(matches!(result, Err(LibraryError::DuplicateAlbum(name)) if name == "Trip"));
        assert!(library.user("bob").unwrap().has_album("Home"));
    }

    #[test]
    fn test_rename_album_to_own_name_rejected() {
        let (mut library, _) = sample_library();
        let result = library.rename_album("bob", "Trip", "Trip");
        assert!(matches!(result, Err(LibraryError::DuplicateAlbum(_))));
    }

    #[test]
    fn test_rename_album() {
        let (mut library, _) = sample_library();
        library.rename_album("bob", "Home", "House").unwrap();
        let bob = library.user("bob").unwrap();
        assert!(bob.has_album("House"));
        assert!(!bob.has_album("Home"));
        assert_eq!(bob.album("House").unwrap().len(), 1);
    }

    #[test]
    fn test_rename_missing_album() {
        let (mut library, _) = sample_library();
        let result = library.rename_album("bob", "Nope", "Other");
        assert!(matches!(result, Err(LibraryError::AlbumNotFound(_))));
    }

    #[test]
    fn test_delete_album() {
        let (mut library, _) = sample_library();
        library.delete_album("bob", "Home").unwrap();
        assert!(matches!(library.delete_album("bob", "Home"), Err(LibraryError::AlbumNotFound(_))));
    }

    #[test]
    fn test_album_summaries() {
        let (library, _) = sample_library();
        let summaries = library.album_summaries("bob").unwrap();
        let names: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Home", "Trip"]);
        assert_eq!(summaries[1].photo_count, 2);
        assert_eq!(summaries[1].date_range, "01/10/2024 - 02/01/2024");
        assert_eq!(summaries[0].date_range, "03/15/2024");
    }

    #[test]
    fn test_add_photo_defaults_caption_and_sorts_tags() {
        let (mut library, resources) = sample_library();
        let key = library
            .add_photo(
                "bob",
                "Trip",
                Path::new("/d.jpg"),
                None,
                vec![Tag::new("person", "alice"), Tag::new("location", "nyc")],
                &resources,
            )
            .unwrap();

        let photo = library.photo(&key).unwrap();
        assert_eq!(photo.caption(), "d");
        assert_eq!(photo.tags()[0].name(), "location");
        assert!(library.user("bob").unwrap().album("Trip").unwrap().contains(&key));
    }

    #[test]
    fn test_add_photo_missing_resource() {
        let (mut library, resources) = sample_library();
        let missing = Path::new("/zzz.jpg");
        let result = library.add_photo("bob", "Trip", missing, Some("z"), vec![], &resources);
        assert!(matches!(
            result,
            Err(LibraryError::Model(ModelError::ResourceNotFound(_)))
        ));
    }

    #[test]
    fn test_add_photo_duplicate_in_album() {
        let (mut library, resources) = sample_library();
        let path = Path::new("/a.jpg");
        let result = library.add_photo("bob", "Trip", path, Some("again"), vec![], &resources);
        assert!(matches!(result, Err(LibraryError::DuplicatePhoto { .. })));
        assert_eq!(library.photo(&key("/a.jpg")).unwrap().caption(), "Arrival");
    }

    #[test]
    fn test_add_photo_empty_caption() {
        let (mut library, resources) = sample_library();
        let path = Path::new("/d.jpg");
        let result = library.add_photo("bob", "Trip", path, Some(""), vec![], &resources);
        assert!(matches!(result, Err(LibraryError::EmptyCaption)));
    }

    #[test]
    fn test_add_known_photo_to_second_album_shares_it() {
        let (mut library, resources) = sample_library();
        let key = library
            .add_photo("bob", "Home", Path::new("/a.jpg"), Some("ignored"), vec![], &resources)
            .unwrap();

        library.set_caption(&key, "Shared").unwrap();
        let bob = library.user("bob").unwrap();
        assert!(bob.album("Trip").unwrap().contains(&key));
        assert!(bob.album("Home").unwrap().contains(&key));
        assert_eq!(library.photo(&key).unwrap().caption(), "Shared");
        assert_eq!(library.photos.len(), 3);
    }

    #[test]
    fn test_remove_photo() {
        let (mut library, _) = sample_library();
        library.remove_photo("bob", &trip(), &key("/a.jpg")).unwrap();
        let result = library.remove_photo("bob", &trip(), &key("/a.jpg"));
        assert!(matches!(result, Err(LibraryError::PhotoNotFound(_))));
    }

    #[test]
    fn test_add_and_remove_tag() {
        let (mut library, _) = sample_library();
        let a = key("/a.jpg");

        assert!(library.add_tag(&a, "Location", " Paris ").unwrap());
        assert!(!library.add_tag(&a, "location", "paris").unwrap());
        assert!(matches!(library.add_tag(&a, "location", ""), Err(LibraryError::IncompleteTag(_))));

        assert!(library.remove_tag(&a, &Tag::new("location", "paris")).unwrap());
        assert!(!library.remove_tag(&a, &Tag::new("location", "paris")).unwrap());
    }

    #[test]
    fn test_edit_photo_replaces_tags() {
        let (mut library, _) = sample_library();
        let c = key("/c.jpg");
        let rows = vec![
            ("person".to_string(), "Alice, Bob".to_string()),
            (String::new(), String::new()),
            ("Activity".to_string(), "reading".to_string()),
        ];

        library.edit_photo(&c, "Sofa", &rows).unwrap();

        let photo = library.photo(&c).unwrap();
        assert_eq!(photo.caption(), "Sofa");
        let rendered: Vec<String> = photo.tags().iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["activity: reading", "person: alice", "person: bob"]);
    }

    #[test]
    fn test_edit_photo_incomplete_row_changes_nothing() {
        let (mut library, _) = sample_library();
        let c = key("/c.jpg");
        let rows = vec![
            ("person".to_string(), "bob".to_string()),
            ("mood".to_string(), " ".to_string()),
        ];

        let result = library.edit_photo(&c, "Sofa", &rows);
        assert!(matches!(result, Err(LibraryError::IncompleteTag(msg)) if msg.contains("mood")));
        assert_eq!(library.photo(&c).unwrap().caption(), "Couch");
        assert_eq!(library.photo(&c).unwrap().tags().len(), 2);
    }

    #[test]
    fn test_sort_album() {
        let (mut library, _) = sample_library();
        library.sort_album("bob", &trip(), SortOrder::DateDescending).unwrap();
        let trip = library.container("bob", &trip()).unwrap();
        assert_eq!(trip.photos(), &[key("/b.jpg"), key("/a.jpg")]);
    }

    #[test]
    fn test_create_album_from_results() {
        let (mut library, _) = sample_library();
        let results = vec![key("/a.jpg"), key("/c.jpg")];
        library.create_album_from("bob", "Alice", &results).unwrap();
        let album = library.user("bob").unwrap().album("Alice").unwrap();
        assert_eq!(album.photos(), results.as_slice());

        let missing = vec![key("/nope.jpg")];
        let result = library.create_album_from("bob", "Other", &missing);
        assert!(matches!(result, Err(LibraryError::PhotoNotFound(_))));
    }

    #[test]
    fn test_prune_unreferenced() {
        let (mut library, _) = sample_library();
        library.remove_photo("bob", &trip(), &key("/b.jpg")).unwrap();
        assert_eq!(library.prune_unreferenced(), 1);
        assert!(!library.photos.contains(&key("/b.jpg")));
        assert_eq!(library.prune_unreferenced(), 0);
    }

    #[test]
    fn test_prune_keeps_inbox_photos() {
        let (mut library, _) = sample_library();
        library.container_mut("carol", &Container::Inbox).unwrap().add_photo(key("/b.jpg"));
        library.remove_photo("bob", &trip(), &key("/b.jpg")).unwrap();
        assert_eq!(library.prune_unreferenced(), 0);
    }

    #[test]
    fn test_unknown_user_lookups() {
        let mut library = Library::new();
        let resources = MemoryResources::new().with_file("/a.jpg", 2024, 1, 1);
        assert!(matches!(library.album_summaries("x"), Err(LibraryError::UserNotFound(_))));
        let result = library.add_photo("x", "Trip", Path::new("/a.jpg"), None, vec![], &resources);
        assert!(matches!(result, Err(LibraryError::UserNotFound(_))));
    }
}
