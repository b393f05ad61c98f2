// Integration tests for undo/redo over a complete editing session
// Walks through the editing flows a user goes through in the playlist editor

use playlister::{
    HistoryScope, Library, MemoryStore, Playlist, PlaylistSession, PlaylisterConfig,
    SessionError, Song, SongFields, TransactionError,
};

fn song(title: &str, artist: &str, media_id: &str, year: Option<u32>) -> Song {
    Song::new(title, artist, media_id, year)
}

fn abc_session(scope: HistoryScope) -> PlaylistSession {
    let library = Library::from_playlists(vec![
        Playlist::with_songs(
            1,
            "Classics",
            vec![
                song("A", "Artist A", "aaa111", Some(1965)),
                song("B", "Artist B", "bbb222", Some(1971)),
                song("C", "Artist C", "ccc333", None),
            ],
        ),
        Playlist::with_songs(2, "Other", vec![song("Z", "Artist Z", "zzz999", None)]),
    ]);
    let config = PlaylisterConfig {
        history_scope: scope,
        ..PlaylisterConfig::default()
    };
    let store = MemoryStore::with_library(&library).unwrap();
    let mut session = PlaylistSession::new(config, Box::new(store));
    assert!(session.load_lists().unwrap());
    session.open_playlist(1).unwrap();
    session
}

fn titles(session: &PlaylistSession) -> Vec<String> {
    session
        .current_playlist()
        .unwrap()
        .songs()
        .iter()
        .map(|s| s.title.clone())
        .collect()
}

#[test]
fn test_move_undo_redo() {
    let mut session = abc_session(HistoryScope::PerPlaylist);

    session.add_transaction_to_move_song(0, 2).unwrap();
    assert_eq!(titles(&session), ["B", "C", "A"]);

    session.undo().unwrap();
    assert_eq!(titles(&session), ["A", "B", "C"]);

    session.redo().unwrap();
    assert_eq!(titles(&session), ["B", "C", "A"]);
}

#[test]
fn test_remove_undo_restores_all_fields() {
    let mut session = abc_session(HistoryScope::PerPlaylist);

    session.add_transaction_to_remove_song(1).unwrap();
    assert_eq!(titles(&session), ["A", "C"]);

    session.undo().unwrap();
    assert_eq!(titles(&session), ["A", "B", "C"]);
    let restored = session.song(1).unwrap();
    assert_eq!(restored.title, "B");
    assert_eq!(restored.artist, "Artist B");
    assert_eq!(restored.media_id, "bbb222");
    assert_eq!(restored.year, Some(1971));
}

#[test]
fn test_consecutive_edits_are_independent() {
    let mut session = abc_session(HistoryScope::PerPlaylist);
    let original = session.song(0).unwrap().clone();

    session
        .add_transaction_to_edit_song(0, &SongFields::new().title("X"))
        .unwrap();
    session
        .add_transaction_to_edit_song(0, &SongFields::new().title("Y"))
        .unwrap();
    assert_eq!(session.song(0).unwrap().title, "Y");

    session.undo().unwrap();
    assert_eq!(session.song(0).unwrap().title, "X");

    session.undo().unwrap();
    assert_eq!(session.song(0), Some(&original));
    assert!(!session.can_undo());
}

#[test]
fn test_new_edit_invalidates_redo_branch() {
    let mut session = abc_session(HistoryScope::PerPlaylist);
    session.add_transaction_to_move_song(0, 1).unwrap();
    session.add_transaction_to_move_song(1, 2).unwrap();
    session.undo().unwrap();
    session.undo().unwrap();
    assert!(session.can_redo());

    session.add_transaction_to_remove_song(2).unwrap();

    assert!(!session.can_redo());
    assert!(matches!(
        session.redo(),
        Err(SessionError::Transaction(TransactionError::NothingToRedo))
    ));

    // a new undo opens a redo slot again
    session.undo().unwrap();
    assert!(session.can_redo());
    assert_eq!(titles(&session), ["A", "B", "C"]);
}

#[test]
fn test_undo_everything_returns_to_start() {
    let mut session = abc_session(HistoryScope::PerPlaylist);
    let start = session.library().clone();

    session.add_transaction_to_create_song().unwrap();
    session
        .add_transaction_to_edit_song(3, &SongFields::new().title("New").year("2024"))
        .unwrap();
    session.add_transaction_to_move_song(3, 0).unwrap();
    session.add_transaction_to_remove_song(2).unwrap();
    let id = session.current_id().unwrap();
    session.rename_playlist(id, "Renamed").unwrap();

    let mut undone = 0;
    while session.can_undo() {
        session.undo().unwrap();
        undone += 1;
    }

    assert_eq!(undone, 5);
    assert_eq!(session.library(), &start);
    assert!(matches!(
        session.undo(),
        Err(SessionError::Transaction(TransactionError::NothingToUndo))
    ));
}

#[test]
fn test_redo_everything_reaches_same_state() {
    let mut session = abc_session(HistoryScope::PerPlaylist);
    session.add_transaction_to_remove_song(0).unwrap();
    session.add_transaction_to_create_song().unwrap();
    session.add_transaction_to_move_song(0, 2).unwrap();
    let end = session.library().clone();

    while session.can_undo() {
        session.undo().unwrap();
    }
    while session.can_redo() {
        session.redo().unwrap();
    }

    assert_eq!(session.library(), &end);
}

#[test]
fn test_playlist_lifecycle_with_session_history() {
    let mut session = abc_session(HistoryScope::Session);
    let start = session.library().clone();

    let copy = session.duplicate_playlist(1).unwrap();
    session.open_playlist(copy).unwrap();
    session.add_transaction_to_remove_song(0).unwrap();
    session.delete_playlist(2).unwrap();
    session.delete_playlist(copy).unwrap();
    assert_eq!(session.current_id(), None);
    assert_eq!(session.library().len(), 1);

    assert_eq!(session.undo().unwrap(), "Delete Playlist \"Classics (Copy)\"");
    assert_eq!(session.playlist(copy).unwrap().len(), 2);

    while session.can_undo() {
        session.undo().unwrap();
    }
    assert_eq!(session.library(), &start);
}

#[test]
fn test_history_does_not_leak_across_playlists() {
    let mut session = abc_session(HistoryScope::PerPlaylist);
    session.add_transaction_to_remove_song(0).unwrap();

    session.close_playlist();
    session.open_playlist(2).unwrap();

    assert!(!session.toolbar().undo);
    assert!(session.undo().is_err());
    assert_eq!(session.playlist(1).unwrap().len(), 2);
}
