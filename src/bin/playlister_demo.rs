// Scripted editing session, for inspecting undo/redo behaviour by hand
// Run with: cargo run --bin playlister-demo [config.ron]
// Set RUST_LOG=debug to see every stack operation.

use playlister::{MemoryStore, PlaylistSession, PlaylisterConfig, SongFields};

fn print_playlist(session: &PlaylistSession) {
    match session.current_playlist() {
        Some(playlist) => {
            println!("   [{}] {}", playlist.id, playlist.name);
            for (i, song) in playlist.songs().iter().enumerate() {
                println!("     {}. {}", i + 1, song);
            }
        }
        None => println!("   (no playlist open)"),
    }
    let toolbar = session.toolbar();
    println!(
        "   undo: {:<5} redo: {:<5} add song: {}",
        toolbar.undo, toolbar.redo, toolbar.add_song
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => PlaylisterConfig::load(path)?,
        None => PlaylisterConfig::default(),
    };

    println!("Playlister - Undo/Redo Demo");
    println!("===========================");

    let mut session = PlaylistSession::new(config, Box::new(MemoryStore::new()));

    let id = session.add_new_playlist("Road Trip")?;
    session.open_playlist(id)?;
    for (title, artist, media_id, year) in [
        ("Africa", "Toto", "FTQbiNvZqaY", "1982"),
        ("Dreams", "Fleetwood Mac", "mrZRURcb1cM", "1977"),
        ("Go Your Own Way", "Fleetwood Mac", "6ul-cZyuYq4", "1977"),
    ] {
        let index = session.add_transaction_to_create_song()?;
        let fields = SongFields::new()
            .title(title)
            .artist(artist)
            .media_id(media_id)
            .year(year);
        session.add_transaction_to_edit_song(index, &fields)?;
    }
    println!("\nBuilt playlist:");
    print_playlist(&session);

    session.add_transaction_to_move_song(0, 2)?;
    println!("\nMoved song 1 to 3:");
    print_playlist(&session);

    session.add_transaction_to_remove_song(1)?;
    println!("\nRemoved song 2:");
    print_playlist(&session);

    println!("\nUndo x2:");
    println!("   {}", session.undo()?);
    println!("   {}", session.undo()?);
    print_playlist(&session);

    println!("\nRedo:");
    println!("   {}", session.redo()?);
    print_playlist(&session);

    session.add_transaction_to_edit_song(0, &SongFields::new().year(""))?;
    println!("\nCleared year of song 1 (redo branch discarded):");
    print_playlist(&session);

    if let Err(e) = session.redo() {
        println!("\nRedo refused: {}", e);
    }

    let copy = session.duplicate_playlist(id)?;
    session.close_playlist();
    session.open_playlist(copy)?;
    println!("\nOpened duplicate:");
    print_playlist(&session);

    Ok(())
}
