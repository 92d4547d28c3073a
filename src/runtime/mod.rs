//! Session driver: wires configuration, library, cache and decks together.
//!
//! Everything here is synchronous and single-threaded; each step runs to
//! completion before the next begins, and the cache's recency clock is
//! driven purely by this call order.

use std::{env, path::PathBuf};

use log::{error, info};

use crate::config::SessionSettings;
use crate::controller::{CacheLoad, DeckController};
use crate::library::LibraryService;
use crate::mixer::MixingEngine;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    // A positional argument names the session file directly; otherwise the
    // loader falls back to the XDG path.
    let session_arg = env::args().nth(1).map(PathBuf::from);

    let settings = SessionSettings::load(session_arg.as_deref())?;
    settings.validate()?;

    let mut library = LibraryService::new();
    library.build_library(&settings.library);
    library.load_playlist_from_indices(&settings.playlist.name, &settings.playlist.tracks);
    library.display_library();

    let mut controller = DeckController::new(settings.cache.capacity);
    warm_cache(&library, &mut controller);
    info!("{}", controller.cache_status());

    let mut engine = MixingEngine::new(settings.mixer.auto_sync, settings.mixer.bpm_tolerance);
    run_decks(&library, &mut engine);
    info!("{}", engine.status());

    Ok(())
}

/// Clone every playlist track into the cache, reporting each outcome.
fn warm_cache(library: &LibraryService, controller: &mut DeckController) {
    for track in library.playlist().tracks() {
        match controller.load_track_to_cache(track) {
            Ok(CacheLoad::AlreadyCached) => {}
            Ok(CacheLoad::Stored) => info!("Cached '{}'", track.title()),
            Ok(CacheLoad::StoredEvicting) => {
                info!("Cached '{}' after evicting the least recently used track", track.title())
            }
            // A failed clone aborts this load only, never the session.
            Err(err) => error!("Could not cache '{}': {}", track.title(), err),
        }
    }
}

/// Load the playlist onto the decks in order, reporting mixability and the
/// active deck after every load.
fn run_decks(library: &LibraryService, engine: &mut MixingEngine) {
    for track in library.playlist().tracks() {
        if engine.can_mix(track) {
            info!("'{}' is mixable with the active deck", track.title());
        }
        match engine.load_track_to_deck(track) {
            Ok(deck) => info!("Active deck is now {}", deck.index()),
            Err(err) => error!("Could not load '{}' to a deck: {}", track.title(), err),
        }
    }
}
