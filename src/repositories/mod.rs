//! Repositories module - Coordinatore per i repository del progetto
//!
//! Ogni repository gestisce le operazioni di persistenza per una specifica entità.
//! Gli album hanno due implementazioni intercambiabili dietro lo stesso contratto:
//! - `AlbumRepository`: MySQL tramite il pool di connessioni sqlx
//! - `InMemoryAlbumRepository`: mappa concorrente in memoria (dashmap)

// ************************* MODULI REPOSITORY ************************* //

pub mod album;
pub mod memory;
pub mod traits;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{FindAll, FindOne, Save};

// Re-esportazione delle struct dei repository per facilitare l'import
pub use album::AlbumRepository;
pub use memory::InMemoryAlbumRepository;

use crate::entities::Album;
use uuid::Uuid;

/// Storage contract required by the album handlers: find-all, find-one and save.
///
/// Implemented automatically for every repository providing the three operations,
/// so `AppState` can hold any of them as `Box<dyn AlbumStore>`.
pub trait AlbumStore: FindAll<Album> + FindOne<Album, String> + Save<Album> {}

impl<T> AlbumStore for T where T: FindAll<Album> + FindOne<Album, String> + Save<Album> {}

/// Returns the album id, generating a new one (UUID v4) when the album was never saved
fn assign_missing_id(album: &mut Album) -> String {
    if let Some(id) = album.id() {
        return id.to_owned();
    }
    let id = Uuid::new_v4().to_string();
    album.assign_id(id.clone());
    id
}
