//! Application State - Stato condiviso dell'applicazione
//!
//! Contiene il repository degli album. Il repository viene passato esplicitamente
//! alla costruzione, così i test possono iniettare lo store in memoria.

use crate::repositories::{AlbumRepository, AlbumStore, InMemoryAlbumRepository};
use sqlx::MySqlPool;

/// Stato condiviso tra tutte le route
pub struct AppState {
    /// Repository per la gestione degli album
    pub albums: Box<dyn AlbumStore>,
}

impl AppState {
    /// Crea una nuova istanza di AppState con un qualsiasi repository di album
    pub fn new(albums: impl AlbumStore + 'static) -> Self {
        Self {
            albums: Box::new(albums),
        }
    }

    /// AppState su MySQL, con il pool di connessioni fornito.
    /// Crea la tabella `albums` se non esiste ancora.
    pub async fn with_mysql(pool: MySqlPool) -> Result<Self, sqlx::Error> {
        let albums = AlbumRepository::new(pool);
        albums.ensure_schema().await?;
        Ok(Self::new(albums))
    }

    /// AppState con uno store in memoria vuoto
    pub fn in_memory() -> Self {
        Self::new(InMemoryAlbumRepository::new())
    }
}
