//! Album entity - L'unica entità persistita del catalogo

use serde::{Deserialize, Serialize};
use std::fmt;

/// Album record as stored by an [`AlbumStore`](crate::repositories::AlbumStore)
/// and exchanged with clients.
///
/// The `id` is assigned by the repository on the first save and never changes
/// afterwards, so it is only readable from outside the crate.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, sqlx::FromRow)]
pub struct Album {
    id: Option<String>,
    pub title: String,
    pub artist: String,
    pub year: i32,
    pub price: f64,
}

impl Album {
    /// Builds an album that has not been persisted yet (no id)
    pub fn new(title: impl Into<String>, artist: impl Into<String>, year: i32, price: f64) -> Self {
        Self {
            id: None,
            title: title.into(),
            artist: artist.into(),
            year,
            price,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Assigns the storage id. Only repositories call this, and only on albums without one.
    pub(crate) fn assign_id(&mut self, id: String) {
        debug_assert!(self.id.is_none(), "album id is immutable once assigned");
        self.id = Some(id);
    }
}

impl fmt::Display for Album {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Album[id={}, title={}, artist={}, year={}, price={}]",
            self.id.as_deref().unwrap_or("null"),
            self.title,
            self.artist,
            self.year,
            self.price
        )
    }
}
