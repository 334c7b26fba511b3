//! InMemoryAlbumRepository - Store concorrente in memoria, usato senza DATABASE_URL e nei test

use super::{FindAll, FindOne, Save, assign_missing_id};
use crate::entities::Album;
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use sqlx::Error;
use std::sync::atomic::{AtomicU64, Ordering};

struct StoredAlbum {
    /// Insertion sequence, gives `find_all` a stable order
    seq: u64,
    album: Album,
}

pub struct InMemoryAlbumRepository {
    albums: DashMap<String, StoredAlbum>,
    next_seq: AtomicU64,
}

impl InMemoryAlbumRepository {
    pub fn new() -> Self {
        InMemoryAlbumRepository {
            albums: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }

    /// Number of stored albums
    pub fn len(&self) -> usize {
        self.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }
}

impl Default for InMemoryAlbumRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FindAll<Album> for InMemoryAlbumRepository {
    async fn find_all(&self) -> Result<Vec<Album>, Error> {
        let mut stored: Vec<(u64, Album)> = self
            .albums
            .iter()
            .map(|entry| (entry.seq, entry.album.clone()))
            .collect();
        stored.sort_by_key(|(seq, _)| *seq);

        Ok(stored.into_iter().map(|(_, album)| album).collect())
    }
}

#[async_trait]
impl FindOne<Album, String> for InMemoryAlbumRepository {
    async fn find_one(&self, id: &String) -> Result<Option<Album>, Error> {
        Ok(self.albums.get(id).map(|entry| entry.album.clone()))
    }
}

#[async_trait]
impl Save<Album> for InMemoryAlbumRepository {
    async fn save(&self, mut album: Album) -> Result<Album, Error> {
        let id = assign_missing_id(&mut album);

        match self.albums.entry(id) {
            Entry::Occupied(mut entry) => {
                entry.get_mut().album = album.clone();
            }
            Entry::Vacant(entry) => {
                let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
                entry.insert(StoredAlbum {
                    seq,
                    album: album.clone(),
                });
            }
        }

        Ok(album)
    }
}
