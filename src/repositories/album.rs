//! AlbumRepository - Repository MySQL per la gestione degli album

use super::{FindAll, FindOne, Save, assign_missing_id};
use crate::entities::Album;
use async_trait::async_trait;
use sqlx::{Error, MySqlPool};
use tracing::{debug, info, instrument};

// `seq` is only used to give `find_all` a stable insertion order.
// Binary collation on `id`: lookups are case-sensitive, as in the in-memory store.
const CREATE_ALBUMS_TABLE: &str = "CREATE TABLE IF NOT EXISTS albums (
    seq BIGINT UNSIGNED NOT NULL AUTO_INCREMENT UNIQUE,
    id CHAR(36) CHARACTER SET utf8mb4 COLLATE utf8mb4_bin NOT NULL PRIMARY KEY,
    title TEXT NOT NULL,
    artist TEXT NOT NULL,
    `year` INT NOT NULL,
    price DOUBLE NOT NULL
)";

pub struct AlbumRepository {
    connection_pool: MySqlPool,
}

impl AlbumRepository {
    pub fn new(connection_pool: MySqlPool) -> AlbumRepository {
        Self { connection_pool }
    }

    /// Creates the `albums` table when it is missing
    #[instrument(skip(self))]
    pub async fn ensure_schema(&self) -> Result<(), Error> {
        debug!("Ensuring albums table exists");
        sqlx::query(CREATE_ALBUMS_TABLE)
            .execute(&self.connection_pool)
            .await?;
        info!("Albums table ready");
        Ok(())
    }
}

#[async_trait]
impl FindAll<Album> for AlbumRepository {
    async fn find_all(&self) -> Result<Vec<Album>, Error> {
        let albums = sqlx::query_as::<_, Album>(
            "SELECT id, title, artist, `year`, price FROM albums ORDER BY seq",
        )
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(albums)
    }
}

#[async_trait]
impl FindOne<Album, String> for AlbumRepository {
    async fn find_one(&self, id: &String) -> Result<Option<Album>, Error> {
        let album = sqlx::query_as::<_, Album>(
            "SELECT id, title, artist, `year`, price FROM albums WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(album)
    }
}

#[async_trait]
impl Save<Album> for AlbumRepository {
    async fn save(&self, mut album: Album) -> Result<Album, Error> {
        let id = assign_missing_id(&mut album);

        // Upsert: un id già presente sovrascrive i quattro campi, `seq` resta quello originale
        sqlx::query(
            "INSERT INTO albums (id, title, artist, `year`, price) VALUES (?, ?, ?, ?, ?) \
             ON DUPLICATE KEY UPDATE title = VALUES(title), artist = VALUES(artist), \
             `year` = VALUES(`year`), price = VALUES(price)",
        )
        .bind(&id)
        .bind(&album.title)
        .bind(&album.artist)
        .bind(album.year)
        .bind(album.price)
        .execute(&self.connection_pool)
        .await?;

        Ok(album)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AppState;

    async fn create_repository(pool: MySqlPool) -> Result<AlbumRepository, Error> {
        let repo = AlbumRepository::new(pool);
        repo.ensure_schema().await?;
        Ok(repo)
    }

    async fn read_seq(pool: &MySqlPool, id: &str) -> Result<u64, Error> {
        sqlx::query_scalar("SELECT seq FROM albums WHERE id = ?")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    #[sqlx::test(migrations = false)]
    async fn test_ensure_schema_is_idempotent(pool: MySqlPool) -> sqlx::Result<()> {
        let repo = AlbumRepository::new(pool.clone());
        repo.ensure_schema().await?;
        repo.ensure_schema().await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM albums")
            .fetch_one(&pool)
            .await?;
        assert_eq!(count, 0);
        assert!(repo.find_all().await?.is_empty());
        Ok(())
    }

    #[sqlx::test(migrations = false)]
    async fn test_app_state_with_mysql_bootstraps_schema(pool: MySqlPool) -> sqlx::Result<()> {
        let state = AppState::with_mysql(pool).await?;
        assert!(state.albums.find_all().await?.is_empty());
        Ok(())
    }

    #[sqlx::test(migrations = false)]
    async fn test_save_assigns_id_and_reads_back(pool: MySqlPool) -> sqlx::Result<()> {
        let repo = create_repository(pool).await?;

        let saved = repo.save(Album::new("Let It Be", "The Beatles", 1970, 12.99)).await?;
        let id = saved.id().expect("id assigned on save").to_string();
        assert_eq!(id.len(), 36);

        let found = repo.find_one(&id).await?.expect("saved album must be found");
        assert_eq!(found, saved);
        Ok(())
    }

    #[sqlx::test(migrations = false)]
    async fn test_find_one_missing_returns_none(pool: MySqlPool) -> sqlx::Result<()> {
        let repo = create_repository(pool).await?;
        assert!(repo.find_one(&"does-not-exist".to_string()).await?.is_none());

        // L'id è case-sensitive come nello store in memoria
        let saved = repo.save(Album::new("Help!", "The Beatles", 1965, 8.0)).await?;
        let upper = saved.id().unwrap().to_uppercase();
        assert!(repo.find_one(&upper).await?.is_none());
        Ok(())
    }

    #[sqlx::test(migrations = false)]
    async fn test_find_all_keeps_insertion_order(pool: MySqlPool) -> sqlx::Result<()> {
        let repo = create_repository(pool).await?;

        let mut ids = Vec::new();
        for (title, year) in [("Please Please Me", 1963), ("Rubber Soul", 1965), ("Abbey Road", 1969)] {
            let saved = repo.save(Album::new(title, "The Beatles", year, 10.0)).await?;
            ids.push(saved.id().unwrap().to_string());
        }

        let listed: Vec<String> = repo
            .find_all()
            .await?
            .iter()
            .map(|a| a.id().unwrap().to_string())
            .collect();
        assert_eq!(listed, ids);
        Ok(())
    }

    #[sqlx::test(migrations = false)]
    async fn test_save_with_existing_id_overwrites(pool: MySqlPool) -> sqlx::Result<()> {
        let repo = create_repository(pool.clone()).await?;

        let first = repo.save(Album::new("Help!", "The Beatles", 1965, 8.0)).await?;
        repo.save(Album::new("Revolver", "The Beatles", 1966, 9.0)).await?;
        let id = first.id().unwrap().to_string();
        let seq_before = read_seq(&pool, &id).await?;

        let mut edited = first.clone();
        edited.title = "Help! (Remastered)".to_string();
        edited.year = 2009;
        edited.price = 11.5;
        let saved = repo.save(edited).await?;
        assert_eq!(saved.id(), Some(id.as_str()));

        let all = repo.find_all().await?;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0], saved);
        assert_eq!(read_seq(&pool, &id).await?, seq_before);
        Ok(())
    }
}
