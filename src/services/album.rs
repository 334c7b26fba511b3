//! Album services - Gestione del catalogo album

use crate::core::{AppError, AppJson, AppState};
use crate::dtos::{AlbumPayloadDTO, AlbumResponseDTO};
use crate::entities::Album;
use crate::repositories::{FindAll, FindOne, Save};
use axum::extract::{Json, Path, State};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

#[instrument(skip(state))]
pub async fn list_albums(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Album>>, AppError> {
    debug!("Listing all albums");
    let albums = state.albums.find_all().await?;
    info!("Retrieved {} albums", albums.len());
    Ok(Json(albums))
}

#[instrument(skip(state, body), fields(title = %body.title, artist = %body.artist))]
pub async fn create_album(
    State(state): State<Arc<AppState>>,
    AppJson(body): AppJson<AlbumPayloadDTO>,
) -> Result<Json<AlbumResponseDTO>, AppError> {
    debug!("Creating new album");
    // 1. Costruire l'album dal payload (senza id)
    // 2. Salvarlo: il repository assegna l'id
    // 3. Ritornare messaggio + album persistito
    let album = state.albums.save(Album::from(body)).await?;
    info!("Album created: {}", album);
    Ok(Json(AlbumResponseDTO::created(album)))
}

#[instrument(skip(state), fields(album_id = %album_id))]
pub async fn get_album(
    State(state): State<Arc<AppState>>,
    Path(album_id): Path<String>, // parametro dalla URL /albums/{album_id}
) -> Result<Json<Album>, AppError> {
    debug!("Fetching album by ID");
    let album = state.albums.find_one(&album_id).await?.ok_or_else(|| {
        warn!("Album not found");
        AppError::not_found("Album not found")
    })?;
    info!("Album found");
    Ok(Json(album))
}

#[instrument(skip(state, body), fields(album_id = %album_id))]
pub async fn update_album(
    State(state): State<Arc<AppState>>,
    Path(album_id): Path<String>,
    AppJson(body): AppJson<AlbumPayloadDTO>,
) -> Result<Json<AlbumResponseDTO>, AppError> {
    debug!("Updating album");
    // 1. Recuperare l'album esistente, 404 se non c'è
    // 2. Sovrascrivere i quattro campi dal payload, l'id resta invariato
    // 3. Salvare e ritornare messaggio + album aggiornato
    let mut album = state.albums.find_one(&album_id).await?.ok_or_else(|| {
        warn!("Cannot update missing album");
        AppError::not_found("Album not found")
    })?;

    body.apply_to(&mut album);
    let album = state.albums.save(album).await?;

    info!("Album updated: {}", album);
    Ok(Json(AlbumResponseDTO::updated(album)))
}
