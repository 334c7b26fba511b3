//! Album DTOs - Data Transfer Objects per album

use crate::entities::Album;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Body di POST /albums e PUT /albums/{id}
///
/// `year` and `price` accept either a JSON number or a string holding one,
/// e.g. `"year": "1970"`. Anything that does not parse is rejected, and so is
/// a price that is not a finite number (`"NaN"`, `"inf"`, `"1e400"`).
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct AlbumPayloadDTO {
    pub title: String,
    pub artist: String,
    #[serde(deserialize_with = "integer_or_integer_string")]
    pub year: i32,
    #[serde(deserialize_with = "finite_number_or_numeric_string")]
    pub price: f64,
}

impl AlbumPayloadDTO {
    /// Overwrites the four mutable fields, the id is left untouched
    pub fn apply_to(self, album: &mut Album) {
        album.title = self.title;
        album.artist = self.artist;
        album.year = self.year;
        album.price = self.price;
    }
}

impl From<AlbumPayloadDTO> for Album {
    fn from(value: AlbumPayloadDTO) -> Self {
        Album::new(value.title, value.artist, value.year, value.price)
    }
}

/// Risposta di creazione e modifica: messaggio di stato + album persistito
#[derive(Serialize, Debug)]
pub struct AlbumResponseDTO {
    pub message: String,
    pub album: Album,
}

impl AlbumResponseDTO {
    pub fn created(album: Album) -> Self {
        Self {
            message: "Album created successfully".to_string(),
            album,
        }
    }

    pub fn updated(album: Album) -> Self {
        Self {
            message: "Album updated successfully".to_string(),
            album,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString<T> {
    Number(T),
    Text(String),
}

fn parse_text<T, E>(text: &str) -> Result<T, E>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    E: de::Error,
{
    text.parse::<T>()
        .map_err(|e| E::custom(format!("invalid number {:?}: {}", text, e)))
}

// Intero in base 10, niente spazi attorno al numero
fn integer_or_integer_string<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::<i32>::deserialize(deserializer)? {
        NumberOrString::Number(value) => Ok(value),
        NumberOrString::Text(text) => parse_text(&text),
    }
}

// Spazi attorno ammessi, ma NaN e infinito no:
// serde_json li scriverebbe come `null`
fn finite_number_or_numeric_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match NumberOrString::<f64>::deserialize(deserializer)? {
        NumberOrString::Number(value) => value,
        NumberOrString::Text(text) => parse_text::<f64, D::Error>(text.trim())?,
    };
    if !value.is_finite() {
        return Err(de::Error::custom(format!("price must be a finite number, got {}", value)));
    }
    Ok(value)
}
