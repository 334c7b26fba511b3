//! Core Module - Componenti infrastrutturali dell'applicazione
//!
//! Questo modulo contiene tutti i componenti "core" dell'applicazione:
//! - Configurazione
//! - Gestione errori
//! - Estrazione del body JSON
//! - Stato applicazione

pub mod config;
pub mod error;
pub mod json;
pub mod state;

// Re-exports per facilitare l'import
pub use config::Config;
pub use error::AppError;
pub use json::AppJson;
pub use state::AppState;
