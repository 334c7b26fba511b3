//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene le entità che rappresentano i dati persistiti.
//! Ogni entity corrisponde a una tabella nel database (o a una collezione nello store in memoria).

pub mod album;

// Re-exports per facilitare l'import
pub use album::Album;
