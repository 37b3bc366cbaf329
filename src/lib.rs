//! Read-only HTTP API over an in-memory list of cricket players.
//!
//! `GET /api/players` lists the roster and `GET /api/searchPlayers` filters
//! it by a general `q` term or by `name`/`role`.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod search;
pub mod store;

pub use routes::router;
pub use store::PlayerStore;
