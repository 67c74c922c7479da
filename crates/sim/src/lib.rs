//! Lasertag Player State
//!
//! This crate holds the authoritative per-player record that gameplay
//! messages mutate: health, ammunition, team and score.
//!
//! # Architecture Constraints
//!
//! The player core MUST NOT:
//! - Perform I/O operations (file, network, etc.)
//! - Block or spawn threads
//! - Share a `Player` between writers
//!
//! The embedding game loop serializes every mutating call against a given
//! player. Decoding and encoding of the messages that drive these operations
//! live in `lasertag-wire`.
//!
//! # Modules
//!
//! - `player`: the `Player` record and its bounded-arithmetic operations.
//! - `roster`: every known player, merged from stats dumps.
//! - `config`: the `Limits` (max health, magazine size) players clamp against.

#![deny(unsafe_code)]

pub mod config;
pub mod player;
pub mod roster;

pub use config::{ConfigError, Limits, MAGAZINE_SIZE, MAX_HEALTH};
pub use player::{DEFAULT_NAME, NO_RESPAWN_POINT, Player, PlayerId, RESPAWN_HEALTH};
pub use roster::Roster;
