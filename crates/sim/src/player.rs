//! Per-participant gameplay record.
//!
//! A `Player` is exclusively owned by the game loop and mutated through the
//! methods below, one caller at a time. Health and ammunition are bounded:
//!
//! - `0 <= health <= limits.max_health`
//! - `0 <= bullets_in_magazine <= limits.magazine_size`
//! - `0 <= bullets_total <= bullets_max`
//!
//! Out-of-range results are clamped, never reported as errors. The amounts
//! passed to the increase/decrease operations are not sign-checked: a negative
//! damage heals and a negative heal damages, so health can leave its range.
//! `copy_values_from` also takes the source's health as-is, unclamped.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::config::Limits;

/// Per-match participant identifier. Matches the one-byte id on the wire.
pub type PlayerId = u8;

/// Health given back on respawn. Not tied to `Limits::max_health`.
pub const RESPAWN_HEALTH: i32 = 50;

/// `assigned_respawn_point` value meaning no point is assigned.
pub const NO_RESPAWN_POINT: i32 = -1;

/// Name given to players constructed from an id alone.
pub const DEFAULT_NAME: &str = "NoName";

/// Mutable per-player state.
///
/// Equality and hashing use [`Player::key`] only, so two records with the same
/// id are the same player whatever their other values.
#[derive(Debug, Clone)]
pub struct Player {
    id: PlayerId,
    limits: Limits,
    pub health: i32,
    pub score: i32,
    pub team_id: i32,
    pub damage: i32,
    pub bullets_in_magazine: i32,
    pub bullets_total: i32,
    pub bullets_max: i32,
    /// Respawn point assigned by the controller, `NO_RESPAWN_POINT` if none.
    pub assigned_respawn_point: i32,
    pub flag_carrier: bool,
    pub name: String,
}

impl Player {
    /// Create a player with default limits.
    ///
    /// Starts at health 100 with no ammunition, no score, team 0, respawn
    /// point 0 and the placeholder name.
    pub fn new(id: PlayerId) -> Self {
        Self::with_limits(id, Limits::default())
    }

    /// Create a player clamped against the given limits.
    pub fn with_limits(id: PlayerId, limits: Limits) -> Self {
        Self {
            id,
            limits,
            health: 100,
            score: 0,
            team_id: 0,
            damage: 0,
            bullets_in_magazine: 0,
            bullets_total: 0,
            bullets_max: 0,
            assigned_respawn_point: 0,
            flag_carrier: false,
            name: DEFAULT_NAME.to_string(),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Identity key used by `PartialEq` and `Hash`.
    pub fn key(&self) -> PlayerId {
        self.id
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Apply damage. Health floors at 0.
    pub fn decrease_health(&mut self, amount: i32) {
        self.health = self.health.saturating_sub(amount).max(0);
    }

    /// Heal. Health caps at `max_health`.
    pub fn increase_health(&mut self, amount: i32) {
        self.health = self
            .health
            .saturating_add(amount)
            .min(self.limits.max_health);
    }

    /// Fire one round. No-op on an empty magazine.
    pub fn decrease_bullets(&mut self) {
        self.bullets_in_magazine = self.bullets_in_magazine.saturating_sub(1).max(0);
    }

    /// Add rounds to the reserve. The reserve caps at `bullets_max`.
    pub fn increase_bullets(&mut self, amount: i32) {
        self.bullets_total = self
            .bullets_total
            .saturating_add(amount)
            .min(self.bullets_max);
    }

    /// Bring the player back with a full magazine and reserve.
    ///
    /// Health is set to [`RESPAWN_HEALTH`], not the configured maximum.
    pub fn respawn(&mut self) {
        self.assigned_respawn_point = NO_RESPAWN_POINT;
        self.health = RESPAWN_HEALTH;
        self.bullets_in_magazine = self.limits.magazine_size;
        self.bullets_total = self.bullets_max;
    }

    /// Move rounds from the reserve into the magazine.
    ///
    /// Returns `false` without touching anything if the reserve is empty or
    /// the magazine is already full.
    pub fn reload(&mut self) -> bool {
        let magazine_size = self.limits.magazine_size;
        if self.bullets_total <= 0 || self.bullets_in_magazine >= magazine_size {
            return false;
        }
        let transfer = (magazine_size - self.bullets_in_magazine).min(self.bullets_total);
        self.bullets_total -= transfer;
        self.bullets_in_magazine += transfer;
        true
    }

    /// Merge controller-owned values from another record of the same player.
    ///
    /// Health, score, team, damage, reserve capacity and respawn point are
    /// always overwritten. The name is only taken when `source.name` is not
    /// empty. The reserve is clamped to the new capacity; magazine, flag state
    /// and id stay untouched.
    pub fn copy_values_from(&mut self, source: &Player) {
        self.health = source.health;
        self.score = source.score;
        self.team_id = source.team_id;
        self.damage = source.damage;
        self.bullets_max = source.bullets_max;
        self.assigned_respawn_point = source.assigned_respawn_point;
        self.bullets_total = self.bullets_total.min(self.bullets_max);

        if !source.name.is_empty() {
            self.name.clone_from(&source.name);
        }
    }

    /// Leaderboard order: higher score first. Equal scores compare equal.
    pub fn cmp_by_score(&self, other: &Player) -> Ordering {
        other.score.cmp(&self.score)
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Player {}

impl Hash for Player {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

// ============================================================================
// Tests
// ============================================================================
