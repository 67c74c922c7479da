//! Inbound decoding.
//!
//! The leading byte selects a layout through the [`Registry`]; the remaining
//! bytes are read in fixed field order. Fields are single bytes except the
//! stats timer and per-player score, which are big-endian `i16`. Booleans are
//! any non-zero byte.
//!
//! Stats player record:
//! `[id, health, score_hi, score_lo, team_id, damage, bullets_max,
//!   respawn_point (i8), flag_carrier, name_len, name...]`
//!
//! Bytes past the end of a fixed layout are ignored. Every failure is local to
//! one packet; callers drop it and keep reading.

use lasertag_sim::Player;
use thiserror::Error;

use crate::message::{MessageKind, TypeCode, WireMessage};
use crate::registry::Registry;

/// Per-packet decode failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// No leading byte.
    #[error("empty message")]
    EmptyMessage,

    /// The leading byte has no registry entry.
    #[error("unknown message type {code:#04x}")]
    UnknownMessageType { code: TypeCode },

    /// Fewer bytes than the layout requires.
    #[error("truncated {kind:?} message {code:#04x}: need {needed} bytes, have {available}")]
    TruncatedMessage {
        code: TypeCode,
        kind: MessageKind,
        needed: usize,
        available: usize,
    },
}

/// Decode one message.
pub fn decode(bytes: &[u8], registry: &Registry) -> Result<WireMessage, DecodeError> {
    let result = decode_inner(bytes, registry);
    match &result {
        Ok(msg) => tracing::trace!(code = msg.type_code(), kind = ?msg.kind(), "decoded message"),
        Err(err) => tracing::debug!(%err, len = bytes.len(), "dropping undecodable message"),
    }
    result
}

fn decode_inner(bytes: &[u8], registry: &Registry) -> Result<WireMessage, DecodeError> {
    let (&code, _) = bytes.split_first().ok_or(DecodeError::EmptyMessage)?;
    let kind = registry
        .lookup(code)
        .ok_or(DecodeError::UnknownMessageType { code })?;

    let mut r = Reader {
        bytes,
        pos: 1,
        code,
        kind,
    };

    let msg = match kind {
        MessageKind::Signal => WireMessage::Signal { code },
        MessageKind::Time => WireMessage::Time {
            code,
            minutes: r.u8()?,
            seconds: r.u8()?,
        },
        MessageKind::EventIn => WireMessage::EventIn {
            code,
            payload: r.u8()?,
        },
        MessageKind::MockEventFromDevice => WireMessage::MockEventFromDevice {
            code,
            payload: r.rest().to_vec(),
        },
        MessageKind::GameStartIn => WireMessage::GameStartIn {
            code,
            team_play: r.flag()?,
            game_time_minutes: r.u8()?,
        },
        MessageKind::StatsIn => {
            let is_game_running = r.flag()?;
            let is_team_play = r.flag()?;
            let game_timer_seconds = r.i16_be()?;
            let count = r.u8()?;
            let mut players = Vec::with_capacity(usize::from(count));
            for _ in 0..count {
                players.push(r.player()?);
            }
            WireMessage::StatsIn {
                code,
                is_game_running,
                is_team_play,
                game_timer_seconds,
                players,
            }
        }
        MessageKind::EventToServer => WireMessage::EventToServer {
            code,
            player_id: r.u8()?,
            extra_value: r.u8()?,
            health: r.u8()?,
        },
        MessageKind::MessageToDevice => WireMessage::MessageToDevice {
            code,
            player_id: r.u8()?,
            player_team: r.u8()?,
            player_state: r.u8()?,
            bullets_left: r.u8()?,
        },
    };
    Ok(msg)
}

/// Forward-only cursor that reports truncation against the message's layout.
struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
    code: TypeCode,
    kind: MessageKind,
}

impl<'a> Reader<'a> {
    fn take(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        let end = self.pos + n;
        let Some(slice) = self.bytes.get(self.pos..end) else {
            return Err(DecodeError::TruncatedMessage {
                code: self.code,
                kind: self.kind,
                needed: end,
                available: self.bytes.len(),
            });
        };
        self.pos = end;
        Ok(slice)
    }

    fn u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.take(1)?[0])
    }

    fn flag(&mut self) -> Result<bool, DecodeError> {
        Ok(self.u8()? != 0)
    }

    fn i8(&mut self) -> Result<i8, DecodeError> {
        Ok(self.u8()? as i8)
    }

    fn i16_be(&mut self) -> Result<i16, DecodeError> {
        let b = self.take(2)?;
        Ok(i16::from_be_bytes([b[0], b[1]]))
    }

    fn rest(&mut self) -> &'a [u8] {
        let rest = &self.bytes[self.pos.min(self.bytes.len())..];
        self.pos = self.bytes.len();
        rest
    }

    fn player(&mut self) -> Result<Player, DecodeError> {
        let mut player = Player::new(self.u8()?);
        player.health = i32::from(self.u8()?);
        player.score = i32::from(self.i16_be()?);
        player.team_id = i32::from(self.u8()?);
        player.damage = i32::from(self.u8()?);
        player.bullets_max = i32::from(self.u8()?);
        player.assigned_respawn_point = i32::from(self.i8()?);
        player.flag_carrier = self.flag()?;
        let name_len = usize::from(self.u8()?);
        player.name = String::from_utf8_lossy(self.take(name_len)?).into_owned();
        Ok(player)
    }
}
