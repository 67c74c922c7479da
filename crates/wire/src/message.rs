//! Wire message variants and their outbound encodings.

use lasertag_sim::{Player, PlayerId};

/// One-byte wire discriminant. The values are owned by the deployment's
/// [`Registry`](crate::Registry), not by this crate.
pub type TypeCode = u8;

/// Layout family of a message, independent of its type code.
///
/// A registry maps each type code to one of these; several codes usually share
/// a kind (every device event is an `EventIn`, for example).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Signal,
    Time,
    EventIn,
    MockEventFromDevice,
    GameStartIn,
    StatsIn,
    EventToServer,
    MessageToDevice,
}

/// A single protocol unit exchanged between device and controller.
///
/// Every variant carries its type code. Derived equality and hashing cover
/// all fields of a variant; use [`WireMessage::same_type`] to compare on the
/// code alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WireMessage {
    /// Keep-alive / ping.
    Signal { code: TypeCode },

    /// Clock sync for the match countdown.
    Time {
        code: TypeCode,
        minutes: u8,
        seconds: u8,
    },

    /// Event reported by a device, with one byte of payload.
    EventIn { code: TypeCode, payload: u8 },

    /// Raw bytes to replay into a simulated device.
    MockEventFromDevice { code: TypeCode, payload: Vec<u8> },

    /// Match configuration at game start.
    GameStartIn {
        code: TypeCode,
        team_play: bool,
        game_time_minutes: u8,
    },

    /// Full match state dump. `players` keeps wire order.
    ///
    /// Players compare by id, so two dumps with the same ids in the same
    /// order are equal even if the players' values differ.
    StatsIn {
        code: TypeCode,
        is_game_running: bool,
        is_team_play: bool,
        game_timer_seconds: i16,
        players: Vec<Player>,
    },

    /// Event report sent to the game server: `[code, player_id, extra_value, health]`.
    EventToServer {
        code: TypeCode,
        player_id: PlayerId,
        extra_value: u8,
        health: u8,
    },

    /// Command sent to a device:
    /// `[code, player_id, player_team, player_state, bullets_left]`.
    MessageToDevice {
        code: TypeCode,
        player_id: PlayerId,
        player_team: u8,
        player_state: u8,
        bullets_left: u8,
    },
}

impl WireMessage {
    /// Build an event report from the current state of `player`.
    ///
    /// `extra_value` is truncated to its low byte, as is the player's health.
    /// Values outside `0..=255` wrap.
    pub fn event_to_server(code: TypeCode, player: &Player, extra_value: i32) -> Self {
        Self::EventToServer {
            code,
            player_id: player.id(),
            extra_value: extra_value as u8,
            health: player.health as u8,
        }
    }

    /// Build a clock message from a countdown in seconds.
    pub fn time_from_seconds(code: TypeCode, total_seconds: u32) -> Self {
        Self::Time {
            code,
            minutes: (total_seconds / 60) as u8,
            seconds: (total_seconds % 60) as u8,
        }
    }

    pub fn type_code(&self) -> TypeCode {
        match self {
            Self::Signal { code }
            | Self::Time { code, .. }
            | Self::EventIn { code, .. }
            | Self::MockEventFromDevice { code, .. }
            | Self::GameStartIn { code, .. }
            | Self::StatsIn { code, .. }
            | Self::EventToServer { code, .. }
            | Self::MessageToDevice { code, .. } => *code,
        }
    }

    pub fn kind(&self) -> MessageKind {
        match self {
            Self::Signal { .. } => MessageKind::Signal,
            Self::Time { .. } => MessageKind::Time,
            Self::EventIn { .. } => MessageKind::EventIn,
            Self::MockEventFromDevice { .. } => MessageKind::MockEventFromDevice,
            Self::GameStartIn { .. } => MessageKind::GameStartIn,
            Self::StatsIn { .. } => MessageKind::StatsIn,
            Self::EventToServer { .. } => MessageKind::EventToServer,
            Self::MessageToDevice { .. } => MessageKind::MessageToDevice,
        }
    }

    /// Code-only comparison, ignoring every other field.
    pub fn same_type(&self, other: &WireMessage) -> bool {
        self.type_code() == other.type_code()
    }

    /// Encode for sending.
    ///
    /// `EventToServer` and `MessageToDevice` have fixed outbound layouts; every
    /// other variant encodes as its single type byte.
    pub fn encode(&self) -> Vec<u8> {
        match *self {
            Self::EventToServer {
                code,
                player_id,
                extra_value,
                health,
            } => vec![code, player_id, extra_value, health],
            Self::MessageToDevice {
                code,
                player_id,
                player_team,
                player_state,
                bullets_left,
            } => vec![code, player_id, player_team, player_state, bullets_left],
            _ => vec![self.type_code()],
        }
    }
}
