//! Lasertag Wire Protocol
//!
//! This crate defines the binary messages exchanged between a wearable or
//! handheld gameplay device and the controlling app. Both sides MUST decode
//! and encode through this crate.
//!
//! # Message Layout
//!
//! Every message starts with a one-byte type code. The code is both the wire
//! discriminant and part of the message's identity; which layout it selects is
//! decided by a deployment-supplied [`Registry`].
//!
//! - **Outbound** (fixed layouts): `EventToServer` (4 bytes), `MessageToDevice`
//!   (5 bytes).
//! - **Everything else** encodes as the lone type byte.
//!
//! Decoding and encoding are pure: no I/O, no shared state, no blocking.
//! Decode failures concern one packet only; the receiving loop drops it and
//! continues.
//!
//! # Modules
//!
//! - `message`:  `WireMessage` variants and encoding.
//! - `decode`:   layout parsing and `DecodeError`.
//! - `registry`: type code to layout mapping, loadable from TOML.
//! - `framing`:  stop-byte delimited frames for serial links.

#![deny(unsafe_code)]

pub mod decode;
pub mod framing;
pub mod message;
pub mod registry;

pub use decode::{DecodeError, decode};
pub use framing::{MAX_FRAME_SIZE, STOP_BYTE, read_frame, write_frame};
pub use message::{MessageKind, TypeCode, WireMessage};
pub use registry::{ConfigError, Registry};

/// Encode a message for the transport.
pub fn encode(message: &WireMessage) -> Vec<u8> {
    message.encode()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use lasertag_sim::{Player, Roster};

    use super::*;

    const PING: u8 = 0x01;
    const GOT_HIT: u8 = 0x10;
    const STATS: u8 = 0x40;
    const TO_SERVER: u8 = 0x50;
    const TO_DEVICE: u8 = 0x60;

    fn registry() -> Registry {
        Registry::from_toml_str(
            r#"
            [codes]
            signal = [0x01]
            event_in = [0x10]
            stats_in = [0x40]
            event_to_server = [0x50]
            message_to_device = [0x60]
            "#,
        )
        .unwrap()
    }

    #[test]
    fn test_outbound_bytes_roundtrip() {
        let registry = registry();
        let samples: [&[u8]; 6] = [
            &[TO_SERVER, 0, 0, 0],
            &[TO_SERVER, 7, 255, 100],
            &[TO_SERVER, 255, 128, 1],
            &[TO_DEVICE, 0, 0, 0, 0],
            &[TO_DEVICE, 3, 1, 2, 20],
            &[TO_DEVICE, 255, 255, 255, 255],
        ];
        for bytes in samples {
            let decoded = decode(bytes, &registry).unwrap();
            assert_eq!(encode(&decoded), bytes);
        }
    }

    #[test]
    fn test_outbound_message_roundtrip() {
        let registry = registry();
        let mut player = Player::new(4);
        player.decrease_health(10);

        let messages = [
            WireMessage::event_to_server(TO_SERVER, &player, 2),
            WireMessage::MessageToDevice {
                code: TO_DEVICE,
                player_id: 4,
                player_team: 2,
                player_state: 1,
                bullets_left: 19,
            },
            WireMessage::Signal { code: PING },
        ];
        for msg in messages {
            assert_eq!(registry.decode(&encode(&msg)).unwrap(), msg);
        }
    }

    #[test]
    fn test_unknown_code_is_per_packet() {
        let registry = registry();
        let packets: [&[u8]; 3] = [&[GOT_HIT, 2], &[0xEE, 1], &[GOT_HIT, 3]];

        let mut decoded = Vec::new();
        let mut dropped = Vec::new();
        for packet in packets {
            match registry.decode(packet) {
                Ok(msg) => decoded.push(msg),
                Err(err) => dropped.push(err),
            }
        }

        assert_eq!(decoded.len(), 2);
        assert_eq!(dropped, vec![DecodeError::UnknownMessageType { code: 0xEE }]);
    }

    #[test]
    fn test_framed_stream_into_roster() {
        // No score byte or name byte equals STOP_BYTE.
        let mut stats = vec![STATS, 1, 1, 0x01, 0x2C, 2];
        stats.extend_from_slice(&[1, 100, 0, 3, 1, 20, 30, 0, 0, 3]);
        stats.extend_from_slice(b"Zed");
        stats.extend_from_slice(&[2, 60, 0, 9, 2, 20, 30, 0, 0, 0]);

        let mut wire = Vec::new();
        write_frame(&mut wire, &[PING]).unwrap();
        write_frame(&mut wire, &stats).unwrap();

        let registry = registry();
        let mut roster = Roster::new();
        let mut cursor = Cursor::new(wire);
        while let Some(frame) = read_frame(&mut cursor).unwrap() {
            if let WireMessage::StatsIn {
                game_timer_seconds,
                players,
                ..
            } = registry.decode(&frame).unwrap()
            {
                assert_eq!(game_timer_seconds, 300);
                roster.merge(players);
            }
        }

        let order: Vec<u8> = roster.iter().map(Player::id).collect();
        assert_eq!(order, vec![2, 1]);
        assert_eq!(roster.get(1).unwrap().name, "Zed");
        assert_eq!(roster.get(2).unwrap().health, 60);
    }
}
