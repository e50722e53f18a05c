//! Render projection
//!
//! Turns a `GameState` into an ordered list of screen-space draw commands.
//! The camera follows the egg; drawing the commands is the platform's job.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{GamePhase, GameState};

const HUD_FONT_SIZE: f32 = 16.0;
const LABEL_FONT_SIZE: f32 = 12.0;
const BANNER_FONT_SIZE: f32 = 20.0;
/// Gap between an entity and its HP label
const LABEL_GAP: f32 = 12.0;
const HUD_ORIGIN: Vec2 = Vec2::new(50.0, 20.0);
const HUD_LINE_HEIGHT: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
    Yellow,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

/// One drawing primitive, in screen coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Clear {
        color: Color,
    },
    Rect {
        pos: Vec2,
        size: Vec2,
        color: Color,
    },
    Text {
        pos: Vec2,
        text: String,
        font_size: f32,
        color: Color,
        align: TextAlign,
    },
}

/// Everything needed to draw one frame, in paint order
pub type Frame = Vec<DrawCommand>;

/// HUD clock as `m:ss` for the match time so far
pub fn format_elapsed(state: &GameState) -> String {
    let secs = state.elapsed_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// `current/max` label; stored HP may be negative but never displays so
pub fn hp_label(hp: i32, max_hp: i32) -> String {
    format!("{}/{}", hp.max(0), max_hp)
}

fn text(pos: Vec2, text: String, font_size: f32, color: Color, align: TextAlign) -> DrawCommand {
    DrawCommand::Text {
        pos,
        text,
        font_size,
        color,
        align,
    }
}

/// Project a game state into a frame
pub fn project(state: &GameState) -> Frame {
    let config = &state.config;
    let screen = config.screen_size();
    let world = config.world_size();
    let player = &state.player;
    // World-to-screen offset that keeps the egg centered
    let offset = player.aabb().center() - screen / 2.0;
    let game_over = state.phase == GamePhase::GameOver;

    let mut frame = vec![DrawCommand::Clear { color: Color::Black }];

    // World border
    let borders = [
        (Vec2::ZERO, Vec2::new(world.x, 1.0)),
        (Vec2::new(0.0, world.y), Vec2::new(world.x, 1.0)),
        (Vec2::ZERO, Vec2::new(1.0, world.y)),
        (Vec2::new(world.x, 0.0), Vec2::new(1.0, world.y)),
    ];
    frame.extend(borders.into_iter().map(|(pos, size)| DrawCommand::Rect {
        pos: pos - offset,
        size,
        color: Color::White,
    }));

    if !game_over {
        frame.push(DrawCommand::Rect {
            pos: screen / 2.0 - player.size / 2.0,
            size: player.size,
            color: Color::White,
        });
        frame.push(text(
            Vec2::new(screen.x / 2.0, screen.y / 2.0 + player.size.y / 2.0 + LABEL_GAP),
            hp_label(player.hp, player.max_hp),
            LABEL_FONT_SIZE,
            Color::White,
            TextAlign::Center,
        ));
    }

    frame.push(text(
        HUD_ORIGIN,
        format!("Time: {}", format_elapsed(state)),
        HUD_FONT_SIZE,
        Color::White,
        TextAlign::Left,
    ));
    frame.push(text(
        HUD_ORIGIN + Vec2::new(0.0, HUD_LINE_HEIGHT),
        format!("Defeated: {}", state.score),
        HUD_FONT_SIZE,
        Color::White,
        TextAlign::Left,
    ));

    let banner_pos = Vec2::new(screen.x / 2.0, screen.y / 2.0 - player.size.y);
    match state.phase {
        GamePhase::Won => frame.push(text(
            banner_pos,
            "You Win!".to_string(),
            BANNER_FONT_SIZE,
            Color::White,
            TextAlign::Center,
        )),
        GamePhase::GameOver => {
            frame.push(DrawCommand::Clear { color: Color::Black });
            frame.push(text(
                banner_pos,
                "Game Over".to_string(),
                BANNER_FONT_SIZE,
                Color::White,
                TextAlign::Center,
            ));
        }
        GamePhase::Playing => {}
    }

    for hostile in &state.hostiles {
        let pos = hostile.pos - offset;
        frame.push(DrawCommand::Rect {
            pos,
            size: hostile.size,
            color: Color::Yellow,
        });
        frame.push(text(
            Vec2::new(pos.x + hostile.size.x / 2.0, pos.y + hostile.size.y + LABEL_GAP),
            hp_label(hostile.hp, hostile.max_hp),
            LABEL_FONT_SIZE,
            Color::Yellow,
            TextAlign::Center,
        ));
    }

    if let Some(boss) = state.boss.active() {
        let pos = boss.pos - offset;
        frame.push(DrawCommand::Rect {
            pos,
            size: boss.size,
            color: Color::Red,
        });
        frame.push(text(
            pos - Vec2::new(0.0, LABEL_GAP),
            hp_label(boss.hp, boss.max_hp),
            LABEL_FONT_SIZE,
            Color::Red,
            TextAlign::Left,
        ));
    }

    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorldConfig;
    use crate::sim::{Boss, BossEncounter, Hostile, Player};
    use std::sync::Arc;

    fn state() -> GameState {
        let config = Arc::new(WorldConfig {
            screen_width: 100,
            screen_height: 100,
            fps: 60,
            world_width: 200,
            world_height: 200,
            ..Default::default()
        });
        let player = Player {
            pos: Vec2::new(40.0, 40.0),
            size: Vec2::splat(20.0),
            hp: 10,
            max_hp: 10,
        };
        GameState::with_entities(config, player, Vec::new(), 9999)
    }

    fn texts(frame: &Frame) -> Vec<&str> {
        frame
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_format_elapsed() {
        let mut state = state();
        let fps = u64::from(state.config.fps);
        assert_eq!(format_elapsed(&state), "0:00");
        state.ticks = fps - 1;
        assert_eq!(format_elapsed(&state), "0:00");
        state.ticks = fps * 61;
        assert_eq!(format_elapsed(&state), "1:01");
        state.ticks = fps * 600;
        assert_eq!(format_elapsed(&state), "10:00");
    }

    #[test]
    fn test_hp_label_floors_at_zero() {
        assert_eq!(hp_label(7, 10), "7/10");
        assert_eq!(hp_label(-2, 10), "0/10");
    }

    #[test]
    fn test_playing_frame() {
        let frame = project(&state());
        assert_eq!(frame[0], DrawCommand::Clear { color: Color::Black });
        // Egg drawn at screen center
        assert!(frame.contains(&DrawCommand::Rect {
            pos: Vec2::new(40.0, 40.0),
            size: Vec2::splat(20.0),
            color: Color::White,
        }));
        let labels = texts(&frame);
        assert!(labels.contains(&"10/10"));
        assert!(labels.contains(&"Time: 0:00"));
        assert!(labels.contains(&"Defeated: 0"));
        assert!(!labels.contains(&"You Win!"));
        assert!(!labels.contains(&"Game Over"));
    }

    #[test]
    fn test_camera_follows_egg() {
        // Egg center (50, 50), screen center (50, 50): world origin stays put
        let frame = project(&state());
        assert_eq!(
            frame[1],
            DrawCommand::Rect {
                pos: Vec2::ZERO,
                size: Vec2::new(200.0, 1.0),
                color: Color::White,
            }
        );

        let mut moved = state();
        moved.player.pos += Vec2::new(30.0, 0.0);
        let frame = project(&moved);
        assert_eq!(
            frame[1],
            DrawCommand::Rect {
                pos: Vec2::new(-30.0, 0.0),
                size: Vec2::new(200.0, 1.0),
                color: Color::White,
            }
        );
    }

    #[test]
    fn test_hostiles_and_active_boss_drawn() {
        let base = state();
        let boss = Boss {
            pos: Vec2::new(100.0, 100.0),
            size: Vec2::splat(20.0),
            hp: 4,
            max_hp: 5,
            attack_damage: 3,
        };
        let s = GameState {
            hostiles: vec![Hostile {
                pos: Vec2::new(10.0, 10.0),
                size: Vec2::splat(20.0),
                hp: 1,
                max_hp: 2,
                attack_damage: 1,
            }],
            boss: BossEncounter::Active(boss.clone()),
            ..base.clone()
        };
        let frame = project(&s);
        assert!(frame.contains(&DrawCommand::Rect {
            pos: Vec2::new(10.0, 10.0),
            size: Vec2::splat(20.0),
            color: Color::Yellow,
        }));
        assert!(frame.contains(&DrawCommand::Rect {
            pos: Vec2::new(100.0, 100.0),
            size: Vec2::splat(20.0),
            color: Color::Red,
        }));
        let labels = texts(&frame);
        assert!(labels.contains(&"1/2"));
        assert!(labels.contains(&"4/5"));

        // Defeated boss is no longer drawn
        let s = GameState {
            boss: BossEncounter::Defeated(Boss { hp: 0, ..boss }),
            phase: GamePhase::Won,
            ..base
        };
        let frame = project(&s);
        assert!(!frame.iter().any(|cmd| matches!(cmd, DrawCommand::Rect { color: Color::Red, .. })));
        assert!(texts(&frame).contains(&"You Win!"));
    }

    #[test]
    fn test_game_over_frame() {
        let mut s = state();
        s.player.hp = -3;
        s.phase = GamePhase::GameOver;
        let frame = project(&s);
        let labels = texts(&frame);
        assert!(labels.contains(&"Game Over"));
        assert!(!labels.contains(&"0/10"));
        assert!(!labels.contains(&"-3/10"));
        let clears = frame
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Clear { .. }))
            .count();
        assert_eq!(clears, 2);
    }
}
