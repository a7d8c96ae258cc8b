/*************************************************************************

This file is part of a recreation of 'The Great Escape'
Game copyright (c) 1986 Ocean Software Ltd. and Denton Designs Ltd.

Rust port maintains original logic and behaviour.

**************************************************************************/

//! The night searchlights.
//!
//! Three lights walk scripted paths. When one catches the hero it locks
//! on, tracks him, and rings the alarm until he slips out of sight for
//! long enough.

use spectrum::screen::{ATTRIBUTE_BRIGHT_BLUE_OVER_BLACK, ATTRIBUTE_YELLOW_OVER_BLACK};
use spectrum::Machine;

use crate::constants::*;
use crate::data::searchlight::{SEARCHLIGHT_INITIAL, SEARCHLIGHT_SCRIPTS};
use crate::render::{GAME_WINDOW_SCREEN_COL, GAME_WINDOW_SCREEN_ROW};
use crate::state::State;
use crate::types::{Direction, Pos8};

/// Bit 7 of the script index walks the script backwards.
const INDEX_REVERSE: u8 = 1 << 7;

/// The lit disc: 16x16 pixels, two bytes per row.
static SEARCHLIGHT_SHAPE: [u8; 32] = [
    0x07, 0xE0, 0x1F, 0xF8, 0x3F, 0xFC, 0x7F, 0xFE, 0x7F, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F, 0xFE, 0x7F, 0xFE, 0x3F, 0xFC, 0x1F, 0xF8,
    0x07, 0xE0,
];

/// Reset the lights to their start-of-night state.
pub fn searchlight_reset(state: &mut State) {
    state.searchlight = SEARCHLIGHT_INITIAL;
    state.searchlight_state = SEARCHLIGHT_STATE_SEARCHING;
}

/// One tick of searchlight behaviour; call at night only.
pub fn nighttime(state: &mut State, machine: &mut dyn Machine) {
    if state.searchlight_state != SEARCHLIGHT_STATE_SEARCHING {
        // Locked on: the displayed light chases the hero's position one
        // step at a time.
        let hero_tile = Pos8 {
            x: (state.vischars[HERO_VISCHAR].iso_pos.x / 8) as u8,
            y: (state.vischars[HERO_VISCHAR].iso_pos.y / 8) as u8,
        };
        let coords = &mut state.searchlight_coords;
        coords.x = step_towards(coords.x, hero_tile.x);
        coords.y = step_towards(coords.y, hero_tile.y);
        let disc = *coords;
        searchlight_plot(state, machine, disc);
        return;
    }

    for light in 0..state.searchlight.len() {
        move_searchlight(state, light);
        searchlight_caught(state, light);
        let disc = state.searchlight[light].xy;
        searchlight_plot(state, machine, disc);
    }
}

fn step_towards(from: u8, to: u8) -> u8 {
    match from.cmp(&to) {
        std::cmp::Ordering::Less => from + 1,
        std::cmp::Ordering::Greater => from - 1,
        std::cmp::Ordering::Equal => from,
    }
}

/// Advance one light along its movement script.
fn move_searchlight(state: &mut State, light: usize) {
    let sl = &mut state.searchlight[light];

    sl.counter = sl.counter.wrapping_sub(1);
    if sl.counter == 0 {
        // Pick the next (counter, direction) pair, bouncing off the
        // script's ends with the reverse flag.
        let script = SEARCHLIGHT_SCRIPTS[sl.script as usize];
        let reversed = sl.index & INDEX_REVERSE != 0;
        let mut step = (sl.index & !INDEX_REVERSE) as i32;
        step += if reversed { -1 } else { 1 };

        let overran = step < 0 || script[(step as usize) * 2] == 0xFF;
        if overran {
            // Bounce back into the script.
            let reversed = !reversed;
            step += if reversed { -1 } else { 1 };
            let step = step.max(0) as u8;
            sl.index = step | if reversed { INDEX_REVERSE } else { 0 };
        } else {
            sl.index = (step as u8) | if reversed { INDEX_REVERSE } else { 0 };
        }

        let step = (sl.index & !INDEX_REVERSE) as usize;
        sl.counter = script[step * 2];
        sl.direction = Direction::from_u8(script[step * 2 + 1]);
        return;
    }

    // Travelling: one across, two down per step. A reversed script
    // flips the direction's vertical sense.
    let mut direction = sl.direction as u8;
    if sl.index & INDEX_REVERSE != 0 {
        direction ^= 2;
    }
    let (dx, dy): (i16, i16) = match Direction::from_u8(direction) {
        Direction::TopLeft => (-1, -2),
        Direction::TopRight => (1, -2),
        Direction::BottomRight => (1, 2),
        Direction::BottomLeft => (-1, 2),
    };
    sl.xy.x = (i16::from(sl.xy.x) + dx).clamp(0, 255) as u8;
    sl.xy.y = (i16::from(sl.xy.y) + dy).clamp(0, 255) as u8;
}

/// Lock on if the hero stands inside the beam.
fn searchlight_caught(state: &mut State, light: usize) {
    let hero = &state.vischars[HERO_VISCHAR];
    if hero.room != ROOM_0_OUTDOORS {
        return;
    }
    let hero_x = (hero.iso_pos.x / 8) as i16;
    let hero_y = (hero.iso_pos.y / 8) as i16;
    let xy = state.searchlight[light].xy;
    if (hero_x - i16::from(xy.x)).abs() <= 2 && (hero_y - i16::from(xy.y)).abs() <= 2 {
        if state.searchlight_state == SEARCHLIGHT_STATE_CAUGHT {
            return;
        }
        state.searchlight_state = SEARCHLIGHT_STATE_CAUGHT;
        state.searchlight_coords = xy;
        state.bell = BELL_RING_PERPETUAL;
        state.decrease_morale(10);
        crate::driver::hostiles_pursue(state);
        log::debug!("searchlight caught the hero at ({}, {})", xy.x, xy.y);
    }
}

/// Paint the beam disc into the attribute file, clipped to the game
/// window: yellow ink where the disc bits are set, bright blue outside.
fn searchlight_plot(state: &State, machine: &mut dyn Machine, disc: Pos8) {
    let window_cols = GAME_WINDOW_SCREEN_COL as i16..(GAME_WINDOW_SCREEN_COL + COLUMNS) as i16;
    let window_rows =
        (GAME_WINDOW_SCREEN_ROW / 8) as i16..(GAME_WINDOW_SCREEN_ROW / 8 + ROWS) as i16;

    // One shape bit paints one attribute cell; the disc is centred on
    // the light's position.
    let base_col =
        i16::from(disc.x) - i16::from(state.map_position.x) + GAME_WINDOW_SCREEN_COL as i16 - 8;
    let base_row =
        i16::from(disc.y) - i16::from(state.map_position.y) + (GAME_WINDOW_SCREEN_ROW / 8) as i16
            - 8;

    let screen = machine.screen();
    for row in 0..16 {
        let bits = u16::from(SEARCHLIGHT_SHAPE[row * 2]) << 8
            | u16::from(SEARCHLIGHT_SHAPE[row * 2 + 1]);
        let cell_row = base_row + row as i16;
        if !window_rows.contains(&cell_row) {
            continue;
        }
        for bit in 0..16 {
            let cell_col = base_col + bit as i16;
            if !window_cols.contains(&cell_col) {
                continue;
            }
            let attr = if bits & (0x8000 >> bit) != 0 {
                ATTRIBUTE_YELLOW_OVER_BLACK
            } else {
                ATTRIBUTE_BRIGHT_BLUE_OVER_BLACK
            };
            screen.attributes[cell_row as usize * 32 + cell_col as usize] = attr;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spectrum::BufferMachine;

    #[test]
    fn test_script_bounce() {
        let mut state = State::new().unwrap();
        searchlight_reset(&mut state);

        // Run one light long enough to traverse its script both ways.
        for _ in 0..2000 {
            move_searchlight(&mut state, 0);
        }
        // Still within the script and counting.
        let sl = &state.searchlight[0];
        let script = SEARCHLIGHT_SCRIPTS[0];
        let step = (sl.index & !INDEX_REVERSE) as usize;
        assert!(script[step * 2] != 0xFF);
        assert!(sl.counter != 0);
    }

    #[test]
    fn test_caught_rings_bell_and_drops_morale() {
        let mut state = State::new().unwrap();
        searchlight_reset(&mut state);
        state.room_index = ROOM_0_OUTDOORS;
        state.vischars[HERO_VISCHAR].room = ROOM_0_OUTDOORS;

        // Put the hero dead centre of light 0.
        let xy = state.searchlight[0].xy;
        state.vischars[HERO_VISCHAR].iso_pos.x = u16::from(xy.x) * 8;
        state.vischars[HERO_VISCHAR].iso_pos.y = u16::from(xy.y) * 8;

        let morale = state.morale;
        searchlight_caught(&mut state, 0);
        assert_eq!(state.searchlight_state, SEARCHLIGHT_STATE_CAUGHT);
        assert_eq!(state.bell, BELL_RING_PERPETUAL);
        assert_eq!(state.morale, morale - 10);
        assert_eq!(state.searchlight_coords, xy);
    }

    #[test]
    fn test_caught_light_tracks_hero() {
        let mut state = State::new().unwrap();
        let mut machine = BufferMachine::new();
        searchlight_reset(&mut state);
        state.room_index = ROOM_0_OUTDOORS;
        state.vischars[HERO_VISCHAR].room = ROOM_0_OUTDOORS;
        state.searchlight_state = SEARCHLIGHT_STATE_CAUGHT;
        state.searchlight_coords = Pos8 { x: 50, y: 60 };
        state.vischars[HERO_VISCHAR].iso_pos.x = 60 * 8;
        state.vischars[HERO_VISCHAR].iso_pos.y = 60 * 8;

        nighttime(&mut state, &mut machine);
        assert_eq!(state.searchlight_coords, Pos8 { x: 51, y: 60 });
    }
}
