/*************************************************************************

This file is part of a recreation of 'The Great Escape'
Game copyright (c) 1986 Ocean Software Ltd. and Denton Designs Ltd.

Rust port maintains original logic and behaviour.

**************************************************************************/

//! The exterior map: supertile expansion and camera movement.
//!
//! The world is a 54x34 grid of supertile references; each supertile is a
//! 4x4 block of tiles and each tile an 8x8 glyph. After a camera move only
//! the strip that scrolled into view is replotted.

use crate::constants::*;
use crate::data::exterior_map::MAP;
use crate::data::supertiles::{SUPERTILES, SUPERTILE_BANK_2, SUPERTILE_BANK_3};
use crate::data::tiles::{EXTERIOR_TILES_1, EXTERIOR_TILES_2, EXTERIOR_TILES_3};
use crate::state::State;
use crate::types::Direction;

/// Width of the world in tiles.
pub const MAP_TILES_X: u16 = (MAPX * 4) as u16;

/// Height of the world in tiles.
pub const MAP_TILES_Y: u16 = (MAPY * 4) as u16;

/// Rightmost camera tile position.
pub const MAX_MAP_X: u8 = (MAP_TILES_X as usize - COLUMNS) as u8;

/// Bottom camera tile position.
pub const MAX_MAP_Y: u8 = (MAP_TILES_Y as usize - ROWS) as u8;

/// Supertile covering the world tile (tx, ty), read from the working
/// array when cached and the map otherwise.
fn supertile_at(state: &State, tx: u16, ty: u16) -> u8 {
    debug_assert!(tx < MAP_TILES_X && ty < MAP_TILES_Y);
    let sx = state.map_position.x as usize / 4;
    let sy = state.map_position.y as usize / 4;
    let cx = (tx as usize / 4).wrapping_sub(sx);
    let cy = (ty as usize / 4).wrapping_sub(sy);
    if cx < SUPERTILEREFS_COLUMNS && cy < SUPERTILEREFS_ROWS {
        state.map_buf[cy * SUPERTILEREFS_COLUMNS + cx]
    } else {
        MAP[(ty as usize / 4) * MAPX + tx as usize / 4]
    }
}

/// Glyph for the world tile at (tx, ty).
fn tile_glyph(state: &State, tx: u16, ty: u16) -> &'static [u8; 8] {
    let supertile = supertile_at(state, tx, ty);
    let tile = SUPERTILES[supertile as usize][(ty as usize % 4) * 4 + tx as usize % 4] as usize;
    if supertile < SUPERTILE_BANK_2 {
        &EXTERIOR_TILES_1[tile % EXTERIOR_TILES_1.len()]
    } else if supertile < SUPERTILE_BANK_3 {
        &EXTERIOR_TILES_2[tile % EXTERIOR_TILES_2.len()]
    } else {
        &EXTERIOR_TILES_3[tile % EXTERIOR_TILES_3.len()]
    }
}

/// Refresh the 7x5 working array of supertile refs under the window.
pub fn refresh_supertile_refs(state: &mut State) {
    let sx = state.map_position.x as usize / 4;
    let sy = state.map_position.y as usize / 4;
    for row in 0..SUPERTILEREFS_ROWS {
        for col in 0..SUPERTILEREFS_COLUMNS {
            let mx = (sx + col).min(MAPX - 1);
            let my = (sy + row).min(MAPY - 1);
            state.map_buf[row * SUPERTILEREFS_COLUMNS + col] = MAP[my * MAPX + mx];
        }
    }
}

/// Plot one tile column of the window buffer from the map.
pub fn plot_vertical_strip(state: &mut State, col: usize) {
    let tx = state.map_position.x as u16 + col as u16;
    for row in 0..ROWS {
        let ty = state.map_position.y as u16 + row as u16;
        let glyph = tile_glyph(state, tx, ty);
        for y in 0..8 {
            state.window_buf[(row * 8 + y) * WINDOW_STRIDE + col] = glyph[y];
        }
    }
}

/// Plot one tile row of the window buffer from the map.
pub fn plot_horizontal_strip(state: &mut State, row: usize) {
    let ty = state.map_position.y as u16 + row as u16;
    for col in 0..COLUMNS {
        let tx = state.map_position.x as u16 + col as u16;
        let glyph = tile_glyph(state, tx, ty);
        for y in 0..8 {
            state.window_buf[(row * 8 + y) * WINDOW_STRIDE + col] = glyph[y];
        }
    }
}

/// Full exterior plot: every window tile from the map.
pub fn plot_exterior_tiles(state: &mut State) {
    refresh_supertile_refs(state);
    for col in 0..COLUMNS {
        plot_vertical_strip(state, col);
    }
}

/// Shift the window buffer one tile column left or right.
fn shift_window_horizontal(state: &mut State, right: bool) {
    for row in 0..ROWS * 8 {
        let base = row * WINDOW_STRIDE;
        if right {
            state.window_buf.copy_within(base..base + COLUMNS - 1, base + 1);
        } else {
            state.window_buf.copy_within(base + 1..base + COLUMNS, base);
        }
    }
}

/// Shift the window buffer one tile row up or down.
fn shift_window_vertical(state: &mut State, down: bool) {
    let stride = WINDOW_STRIDE * 8;
    let total = ROWS * stride;
    if down {
        state.window_buf.copy_within(0..total - stride, stride);
    } else {
        state.window_buf.copy_within(stride..total, 0);
    }
}

/// Move the camera one step in the given map direction, if not clamped
/// against the map edge, replotting only the revealed strip.
///
/// The phase counter alternates the axis moved: y, x, y, then a rest.
pub fn move_map(state: &mut State, map_direction: u8) {
    debug_assert!(map_direction < 4);
    let direction = Direction::from_u8(map_direction);

    state.move_map_y = (state.move_map_y + 1) & 3;
    let (dx, dy): (i16, i16) = match direction {
        Direction::TopLeft => (-1, -1),
        Direction::TopRight => (1, -1),
        Direction::BottomRight => (1, 1),
        Direction::BottomLeft => (-1, 1),
    };

    match state.move_map_y {
        0 | 2 => {
            // Vertical step.
            let y = state.map_position.y as i16 + dy;
            if y < 0 || y > MAX_MAP_Y as i16 {
                return;
            }
            state.map_position.y = y as u8;
            shift_window_vertical(state, dy < 0);
            refresh_supertile_refs(state);
            plot_horizontal_strip(state, if dy < 0 { 0 } else { ROWS - 1 });
        }
        1 => {
            // Horizontal step.
            let x = state.map_position.x as i16 + dx;
            if x < 0 || x > MAX_MAP_X as i16 {
                return;
            }
            state.map_position.x = x as u8;
            shift_window_horizontal(state, dx < 0);
            refresh_supertile_refs(state);
            plot_vertical_strip(state, if dx < 0 { 0 } else { COLUMNS - 1 });
        }
        _ => {
            // Rest phase.
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outdoor_state() -> Box<State> {
        let mut state = State::new().unwrap();
        state.room_index = ROOM_0_OUTDOORS;
        state.map_position = crate::types::Pos8 { x: 100, y: 60 };
        state
    }

    #[test]
    fn test_full_plot_matches_strip_plot() {
        let mut state = outdoor_state();
        plot_exterior_tiles(&mut state);
        let full = state.window_buf;

        // Replotting a single strip changes nothing when nothing moved.
        plot_vertical_strip(&mut state, 5);
        plot_horizontal_strip(&mut state, 3);
        assert_eq!(&state.window_buf[..], &full[..]);
    }

    #[test]
    fn test_move_map_scrolls_strip() {
        let mut state = outdoor_state();
        plot_exterior_tiles(&mut state);

        // Phase starts at 0; the first call lands on phase 1 (horizontal).
        let before = state.map_position;
        move_map(&mut state, Direction::BottomRight as u8);
        assert_eq!(state.map_position.x, before.x + 1);

        // The buffer now equals a from-scratch plot at the new position.
        let shifted = state.window_buf;
        plot_exterior_tiles(&mut state);
        assert_eq!(&shifted[..], &state.window_buf[..]);
    }

    #[test]
    fn test_move_map_clamps_at_edge() {
        let mut state = outdoor_state();
        state.map_position.x = MAX_MAP_X;
        state.move_map_y = 0; // next call is a horizontal phase
        plot_exterior_tiles(&mut state);
        move_map(&mut state, Direction::BottomRight as u8);
        assert_eq!(state.map_position.x, MAX_MAP_X);
    }

    #[test]
    fn test_vertical_move_round_trip() {
        let mut state = outdoor_state();
        plot_exterior_tiles(&mut state);
        state.move_map_y = 3; // next call is a vertical phase
        move_map(&mut state, Direction::BottomRight as u8);
        let shifted = state.window_buf;
        plot_exterior_tiles(&mut state);
        assert_eq!(&shifted[..], &state.window_buf[..]);
    }
}
