/*************************************************************************

This file is part of a recreation of 'The Great Escape'
Game copyright (c) 1986 Ocean Software Ltd. and Denton Designs Ltd.

Rust port maintains original logic and behaviour.

**************************************************************************/

//! Game state container.
//!
//! Everything the simulation mutates lives in this one value; the static
//! data tables are shared by reference and never written. No part of the
//! game keeps state anywhere else.

use anyhow::Result;

use crate::constants::*;
use crate::messages::Messages;
use crate::random::Prng;
use crate::types::*;

/// Zoom-box transition state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ZoomBox {
    pub x: u8,
    pub y: u8,
    pub width: u8,
    pub height: u8,
}

/// The whole of the game's mutable state.
pub struct State {
    // Clock and flags.
    /// Main-loop ticks since the game started.
    pub ticker: u64,
    /// Day clock, wrapping at 140.
    pub gametime: u8,
    /// Next pending entry in the timed-event table.
    pub next_event_index: u8,
    pub day_or_night_is_night: bool,
    pub bell: u8,
    pub morale: u8,
    /// Displayed score, one decimal digit per byte.
    pub score: [u8; SCORE_DIGITS],
    /// Raised when the hero is someplace he shouldn't be.
    pub red_flag: bool,
    /// Nonzero while the player is actively steering the hero.
    pub automatic_player_counter: u8,
    pub in_solitary: bool,
    /// Morale hit zero: the hero no longer accepts player input.
    pub morale_exhausted: bool,
    pub hero_in_bed: bool,
    pub hero_in_breakfast: bool,
    /// Alternates the ringer bitmap while the bell rings.
    pub bell_ringer_frame: bool,
    /// Counts the morale flag wave phase.
    pub flag_wave_counter: u8,

    // World.
    /// Current room; 0 is outdoors.
    pub room_index: u8,
    /// Door used by the transition in progress.
    pub current_door: u8,
    /// Top-left of the visible map window, in supertile-ish units.
    pub map_position: Pos8,
    /// Sub-tile scroll phase applied when copying to the screen.
    pub game_window_offset: Pos8,
    /// Camera shift phase, 0..=3.
    pub move_map_y: u8,
    pub vischars: [Vischar; VISCHARS_LENGTH],
    pub character_structs: [CharacterStruct; CHARACTER_STRUCTS_LENGTH],
    pub item_structs: [ItemStruct; ITEM_STRUCTS_LENGTH],
    pub movable_items: [MovableItem; MOVABLE_ITEMS_LENGTH],
    /// Round-robin cursor for advancing one off-screen character a tick.
    pub character_index: u8,
    /// The two inventory slots; ITEM_NONE when empty.
    pub items_held: [u8; INVENTORY_LENGTH],
    /// Character bribed with ITEM_BRIBE, or CHARACTER_NONE.
    pub bribed_character: u8,
    /// Ticks left in an in-progress lock pick or wire cut.
    pub action_counter: u8,
    /// Locked-door slot the lock pick is working on.
    pub action_door_slot: u8,

    // Doors.
    pub interior_doors: [u8; INTERIOR_DOORS_LENGTH],
    pub locked_doors: [u8; LOCKED_DOORS_LENGTH],

    /// Shadow bytes overriding room definition data (beds, benches, the
    /// tunnel blockage). Survives across games.
    pub roomdef_shadow: [u8; ROOMDEF_SHADOW_LENGTH],

    // Decoded state of the current room definition.
    pub roomdef_dimensions_index: u8,
    pub roomdef_bounds_count: u8,
    pub roomdef_bounds: [Bounds; 4],
    pub interior_mask_refs_count: u8,
    pub interior_mask_refs: [u8; MAX_INTERIOR_MASK_REFS],

    // Messages.
    pub messages: Messages,

    pub prng: Prng,

    // Searchlight.
    pub searchlight: [SearchlightMovement; 3],
    pub searchlight_state: u8,
    /// Where the hero was caught; tracked while the state is CAUGHT.
    pub searchlight_coords: Pos8,

    // Render buffers.
    pub tile_buf: [u8; COLUMNS * ROWS],
    pub window_buf: [u8; WINDOW_BUF_LENGTH],
    pub mask_buffer: [u8; MASK_BUFFER_LENGTH],
    /// Supertile refs covering the visible window.
    pub map_buf: [u8; SUPERTILEREFS_COLUMNS * SUPERTILEREFS_ROWS],
    /// Animation scratch position, also the "stashed" position that door,
    /// item and mask proximity tests read.
    pub saved_pos: MapPos16,
    pub zoombox: ZoomBox,

    // Input.
    pub chosen_input_device: InputDevice,
    pub keydefs: KeyDefs,
}

impl State {
    /// A fresh state, boxed to keep the buffers off the caller's stack.
    pub fn new() -> Result<Box<State>> {
        let mut state = Box::new(State {
            ticker: 0,
            gametime: 0,
            next_event_index: 0,
            day_or_night_is_night: false,
            bell: BELL_STOP,
            morale: MORALE_MAX,
            score: [0; SCORE_DIGITS],
            red_flag: false,
            automatic_player_counter: 0,
            in_solitary: false,
            morale_exhausted: false,
            hero_in_bed: true,
            hero_in_breakfast: false,
            bell_ringer_frame: false,
            flag_wave_counter: 0,
            room_index: ROOM_2_HUT2LEFT,
            current_door: 0,
            map_position: Pos8 { x: 116, y: 74 },
            game_window_offset: Pos8 { x: 0, y: 0 },
            move_map_y: 0,
            vischars: [Vischar::default(); VISCHARS_LENGTH],
            character_structs: [CharacterStruct::default(); CHARACTER_STRUCTS_LENGTH],
            item_structs: [ItemStruct::default(); ITEM_STRUCTS_LENGTH],
            movable_items: [MovableItem::default(); MOVABLE_ITEMS_LENGTH],
            character_index: 0,
            items_held: [ITEM_NONE; INVENTORY_LENGTH],
            bribed_character: CHARACTER_NONE,
            action_counter: 0,
            action_door_slot: 0,
            interior_doors: [INTERIORDOOR_NONE; INTERIOR_DOORS_LENGTH],
            locked_doors: [0; LOCKED_DOORS_LENGTH],
            roomdef_shadow: [0; ROOMDEF_SHADOW_LENGTH],
            roomdef_dimensions_index: 0,
            roomdef_bounds_count: 0,
            roomdef_bounds: [Bounds::default(); 4],
            interior_mask_refs_count: 0,
            interior_mask_refs: [0; MAX_INTERIOR_MASK_REFS],
            messages: Messages::new(),
            prng: Prng::new(),
            searchlight: crate::data::searchlight::SEARCHLIGHT_INITIAL,
            searchlight_state: SEARCHLIGHT_STATE_SEARCHING,
            searchlight_coords: Pos8 { x: 0, y: 0 },
            tile_buf: [0; COLUMNS * ROWS],
            window_buf: [0; WINDOW_BUF_LENGTH],
            mask_buffer: [0xFF; MASK_BUFFER_LENGTH],
            map_buf: [0; SUPERTILEREFS_COLUMNS * SUPERTILEREFS_ROWS],
            saved_pos: MapPos16::default(),
            zoombox: ZoomBox::default(),
            chosen_input_device: InputDevice::Keyboard,
            keydefs: default_keydefs(),
        });
        crate::rooms::wipe_roomdef_shadow(&mut state);
        Ok(state)
    }

    #[inline]
    pub fn hero(&self) -> &Vischar {
        &self.vischars[HERO_VISCHAR]
    }

    #[inline]
    pub fn hero_mut(&mut self) -> &mut Vischar {
        &mut self.vischars[HERO_VISCHAR]
    }

    /// Add to the displayed score, digit by digit with decimal carry.
    pub fn add_score(&mut self, points: u16) {
        let mut remaining = points;
        let mut unit = 0;
        while remaining > 0 {
            let digit_add = (remaining % 10) as u8;
            remaining /= 10;
            let slot = SCORE_DIGITS - 1 - unit;
            let mut carry = digit_add;
            let mut i = slot;
            loop {
                let sum = self.score[i] + carry;
                self.score[i] = sum % 10;
                carry = sum / 10;
                if carry == 0 || i == 0 {
                    break;
                }
                i -= 1;
            }
            unit += 1;
            if unit >= SCORE_DIGITS {
                break;
            }
        }
    }

    pub fn increase_morale(&mut self, delta: u8) {
        self.morale = (self.morale + delta).min(MORALE_MAX);
    }

    pub fn decrease_morale(&mut self, delta: u8) {
        self.morale = self.morale.saturating_sub(delta);
    }

    /// True while the hero is meant to follow his assigned route rather
    /// than the player's inputs.
    pub fn hero_is_automatic(&self) -> bool {
        self.automatic_player_counter == 0 || self.morale_exhausted
    }
}

/// The shipped keyboard layout: QAOP + Space.
pub fn default_keydefs() -> KeyDefs {
    KeyDefs {
        defs: [
            KeyDef { port: 0xDF, mask: 0x02 }, // O - left
            KeyDef { port: 0xDF, mask: 0x01 }, // P - right
            KeyDef { port: 0xFB, mask: 0x01 }, // Q - up
            KeyDef { port: 0xFD, mask: 0x01 }, // A - down
            KeyDef { port: 0x7F, mask: 0x01 }, // Space - fire
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_carry() {
        let mut state = State::new().unwrap();
        state.add_score(5);
        assert_eq!(state.score, [0, 0, 0, 0, 5]);
        state.add_score(7);
        assert_eq!(state.score, [0, 0, 0, 1, 2]);
        state.add_score(990);
        assert_eq!(state.score, [0, 1, 0, 0, 2]);
    }

    #[test]
    fn test_morale_clamps() {
        let mut state = State::new().unwrap();
        state.increase_morale(50);
        assert_eq!(state.morale, MORALE_MAX);
        state.decrease_morale(200);
        assert_eq!(state.morale, MORALE_MIN);
    }

    #[test]
    fn test_new_state_defaults() {
        let state = State::new().unwrap();
        assert_eq!(state.room_index, ROOM_2_HUT2LEFT);
        assert!(state.hero_in_bed);
        assert_eq!(state.morale, MORALE_MAX);
        assert_eq!(state.items_held, [ITEM_NONE; 2]);
        assert_eq!(state.bell, BELL_STOP);
    }
}
