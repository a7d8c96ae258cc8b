/*************************************************************************

This file is part of a recreation of 'The Great Escape'
Game copyright (c) 1986 Ocean Software Ltd. and Denton Designs Ltd.

Rust port maintains original logic and behaviour.

**************************************************************************/

//! Constants module - limits, identifiers and magic numbers from the
//! original game.

// =============================================================================
// Limits
// =============================================================================

/// Byte limit of the message queue (9 two-byte entries + terminator).
pub const MESSAGE_QUEUE_LENGTH: usize = 19;

/// Limit of simultaneous visible characters.
pub const VISCHARS_LENGTH: usize = 8;

/// Available beds in the hero's hut.
pub const BEDS_LENGTH: usize = 6;

/// Persistent character records.
pub const CHARACTER_STRUCTS_LENGTH: usize = 26;

/// Item records.
pub const ITEM_STRUCTS_LENGTH: usize = 16;

/// Pushable stoves and crate.
pub const MOVABLE_ITEMS_LENGTH: usize = 3;

/// Entries in the locked door table.
pub const LOCKED_DOORS_LENGTH: usize = 9;

/// Live interior door slots, rebuilt on room entry.
pub const INTERIOR_DOORS_LENGTH: usize = 4;

/// Inventory slots shown on screen.
pub const INVENTORY_LENGTH: usize = 2;

/// Mask descriptors an interior room may reference.
pub const MAX_INTERIOR_MASK_REFS: usize = 7;

/// Shadow bytes overriding room definition data.
pub const ROOMDEF_SHADOW_LENGTH: usize = 16;

// =============================================================================
// Screen geometry
// =============================================================================

/// Width of the game window in tile columns.
pub const COLUMNS: usize = 24;

/// Height of the game window in tile rows.
pub const ROWS: usize = 17;

/// One row of the window buffer in bytes.
pub const WINDOW_STRIDE: usize = COLUMNS;

/// The private window buffer the game composes into.
pub const WINDOW_BUF_LENGTH: usize = COLUMNS * ROWS * 8;

/// Interior rooms plot into the top 16 rows of the tile buffer.
pub const INTERIOR_ROWS: usize = 16;

/// Width in bytes of one tile row of the mask buffer.
pub const MASK_BUFFER_WIDTHBYTES: usize = 4;

/// Height of the mask buffer in tiles.
pub const MASK_BUFFER_HEIGHT: usize = 5;

/// The mask buffer: 4 byte columns by 5 tiles of 8 rows.
pub const MASK_BUFFER_LENGTH: usize = MASK_BUFFER_WIDTHBYTES * MASK_BUFFER_HEIGHT * 8;

/// Supertile refs held for the visible window (columns).
pub const SUPERTILEREFS_COLUMNS: usize = 7;

/// Supertile refs held for the visible window (rows).
pub const SUPERTILEREFS_ROWS: usize = 5;

// Offsets from the start of the screen bank.
pub const SCORE_ADDRESS: usize = 0x1094;
pub const SCREEN_TEXT_START_ADDRESS: usize = 0x10E0;

// Offset from the start of the attributes bank.
pub const MORALE_FLAG_ATTRIBUTES_OFFSET: usize = 0x0042;

// =============================================================================
// Map
// =============================================================================

/// Dimensions of the exterior map in supertiles.
pub const MAPX: usize = 54;
pub const MAPY: usize = 34;

// Used by the permitted-area check to detect that the hero has left the
// map and escaped. These equate to (-136, 1088) in map coordinates.
pub const MAP_WIDTH: u8 = 217;
pub const MAP_HEIGHT: u8 = 137;

// Coordinate ranges of notable locations, in scaled-down map units.
pub const MAP_MAIN_GATE_U: (u8, u8) = (0x69, 0x6D);
pub const MAP_MAIN_GATE_V: (u8, u8) = (0x43, 0x47);
pub const MAP_ROLL_CALL_U: (u8, u8) = (0x72, 0x7C);
pub const MAP_ROLL_CALL_V: (u8, u8) = (0x6A, 0x72);

// The hero has escaped once his projected position crosses either edge.
pub const MAP_EDGE_X: u16 = 192;
pub const MAP_EDGE_Y: u16 = 1024;

// =============================================================================
// Characters
// =============================================================================

pub const CHARACTER_0_COMMANDANT: u8 = 0;
pub const CHARACTER_1_GUARD_1: u8 = 1;
pub const CHARACTER_2_GUARD_2: u8 = 2;
pub const CHARACTER_3_GUARD_3: u8 = 3;
pub const CHARACTER_4_GUARD_4: u8 = 4;
pub const CHARACTER_5_GUARD_5: u8 = 5;
pub const CHARACTER_6_GUARD_6: u8 = 6;
pub const CHARACTER_7_GUARD_7: u8 = 7;
pub const CHARACTER_8_GUARD_8: u8 = 8;
pub const CHARACTER_9_GUARD_9: u8 = 9;
pub const CHARACTER_10_GUARD_10: u8 = 10;
pub const CHARACTER_11_GUARD_11: u8 = 11;
pub const CHARACTER_12_GUARD_12: u8 = 12;
pub const CHARACTER_13_GUARD_13: u8 = 13;
pub const CHARACTER_14_GUARD_14: u8 = 14;
pub const CHARACTER_15_GUARD_15: u8 = 15;
pub const CHARACTER_16_GUARD_DOG_1: u8 = 16;
pub const CHARACTER_17_GUARD_DOG_2: u8 = 17;
pub const CHARACTER_18_GUARD_DOG_3: u8 = 18;
pub const CHARACTER_19_GUARD_DOG_4: u8 = 19;
pub const CHARACTER_20_PRISONER_1: u8 = 20;
pub const CHARACTER_21_PRISONER_2: u8 = 21;
pub const CHARACTER_22_PRISONER_3: u8 = 22;
pub const CHARACTER_23_PRISONER_4: u8 = 23;
pub const CHARACTER_24_PRISONER_5: u8 = 24;
pub const CHARACTER_25_PRISONER_6: u8 = 25;
pub const CHARACTER_26_STOVE_1: u8 = 26;
pub const CHARACTER_27_STOVE_2: u8 = 27;
pub const CHARACTER_28_CRATE: u8 = 28;
pub const CHARACTER_LIMIT: u8 = 29;
pub const CHARACTER_NONE: u8 = 255;

/// The hero's vischar is always slot 0.
pub const HERO_VISCHAR: usize = 0;

// =============================================================================
// Rooms
// =============================================================================

pub const ROOM_0_OUTDOORS: u8 = 0;
pub const ROOM_1_HUT1RIGHT: u8 = 1;
pub const ROOM_2_HUT2LEFT: u8 = 2;
pub const ROOM_3_HUT2RIGHT: u8 = 3;
pub const ROOM_4_HUT3LEFT: u8 = 4;
pub const ROOM_5_HUT3RIGHT: u8 = 5;
pub const ROOM_7_CORRIDOR: u8 = 7;
pub const ROOM_8_CORRIDOR: u8 = 8;
pub const ROOM_9_CRATE: u8 = 9;
pub const ROOM_10_LOCKPICK: u8 = 10;
pub const ROOM_11_PAPERS: u8 = 11;
pub const ROOM_12_CORRIDOR: u8 = 12;
pub const ROOM_13_CORRIDOR: u8 = 13;
pub const ROOM_14_TORCH: u8 = 14;
pub const ROOM_15_UNIFORM: u8 = 15;
pub const ROOM_16_CORRIDOR: u8 = 16;
pub const ROOM_17_CORRIDOR: u8 = 17;
pub const ROOM_18_RADIO: u8 = 18;
pub const ROOM_19_FOOD: u8 = 19;
pub const ROOM_20_REDCROSS: u8 = 20;
pub const ROOM_21_CORRIDOR: u8 = 21;
pub const ROOM_22_REDKEY: u8 = 22;
pub const ROOM_23_MESS_HALL: u8 = 23;
pub const ROOM_24_SOLITARY: u8 = 24;
pub const ROOM_25_MESS_HALL: u8 = 25;
pub const ROOM_28_HUT1LEFT: u8 = 28;
pub const ROOM_29_SECOND_TUNNEL_START: u8 = 29;
pub const ROOM_50_BLOCKED_TUNNEL: u8 = 50;
pub const ROOM_LIMIT: u8 = 53;
pub const ROOM_NONE: u8 = 255;

// =============================================================================
// Items
// =============================================================================

pub const ITEM_WIRESNIPS: u8 = 0;
pub const ITEM_SHOVEL: u8 = 1;
pub const ITEM_LOCKPICK: u8 = 2;
pub const ITEM_PAPERS: u8 = 3;
pub const ITEM_TORCH: u8 = 4;
pub const ITEM_BRIBE: u8 = 5;
pub const ITEM_UNIFORM: u8 = 6;
pub const ITEM_FOOD: u8 = 7;
pub const ITEM_POISON: u8 = 8;
pub const ITEM_RED_KEY: u8 = 9;
pub const ITEM_YELLOW_KEY: u8 = 10;
pub const ITEM_GREEN_KEY: u8 = 11;
pub const ITEM_RED_CROSS_PARCEL: u8 = 12;
pub const ITEM_RADIO: u8 = 13;
pub const ITEM_PURSE: u8 = 14;
pub const ITEM_COMPASS: u8 = 15;
pub const ITEM_LIMIT: u8 = 16;
pub const ITEM_NONE: u8 = 255;

// =============================================================================
// Morale / score
// =============================================================================

pub const MORALE_MIN: u8 = 0;
pub const MORALE_MAX: u8 = 112;

/// Score digit count (BCD display).
pub const SCORE_DIGITS: usize = 5;

// =============================================================================
// Timing
// =============================================================================

/// T-states slept per main-loop tick (the original's outdoor average).
pub const TICK_TSTATES: u32 = 367_731;

/// The day clock wraps at this value.
pub const GAMETIME_LIMIT: u8 = 140;

/// Timed events dispatch once per this many main-loop ticks.
pub const EVENT_INTERVAL: u64 = 64;

// =============================================================================
// Bell
// =============================================================================

pub const BELL_STOP: u8 = 0;
pub const BELL_RING_40_TIMES: u8 = 40;
pub const BELL_RING_PERPETUAL: u8 = 255;

// =============================================================================
// Sounds (high byte is iterations, low byte is delay)
// =============================================================================

pub const SOUND_CHARACTER_ENTERS_1: u16 = 0x2030;
pub const SOUND_CHARACTER_ENTERS_2: u16 = 0x2040;
pub const SOUND_BELL_RINGER: u16 = 0x2530;
pub const SOUND_PICK_UP_ITEM: u16 = 0x3030;
pub const SOUND_DROP_ITEM: u16 = 0x3040;
pub const SOUND_MENU_SELECT: u16 = 0x1020;

// =============================================================================
// Searchlight
// =============================================================================

/// Turns before the searchlight gives up when the hero hides.
pub const SEARCHLIGHT_STATE_CAUGHT: u8 = 0x1F;

/// The searchlight is sweeping, not tracking.
pub const SEARCHLIGHT_STATE_SEARCHING: u8 = 0xFF;
