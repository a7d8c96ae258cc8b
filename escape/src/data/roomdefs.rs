/*************************************************************************

This file is part of a recreation of 'The Great Escape'
Game copyright (c) 1986 Ocean Software Ltd. and Denton Designs Ltd.

Rust port maintains original logic and behaviour.

**************************************************************************/

//! Interior room definitions.
//!
//! Each definition is a byte-encoded record: a room-dimensions index, a
//! list of interior collision boundaries, a list of mask references, and
//! a list of object placements. A handful of bytes (beds, benches, the
//! tunnel blockage) change during play; those reads and writes go through
//! the shadow table in [`crate::rooms`], never through this data.

// Interior object identifiers.

pub const OBJ_STRAIGHT_TUNNEL_SW_NE: u8 = 0;
pub const OBJ_SMALL_TUNNEL_ENTRANCE: u8 = 1;
pub const OBJ_ROOM_OUTLINE_22X12_A: u8 = 2;
pub const OBJ_STRAIGHT_TUNNEL_NW_SE: u8 = 3;
pub const OBJ_TUNNEL_T_JOIN_NW_SE: u8 = 4;
pub const OBJ_PRISONER_SAT_MID_TABLE: u8 = 5;
pub const OBJ_TUNNEL_T_JOIN_SW_NE: u8 = 6;
pub const OBJ_TUNNEL_CORNER_SW_SE: u8 = 7;
pub const OBJ_WIDE_WINDOW_FACING_SE: u8 = 8;
pub const OBJ_EMPTY_BED_FACING_SE: u8 = 9;
pub const OBJ_SHORT_WARDROBE_FACING_SW: u8 = 10;
pub const OBJ_CHEST_OF_DRAWERS_FACING_SW: u8 = 11;
pub const OBJ_TUNNEL_CORNER_NW_NE: u8 = 12;
pub const OBJ_EMPTY_BENCH: u8 = 13;
pub const OBJ_TUNNEL_CORNER_NE_SE: u8 = 14;
pub const OBJ_DOOR_FRAME_SE: u8 = 15;
pub const OBJ_DOOR_FRAME_SW: u8 = 16;
pub const OBJ_TUNNEL_CORNER_NW_SW: u8 = 17;
pub const OBJ_TUNNEL_ENTRANCE: u8 = 18;
pub const OBJ_PRISONER_SAT_END_TABLE: u8 = 19;
pub const OBJ_COLLAPSED_TUNNEL_SW_NE: u8 = 20;
pub const OBJ_UNUSED_21: u8 = 21;
pub const OBJ_CHAIR_FACING_SE: u8 = 22;
pub const OBJ_OCCUPIED_BED: u8 = 23;
pub const OBJ_ORNATE_WARDROBE_FACING_SW: u8 = 24;
pub const OBJ_CHAIR_FACING_SW: u8 = 25;
pub const OBJ_CUPBOARD_FACING_SE: u8 = 26;
pub const OBJ_ROOM_OUTLINE_18X10_A: u8 = 27;
pub const OBJ_UNUSED_28: u8 = 28;
pub const OBJ_TABLE: u8 = 29;
pub const OBJ_STOVE_PIPE: u8 = 30;
pub const OBJ_PAPERS_ON_FLOOR: u8 = 31;
pub const OBJ_TALL_WARDROBE_FACING_SW: u8 = 32;
pub const OBJ_SMALL_SHELF_FACING_SE: u8 = 33;
pub const OBJ_SMALL_CRATE: u8 = 34;
pub const OBJ_SMALL_WINDOW_WITH_BARS_FACING_SE: u8 = 35;
pub const OBJ_TINY_DOOR_FRAME_NE: u8 = 36;
pub const OBJ_NOTICEBOARD_FACING_SE: u8 = 37;
pub const OBJ_DOOR_FRAME_NW: u8 = 38;
pub const OBJ_UNUSED_39: u8 = 39;
pub const OBJ_DOOR_FRAME_NE: u8 = 40;
pub const OBJ_ROOM_OUTLINE_15X8: u8 = 41;
pub const OBJ_CUPBOARD_FACING_SW: u8 = 42;
pub const OBJ_MESS_BENCH: u8 = 43;
pub const OBJ_MESS_TABLE: u8 = 44;
pub const OBJ_MESS_BENCH_SHORT: u8 = 45;
pub const OBJ_ROOM_OUTLINE_18X10_B: u8 = 46;
pub const OBJ_ROOM_OUTLINE_22X12_B: u8 = 47;
pub const OBJ_TINY_TABLE: u8 = 48;
pub const OBJ_TINY_DRAWERS_FACING_SE: u8 = 49;
pub const OBJ_TALL_DRAWERS_FACING_SW: u8 = 50;
pub const OBJ_DESK_FACING_SW: u8 = 51;
pub const OBJ_SINK_FACING_SE: u8 = 52;
pub const OBJ_KEY_RACK_FACING_SE: u8 = 53;

const ROOMDEF_1_HUT1_RIGHT: &[u8] = &[
    0, // room dimensions index
    3, // number of boundaries
    54, 68, 23, 34, // boundary
    54, 68, 39, 50, // boundary
    54, 68, 55, 68, // boundary
    4, // number of mask bytes
    0, 1, 3, 10, // mask
    10, // nobjects
    OBJ_ROOM_OUTLINE_22X12_A, 1, 4,
    OBJ_WIDE_WINDOW_FACING_SE, 8, 0,
    OBJ_WIDE_WINDOW_FACING_SE, 2, 3,
    OBJ_OCCUPIED_BED, 10, 5,
    OBJ_OCCUPIED_BED, 6, 7,
    OBJ_DOOR_FRAME_SE, 15, 8,
    OBJ_ORNATE_WARDROBE_FACING_SW, 18, 5,
    OBJ_ORNATE_WARDROBE_FACING_SW, 20, 6,
    OBJ_EMPTY_BED_FACING_SE, 2, 9,
    OBJ_DOOR_FRAME_SW, 7, 10,
];

const ROOMDEF_2_HUT2_LEFT: &[u8] = &[
    1, // room dimensions index
    2, // number of boundaries
    48, 64, 43, 56, // bed boundary
    24, 38, 26, 40, // table boundary
    2, // number of mask bytes
    13, 8, // mask
    8, // nobjects
    OBJ_ROOM_OUTLINE_18X10_A, 3, 6,
    OBJ_WIDE_WINDOW_FACING_SE, 6, 2,
    OBJ_DOOR_FRAME_NE, 16, 5,
    OBJ_STOVE_PIPE, 4, 5,
    OBJ_OCCUPIED_BED, 8, 7, // Hero's bed.
    OBJ_DOOR_FRAME_SW, 7, 9,
    OBJ_TABLE, 11, 12,
    OBJ_SMALL_TUNNEL_ENTRANCE, 5, 9,
];

const ROOMDEF_3_HUT2_RIGHT: &[u8] = &[
    0, // room dimensions index
    3, // number of boundaries
    54, 68, 23, 34, // boundary
    54, 68, 39, 50, // boundary
    54, 68, 55, 68, // boundary
    4, // number of mask bytes
    0, 1, 3, 10, // mask
    10, // nobjects
    OBJ_ROOM_OUTLINE_22X12_A, 1, 4,
    OBJ_WIDE_WINDOW_FACING_SE, 8, 0,
    OBJ_WIDE_WINDOW_FACING_SE, 2, 3,
    OBJ_OCCUPIED_BED, 10, 5,
    OBJ_OCCUPIED_BED, 6, 7,
    OBJ_OCCUPIED_BED, 2, 9,
    OBJ_CHEST_OF_DRAWERS_FACING_SW, 16, 5,
    OBJ_DOOR_FRAME_SE, 15, 8,
    OBJ_SHORT_WARDROBE_FACING_SW, 18, 5,
    OBJ_DOOR_FRAME_SW, 7, 10,
];

const ROOMDEF_4_HUT3_LEFT: &[u8] = &[
    1, // room dimensions index
    2, // number of boundaries
    24, 40, 24, 42, // boundary
    48, 64, 43, 56, // boundary
    3, // number of mask bytes
    18, 20, 8, // mask
    9, // nobjects
    OBJ_ROOM_OUTLINE_18X10_A, 3, 6,
    OBJ_DOOR_FRAME_NE, 16, 5,
    OBJ_WIDE_WINDOW_FACING_SE, 6, 2,
    OBJ_STOVE_PIPE, 4, 5,
    OBJ_EMPTY_BED_FACING_SE, 8, 7,
    OBJ_DOOR_FRAME_SW, 7, 9,
    OBJ_CHAIR_FACING_SE, 11, 11,
    OBJ_CHAIR_FACING_SW, 13, 10,
    OBJ_PAPERS_ON_FLOOR, 14, 14,
];

const ROOMDEF_5_HUT3_RIGHT: &[u8] = &[
    0, // room dimensions index
    3, // number of boundaries
    54, 68, 23, 34, // boundary
    54, 68, 39, 50, // boundary
    54, 68, 55, 68, // boundary
    4, // number of mask bytes
    0, 1, 3, 10, // mask
    10, // nobjects
    OBJ_ROOM_OUTLINE_22X12_A, 1, 4,
    OBJ_WIDE_WINDOW_FACING_SE, 8, 0,
    OBJ_WIDE_WINDOW_FACING_SE, 2, 3,
    OBJ_OCCUPIED_BED, 10, 5,
    OBJ_OCCUPIED_BED, 6, 7,
    OBJ_OCCUPIED_BED, 2, 9,
    OBJ_DOOR_FRAME_SE, 15, 8,
    OBJ_CHEST_OF_DRAWERS_FACING_SW, 16, 5,
    OBJ_CHEST_OF_DRAWERS_FACING_SW, 20, 7,
    OBJ_DOOR_FRAME_SW, 7, 10,
];

const ROOMDEF_8_CORRIDOR: &[u8] = &[
    2, // room dimensions index
    0, // number of boundaries
    1, // number of mask bytes
    9, // mask
    5, // nobjects
    OBJ_ROOM_OUTLINE_18X10_B, 3, 6,
    OBJ_DOOR_FRAME_NW, 10, 3,
    OBJ_DOOR_FRAME_NW, 4, 6,
    OBJ_DOOR_FRAME_SW, 5, 10,
    OBJ_SHORT_WARDROBE_FACING_SW, 18, 6,
];

const ROOMDEF_9_CRATE: &[u8] = &[
    1, // room dimensions index
    1, // number of boundaries
    58, 64, 28, 42, // boundary
    2, // number of mask bytes
    4, 21, // mask
    10, // nobjects
    OBJ_ROOM_OUTLINE_18X10_A, 3, 6,
    OBJ_SMALL_WINDOW_WITH_BARS_FACING_SE, 6, 3,
    OBJ_SMALL_SHELF_FACING_SE, 9, 4,
    OBJ_TINY_DOOR_FRAME_NE, 12, 6,
    OBJ_DOOR_FRAME_SE, 13, 10,
    OBJ_TALL_WARDROBE_FACING_SW, 16, 6,
    OBJ_SHORT_WARDROBE_FACING_SW, 18, 8,
    OBJ_CUPBOARD_FACING_SE, 3, 6,
    OBJ_SMALL_CRATE, 6, 8,
    OBJ_SMALL_CRATE, 4, 9,
];

const ROOMDEF_10_LOCKPICK: &[u8] = &[
    4, // room dimensions index
    2, // number of boundaries
    69, 75, 32, 54, // boundary
    36, 47, 48, 60, // boundary
    3, // number of mask bytes
    6, 14, 22, // mask
    14, // nobjects
    OBJ_ROOM_OUTLINE_22X12_B, 1, 4,
    OBJ_DOOR_FRAME_SE, 15, 10,
    OBJ_SMALL_WINDOW_WITH_BARS_FACING_SE, 4, 1,
    OBJ_KEY_RACK_FACING_SE, 2, 3,
    OBJ_KEY_RACK_FACING_SE, 7, 2,
    OBJ_TALL_WARDROBE_FACING_SW, 10, 2,
    OBJ_CUPBOARD_FACING_SW, 13, 3,
    OBJ_CUPBOARD_FACING_SW, 15, 4,
    OBJ_CUPBOARD_FACING_SW, 17, 5,
    OBJ_TABLE, 14, 8,
    OBJ_CHEST_OF_DRAWERS_FACING_SW, 18, 8,
    OBJ_CHEST_OF_DRAWERS_FACING_SW, 20, 9,
    OBJ_SMALL_CRATE, 6, 5,
    OBJ_TABLE, 2, 6,
];

const ROOMDEF_11_PAPERS: &[u8] = &[
    4, // room dimensions index
    1, // number of boundaries
    27, 44, 36, 48, // boundary
    1, // number of mask bytes
    23, // mask
    9, // nobjects
    OBJ_ROOM_OUTLINE_22X12_B, 1, 4,
    OBJ_SMALL_SHELF_FACING_SE, 6, 3,
    OBJ_TALL_WARDROBE_FACING_SW, 12, 3,
    OBJ_TALL_DRAWERS_FACING_SW, 10, 3,
    OBJ_SHORT_WARDROBE_FACING_SW, 14, 5,
    OBJ_DOOR_FRAME_NW, 2, 2,
    OBJ_TALL_DRAWERS_FACING_SW, 18, 7,
    OBJ_TALL_DRAWERS_FACING_SW, 20, 8,
    OBJ_DESK_FACING_SW, 12, 10,
];

const ROOMDEF_12_CORRIDOR: &[u8] = &[
    1, // room dimensions index
    0, // number of boundaries
    2, // number of mask bytes
    4, 7, // mask
    4, // nobjects
    OBJ_ROOM_OUTLINE_18X10_A, 3, 6,
    OBJ_SMALL_WINDOW_WITH_BARS_FACING_SE, 6, 3,
    OBJ_DOOR_FRAME_SW, 9, 10,
    OBJ_DOOR_FRAME_SE, 13, 10,
];

const ROOMDEF_13_CORRIDOR: &[u8] = &[
    1, // room dimensions index
    0, // number of boundaries
    2, // number of mask bytes
    4, 8, // mask
    6, // nobjects
    OBJ_ROOM_OUTLINE_18X10_A, 3, 6,
    OBJ_DOOR_FRAME_NW, 6, 3,
    OBJ_DOOR_FRAME_SW, 7, 9,
    OBJ_DOOR_FRAME_SE, 13, 10,
    OBJ_TALL_DRAWERS_FACING_SW, 12, 5,
    OBJ_CHEST_OF_DRAWERS_FACING_SW, 14, 7,
];

const ROOMDEF_14_TORCH: &[u8] = &[
    0, // room dimensions index
    3, // number of boundaries
    54, 68, 22, 32, // boundary
    62, 68, 48, 58, // boundary
    54, 68, 54, 68, // boundary
    1, // number of mask bytes
    1, // mask
    9, // nobjects
    OBJ_ROOM_OUTLINE_22X12_A, 1, 4,
    OBJ_DOOR_FRAME_NW, 4, 3,
    OBJ_TINY_DRAWERS_FACING_SE, 8, 5,
    OBJ_EMPTY_BED_FACING_SE, 10, 5,
    OBJ_CHEST_OF_DRAWERS_FACING_SW, 16, 5,
    OBJ_SHORT_WARDROBE_FACING_SW, 18, 5,
    OBJ_DOOR_FRAME_NE, 20, 4,
    OBJ_SMALL_SHELF_FACING_SE, 2, 7,
    OBJ_EMPTY_BED_FACING_SE, 2, 9,
];

const ROOMDEF_15_UNIFORM: &[u8] = &[
    0, // room dimensions index
    4, // number of boundaries
    54, 68, 22, 32, // boundary
    54, 68, 54, 68, // boundary
    62, 68, 40, 58, // boundary
    30, 40, 56, 67, // boundary
    4, // number of mask bytes
    1, 5, 10, 15, // mask
    10, // nobjects
    OBJ_ROOM_OUTLINE_22X12_A, 1, 4,
    OBJ_SHORT_WARDROBE_FACING_SW, 16, 4,
    OBJ_EMPTY_BED_FACING_SE, 10, 5,
    OBJ_TINY_DRAWERS_FACING_SE, 8, 5,
    OBJ_TINY_DRAWERS_FACING_SE, 6, 6,
    OBJ_SMALL_SHELF_FACING_SE, 2, 7,
    OBJ_EMPTY_BED_FACING_SE, 2, 9,
    OBJ_DOOR_FRAME_SW, 7, 10,
    OBJ_DOOR_FRAME_SE, 13, 9,
    OBJ_TABLE, 18, 8,
];

const ROOMDEF_16_CORRIDOR: &[u8] = &[
    1, // room dimensions index
    0, // number of boundaries
    2, // number of mask bytes
    4, 7, // mask
    4, // nobjects
    OBJ_ROOM_OUTLINE_18X10_A, 3, 6,
    OBJ_DOOR_FRAME_NW, 4, 4,
    OBJ_DOOR_FRAME_SW, 9, 10,
    OBJ_DOOR_FRAME_SE, 13, 10,
];

const ROOMDEF_7_CORRIDOR: &[u8] = &[
    1, // room dimensions index
    0, // number of boundaries
    1, // number of mask bytes
    4, // mask
    4, // nobjects
    OBJ_ROOM_OUTLINE_18X10_A, 3, 6,
    OBJ_DOOR_FRAME_NW, 4, 4,
    OBJ_DOOR_FRAME_SE, 13, 10,
    OBJ_TALL_WARDROBE_FACING_SW, 12, 4,
];

const ROOMDEF_18_RADIO: &[u8] = &[
    4, // room dimensions index
    3, // number of boundaries
    38, 56, 48, 60, // boundary
    38, 46, 39, 60, // boundary
    22, 32, 48, 60, // boundary
    5, // number of mask bytes
    11, 17, 16, 24, 25, // mask
    10, // nobjects
    OBJ_ROOM_OUTLINE_22X12_B, 1, 4,
    OBJ_CUPBOARD_FACING_SE, 1, 4,
    OBJ_SMALL_WINDOW_WITH_BARS_FACING_SE, 4, 1,
    OBJ_SMALL_SHELF_FACING_SE, 7, 2,
    OBJ_DOOR_FRAME_NE, 10, 1,
    OBJ_TABLE, 12, 7,
    OBJ_MESS_BENCH_SHORT, 12, 9,
    OBJ_TABLE, 18, 10,
    OBJ_TINY_TABLE, 16, 12,
    OBJ_DOOR_FRAME_SW, 5, 7,
];

const ROOMDEF_19_FOOD: &[u8] = &[
    1, // room dimensions index
    1, // number of boundaries
    52, 64, 47, 56, // boundary
    1, // number of mask bytes
    7, // mask
    11, // nobjects
    OBJ_ROOM_OUTLINE_18X10_A, 3, 6,
    OBJ_SMALL_WINDOW_WITH_BARS_FACING_SE, 6, 3,
    OBJ_CUPBOARD_FACING_SE, 9, 3,
    OBJ_CUPBOARD_FACING_SW, 12, 3,
    OBJ_CUPBOARD_FACING_SW, 14, 4,
    OBJ_TABLE, 9, 6,
    OBJ_SMALL_SHELF_FACING_SE, 3, 5,
    OBJ_SINK_FACING_SE, 3, 7,
    OBJ_CHEST_OF_DRAWERS_FACING_SW, 14, 7,
    OBJ_DOOR_FRAME_NE, 16, 5,
    OBJ_DOOR_FRAME_SW, 9, 10,
];

const ROOMDEF_20_REDCROSS: &[u8] = &[
    1, // room dimensions index
    2, // number of boundaries
    58, 64, 26, 42, // boundary
    50, 64, 46, 54, // boundary
    2, // number of mask bytes
    21, 4, // mask
    11, // nobjects
    OBJ_ROOM_OUTLINE_18X10_A, 3, 6,
    OBJ_DOOR_FRAME_SE, 13, 10,
    OBJ_SMALL_SHELF_FACING_SE, 9, 4,
    OBJ_CUPBOARD_FACING_SE, 3, 6,
    OBJ_SMALL_CRATE, 6, 8,
    OBJ_SMALL_CRATE, 4, 9,
    OBJ_TABLE, 9, 6,
    OBJ_TALL_WARDROBE_FACING_SW, 14, 5,
    OBJ_TALL_WARDROBE_FACING_SW, 16, 6,
    OBJ_ORNATE_WARDROBE_FACING_SW, 18, 8,
    OBJ_TINY_TABLE, 11, 8,
];

const ROOMDEF_22_RED_KEY: &[u8] = &[
    3, // room dimensions index
    2, // number of boundaries
    54, 64, 46, 56, // boundary
    58, 64, 36, 44, // boundary
    2, // number of mask bytes
    12, 21, // mask
    7, // nobjects
    OBJ_ROOM_OUTLINE_15X8, 5, 6,
    OBJ_NOTICEBOARD_FACING_SE, 4, 4,
    OBJ_SMALL_SHELF_FACING_SE, 9, 4,
    OBJ_SMALL_CRATE, 6, 8,
    OBJ_DOOR_FRAME_SW, 9, 8,
    OBJ_TABLE, 9, 6,
    OBJ_DOOR_FRAME_NE, 14, 4,
];

const ROOMDEF_23_BREAKFAST: &[u8] = &[
    0, // room dimensions index
    1, // number of boundaries
    54, 68, 34, 68, // boundary
    2, // number of mask bytes
    10, 3, // mask
    12, // nobjects
    OBJ_ROOM_OUTLINE_22X12_A, 1, 4,
    OBJ_SMALL_WINDOW_WITH_BARS_FACING_SE, 8, 0,
    OBJ_SMALL_WINDOW_WITH_BARS_FACING_SE, 2, 3,
    OBJ_DOOR_FRAME_SW, 7, 10,
    OBJ_MESS_TABLE, 5, 4,
    OBJ_CUPBOARD_FACING_SW, 18, 4,
    OBJ_DOOR_FRAME_NE, 20, 4,
    OBJ_DOOR_FRAME_SE, 15, 8,
    OBJ_MESS_BENCH, 7, 6,
    OBJ_EMPTY_BENCH, 12, 5,
    OBJ_EMPTY_BENCH, 10, 6,
    OBJ_EMPTY_BENCH, 8, 7,
];

const ROOMDEF_24_SOLITARY: &[u8] = &[
    3, // room dimensions index
    1, // number of boundaries
    48, 54, 38, 46, // boundary
    1, // number of mask bytes
    26, // mask
    3, // nobjects
    OBJ_ROOM_OUTLINE_15X8, 5, 6,
    OBJ_DOOR_FRAME_NE, 14, 4,
    OBJ_TINY_TABLE, 10, 9,
];

const ROOMDEF_25_BREAKFAST: &[u8] = &[
    0, // room dimensions index
    1, // number of boundaries
    54, 68, 34, 68, // boundary
    0, // number of mask bytes
    11, // nobjects
    OBJ_ROOM_OUTLINE_22X12_A, 1, 4,
    OBJ_SMALL_WINDOW_WITH_BARS_FACING_SE, 8, 0,
    OBJ_CUPBOARD_FACING_SE, 5, 3,
    OBJ_SMALL_WINDOW_WITH_BARS_FACING_SE, 2, 3,
    OBJ_DOOR_FRAME_NE, 18, 3,
    OBJ_MESS_TABLE, 5, 4,
    OBJ_MESS_BENCH, 7, 6,
    OBJ_EMPTY_BENCH, 12, 5,
    OBJ_EMPTY_BENCH, 10, 6,
    OBJ_EMPTY_BENCH, 8, 7,
    OBJ_EMPTY_BENCH, 14, 4,
];

const ROOMDEF_28_HUT1_LEFT: &[u8] = &[
    1, // room dimensions index
    2, // number of boundaries
    28, 40, 28, 52, // boundary
    48, 63, 44, 56, // boundary
    3, // number of mask bytes
    8, 13, 19, // mask
    8, // nobjects
    OBJ_ROOM_OUTLINE_18X10_A, 3, 6,
    OBJ_WIDE_WINDOW_FACING_SE, 6, 2,
    OBJ_DOOR_FRAME_NE, 14, 4,
    OBJ_CUPBOARD_FACING_SE, 3, 6,
    OBJ_OCCUPIED_BED, 8, 7,
    OBJ_DOOR_FRAME_SW, 7, 9,
    OBJ_CHAIR_FACING_SW, 15, 10,
    OBJ_TABLE, 11, 12,
];

const ROOMDEF_29_SECOND_TUNNEL_START: &[u8] = &[
    5, // room dimensions index
    0, // number of boundaries
    6, // number of mask bytes
    30, 31, 32, 33, 34, 35, // mask
    6, // nobjects
    OBJ_STRAIGHT_TUNNEL_SW_NE, 20, 0,
    OBJ_STRAIGHT_TUNNEL_SW_NE, 16, 2,
    OBJ_STRAIGHT_TUNNEL_SW_NE, 12, 4,
    OBJ_STRAIGHT_TUNNEL_SW_NE, 8, 6,
    OBJ_STRAIGHT_TUNNEL_SW_NE, 4, 8,
    OBJ_STRAIGHT_TUNNEL_SW_NE, 0, 10,
];

const ROOMDEF_31: &[u8] = &[
    6, // room dimensions index
    0, // number of boundaries
    6, // number of mask bytes
    36, 37, 38, 39, 40, 41, // mask
    6, // nobjects
    OBJ_STRAIGHT_TUNNEL_NW_SE, 0, 0,
    OBJ_STRAIGHT_TUNNEL_NW_SE, 4, 2,
    OBJ_STRAIGHT_TUNNEL_NW_SE, 8, 4,
    OBJ_STRAIGHT_TUNNEL_NW_SE, 12, 6,
    OBJ_STRAIGHT_TUNNEL_NW_SE, 16, 8,
    OBJ_STRAIGHT_TUNNEL_NW_SE, 20, 10,
];

const ROOMDEF_36: &[u8] = &[
    7, // room dimensions index
    0, // number of boundaries
    6, // number of mask bytes
    31, 32, 33, 34, 35, 45, // mask
    5, // nobjects
    OBJ_STRAIGHT_TUNNEL_SW_NE, 20, 0,
    OBJ_STRAIGHT_TUNNEL_SW_NE, 16, 2,
    OBJ_STRAIGHT_TUNNEL_SW_NE, 12, 4,
    OBJ_STRAIGHT_TUNNEL_SW_NE, 8, 6,
    OBJ_TUNNEL_CORNER_NE_SE, 4, 8,
];

const ROOMDEF_32: &[u8] = &[
    8, // room dimensions index
    0, // number of boundaries
    6, // number of mask bytes
    36, 37, 38, 39, 40, 42, // mask
    5, // nobjects
    OBJ_STRAIGHT_TUNNEL_NW_SE, 0, 0,
    OBJ_STRAIGHT_TUNNEL_NW_SE, 4, 2,
    OBJ_STRAIGHT_TUNNEL_NW_SE, 8, 4,
    OBJ_STRAIGHT_TUNNEL_NW_SE, 12, 6,
    OBJ_TUNNEL_CORNER_NW_SW, 16, 8,
];

const ROOMDEF_34: &[u8] = &[
    6, // room dimensions index
    0, // number of boundaries
    6, // number of mask bytes
    36, 37, 38, 39, 40, 46, // mask
    6, // nobjects
    OBJ_STRAIGHT_TUNNEL_NW_SE, 0, 0,
    OBJ_STRAIGHT_TUNNEL_NW_SE, 4, 2,
    OBJ_STRAIGHT_TUNNEL_NW_SE, 8, 4,
    OBJ_STRAIGHT_TUNNEL_NW_SE, 12, 6,
    OBJ_STRAIGHT_TUNNEL_NW_SE, 16, 8,
    OBJ_TUNNEL_ENTRANCE, 20, 10,
];

const ROOMDEF_35: &[u8] = &[
    6, // room dimensions index
    0, // number of boundaries
    6, // number of mask bytes
    36, 37, 38, 39, 40, 41, // mask
    6, // nobjects
    OBJ_STRAIGHT_TUNNEL_NW_SE, 0, 0,
    OBJ_STRAIGHT_TUNNEL_NW_SE, 4, 2,
    OBJ_TUNNEL_T_JOIN_NW_SE, 8, 4,
    OBJ_STRAIGHT_TUNNEL_NW_SE, 12, 6,
    OBJ_STRAIGHT_TUNNEL_NW_SE, 16, 8,
    OBJ_STRAIGHT_TUNNEL_NW_SE, 20, 10,
];

const ROOMDEF_30: &[u8] = &[
    5, // room dimensions index
    0, // number of boundaries
    7, // number of mask bytes
    30, 31, 32, 33, 34, 35, 44, // mask
    6, // nobjects
    OBJ_STRAIGHT_TUNNEL_SW_NE, 20, 0,
    OBJ_STRAIGHT_TUNNEL_SW_NE, 16, 2,
    OBJ_STRAIGHT_TUNNEL_SW_NE, 12, 4,
    OBJ_TUNNEL_T_JOIN_SW_NE, 8, 6,
    OBJ_STRAIGHT_TUNNEL_SW_NE, 4, 8,
    OBJ_STRAIGHT_TUNNEL_SW_NE, 0, 10,
];

const ROOMDEF_40: &[u8] = &[
    9, // room dimensions index
    0, // number of boundaries
    6, // number of mask bytes
    30, 31, 32, 33, 34, 43, // mask
    6, // nobjects
    OBJ_TUNNEL_CORNER_SW_SE, 20, 0,
    OBJ_STRAIGHT_TUNNEL_SW_NE, 16, 2,
    OBJ_STRAIGHT_TUNNEL_SW_NE, 12, 4,
    OBJ_STRAIGHT_TUNNEL_SW_NE, 8, 6,
    OBJ_STRAIGHT_TUNNEL_SW_NE, 4, 8,
    OBJ_STRAIGHT_TUNNEL_SW_NE, 0, 10,
];

const ROOMDEF_44: &[u8] = &[
    8, // room dimensions index
    0, // number of boundaries
    5, // number of mask bytes
    36, 37, 38, 39, 40, // mask
    5, // nobjects
    OBJ_STRAIGHT_TUNNEL_NW_SE, 0, 0,
    OBJ_STRAIGHT_TUNNEL_NW_SE, 4, 2,
    OBJ_STRAIGHT_TUNNEL_NW_SE, 8, 4,
    OBJ_STRAIGHT_TUNNEL_NW_SE, 12, 6,
    OBJ_TUNNEL_CORNER_NW_NE, 16, 8,
];

const ROOMDEF_50_BLOCKED_TUNNEL: &[u8] = &[
    5, // room dimensions index
    1, // number of boundaries
    52, 58, 32, 54, // boundary
    6, // number of mask bytes
    30, 31, 32, 33, 34, 43, // mask
    6, // nobjects
    OBJ_TUNNEL_CORNER_SW_SE, 20, 0,
    OBJ_STRAIGHT_TUNNEL_SW_NE, 16, 2,
    OBJ_STRAIGHT_TUNNEL_SW_NE, 12, 4,
    OBJ_COLLAPSED_TUNNEL_SW_NE, 8, 6, // collapsed_tunnel_obj
    OBJ_STRAIGHT_TUNNEL_SW_NE, 4, 8,
    OBJ_STRAIGHT_TUNNEL_SW_NE, 0, 10,
];

/// Room definitions indexed by room number - 1 (room 0 is outdoors).
/// Unused room numbers alias a neighbouring definition, as the original
/// data did.
pub static ROOMS_AND_TUNNELS: [&[u8]; 52] = [
    // Rooms, starting with room 1.
    ROOMDEF_1_HUT1_RIGHT,
    ROOMDEF_2_HUT2_LEFT,
    ROOMDEF_3_HUT2_RIGHT,
    ROOMDEF_4_HUT3_LEFT,
    ROOMDEF_5_HUT3_RIGHT,
    ROOMDEF_8_CORRIDOR, // unused
    ROOMDEF_7_CORRIDOR,
    ROOMDEF_8_CORRIDOR,
    ROOMDEF_9_CRATE,
    ROOMDEF_10_LOCKPICK,
    ROOMDEF_11_PAPERS,
    ROOMDEF_12_CORRIDOR,
    ROOMDEF_13_CORRIDOR,
    ROOMDEF_14_TORCH,
    ROOMDEF_15_UNIFORM,
    ROOMDEF_16_CORRIDOR,
    ROOMDEF_7_CORRIDOR,
    ROOMDEF_18_RADIO,
    ROOMDEF_19_FOOD,
    ROOMDEF_20_REDCROSS,
    ROOMDEF_16_CORRIDOR,
    ROOMDEF_22_RED_KEY,
    ROOMDEF_23_BREAKFAST,
    ROOMDEF_24_SOLITARY,
    ROOMDEF_25_BREAKFAST,
    ROOMDEF_28_HUT1_LEFT, // unused
    ROOMDEF_28_HUT1_LEFT, // unused
    ROOMDEF_28_HUT1_LEFT,
    // Tunnels.
    ROOMDEF_29_SECOND_TUNNEL_START,
    ROOMDEF_30,
    ROOMDEF_31,
    ROOMDEF_32,
    ROOMDEF_29_SECOND_TUNNEL_START,
    ROOMDEF_34,
    ROOMDEF_35,
    ROOMDEF_36,
    ROOMDEF_34,
    ROOMDEF_35,
    ROOMDEF_32,
    ROOMDEF_40,
    ROOMDEF_30,
    ROOMDEF_32,
    ROOMDEF_29_SECOND_TUNNEL_START,
    ROOMDEF_44,
    ROOMDEF_36,
    ROOMDEF_36,
    ROOMDEF_32,
    ROOMDEF_34,
    ROOMDEF_36,
    ROOMDEF_50_BLOCKED_TUNNEL,
    ROOMDEF_32,
    ROOMDEF_40,
];

// Offsets of the definition bytes that are patched at runtime.

pub const ROOMDEF_2_BED: u8 = 14 + 4 * 3;

pub const ROOMDEF_3_BED_A: u8 = 20 + 3 * 3;
pub const ROOMDEF_3_BED_B: u8 = 20 + 4 * 3;
pub const ROOMDEF_3_BED_C: u8 = 20 + 5 * 3;

pub const ROOMDEF_5_BED_D: u8 = 20 + 3 * 3;
pub const ROOMDEF_5_BED_E: u8 = 20 + 4 * 3;
pub const ROOMDEF_5_BED_F: u8 = 20 + 5 * 3;

pub const ROOMDEF_23_BENCH_A: u8 = 10 + 9 * 3;
pub const ROOMDEF_23_BENCH_B: u8 = 10 + 10 * 3;
pub const ROOMDEF_23_BENCH_C: u8 = 10 + 11 * 3;

pub const ROOMDEF_25_BENCH_D: u8 = 8 + 7 * 3;
pub const ROOMDEF_25_BENCH_E: u8 = 8 + 8 * 3;
pub const ROOMDEF_25_BENCH_F: u8 = 8 + 9 * 3;
pub const ROOMDEF_25_BENCH_G: u8 = 8 + 10 * 3;

pub const ROOMDEF_50_BOUNDARY: u8 = 2;
pub const ROOMDEF_50_BLOCKAGE: u8 = 14 + 3 * 3;
