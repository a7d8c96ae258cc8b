/*************************************************************************

This file is part of a recreation of 'The Great Escape'
Game copyright (c) 1986 Ocean Software Ltd. and Denton Designs Ltd.

Rust port maintains original logic and behaviour.

**************************************************************************/

//! Interior object definitions.
//!
//! Each object is a width, a height and an RLE-compressed stream of tile
//! indices. Zero tiles are transparent: expansion leaves the destination
//! untouched. See [`crate::rooms::expand_object`] for the stream format.

/// One placeable interior object.
#[derive(Clone, Copy, Debug)]
pub struct InteriorObjectDef {
    pub width: u8,
    pub height: u8,
    pub data: &'static [u8],
}

const OBJECT_STRAIGHT_TUNNEL_SW_NE_DATA: &[u8] = &[
    0x00, 0x54, 0x55, 0x56, 0x53, 0x54, 0x55, 0x00, 0xFF, 0x45, 0x59, 0x5C, 0x57, 0x58, 0x5B, 0x5C,
    0x59, 0x5E, 0x57, 0x5C, 0x5D, 0x5E, 0x5D, 0x58, 0x57, 0x5A, 0x59, 0x5C, 0x5D, 0x5C, 0x00, 0xFF,
    0x46, 0x58, 0x00,
];

static OBJECT_STRAIGHT_TUNNEL_SW_NE: InteriorObjectDef = InteriorObjectDef { width: 8, height: 5, data: OBJECT_STRAIGHT_TUNNEL_SW_NE_DATA };

const OBJECT_SMALL_TUNNEL_ENTRANCE_DATA: &[u8] = &[
    0x79, 0x7A, 0x7B, 0x00, 0x7D, 0x7E, 0x81, 0x80, 0x7D, 0x82, 0x7F, 0x84, 0x7D, 0x7E, 0x7F, 0x7E,
    0x00, 0x7E, 0x7F, 0x80,
];

static OBJECT_SMALL_TUNNEL_ENTRANCE: InteriorObjectDef = InteriorObjectDef { width: 4, height: 5, data: OBJECT_SMALL_TUNNEL_ENTRANCE_DATA };

const OBJECT_ROOM_OUTLINE_22X12_A_DATA: &[u8] = &[
    0x29, 0xFF, 0x45, 0x1E, 0xFF, 0x46, 0x1D, 0xFF, 0x46, 0x1D, 0x1D, 0x1E, 0x1F, 0x2D, 0x2A, 0xFF,
    0x94, 0x00, 0x2E, 0x2B, 0xFF, 0x94, 0x00, 0x2F, 0x2C, 0xFF, 0x94, 0x00, 0x30, 0x29, 0xFF, 0x94,
    0x00, 0x2D, 0x2A, 0xFF, 0x94, 0x00, 0x2E, 0x2B, 0xFF, 0x94, 0x00, 0x2F, 0x2C, 0xFF, 0x94, 0x00,
    0x30, 0x29, 0xFF, 0x94, 0x00, 0x2D, 0x2A, 0xFF, 0x94, 0x00, 0x2E, 0x2B, 0xFF, 0x94, 0x00, 0x2F,
    0x2C, 0xFF, 0x45, 0x24, 0xFF, 0x46, 0x23, 0xFF, 0x46, 0x23, 0x23, 0x24, 0x25, 0x30,
];

static OBJECT_ROOM_OUTLINE_22X12_A: InteriorObjectDef = InteriorObjectDef { width: 22, height: 12, data: OBJECT_ROOM_OUTLINE_22X12_A_DATA };

const OBJECT_STRAIGHT_TUNNEL_NW_SE_DATA: &[u8] = &[
    0x00, 0x6E, 0x6F, 0x70, 0x6D, 0x6E, 0x6F, 0x00, 0x71, 0x72, 0x73, 0x76, 0x75, 0x76, 0x71, 0x72,
    0x71, 0x72, 0x77, 0x74, 0x75, 0x72, 0x73, 0x78, 0x77, 0x78, 0x73, 0x72, 0x75, 0x76, 0x77, 0x76,
    0x00, 0xFF, 0x47, 0x72,
];

static OBJECT_STRAIGHT_TUNNEL_NW_SE: InteriorObjectDef = InteriorObjectDef { width: 8, height: 5, data: OBJECT_STRAIGHT_TUNNEL_NW_SE_DATA };

const OBJECT_TUNNEL_T_JOIN_NW_SE_DATA: &[u8] = &[
    0x00, 0x14, 0x15, 0x16, 0xFF, 0x45, 0x13, 0x1A, 0x19, 0x1C, 0x1D, 0x1E, 0x1D, 0x18, 0x1B, 0x1C,
    0x19, 0x1E, 0xFF, 0x44, 0x17, 0x17, 0x1E, 0x17, 0x1A, 0x19, 0x1C, 0x1B, 0x1E, 0x00, 0xFF, 0x47,
    0x18,
];

static OBJECT_TUNNEL_T_JOIN_NW_SE: InteriorObjectDef = InteriorObjectDef { width: 8, height: 5, data: OBJECT_TUNNEL_T_JOIN_NW_SE_DATA };

const OBJECT_PRISONER_SAT_MID_TABLE_DATA: &[u8] = &[
    0x00, 0x2B, 0x2C, 0x00, 0x30, 0x31, 0x32, 0x31, 0x00, 0x33, 0x34, 0x31,
];

static OBJECT_PRISONER_SAT_MID_TABLE: InteriorObjectDef = InteriorObjectDef { width: 4, height: 3, data: OBJECT_PRISONER_SAT_MID_TABLE_DATA };

const OBJECT_TUNNEL_T_JOIN_SW_NE_DATA: &[u8] = &[
    0x00, 0x14, 0x15, 0x16, 0x13, 0x14, 0x15, 0x00, 0x17, 0x18, 0xFF, 0x44, 0x1B, 0x17, 0x18, 0x17,
    0x1C, 0x1D, 0x1A, 0xFF, 0x44, 0x17, 0x1D, 0x18, 0x17, 0x1A, 0x19, 0x1A, 0x1D, 0x1E, 0x00, 0xFF,
    0x46, 0x18, 0x00,
];

static OBJECT_TUNNEL_T_JOIN_SW_NE: InteriorObjectDef = InteriorObjectDef { width: 8, height: 5, data: OBJECT_TUNNEL_T_JOIN_SW_NE_DATA };

const OBJECT_TUNNEL_CORNER_SW_SE_DATA: &[u8] = &[
    0x00, 0x64, 0x65, 0x66, 0xFF, 0x45, 0x63, 0x6A, 0xFF, 0x46, 0x69, 0x6B, 0x68, 0x6D, 0x6A, 0x67,
    0x6C, 0x6D, 0x6A, 0xFF, 0x44, 0x67, 0xFF, 0x44, 0x69, 0x00, 0xFF, 0x46, 0x68, 0x00,
];

static OBJECT_TUNNEL_CORNER_SW_SE: InteriorObjectDef = InteriorObjectDef { width: 8, height: 5, data: OBJECT_TUNNEL_CORNER_SW_SE_DATA };

const OBJECT_WIDE_WINDOW_FACING_SE_DATA: &[u8] = &[
    0x00, 0x14, 0x15, 0x16, 0x13, 0x14, 0x19, 0x18, 0x1B, 0x1C, 0x1D, 0x1C, 0x1B, 0x1C, 0x19, 0x1E,
    0x17, 0x1C, 0x17, 0x18, 0x17, 0x18, 0x1B, 0x00,
];

static OBJECT_WIDE_WINDOW_FACING_SE: InteriorObjectDef = InteriorObjectDef { width: 6, height: 4, data: OBJECT_WIDE_WINDOW_FACING_SE_DATA };

const OBJECT_EMPTY_BED_FACING_SE_DATA: &[u8] = &[
    0x00, 0x25, 0x26, 0x27, 0x24, 0x00, 0x2A, 0x29, 0x2C, 0x2D, 0x2C, 0x2F, 0xFF, 0x44, 0x2C, 0x28,
    0x29, 0x28, 0x2F, 0x28, 0x2B, 0x2A, 0x2B, 0x00, 0xFF, 0x45, 0x29,
];

static OBJECT_EMPTY_BED_FACING_SE: InteriorObjectDef = InteriorObjectDef { width: 6, height: 5, data: OBJECT_EMPTY_BED_FACING_SE_DATA };

const OBJECT_SHORT_WARDROBE_FACING_SW_DATA: &[u8] = &[
    0x00, 0xFF, 0x44, 0x17, 0x1D, 0x1C, 0x1D, 0x1E, 0x1B, 0x20, 0x21, 0x20, 0x21, 0x1C, 0x1D, 0x00,
    0x1B, 0x1C, 0x00,
];

static OBJECT_SHORT_WARDROBE_FACING_SW: InteriorObjectDef = InteriorObjectDef { width: 4, height: 5, data: OBJECT_SHORT_WARDROBE_FACING_SW_DATA };

const OBJECT_CHEST_OF_DRAWERS_FACING_SW_DATA: &[u8] = &[
    0x19, 0x1A, 0x00, 0x1D, 0x1E, 0x1F, 0x1D, 0x22, 0x23, 0x00, 0x24, 0x1F,
];

static OBJECT_CHEST_OF_DRAWERS_FACING_SW: InteriorObjectDef = InteriorObjectDef { width: 3, height: 4, data: OBJECT_CHEST_OF_DRAWERS_FACING_SW_DATA };

const OBJECT_TUNNEL_CORNER_NW_NE_DATA: &[u8] = &[
    0x00, 0x79, 0x7A, 0x7B, 0xFF, 0x47, 0x78, 0x81, 0x82, 0x83, 0x82, 0x83, 0x7C, 0x7D, 0x82, 0x7F,
    0x7C, 0x81, 0x7E, 0x7F, 0x82, 0x7D, 0x7C, 0x7F, 0x7E, 0x81, 0x82, 0x83, 0x00, 0xFF, 0x47, 0x7D,
];

static OBJECT_TUNNEL_CORNER_NW_NE: InteriorObjectDef = InteriorObjectDef { width: 8, height: 5, data: OBJECT_TUNNEL_CORNER_NW_NE_DATA };

const OBJECT_EMPTY_BENCH_DATA: &[u8] = &[
    0xFF, 0x44, 0x29, 0x29, 0x2D, 0x30, 0x2F, 0x30, 0x33, 0x00, 0x2E, 0x33, 0x34, 0x00,
];

static OBJECT_EMPTY_BENCH: InteriorObjectDef = InteriorObjectDef { width: 5, height: 3, data: OBJECT_EMPTY_BENCH_DATA };

const OBJECT_TUNNEL_CORNER_NE_SE_DATA: &[u8] = &[
    0x00, 0x1A, 0x1B, 0x1C, 0x19, 0x1A, 0x1B, 0x00, 0x1F, 0x1E, 0x1F, 0x22, 0xFF, 0x44, 0x21, 0x1D,
    0x22, 0x1F, 0x20, 0x1D, 0x1E, 0x23, 0x24, 0xFF, 0x44, 0x1D, 0x1F, 0x22, 0x21, 0x22, 0xFF, 0x47,
    0x1D, 0x00,
];

static OBJECT_TUNNEL_CORNER_NE_SE: InteriorObjectDef = InteriorObjectDef { width: 8, height: 5, data: OBJECT_TUNNEL_CORNER_NE_SE_DATA };

const OBJECT_DOOR_FRAME_SE_DATA: &[u8] = &[
    0x00, 0x37, 0x38, 0x39, 0x00, 0x3A, 0x3B, 0x3C, 0x3F, 0x3E, 0x3A, 0x3F, 0x3C, 0x3D, 0x3E, 0x40,
    0x3B, 0x3A, 0x3D, 0x3E, 0xFF, 0x45, 0x3A, 0x3A, 0x3B, 0x3C, 0x3F, 0x3E, 0x3A, 0x3F, 0x3C, 0x41,
    0x00,
];

static OBJECT_DOOR_FRAME_SE: InteriorObjectDef = InteriorObjectDef { width: 5, height: 7, data: OBJECT_DOOR_FRAME_SE_DATA };

const OBJECT_DOOR_FRAME_SW_DATA: &[u8] = &[
    0xFF, 0x44, 0x7B, 0x00, 0x7F, 0xFF, 0x44, 0x82, 0x7F, 0x84, 0x81, 0x86, 0x7F, 0x85, 0x86, 0x81,
    0x80, 0x83, 0xFF, 0x45, 0x7F, 0x81, 0x82, 0x81, 0x82, 0x83, 0x00, 0x84, 0x81, 0x82, 0x7F,
];

static OBJECT_DOOR_FRAME_SW: InteriorObjectDef = InteriorObjectDef { width: 5, height: 7, data: OBJECT_DOOR_FRAME_SW_DATA };

const OBJECT_TUNNEL_CORNER_NW_SW_DATA: &[u8] = &[
    0x00, 0x42, 0x43, 0x44, 0xFF, 0x46, 0x41, 0x49, 0x48, 0x4B, 0x4A, 0x4B, 0x46, 0x45, 0x4A, 0x47,
    0x4C, 0x45, 0x46, 0x4B, 0x4C, 0x4B, 0x46, 0x45, 0x48, 0x49, 0x4A, 0x49, 0x4C, 0xFF, 0x48, 0x45,
];

static OBJECT_TUNNEL_CORNER_NW_SW: InteriorObjectDef = InteriorObjectDef { width: 8, height: 5, data: OBJECT_TUNNEL_CORNER_NW_SW_DATA };

const OBJECT_TUNNEL_ENTRANCE_DATA: &[u8] = &[
    0xFF, 0x44, 0x71, 0xFF, 0x44, 0x71, 0x77, 0x76, 0x77, 0x7A, 0x79, 0x7A, 0x75, 0x7C, 0x79, 0x7A,
    0x7B, 0x78, 0x75, 0x76, 0x7B, 0x7C, 0x7B, 0x76, 0x77, 0x76, 0x77, 0x7A, 0x7B, 0x7C, 0xFF, 0x48,
    0x75, 0x00, 0x78, 0x77, 0x7A, 0x7B, 0x7A, 0x75, 0x76,
];

static OBJECT_TUNNEL_ENTRANCE: InteriorObjectDef = InteriorObjectDef { width: 8, height: 6, data: OBJECT_TUNNEL_ENTRANCE_DATA };

const OBJECT_PRISONER_SAT_END_TABLE_DATA: &[u8] = &[
    0x00, 0xFF, 0x49, 0x6E, 0x73, 0x00,
];

static OBJECT_PRISONER_SAT_END_TABLE: InteriorObjectDef = InteriorObjectDef { width: 4, height: 3, data: OBJECT_PRISONER_SAT_END_TABLE_DATA };

const OBJECT_COLLAPSED_TUNNEL_SW_NE_DATA: &[u8] = &[
    0x00, 0x4C, 0x4D, 0x4E, 0xFF, 0x44, 0x4B, 0x51, 0x52, 0x51, 0x54, 0x53, 0x56, 0x55, 0x50, 0xFF,
    0x44, 0x53, 0x4F, 0x54, 0x51, 0x56, 0x55, 0x56, 0x51, 0x50, 0xFF, 0x44, 0x53, 0x00, 0xFF, 0x47,
    0x50,
];

static OBJECT_COLLAPSED_TUNNEL_SW_NE: InteriorObjectDef = InteriorObjectDef { width: 8, height: 5, data: OBJECT_COLLAPSED_TUNNEL_SW_NE_DATA };

const OBJECT_CHAIR_FACING_SE_DATA: &[u8] = &[
    0x00, 0x4F, 0x50, 0x54, 0x55, 0x54, 0x52, 0x57, 0x58, 0x00, 0x59, 0x54,
];

static OBJECT_CHAIR_FACING_SE: InteriorObjectDef = InteriorObjectDef { width: 3, height: 4, data: OBJECT_CHAIR_FACING_SE_DATA };

const OBJECT_OCCUPIED_BED_DATA: &[u8] = &[
    0xFF, 0x44, 0x5C, 0x5C, 0x00, 0x62, 0x63, 0x62, 0x65, 0x64, 0x65, 0x64, 0x65, 0x66, 0x63, 0x60,
    0x61, 0x66, 0x67, 0x60, 0x61, 0x64, 0x65, 0x00, 0xFF, 0x44, 0x61, 0x00,
];

static OBJECT_OCCUPIED_BED: InteriorObjectDef = InteriorObjectDef { width: 6, height: 5, data: OBJECT_OCCUPIED_BED_DATA };

const OBJECT_ORNATE_WARDROBE_FACING_SW_DATA: &[u8] = &[
    0x1C, 0x1D, 0x1E, 0x00, 0x20, 0x23, 0x24, 0xFF, 0x44, 0x23, 0x23, 0x20, 0x27, 0x20, 0x21, 0xFF,
    0x44, 0x20, 0x00, 0x23, 0x24, 0x25,
];

static OBJECT_ORNATE_WARDROBE_FACING_SW: InteriorObjectDef = InteriorObjectDef { width: 4, height: 6, data: OBJECT_ORNATE_WARDROBE_FACING_SW_DATA };

const OBJECT_CHAIR_FACING_SW_DATA: &[u8] = &[
    0x00, 0x74, 0x00, 0x77, 0x78, 0x79, 0x7B, 0x7C, 0x79, 0x77, 0x78, 0x00,
];

static OBJECT_CHAIR_FACING_SW: InteriorObjectDef = InteriorObjectDef { width: 3, height: 4, data: OBJECT_CHAIR_FACING_SW_DATA };

const OBJECT_CUPBOARD_FACING_SE_DATA: &[u8] = &[
    0x4F, 0x50, 0x51, 0x00, 0x53, 0x56, 0x55, 0x56, 0x57, 0x54, 0x59, 0x5A, 0x59, 0x54, 0x53, 0x54,
    0x53, 0x54, 0x55, 0x00,
];

static OBJECT_CUPBOARD_FACING_SE: InteriorObjectDef = InteriorObjectDef { width: 4, height: 5, data: OBJECT_CUPBOARD_FACING_SE_DATA };

const OBJECT_ROOM_OUTLINE_18X10_A_DATA: &[u8] = &[
    0x5A, 0xFF, 0x45, 0x4F, 0xFF, 0x46, 0x4E, 0xFF, 0x45, 0x4E, 0x5E, 0x5B, 0xFF, 0x90, 0x00, 0x5F,
    0x5C, 0xFF, 0x90, 0x00, 0x60, 0x5D, 0xFF, 0x90, 0x00, 0x61, 0x5A, 0xFF, 0x90, 0x00, 0x5E, 0x5B,
    0xFF, 0x90, 0x00, 0x5F, 0x5C, 0xFF, 0x90, 0x00, 0x60, 0x5D, 0xFF, 0x90, 0x00, 0x61, 0x5A, 0xFF,
    0x90, 0x00, 0x5E, 0x5B, 0xFF, 0x45, 0x55, 0xFF, 0x46, 0x54, 0xFF, 0x45, 0x54, 0x5F,
];

static OBJECT_ROOM_OUTLINE_18X10_A: InteriorObjectDef = InteriorObjectDef { width: 18, height: 10, data: OBJECT_ROOM_OUTLINE_18X10_A_DATA };

const OBJECT_TABLE_DATA: &[u8] = &[
    0x00, 0x30, 0x31, 0x32, 0x2F, 0x30, 0x35, 0x34, 0x35, 0x38, 0x37, 0x38, 0x33, 0x38, 0x39, 0x36,
    0x33, 0x34, 0x39, 0x3A, 0x35, 0x36, 0x35, 0x38,
];

static OBJECT_TABLE: InteriorObjectDef = InteriorObjectDef { width: 6, height: 4, data: OBJECT_TABLE_DATA };

const OBJECT_STOVE_PIPE_DATA: &[u8] = &[
    0x1B, 0x1C, 0x21, 0x22, 0x23, 0x20, 0x25, 0x26, 0x1F, 0x20, 0x00, 0x00,
];

static OBJECT_STOVE_PIPE: InteriorObjectDef = InteriorObjectDef { width: 2, height: 6, data: OBJECT_STOVE_PIPE_DATA };

const OBJECT_PAPERS_ON_FLOOR_DATA: &[u8] = &[
    0x00, 0x5F, 0x00, 0x00, 0x65, 0x66,
];

static OBJECT_PAPERS_ON_FLOOR: InteriorObjectDef = InteriorObjectDef { width: 3, height: 2, data: OBJECT_PAPERS_ON_FLOOR_DATA };

const OBJECT_TALL_WARDROBE_FACING_SW_DATA: &[u8] = &[
    0x4A, 0x4B, 0x00, 0x4E, 0x4F, 0x50, 0x4E, 0x53, 0x54, 0x4E, 0x4F, 0x4E, 0x4E, 0x4F, 0x50, 0x4E,
    0x51, 0x50, 0x52, 0x4F, 0x54,
];

static OBJECT_TALL_WARDROBE_FACING_SW: InteriorObjectDef = InteriorObjectDef { width: 3, height: 7, data: OBJECT_TALL_WARDROBE_FACING_SW_DATA };

const OBJECT_SMALL_SHELF_FACING_SE_DATA: &[u8] = &[
    0x7A, 0x7B, 0x7C, 0x00, 0x7F, 0x82,
];

static OBJECT_SMALL_SHELF_FACING_SE: InteriorObjectDef = InteriorObjectDef { width: 3, height: 2, data: OBJECT_SMALL_SHELF_FACING_SE_DATA };

const OBJECT_SMALL_CRATE_DATA: &[u8] = &[
    0x00, 0x34, 0x00, 0x39, 0x38, 0x39, 0x37, 0x3C, 0x00,
];

static OBJECT_SMALL_CRATE: InteriorObjectDef = InteriorObjectDef { width: 3, height: 3, data: OBJECT_SMALL_CRATE_DATA };

const OBJECT_SMALL_WINDOW_WITH_BARS_FACING_SE_DATA: &[u8] = &[
    0x7E, 0x7F, 0x00, 0x82, 0x83, 0x86, 0x00, 0x83, 0x00,
];

static OBJECT_SMALL_WINDOW_WITH_BARS_FACING_SE: InteriorObjectDef = InteriorObjectDef { width: 3, height: 3, data: OBJECT_SMALL_WINDOW_WITH_BARS_FACING_SE_DATA };

const OBJECT_TINY_DOOR_FRAME_NE_DATA: &[u8] = &[
    0x00, 0x4E, 0x53, 0x52, 0x00, 0x00,
];

static OBJECT_TINY_DOOR_FRAME_NE: InteriorObjectDef = InteriorObjectDef { width: 2, height: 3, data: OBJECT_TINY_DOOR_FRAME_NE_DATA };

const OBJECT_NOTICEBOARD_FACING_SE_DATA: &[u8] = &[
    0x00, 0xFF, 0x44, 0x10, 0x16, 0x15, 0x18, 0x00, 0x18, 0x15, 0x16,
];

static OBJECT_NOTICEBOARD_FACING_SE: InteriorObjectDef = InteriorObjectDef { width: 4, height: 3, data: OBJECT_NOTICEBOARD_FACING_SE_DATA };

const OBJECT_DOOR_FRAME_NW_DATA: &[u8] = &[
    0xFF, 0x44, 0x34, 0x00, 0x3A, 0x3B, 0x3C, 0x3B, 0x3C, 0xFF, 0x44, 0x3C, 0x38, 0x3E, 0x3F, 0x3A,
    0x3B, 0x3A, 0xFF, 0x45, 0x38, 0x38, 0x3B, 0x3A, 0x3D, 0x3E, 0x00, 0x3D, 0x3E, 0x3F, 0x38,
];

static OBJECT_DOOR_FRAME_NW: InteriorObjectDef = InteriorObjectDef { width: 5, height: 7, data: OBJECT_DOOR_FRAME_NW_DATA };

const OBJECT_DOOR_FRAME_NE_DATA: &[u8] = &[
    0x00, 0x31, 0x32, 0x33, 0x30, 0x36, 0xFF, 0x44, 0x35, 0x38, 0x39, 0x36, 0x37, 0x38, 0x34, 0x35,
    0x34, 0x35, 0x38, 0xFF, 0x45, 0x34, 0x36, 0x37, 0x38, 0x37, 0x3A, 0x34, 0x39, 0x3A, 0x3B, 0x00,
];

static OBJECT_DOOR_FRAME_NE: InteriorObjectDef = InteriorObjectDef { width: 5, height: 7, data: OBJECT_DOOR_FRAME_NE_DATA };

const OBJECT_ROOM_OUTLINE_15X8_DATA: &[u8] = &[
    0x3F, 0xFF, 0x45, 0x34, 0xFF, 0x46, 0x33, 0x33, 0x34, 0x43, 0x40, 0xFF, 0x8D, 0x00, 0x44, 0x41,
    0xFF, 0x8D, 0x00, 0x45, 0x42, 0xFF, 0x8D, 0x00, 0x46, 0x3F, 0xFF, 0x8D, 0x00, 0x43, 0x40, 0xFF,
    0x8D, 0x00, 0x44, 0x41, 0xFF, 0x8D, 0x00, 0x45, 0x42, 0xFF, 0x45, 0x3A, 0xFF, 0x46, 0x39, 0x39,
    0x3A, 0x46,
];

static OBJECT_ROOM_OUTLINE_15X8: InteriorObjectDef = InteriorObjectDef { width: 15, height: 8, data: OBJECT_ROOM_OUTLINE_15X8_DATA };

const OBJECT_CUPBOARD_FACING_SW_DATA: &[u8] = &[
    0x00, 0xFF, 0x48, 0x24, 0x28, 0x29, 0x2E, 0x2D, 0x2E, 0x27, 0x2A, 0xFF, 0x44, 0x27,
];

static OBJECT_CUPBOARD_FACING_SW: InteriorObjectDef = InteriorObjectDef { width: 4, height: 5, data: OBJECT_CUPBOARD_FACING_SW_DATA };

const OBJECT_MESS_BENCH_DATA: &[u8] = &[
    0x00, 0x6A, 0x6B, 0x6C, 0x69, 0x6F, 0x6E, 0x71, 0x70, 0x71, 0x00, 0x6E, 0x6F, 0x74, 0x00,
];

static OBJECT_MESS_BENCH: InteriorObjectDef = InteriorObjectDef { width: 5, height: 3, data: OBJECT_MESS_BENCH_DATA };

const OBJECT_MESS_TABLE_DATA: &[u8] = &[
    0xFF, 0x44, 0x0E, 0x0E, 0x0F, 0x10, 0x12, 0x15, 0x16, 0x17, 0x16, 0x19, 0x12, 0x16, 0x17, 0x14,
    0x19, 0x12, 0x17, 0x14, 0x00, 0x19, 0x14, 0x15, 0x14, 0x15, 0x18,
];

static OBJECT_MESS_TABLE: InteriorObjectDef = InteriorObjectDef { width: 7, height: 4, data: OBJECT_MESS_TABLE_DATA };

const OBJECT_MESS_BENCH_SHORT_DATA: &[u8] = &[
    0x00, 0xFF, 0x44, 0x34, 0x3A, 0x3B, 0x3A, 0x3B, 0x38, 0x39, 0x00,
];

static OBJECT_MESS_BENCH_SHORT: InteriorObjectDef = InteriorObjectDef { width: 4, height: 3, data: OBJECT_MESS_BENCH_SHORT_DATA };

const OBJECT_ROOM_OUTLINE_18X10_B_DATA: &[u8] = &[
    0x46, 0xFF, 0x45, 0x3B, 0xFF, 0x46, 0x3A, 0xFF, 0x45, 0x3A, 0x4A, 0x47, 0xFF, 0x90, 0x00, 0x4B,
    0x48, 0xFF, 0x90, 0x00, 0x4C, 0x49, 0xFF, 0x90, 0x00, 0x4D, 0x46, 0xFF, 0x90, 0x00, 0x4A, 0x47,
    0xFF, 0x90, 0x00, 0x4B, 0x48, 0xFF, 0x90, 0x00, 0x4C, 0x49, 0xFF, 0x90, 0x00, 0x4D, 0x46, 0xFF,
    0x90, 0x00, 0x4A, 0x47, 0xFF, 0x45, 0x41, 0xFF, 0x46, 0x40, 0xFF, 0x45, 0x40, 0x4B,
];

static OBJECT_ROOM_OUTLINE_18X10_B: InteriorObjectDef = InteriorObjectDef { width: 18, height: 10, data: OBJECT_ROOM_OUTLINE_18X10_B_DATA };

const OBJECT_ROOM_OUTLINE_22X12_B_DATA: &[u8] = &[
    0x86, 0xFF, 0x45, 0x7B, 0xFF, 0x46, 0x7A, 0xFF, 0x46, 0x7A, 0x7A, 0x7B, 0x7C, 0x8A, 0x87, 0xFF,
    0x94, 0x00, 0x8B, 0x88, 0xFF, 0x94, 0x00, 0x8C, 0x89, 0xFF, 0x94, 0x00, 0x8D, 0x86, 0xFF, 0x94,
    0x00, 0x8A, 0x87, 0xFF, 0x94, 0x00, 0x8B, 0x88, 0xFF, 0x94, 0x00, 0x8C, 0x89, 0xFF, 0x94, 0x00,
    0x8D, 0x86, 0xFF, 0x94, 0x00, 0x8A, 0x87, 0xFF, 0x94, 0x00, 0x8B, 0x88, 0xFF, 0x94, 0x00, 0x8C,
    0x89, 0xFF, 0x45, 0x81, 0xFF, 0x46, 0x80, 0xFF, 0x46, 0x80, 0x80, 0x81, 0x82, 0x8D,
];

static OBJECT_ROOM_OUTLINE_22X12_B: InteriorObjectDef = InteriorObjectDef { width: 22, height: 12, data: OBJECT_ROOM_OUTLINE_22X12_B_DATA };

const OBJECT_TINY_TABLE_DATA: &[u8] = &[
    0x00, 0x7F, 0x80, 0x82, 0x83, 0x84,
];

static OBJECT_TINY_TABLE: InteriorObjectDef = InteriorObjectDef { width: 3, height: 2, data: OBJECT_TINY_TABLE_DATA };

const OBJECT_TINY_DRAWERS_FACING_SE_DATA: &[u8] = &[
    0x3A, 0x00, 0x3E, 0x41, 0x00, 0x00,
];

static OBJECT_TINY_DRAWERS_FACING_SE: InteriorObjectDef = InteriorObjectDef { width: 2, height: 3, data: OBJECT_TINY_DRAWERS_FACING_SE_DATA };

const OBJECT_TALL_DRAWERS_FACING_SW_DATA: &[u8] = &[
    0x2D, 0x2E, 0x00, 0x33, 0x32, 0x33, 0x35, 0x36, 0x33, 0x37, 0x32, 0x33, 0x31, 0x32, 0x33, 0x00,
    0x32, 0x00,
];

static OBJECT_TALL_DRAWERS_FACING_SW: InteriorObjectDef = InteriorObjectDef { width: 3, height: 6, data: OBJECT_TALL_DRAWERS_FACING_SW_DATA };

const OBJECT_DESK_FACING_SW_DATA: &[u8] = &[
    0x00, 0x4F, 0x50, 0x51, 0x4E, 0x54, 0x55, 0x54, 0x57, 0x56, 0x52, 0x57, 0x54, 0x55, 0x52, 0x58,
    0x53, 0x52, 0x53, 0x00,
];

static OBJECT_DESK_FACING_SW: InteriorObjectDef = InteriorObjectDef { width: 5, height: 4, data: OBJECT_DESK_FACING_SW_DATA };

const OBJECT_SINK_FACING_SE_DATA: &[u8] = &[
    0x00, 0x5F, 0x00, 0x62, 0x65, 0x66, 0x66, 0x63, 0x64, 0x00, 0x69, 0x62,
];

static OBJECT_SINK_FACING_SE: InteriorObjectDef = InteriorObjectDef { width: 3, height: 4, data: OBJECT_SINK_FACING_SE_DATA };

const OBJECT_KEY_RACK_FACING_SE_DATA: &[u8] = &[
    0x00, 0x3C, 0x3D, 0x00, 0x3F, 0x42, 0x43, 0x44, 0x3F, 0x44, 0x45, 0x46,
];

static OBJECT_KEY_RACK_FACING_SE: InteriorObjectDef = InteriorObjectDef { width: 4, height: 3, data: OBJECT_KEY_RACK_FACING_SE_DATA };

pub static INTERIOR_OBJECT_DEFS: [&InteriorObjectDef; 54] = [
    &OBJECT_STRAIGHT_TUNNEL_SW_NE,
    &OBJECT_SMALL_TUNNEL_ENTRANCE,
    &OBJECT_ROOM_OUTLINE_22X12_A,
    &OBJECT_STRAIGHT_TUNNEL_NW_SE,
    &OBJECT_TUNNEL_T_JOIN_NW_SE,
    &OBJECT_PRISONER_SAT_MID_TABLE,
    &OBJECT_TUNNEL_T_JOIN_SW_NE,
    &OBJECT_TUNNEL_CORNER_SW_SE,
    &OBJECT_WIDE_WINDOW_FACING_SE,
    &OBJECT_EMPTY_BED_FACING_SE,
    &OBJECT_SHORT_WARDROBE_FACING_SW,
    &OBJECT_CHEST_OF_DRAWERS_FACING_SW,
    &OBJECT_TUNNEL_CORNER_NW_NE,
    &OBJECT_EMPTY_BENCH,
    &OBJECT_TUNNEL_CORNER_NE_SE,
    &OBJECT_DOOR_FRAME_SE,
    &OBJECT_DOOR_FRAME_SW,
    &OBJECT_TUNNEL_CORNER_NW_SW,
    &OBJECT_TUNNEL_ENTRANCE,
    &OBJECT_PRISONER_SAT_END_TABLE,
    &OBJECT_COLLAPSED_TUNNEL_SW_NE,
    &OBJECT_ROOM_OUTLINE_22X12_A,
    &OBJECT_CHAIR_FACING_SE,
    &OBJECT_OCCUPIED_BED,
    &OBJECT_ORNATE_WARDROBE_FACING_SW,
    &OBJECT_CHAIR_FACING_SW,
    &OBJECT_CUPBOARD_FACING_SE,
    &OBJECT_ROOM_OUTLINE_18X10_A,
    &OBJECT_TABLE,
    &OBJECT_TABLE,
    &OBJECT_STOVE_PIPE,
    &OBJECT_PAPERS_ON_FLOOR,
    &OBJECT_TALL_WARDROBE_FACING_SW,
    &OBJECT_SMALL_SHELF_FACING_SE,
    &OBJECT_SMALL_CRATE,
    &OBJECT_SMALL_WINDOW_WITH_BARS_FACING_SE,
    &OBJECT_TINY_DOOR_FRAME_NE,
    &OBJECT_NOTICEBOARD_FACING_SE,
    &OBJECT_DOOR_FRAME_NW,
    &OBJECT_DOOR_FRAME_NW,
    &OBJECT_DOOR_FRAME_NE,
    &OBJECT_ROOM_OUTLINE_15X8,
    &OBJECT_CUPBOARD_FACING_SW,
    &OBJECT_MESS_BENCH,
    &OBJECT_MESS_TABLE,
    &OBJECT_MESS_BENCH_SHORT,
    &OBJECT_ROOM_OUTLINE_18X10_B,
    &OBJECT_ROOM_OUTLINE_22X12_B,
    &OBJECT_TINY_TABLE,
    &OBJECT_TINY_DRAWERS_FACING_SE,
    &OBJECT_TALL_DRAWERS_FACING_SW,
    &OBJECT_DESK_FACING_SW,
    &OBJECT_SINK_FACING_SE,
    &OBJECT_KEY_RACK_FACING_SE,
];
