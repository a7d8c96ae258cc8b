/*************************************************************************

This file is part of a recreation of 'The Great Escape'
Game copyright (c) 1986 Ocean Software Ltd. and Denton Designs Ltd.

Rust port maintains original logic and behaviour.

**************************************************************************/

//! Scenery mask shapes and the descriptor tables that reference them.
//!
//! A shape is a width, a height (both in tiles) and an RLE stream of
//! mask-tile indices. Mask tiles are ANDed into the mask buffer: 0 bits
//! hide, 1 bits show. Tile 0 is fully open.

use crate::types::{Bounds, MapPos8, Mask};

/// 8x8 mask glyphs. Tile 0 passes everything, tile 1 hides everything.
pub static MASK_TILES: [[u8; 8]; 56] = [
    [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00],
    [0xE0, 0xE0, 0xF8, 0xF0, 0xE0, 0xFC, 0xC0, 0xC0],
    [0xF0, 0xF0, 0xFE, 0xF8, 0xC0, 0xFE, 0xC0, 0xFC],
    [0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00],
    [0xF0, 0xF8, 0xE0, 0xFE, 0xE0, 0xF0, 0xC0, 0xFC],
    [0xFF, 0xFF, 0xFF, 0x00, 0xFF, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0xFF, 0x00, 0xFF, 0xFF, 0xFF],
    [0x00, 0x00, 0x00, 0xFF, 0x00, 0xFF, 0xFF, 0xFF],
    [0xF0, 0xC0, 0xFC, 0xF0, 0xFE, 0xFC, 0xE0, 0xFE],
    [0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
    [0x7F, 0x03, 0x03, 0x07, 0x7F, 0x1F, 0x03, 0x07],
    [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00],
    [0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
    [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00],
    [0xE0, 0xF0, 0xF0, 0xF8, 0xC0, 0xFC, 0xFC, 0xFE],
    [0x0F, 0x1F, 0x1F, 0x7F, 0x1F, 0x7F, 0x3F, 0x07],
    [0xFF, 0xFF, 0xFF, 0x00, 0x00, 0xFF, 0x00, 0x00],
    [0x1F, 0x7F, 0x7F, 0x1F, 0x3F, 0x3F, 0x1F, 0x0F],
    [0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF],
    [0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF],
    [0xFF, 0xFE, 0xFC, 0xF8, 0xF0, 0xE0, 0xC0, 0x80],
    [0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0xFF, 0x00, 0x00],
    [0x7F, 0x0F, 0x3F, 0x7F, 0x1F, 0x0F, 0x3F, 0x0F],
    [0x3F, 0x3F, 0x7F, 0x3F, 0x3F, 0x07, 0x1F, 0x1F],
    [0xFF, 0xFE, 0xFC, 0xF8, 0xF0, 0xE0, 0xC0, 0x80],
    [0xF0, 0xFE, 0xF8, 0xE0, 0xF0, 0xC0, 0xFE, 0xFC],
    [0x00, 0x00, 0xFF, 0xFF, 0x00, 0xFF, 0xFF, 0xFF],
    [0x3F, 0x03, 0x03, 0x3F, 0x07, 0x7F, 0x7F, 0x3F],
    [0xF8, 0xF8, 0xFC, 0xFE, 0xFE, 0xF8, 0xC0, 0xF0],
    [0x07, 0x0F, 0x1F, 0x1F, 0x1F, 0x7F, 0x3F, 0x7F],
    [0x0F, 0x07, 0x3F, 0x0F, 0x03, 0x7F, 0x07, 0x7F],
    [0xF0, 0xF8, 0xE0, 0xFE, 0xF0, 0xF8, 0xE0, 0xC0],
    [0xFF, 0xFE, 0xFC, 0xF8, 0xF0, 0xE0, 0xC0, 0x80],
    [0xC0, 0xC0, 0xE0, 0xFE, 0xE0, 0xFC, 0xFC, 0xC0],
    [0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0xFF, 0x00, 0x00],
    [0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00],
    [0xFF, 0xFE, 0xFC, 0xF8, 0xF0, 0xE0, 0xC0, 0x80],
    [0xFF, 0xFE, 0xFC, 0xF8, 0xF0, 0xE0, 0xC0, 0x80],
    [0xC0, 0xFC, 0xC0, 0xF8, 0xE0, 0xF0, 0xF8, 0xF8],
    [0xFF, 0xFE, 0xFC, 0xF8, 0xF0, 0xE0, 0xC0, 0x80],
    [0x3F, 0x03, 0x03, 0x03, 0x0F, 0x0F, 0x3F, 0x3F],
    [0x3F, 0x1F, 0x0F, 0x07, 0x07, 0x7F, 0x7F, 0x0F],
    [0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
    [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00],
    [0xFF, 0xFE, 0xFC, 0xF8, 0xF0, 0xE0, 0xC0, 0x80],
    [0x00, 0x00, 0xFF, 0x00, 0x00, 0xFF, 0xFF, 0xFF],
    [0xFF, 0xFE, 0xFC, 0xF8, 0xF0, 0xE0, 0xC0, 0x80],
    [0xFE, 0xC0, 0xC0, 0xFE, 0xC0, 0xF0, 0xC0, 0xE0],
    [0xFF, 0xFE, 0xFC, 0xF8, 0xF0, 0xE0, 0xC0, 0x80],
    [0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF],
    [0xE0, 0xE0, 0xF8, 0xF8, 0xFC, 0xF8, 0xF0, 0xF0],
    [0xFF, 0xFE, 0xFC, 0xF8, 0xF0, 0xE0, 0xC0, 0x80],
    [0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0xFF, 0x00, 0x00],
    [0xFF, 0xFE, 0xFC, 0xF8, 0xF0, 0xE0, 0xC0, 0x80],
];

const MASK_SHAPE_0: &[u8] = &[
    0x02, 0x02, 0x2A, 0x20, 0x18, 0x06,
];

const MASK_SHAPE_1: &[u8] = &[
    0x02, 0x01, 0x1B, 0x12,
];

const MASK_SHAPE_2: &[u8] = &[
    0x01, 0x01, 0x36,
];

const MASK_SHAPE_3: &[u8] = &[
    0x02, 0x04, 0x1B, 0x0F, 0x2C, 0x0B, 0x18, 0x08, 0x0B, 0x2C,
];

const MASK_SHAPE_4: &[u8] = &[
    0x03, 0x03, 0x04, 0x35, 0x2F, 0x22, 0x30, 0x1A, 0x2D, 0x03, 0x14,
];

const MASK_SHAPE_5: &[u8] = &[
    0x01, 0x01, 0x34,
];

const MASK_SHAPE_6: &[u8] = &[
    0x02, 0x03, 0x05, 0x1F, 0x2F, 0x18, 0x2F, 0x05,
];

const MASK_SHAPE_7: &[u8] = &[
    0x03, 0x05, 0x11, 0x0D, 0x2D, 0x29, 0x05, 0x2D, 0x0B, 0x01, 0x06, 0x07, 0x31, 0x04, 0x26, 0x2D,
    0x1B,
];

const MASK_SHAPE_8: &[u8] = &[
    0x01, 0x05, 0x1A, 0x02, 0x31, 0x1C, 0x1F,
];

const MASK_SHAPE_9: &[u8] = &[
    0x02, 0x03, 0x05, 0x2A, 0x0B, 0x02, 0x15, 0x02,
];

const MASK_SHAPE_10: &[u8] = &[
    0x01, 0x01, 0x23,
];

const MASK_SHAPE_11: &[u8] = &[
    0x04, 0x05, 0x32, 0x05, 0x11, 0x2D, 0x07, 0x01, 0x01, 0x26, 0x30, 0x01, 0x01, 0x32, 0x16, 0x2E,
    0x01, 0x09, 0x15, 0x02, 0x1E, 0x36,
];

const MASK_SHAPE_12: &[u8] = &[
    0x01, 0x04, 0x2E, 0x32, 0x21, 0x1C,
];

const MASK_SHAPE_13: &[u8] = &[
    0x02, 0x03, 0x36, 0x11, 0x34, 0x28, 0x12, 0x26,
];

const MASK_SHAPE_14: &[u8] = &[
    0x02, 0x05, 0x08, 0x0D, 0x10, 0x20, 0x27, 0x04, 0x03, 0x0C, 0x08, 0x1B,
];

const MASK_SHAPE_15: &[u8] = &[
    0x01, 0x04, 0x34, 0x28, 0x03, 0x28,
];

const MASK_SHAPE_16: &[u8] = &[
    0x03, 0x03, 0x0A, 0x08, 0x1C, 0x05, 0x01, 0x1F, 0x28, 0x19, 0x06,
];

const MASK_SHAPE_17: &[u8] = &[
    0x03, 0x04, 0x07, 0x2C, 0x02, 0x1A, 0x01, 0x21, 0x18, 0x01, 0x03, 0x23, 0x23, 0x13,
];

const MASK_SHAPE_18: &[u8] = &[
    0x03, 0x02, 0x1E, 0x15, 0x05, 0x2D, 0x0E, 0x33,
];

const MASK_SHAPE_19: &[u8] = &[
    0x01, 0x02, 0x2D, 0x0C,
];

const MASK_SHAPE_20: &[u8] = &[
    0x03, 0x01, 0x1A, 0x07, 0x19,
];

const MASK_SHAPE_21: &[u8] = &[
    0x01, 0x04, 0x27, 0x16, 0x29, 0x2B,
];

const MASK_SHAPE_22: &[u8] = &[
    0x04, 0x04, 0x2B, 0x0A, 0x15, 0x1D, 0x1D, 0x01, 0x09, 0x02, 0x2B, 0x01, 0x01, 0x25, 0x1B, 0x1A,
    0x14, 0x04,
];

const MASK_SHAPE_23: &[u8] = &[
    0x01, 0x02, 0x04, 0x05,
];

const MASK_SHAPE_24: &[u8] = &[
    0x03, 0x03, 0x02, 0x20, 0x09, 0x05, 0x12, 0x10, 0x18, 0x25, 0x2D,
];

const MASK_SHAPE_25: &[u8] = &[
    0x02, 0x05, 0x2C, 0x21, 0x09, 0x2E, 0x2A, 0x35, 0x14, 0x33, 0x2C, 0x03,
];

const MASK_SHAPE_26: &[u8] = &[
    0x04, 0x05, 0x1A, 0x27, 0x20, 0x07, 0x1D, 0x01, 0x01, 0x2F, 0x33, 0x01, 0x01, 0x26, 0x02, 0x01,
    0x01, 0x0C, 0x32, 0x37, 0x37, 0x0E,
];

const MASK_SHAPE_27: &[u8] = &[
    0x04, 0x01, 0x0E, 0x0E, 0x23, 0x0E,
];

const MASK_SHAPE_28: &[u8] = &[
    0x04, 0x05, 0x16, 0x12, 0x08, 0x02, 0x02, 0x01, 0x01, 0x08, 0x34, 0x27, 0x01, 0x14, 0x1D, 0x30,
    0x04, 0x2D, 0x10, 0x27, 0x14, 0x05,
];

const MASK_SHAPE_29: &[u8] = &[
    0x04, 0x02, 0x0B, 0x02, 0x37, 0x2C, 0x11, 0x0A, 0x02, 0x1E,
];

const MASK_SHAPE_30: &[u8] = &[
    0x04, 0x03, 0x1B, 0x25, 0x23, 0x1D, 0x31, 0x24, 0x25, 0x15, 0x12, 0x24, 0x13, 0x31,
];

const MASK_SHAPE_31: &[u8] = &[
    0x01, 0x04, 0x2E, 0x0E, 0x29, 0x28,
];

const MASK_SHAPE_32: &[u8] = &[
    0x04, 0x02, 0x1D, 0x1F, 0x35, 0x2B, 0x05, 0x17, 0x04, 0x26,
];

const MASK_SHAPE_33: &[u8] = &[
    0x02, 0x03, 0x0D, 0x2F, 0x13, 0x0D, 0x25, 0x2F,
];

const MASK_SHAPE_34: &[u8] = &[
    0x01, 0x04, 0x2C, 0x07, 0x2B, 0x33,
];

const MASK_SHAPE_35: &[u8] = &[
    0x01, 0x01, 0x03,
];

const MASK_SHAPE_36: &[u8] = &[
    0x03, 0x01, 0x06, 0x0E, 0x17,
];

const MASK_SHAPE_37: &[u8] = &[
    0x04, 0x05, 0x35, 0x18, 0x29, 0x06, 0x1D, 0x01, 0x01, 0x14, 0x1E, 0x24, 0x02, 0x17, 0x28, 0x01,
    0x01, 0x04, 0x18, 0x03, 0x20, 0x0F,
];

const MASK_SHAPE_38: &[u8] = &[
    0x01, 0x03, 0x10, 0x18, 0x15,
];

const MASK_SHAPE_39: &[u8] = &[
    0x02, 0x05, 0x30, 0x30, 0x02, 0x10, 0x16, 0x18, 0x05, 0x1C, 0x05, 0x21,
];

const MASK_SHAPE_40: &[u8] = &[
    0x03, 0x04, 0x08, 0x2C, 0x34, 0x2E, 0x01, 0x15, 0x29, 0x01, 0x20, 0x0A, 0x36, 0x36,
];

const MASK_SHAPE_41: &[u8] = &[
    0x03, 0x02, 0x2A, 0x36, 0x25, 0x2C, 0x2A, 0x09,
];

const MASK_SHAPE_42: &[u8] = &[
    0x02, 0x05, 0x11, 0x0E, 0x06, 0x04, 0x29, 0x1D, 0x31, 0x32, 0x16, 0x1F,
];

const MASK_SHAPE_43: &[u8] = &[
    0x01, 0x02, 0x04, 0x05,
];

const MASK_SHAPE_44: &[u8] = &[
    0x01, 0x03, 0x04, 0x0B, 0x05,
];

const MASK_SHAPE_45: &[u8] = &[
    0x01, 0x05, 0x1D, 0x2A, 0x25, 0x11, 0x33,
];

const MASK_SHAPE_46: &[u8] = &[
    0x01, 0x03, 0x24, 0x19, 0x19,
];

const MASK_SHAPE_47: &[u8] = &[
    0x03, 0x01, 0x31, 0x0E, 0x11,
];

const MASK_SHAPE_48: &[u8] = &[
    0x02, 0x04, 0x1E, 0x29, 0x32, 0x09, 0x30, 0x13, 0x11, 0x1E,
];

const MASK_SHAPE_49: &[u8] = &[
    0x03, 0x05, 0x15, 0x16, 0x10, 0x18, 0x01, 0x12, 0x0B, 0x1D, 0x0A, 0x1A, 0x01, 0x18, 0x2F, 0x27,
    0x2E,
];

const MASK_SHAPE_50: &[u8] = &[
    0x02, 0x01, 0x20, 0x37,
];

const MASK_SHAPE_51: &[u8] = &[
    0x02, 0x02, 0x17, 0x18, 0x31, 0x0A,
];

const MASK_SHAPE_52: &[u8] = &[
    0x04, 0x01, 0x0E, 0x1B, 0x18, 0x11,
];

const MASK_SHAPE_53: &[u8] = &[
    0x04, 0x05, 0x18, 0x1A, 0x10, 0x22, 0x1C, 0x29, 0x01, 0x31, 0x1E, 0x01, 0x01, 0x0F, 0x30, 0x13,
    0x01, 0x24, 0x27, 0x18, 0x34, 0x1D,
];

const MASK_SHAPE_54: &[u8] = &[
    0x02, 0x02, 0x05, 0x2A, 0x1D, 0x0B,
];

const MASK_SHAPE_55: &[u8] = &[
    0x04, 0x04, 0x1D, 0x29, 0x17, 0x09, 0x17, 0x01, 0x01, 0x30, 0x34, 0x01, 0x01, 0x06, 0x28, 0x36,
    0x23, 0x33,
];

const MASK_SHAPE_56: &[u8] = &[
    0x04, 0x05, 0x2A, 0x0B, 0x19, 0x08, 0x17, 0x01, 0x09, 0x1A, 0x10, 0x10, 0x01, 0x26, 0x18, 0x06,
    0x01, 0x13, 0x27, 0x0E, 0x03, 0x1C,
];

const MASK_SHAPE_57: &[u8] = &[
    0x02, 0x04, 0x0A, 0x2B, 0x28, 0x09, 0x22, 0x0C, 0x15, 0x23,
];

const MASK_SHAPE_58: &[u8] = &[
    0x03, 0x02, 0x09, 0x24, 0x1B, 0x33, 0x03, 0x37,
];

const MASK_SHAPE_59: &[u8] = &[
    0x03, 0x04, 0x0E, 0x15, 0x03, 0x20, 0x19, 0x2C, 0x23, 0x01, 0x2D, 0x1A, 0x1E, 0x28,
];

/// Shape streams; byte 0 is the width in tiles, byte 1 the height.
pub static MASK_SHAPES: [&[u8]; 60] = [
    MASK_SHAPE_0,
    MASK_SHAPE_1,
    MASK_SHAPE_2,
    MASK_SHAPE_3,
    MASK_SHAPE_4,
    MASK_SHAPE_5,
    MASK_SHAPE_6,
    MASK_SHAPE_7,
    MASK_SHAPE_8,
    MASK_SHAPE_9,
    MASK_SHAPE_10,
    MASK_SHAPE_11,
    MASK_SHAPE_12,
    MASK_SHAPE_13,
    MASK_SHAPE_14,
    MASK_SHAPE_15,
    MASK_SHAPE_16,
    MASK_SHAPE_17,
    MASK_SHAPE_18,
    MASK_SHAPE_19,
    MASK_SHAPE_20,
    MASK_SHAPE_21,
    MASK_SHAPE_22,
    MASK_SHAPE_23,
    MASK_SHAPE_24,
    MASK_SHAPE_25,
    MASK_SHAPE_26,
    MASK_SHAPE_27,
    MASK_SHAPE_28,
    MASK_SHAPE_29,
    MASK_SHAPE_30,
    MASK_SHAPE_31,
    MASK_SHAPE_32,
    MASK_SHAPE_33,
    MASK_SHAPE_34,
    MASK_SHAPE_35,
    MASK_SHAPE_36,
    MASK_SHAPE_37,
    MASK_SHAPE_38,
    MASK_SHAPE_39,
    MASK_SHAPE_40,
    MASK_SHAPE_41,
    MASK_SHAPE_42,
    MASK_SHAPE_43,
    MASK_SHAPE_44,
    MASK_SHAPE_45,
    MASK_SHAPE_46,
    MASK_SHAPE_47,
    MASK_SHAPE_48,
    MASK_SHAPE_49,
    MASK_SHAPE_50,
    MASK_SHAPE_51,
    MASK_SHAPE_52,
    MASK_SHAPE_53,
    MASK_SHAPE_54,
    MASK_SHAPE_55,
    MASK_SHAPE_56,
    MASK_SHAPE_57,
    MASK_SHAPE_58,
    MASK_SHAPE_59,
];

/// Interior mask descriptors, referenced by index from room definitions.
pub static INTERIOR_MASKS: [Mask; 47] = [
    Mask { index: 53, bounds: Bounds::new(112, 141, 6, 23), pos: MapPos8::new(83, 41, 15) },
    Mask { index: 16, bounds: Bounds::new(82, 94, 56, 84), pos: MapPos8::new(92, 70, 2) },
    Mask { index: 40, bounds: Bounds::new(73, 111, 79, 101), pos: MapPos8::new(62, 78, 15) },
    Mask { index: 7, bounds: Bounds::new(34, 63, 67, 79), pos: MapPos8::new(31, 82, 6) },
    Mask { index: 45, bounds: Bounds::new(40, 50, 22, 47), pos: MapPos8::new(34, 52, 4) },
    Mask { index: 24, bounds: Bounds::new(141, 166, 62, 72), pos: MapPos8::new(58, 35, 0) },
    Mask { index: 23, bounds: Bounds::new(188, 209, 108, 143), pos: MapPos8::new(33, 94, 2) },
    Mask { index: 34, bounds: Bounds::new(182, 216, 102, 117), pos: MapPos8::new(48, 29, 9) },
    Mask { index: 50, bounds: Bounds::new(84, 122, 57, 100), pos: MapPos8::new(95, 33, 15) },
    Mask { index: 16, bounds: Bounds::new(40, 54, 40, 68), pos: MapPos8::new(74, 36, 0) },
    Mask { index: 2, bounds: Bounds::new(65, 101, 60, 81), pos: MapPos8::new(86, 78, 12) },
    Mask { index: 21, bounds: Bounds::new(10, 37, 34, 75), pos: MapPos8::new(48, 35, 12) },
    Mask { index: 17, bounds: Bounds::new(97, 132, 84, 123), pos: MapPos8::new(52, 33, 9) },
    Mask { index: 6, bounds: Bounds::new(70, 105, 37, 49), pos: MapPos8::new(73, 44, 14) },
    Mask { index: 48, bounds: Bounds::new(114, 132, 37, 77), pos: MapPos8::new(23, 44, 2) },
    Mask { index: 38, bounds: Bounds::new(152, 187, 117, 148), pos: MapPos8::new(57, 42, 4) },
    Mask { index: 47, bounds: Bounds::new(134, 144, 96, 116), pos: MapPos8::new(33, 87, 13) },
    Mask { index: 24, bounds: Bounds::new(168, 200, 91, 105), pos: MapPos8::new(59, 28, 10) },
    Mask { index: 26, bounds: Bounds::new(183, 214, 79, 93), pos: MapPos8::new(97, 72, 2) },
    Mask { index: 43, bounds: Bounds::new(167, 194, 90, 117), pos: MapPos8::new(33, 72, 9) },
    Mask { index: 45, bounds: Bounds::new(107, 124, 1, 33), pos: MapPos8::new(55, 56, 15) },
    Mask { index: 37, bounds: Bounds::new(162, 185, 80, 124), pos: MapPos8::new(97, 78, 12) },
    Mask { index: 49, bounds: Bounds::new(156, 166, 46, 60), pos: MapPos8::new(22, 41, 1) },
    Mask { index: 55, bounds: Bounds::new(39, 76, 9, 46), pos: MapPos8::new(50, 34, 14) },
    Mask { index: 45, bounds: Bounds::new(96, 122, 93, 122), pos: MapPos8::new(52, 91, 7) },
    Mask { index: 22, bounds: Bounds::new(191, 211, 116, 160), pos: MapPos8::new(24, 56, 12) },
    Mask { index: 51, bounds: Bounds::new(122, 160, 104, 150), pos: MapPos8::new(84, 88, 6) },
    Mask { index: 51, bounds: Bounds::new(156, 170, 105, 140), pos: MapPos8::new(93, 29, 1) },
    Mask { index: 4, bounds: Bounds::new(36, 66, 40, 74), pos: MapPos8::new(67, 36, 4) },
    Mask { index: 2, bounds: Bounds::new(101, 124, 37, 45), pos: MapPos8::new(54, 35, 2) },
    Mask { index: 9, bounds: Bounds::new(133, 151, 90, 113), pos: MapPos8::new(34, 82, 11) },
    Mask { index: 54, bounds: Bounds::new(37, 70, 69, 85), pos: MapPos8::new(83, 42, 6) },
    Mask { index: 8, bounds: Bounds::new(29, 57, 103, 134), pos: MapPos8::new(91, 84, 6) },
    Mask { index: 32, bounds: Bounds::new(74, 107, 4, 51), pos: MapPos8::new(50, 93, 5) },
    Mask { index: 43, bounds: Bounds::new(51, 88, 63, 97), pos: MapPos8::new(66, 76, 4) },
    Mask { index: 1, bounds: Bounds::new(34, 70, 24, 68), pos: MapPos8::new(24, 22, 1) },
    Mask { index: 30, bounds: Bounds::new(147, 173, 78, 124), pos: MapPos8::new(71, 53, 14) },
    Mask { index: 36, bounds: Bounds::new(175, 192, 28, 69), pos: MapPos8::new(62, 96, 3) },
    Mask { index: 24, bounds: Bounds::new(112, 145, 31, 49), pos: MapPos8::new(61, 27, 9) },
    Mask { index: 38, bounds: Bounds::new(155, 181, 36, 62), pos: MapPos8::new(86, 70, 5) },
    Mask { index: 52, bounds: Bounds::new(21, 41, 15, 29), pos: MapPos8::new(69, 49, 8) },
    Mask { index: 11, bounds: Bounds::new(104, 137, 72, 80), pos: MapPos8::new(95, 44, 6) },
    Mask { index: 9, bounds: Bounds::new(75, 108, 9, 46), pos: MapPos8::new(93, 85, 14) },
    Mask { index: 25, bounds: Bounds::new(46, 67, 52, 95), pos: MapPos8::new(86, 26, 5) },
    Mask { index: 26, bounds: Bounds::new(21, 44, 14, 29), pos: MapPos8::new(78, 72, 10) },
    Mask { index: 18, bounds: Bounds::new(37, 72, 106, 129), pos: MapPos8::new(41, 54, 15) },
    Mask { index: 35, bounds: Bounds::new(45, 72, 73, 99), pos: MapPos8::new(71, 20, 5) },
];

/// Exterior mask descriptors: huts, buildings, the watchtower, fences.
pub static EXTERIOR_MASKS: [Mask; 30] = [
    Mask { index: 48, bounds: Bounds::new(185, 202, 132, 149), pos: MapPos8::new(93, 148, 4) },
    Mask { index: 35, bounds: Bounds::new(39, 56, 81, 112), pos: MapPos8::new(182, 110, 14) },
    Mask { index: 23, bounds: Bounds::new(48, 70, 84, 126), pos: MapPos8::new(125, 77, 0) },
    Mask { index: 26, bounds: Bounds::new(194, 216, 118, 131), pos: MapPos8::new(120, 173, 0) },
    Mask { index: 1, bounds: Bounds::new(217, 230, 115, 138), pos: MapPos8::new(180, 51, 7) },
    Mask { index: 36, bounds: Bounds::new(5, 27, 136, 174), pos: MapPos8::new(54, 77, 13) },
    Mask { index: 7, bounds: Bounds::new(66, 80, 90, 129), pos: MapPos8::new(139, 138, 0) },
    Mask { index: 39, bounds: Bounds::new(11, 41, 115, 125), pos: MapPos8::new(128, 160, 11) },
    Mask { index: 7, bounds: Bounds::new(61, 88, 80, 107), pos: MapPos8::new(86, 188, 6) },
    Mask { index: 41, bounds: Bounds::new(130, 155, 110, 153), pos: MapPos8::new(137, 98, 1) },
    Mask { index: 24, bounds: Bounds::new(67, 93, 109, 132), pos: MapPos8::new(52, 113, 3) },
    Mask { index: 52, bounds: Bounds::new(152, 180, 65, 88), pos: MapPos8::new(197, 90, 1) },
    Mask { index: 54, bounds: Bounds::new(60, 87, 76, 119), pos: MapPos8::new(116, 173, 2) },
    Mask { index: 39, bounds: Bounds::new(124, 142, 76, 95), pos: MapPos8::new(76, 184, 2) },
    Mask { index: 59, bounds: Bounds::new(9, 29, 45, 79), pos: MapPos8::new(85, 174, 13) },
    Mask { index: 47, bounds: Bounds::new(131, 145, 109, 148), pos: MapPos8::new(151, 116, 3) },
    Mask { index: 3, bounds: Bounds::new(116, 149, 146, 167), pos: MapPos8::new(73, 196, 2) },
    Mask { index: 4, bounds: Bounds::new(203, 236, 8, 51), pos: MapPos8::new(129, 198, 11) },
    Mask { index: 51, bounds: Bounds::new(47, 78, 2, 12), pos: MapPos8::new(66, 195, 0) },
    Mask { index: 40, bounds: Bounds::new(177, 204, 125, 143), pos: MapPos8::new(186, 135, 15) },
    Mask { index: 43, bounds: Bounds::new(208, 223, 108, 122), pos: MapPos8::new(58, 191, 12) },
    Mask { index: 28, bounds: Bounds::new(49, 61, 55, 89), pos: MapPos8::new(71, 95, 4) },
    Mask { index: 13, bounds: Bounds::new(138, 156, 112, 129), pos: MapPos8::new(199, 164, 11) },
    Mask { index: 0, bounds: Bounds::new(66, 91, 18, 34), pos: MapPos8::new(140, 54, 11) },
    Mask { index: 20, bounds: Bounds::new(5, 23, 54, 67), pos: MapPos8::new(161, 168, 6) },
    Mask { index: 0, bounds: Bounds::new(186, 214, 69, 110), pos: MapPos8::new(157, 57, 9) },
    Mask { index: 48, bounds: Bounds::new(183, 196, 96, 136), pos: MapPos8::new(92, 40, 11) },
    Mask { index: 42, bounds: Bounds::new(53, 70, 12, 36), pos: MapPos8::new(146, 109, 2) },
    Mask { index: 29, bounds: Bounds::new(113, 144, 69, 83), pos: MapPos8::new(161, 66, 6) },
    Mask { index: 14, bounds: Bounds::new(11, 26, 43, 58), pos: MapPos8::new(43, 77, 4) },
];
