/*************************************************************************

This file is part of a recreation of 'The Great Escape'
Game copyright (c) 1986 Ocean Software Ltd. and Denton Designs Ltd.

Rust port maintains original logic and behaviour.

**************************************************************************/

//! Item sprites: one 16-pixel-wide bitmap and mask per item, drawn with
//! the 16-wide compositor.

use crate::types::SpriteDef;

static BITMAP_WIRESNIPS: [u8; 32] = [
    0x00, 0x00, 0x00, 0x00, 0x01, 0x60, 0x0F, 0xF8, 0x03, 0x58, 0x1E, 0x9C, 0x0F, 0xEC, 0x3E, 0x3E,
    0x1F, 0x76, 0x1F, 0x9E, 0x1F, 0xF4, 0x1A, 0xE8, 0x0B, 0x70, 0x0A, 0xD8, 0x00, 0xC0, 0x00, 0x00,
];

static MASK_WIRESNIPS: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFC, 0x1F, 0xF0, 0x07, 0xF0, 0x07, 0xE0, 0x03, 0xE0, 0x03, 0xC0, 0x01,
    0xC0, 0x01, 0xC0, 0x01, 0xE0, 0x03, 0xE0, 0x03, 0xF0, 0x07, 0xF0, 0x07, 0xFC, 0x1F, 0xFF, 0xFF,
];

static BITMAP_SHOVEL: [u8; 32] = [
    0x00, 0x00, 0x00, 0x00, 0x01, 0x60, 0x0B, 0xF8, 0x0F, 0xB0, 0x1B, 0xFC, 0x05, 0xFC, 0x36, 0xEA,
    0x3B, 0xFA, 0x2F, 0xCC, 0x17, 0xEC, 0x1F, 0xFC, 0x0F, 0x18, 0x0B, 0xC8, 0x01, 0xE0, 0x00, 0x00,
];

static MASK_SHOVEL: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFC, 0x1F, 0xF0, 0x07, 0xF0, 0x07, 0xE0, 0x03, 0xE0, 0x03, 0xC0, 0x01,
    0xC0, 0x01, 0xC0, 0x01, 0xE0, 0x03, 0xE0, 0x03, 0xF0, 0x07, 0xF0, 0x07, 0xFC, 0x1F, 0xFF, 0xFF,
];

static BITMAP_LOCKPICK: [u8; 32] = [
    0x00, 0x00, 0x00, 0x00, 0x02, 0xE0, 0x07, 0x68, 0x01, 0x78, 0x1D, 0xDC, 0x1F, 0x64, 0x37, 0x2E,
    0x3F, 0xFE, 0x2F, 0xEE, 0x0F, 0xDC, 0x0F, 0xF4, 0x03, 0x98, 0x0B, 0xB8, 0x03, 0x40, 0x00, 0x00,
];

static MASK_LOCKPICK: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFC, 0x1F, 0xF0, 0x07, 0xF0, 0x07, 0xE0, 0x03, 0xE0, 0x03, 0xC0, 0x01,
    0xC0, 0x01, 0xC0, 0x01, 0xE0, 0x03, 0xE0, 0x03, 0xF0, 0x07, 0xF0, 0x07, 0xFC, 0x1F, 0xFF, 0xFF,
];

static BITMAP_PAPERS: [u8; 32] = [
    0x00, 0x00, 0x00, 0x00, 0x03, 0x60, 0x0F, 0xB8, 0x07, 0x70, 0x08, 0xFC, 0x06, 0x44, 0x3F, 0xAE,
    0x3B, 0x1E, 0x0B, 0xEE, 0x16, 0xFC, 0x1F, 0x68, 0x0F, 0xF8, 0x0F, 0x98, 0x02, 0xE0, 0x00, 0x00,
];

static MASK_PAPERS: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFC, 0x1F, 0xF0, 0x07, 0xF0, 0x07, 0xE0, 0x03, 0xE0, 0x03, 0xC0, 0x01,
    0xC0, 0x01, 0xC0, 0x01, 0xE0, 0x03, 0xE0, 0x03, 0xF0, 0x07, 0xF0, 0x07, 0xFC, 0x1F, 0xFF, 0xFF,
];

static BITMAP_TORCH: [u8; 32] = [
    0x00, 0x00, 0x00, 0x00, 0x01, 0xE0, 0x0B, 0x30, 0x07, 0xB8, 0x1F, 0xCC, 0x0C, 0xE4, 0x36, 0xE6,
    0x3D, 0x1A, 0x2A, 0xA8, 0x16, 0x74, 0x0E, 0xB8, 0x01, 0xF8, 0x0A, 0xD8, 0x00, 0x60, 0x00, 0x00,
];

static MASK_TORCH: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFC, 0x1F, 0xF0, 0x07, 0xF0, 0x07, 0xE0, 0x03, 0xE0, 0x03, 0xC0, 0x01,
    0xC0, 0x01, 0xC0, 0x01, 0xE0, 0x03, 0xE0, 0x03, 0xF0, 0x07, 0xF0, 0x07, 0xFC, 0x1F, 0xFF, 0xFF,
];

static BITMAP_BRIBE: [u8; 32] = [
    0x00, 0x00, 0x00, 0x00, 0x01, 0xC0, 0x06, 0xF0, 0x0D, 0x90, 0x1F, 0xDC, 0x0C, 0x74, 0x33, 0xFA,
    0x1F, 0xFA, 0x29, 0xFA, 0x1C, 0xE4, 0x06, 0xB8, 0x05, 0x58, 0x0E, 0xF8, 0x01, 0x60, 0x00, 0x00,
];

static MASK_BRIBE: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFC, 0x1F, 0xF0, 0x07, 0xF0, 0x07, 0xE0, 0x03, 0xE0, 0x03, 0xC0, 0x01,
    0xC0, 0x01, 0xC0, 0x01, 0xE0, 0x03, 0xE0, 0x03, 0xF0, 0x07, 0xF0, 0x07, 0xFC, 0x1F, 0xFF, 0xFF,
];

static BITMAP_UNIFORM: [u8; 32] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x40, 0x0F, 0x70, 0x09, 0x58, 0x09, 0xEC, 0x1E, 0xD4, 0x22, 0xE6,
    0x1B, 0xF6, 0x1A, 0xCE, 0x0F, 0x6C, 0x1F, 0xFC, 0x0B, 0x50, 0x0C, 0xF8, 0x02, 0xE0, 0x00, 0x00,
];

static MASK_UNIFORM: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFC, 0x1F, 0xF0, 0x07, 0xF0, 0x07, 0xE0, 0x03, 0xE0, 0x03, 0xC0, 0x01,
    0xC0, 0x01, 0xC0, 0x01, 0xE0, 0x03, 0xE0, 0x03, 0xF0, 0x07, 0xF0, 0x07, 0xFC, 0x1F, 0xFF, 0xFF,
];

static BITMAP_FOOD: [u8; 32] = [
    0x00, 0x00, 0x00, 0x00, 0x03, 0x60, 0x0F, 0xF8, 0x09, 0x78, 0x1F, 0x98, 0x0D, 0x54, 0x2B, 0xA6,
    0x11, 0xFE, 0x19, 0x9A, 0x1C, 0xF4, 0x0E, 0xFC, 0x07, 0xF8, 0x0D, 0xB8, 0x03, 0xE0, 0x00, 0x00,
];

static MASK_FOOD: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFC, 0x1F, 0xF0, 0x07, 0xF0, 0x07, 0xE0, 0x03, 0xE0, 0x03, 0xC0, 0x01,
    0xC0, 0x01, 0xC0, 0x01, 0xE0, 0x03, 0xE0, 0x03, 0xF0, 0x07, 0xF0, 0x07, 0xFC, 0x1F, 0xFF, 0xFF,
];

static BITMAP_POISON: [u8; 32] = [
    0x00, 0x00, 0x00, 0x00, 0x01, 0xE0, 0x0B, 0xE0, 0x05, 0xD8, 0x1B, 0xFC, 0x15, 0xF4, 0x2F, 0xEE,
    0x3F, 0xFE, 0x0E, 0xCE, 0x1F, 0xFC, 0x1B, 0xFC, 0x0B, 0xD0, 0x0E, 0xB8, 0x01, 0xE0, 0x00, 0x00,
];

static MASK_POISON: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFC, 0x1F, 0xF0, 0x07, 0xF0, 0x07, 0xE0, 0x03, 0xE0, 0x03, 0xC0, 0x01,
    0xC0, 0x01, 0xC0, 0x01, 0xE0, 0x03, 0xE0, 0x03, 0xF0, 0x07, 0xF0, 0x07, 0xFC, 0x1F, 0xFF, 0xFF,
];

static BITMAP_RED_KEY: [u8; 32] = [
    0x00, 0x00, 0x00, 0x00, 0x02, 0xE0, 0x0E, 0xF8, 0x0F, 0xD8, 0x0F, 0xE8, 0x1D, 0xDC, 0x37, 0xAA,
    0x3B, 0xFE, 0x29, 0xCE, 0x1F, 0xCC, 0x0F, 0xE8, 0x0D, 0x10, 0x0B, 0x88, 0x01, 0xE0, 0x00, 0x00,
];

static MASK_RED_KEY: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFC, 0x1F, 0xF0, 0x07, 0xF0, 0x07, 0xE0, 0x03, 0xE0, 0x03, 0xC0, 0x01,
    0xC0, 0x01, 0xC0, 0x01, 0xE0, 0x03, 0xE0, 0x03, 0xF0, 0x07, 0xF0, 0x07, 0xFC, 0x1F, 0xFF, 0xFF,
];

static BITMAP_YELLOW_KEY: [u8; 32] = [
    0x00, 0x00, 0x00, 0x00, 0x02, 0x60, 0x03, 0xB8, 0x01, 0x98, 0x1D, 0x8C, 0x15, 0xDC, 0x3F, 0xFA,
    0x37, 0xFA, 0x1D, 0xBE, 0x0F, 0xF4, 0x0B, 0x38, 0x07, 0xF0, 0x0E, 0x98, 0x00, 0xE0, 0x00, 0x00,
];

static MASK_YELLOW_KEY: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFC, 0x1F, 0xF0, 0x07, 0xF0, 0x07, 0xE0, 0x03, 0xE0, 0x03, 0xC0, 0x01,
    0xC0, 0x01, 0xC0, 0x01, 0xE0, 0x03, 0xE0, 0x03, 0xF0, 0x07, 0xF0, 0x07, 0xFC, 0x1F, 0xFF, 0xFF,
];

static BITMAP_GREEN_KEY: [u8; 32] = [
    0x00, 0x00, 0x00, 0x00, 0x02, 0x60, 0x03, 0xF8, 0x03, 0x58, 0x1D, 0xAC, 0x17, 0xF4, 0x3B, 0xFE,
    0x1D, 0xFE, 0x3A, 0xFC, 0x15, 0x7C, 0x0B, 0x64, 0x0F, 0xF8, 0x0E, 0xF8, 0x02, 0xE0, 0x00, 0x00,
];

static MASK_GREEN_KEY: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFC, 0x1F, 0xF0, 0x07, 0xF0, 0x07, 0xE0, 0x03, 0xE0, 0x03, 0xC0, 0x01,
    0xC0, 0x01, 0xC0, 0x01, 0xE0, 0x03, 0xE0, 0x03, 0xF0, 0x07, 0xF0, 0x07, 0xFC, 0x1F, 0xFF, 0xFF,
];

static BITMAP_RED_CROSS_PARCEL: [u8; 32] = [
    0x00, 0x00, 0x00, 0x00, 0x03, 0xE0, 0x0F, 0x78, 0x0D, 0xD8, 0x0D, 0xCC, 0x1E, 0x6C, 0x33, 0x6E,
    0x1F, 0xD6, 0x1F, 0xDE, 0x17, 0xEC, 0x1F, 0xE8, 0x0F, 0x98, 0x0D, 0xF8, 0x01, 0x40, 0x00, 0x00,
];

static MASK_RED_CROSS_PARCEL: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFC, 0x1F, 0xF0, 0x07, 0xF0, 0x07, 0xE0, 0x03, 0xE0, 0x03, 0xC0, 0x01,
    0xC0, 0x01, 0xC0, 0x01, 0xE0, 0x03, 0xE0, 0x03, 0xF0, 0x07, 0xF0, 0x07, 0xFC, 0x1F, 0xFF, 0xFF,
];

static BITMAP_RADIO: [u8; 32] = [
    0x00, 0x00, 0x00, 0x00, 0x01, 0xE0, 0x03, 0xF8, 0x07, 0xF0, 0x1B, 0xFC, 0x1E, 0xFC, 0x2A, 0xB2,
    0x1D, 0x76, 0x0D, 0xBE, 0x16, 0xC4, 0x1A, 0x38, 0x05, 0xF8, 0x0A, 0xB8, 0x03, 0xC0, 0x00, 0x00,
];

static MASK_RADIO: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFC, 0x1F, 0xF0, 0x07, 0xF0, 0x07, 0xE0, 0x03, 0xE0, 0x03, 0xC0, 0x01,
    0xC0, 0x01, 0xC0, 0x01, 0xE0, 0x03, 0xE0, 0x03, 0xF0, 0x07, 0xF0, 0x07, 0xFC, 0x1F, 0xFF, 0xFF,
];

static BITMAP_PURSE: [u8; 32] = [
    0x00, 0x00, 0x00, 0x00, 0x01, 0x60, 0x0B, 0xF8, 0x0D, 0x38, 0x0E, 0xFC, 0x1F, 0xFC, 0x3B, 0xFE,
    0x37, 0x38, 0x3D, 0x9C, 0x05, 0xDC, 0x17, 0xE8, 0x05, 0xD8, 0x0D, 0x98, 0x02, 0x60, 0x00, 0x00,
];

static MASK_PURSE: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFC, 0x1F, 0xF0, 0x07, 0xF0, 0x07, 0xE0, 0x03, 0xE0, 0x03, 0xC0, 0x01,
    0xC0, 0x01, 0xC0, 0x01, 0xE0, 0x03, 0xE0, 0x03, 0xF0, 0x07, 0xF0, 0x07, 0xFC, 0x1F, 0xFF, 0xFF,
];

static BITMAP_COMPASS: [u8; 32] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0x0F, 0xE8, 0x07, 0xB0, 0x1C, 0xF8, 0x1E, 0xEC, 0x2B, 0xA2,
    0x1F, 0xF6, 0x1B, 0xD8, 0x1F, 0xE4, 0x0F, 0xB8, 0x09, 0xF8, 0x0E, 0x88, 0x02, 0xC0, 0x00, 0x00,
];

static MASK_COMPASS: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFC, 0x1F, 0xF0, 0x07, 0xF0, 0x07, 0xE0, 0x03, 0xE0, 0x03, 0xC0, 0x01,
    0xC0, 0x01, 0xC0, 0x01, 0xE0, 0x03, 0xE0, 0x03, 0xF0, 0x07, 0xF0, 0x07, 0xFC, 0x1F, 0xFF, 0xFF,
];

pub static ITEM_SPRITES: [SpriteDef; 16] = [
    SpriteDef { width_bytes: 3, height: 16, bitmap: &BITMAP_WIRESNIPS, mask: &MASK_WIRESNIPS },
    SpriteDef { width_bytes: 3, height: 16, bitmap: &BITMAP_SHOVEL, mask: &MASK_SHOVEL },
    SpriteDef { width_bytes: 3, height: 16, bitmap: &BITMAP_LOCKPICK, mask: &MASK_LOCKPICK },
    SpriteDef { width_bytes: 3, height: 16, bitmap: &BITMAP_PAPERS, mask: &MASK_PAPERS },
    SpriteDef { width_bytes: 3, height: 16, bitmap: &BITMAP_TORCH, mask: &MASK_TORCH },
    SpriteDef { width_bytes: 3, height: 16, bitmap: &BITMAP_BRIBE, mask: &MASK_BRIBE },
    SpriteDef { width_bytes: 3, height: 16, bitmap: &BITMAP_UNIFORM, mask: &MASK_UNIFORM },
    SpriteDef { width_bytes: 3, height: 16, bitmap: &BITMAP_FOOD, mask: &MASK_FOOD },
    SpriteDef { width_bytes: 3, height: 16, bitmap: &BITMAP_POISON, mask: &MASK_POISON },
    SpriteDef { width_bytes: 3, height: 16, bitmap: &BITMAP_RED_KEY, mask: &MASK_RED_KEY },
    SpriteDef { width_bytes: 3, height: 16, bitmap: &BITMAP_YELLOW_KEY, mask: &MASK_YELLOW_KEY },
    SpriteDef { width_bytes: 3, height: 16, bitmap: &BITMAP_GREEN_KEY, mask: &MASK_GREEN_KEY },
    SpriteDef { width_bytes: 3, height: 16, bitmap: &BITMAP_RED_CROSS_PARCEL, mask: &MASK_RED_CROSS_PARCEL },
    SpriteDef { width_bytes: 3, height: 16, bitmap: &BITMAP_RADIO, mask: &MASK_RADIO },
    SpriteDef { width_bytes: 3, height: 16, bitmap: &BITMAP_PURSE, mask: &MASK_PURSE },
    SpriteDef { width_bytes: 3, height: 16, bitmap: &BITMAP_COMPASS, mask: &MASK_COMPASS },
];
