/*************************************************************************

This file is part of a recreation of 'The Great Escape'
Game copyright (c) 1986 Ocean Software Ltd. and Denton Designs Ltd.

Rust port maintains original logic and behaviour.

**************************************************************************/

//! Sprites: objects which can move.
//!
//! This includes the stove, crate, prisoners, crawl frames, dogs, guards
//! and the commandant. Heights match the bitmap and mask data exactly;
//! the original game's table overstated some heights and could be seen
//! glitching because of it, e.g. when a guard dog ran towards the bottom
//! right.

use crate::types::SpriteDef;

static BITMAP_STOVE: [u8; 44] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0x01, 0xA0, 0x03, 0xF0, 0x07, 0xF0, 0x0F, 0xB8, 0x0B, 0xF8,
    0x07, 0xF8, 0x1F, 0xF4, 0x1B, 0xFC, 0x1E, 0xD8, 0x1F, 0xFC, 0x1B, 0xFC, 0x0F, 0xD8, 0x0D, 0xB8,
    0x0F, 0xE8, 0x06, 0xF0, 0x07, 0xF0, 0x03, 0xE0, 0x00, 0xC0, 0x00, 0x00,
];

static MASK_STOVE: [u8; 44] = [
    0xFF, 0xFF, 0xFE, 0x3F, 0xFC, 0x1F, 0xF8, 0x0F, 0xF0, 0x07, 0xF0, 0x07, 0xE0, 0x03, 0xE0, 0x03,
    0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03,
    0xE0, 0x03, 0xF0, 0x07, 0xF0, 0x07, 0xF8, 0x0F, 0xFC, 0x1F, 0xFE, 0x3F,
];

static BITMAP_CRATE: [u8; 72] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x00, 0x00, 0xBE, 0x80, 0x01, 0xFD, 0xC0, 0x02,
    0xFB, 0xE0, 0x07, 0xFF, 0xF0, 0x0F, 0xED, 0xB8, 0x07, 0xDF, 0xE8, 0x1F, 0xB6, 0xFC, 0x1F, 0xFD,
    0xFC, 0x1E, 0xDF, 0xFC, 0x0D, 0xB7, 0xF8, 0x1B, 0x6F, 0xB4, 0x1F, 0xFF, 0xEC, 0x1F, 0xFF, 0xDC,
    0x0B, 0xFF, 0xF8, 0x07, 0xDF, 0xF8, 0x07, 0xFF, 0xF0, 0x03, 0xFD, 0xE0, 0x00, 0xFF, 0xC0, 0x00,
    0xBE, 0x80, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x00,
];

static MASK_CRATE: [u8; 72] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x80, 0xFF, 0xFE, 0x00, 0x3F, 0xFC, 0x00, 0x1F, 0xF8,
    0x00, 0x0F, 0xF8, 0x00, 0x0F, 0xF0, 0x00, 0x07, 0xF0, 0x00, 0x07, 0xF0, 0x00, 0x07, 0xE0, 0x00,
    0x03, 0xE0, 0x00, 0x03, 0xE0, 0x00, 0x03, 0xE0, 0x00, 0x03, 0xE0, 0x00, 0x03, 0xF0, 0x00, 0x07,
    0xF0, 0x00, 0x07, 0xF0, 0x00, 0x07, 0xF8, 0x00, 0x0F, 0xF8, 0x00, 0x0F, 0xFC, 0x00, 0x1F, 0xFE,
    0x00, 0x3F, 0xFF, 0x80, 0xFF, 0xFF, 0xFF, 0xFF,
];

static BITMAP_PRISONER_FACING_TOP_LEFT_1: [u8; 52] = [
    0x00, 0x00, 0x00, 0x80, 0x02, 0xE0, 0x03, 0xA0, 0x07, 0xF0, 0x06, 0xD0, 0x0D, 0xB0, 0x0B, 0xF8,
    0x0E, 0xD8, 0x0D, 0xB0, 0x0B, 0x68, 0x0F, 0xD8, 0x0F, 0xFC, 0x1F, 0xEC, 0x17, 0xF8, 0x0F, 0xB0,
    0x0F, 0x68, 0x0F, 0xF8, 0x0D, 0xF0, 0x0F, 0xE8, 0x0F, 0xD8, 0x05, 0xF0, 0x07, 0xF0, 0x03, 0xE0,
    0x03, 0xE0, 0x00, 0x00,
];

static MASK_VARIOUS_FACING_TOP_LEFT_1: [u8; 56] = [
    0xFF, 0xFF, 0xFE, 0x3F, 0xFC, 0x1F, 0xFC, 0x1F, 0xF8, 0x0F, 0xF8, 0x0F, 0xF0, 0x07, 0xF0, 0x07,
    0xF0, 0x07, 0xF0, 0x07, 0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03,
    0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xF0, 0x07, 0xF0, 0x07, 0xF0, 0x07, 0xF0, 0x07, 0xF8, 0x0F,
    0xF8, 0x0F, 0xFC, 0x1F, 0xFC, 0x1F, 0xFE, 0x3F,
];

static BITMAP_PRISONER_FACING_TOP_LEFT_2: [u8; 54] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0x03, 0xA0, 0x07, 0xE0, 0x06, 0xF0, 0x0D, 0xF0, 0x0B, 0xF8,
    0x1F, 0xF8, 0x1F, 0xFC, 0x1B, 0x6C, 0x16, 0xDC, 0x1F, 0xFC, 0x1B, 0xEC, 0x1E, 0xF8, 0x0F, 0xFC,
    0x1B, 0xEC, 0x1E, 0xFC, 0x0F, 0xBC, 0x1B, 0x6C, 0x0E, 0xF8, 0x0F, 0xF8, 0x07, 0xF0, 0x07, 0xD0,
    0x03, 0xA0, 0x01, 0x40, 0x00, 0x00,
];

static MASK_VARIOUS_FACING_TOP_LEFT_2: [u8; 60] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0x3F, 0xFC, 0x1F, 0xFC, 0x1F, 0xF8, 0x0F, 0xF8, 0x0F, 0xF0, 0x07,
    0xF0, 0x07, 0xF0, 0x07, 0xF0, 0x07, 0xF0, 0x07, 0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03,
    0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xF0, 0x07, 0xF0, 0x07, 0xF0, 0x07, 0xF0, 0x07, 0xF0, 0x07,
    0xF8, 0x0F, 0xF8, 0x0F, 0xFC, 0x1F, 0xFC, 0x1F, 0xFE, 0x3F, 0xFF, 0xFF,
];

static BITMAP_PRISONER_FACING_TOP_LEFT_3: [u8; 54] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0x03, 0xE0, 0x03, 0xE0, 0x0E, 0xF8, 0x0D, 0xB0, 0x0F, 0xF8,
    0x17, 0xD8, 0x1D, 0xF4, 0x1F, 0x6C, 0x1F, 0xF8, 0x0D, 0xBC, 0x1F, 0xEC, 0x1F, 0xFC, 0x0F, 0xF4,
    0x1B, 0x6C, 0x16, 0xD8, 0x1D, 0xFC, 0x1F, 0xEC, 0x07, 0xD8, 0x0F, 0xF8, 0x0B, 0x68, 0x07, 0xD0,
    0x01, 0xE0, 0x01, 0xC0, 0x00, 0x00,
];

static MASK_VARIOUS_FACING_TOP_LEFT_3: [u8; 58] = [
    0xFF, 0xFF, 0xFF, 0x7F, 0xFC, 0x1F, 0xFC, 0x1F, 0xF8, 0x0F, 0xF8, 0x0F, 0xF8, 0x0F, 0xF0, 0x07,
    0xF0, 0x07, 0xF0, 0x07, 0xF0, 0x07, 0xF0, 0x07, 0xF0, 0x07, 0xF0, 0x07, 0xF0, 0x07, 0xF0, 0x07,
    0xF0, 0x07, 0xF0, 0x07, 0xF0, 0x07, 0xF0, 0x07, 0xF0, 0x07, 0xF0, 0x07, 0xF0, 0x07, 0xF8, 0x0F,
    0xF8, 0x0F, 0xF8, 0x0F, 0xFC, 0x1F, 0xFC, 0x1F, 0xFF, 0x7F,
];

static BITMAP_PRISONER_FACING_TOP_LEFT_4: [u8; 54] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0x01, 0xA0, 0x03, 0x70, 0x0E, 0xD8, 0x0F, 0xB8, 0x1F, 0xFC,
    0x1F, 0xFC, 0x1F, 0xFC, 0x1F, 0x6C, 0x17, 0xFC, 0x3F, 0xFE, 0x3F, 0x6C, 0x3F, 0xFA, 0x2F, 0xF6,
    0x1B, 0x7C, 0x1F, 0xF8, 0x0D, 0xFC, 0x1B, 0x7C, 0x1E, 0xF8, 0x0F, 0xB0, 0x0B, 0xF8, 0x07, 0xF0,
    0x01, 0xA0, 0x01, 0xC0, 0x00, 0x00,
];

static MASK_VARIOUS_FACING_TOP_LEFT_4: [u8; 58] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F, 0xFC, 0x1F, 0xF8, 0x0F, 0xF0, 0x07, 0xF0, 0x07, 0xF0, 0x07,
    0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xC0, 0x01, 0xC0, 0x01, 0xC0, 0x01,
    0xC0, 0x01, 0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xF0, 0x07, 0xF0, 0x07,
    0xF0, 0x07, 0xF8, 0x0F, 0xFC, 0x1F, 0xFF, 0x7F, 0xFF, 0xFF,
];

static BITMAP_PRISONER_FACING_BOTTOM_RIGHT_1: [u8; 52] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0xE0, 0x03, 0xF0, 0x07, 0xD0, 0x0F, 0xB8, 0x0F, 0xF8,
    0x0F, 0xD8, 0x1D, 0xBC, 0x1B, 0xFC, 0x1F, 0xF8, 0x0F, 0xF4, 0x1F, 0xFC, 0x1E, 0xFC, 0x0D, 0xBC,
    0x1F, 0xFC, 0x1F, 0xDC, 0x0F, 0xB0, 0x0B, 0xE8, 0x07, 0xF8, 0x07, 0xB0, 0x03, 0xE0, 0x02, 0xE0,
    0x00, 0x00, 0x00, 0x00,
];

static MASK_VARIOUS_FACING_BOTTOM_RIGHT_1: [u8; 58] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0x3F, 0xFC, 0x1F, 0xF8, 0x0F, 0xF0, 0x07, 0xF0, 0x07, 0xF0, 0x07,
    0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03,
    0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xF0, 0x07, 0xF0, 0x07,
    0xF0, 0x07, 0xF8, 0x0F, 0xFC, 0x1F, 0xFE, 0x3F, 0xFF, 0xFF,
];

static BITMAP_PRISONER_FACING_BOTTOM_RIGHT_2: [u8; 56] = [
    0x00, 0x00, 0x00, 0x00, 0x01, 0xC0, 0x01, 0xE0, 0x07, 0x60, 0x07, 0xF0, 0x0D, 0xB8, 0x0F, 0xF8,
    0x0F, 0xD8, 0x0F, 0xF0, 0x1B, 0xFC, 0x17, 0xDC, 0x1D, 0xFC, 0x1B, 0xEC, 0x17, 0xD8, 0x0D, 0xBC,
    0x1F, 0x7C, 0x1F, 0xFC, 0x0F, 0xB4, 0x0F, 0xF8, 0x0F, 0xD8, 0x0F, 0xB0, 0x0F, 0x78, 0x07, 0xF0,
    0x05, 0xF0, 0x03, 0x60, 0x00, 0xC0, 0x00, 0x00,
];

static MASK_VARIOUS_FACING_BOTTOM_RIGHT_2: [u8; 58] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F, 0xFC, 0x1F, 0xF8, 0x0F, 0xF0, 0x07, 0xF0, 0x07, 0xF0, 0x07,
    0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xC0, 0x01, 0xC0, 0x01, 0xC0, 0x01, 0xC0, 0x01,
    0xC0, 0x01, 0xC0, 0x01, 0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xF0, 0x07, 0xF0, 0x07,
    0xF0, 0x07, 0xF8, 0x0F, 0xFC, 0x1F, 0xFF, 0x7F, 0xFF, 0xFF,
];

static BITMAP_PRISONER_FACING_BOTTOM_RIGHT_3: [u8; 54] = [
    0x00, 0x00, 0x00, 0x00, 0x01, 0xC0, 0x03, 0xA0, 0x03, 0xE0, 0x07, 0xF0, 0x0F, 0xF0, 0x0B, 0xE8,
    0x07, 0xF8, 0x0D, 0xB8, 0x0B, 0x78, 0x07, 0xD8, 0x1D, 0xFC, 0x1F, 0x7C, 0x17, 0xDC, 0x0D, 0xBC,
    0x0F, 0x78, 0x0F, 0xF8, 0x0F, 0xF8, 0x0F, 0xE8, 0x0F, 0xD8, 0x0D, 0xF8, 0x07, 0x70, 0x07, 0xD0,
    0x03, 0xE0, 0x01, 0x40, 0x00, 0x00,
];

static MASK_VARIOUS_FACING_BOTTOM_RIGHT_3: [u8; 56] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFC, 0x1F, 0xF8, 0x0F, 0xF8, 0x0F, 0xF0, 0x07, 0xF0, 0x07,
    0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03,
    0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xF0, 0x07, 0xF0, 0x07, 0xF8, 0x0F,
    0xF8, 0x0F, 0xFC, 0x1F, 0xFF, 0xFF, 0xFF, 0xFF,
];

static BITMAP_PRISONER_FACING_BOTTOM_RIGHT_4: [u8; 54] = [
    0x00, 0x00, 0x00, 0x00, 0x01, 0xC0, 0x03, 0xE0, 0x07, 0xF0, 0x07, 0xD0, 0x0F, 0xB0, 0x0F, 0x68,
    0x0F, 0xD8, 0x0D, 0xB0, 0x1F, 0x7C, 0x17, 0xFC, 0x0D, 0xFC, 0x1F, 0x6C, 0x17, 0xF8, 0x0F, 0xF4,
    0x1F, 0x7C, 0x1E, 0xFC, 0x0D, 0xB0, 0x0B, 0x68, 0x0F, 0xD8, 0x0D, 0xB0, 0x07, 0xF0, 0x06, 0xD0,
    0x03, 0xA0, 0x01, 0xC0, 0x00, 0x00,
];

static MASK_VARIOUS_FACING_BOTTOM_RIGHT_4: [u8; 56] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0x3F, 0xFC, 0x1F, 0xF8, 0x0F, 0xF0, 0x07, 0xF0, 0x07, 0xE0, 0x03,
    0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xC0, 0x01, 0xC0, 0x01, 0xC0, 0x01, 0xC0, 0x01, 0xC0, 0x01,
    0xC0, 0x01, 0xC0, 0x01, 0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xF0, 0x07, 0xF0, 0x07,
    0xF8, 0x0F, 0xFC, 0x1F, 0xFE, 0x3F, 0xFF, 0xFF,
];

static BITMAP_CRAWL_FACING_BOTTOM_LEFT_1: [u8; 48] = [
    0x00, 0x00, 0x00, 0x00, 0x3C, 0x00, 0x00, 0xFF, 0x80, 0x01, 0xBE, 0xC0, 0x03, 0xEF, 0xA0, 0x07,
    0xDB, 0x60, 0x05, 0xF7, 0xF0, 0x0F, 0xFF, 0xF8, 0x07, 0xDF, 0xF8, 0x0D, 0xF7, 0xF8, 0x03, 0x7F,
    0xB0, 0x06, 0xDF, 0x60, 0x03, 0xFF, 0xE0, 0x01, 0x6D, 0xC0, 0x00, 0xDF, 0x80, 0x00, 0x3E, 0x00,
];

static MASK_CRAWL_FACING_BOTTOM_LEFT: [u8; 48] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xC1, 0xFF, 0xFE, 0x00, 0x3F, 0xF8, 0x00, 0x0F, 0xF0, 0x00, 0x07, 0xF0,
    0x00, 0x07, 0xE0, 0x00, 0x03, 0xE0, 0x00, 0x03, 0xE0, 0x00, 0x03, 0xE0, 0x00, 0x03, 0xE0, 0x00,
    0x03, 0xF0, 0x00, 0x07, 0xF0, 0x00, 0x07, 0xF8, 0x00, 0x0F, 0xFE, 0x00, 0x3F, 0xFF, 0xC1, 0xFF,
];

static BITMAP_CRAWL_FACING_BOTTOM_LEFT_2: [u8; 45] = [
    0x00, 0x00, 0x00, 0x00, 0x6D, 0x00, 0x01, 0xFF, 0xC0, 0x05, 0xFF, 0xD0, 0x0F, 0x6F, 0xF0, 0x06,
    0xFB, 0xE8, 0x1F, 0xBF, 0xDC, 0x1B, 0x7F, 0xF4, 0x17, 0xFF, 0xFC, 0x0F, 0xFF, 0xDC, 0x0F, 0x6F,
    0xF0, 0x0F, 0xDB, 0xF8, 0x05, 0xFF, 0xD0, 0x01, 0x7D, 0xC0, 0x00, 0x7F, 0x00,
];

static BITMAP_CRAWL_FACING_TOP_LEFT_1: [u8; 48] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0x80, 0x01, 0xF6, 0xC0, 0x07, 0xEF, 0xB0, 0x06,
    0xFB, 0x60, 0x0F, 0xBE, 0xD8, 0x0B, 0x6F, 0xF0, 0x07, 0xDF, 0xF8, 0x0D, 0xF6, 0xF8, 0x0F, 0x7F,
    0xB8, 0x07, 0xDB, 0x70, 0x05, 0xF7, 0xD0, 0x01, 0xEF, 0xC0, 0x00, 0xDF, 0x00, 0x00, 0x00, 0x00,
];

static MASK_CRAWL_FACING_TOP_LEFT: [u8; 48] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0x80, 0xFF, 0xFE, 0x00, 0x3F, 0xF8, 0x00, 0x0F, 0xF0, 0x00, 0x07, 0xF0,
    0x00, 0x07, 0xE0, 0x00, 0x03, 0xE0, 0x00, 0x03, 0xE0, 0x00, 0x03, 0xE0, 0x00, 0x03, 0xE0, 0x00,
    0x03, 0xF0, 0x00, 0x07, 0xF0, 0x00, 0x07, 0xF8, 0x00, 0x0F, 0xFE, 0x00, 0x3F, 0xFF, 0x80, 0xFF,
];

static BITMAP_CRAWL_FACING_TOP_LEFT_2: [u8; 48] = [
    0x00, 0x00, 0x00, 0x00, 0x7F, 0x00, 0x01, 0xFF, 0x40, 0x05, 0xBF, 0xD0, 0x0F, 0x7D, 0xF0, 0x07,
    0xFB, 0xE8, 0x1D, 0xB6, 0xDC, 0x1F, 0xFF, 0xBC, 0x1E, 0xDF, 0xEC, 0x1F, 0xFF, 0xFC, 0x1B, 0xFD,
    0xFC, 0x07, 0xFF, 0x68, 0x0D, 0xBF, 0xF8, 0x07, 0x6D, 0xF0, 0x01, 0xFF, 0xC0, 0x00, 0x7E, 0x00,
];

static BITMAP_DOG_FACING_TOP_LEFT_1: [u8; 48] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0x00, 0x01, 0xFE, 0xC0, 0x03, 0xEF, 0xA0, 0x07,
    0xFF, 0xE0, 0x05, 0xFE, 0xD0, 0x03, 0xED, 0xF0, 0x0F, 0xFB, 0xE8, 0x07, 0xF7, 0xD0, 0x03, 0xEF,
    0xF0, 0x06, 0xFF, 0xE0, 0x01, 0xBE, 0xE0, 0x01, 0x7F, 0xC0, 0x00, 0xDF, 0x80, 0x00, 0x00, 0x00,
];

static MASK_DOG_FACING_TOP_LEFT: [u8; 48] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0x80, 0xFF, 0xFE, 0x00, 0x3F, 0xFC, 0x00, 0x1F, 0xF8, 0x00, 0x0F, 0xF8,
    0x00, 0x0F, 0xF0, 0x00, 0x07, 0xF0, 0x00, 0x07, 0xF0, 0x00, 0x07, 0xF0, 0x00, 0x07, 0xF0, 0x00,
    0x07, 0xF8, 0x00, 0x0F, 0xF8, 0x00, 0x0F, 0xFC, 0x00, 0x1F, 0xFE, 0x00, 0x3F, 0xFF, 0x80, 0xFF,
];

static BITMAP_DOG_FACING_TOP_LEFT_2: [u8; 48] = [
    0x00, 0x00, 0x00, 0x00, 0x2C, 0x00, 0x01, 0xFB, 0xC0, 0x03, 0xFF, 0xC0, 0x03, 0xED, 0xF0, 0x0E,
    0xDB, 0x78, 0x0F, 0xFE, 0xF8, 0x1F, 0xFD, 0xB4, 0x1F, 0xFF, 0xEC, 0x0F, 0xF7, 0xD8, 0x0B, 0xEF,
    0xB0, 0x0E, 0xDF, 0x78, 0x07, 0xBF, 0xD0, 0x03, 0xFD, 0xA0, 0x01, 0xDB, 0xC0, 0x00, 0x3E, 0x00,
];

static BITMAP_DOG_FACING_TOP_LEFT_3: [u8; 45] = [
    0x00, 0x00, 0x00, 0x00, 0x7D, 0x00, 0x01, 0xDB, 0xC0, 0x03, 0xBF, 0xE0, 0x03, 0x7F, 0xF0, 0x07,
    0xDB, 0x60, 0x0F, 0xF7, 0xF8, 0x0F, 0xEF, 0xB0, 0x07, 0xDF, 0xF8, 0x0F, 0xB7, 0xF8, 0x03, 0xED,
    0xB0, 0x06, 0xFB, 0xF0, 0x01, 0xFF, 0xC0, 0x01, 0xEF, 0x80, 0x00, 0x5F, 0x00,
];

static BITMAP_DOG_FACING_TOP_LEFT_4: [u8; 45] = [
    0x00, 0x00, 0x00, 0x00, 0x6F, 0x00, 0x01, 0xFF, 0xC0, 0x03, 0xF7, 0xC0, 0x03, 0xFD, 0xF0, 0x06,
    0xDF, 0x60, 0x05, 0xB6, 0xD0, 0x0F, 0xFD, 0xF8, 0x06, 0xFB, 0xE8, 0x05, 0xBF, 0xF0, 0x07, 0xFD,
    0xF0, 0x06, 0xDF, 0x60, 0x03, 0xB6, 0xC0, 0x01, 0xFD, 0xC0, 0x00, 0x5F, 0x00,
];

static BITMAP_DOG_FACING_BOTTOM_RIGHT_1: [u8; 42] = [
    0x00, 0x00, 0x00, 0x00, 0x3E, 0x00, 0x00, 0xFF, 0x80, 0x01, 0xB7, 0xC0, 0x03, 0xFF, 0xE0, 0x07,
    0xDF, 0xF0, 0x07, 0xFF, 0xF0, 0x07, 0x6F, 0xF0, 0x07, 0xDB, 0xE0, 0x07, 0xBE, 0xF0, 0x03, 0xED,
    0xE0, 0x01, 0xFF, 0xC0, 0x00, 0xFE, 0x80, 0x00, 0x3E, 0x00,
];

static MASK_DOG_FACING_BOTTOM_RIGHT: [u8; 45] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x7F, 0xFC, 0x00, 0x1F, 0xF8, 0x00, 0x0F, 0xF8,
    0x00, 0x0F, 0xF0, 0x00, 0x07, 0xF0, 0x00, 0x07, 0xF0, 0x00, 0x07, 0xF0, 0x00, 0x07, 0xF8, 0x00,
    0x0F, 0xF8, 0x00, 0x0F, 0xFC, 0x00, 0x1F, 0xFF, 0x00, 0x7F, 0xFF, 0xFF, 0xFF,
];

static BITMAP_DOG_FACING_BOTTOM_RIGHT_2: [u8; 45] = [
    0x00, 0x00, 0x00, 0x00, 0xFF, 0x80, 0x03, 0xDF, 0x60, 0x07, 0xBE, 0xF0, 0x0F, 0xFD, 0xB0, 0x1E,
    0xDF, 0xEC, 0x0F, 0xB6, 0xFC, 0x1B, 0xFF, 0xBC, 0x1F, 0xDF, 0xEC, 0x1F, 0xFF, 0xF8, 0x1F, 0xFF,
    0xFC, 0x0F, 0xFF, 0xE8, 0x05, 0xF7, 0xF0, 0x03, 0x6D, 0xE0, 0x00, 0xDB, 0x00,
];

static BITMAP_DOG_FACING_BOTTOM_RIGHT_3: [u8; 39] = [
    0x00, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00, 0xDB, 0x00, 0x01, 0xF7, 0xE0, 0x03, 0xFF, 0xF0, 0x07,
    0xFF, 0xF0, 0x05, 0xFF, 0xD0, 0x07, 0xED, 0xB0, 0x07, 0xFF, 0x70, 0x07, 0xFE, 0xD0, 0x03, 0xFF,
    0xA0, 0x00, 0xFF, 0x00, 0x00, 0x14, 0x00,
];

static BITMAP_DOG_FACING_BOTTOM_RIGHT_4: [u8; 42] = [
    0x00, 0x00, 0x00, 0x00, 0x7F, 0x80, 0x03, 0xFB, 0xE0, 0x07, 0xB6, 0xF0, 0x0F, 0x6F, 0xF8, 0x06,
    0xFB, 0xE8, 0x1F, 0xFF, 0xF8, 0x1B, 0xFF, 0xFC, 0x1E, 0xFB, 0xFC, 0x0F, 0xBE, 0xF8, 0x0B, 0xEF,
    0xF0, 0x07, 0xFF, 0x70, 0x03, 0xBE, 0xC0, 0x00, 0x6D, 0x80,
];

static BITMAP_GUARD_FACING_TOP_LEFT_1: [u8; 54] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0x07, 0xF0, 0x07, 0x60, 0x0E, 0xF8, 0x0D, 0xBC, 0x1F, 0xFC,
    0x17, 0xFC, 0x1F, 0xF4, 0x3F, 0x6E, 0x3E, 0xDE, 0x2F, 0xBE, 0x3F, 0x7E, 0x3F, 0xFA, 0x3D, 0xF6,
    0x3F, 0x6E, 0x3F, 0xFA, 0x1F, 0xBC, 0x1F, 0xEC, 0x16, 0xF8, 0x0D, 0xB4, 0x0B, 0xF8, 0x07, 0xF0,
    0x07, 0xF0, 0x01, 0x40, 0x00, 0x00,
];

static BITMAP_GUARD_FACING_TOP_LEFT_2: [u8; 58] = [
    0x00, 0x00, 0x01, 0xC0, 0x03, 0xE0, 0x07, 0xB0, 0x03, 0xE0, 0x07, 0xF0, 0x0D, 0xB0, 0x0B, 0x68,
    0x07, 0xD8, 0x1F, 0xBC, 0x1B, 0xFC, 0x1F, 0xF8, 0x1D, 0xFC, 0x1F, 0x6C, 0x1E, 0xD8, 0x0D, 0xFC,
    0x1B, 0xEC, 0x1E, 0xFC, 0x0F, 0xFC, 0x1F, 0xFC, 0x1F, 0xDC, 0x0D, 0xF8, 0x0B, 0xE8, 0x0F, 0xF8,
    0x07, 0xF0, 0x07, 0xE0, 0x06, 0xF0, 0x01, 0xE0, 0x01, 0xC0,
];

static BITMAP_GUARD_FACING_TOP_LEFT_3: [u8; 54] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0x03, 0xA0, 0x07, 0x60, 0x06, 0xD8, 0x0F, 0xB0, 0x0B, 0x78,
    0x17, 0xF8, 0x1D, 0xBC, 0x1F, 0x6C, 0x1F, 0xF8, 0x1F, 0xBC, 0x1F, 0x7C, 0x1E, 0xFC, 0x1F, 0xFC,
    0x1F, 0xFC, 0x1F, 0xF8, 0x1F, 0xF4, 0x1B, 0x7C, 0x06, 0xD8, 0x0D, 0xB0, 0x0F, 0xF8, 0x07, 0xF0,
    0x01, 0xE0, 0x01, 0x40, 0x00, 0x00,
];

static BITMAP_GUARD_FACING_TOP_LEFT_4: [u8; 54] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0xE0, 0x07, 0xE0, 0x06, 0xF0, 0x0F, 0xB0, 0x0B, 0xF8,
    0x0F, 0xF8, 0x0F, 0xBC, 0x1B, 0xEC, 0x1F, 0xFC, 0x1F, 0xF4, 0x1F, 0xEC, 0x1F, 0xF8, 0x1F, 0xFC,
    0x1B, 0xEC, 0x1F, 0xFC, 0x1D, 0xFC, 0x0F, 0xE8, 0x07, 0xF8, 0x0D, 0xF8, 0x07, 0xF0, 0x07, 0xF0,
    0x01, 0xE0, 0x00, 0x00, 0x00, 0x00,
];

static BITMAP_GUARD_FACING_BOTTOM_RIGHT_1: [u8; 58] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0xA0, 0x03, 0xE0, 0x0F, 0xF8, 0x0D, 0xB0, 0x1F, 0x7C,
    0x1F, 0xFC, 0x0D, 0xFC, 0x3B, 0xEE, 0x3E, 0xDA, 0x3D, 0xF6, 0x3F, 0xEE, 0x36, 0xFE, 0x2F, 0xFE,
    0x3F, 0xFE, 0x37, 0xFA, 0x2F, 0xF6, 0x1B, 0xEE, 0x1F, 0xD8, 0x1D, 0xF4, 0x1F, 0x7C, 0x0E, 0xF8,
    0x0D, 0xB0, 0x07, 0xF0, 0x03, 0xE0, 0x00, 0x00, 0x00, 0x00,
];

static BITMAP_GUARD_FACING_BOTTOM_RIGHT_2: [u8; 58] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0xE0, 0x03, 0xE0, 0x0F, 0xD8, 0x0F, 0xB8, 0x0F, 0xF8,
    0x17, 0xD8, 0x1F, 0xFC, 0x1F, 0xFC, 0x3F, 0xFE, 0x3F, 0xBE, 0x3F, 0xFC, 0x3F, 0xDA, 0x2F, 0xF6,
    0x1B, 0x6C, 0x3F, 0xFA, 0x3D, 0xFE, 0x1F, 0xEC, 0x1F, 0xFC, 0x0D, 0xFC, 0x0F, 0xF8, 0x0E, 0xF8,
    0x0F, 0xF8, 0x07, 0xF0, 0x03, 0xE0, 0x00, 0x00, 0x00, 0x00,
];

static BITMAP_GUARD_FACING_BOTTOM_RIGHT_3: [u8; 56] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xE0, 0x07, 0x60, 0x07, 0xF0, 0x0D, 0xB8, 0x0F, 0xF8,
    0x0F, 0xF8, 0x0D, 0xF4, 0x1F, 0xFC, 0x16, 0xD8, 0x0D, 0xF4, 0x1F, 0x6C, 0x1E, 0xF8, 0x1D, 0xFC,
    0x1F, 0xFC, 0x17, 0xF8, 0x1D, 0xBC, 0x1B, 0xEC, 0x0F, 0xF8, 0x0D, 0xB0, 0x0F, 0x68, 0x07, 0xD0,
    0x07, 0xF0, 0x03, 0xE0, 0x00, 0x00, 0x00, 0x00,
];

static BITMAP_GUARD_FACING_BOTTOM_RIGHT_4: [u8; 56] = [
    0x00, 0x00, 0x00, 0x00, 0x01, 0xC0, 0x03, 0xE0, 0x07, 0xF0, 0x07, 0xD0, 0x07, 0xF0, 0x0B, 0x78,
    0x0F, 0xD8, 0x0F, 0xF0, 0x0B, 0xE8, 0x0E, 0xF8, 0x0D, 0xFC, 0x1F, 0xFC, 0x1F, 0xF8, 0x1D, 0xFC,
    0x1F, 0xEC, 0x06, 0xF8, 0x0F, 0xB8, 0x0F, 0x68, 0x0E, 0xD8, 0x0F, 0xF0, 0x07, 0xF0, 0x06, 0xF0,
    0x07, 0xB0, 0x03, 0xE0, 0x00, 0xC0, 0x00, 0x00,
];

static BITMAP_COMMANDANT_FACING_TOP_LEFT_1: [u8; 56] = [
    0x00, 0x00, 0x00, 0x80, 0x03, 0xE0, 0x01, 0xE0, 0x07, 0xF0, 0x06, 0xF0, 0x0F, 0xB0, 0x0B, 0xF8,
    0x07, 0xF8, 0x0F, 0xB0, 0x0F, 0xE8, 0x0F, 0xD8, 0x1F, 0xBC, 0x1F, 0xFC, 0x16, 0xFC, 0x1D, 0xFC,
    0x1B, 0x7C, 0x0F, 0xF8, 0x0F, 0xB8, 0x0F, 0xF8, 0x07, 0xD8, 0x0D, 0xF8, 0x0F, 0xE8, 0x06, 0xF0,
    0x07, 0xF0, 0x03, 0xE0, 0x02, 0xE0, 0x00, 0x80,
];

static BITMAP_COMMANDANT_FACING_TOP_LEFT_2: [u8; 60] = [
    0x00, 0x00, 0x00, 0x80, 0x02, 0xC0, 0x07, 0xB0, 0x03, 0xE0, 0x06, 0xD8, 0x0F, 0xF8, 0x0F, 0x68,
    0x1F, 0xF8, 0x0F, 0xFC, 0x1F, 0x6C, 0x1F, 0xFC, 0x0D, 0xFC, 0x1B, 0x6C, 0x16, 0xFC, 0x0D, 0xF4,
    0x1B, 0x6C, 0x1F, 0xF8, 0x0D, 0xF4, 0x1B, 0xEC, 0x17, 0xF8, 0x0F, 0xB4, 0x1F, 0xEC, 0x0E, 0xD8,
    0x0F, 0xB0, 0x0F, 0xE8, 0x07, 0xF0, 0x05, 0xF0, 0x03, 0xE0, 0x00, 0x80,
];

static BITMAP_COMMANDANT_FACING_TOP_LEFT_3: [u8; 58] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xA0, 0x03, 0x60, 0x0F, 0xF8, 0x0F, 0xB8, 0x1F, 0xFC,
    0x1F, 0xFC, 0x0D, 0xF4, 0x1F, 0x7E, 0x3E, 0xFA, 0x2F, 0xFE, 0x3B, 0x7C, 0x3E, 0xFE, 0x3D, 0xBE,
    0x3B, 0xFC, 0x37, 0xFE, 0x2F, 0xFE, 0x3F, 0xFC, 0x16, 0xFC, 0x1D, 0xBC, 0x1B, 0x7C, 0x07, 0xF8,
    0x0F, 0xB8, 0x03, 0x60, 0x02, 0xE0, 0x00, 0x00, 0x00, 0x00,
];

static BITMAP_COMMANDANT_FACING_TOP_LEFT_4: [u8; 58] = [
    0x00, 0x00, 0x00, 0x00, 0x01, 0xC0, 0x03, 0xA0, 0x07, 0x70, 0x07, 0xF8, 0x0F, 0xF8, 0x1F, 0x7C,
    0x1E, 0xD8, 0x1F, 0xF4, 0x3B, 0xFE, 0x3F, 0xFE, 0x3D, 0xFE, 0x1F, 0xFC, 0x3E, 0xFE, 0x3F, 0xB6,
    0x1B, 0xEC, 0x36, 0xFA, 0x2D, 0xFE, 0x3F, 0xEE, 0x1E, 0xD8, 0x1F, 0xBC, 0x1F, 0x6C, 0x0E, 0xF8,
    0x0F, 0xF0, 0x03, 0x70, 0x02, 0xC0, 0x01, 0xC0, 0x00, 0x00,
];

static BITMAP_COMMANDANT_FACING_BOTTOM_RIGHT_1: [u8; 54] = [
    0x00, 0x00, 0x00, 0x00, 0x01, 0xC0, 0x01, 0xE0, 0x03, 0xF0, 0x0E, 0xF8, 0x0F, 0xF8, 0x0B, 0xF8,
    0x16, 0xFC, 0x1D, 0xFC, 0x1F, 0xFC, 0x17, 0xD8, 0x1D, 0xFC, 0x1F, 0xEC, 0x17, 0xFC, 0x0D, 0xBC,
    0x1B, 0x7C, 0x1E, 0xF8, 0x0F, 0xF4, 0x1F, 0x7C, 0x0F, 0xD8, 0x0F, 0xF8, 0x0B, 0xF8, 0x07, 0xD0,
    0x01, 0xE0, 0x01, 0xC0, 0x00, 0x00,
];

static BITMAP_COMMANDANT_FACING_BOTTOM_RIGHT_2: [u8; 56] = [
    0x00, 0x00, 0x00, 0x80, 0x03, 0xE0, 0x05, 0xF0, 0x03, 0xE0, 0x0E, 0xD8, 0x0D, 0xB0, 0x0F, 0xF8,
    0x1F, 0xDC, 0x1D, 0xBC, 0x1F, 0xFC, 0x1F, 0xD8, 0x0F, 0xFC, 0x1F, 0xEC, 0x16, 0xD8, 0x1F, 0xFC,
    0x1F, 0xEC, 0x16, 0xFC, 0x0F, 0xBC, 0x1F, 0x6C, 0x1F, 0xDC, 0x0F, 0xF8, 0x0F, 0x78, 0x0F, 0xF8,
    0x07, 0xF0, 0x03, 0xF0, 0x02, 0xC0, 0x00, 0x80,
];

static BITMAP_COMMANDANT_FACING_BOTTOM_RIGHT_3: [u8; 54] = [
    0x00, 0x00, 0x00, 0x80, 0x03, 0xC0, 0x07, 0xB0, 0x0F, 0xF8, 0x0E, 0xF8, 0x0F, 0xF8, 0x1B, 0xEC,
    0x17, 0xFC, 0x0D, 0xBC, 0x1F, 0xFC, 0x37, 0xFE, 0x3D, 0xBE, 0x3B, 0xEE, 0x3F, 0xFA, 0x2D, 0xFE,
    0x1B, 0x7E, 0x1F, 0xFC, 0x0F, 0xFC, 0x1F, 0x6C, 0x16, 0xF8, 0x0F, 0xF0, 0x0F, 0xF8, 0x06, 0xF8,
    0x07, 0xB0, 0x03, 0x60, 0x00, 0x80,
];

static BITMAP_COMMANDANT_FACING_BOTTOM_RIGHT_4: [u8; 56] = [
    0x00, 0x00, 0x00, 0x00, 0x01, 0xC0, 0x03, 0xE0, 0x03, 0xF0, 0x07, 0xD0, 0x07, 0xF0, 0x0B, 0x78,
    0x0E, 0xF8, 0x0F, 0xB0, 0x0F, 0xF8, 0x0E, 0xF8, 0x0D, 0xF8, 0x0F, 0x78, 0x06, 0xD8, 0x0D, 0xF0,
    0x0F, 0xE8, 0x06, 0xD8, 0x0F, 0xB0, 0x0F, 0x78, 0x0F, 0xD8, 0x0D, 0xB8, 0x07, 0x70, 0x06, 0xD0,
    0x05, 0xF0, 0x03, 0xE0, 0x00, 0xC0, 0x00, 0x00,
];

/// Sprite identifiers.
pub const SPRITE_STOVE: u8 = 0;
pub const SPRITE_CRATE: u8 = 1;
pub const SPRITE_PRISONER_FACING_AWAY_1: u8 = 2;
pub const SPRITE_PRISONER_FACING_TOWARDS_1: u8 = 6;
pub const SPRITE_CRAWL_FACING_TOWARDS_1: u8 = 10;
pub const SPRITE_CRAWL_FACING_AWAY_1: u8 = 12;
pub const SPRITE_DOG_FACING_AWAY_1: u8 = 14;
pub const SPRITE_DOG_FACING_TOWARDS_1: u8 = 18;
pub const SPRITE_GUARD_FACING_AWAY_1: u8 = 22;
pub const SPRITE_GUARD_FACING_TOWARDS_1: u8 = 26;
pub const SPRITE_COMMANDANT_FACING_AWAY_1: u8 = 30;
pub const SPRITE_COMMANDANT_FACING_TOWARDS_1: u8 = 34;
pub const SPRITES_LENGTH: usize = 38;

pub static SPRITES: [SpriteDef; SPRITES_LENGTH] = [
    SpriteDef { width_bytes: 3, height: 22, bitmap: &BITMAP_STOVE, mask: &MASK_STOVE },
    SpriteDef { width_bytes: 4, height: 24, bitmap: &BITMAP_CRATE, mask: &MASK_CRATE },
    SpriteDef { width_bytes: 3, height: 26, bitmap: &BITMAP_PRISONER_FACING_TOP_LEFT_1, mask: &MASK_VARIOUS_FACING_TOP_LEFT_1 },
    SpriteDef { width_bytes: 3, height: 27, bitmap: &BITMAP_PRISONER_FACING_TOP_LEFT_2, mask: &MASK_VARIOUS_FACING_TOP_LEFT_2 },
    SpriteDef { width_bytes: 3, height: 27, bitmap: &BITMAP_PRISONER_FACING_TOP_LEFT_3, mask: &MASK_VARIOUS_FACING_TOP_LEFT_3 },
    SpriteDef { width_bytes: 3, height: 27, bitmap: &BITMAP_PRISONER_FACING_TOP_LEFT_4, mask: &MASK_VARIOUS_FACING_TOP_LEFT_4 },
    SpriteDef { width_bytes: 3, height: 26, bitmap: &BITMAP_PRISONER_FACING_BOTTOM_RIGHT_1, mask: &MASK_VARIOUS_FACING_BOTTOM_RIGHT_1 },
    SpriteDef { width_bytes: 3, height: 28, bitmap: &BITMAP_PRISONER_FACING_BOTTOM_RIGHT_2, mask: &MASK_VARIOUS_FACING_BOTTOM_RIGHT_2 },
    SpriteDef { width_bytes: 3, height: 27, bitmap: &BITMAP_PRISONER_FACING_BOTTOM_RIGHT_3, mask: &MASK_VARIOUS_FACING_BOTTOM_RIGHT_3 },
    SpriteDef { width_bytes: 3, height: 27, bitmap: &BITMAP_PRISONER_FACING_BOTTOM_RIGHT_4, mask: &MASK_VARIOUS_FACING_BOTTOM_RIGHT_4 },
    SpriteDef { width_bytes: 4, height: 16, bitmap: &BITMAP_CRAWL_FACING_BOTTOM_LEFT_1, mask: &MASK_CRAWL_FACING_BOTTOM_LEFT },
    SpriteDef { width_bytes: 4, height: 15, bitmap: &BITMAP_CRAWL_FACING_BOTTOM_LEFT_2, mask: &MASK_CRAWL_FACING_BOTTOM_LEFT },
    SpriteDef { width_bytes: 4, height: 16, bitmap: &BITMAP_CRAWL_FACING_TOP_LEFT_1, mask: &MASK_CRAWL_FACING_TOP_LEFT },
    SpriteDef { width_bytes: 4, height: 16, bitmap: &BITMAP_CRAWL_FACING_TOP_LEFT_2, mask: &MASK_CRAWL_FACING_TOP_LEFT },
    SpriteDef { width_bytes: 4, height: 16, bitmap: &BITMAP_DOG_FACING_TOP_LEFT_1, mask: &MASK_DOG_FACING_TOP_LEFT },
    SpriteDef { width_bytes: 4, height: 16, bitmap: &BITMAP_DOG_FACING_TOP_LEFT_2, mask: &MASK_DOG_FACING_TOP_LEFT },
    SpriteDef { width_bytes: 4, height: 15, bitmap: &BITMAP_DOG_FACING_TOP_LEFT_3, mask: &MASK_DOG_FACING_TOP_LEFT },
    SpriteDef { width_bytes: 4, height: 15, bitmap: &BITMAP_DOG_FACING_TOP_LEFT_4, mask: &MASK_DOG_FACING_TOP_LEFT },
    SpriteDef { width_bytes: 4, height: 14, bitmap: &BITMAP_DOG_FACING_BOTTOM_RIGHT_1, mask: &MASK_DOG_FACING_BOTTOM_RIGHT },
    SpriteDef { width_bytes: 4, height: 15, bitmap: &BITMAP_DOG_FACING_BOTTOM_RIGHT_2, mask: &MASK_DOG_FACING_BOTTOM_RIGHT },
    SpriteDef { width_bytes: 4, height: 13, bitmap: &BITMAP_DOG_FACING_BOTTOM_RIGHT_3, mask: &MASK_DOG_FACING_BOTTOM_RIGHT },
    SpriteDef { width_bytes: 4, height: 14, bitmap: &BITMAP_DOG_FACING_BOTTOM_RIGHT_4, mask: &MASK_DOG_FACING_BOTTOM_RIGHT },
    SpriteDef { width_bytes: 3, height: 27, bitmap: &BITMAP_GUARD_FACING_TOP_LEFT_1, mask: &MASK_VARIOUS_FACING_TOP_LEFT_1 },
    SpriteDef { width_bytes: 3, height: 29, bitmap: &BITMAP_GUARD_FACING_TOP_LEFT_2, mask: &MASK_VARIOUS_FACING_TOP_LEFT_2 },
    SpriteDef { width_bytes: 3, height: 27, bitmap: &BITMAP_GUARD_FACING_TOP_LEFT_3, mask: &MASK_VARIOUS_FACING_TOP_LEFT_3 },
    SpriteDef { width_bytes: 3, height: 27, bitmap: &BITMAP_GUARD_FACING_TOP_LEFT_4, mask: &MASK_VARIOUS_FACING_TOP_LEFT_4 },
    SpriteDef { width_bytes: 3, height: 29, bitmap: &BITMAP_GUARD_FACING_BOTTOM_RIGHT_1, mask: &MASK_VARIOUS_FACING_BOTTOM_RIGHT_1 },
    SpriteDef { width_bytes: 3, height: 29, bitmap: &BITMAP_GUARD_FACING_BOTTOM_RIGHT_2, mask: &MASK_VARIOUS_FACING_BOTTOM_RIGHT_2 },
    SpriteDef { width_bytes: 3, height: 28, bitmap: &BITMAP_GUARD_FACING_BOTTOM_RIGHT_3, mask: &MASK_VARIOUS_FACING_BOTTOM_RIGHT_3 },
    SpriteDef { width_bytes: 3, height: 28, bitmap: &BITMAP_GUARD_FACING_BOTTOM_RIGHT_4, mask: &MASK_VARIOUS_FACING_BOTTOM_RIGHT_4 },
    SpriteDef { width_bytes: 3, height: 28, bitmap: &BITMAP_COMMANDANT_FACING_TOP_LEFT_1, mask: &MASK_VARIOUS_FACING_TOP_LEFT_1 },
    SpriteDef { width_bytes: 3, height: 30, bitmap: &BITMAP_COMMANDANT_FACING_TOP_LEFT_2, mask: &MASK_VARIOUS_FACING_TOP_LEFT_2 },
    SpriteDef { width_bytes: 3, height: 29, bitmap: &BITMAP_COMMANDANT_FACING_TOP_LEFT_3, mask: &MASK_VARIOUS_FACING_TOP_LEFT_3 },
    SpriteDef { width_bytes: 3, height: 29, bitmap: &BITMAP_COMMANDANT_FACING_TOP_LEFT_4, mask: &MASK_VARIOUS_FACING_TOP_LEFT_4 },
    SpriteDef { width_bytes: 3, height: 27, bitmap: &BITMAP_COMMANDANT_FACING_BOTTOM_RIGHT_1, mask: &MASK_VARIOUS_FACING_BOTTOM_RIGHT_1 },
    SpriteDef { width_bytes: 3, height: 28, bitmap: &BITMAP_COMMANDANT_FACING_BOTTOM_RIGHT_2, mask: &MASK_VARIOUS_FACING_BOTTOM_RIGHT_2 },
    SpriteDef { width_bytes: 3, height: 27, bitmap: &BITMAP_COMMANDANT_FACING_BOTTOM_RIGHT_3, mask: &MASK_VARIOUS_FACING_BOTTOM_RIGHT_3 },
    SpriteDef { width_bytes: 3, height: 28, bitmap: &BITMAP_COMMANDANT_FACING_BOTTOM_RIGHT_4, mask: &MASK_VARIOUS_FACING_BOTTOM_RIGHT_4 },
];
