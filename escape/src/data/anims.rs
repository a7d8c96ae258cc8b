/*************************************************************************

This file is part of a recreation of 'The Great Escape'
Game copyright (c) 1986 Ocean Software Ltd. and Denton Designs Ltd.

Rust port maintains original logic and behaviour.

**************************************************************************/

//! Animation tables.
//!
//! Twenty-four animations cover walk, turn, wait, crawl, crawl-turn and
//! crawl-wait for each facing direction. The selection table maps
//! (facing + crawl, input) to an animation index; bit 7 selects reverse
//! playback, which also swaps the from/to facings.

use crate::types::{Anim, AnimFrame, Direction, ANIM_NO_MAP_DIRECTION};

use Direction::{BottomLeft, BottomRight, TopLeft, TopRight};

static FRAMES_WALK_TOPLEFT: [AnimFrame; 4] = [
    AnimFrame { du: -2, dv: 0, dw: 0, sprite: 0x00 },
    AnimFrame { du: -2, dv: 0, dw: 0, sprite: 0x01 },
    AnimFrame { du: -2, dv: 0, dw: 0, sprite: 0x02 },
    AnimFrame { du: -2, dv: 0, dw: 0, sprite: 0x03 },
];
static FRAMES_WALK_TOPRIGHT: [AnimFrame; 4] = [
    AnimFrame { du: 0, dv: 2, dw: 0, sprite: 0x80 },
    AnimFrame { du: 0, dv: 2, dw: 0, sprite: 0x81 },
    AnimFrame { du: 0, dv: 2, dw: 0, sprite: 0x82 },
    AnimFrame { du: 0, dv: 2, dw: 0, sprite: 0x83 },
];
static FRAMES_WALK_BOTTOMRIGHT: [AnimFrame; 4] = [
    AnimFrame { du: 2, dv: 0, dw: 0, sprite: 0x04 },
    AnimFrame { du: 2, dv: 0, dw: 0, sprite: 0x05 },
    AnimFrame { du: 2, dv: 0, dw: 0, sprite: 0x06 },
    AnimFrame { du: 2, dv: 0, dw: 0, sprite: 0x07 },
];
static FRAMES_WALK_BOTTOMLEFT: [AnimFrame; 4] = [
    AnimFrame { du: 0, dv: -2, dw: 0, sprite: 0x84 },
    AnimFrame { du: 0, dv: -2, dw: 0, sprite: 0x85 },
    AnimFrame { du: 0, dv: -2, dw: 0, sprite: 0x86 },
    AnimFrame { du: 0, dv: -2, dw: 0, sprite: 0x87 },
];
static FRAMES_TURN_TOPLEFT_TO_TOPRIGHT: [AnimFrame; 2] = [
    AnimFrame { du: 0, dv: 0, dw: 0, sprite: 0x00 },
    AnimFrame { du: 0, dv: 0, dw: 0, sprite: 0x80 },
];
static FRAMES_TURN_TOPRIGHT_TO_BOTTOMRIGHT: [AnimFrame; 2] = [
    AnimFrame { du: 0, dv: 0, dw: 0, sprite: 0x80 },
    AnimFrame { du: 0, dv: 0, dw: 0, sprite: 0x04 },
];
static FRAMES_TURN_BOTTOMRIGHT_TO_BOTTOMLEFT: [AnimFrame; 2] = [
    AnimFrame { du: 0, dv: 0, dw: 0, sprite: 0x04 },
    AnimFrame { du: 0, dv: 0, dw: 0, sprite: 0x84 },
];
static FRAMES_TURN_BOTTOMLEFT_TO_TOPLEFT: [AnimFrame; 2] = [
    AnimFrame { du: 0, dv: 0, dw: 0, sprite: 0x84 },
    AnimFrame { du: 0, dv: 0, dw: 0, sprite: 0x00 },
];
static FRAMES_WAIT_TOPLEFT: [AnimFrame; 1] = [
    AnimFrame { du: 0, dv: 0, dw: 0, sprite: 0x00 },
];
static FRAMES_WAIT_TOPRIGHT: [AnimFrame; 1] = [
    AnimFrame { du: 0, dv: 0, dw: 0, sprite: 0x80 },
];
static FRAMES_WAIT_BOTTOMRIGHT: [AnimFrame; 1] = [
    AnimFrame { du: 0, dv: 0, dw: 0, sprite: 0x04 },
];
static FRAMES_WAIT_BOTTOMLEFT: [AnimFrame; 1] = [
    AnimFrame { du: 0, dv: 0, dw: 0, sprite: 0x84 },
];
static FRAMES_CRAWL_TOPLEFT: [AnimFrame; 2] = [
    AnimFrame { du: -1, dv: 0, dw: 0, sprite: 0x0A },
    AnimFrame { du: -1, dv: 0, dw: 0, sprite: 0x0B },
];
static FRAMES_CRAWL_TOPRIGHT: [AnimFrame; 2] = [
    AnimFrame { du: 0, dv: 1, dw: 0, sprite: 0x8A },
    AnimFrame { du: 0, dv: 1, dw: 0, sprite: 0x8B },
];
static FRAMES_CRAWL_BOTTOMRIGHT: [AnimFrame; 2] = [
    AnimFrame { du: 1, dv: 0, dw: 0, sprite: 0x08 },
    AnimFrame { du: 1, dv: 0, dw: 0, sprite: 0x09 },
];
static FRAMES_CRAWL_BOTTOMLEFT: [AnimFrame; 2] = [
    AnimFrame { du: 0, dv: -1, dw: 0, sprite: 0x88 },
    AnimFrame { du: 0, dv: -1, dw: 0, sprite: 0x89 },
];
static FRAMES_CRAWL_TURN_TOPLEFT_TO_TOPRIGHT: [AnimFrame; 2] = [
    AnimFrame { du: 0, dv: 0, dw: 0, sprite: 0x0A },
    AnimFrame { du: 0, dv: 0, dw: 0, sprite: 0x8A },
];
static FRAMES_CRAWL_TURN_TOPRIGHT_TO_BOTTOMRIGHT: [AnimFrame; 2] = [
    AnimFrame { du: 0, dv: 0, dw: 0, sprite: 0x8A },
    AnimFrame { du: 0, dv: 0, dw: 0, sprite: 0x08 },
];
static FRAMES_CRAWL_TURN_BOTTOMRIGHT_TO_BOTTOMLEFT: [AnimFrame; 2] = [
    AnimFrame { du: 0, dv: 0, dw: 0, sprite: 0x08 },
    AnimFrame { du: 0, dv: 0, dw: 0, sprite: 0x88 },
];
static FRAMES_CRAWL_TURN_BOTTOMLEFT_TO_TOPLEFT: [AnimFrame; 2] = [
    AnimFrame { du: 0, dv: 0, dw: 0, sprite: 0x88 },
    AnimFrame { du: 0, dv: 0, dw: 0, sprite: 0x0A },
];
static FRAMES_CRAWL_WAIT_TOPLEFT: [AnimFrame; 1] = [
    AnimFrame { du: 0, dv: 0, dw: 0, sprite: 0x0A },
];
static FRAMES_CRAWL_WAIT_TOPRIGHT: [AnimFrame; 1] = [
    AnimFrame { du: 0, dv: 0, dw: 0, sprite: 0x8A },
];
static FRAMES_CRAWL_WAIT_BOTTOMRIGHT: [AnimFrame; 1] = [
    AnimFrame { du: 0, dv: 0, dw: 0, sprite: 0x08 },
];
static FRAMES_CRAWL_WAIT_BOTTOMLEFT: [AnimFrame; 1] = [
    AnimFrame { du: 0, dv: 0, dw: 0, sprite: 0x88 },
];

pub static ANIMS: [Anim; 24] = [
    Anim { nframes: 4, from: TopLeft, to: TopLeft, map_direction: 0, frames: &FRAMES_WALK_TOPLEFT },
    Anim { nframes: 4, from: TopRight, to: TopRight, map_direction: 1, frames: &FRAMES_WALK_TOPRIGHT },
    Anim { nframes: 4, from: BottomRight, to: BottomRight, map_direction: 2, frames: &FRAMES_WALK_BOTTOMRIGHT },
    Anim { nframes: 4, from: BottomLeft, to: BottomLeft, map_direction: 3, frames: &FRAMES_WALK_BOTTOMLEFT },
    Anim { nframes: 2, from: TopLeft, to: TopRight, map_direction: ANIM_NO_MAP_DIRECTION, frames: &FRAMES_TURN_TOPLEFT_TO_TOPRIGHT },
    Anim { nframes: 2, from: TopRight, to: BottomRight, map_direction: ANIM_NO_MAP_DIRECTION, frames: &FRAMES_TURN_TOPRIGHT_TO_BOTTOMRIGHT },
    Anim { nframes: 2, from: BottomRight, to: BottomLeft, map_direction: ANIM_NO_MAP_DIRECTION, frames: &FRAMES_TURN_BOTTOMRIGHT_TO_BOTTOMLEFT },
    Anim { nframes: 2, from: BottomLeft, to: TopLeft, map_direction: ANIM_NO_MAP_DIRECTION, frames: &FRAMES_TURN_BOTTOMLEFT_TO_TOPLEFT },
    Anim { nframes: 1, from: TopLeft, to: TopLeft, map_direction: ANIM_NO_MAP_DIRECTION, frames: &FRAMES_WAIT_TOPLEFT },
    Anim { nframes: 1, from: TopRight, to: TopRight, map_direction: ANIM_NO_MAP_DIRECTION, frames: &FRAMES_WAIT_TOPRIGHT },
    Anim { nframes: 1, from: BottomRight, to: BottomRight, map_direction: ANIM_NO_MAP_DIRECTION, frames: &FRAMES_WAIT_BOTTOMRIGHT },
    Anim { nframes: 1, from: BottomLeft, to: BottomLeft, map_direction: ANIM_NO_MAP_DIRECTION, frames: &FRAMES_WAIT_BOTTOMLEFT },
    Anim { nframes: 2, from: TopLeft, to: TopLeft, map_direction: ANIM_NO_MAP_DIRECTION, frames: &FRAMES_CRAWL_TOPLEFT },
    Anim { nframes: 2, from: TopRight, to: TopRight, map_direction: ANIM_NO_MAP_DIRECTION, frames: &FRAMES_CRAWL_TOPRIGHT },
    Anim { nframes: 2, from: BottomRight, to: BottomRight, map_direction: ANIM_NO_MAP_DIRECTION, frames: &FRAMES_CRAWL_BOTTOMRIGHT },
    Anim { nframes: 2, from: BottomLeft, to: BottomLeft, map_direction: ANIM_NO_MAP_DIRECTION, frames: &FRAMES_CRAWL_BOTTOMLEFT },
    Anim { nframes: 2, from: TopLeft, to: TopRight, map_direction: ANIM_NO_MAP_DIRECTION, frames: &FRAMES_CRAWL_TURN_TOPLEFT_TO_TOPRIGHT },
    Anim { nframes: 2, from: TopRight, to: BottomRight, map_direction: ANIM_NO_MAP_DIRECTION, frames: &FRAMES_CRAWL_TURN_TOPRIGHT_TO_BOTTOMRIGHT },
    Anim { nframes: 2, from: BottomRight, to: BottomLeft, map_direction: ANIM_NO_MAP_DIRECTION, frames: &FRAMES_CRAWL_TURN_BOTTOMRIGHT_TO_BOTTOMLEFT },
    Anim { nframes: 2, from: BottomLeft, to: TopLeft, map_direction: ANIM_NO_MAP_DIRECTION, frames: &FRAMES_CRAWL_TURN_BOTTOMLEFT_TO_TOPLEFT },
    Anim { nframes: 1, from: TopLeft, to: TopLeft, map_direction: ANIM_NO_MAP_DIRECTION, frames: &FRAMES_CRAWL_WAIT_TOPLEFT },
    Anim { nframes: 1, from: TopRight, to: TopRight, map_direction: ANIM_NO_MAP_DIRECTION, frames: &FRAMES_CRAWL_WAIT_TOPRIGHT },
    Anim { nframes: 1, from: BottomRight, to: BottomRight, map_direction: ANIM_NO_MAP_DIRECTION, frames: &FRAMES_CRAWL_WAIT_BOTTOMRIGHT },
    Anim { nframes: 1, from: BottomLeft, to: BottomLeft, map_direction: ANIM_NO_MAP_DIRECTION, frames: &FRAMES_CRAWL_WAIT_BOTTOMLEFT },
];

/// Animation selection, indexed by `[facing | crawl << 2][input]`.
/// Inputs 0..=8 are none, up, down, left, up+left, down+left, right,
/// up+right and down+right. Bit 7 plays the animation in reverse.
pub static ANIMINDICES: [[u8; 9]; 8] = [
    [0x08, 0x00, 0x80, 0x00, 0x00, 0x87, 0x80, 0x04, 0x80],
    [0x09, 0x01, 0x81, 0x81, 0x84, 0x81, 0x01, 0x01, 0x05],
    [0x0A, 0x82, 0x02, 0x82, 0x82, 0x06, 0x02, 0x85, 0x02],
    [0x0B, 0x83, 0x03, 0x03, 0x07, 0x03, 0x83, 0x83, 0x86],
    [0x14, 0x0C, 0x8C, 0x0C, 0x0C, 0x93, 0x8C, 0x10, 0x8C],
    [0x15, 0x0D, 0x8D, 0x8D, 0x90, 0x8D, 0x0D, 0x0D, 0x11],
    [0x16, 0x8E, 0x0E, 0x8E, 0x8E, 0x12, 0x0E, 0x91, 0x0E],
    [0x17, 0x8F, 0x0F, 0x0F, 0x13, 0x0F, 0x8F, 0x8F, 0x92],
];
