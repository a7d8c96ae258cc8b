/*************************************************************************

This file is part of a recreation of 'The Great Escape'
Game copyright (c) 1986 Ocean Software Ltd. and Denton Designs Ltd.

Rust port maintains original logic and behaviour.

**************************************************************************/

//! The foreground mask buffer.
//!
//! Before a sprite is composited, every scenery mask that could overlap
//! it is ANDed into a small per-drawable buffer: 0 bits hide the sprite
//! behind scenery, 1 bits let it show. A mask only applies when the
//! drawable is behind the mask's anchor point, meaning its u is greater
//! and its v greater-or-equal.

use crate::constants::*;
use crate::data::masks::{EXTERIOR_MASKS, INTERIOR_MASKS, MASK_SHAPES, MASK_TILES};
use crate::render::PlotContext;
use crate::rooms::RleStream;
use crate::state::State;
use crate::types::Mask;

/// Rebuild the mask buffer for one drawable.
pub fn render_mask_buffer(state: &mut State, ctx: &PlotContext) {
    state.mask_buffer.fill(0xFF);

    if state.room_index == ROOM_0_OUTDOORS {
        for mask in EXTERIOR_MASKS.iter() {
            apply_mask(state, ctx, mask);
        }
    } else {
        for i in 0..state.interior_mask_refs_count as usize {
            let mask = &INTERIOR_MASKS[state.interior_mask_refs[i] as usize];
            apply_mask(state, ctx, mask);
        }
    }
}

fn apply_mask(state: &mut State, ctx: &PlotContext, mask: &Mask) {
    // Cull against the mask's projected bounds. Everything here is in
    // scaled-down (tile) units: one tile is one byte column.
    let sprite_x0 = ctx.x;
    let sprite_x1 = ctx.x + u16::from(ctx.width_bytes) - 1;
    let sprite_y0 = ctx.y;
    let sprite_y1 = ctx.y + u16::from(ctx.height.div_ceil(8)) - 1;
    if sprite_x1 < u16::from(mask.bounds.x0)
        || sprite_x0 > u16::from(mask.bounds.x1)
        || sprite_y1 < u16::from(mask.bounds.y0)
        || sprite_y0 > u16::from(mask.bounds.y1)
    {
        return;
    }

    // The mask only hides what stands behind its anchor.
    if !(ctx.world.u > mask.pos.u && ctx.world.v >= mask.pos.v) {
        return;
    }

    let shape = MASK_SHAPES[mask.index as usize];
    let shape_width = shape[0] as usize;
    let shape_height = shape[1] as usize;
    let mut stream = RleStream::new(&shape[2..]);

    // Shape position relative to the sprite; tiles outside the buffer
    // decode and drop, which is the clipped-prefix skip.
    let shape_col = i32::from(mask.bounds.x0) - i32::from(sprite_x0);
    let shape_row = i32::from(mask.bounds.y0) - i32::from(sprite_y0);

    for tile_row in 0..shape_height {
        for tile_col in 0..shape_width {
            let tile = stream.next_byte() as usize;
            let dst_col = shape_col + tile_col as i32;
            let dst_row = (shape_row + tile_row as i32) * 8;
            if !(0..MASK_BUFFER_WIDTHBYTES as i32).contains(&dst_col) {
                continue;
            }
            let glyph = &MASK_TILES[tile % MASK_TILES.len()];
            for (y, bits) in glyph.iter().enumerate() {
                let row = dst_row + y as i32;
                if !(0..(MASK_BUFFER_HEIGHT * 8) as i32).contains(&row) {
                    continue;
                }
                let index = row as usize * MASK_BUFFER_WIDTHBYTES + dst_col as usize;
                state.mask_buffer[index] &= bits;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MapPos8;

    fn context_at(x: u16, y: u16, world: MapPos8) -> PlotContext {
        PlotContext {
            x,
            y,
            width_bytes: 3,
            height: 28,
            world,
            sprite: 0,
            is_item: false,
            flip: false,
            clip_y0: 0,
            visible_height: 28,
            window_x: 0,
            window_y: 0,
        }
    }

    #[test]
    fn test_mask_buffer_defaults_open() {
        let mut state = State::new().unwrap();
        state.room_index = ROOM_0_OUTDOORS;
        // A drawable far outside every mask's bounds keeps a fully open
        // buffer.
        let ctx = context_at(2000, 2000, MapPos8::new(255, 255, 0));
        render_mask_buffer(&mut state, &ctx);
        assert!(state.mask_buffer.iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_mask_applies_only_behind() {
        let mut state = State::new().unwrap();
        state.room_index = ROOM_0_OUTDOORS;
        let mask = &EXTERIOR_MASKS[0];

        // In front of every anchor: nothing masked.
        let front = context_at(
            u16::from(mask.bounds.x0),
            u16::from(mask.bounds.y0),
            MapPos8::new(0, 0, 0),
        );
        render_mask_buffer(&mut state, &front);
        assert!(state.mask_buffer.iter().all(|&b| b == 0xFF));

        // Behind the anchor: the shape bites into the buffer.
        let behind = context_at(
            u16::from(mask.bounds.x0),
            u16::from(mask.bounds.y0),
            MapPos8::new(mask.pos.u + 1, mask.pos.v, 0),
        );
        render_mask_buffer(&mut state, &behind);
        assert!(state.mask_buffer.iter().any(|&b| b != 0xFF));
    }
}
