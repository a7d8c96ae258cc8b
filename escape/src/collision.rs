/*************************************************************************

This file is part of a recreation of 'The Great Escape'
Game copyright (c) 1986 Ocean Software Ltd. and Denton Designs Ltd.

Rust port maintains original logic and behaviour.

**************************************************************************/

//! Contact tests: walls and fences, room interiors, other characters,
//! and the per-step `touch` gate that animation runs every frame.

use crate::constants::*;
use crate::data::walls::WALLS;
use crate::doors;
use crate::game_loop;
use crate::rooms::ROOM_DIMENSIONS;
use crate::state::State;
use crate::types::*;

/// Diagonal movement input for a facing direction.
pub fn input_for_direction(direction: Direction) -> u8 {
    match direction {
        Direction::TopLeft => INPUT_UP_LEFT,
        Direction::TopRight => INPUT_UP_RIGHT,
        Direction::BottomRight => INPUT_DOWN_RIGHT,
        Direction::BottomLeft => INPUT_DOWN_LEFT,
    }
}

/// Test the candidate position in `saved_pos` against the world's solid
/// geometry. True means blocked.
pub fn bounds_check(state: &State, index: usize) -> bool {
    let vischar = &state.vischars[index];

    if vischar.room == ROOM_0_OUTDOORS {
        let pos = state.saved_pos.scale_down();
        for wall in WALLS.iter() {
            if pos.u >= wall.minx
                && pos.u < wall.maxx
                && pos.v >= wall.miny
                && pos.v < wall.maxy
                && pos.w >= wall.minheight
                && pos.w < wall.maxheight
            {
                return true;
            }
        }
        return false;
    }

    // Interiors: stay inside the room rectangle and outside the
    // furniture boundaries.
    let pos = state.saved_pos;
    let dims = &ROOM_DIMENSIONS[state.roomdef_dimensions_index as usize];
    if pos.u < i16::from(dims.x0)
        || pos.u >= i16::from(dims.x1)
        || pos.v < i16::from(dims.y0)
        || pos.v >= i16::from(dims.y1)
    {
        return true;
    }
    for i in 0..state.roomdef_bounds_count as usize {
        let bounds = &state.roomdef_bounds[i];
        if pos.u >= i16::from(bounds.x0)
            && pos.u < i16::from(bounds.x1)
            && pos.v >= i16::from(bounds.y0)
            && pos.v < i16::from(bounds.y1)
        {
            return true;
        }
    }
    false
}

/// Test the candidate position against the other vischars. True means
/// the move is blocked this frame.
pub fn collision(state: &mut State, index: usize) -> Result<bool, Interrupt> {
    let candidate = state.saved_pos;
    let me = state.vischars[index];

    for other_index in 0..VISCHARS_LENGTH {
        if other_index == index {
            continue;
        }
        let other = state.vischars[other_index];
        if other.is_empty() || other.flags.no_collide {
            continue;
        }
        if other.room != me.room {
            continue;
        }

        // Overlap within four units on the ground, twenty-four in height.
        if (candidate.u - other.mi.pos.u).abs() >= 4
            || (candidate.v - other.mi.pos.v).abs() >= 4
            || (candidate.w - other.mi.pos.w).abs() >= 24
        {
            continue;
        }

        // A pursuer touching the hero ends the chase, one way or the
        // other: a standing bribe buys him off, otherwise it's solitary.
        if other_index == HERO_VISCHAR && me.flags.pursuit == Pursuit::Pursue {
            if state.bribed_character != CHARACTER_NONE {
                game_loop::accept_bribe(state, index);
                return Ok(true);
            }
            game_loop::solitary(state)?;
            return Ok(true);
        }

        // Pushable stoves and the crate give way instead of blocking.
        if (CHARACTER_26_STOVE_1..=CHARACTER_28_CRATE).contains(&other.character) {
            push_movable_item(state, index, other_index);
            return Ok(true);
        }

        // A head-on meeting stalls both parties; each turns back the
        // way it came.
        if other.direction == me.direction.opposite() {
            let new_input = input_for_direction(me.direction.opposite()) | INPUT_KICK;
            let other_input = input_for_direction(other.direction.opposite()) | INPUT_KICK;
            {
                let vischar = &mut state.vischars[index];
                vischar.counter_and_flags.counter = 5;
                vischar.input = new_input;
            }
            {
                let vischar = &mut state.vischars[other_index];
                vischar.counter_and_flags.counter = 5;
                vischar.input = other_input;
            }
            return Ok(true);
        }

        return Ok(true);
    }
    Ok(false)
}

// Push window half-extent around a movable item's start position.
const PUSH_RANGE: i16 = 32;

/// Shove a stove or crate along the pusher's axis of approach, clamped
/// to its home window.
fn push_movable_item(state: &mut State, pusher: usize, movable: usize) {
    let direction = state.vischars[pusher].direction;
    let character = state.vischars[movable].character;
    let slot = crate::vischar::MOVABLE_ITEM_CHARACTERS
        .iter()
        .position(|&c| c == character)
        .unwrap_or(0);
    let centre = crate::vischar::movable_item_home(slot);

    let pos = &mut state.vischars[movable].mi.pos;
    let (du, dv): (i16, i16) = match direction {
        Direction::TopLeft => (-1, 0),
        Direction::BottomRight => (1, 0),
        Direction::TopRight => (0, 1),
        Direction::BottomLeft => (0, -1),
    };
    pos.u = (pos.u + du).clamp(centre.u - PUSH_RANGE, centre.u + PUSH_RANGE);
    pos.v = (pos.v + dv).clamp(centre.v - PUSH_RANGE, centre.v + PUSH_RANGE);
}

/// The per-step contact gate. Validates the candidate position in
/// `saved_pos`; on acceptance commits it and the new sprite.
pub fn touch(state: &mut State, index: usize, sprite_index: u8) -> Result<bool, Interrupt> {
    {
        let vischar = &mut state.vischars[index];
        vischar.counter_and_flags.dont_move_map = true;
        vischar.counter_and_flags.drawable = true;
    }

    // The hero walking under route control handles doors on contact.
    if index == HERO_VISCHAR && state.hero_is_automatic() {
        if state.vischars[HERO_VISCHAR].room == ROOM_0_OUTDOORS {
            doors::door_handling(state)?;
        } else {
            doors::door_handling_interior(state)?;
        }
    }

    let cutting_wire = index == HERO_VISCHAR && state.vischars[index].flags.cutting_wire;
    if !cutting_wire && bounds_check(state, index) {
        return Ok(false);
    }

    if state.vischars[index].character <= CHARACTER_25_PRISONER_6 && collision(state, index)? {
        return Ok(false);
    }

    let saved = state.saved_pos;
    let vischar = &mut state.vischars[index];
    vischar.counter_and_flags.dont_move_map = false;
    vischar.mi.pos = saved;
    vischar.mi.sprite_index = sprite_index;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_check_outdoor_wall() {
        let mut state = State::new().unwrap();
        state.vischars[0].room = ROOM_0_OUTDOORS;

        // Inside hut 1's footprint, at ground height.
        state.saved_pos = MapPos8::new(110, 90, 0).scale_up();
        assert!(bounds_check(&state, 0));

        // Same spot but above the wall's height band.
        state.saved_pos = MapPos8::new(110, 90, 50).scale_up();
        assert!(!bounds_check(&state, 0));

        // Open ground.
        state.saved_pos = MapPos8::new(100, 80, 0).scale_up();
        assert!(!bounds_check(&state, 0));
    }

    #[test]
    fn test_bounds_check_interior() {
        let mut state = State::new().unwrap();
        state.room_index = ROOM_2_HUT2LEFT;
        crate::rooms::setup_room(&mut state);
        state.vischars[0].room = ROOM_2_HUT2LEFT;

        // Mid-room.
        state.saved_pos = MapPos16::new(44, 60, 2);
        assert!(!bounds_check(&state, 0));

        // Outside the room rectangle.
        state.saved_pos = MapPos16::new(2, 2, 2);
        assert!(bounds_check(&state, 0));

        // Inside the bed boundary (48..64 x 43..56).
        state.saved_pos = MapPos16::new(50, 45, 2);
        assert!(bounds_check(&state, 0));
    }

    #[test]
    fn test_head_on_collision_stalls_both() {
        let mut state = State::new().unwrap();

        // Vischar 1 walks bottom-right into vischar 2 walking top-left.
        state.vischars[1].character = CHARACTER_20_PRISONER_1;
        state.vischars[1].room = ROOM_0_OUTDOORS;
        state.vischars[1].direction = Direction::BottomRight;
        state.vischars[1].mi.pos = MapPos16::new(50, 50, 0);
        state.vischars[2].character = CHARACTER_21_PRISONER_2;
        state.vischars[2].room = ROOM_0_OUTDOORS;
        state.vischars[2].direction = Direction::TopLeft;
        state.vischars[2].mi.pos = MapPos16::new(52, 50, 0);

        state.saved_pos = state.vischars[1].mi.pos;
        let blocked = collision(&mut state, 1).unwrap();
        assert!(blocked);

        assert_eq!(state.vischars[1].counter_and_flags.counter, 5);
        assert_eq!(state.vischars[2].counter_and_flags.counter, 5);
        assert_eq!(state.vischars[1].input, INPUT_UP_LEFT | INPUT_KICK);
        assert_eq!(state.vischars[2].input, INPUT_DOWN_RIGHT | INPUT_KICK);
    }

    #[test]
    fn test_no_collide_flag_skips() {
        let mut state = State::new().unwrap();
        state.vischars[1].character = CHARACTER_20_PRISONER_1;
        state.vischars[1].room = ROOM_0_OUTDOORS;
        state.vischars[1].mi.pos = MapPos16::new(50, 50, 0);
        state.vischars[2].character = CHARACTER_21_PRISONER_2;
        state.vischars[2].room = ROOM_0_OUTDOORS;
        state.vischars[2].mi.pos = MapPos16::new(52, 50, 0);
        state.vischars[2].flags.no_collide = true;

        state.saved_pos = state.vischars[1].mi.pos;
        assert!(!collision(&mut state, 1).unwrap());
    }

    #[test]
    fn test_pushing_the_crate() {
        let mut state = State::new().unwrap();
        crate::vischar::reset_movable_items(&mut state);

        state.vischars[1].character = CHARACTER_1_GUARD_1;
        state.vischars[1].room = ROOM_9_CRATE;
        state.vischars[1].direction = Direction::BottomRight;
        state.vischars[3].character = CHARACTER_28_CRATE;
        state.vischars[3].room = ROOM_9_CRATE;
        state.vischars[3].mi.pos = MapPos16::new(50, 50, 0);

        state.saved_pos = MapPos16::new(51, 50, 0);
        let before = state.vischars[3].mi.pos.u;
        assert!(collision(&mut state, 1).unwrap());
        assert_eq!(state.vischars[3].mi.pos.u, before + 1);
    }
}
