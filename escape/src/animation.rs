/*************************************************************************

This file is part of a recreation of 'The Great Escape'
Game copyright (c) 1986 Ocean Software Ltd. and Denton Designs Ltd.

Rust port maintains original logic and behaviour.

**************************************************************************/

//! The animation engine: frame selection and stepping.
//!
//! Each tick every vischar advances one animation frame. The frame's
//! movement delta makes a candidate position which the contact tests
//! must accept before anything is committed; a rejected step leaves both
//! the position and the frame untouched.

use crate::constants::*;
use crate::data::anims::{ANIMINDICES, ANIMS};
use crate::state::State;
use crate::types::*;

/// Pick a fresh animation from the selection table.
fn select_anim(state: &mut State, index: usize) {
    let vischar = &state.vischars[index];
    let input = (vischar.input & !INPUT_KICK) as usize;
    debug_assert!(input < 9);
    let entry = ANIMINDICES[vischar.animindices_row()][input];

    let reverse = entry & ANIMINDEX_REVERSE != 0;
    let anim_index = entry & !ANIMINDEX_REVERSE;
    let anim = &ANIMS[(vischar.animbase + anim_index) as usize];

    let vischar = &mut state.vischars[index];
    vischar.anim = anim_index;
    if reverse {
        vischar.animindex = (anim.nframes - 1) | ANIMINDEX_REVERSE;
        vischar.direction = anim.from;
    } else {
        vischar.animindex = 0;
        vischar.direction = anim.to;
    }
}

/// Advance one vischar by one frame.
fn animate_one(state: &mut State, index: usize) -> Flow {
    let input = state.vischars[index].input;
    let held_anim = state.vischars[index].anim;
    let held_animindex = state.vischars[index].animindex;

    if input & INPUT_KICK != 0 {
        // Forced reselect: a new movement input arrived.
        state.vischars[index].input = input & !INPUT_KICK;
        select_anim(state, index);
    } else {
        // Step within the current animation, wrapping into a reselect.
        let vischar = &state.vischars[index];
        let anim = &ANIMS[(vischar.animbase + vischar.anim) as usize];
        if vischar.animindex & ANIMINDEX_REVERSE != 0 {
            let frame = vischar.animindex & !ANIMINDEX_REVERSE;
            if frame == 0 {
                select_anim(state, index);
            } else {
                state.vischars[index].animindex = (frame - 1) | ANIMINDEX_REVERSE;
            }
        } else if vischar.animindex + 1 >= anim.nframes {
            select_anim(state, index);
        } else {
            state.vischars[index].animindex += 1;
        }
    }

    // Apply the frame's delta to a scratch position; reverse playback
    // walks the path backwards.
    let (pos, frame, reverse) = {
        let vischar = &state.vischars[index];
        let anim = &ANIMS[(vischar.animbase + vischar.anim) as usize];
        let reverse = vischar.animindex & ANIMINDEX_REVERSE != 0;
        let frame = anim.frames[(vischar.animindex & !ANIMINDEX_REVERSE) as usize];
        (vischar.mi.pos, frame, reverse)
    };
    let sign: i16 = if reverse { -1 } else { 1 };

    state.saved_pos = MapPos16 {
        u: pos.u + i16::from(frame.du) * sign,
        v: pos.v + i16::from(frame.dv) * sign,
        w: pos.w + i16::from(frame.dw) * sign,
    };
    let sprite_index = frame.sprite;

    let accepted = crate::collision::touch(state, index, sprite_index)?;
    if accepted {
        let pos = state.vischars[index].mi.pos;
        state.vischars[index].iso_pos = project(&pos);
    } else {
        // Rejected: hold the previous frame so nothing moves.
        let vischar = &mut state.vischars[index];
        vischar.anim = held_anim;
        vischar.animindex = held_animindex;
    }
    Ok(())
}

/// Animation step for every occupied slot.
pub fn animate(state: &mut State) -> Flow {
    for index in 0..VISCHARS_LENGTH {
        if state.vischars[index].is_empty() {
            continue;
        }
        state.vischars[index].flags.no_collide = true;
        let result = animate_one(state, index);
        state.vischars[index].flags.no_collide = false;
        result?;
    }
    Ok(())
}

/// Map scroll direction requested by the hero's current animation, if
/// any.
pub fn hero_map_direction(state: &State) -> Option<u8> {
    let hero = state.hero();
    if hero.counter_and_flags.dont_move_map || hero.room != ROOM_0_OUTDOORS {
        return None;
    }
    let anim = &ANIMS[(hero.animbase + hero.anim) as usize];
    if anim.map_direction == ANIM_NO_MAP_DIRECTION {
        None
    } else {
        Some(anim.map_direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walker_state() -> Box<State> {
        let mut state = State::new().unwrap();
        crate::game_loop::reset_game_state(&mut state);
        // A guard alone in open ground.
        state.vischars[1].character = CHARACTER_1_GUARD_1;
        state.vischars[1].room = ROOM_0_OUTDOORS;
        state.vischars[1].mi.pos = MapPos16::new(800, 640, 48);
        state.vischars[1].mi.sprite = crate::data::sprites::SPRITE_GUARD_FACING_AWAY_1;
        state
    }

    #[test]
    fn test_kick_reselects_animation() {
        let mut state = walker_state();
        state.vischars[1].input = INPUT_UP_LEFT | INPUT_KICK;
        animate(&mut state).unwrap();

        // Kick consumed; the walk animation faces up-left and moved the
        // guard one frame's worth.
        assert_eq!(state.vischars[1].input, INPUT_UP_LEFT);
        assert_eq!(state.vischars[1].direction, Direction::TopLeft);
        assert_eq!(state.vischars[1].mi.pos.u, 798);
    }

    #[test]
    fn test_walk_cycles_frames() {
        let mut state = walker_state();
        state.vischars[1].input = INPUT_UP_LEFT | INPUT_KICK;
        // Four frames walk the whole animation; the fifth reselects and
        // starts over.
        for _ in 0..5 {
            animate(&mut state).unwrap();
        }
        assert_eq!(state.vischars[1].animindex, 0);
        assert_eq!(state.vischars[1].mi.pos.u, 800 - 2 * 5);
    }

    #[test]
    fn test_reverse_playback_negates_deltas() {
        let mut state = walker_state();
        state.vischars[1].direction = Direction::TopLeft;
        // Facing top-left but moving down-right plays the walk reversed.
        state.vischars[1].input = INPUT_DOWN_RIGHT | INPUT_KICK;
        animate(&mut state).unwrap();

        assert!(state.vischars[1].animindex & ANIMINDEX_REVERSE != 0);
        assert_eq!(state.vischars[1].mi.pos.u, 802);
    }

    #[test]
    fn test_rejected_step_holds_frame() {
        let mut state = walker_state();
        // Park a second guard directly up-left of the first.
        state.vischars[2].character = CHARACTER_2_GUARD_2;
        state.vischars[2].room = ROOM_0_OUTDOORS;
        state.vischars[2].mi.pos = MapPos16::new(798, 640, 48);

        state.vischars[1].input = INPUT_UP_LEFT | INPUT_KICK;
        animate(&mut state).unwrap();

        // Blocked: no movement, frame held at the start of the walk.
        assert_eq!(state.vischars[1].mi.pos.u, 800);
        assert_eq!(state.vischars[1].animindex, 0);
    }

    #[test]
    fn test_iso_pos_updates_on_commit() {
        let mut state = walker_state();
        state.vischars[1].input = INPUT_UP_LEFT | INPUT_KICK;
        animate(&mut state).unwrap();
        let pos = state.vischars[1].mi.pos;
        assert_eq!(state.vischars[1].iso_pos, project(&pos));
    }
}
