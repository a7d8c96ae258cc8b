/*************************************************************************

This file is part of a recreation of 'The Great Escape'
Game copyright (c) 1986 Ocean Software Ltd. and Denton Designs Ltd.

Rust port maintains original logic and behaviour.

**************************************************************************/

//! Doors: the table scan, locked doors, and room transitions.

use crate::constants::*;
use crate::data::doors::{DOORS, DOORS_LENGTH};
use crate::messages;
use crate::state::State;
use crate::types::*;

/// Pairs 0..=15 have one side outdoors; only they are scanned while the
/// hero walks the exterior map.
pub const OUTDOOR_DOOR_PAIRS: u8 = 16;

/// Fetch one side of a door pair: the given side for a forward
/// transition, the partner for a reversed one.
pub fn get_door(index: u8) -> &'static Door {
    let pair = (index & !DOOR_REVERSE) as usize;
    debug_assert!(pair < DOORS_LENGTH / 2);
    let side = (index & DOOR_REVERSE != 0) as usize;
    &DOORS[pair * 2 + side]
}

/// The opposite side of the same pair.
pub fn get_door_other_side(index: u8) -> &'static Door {
    let pair = (index & !DOOR_REVERSE) as usize;
    debug_assert!(pair < DOORS_LENGTH / 2);
    let side = (index & DOOR_REVERSE == 0) as usize;
    &DOORS[pair * 2 + side]
}

/// Rebuild the live interior door list for the current room: up to four
/// door sides open onto any one room.
pub fn setup_interior_doors(state: &mut State) {
    state.interior_doors = [INTERIORDOOR_NONE; INTERIOR_DOORS_LENGTH];
    let mut count = 0;
    for entry in 0..DOORS_LENGTH {
        if DOORS[entry].room() != state.room_index {
            continue;
        }
        // Record the pair index; an odd entry is the reversed side.
        let pair = (entry / 2) as u8;
        let reverse = if entry & 1 != 0 { DOOR_REVERSE } else { 0 };
        state.interior_doors[count] = pair | reverse;
        count += 1;
        if count == INTERIOR_DOORS_LENGTH {
            break;
        }
    }
}

/// Slot in the locked-door table for a door index, if the door locks.
fn locked_door_slot(state: &State, door_index: u8) -> Option<usize> {
    state
        .locked_doors
        .iter()
        .position(|&entry| entry & !DOOR_LOCKED == door_index & !DOOR_REVERSE)
}

pub fn is_door_locked(state: &State, door_index: u8) -> bool {
    locked_door_slot(state, door_index)
        .map(|slot| state.locked_doors[slot] & DOOR_LOCKED != 0)
        .unwrap_or(false)
}

/// Door scan for the automatically-controlled hero on the exterior map.
/// A matching unlocked door moves him to its destination room.
///
/// Outdoor door positions are stored doubled, so the live position is
/// compared at a quarter of its sub-unit scale.
pub fn door_handling(state: &mut State) -> Flow {
    let hero = state.hero();
    let direction = hero.direction;
    let pos = MapPos8 {
        u: (hero.mi.pos.u / 4) as u8,
        v: (hero.mi.pos.v / 4) as u8,
        w: (hero.mi.pos.w / 4) as u8,
    };

    for pair in 0..OUTDOOR_DOOR_PAIRS {
        for (side, reverse) in [(0usize, 0u8), (1, DOOR_REVERSE)] {
            let door = &DOORS[pair as usize * 2 + side];
            if door.room() != ROOM_0_OUTDOORS {
                continue;
            }
            if door.direction() != direction {
                continue;
            }
            if !near_door(&pos, &door.pos, 3) {
                continue;
            }

            let index = pair | reverse;
            if is_door_locked(state, index) {
                messages::queue_message(state, messages::MESSAGE_THE_DOOR_IS_LOCKED);
                return Ok(());
            }
            crate::driver::hero_passed_through_door(state, index);
            let other = get_door_other_side(index);
            state.vischars[HERO_VISCHAR].room = other.room();
            state.current_door = index;
            return transition(state, &other.pos);
        }
    }
    Ok(())
}

/// Door scan for the hero inside a room, over the live interior doors.
pub fn door_handling_interior(state: &mut State) -> Flow {
    let hero = state.hero();
    let direction = hero.direction;
    let pos = hero.mi.pos.narrow();

    for slot in 0..INTERIOR_DOORS_LENGTH {
        let index = state.interior_doors[slot];
        if index == INTERIORDOOR_NONE {
            continue;
        }
        let door = get_door(index);
        if door.direction() != direction {
            continue;
        }
        if !near_door(&pos, &door.pos, 3) {
            continue;
        }
        if is_door_locked(state, index) {
            messages::queue_message(state, messages::MESSAGE_THE_DOOR_IS_LOCKED);
            return Ok(());
        }
        crate::driver::hero_passed_through_door(state, index);
        let other = get_door_other_side(index);
        state.vischars[HERO_VISCHAR].room = other.room();
        state.current_door = index;
        return transition(state, &other.pos);
    }
    Ok(())
}

fn near_door(pos: &MapPos8, door: &MapPos8, range: u8) -> bool {
    let range = i16::from(range);
    (i16::from(pos.u) - i16::from(door.u)).abs() <= range
        && (i16::from(pos.v) - i16::from(door.v)).abs() <= range
}

/// Find a locked-door slot near the hero, for the key and lockpick
/// actions. Outdoors only the first five entries are gates and exterior
/// doors; indoors the tail entries are the keyed rooms.
pub fn get_nearest_door(state: &State) -> Option<usize> {
    let outdoors = state.room_index == ROOM_0_OUTDOORS;
    let pos = if outdoors {
        let p = state.hero().mi.pos;
        MapPos8 {
            u: (p.u / 4) as u8,
            v: (p.v / 4) as u8,
            w: (p.w / 4) as u8,
        }
    } else {
        state.hero().mi.pos.narrow()
    };
    let range = if outdoors { 3 } else { 8 };

    let slots: &[usize] = if outdoors {
        &[0, 1, 2, 3, 4]
    } else {
        &[2, 3, 4, 5, 6, 7, 8]
    };
    for &slot in slots {
        let index = state.locked_doors[slot] & !DOOR_LOCKED;
        for door in [get_door(index), get_door_other_side(index)] {
            if door.room() == state.room_index && near_door(&pos, &door.pos, range) {
                return Some(slot);
            }
        }
    }
    None
}

/// Move the hero to a door's far-side position and restart the main loop
/// in the new room (or outdoors). An outdoor destination arrives in
/// doubled units and scales by four.
pub fn transition(state: &mut State, pos: &MapPos8) -> Flow {
    let room = state.vischars[HERO_VISCHAR].room;
    let hero = &mut state.vischars[HERO_VISCHAR];
    if room == ROOM_0_OUTDOORS {
        hero.mi.pos = MapPos16 {
            u: i16::from(pos.u) * 4,
            v: i16::from(pos.v) * 4,
            w: i16::from(pos.w) * 4,
        };
        Err(Interrupt::Outdoors)
    } else {
        hero.mi.pos = pos.widen();
        Err(Interrupt::NewRoom)
    }
}

/// Start-of-game locked door set: the gates, the yard, solitary and the
/// keyed storerooms.
pub fn reset_locked_doors(state: &mut State) {
    state.locked_doors = [
        0 | DOOR_LOCKED,  // outer main gate
        1 | DOOR_LOCKED,  // inner main gate
        2 | DOOR_LOCKED,  // exercise yard gate
        11 | DOOR_LOCKED, // solitary cell
        12 | DOOR_LOCKED, // north corridor
        30 | DOOR_LOCKED, // red key room
        25 | DOOR_LOCKED, // yellow key room
        29 | DOOR_LOCKED, // green key room
        53 | DOOR_LOCKED, // blocked tunnel
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_door_sides() {
        let forward = get_door(17);
        let reversed = get_door(17 | DOOR_REVERSE);
        assert_eq!(forward.room(), ROOM_2_HUT2LEFT);
        assert_eq!(reversed.room(), ROOM_3_HUT2RIGHT);
        assert_eq!(get_door_other_side(17).room(), ROOM_3_HUT2RIGHT);
        assert_eq!(get_door_other_side(17 | DOOR_REVERSE).room(), ROOM_2_HUT2LEFT);
    }

    #[test]
    fn test_setup_interior_doors_finds_room_sides() {
        let mut state = State::new().unwrap();
        state.room_index = ROOM_3_HUT2RIGHT;
        setup_interior_doors(&mut state);
        // Hut 2 right is the far side of pair 17 plus its tunnel hatch.
        assert!(state.interior_doors.iter().any(|&d| d == 17 | DOOR_REVERSE));
    }

    #[test]
    fn test_locked_door_lookup() {
        let mut state = State::new().unwrap();
        reset_locked_doors(&mut state);
        assert!(is_door_locked(&state, 0));
        assert!(is_door_locked(&state, 1));
        assert!(!is_door_locked(&state, 17));

        // Unlock the outer gate.
        state.locked_doors[0] &= !DOOR_LOCKED;
        assert!(!is_door_locked(&state, 0));
    }

    #[test]
    fn test_outdoor_door_scan_locked_door_messages() {
        let mut state = State::new().unwrap();
        reset_locked_doors(&mut state);
        state.room_index = ROOM_0_OUTDOORS;
        // Stand right on the outer gate's outdoor side, facing through it.
        let door = get_door(0);
        state.vischars[HERO_VISCHAR].room = ROOM_0_OUTDOORS;
        state.vischars[HERO_VISCHAR].direction = door.direction();
        state.vischars[HERO_VISCHAR].mi.pos = MapPos16 {
            u: i16::from(door.pos.u) * 4,
            v: i16::from(door.pos.v) * 4,
            w: i16::from(door.pos.w) * 4,
        };

        assert!(door_handling(&mut state).is_ok());
        assert!(state.messages.pending());
    }

    #[test]
    fn test_interior_transition_unwinds() {
        let mut state = State::new().unwrap();
        reset_locked_doors(&mut state);
        state.room_index = ROOM_2_HUT2LEFT;
        setup_interior_doors(&mut state);

        let door = get_door(17);
        state.vischars[HERO_VISCHAR].room = ROOM_2_HUT2LEFT;
        state.vischars[HERO_VISCHAR].direction = door.direction();
        state.vischars[HERO_VISCHAR].mi.pos = door.pos.widen();

        let result = door_handling_interior(&mut state);
        assert_eq!(result, Err(Interrupt::NewRoom));
        assert_eq!(state.vischars[HERO_VISCHAR].room, ROOM_3_HUT2RIGHT);
    }
}
