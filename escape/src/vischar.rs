/*************************************************************************

This file is part of a recreation of 'The Great Escape'
Game copyright (c) 1986 Ocean Software Ltd. and Denton Designs Ltd.

Rust port maintains original logic and behaviour.

**************************************************************************/

//! The visible-character table: eight slots of on-screen actors.
//!
//! Slot 0 is the hero and is never freed; slots 1..=7 fill lazily as
//! characters come into view and empty again as they leave.

use spectrum::Machine;

use crate::constants::*;
use crate::data::sprites;
use crate::driver;
use crate::route;
use crate::sound;
use crate::state::State;
use crate::types::*;

/// Rooms the three movable items (stove, crate, stove) live in.
pub static MOVABLE_ITEM_ROOMS: [u8; MOVABLE_ITEMS_LENGTH] = [
    ROOM_2_HUT2LEFT,
    ROOM_9_CRATE,
    ROOM_4_HUT3LEFT,
];

/// Character ids of the movable item slots.
pub static MOVABLE_ITEM_CHARACTERS: [u8; MOVABLE_ITEMS_LENGTH] = [
    CHARACTER_26_STOVE_1,
    CHARACTER_28_CRATE,
    CHARACTER_27_STOVE_2,
];

/// Start position of each movable item, in interior coordinates.
pub fn movable_item_home(slot: usize) -> MapPos16 {
    match slot {
        0 => MapPos16::new(62, 35, 0),
        1 => MapPos16::new(50, 50, 0),
        _ => MapPos16::new(62, 35, 0),
    }
}

/// Put every movable item back at its start position.
pub fn reset_movable_items(state: &mut State) {
    for slot in 0..MOVABLE_ITEMS_LENGTH {
        state.movable_items[slot] = MovableItem {
            pos: movable_item_home(slot),
            sprite: if slot == 1 {
                sprites::SPRITE_CRATE
            } else {
                sprites::SPRITE_STOVE
            },
            sprite_index: 0,
        };
    }
}

/// First sprite of a character's sprite set.
pub fn sprite_base_for(character: u8) -> u8 {
    match character_class(character) {
        CharacterClass::Commandant => sprites::SPRITE_COMMANDANT_FACING_AWAY_1,
        CharacterClass::Guard => sprites::SPRITE_GUARD_FACING_AWAY_1,
        CharacterClass::Dog => sprites::SPRITE_DOG_FACING_AWAY_1,
        CharacterClass::Prisoner => sprites::SPRITE_PRISONER_FACING_AWAY_1,
    }
}

/// First free non-hero slot.
fn find_free_slot(state: &State) -> Option<usize> {
    (1..VISCHARS_LENGTH).find(|&i| state.vischars[i].is_empty())
}

/// Try to bring one character record on screen.
pub fn spawn_character(state: &mut State, char_index: usize, machine: &mut dyn Machine) -> Flow {
    if state.character_structs[char_index].on_screen() {
        return Ok(());
    }
    let Some(slot) = find_free_slot(state) else {
        return Ok(());
    };

    let record = state.character_structs[char_index];

    // Candidate live position: outdoor records are in the scaled-down
    // space.
    let pos = if record.room == ROOM_0_OUTDOORS {
        record.pos.scale_up()
    } else {
        record.pos.widen()
    };

    // Trial-occupy the slot so the contact tests see the newcomer.
    state.vischars[slot] = Vischar {
        character: record.character,
        route: record.route,
        room: record.room,
        mi: MovableItem {
            pos,
            sprite: sprite_base_for(record.character),
            sprite_index: 0,
        },
        ..Vischar::default()
    };
    state.saved_pos = pos;

    if crate::collision::bounds_check(state, slot) || crate::collision::collision(state, slot)? {
        state.vischars[slot] = Vischar::default();
        return Ok(());
    }

    state.character_structs[char_index]
        .flags
        .insert(CharacterStructFlags::ON_SCREEN);

    let def = &sprites::SPRITES[sprite_base_for(record.character) as usize];
    {
        let vischar = &mut state.vischars[slot];
        vischar.animbase = 0;
        vischar.width_bytes = def.width_bytes;
        vischar.height = def.height;
        vischar.iso_pos = project(&pos);
        vischar.input = INPUT_KICK;
    }

    if record.room != ROOM_0_OUTDOORS {
        sound::play_speaker(machine, SOUND_CHARACTER_ENTERS_1);
        sound::play_speaker(machine, SOUND_CHARACTER_ENTERS_2);
    }

    log::debug!(
        "spawn: character {} into slot {slot} (room {})",
        record.character,
        record.room
    );

    route::set_route(state, slot);
    driver::character_behaviour(state, slot)
}

/// Spawn every character record that falls within the camera window
/// (expanded by an eight-cell border), or is in the current room.
pub fn spawn_characters(state: &mut State, machine: &mut dyn Machine) -> Flow {
    const GRACE: i16 = 8;
    for char_index in 0..CHARACTER_STRUCTS_LENGTH {
        let record = &state.character_structs[char_index];
        if record.on_screen() {
            continue;
        }
        if record.room != state.room_index {
            continue;
        }
        if record.room == ROOM_0_OUTDOORS {
            let iso = project8(&record.pos);
            let x = i16::from(iso.x);
            let y = i16::from(iso.y);
            let left = i16::from(state.map_position.x) - GRACE;
            let top = i16::from(state.map_position.y) - GRACE;
            if x < left
                || x >= left + COLUMNS as i16 + GRACE * 2
                || y < top
                || y >= top + ROWS as i16 + GRACE * 2
            {
                continue;
            }
        }
        spawn_character(state, char_index, machine)?;
    }
    Ok(())
}

/// Bring the current room's movable items on screen.
pub fn setup_movable_items(state: &mut State) {
    for slot in 0..MOVABLE_ITEMS_LENGTH {
        if MOVABLE_ITEM_ROOMS[slot] != state.room_index {
            continue;
        }
        let Some(vislot) = find_free_slot(state) else {
            return;
        };
        let item = state.movable_items[slot];
        state.vischars[vislot] = Vischar {
            character: MOVABLE_ITEM_CHARACTERS[slot],
            room: state.room_index,
            mi: item,
            iso_pos: project(&item.pos),
            width_bytes: sprites::SPRITES[item.sprite as usize].width_bytes,
            height: sprites::SPRITES[item.sprite as usize].height,
            ..Vischar::default()
        };
        state.vischars[vislot].input = INPUT_KICK;
        state.vischars[vislot].counter_and_flags.drawable = true;
    }
}

/// Free a non-hero slot, writing the live state back where it belongs.
pub fn reset_visible_character(state: &mut State, index: usize) {
    debug_assert!(index != HERO_VISCHAR);
    let vischar = state.vischars[index];
    if vischar.is_empty() {
        return;
    }
    let character = vischar.character;

    if character >= CHARACTER_26_STOVE_1 {
        // A movable item: remember where it was pushed to.
        let slot = MOVABLE_ITEM_CHARACTERS
            .iter()
            .position(|&c| c == character)
            .unwrap_or(0);
        state.movable_items[slot].pos = vischar.mi.pos;
        state.movable_items[slot].sprite_index = vischar.mi.sprite_index;
        state.vischars[index] = Vischar::default();
        return;
    }

    let record = &mut state.character_structs[character as usize];
    record.room = vischar.room;
    record.pos = if vischar.room == ROOM_0_OUTDOORS {
        vischar.mi.pos.scale_down()
    } else {
        vischar.mi.pos.narrow()
    };
    record.route = vischar.route;
    record.flags.remove(CharacterStructFlags::ON_SCREEN);

    // Dogs go back on their wander window when they despawn.
    if is_dog(character) {
        let step = if character <= CHARACTER_17_GUARD_DOG_2 { 0 } else { 24 };
        state.character_structs[character as usize].route = Route::new(ROUTEINDEX_WANDER, step);
    }

    state.vischars[index] = Vischar::default();
    log::debug!("despawn: character {character} from slot {index}");
}

/// Free every slot whose occupant can no longer be seen: wrong room, or
/// outside the camera window plus a nine-cell border.
pub fn purge_invisible_characters(state: &mut State) {
    const GRACE: i16 = 9;
    for index in 1..VISCHARS_LENGTH {
        let vischar = &state.vischars[index];
        if vischar.is_empty() {
            continue;
        }
        if vischar.room != state.room_index {
            reset_visible_character(state, index);
            continue;
        }
        if state.room_index != ROOM_0_OUTDOORS {
            continue;
        }
        let x = (vischar.iso_pos.x / 8) as i16;
        let y = (vischar.iso_pos.y / 8) as i16;
        let left = i16::from(state.map_position.x) - GRACE;
        let top = i16::from(state.map_position.y) - GRACE;
        if x < left
            || x >= left + COLUMNS as i16 + GRACE * 2
            || y < top
            || y >= top + ROWS as i16 + GRACE * 2
        {
            reset_visible_character(state, index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spectrum::BufferMachine;

    fn fresh() -> (Box<State>, BufferMachine) {
        let mut state = State::new().unwrap();
        crate::game_loop::reset_game_state(&mut state);
        (state, BufferMachine::new())
    }

    #[test]
    fn test_spawn_marks_on_screen_once() {
        let (mut state, mut machine) = fresh();
        state.room_index = ROOM_0_OUTDOORS;
        // Centre the camera over guard 1's start position.
        let iso = project8(&state.character_structs[1].pos);
        state.map_position = Pos8 { x: iso.x.saturating_sub(10), y: iso.y.saturating_sub(8) };

        spawn_character(&mut state, 1, &mut machine).unwrap();
        assert!(state.character_structs[1].on_screen());
        let slot = (1..VISCHARS_LENGTH)
            .find(|&i| state.vischars[i].character == 1)
            .expect("guard 1 spawned");

        // Spawning again does nothing.
        spawn_character(&mut state, 1, &mut machine).unwrap();
        assert_eq!(
            (1..VISCHARS_LENGTH)
                .filter(|&i| state.vischars[i].character == 1)
                .count(),
            1
        );

        // On-screen flag invariant holds both ways.
        assert_eq!(state.vischars[slot].character, 1);
    }

    #[test]
    fn test_purge_restores_character_struct() {
        let (mut state, mut machine) = fresh();
        state.room_index = ROOM_0_OUTDOORS;
        let iso = project8(&state.character_structs[1].pos);
        state.map_position = Pos8 { x: iso.x.saturating_sub(10), y: iso.y.saturating_sub(8) };
        spawn_character(&mut state, 1, &mut machine).unwrap();

        // Walk the camera far away; the guard is now out of view.
        state.map_position = Pos8 { x: 0, y: 0 };
        purge_invisible_characters(&mut state);

        assert!(!state.character_structs[1].on_screen());
        assert!((1..VISCHARS_LENGTH).all(|i| state.vischars[i].character != 1));
    }

    #[test]
    fn test_despawned_dog_returns_to_wander() {
        let (mut state, mut machine) = fresh();
        state.room_index = ROOM_0_OUTDOORS;
        let iso = project8(&state.character_structs[18].pos);
        state.map_position = Pos8 { x: iso.x.saturating_sub(10), y: iso.y.saturating_sub(8) };
        spawn_character(&mut state, 18, &mut machine).unwrap();

        if let Some(slot) = (1..VISCHARS_LENGTH).find(|&i| state.vischars[i].character == 18) {
            reset_visible_character(&mut state, slot);
        }
        let route = state.character_structs[18].route;
        assert_eq!(route.index, ROUTEINDEX_WANDER);
        assert_eq!(route.step, 24);
    }

    #[test]
    fn test_movable_item_round_trip() {
        let (mut state, _machine) = fresh();
        state.room_index = ROOM_9_CRATE;
        setup_movable_items(&mut state);
        let slot = (1..VISCHARS_LENGTH)
            .find(|&i| state.vischars[i].character == CHARACTER_28_CRATE)
            .expect("crate spawned");

        // Nudge it and despawn: the table remembers the new spot.
        state.vischars[slot].mi.pos.u += 4;
        let pushed = state.vischars[slot].mi.pos;
        reset_visible_character(&mut state, slot);
        assert_eq!(state.movable_items[1].pos, pushed);
    }
}
