/*************************************************************************

This file is part of a recreation of 'The Great Escape'
Game copyright (c) 1986 Ocean Software Ltd. and Denton Designs Ltd.

Rust port maintains original logic and behaviour.

**************************************************************************/

//! Route byte strings.
//!
//! A route is a byte sequence: values below 40 name a door pair, values
//! 40..=117 name a location, 0xFF terminates. Bit 7 of a door byte
//! reverses the transition through that pair.

const ROUTE_0_HALT: &[u8] = &[0xFF];
const ROUTE_1_FENCED_AREA: &[u8] = &[0x30, 0x31, 0x32, 0x33, 0xFF];
const ROUTE_2_GUARD_PERIMETER_WALK: &[u8] = &[0x38, 0x39, 0x3A, 0x3B, 0x3C, 0x3D, 0x3E, 0x3F, 0xFF];
const ROUTE_3_COMMANDANT: &[u8] = &[0x86, 0x6E, 0x6F, 0x70, 0x64, 0x65, 0x66, 0x48, 0x49, 0x4A, 0x4B, 0x38, 0x39, 0x3A, 0x3B, 0x30, 0x31, 0xFF];
const ROUTE_4_GUARD_MARCHING_OVER_MAIN_GATE: &[u8] = &[0x64, 0x65, 0x66, 0x67, 0x68, 0xFF];
const ROUTE_5_EXIT_HUT2: &[u8] = &[0x84, 0x4C, 0x4D, 0xFF];
const ROUTE_6_EXIT_HUT3: &[u8] = &[0x85, 0x4E, 0x4F, 0xFF];
const ROUTE_7_PRISONER_SLEEPS_1: &[u8] = &[0x58, 0xFF];
const ROUTE_8_PRISONER_SLEEPS_2: &[u8] = &[0x59, 0xFF];
const ROUTE_9_PRISONER_SLEEPS_3: &[u8] = &[0x5A, 0xFF];
const ROUTE_10_PRISONER_SLEEPS_1_DUP: &[u8] = &[0x58, 0xFF];
const ROUTE_11_PRISONER_SLEEPS_2_DUP: &[u8] = &[0x59, 0xFF];
const ROUTE_12_PRISONER_SLEEPS_3_DUP: &[u8] = &[0x5A, 0xFF];
const ROUTE_13_HOSTILE_BED: &[u8] = &[0x5E, 0xFF];
const ROUTE_14_GO_TO_YARD: &[u8] = &[0x02, 0x30, 0x31, 0x32, 0x33, 0xFF];
const ROUTE_15_GO_TO_YARD_DUP: &[u8] = &[0x02, 0x30, 0x31, 0x32, 0x33, 0xFF];
const ROUTE_16_BREAKFAST_25: &[u8] = &[0x0A, 0x5C, 0x5D, 0xFF];
const ROUTE_17_BREAKFAST_23: &[u8] = &[0x09, 0x5B, 0x5C, 0xFF];
const ROUTE_18_PRISONER_SITS_1: &[u8] = &[0x5B, 0xFF];
const ROUTE_19_PRISONER_SITS_2: &[u8] = &[0x5C, 0xFF];
const ROUTE_20_PRISONER_SITS_3: &[u8] = &[0x5D, 0xFF];
const ROUTE_21_PRISONER_SITS_1_DUP: &[u8] = &[0x5B, 0xFF];
const ROUTE_22_PRISONER_SITS_2_DUP: &[u8] = &[0x5C, 0xFF];
const ROUTE_23_PRISONER_SITS_3_DUP: &[u8] = &[0x5D, 0xFF];
const ROUTE_24_GUARD_A_BREAKFAST: &[u8] = &[0x09, 0x5F, 0xFF];
const ROUTE_25_GUARD_B_BREAKFAST: &[u8] = &[0x0A, 0x60, 0xFF];
const ROUTE_26_GUARD_12_ROLL_CALL: &[u8] = &[0x50, 0xFF];
const ROUTE_27_GUARD_13_ROLL_CALL: &[u8] = &[0x51, 0xFF];
const ROUTE_28_PRISONER_1_ROLL_CALL: &[u8] = &[0x52, 0xFF];
const ROUTE_29_PRISONER_2_ROLL_CALL: &[u8] = &[0x53, 0xFF];
const ROUTE_30_PRISONER_3_ROLL_CALL: &[u8] = &[0x55, 0xFF];
const ROUTE_31_GUARD_14_ROLL_CALL: &[u8] = &[0x56, 0xFF];
const ROUTE_32_GUARD_15_ROLL_CALL: &[u8] = &[0x57, 0xFF];
const ROUTE_33_PRISONER_4_ROLL_CALL: &[u8] = &[0x52, 0xFF];
const ROUTE_34_PRISONER_5_ROLL_CALL: &[u8] = &[0x53, 0xFF];
const ROUTE_35_PRISONER_6_ROLL_CALL: &[u8] = &[0x55, 0xFF];
const ROUTE_36_GO_TO_SOLITARY: &[u8] = &[0x0B, 0x72, 0xFF];
const ROUTE_37_HERO_LEAVE_SOLITARY: &[u8] = &[0x8B, 0x4C, 0xFF];
const ROUTE_38_GUARD_12_BED: &[u8] = &[0x06, 0x6E, 0xFF];
const ROUTE_39_GUARD_13_BED: &[u8] = &[0x07, 0x6F, 0xFF];
const ROUTE_40_GUARD_14_BED: &[u8] = &[0x0C, 0x70, 0xFF];
const ROUTE_41_GUARD_15_BED: &[u8] = &[0x0D, 0x71, 0xFF];
const ROUTE_42_HUT2_LEFT_TO_RIGHT: &[u8] = &[0x11, 0xFF];
const ROUTE_43_BREAKFAST_VISCHAR: &[u8] = &[0x58, 0xFF];
const ROUTE_44_HUT2_RIGHT_TO_LEFT: &[u8] = &[0x91, 0x58, 0xFF];
const ROUTE_45_HERO_ROLL_CALL: &[u8] = &[0x54, 0xFF];

pub const ROUTES_LENGTH: usize = 46;

pub static ROUTES: [&[u8]; ROUTES_LENGTH] = [
    ROUTE_0_HALT,
    ROUTE_1_FENCED_AREA,
    ROUTE_2_GUARD_PERIMETER_WALK,
    ROUTE_3_COMMANDANT,
    ROUTE_4_GUARD_MARCHING_OVER_MAIN_GATE,
    ROUTE_5_EXIT_HUT2,
    ROUTE_6_EXIT_HUT3,
    ROUTE_7_PRISONER_SLEEPS_1,
    ROUTE_8_PRISONER_SLEEPS_2,
    ROUTE_9_PRISONER_SLEEPS_3,
    ROUTE_10_PRISONER_SLEEPS_1_DUP,
    ROUTE_11_PRISONER_SLEEPS_2_DUP,
    ROUTE_12_PRISONER_SLEEPS_3_DUP,
    ROUTE_13_HOSTILE_BED,
    ROUTE_14_GO_TO_YARD,
    ROUTE_15_GO_TO_YARD_DUP,
    ROUTE_16_BREAKFAST_25,
    ROUTE_17_BREAKFAST_23,
    ROUTE_18_PRISONER_SITS_1,
    ROUTE_19_PRISONER_SITS_2,
    ROUTE_20_PRISONER_SITS_3,
    ROUTE_21_PRISONER_SITS_1_DUP,
    ROUTE_22_PRISONER_SITS_2_DUP,
    ROUTE_23_PRISONER_SITS_3_DUP,
    ROUTE_24_GUARD_A_BREAKFAST,
    ROUTE_25_GUARD_B_BREAKFAST,
    ROUTE_26_GUARD_12_ROLL_CALL,
    ROUTE_27_GUARD_13_ROLL_CALL,
    ROUTE_28_PRISONER_1_ROLL_CALL,
    ROUTE_29_PRISONER_2_ROLL_CALL,
    ROUTE_30_PRISONER_3_ROLL_CALL,
    ROUTE_31_GUARD_14_ROLL_CALL,
    ROUTE_32_GUARD_15_ROLL_CALL,
    ROUTE_33_PRISONER_4_ROLL_CALL,
    ROUTE_34_PRISONER_5_ROLL_CALL,
    ROUTE_35_PRISONER_6_ROLL_CALL,
    ROUTE_36_GO_TO_SOLITARY,
    ROUTE_37_HERO_LEAVE_SOLITARY,
    ROUTE_38_GUARD_12_BED,
    ROUTE_39_GUARD_13_BED,
    ROUTE_40_GUARD_14_BED,
    ROUTE_41_GUARD_15_BED,
    ROUTE_42_HUT2_LEFT_TO_RIGHT,
    ROUTE_43_BREAKFAST_VISCHAR,
    ROUTE_44_HUT2_RIGHT_TO_LEFT,
    ROUTE_45_HERO_ROLL_CALL,
];
