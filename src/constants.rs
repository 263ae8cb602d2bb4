// Copyright 2016-2018 Mateusz Sieczko and other GilRs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Virtual button and axis codes.
//!
//! Codes below `BTN_COUNT` are physical controller buttons in game controller order. Codes from
//! `PBTN_MOVE_UP` up to `PBTN_COUNT` are pseudo-buttons driven by axes.

pub const BTN_A: u8 = 0;
pub const BTN_B: u8 = 1;
pub const BTN_X: u8 = 2;
pub const BTN_Y: u8 = 3;
pub const BTN_BACK: u8 = 4;
pub const BTN_GUIDE: u8 = 5;
pub const BTN_START: u8 = 6;
pub const BTN_LEFTSTICK: u8 = 7;
pub const BTN_RIGHTSTICK: u8 = 8;
pub const BTN_LEFTSHOULDER: u8 = 9;
pub const BTN_RIGHTSHOULDER: u8 = 10;
pub const BTN_DPAD_UP: u8 = 11;
pub const BTN_DPAD_DOWN: u8 = 12;
pub const BTN_DPAD_LEFT: u8 = 13;
pub const BTN_DPAD_RIGHT: u8 = 14;
pub const BTN_COUNT: u8 = 15;

// Axis directions. Even offsets from PBTN_MOVE_UP are the positive side of an axis, odd offsets
// the negative side.
pub const PBTN_MOVE_UP: u8 = 15;
pub const PBTN_MOVE_DOWN: u8 = 16;
pub const PBTN_MOVE_LEFT: u8 = 17;
pub const PBTN_MOVE_RIGHT: u8 = 18;
pub const PBTN_LOOK_UP: u8 = 19;
pub const PBTN_LOOK_DOWN: u8 = 20;
pub const PBTN_LOOK_LEFT: u8 = 21;
pub const PBTN_LOOK_RIGHT: u8 = 22;
// Triggers
pub const PBTN_LEFT_TRIGGER: u8 = 23;
pub const PBTN_RIGHT_TRIGGER: u8 = 24;
pub const PBTN_COUNT: u8 = 25;

// The south-paw swap (`axis ^ 2`) depends on this order.
pub const AXIS_MOVE_X: u8 = 0;
pub const AXIS_MOVE_Y: u8 = 1;
pub const AXIS_LOOK_X: u8 = 2;
pub const AXIS_LOOK_Y: u8 = 3;
pub const AXIS_LEFT_TRIGGER: u8 = 4;
pub const AXIS_RIGHT_TRIGGER: u8 = 5;
pub const AXIS_COUNT: u8 = 6;

/// Raw readings with magnitude strictly below this value are reported as zero.
pub const DEAD_ZONE: i32 = 32768 / 3;

/// Value stored in a binding variable that is not bound to anything.
pub const UNBOUND: i32 = -1;
