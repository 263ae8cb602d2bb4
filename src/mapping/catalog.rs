// Copyright 2017 Mateusz Sieczko and other GilRs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Built-in controller tables. Entry order matters, the first entry whose name is contained in
//! the device name wins.

use super::{PadEntry, Profile};

pub mod windows {
    use super::*;

    const X360_BUTTONS: &[&str] = &[
        "A", "B", "X", "Y", "L", "R", "BACK", "START", "L STICK", "R STICK",
    ];
    const X360_AXES: &[&str] = &["Left X", "Left Y", "Trigger", "Right Y", "Right X"];
    #[rustfmt::skip]
    static X360_PROFILE: Profile = Profile([
         1,  4,  0,  3, // axes
         0,  0,  0,  0, // invert
         6, 21, 16, 15, 20, 22, 17,  9, -1, -1, // map
         7, 25, 27, 28, 26,  1,  0,  0,  1, // menus
        -1, -1, -1, 22,  0, -1,  5,  9,  2,  3, 28, 26,  1, 27, 25,  4, -1, // gameplay
    ]);

    const AFTERGLOW_BUTTONS: &[&str] = &[
        "SQUARE", "X", "O", "TRIANGLE", "L1", "R1", "L2", "R2", "SELECT", "START", "L STICK",
        "R STICK", "GUIDE",
    ];
    const AFTERGLOW_AXES: &[&str] = &["Left X", "Left Y", "Right X", "Right Y"];
    #[rustfmt::skip]
    static AFTERGLOW_PROFILE: Profile = Profile([
         1,  0,  2,  3,
         0,  0,  0,  0,
         8, 21, 16, 15, 20,  6,  7, 11, -1, -1,
         9, -1, -1, -1, -1,  1,  2,  2,  1,
        -1, -1, -1,  7,  1, -1,  5, 11,  0,  3, 28, 26,  2, 27, 25,  4, -1,
    ]);

    const F710_BUTTONS: &[&str] = &[
        "X", "A", "B", "Y", "L", "R", "LT", "RT", "BACK", "START", "L STICK", "R STICK",
    ];
    const F710_AXES: &[&str] = &["Left X", "Left Y", "Right X", "Right Y"];
    #[rustfmt::skip]
    static F710_PROFILE: Profile = Profile([
         1,  2,  0,  3,
         0,  0,  0,  0,
         8, 21, 16, 15, 20,  6,  7, 11, -1, -1,
         9, -1, -1, -1, -1,  2,  1,  1,  2,
        -1, -1, -1,  7,  1, -1,  5, 10,  0,  3, 28, 26,  2, 27, 25,  4, -1,
    ]);

    const DUALSHOCK_BUTTONS: &[&str] = &[
        "SQUARE", "X", "O", "TRIANGLE", "L2", "R2", "L1", "R1", "START", "SELECT", "L STICK",
        "R STICK", "GUIDE",
    ];
    const DUALSHOCK_AXES: &[&str] = &["Left X", "Left Y", "Right X", "Right Y"];

    const PS4_BUTTONS: &[&str] = &[
        "SQUARE", "X", "O", "TRIANGLE", "L1", "R1", "6", "7", "SHARE", "OPTIONS", "L STICK",
        "R STICK", "GUIDE",
    ];
    const PS4_AXES: &[&str] = &[
        "Left X",
        "Left Y",
        "Right X",
        "Left Trigger",
        "Right Trigger",
        "Right Y",
    ];

    const RUMBLEPAD_BUTTONS: &[&str] = &[
        "1", "2", "3", "4", "L1", "R1", "L2", "R2", "9", "10", "L STICK", "R STICK",
    ];
    const RUMBLEPAD_AXES: &[&str] = &["Left X", "Left Y", "Right X", "Right Y"];

    const OUYA_BUTTONS: &[&str] = &[
        "O", "U", "Y", "A", "L1", "R1", "L STICK", "R STICK", "UP", "DOWN", "LEFT", "RIGHT", "LT",
        "RT", "HOME", "HOME-ALT",
    ];
    const OUYA_AXES: &[&str] = &["Left X", "Left Y", "2", "Right X", "Right Y"];

    const RETROPORT_BUTTONS: &[&str] = &["Y", "B", "SELECT", "START", "X", "A", "L", "R"];
    const RETROPORT_AXES: &[&str] = &["X", "Y"];

    const GAMEPAD_PRO_BUTTONS: &[&str] = &[
        "RED", "YELLOW", "GREEN", "BLUE", "L1", "R1", "L2", "R2", "SELECT", "START",
    ];
    const GAMEPAD_PRO_AXES: &[&str] = &["X", "Y"];

    pub static PADS: &[PadEntry] = &[
        PadEntry::new("XBOX 360", X360_BUTTONS, X360_AXES, Some(&X360_PROFILE)),
        PadEntry::new(
            "Afterglow PS3",
            AFTERGLOW_BUTTONS,
            AFTERGLOW_AXES,
            Some(&AFTERGLOW_PROFILE),
        ),
        // F310 and F510 report the same name.
        PadEntry::new(
            "Logitech Dual Action",
            F710_BUTTONS,
            F710_AXES,
            Some(&F710_PROFILE),
        ),
        PadEntry::new("F710", F710_BUTTONS, F710_AXES, Some(&F710_PROFILE)),
        PadEntry::new("DualShock", DUALSHOCK_BUTTONS, DUALSHOCK_AXES, None),
        PadEntry::new("PS4", PS4_BUTTONS, PS4_AXES, None),
        PadEntry::new("RumblePad 2", RUMBLEPAD_BUTTONS, RUMBLEPAD_AXES, None),
        PadEntry::new("OUYA", OUYA_BUTTONS, OUYA_AXES, None),
        PadEntry::new("Super RetroPort", RETROPORT_BUTTONS, RETROPORT_AXES, None),
        PadEntry::new("GamePad Pro", GAMEPAD_PRO_BUTTONS, GAMEPAD_PRO_AXES, None),
    ];
}

pub mod linux {
    use super::*;

    const X360_BUTTONS: &[&str] = &[
        "A", "B", "X", "Y", "L", "R", "BACK", "START", "GUIDE", "L STICK", "R STICK",
    ];
    const X360_AXES: &[&str] = &[
        "Left X",
        "Left Y",
        "L Trigger",
        "Right Y",
        "Right X",
        "R Trigger",
    ];
    #[rustfmt::skip]
    static X360_PROFILE: Profile = Profile([
         1,  4,  0,  3, // LY RX LX RY
         0,  0,  0,  0,
         6, 21, 16, 15, 20, 29, 17, 10, -1, -1, // BACK A1- A1+ A0+ A0- A6+ A2+ RSTICK
         7, -1, -1, -1, -1,  1,  0,  0,  1, // START - - - - B A A B
        -1, -1, -1, 29,  0, -1,  5, 10,  2,  3, 28, 26,  1, 27, 25,  4, -1,
    ]);

    pub static PADS: &[PadEntry] = &[
        PadEntry::new("X-Box 360", X360_BUTTONS, X360_AXES, Some(&X360_PROFILE)),
        // Wireless receiver
        PadEntry::new("Xbox 360", X360_BUTTONS, X360_AXES, Some(&X360_PROFILE)),
    ];
}

pub mod other {
    use super::*;

    pub static PADS: &[PadEntry] = &[PadEntry::new(
        "!$@NotAValidPadDontMatchMe@$!",
        &["0"],
        &[],
        None,
    )];
}
