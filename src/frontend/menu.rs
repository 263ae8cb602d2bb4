// Copyright 2016-2018 Mateusz Sieczko and other GilRs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Gamepad menu tables.

/// What happens when menu item is activated.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ItemKind {
    /// Runs command named by the item verb.
    Command,
    /// Starts button bind session for the variable named by the item verb.
    BindButton,
    /// Starts axis bind session for the variable named by the item verb.
    BindAxis,
    /// Flips boolean variable named by the item verb.
    Toggle,
    /// Visible but inactive item.
    Gap,
}

/// Entry of a static gamepad menu.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct MenuItem {
    pub kind: ItemKind,
    pub label: &'static str,
    /// Command or variable name, depending on `kind`.
    pub verb: &'static str,
}

impl MenuItem {
    const fn new(kind: ItemKind, label: &'static str, verb: &'static str) -> Self {
        MenuItem { kind, label, verb }
    }
}

/// Commands used by gamepad menus.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Command {
    /// Open device selection menu.
    GamepadDevices,
    /// Activate device under the cursor of device menu.
    SelectGamepad,
    ApplyProfile,
    Axes,
    Automap,
    Inventory,
    Menus,
    Movement,
    Back,
}

impl Command {
    pub fn from_verb(verb: &str) -> Option<Self> {
        let cmd = match verb {
            "gamepaddev" => Command::GamepadDevices,
            "selgamepad" => Command::SelectGamepad,
            "gpprofile" => Command::ApplyProfile,
            "gpaxes" => Command::Axes,
            "gpautomap" => Command::Automap,
            "gpinv" => Command::Inventory,
            "gpmenus" => Command::Menus,
            "gpmovement" => Command::Movement,
            "back" => Command::Back,
            _ => return None,
        };

        Some(cmd)
    }

    pub fn verb(self) -> &'static str {
        match self {
            Command::GamepadDevices => "gamepaddev",
            Command::SelectGamepad => "selgamepad",
            Command::ApplyProfile => "gpprofile",
            Command::Axes => "gpaxes",
            Command::Automap => "gpautomap",
            Command::Inventory => "gpinv",
            Command::Menus => "gpmenus",
            Command::Movement => "gpmovement",
            Command::Back => "back",
        }
    }

    /// Static submenu opened by this command.
    pub fn submenu(self) -> Option<&'static Menu> {
        match self {
            Command::Axes => Some(&AXES),
            Command::Automap => Some(&AUTOMAP),
            Command::Inventory => Some(&INVENTORY),
            Command::Menus => Some(&MENU_BUTTONS),
            Command::Movement => Some(&MOVEMENT),
            _ => None,
        }
    }
}

/// Titled list of items.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Menu {
    pub title: &'static str,
    pub items: &'static [MenuItem],
}

use self::ItemKind::{BindAxis, BindButton, Toggle};

/// Index of "Apply Profile" in `GAMEPAD`.
pub const APPLY_PROFILE_ITEM: usize = 1;

pub static GAMEPAD: Menu = Menu {
    title: "Gamepad Options",
    items: &[
        MenuItem::new(ItemKind::Command, "Select Device", "gamepaddev"),
        MenuItem::new(ItemKind::Command, "Apply Profile", "gpprofile"),
        MenuItem::new(ItemKind::Command, "Axes", "gpaxes"),
        MenuItem::new(ItemKind::Command, "Automap", "gpautomap"),
        MenuItem::new(ItemKind::Command, "Inventory", "gpinv"),
        MenuItem::new(ItemKind::Command, "Menus", "gpmenus"),
        MenuItem::new(ItemKind::Command, "Movement", "gpmovement"),
    ],
};

pub static AXES: Menu = Menu {
    title: "Gamepad Axes",
    items: &[
        MenuItem::new(BindAxis, "Move Forward/Back", "joystick_y_axis"),
        MenuItem::new(BindAxis, "Turn Left/Right", "joystick_x_axis"),
        MenuItem::new(BindAxis, "Strafe Left/Right", "joystick_strafe_axis"),
        MenuItem::new(BindAxis, "Look Up/Down", "joystick_look_axis"),
        MenuItem::new(Toggle, "Invert Move Axis", "joystick_y_invert"),
        MenuItem::new(Toggle, "Invert Turn Axis", "joystick_x_invert"),
        MenuItem::new(Toggle, "Invert Strafe Axis", "joystick_strafe_invert"),
        MenuItem::new(Toggle, "Invert Look Axis", "joystick_look_invert"),
    ],
};

pub static AUTOMAP: Menu = Menu {
    title: "Gamepad Automap",
    items: &[
        MenuItem::new(BindButton, "Toggle Map View", "joybmap_toggle"),
        MenuItem::new(BindButton, "Scroll North", "joybmap_north"),
        MenuItem::new(BindButton, "Scroll South", "joybmap_south"),
        MenuItem::new(BindButton, "Scroll East", "joybmap_east"),
        MenuItem::new(BindButton, "Scroll West", "joybmap_west"),
        MenuItem::new(BindButton, "Zoom In", "joybmap_zoomin"),
        MenuItem::new(BindButton, "Zoom Out", "joybmap_zoomout"),
        MenuItem::new(BindButton, "Follow Mode", "joybmap_follow"),
        MenuItem::new(BindButton, "Mark Spot", "joybmap_mark"),
        MenuItem::new(BindButton, "Clear Last Mark", "joybmap_clearmark"),
    ],
};

pub static MENU_BUTTONS: Menu = Menu {
    title: "Gamepad Menu",
    items: &[
        MenuItem::new(BindButton, "Toggle Menus", "joyb_menu_activate"),
        MenuItem::new(BindButton, "Previous Item", "joyb_menu_up"),
        MenuItem::new(BindButton, "Next Item", "joyb_menu_down"),
        MenuItem::new(BindButton, "Decrease Value", "joyb_menu_left"),
        MenuItem::new(BindButton, "Increase Value", "joyb_menu_right"),
        MenuItem::new(BindButton, "Go Back", "joyb_menu_back"),
        MenuItem::new(BindButton, "Activate Item", "joyb_menu_forward"),
        MenuItem::new(BindButton, "Answer Yes", "joyb_menu_confirm"),
        MenuItem::new(BindButton, "Answer No", "joyb_menu_abort"),
    ],
};

pub static MOVEMENT: Menu = Menu {
    title: "Gamepad Movement",
    items: &[
        MenuItem::new(BindButton, "Strafe Left", "joyb_strafeleft"),
        MenuItem::new(BindButton, "Strafe Right", "joyb_straferight"),
        MenuItem::new(BindButton, "Strafe On", "joyb_strafe"),
        MenuItem::new(BindButton, "Attack", "joyb_fire"),
        MenuItem::new(BindButton, "Use / Activate", "joyb_use"),
        MenuItem::new(BindButton, "Run", "joyb_speed"),
        MenuItem::new(BindButton, "Jump", "joyb_jump"),
        MenuItem::new(BindButton, "Previous Weapon", "joyb_prevweapon"),
        MenuItem::new(BindButton, "Next Weapon", "joyb_nextweapon"),
    ],
};

pub static INVENTORY: Menu = Menu {
    title: "Gamepad Inventory",
    items: &[
        MenuItem::new(BindButton, "Scroll Left", "joyb_invleft"),
        MenuItem::new(BindButton, "Scroll Right", "joyb_invright"),
        MenuItem::new(BindButton, "Use Current Item", "joyb_invuse"),
        MenuItem::new(BindButton, "Drop Current Item", "joyb_invdrop"),
        MenuItem::new(BindButton, "View Status", "joyb_invpop"),
        MenuItem::new(BindButton, "View Mission", "joyb_mission"),
        MenuItem::new(BindButton, "View Keys", "joyb_invkey"),
    ],
};
