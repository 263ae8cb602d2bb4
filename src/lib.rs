// Copyright 2016-2018 Mateusz Sieczko and other GilRs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! padbind - gamepad bindings for Doom-family engines
//! ==================================================
//!
//! padbind turns raw controller state into virtual buttons and axes that game code can bind
//! actions to. It also provides everything gamepad options menus need: device selection,
//! built-in profiles for known controllers and interactive "press a button" rebinding.
//!
//! Example
//! -------
//!
//! ```
//! use padbind::platform::MemorySource;
//! use padbind::{Event, MapperBuilder};
//!
//! let source = MemorySource::with_devices(&["Controller (XBOX 360 For Windows)"]);
//! let mut mapper = MapperBuilder::new().build(source);
//!
//! // Game loop
//! loop {
//!     mapper.update();
//!     while let Some(event) = mapper.next_event() {
//!         match event {
//!             Event::ButtonPressed(code) => println!("{} pressed", mapper.button_name(code.into())),
//!             Event::ButtonReleased(code) => println!("{} released", mapper.button_name(code.into())),
//!             Event::Movement(quad) => println!("{:?}", quad),
//!         }
//!     }
//!     # break;
//! }
//! ```
//!
//! Virtual buttons
//! ---------------
//!
//! | Codes    | Source                                                    |
//! |----------|-----------------------------------------------------------|
//! | `0..15`  | physical buttons in game controller order                 |
//! | `15..23` | one direction of a stick axis, past the dead zone         |
//! | `23..25` | left and right trigger, past the dead zone                |
//!
//! Codes are listed in [`constants`]. The dead zone is one third of the axis range. With
//! south-paw enabled move and look sticks are swapped before anything is read.
//!
//! Input sources
//! -------------
//!
//! Controller state is read through [`InputSource`](platform::InputSource). [`MemorySource`]
//! keeps state set by its owner and [`NullSource`] has no devices. With the `native` feature,
//! `NativeSource` reads real gamepads using `gilrs`.
//!
//! [`MemorySource`]: platform::MemorySource
//! [`NullSource`]: platform::NullSource

pub mod config;
pub mod constants;
pub mod ev;
pub mod frontend;
pub mod mapping;
pub mod platform;
pub mod vars;

mod mapper;

pub use crate::config::Settings;
pub use crate::ev::{AxisQuad, ButtonEdges, ButtonMask, Code, Detected, Event};
pub use crate::mapper::{Mapper, MapperBuilder};
pub use crate::mapping::{Catalog, PadEntry, Platform, Profile};
