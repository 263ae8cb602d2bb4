// Copyright 2016-2018 Mateusz Sieczko and other GilRs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::config::Settings;
use crate::constants::*;
use crate::ev::filter::{self, DeadZone};
use crate::ev::{AxisQuad, ButtonEdges, ButtonMask, ButtonSource, Code, Detected, Event};
use crate::mapping::{self, Catalog, Profile};
use crate::platform::{DeviceHandle, InputSource, InputSuppressor, NoSuppressor};
use crate::vars::ConfigVars;

use std::borrow::Cow;
use std::collections::VecDeque;
use std::fmt::{self, Debug, Formatter};
use uuid::Uuid;

/// Maps raw controller state to virtual buttons and axes.
///
/// `Mapper` owns at most one open device of its [`InputSource`]. Call [`update()`] once per tick
/// and then drain generated events with [`next_event()`].
///
/// ```
/// use padbind::platform::MemorySource;
/// use padbind::{Event, MapperBuilder};
///
/// let source = MemorySource::with_devices(&["Controller (XBOX 360 For Windows)"]);
/// let mut mapper = MapperBuilder::new().build(source);
/// assert_eq!(mapper.active_index(), 0);
///
/// mapper.source_mut().device_mut(0).unwrap().set_button(0, true);
/// mapper.update();
/// assert_eq!(mapper.next_event(), Some(Event::ButtonPressed(0)));
/// assert_eq!(mapper.next_event(), None);
/// ```
///
/// [`update()`]: Mapper::update
/// [`next_event()`]: Mapper::next_event
pub struct Mapper<S: InputSource> {
    source: S,
    available: bool,
    allowed: bool,
    device: Option<DeviceHandle>,
    active_index: i32,
    settings: Settings,
    catalog: Catalog,
    dead_zone: DeadZone,
    old_buttons: ButtonMask,
    events: VecDeque<Event>,
    suppressor: Box<dyn InputSuppressor>,
    saw_joystick: bool,
}

impl<S: InputSource> Mapper<S> {
    /// Closes currently open device and opens device at `index`.
    ///
    /// Out of range index, disabled controllers or failure to open leave no device open. This is
    /// not an error. `active_index()` still reports `index` afterwards. The index is also stored
    /// in `settings().joystick_index`.
    pub fn activate(&mut self, index: i32) {
        self.close();
        self.active_index = index;
        self.settings.joystick_index = index;

        if !self.available || !self.allowed {
            return;
        }

        let idx = match usize::try_from(index) {
            Ok(idx) if idx < self.source.device_count() => idx,
            _ => {
                log::debug!("No gamepad with index {}", index);
                return;
            }
        };

        match self.source.open(idx) {
            Ok(handle) => {
                self.source.enable_events(handle);
                self.device = Some(handle);
                log::info!(
                    "Activated gamepad {}: {} ({})",
                    idx,
                    self.source.device_name(idx).unwrap_or("<unnamed>"),
                    self.source
                        .device_uuid(idx)
                        .map_or_else(|| "no uuid".to_owned(), |uuid| uuid.to_string())
                );
            }
            Err(e) => log::warn!("Failed to open gamepad {}: {}", idx, e),
        }
    }

    /// Releases open device. Does nothing if no device is open.
    pub fn close(&mut self) {
        if let Some(handle) = self.device.take() {
            self.source.close(handle);
            log::debug!("Closed gamepad {}", self.active_index);
        }
    }

    /// Index passed to last `activate()` call, `-1` if none.
    pub fn active_index(&self) -> i32 {
        self.active_index
    }

    /// Returns `true` if device is currently open.
    pub fn is_active(&self) -> bool {
        self.device.is_some()
    }

    pub fn device_count(&self) -> usize {
        if self.available {
            self.source.device_count()
        } else {
            0
        }
    }

    pub fn device_name(&self, index: usize) -> Option<&str> {
        if self.available {
            self.source.device_name(index)
        } else {
            None
        }
    }

    /// Name of the selected device. A device that failed to open still has its name.
    pub fn active_device_name(&self) -> Option<&str> {
        let idx = usize::try_from(self.active_index).ok()?;
        self.device_name(idx)
    }

    /// UUID of the selected device, if the input source knows it.
    pub fn active_device_uuid(&self) -> Option<Uuid> {
        let idx = usize::try_from(self.active_index).ok()?;
        if self.available {
            self.source.device_uuid(idx)
        } else {
            None
        }
    }

    /// Returns `false` if controllers were disabled by settings.
    pub fn is_allowed(&self) -> bool {
        self.allowed
    }

    /// Returns `false` if input source failed to initialize.
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Returns `true` if virtual button `code` is pressed. Unknown codes and reads with no device
    /// open are not pressed.
    pub fn read_button(&self, code: Code) -> bool {
        let handle = match self.device {
            Some(handle) => handle,
            None => return false,
        };

        match ButtonSource::of(code) {
            Some(ButtonSource::Physical(btn)) => self.source.button(handle, btn),
            Some(ButtonSource::AxisDirection { axis, sign }) => {
                self.dead_zone.reached(self.read_axis(axis, false) * sign)
            }
            Some(ButtonSource::Trigger(axis)) => self.dead_zone.reached(self.read_axis(axis, false)),
            None => false,
        }
    }

    /// Reads virtual `axis` with south-paw swap, dead zone and optional inversion applied.
    ///
    /// Returns 0 for unknown axes or if no device is open.
    pub fn read_axis(&self, axis: u8, invert: bool) -> i32 {
        if axis >= AXIS_COUNT {
            return 0;
        }

        let value = self.dead_zone.apply(self.raw_axis(axis));
        filter::invert(value, invert)
    }

    // Physical reading behind virtual `axis`, without any filtering.
    fn raw_axis(&self, axis: u8) -> i32 {
        match self.device {
            Some(handle) => i32::from(
                self.source
                    .axis(handle, filter::source_axis(axis, self.settings.southpaw)),
            ),
            None => 0,
        }
    }

    /// Mask of currently pressed virtual buttons.
    pub fn current_buttons(&self) -> ButtonMask {
        let mut mask = ButtonMask::new();
        for code in 0..PBTN_COUNT {
            if self.read_button(code) {
                mask.set(code);
            }
        }
        mask
    }

    /// Compares pressed buttons with the previous poll and remembers current state.
    pub fn poll_button_edges(&mut self) -> ButtonEdges {
        let current = self.current_buttons();
        let edges = ButtonEdges::between(self.old_buttons, current);
        self.old_buttons = current;
        edges
    }

    /// Buttons that were pressed since the previous poll. Shares state with
    /// `poll_button_edges()`.
    pub fn new_presses(&mut self) -> ButtonMask {
        self.poll_button_edges().pressed
    }

    /// Reads movement and look axes with their invert flags.
    pub fn poll_movement_axes(&self) -> AxisQuad {
        let s = &self.settings;
        AxisQuad {
            turn: self.read_axis(AXIS_LOOK_X, s.x_invert),
            forward: self.read_axis(AXIS_MOVE_Y, s.y_invert),
            strafe: self.read_axis(AXIS_MOVE_X, s.strafe_invert),
            look: self.read_axis(AXIS_LOOK_Y, s.look_invert),
        }
    }

    /// Processes one tick of controller input.
    ///
    /// Queues one `Movement` event if any movement axis is outside of the dead zone, followed by
    /// `ButtonPressed` and then `ButtonReleased` events in ascending code order. Nothing is read
    /// while input is suppressed or when no device is open.
    pub fn update(&mut self) {
        self.settings.clamp();

        if self.suppressor.should_suppress() {
            return;
        }

        self.source.pump();

        let handle = match self.device {
            Some(handle) => handle,
            None => return,
        };
        self.follow_device(handle);

        let quad = self.poll_movement_axes();
        if !quad.is_zero() {
            self.events.push_back(Event::Movement(quad));
            self.saw_joystick = true;
        }

        let edges = self.poll_button_edges();
        for code in &edges.pressed {
            log::debug!("Gamepad button {} pressed", code);
            self.events.push_back(Event::ButtonPressed(code));
        }
        for code in &edges.released {
            log::debug!("Gamepad button {} released", code);
            self.events.push_back(Event::ButtonReleased(code));
            self.saw_joystick = true;
        }
    }

    // Hotplug may renumber devices. Keep the active index on the open device.
    fn follow_device(&mut self, handle: DeviceHandle) {
        let index = match self.source.device_index(handle).map(i32::try_from) {
            Some(Ok(index)) => index,
            _ => return,
        };

        if index != self.active_index {
            log::debug!("Gamepad {} moved to index {}", self.active_index, index);
            self.active_index = index;
            self.settings.joystick_index = index;
        }
    }

    /// Returns next pending event.
    pub fn next_event(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    /// Lowest pressed virtual button. If no button is pressed, reports generic activity when
    /// some axis is pushed past twice the dead zone.
    pub fn detect_pressed_button_or_axis(&self) -> Option<Detected> {
        self.device?;

        if let Some(code) = (0..PBTN_COUNT).find(|&code| self.read_button(code)) {
            return Some(Detected::Button(code));
        }

        (0..AXIS_COUNT)
            .any(|axis| self.dead_zone.exceeded_by(self.raw_axis(axis), 2))
            .then_some(Detected::AxisActivity)
    }

    /// Axis with the largest deflection past the dead zone and its magnitude.
    ///
    /// Physical axes are scanned in ascending order and the first one wins ties. The returned
    /// index is a virtual axis, so with south-paw enabled physical move X is reported as look X.
    pub fn detect_dominant_axis(&self) -> Option<(u8, i32)> {
        let handle = self.device?;
        let mut best: Option<(u8, i32)> = None;

        for axis in 0..AXIS_COUNT {
            let value = i32::from(self.source.axis(handle, axis));
            if !self.dead_zone.exceeded_by(value, 1) {
                continue;
            }

            let magnitude = value.abs();
            if best.map_or(true, |(_, m)| magnitude > m) {
                best = Some((filter::source_axis(axis, self.settings.southpaw), magnitude));
            }
        }

        best
    }

    /// Profile of the selected device, if the catalog knows it.
    pub fn profile_for_active_device(&self) -> Option<&'static Profile> {
        self.catalog.profile_for(self.active_device_name()?)
    }

    /// Overwrites all profile variables with `profile`.
    pub fn apply_profile<V: ConfigVars + ?Sized>(&self, profile: &Profile, vars: &mut V) {
        log::info!("Applying gamepad profile");
        mapping::apply_profile(profile, vars);
    }

    /// Applies profile of the selected device. Returns `false` if there is none.
    pub fn auto_apply_profile<V: ConfigVars + ?Sized>(&self, vars: &mut V) -> bool {
        match self.profile_for_active_device() {
            Some(profile) => {
                self.apply_profile(profile, vars);
                true
            }
            None => false,
        }
    }

    /// Display name of button binding `code` on the selected device.
    pub fn button_name(&self, code: i32) -> Cow<'static, str> {
        self.catalog.button_name(self.active_device_name(), code)
    }

    /// Display name of axis binding `code` on the selected device.
    pub fn axis_name(&self, code: i32) -> Cow<'static, str> {
        self.catalog.axis_name(self.active_device_name(), code)
    }

    /// Returns `true` if controller input was seen since the flag was last cleared.
    pub fn saw_joystick(&self) -> bool {
        self.saw_joystick
    }

    pub fn clear_saw_joystick(&mut self) {
        self.saw_joystick = false;
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the input source. Closing the open device through it leaves the mapper
    /// with a stale handle.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

impl<S: InputSource> Drop for Mapper<S> {
    fn drop(&mut self) {
        self.close();
    }
}

impl<S: InputSource + Debug> Debug for Mapper<S> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Mapper")
            .field("source", &self.source)
            .field("available", &self.available)
            .field("allowed", &self.allowed)
            .field("device", &self.device)
            .field("active_index", &self.active_index)
            .field("settings", &self.settings)
            .field("old_buttons", &self.old_buttons)
            .field("events", &self.events)
            .finish()
    }
}

/// Allow to create `Mapper` with customized behaviour.
pub struct MapperBuilder {
    settings: Settings,
    catalog: Option<Catalog>,
    suppressor: Box<dyn InputSuppressor>,
}

impl MapperBuilder {
    pub fn new() -> Self {
        MapperBuilder {
            settings: Settings::default(),
            catalog: None,
            suppressor: Box::new(NoSuppressor),
        }
    }

    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Use `catalog` instead of the built-in one for the current platform.
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Use `suppressor` to decide when `update()` should ignore input.
    pub fn suppressor<T: InputSuppressor + 'static>(mut self, suppressor: T) -> Self {
        self.suppressor = Box::new(suppressor);
        self
    }

    /// Initializes `source` and activates configured device.
    ///
    /// Initialization failure is not fatal, returned mapper reports no devices.
    pub fn build<S: InputSource>(self, source: S) -> Mapper<S> {
        let mut settings = self.settings;
        settings.clamp();

        let mut mapper = Mapper {
            source,
            available: false,
            allowed: settings.use_joystick,
            device: None,
            active_index: -1,
            settings,
            catalog: self.catalog.unwrap_or_default(),
            dead_zone: DeadZone::new(),
            old_buttons: ButtonMask::new(),
            events: VecDeque::new(),
            suppressor: self.suppressor,
            saw_joystick: false,
        };

        if !mapper.allowed {
            log::info!("Gamepad support disabled");
            return mapper;
        }

        match mapper.source.init() {
            Ok(()) => mapper.available = true,
            Err(e) => {
                log::warn!("Failed to initialize gamepad support: {}", e);
                return mapper;
            }
        }

        log::info!("Found {} gamepad(s)", mapper.source.device_count());

        let mut index = mapper.settings.joystick_index;
        if index == -1 && mapper.source.device_count() > 0 {
            index = 0;
        }
        mapper.activate(index);

        mapper
    }
}

impl Default for MapperBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::{Platform, PROFILE_VARS};
    use crate::platform::{MemoryDevice, MemorySource};
    use crate::vars::VarTable;

    use std::cell::Cell;
    use std::rc::Rc;

    const X360: &str = "Controller (XBOX 360 For Windows)";

    fn mapper_with(names: &[&str], settings: Settings) -> Mapper<MemorySource> {
        let _ = env_logger::builder().is_test(true).try_init();
        MapperBuilder::new()
            .settings(settings)
            .catalog(Catalog::for_platform(Platform::Windows))
            .build(MemorySource::with_devices(names))
    }

    fn mapper() -> Mapper<MemorySource> {
        mapper_with(&[X360], Settings::default())
    }

    fn set_axis(mapper: &mut Mapper<MemorySource>, axis: u8, value: i16) {
        mapper.source_mut().device_mut(0).unwrap().set_axis(axis, value);
    }

    fn set_button(mapper: &mut Mapper<MemorySource>, btn: u8, pressed: bool) {
        mapper
            .source_mut()
            .device_mut(0)
            .unwrap()
            .set_button(btn, pressed);
    }

    fn events(mapper: &mut Mapper<MemorySource>) -> Vec<Event> {
        std::iter::from_fn(|| mapper.next_event()).collect()
    }

    #[test]
    fn builder_activates_first_device() {
        let mapper = mapper();
        assert!(mapper.is_available());
        assert!(mapper.is_allowed());
        assert!(mapper.is_active());
        assert_eq!(mapper.active_index(), 0);
        assert_eq!(mapper.active_device_name(), Some(X360));
        assert!(mapper.source().events_enabled(0));
    }

    #[test]
    fn builder_uses_configured_index() {
        let settings = Settings {
            joystick_index: 1,
            ..Settings::default()
        };
        let mapper = mapper_with(&["A", "B"], settings);
        assert_eq!(mapper.active_index(), 1);
        assert_eq!(mapper.active_device_name(), Some("B"));
    }

    #[test]
    fn no_devices() {
        let mapper = mapper_with(&[], Settings::default());
        assert_eq!(mapper.active_index(), -1);
        assert!(!mapper.is_active());
        assert_eq!(mapper.source().opens(), 0);
    }

    #[test]
    fn disabled_by_settings() {
        let settings = Settings {
            use_joystick: false,
            ..Settings::default()
        };
        let mut mapper = mapper_with(&[X360], settings);
        assert!(!mapper.is_allowed());
        assert!(!mapper.source().is_initialized());
        mapper.activate(0);
        assert!(!mapper.is_active());
        assert_eq!(mapper.source().opens(), 0);
    }

    #[test]
    fn failed_init_degrades() {
        let mut source = MemorySource::unavailable();
        source.push(MemoryDevice::new(X360));
        let mut mapper = MapperBuilder::new().build(source);

        assert!(!mapper.is_available());
        assert_eq!(mapper.device_count(), 0);
        assert_eq!(mapper.device_name(0), None);
        mapper.activate(0);
        assert!(!mapper.is_active());
        assert_eq!(mapper.active_index(), 0);
        assert_eq!(mapper.source().opens(), 0);
        mapper.update();
        assert_eq!(mapper.next_event(), None);
    }

    #[test]
    fn double_activation_does_not_leak() {
        let mut mapper = mapper();
        mapper.activate(0);
        mapper.activate(0);
        assert_eq!(mapper.source().opens(), 3);
        assert_eq!(mapper.source().closes(), 2);
        assert_eq!(mapper.source().open_devices(), 1);
    }

    #[test]
    fn failed_open_closes_previous() {
        let mut source = MemorySource::with_devices(&["A", "B"]);
        source.device_mut(1).unwrap().connected = false;
        let mut mapper = MapperBuilder::new().build(source);
        assert!(mapper.is_active());

        mapper.activate(1);
        assert!(!mapper.is_active());
        assert_eq!(mapper.active_index(), 1);
        assert_eq!(mapper.active_device_name(), Some("B"));
        assert_eq!(mapper.source().open_devices(), 0);
    }

    #[test]
    fn out_of_range_index() {
        let mut mapper = mapper();
        mapper.activate(5);
        assert!(!mapper.is_active());
        assert_eq!(mapper.active_index(), 5);
        mapper.activate(-1);
        assert_eq!(mapper.active_index(), -1);
        assert_eq!(mapper.source().open_devices(), 0);
        assert_eq!(mapper.active_device_name(), None);
    }

    #[test]
    fn close_is_idempotent() {
        let mut mapper = mapper();
        mapper.close();
        mapper.close();
        assert_eq!(mapper.source().closes(), 1);
        assert_eq!(mapper.active_index(), 0);
    }

    #[test]
    fn read_axis_dead_zone() {
        let mut mapper = mapper();
        set_axis(&mut mapper, AXIS_LOOK_X, 20000);
        assert_eq!(mapper.read_axis(AXIS_LOOK_X, false), 20000);

        set_axis(&mut mapper, AXIS_LOOK_X, 10921);
        assert_eq!(mapper.read_axis(AXIS_LOOK_X, false), 0);
        set_axis(&mut mapper, AXIS_LOOK_X, -10921);
        assert_eq!(mapper.read_axis(AXIS_LOOK_X, false), 0);

        set_axis(&mut mapper, AXIS_LOOK_X, 10922);
        assert_eq!(mapper.read_axis(AXIS_LOOK_X, false), 10922);
        set_axis(&mut mapper, AXIS_LOOK_X, -10922);
        assert_eq!(mapper.read_axis(AXIS_LOOK_X, false), -10922);

        assert_eq!(mapper.read_axis(AXIS_COUNT, false), 0);
    }

    #[test]
    fn read_axis_invert_is_negation() {
        let mut mapper = mapper();
        for &value in &[0, 100, -10921, 10922, -20000, 32767, -32768] {
            for axis in 0..AXIS_COUNT {
                set_axis(&mut mapper, axis, value);
                assert_eq!(
                    mapper.read_axis(axis, true),
                    -mapper.read_axis(axis, false)
                );
            }
        }
    }

    #[test]
    fn southpaw_reads_other_stick() {
        let mut mapper = mapper();
        set_axis(&mut mapper, AXIS_MOVE_X, -25000);
        set_axis(&mut mapper, AXIS_LOOK_X, 20000);
        assert_eq!(mapper.read_axis(AXIS_LOOK_X, false), 20000);

        mapper.settings_mut().southpaw = true;
        assert_eq!(mapper.read_axis(AXIS_LOOK_X, false), -25000);
        assert_eq!(mapper.read_axis(AXIS_MOVE_X, false), 20000);

        mapper.settings_mut().southpaw = false;
        assert_eq!(mapper.read_axis(AXIS_LOOK_X, false), 20000);
    }

    #[test]
    fn southpaw_hides_triggers() {
        let mut mapper = mapper();
        set_axis(&mut mapper, AXIS_RIGHT_TRIGGER, 30000);
        assert!(mapper.read_button(PBTN_RIGHT_TRIGGER));
        mapper.settings_mut().southpaw = true;
        assert!(!mapper.read_button(PBTN_RIGHT_TRIGGER));
    }

    #[test]
    fn axis_direction_buttons() {
        let mut mapper = mapper();
        set_axis(&mut mapper, AXIS_MOVE_X, -15000);
        assert!(mapper.read_button(PBTN_MOVE_DOWN));
        assert!(!mapper.read_button(PBTN_MOVE_UP));

        set_axis(&mut mapper, AXIS_MOVE_X, -5000);
        assert!(!mapper.read_button(PBTN_MOVE_DOWN));

        set_axis(&mut mapper, AXIS_MOVE_X, 10922);
        assert!(mapper.read_button(PBTN_MOVE_UP));
        assert!(!mapper.read_button(PBTN_MOVE_DOWN));

        set_axis(&mut mapper, AXIS_LOOK_Y, -32768);
        assert!(mapper.read_button(PBTN_LOOK_RIGHT));
    }

    #[test]
    fn triggers_and_unknown_codes() {
        let mut mapper = mapper();
        set_axis(&mut mapper, AXIS_LEFT_TRIGGER, 12000);
        assert!(mapper.read_button(PBTN_LEFT_TRIGGER));
        assert!(!mapper.read_button(PBTN_RIGHT_TRIGGER));
        assert!(!mapper.read_button(PBTN_COUNT));
        assert!(!mapper.read_button(200));
    }

    #[test]
    fn no_device_reads_nothing() {
        let mut mapper = mapper();
        set_button(&mut mapper, BTN_A, true);
        set_axis(&mut mapper, AXIS_MOVE_Y, 30000);
        mapper.close();

        assert!(!mapper.read_button(BTN_A));
        assert_eq!(mapper.read_axis(AXIS_MOVE_Y, false), 0);
        assert!(mapper.poll_movement_axes().is_zero());
        assert_eq!(mapper.detect_pressed_button_or_axis(), None);
        assert_eq!(mapper.detect_dominant_axis(), None);
    }

    #[test]
    fn edges_report_each_transition_once() {
        let mut mapper = mapper();
        set_button(&mut mapper, BTN_A, true);
        set_button(&mut mapper, BTN_START, true);
        set_axis(&mut mapper, AXIS_MOVE_Y, 20000);

        let edges = mapper.poll_button_edges();
        assert_eq!(
            edges.pressed.iter().collect::<Vec<_>>(),
            vec![BTN_A, BTN_START, PBTN_MOVE_LEFT]
        );
        assert!(edges.released.is_empty());
        assert!(mapper.poll_button_edges().is_empty());

        set_button(&mut mapper, BTN_A, false);
        set_button(&mut mapper, BTN_B, true);
        let edges = mapper.poll_button_edges();
        assert_eq!(edges.pressed.iter().collect::<Vec<_>>(), vec![BTN_B]);
        assert_eq!(edges.released.iter().collect::<Vec<_>>(), vec![BTN_A]);
        assert!(mapper.poll_button_edges().is_empty());
    }

    #[test]
    fn new_presses_shares_state() {
        let mut mapper = mapper();
        set_button(&mut mapper, BTN_Y, true);
        assert!(mapper.new_presses().is_set(BTN_Y));
        assert!(mapper.poll_button_edges().is_empty());
    }

    #[test]
    fn movement_quad() {
        let mut mapper = mapper();
        set_axis(&mut mapper, AXIS_LOOK_X, 12000);
        set_axis(&mut mapper, AXIS_MOVE_Y, -15000);
        set_axis(&mut mapper, AXIS_MOVE_X, 5000);
        set_axis(&mut mapper, AXIS_LOOK_Y, 30000);
        mapper.settings_mut().look_invert = true;
        mapper.settings_mut().x_invert = true;

        assert_eq!(
            mapper.poll_movement_axes(),
            AxisQuad {
                turn: -12000,
                forward: -15000,
                strafe: 0,
                look: -30000,
            }
        );
    }

    #[test]
    fn update_queues_events_in_order() {
        let mut mapper = mapper();
        mapper.update();
        assert!(events(&mut mapper).is_empty());
        assert!(!mapper.saw_joystick());

        set_button(&mut mapper, BTN_X, true);
        set_button(&mut mapper, BTN_B, true);
        mapper.update();
        assert_eq!(
            events(&mut mapper),
            vec![Event::ButtonPressed(BTN_B), Event::ButtonPressed(BTN_X)]
        );
        // Presses alone do not mark joystick as seen.
        assert!(!mapper.saw_joystick());

        set_button(&mut mapper, BTN_X, false);
        set_button(&mut mapper, BTN_B, false);
        set_button(&mut mapper, BTN_A, true);
        set_axis(&mut mapper, AXIS_LOOK_X, -20000);
        mapper.update();
        assert_eq!(
            events(&mut mapper),
            vec![
                Event::Movement(AxisQuad {
                    turn: -20000,
                    ..AxisQuad::default()
                }),
                Event::ButtonPressed(BTN_A),
                Event::ButtonPressed(PBTN_LOOK_UP + 1),
                Event::ButtonReleased(BTN_B),
                Event::ButtonReleased(BTN_X),
            ]
        );
        assert!(mapper.saw_joystick());
        mapper.clear_saw_joystick();
        assert!(!mapper.saw_joystick());
        assert_eq!(mapper.source().pumps(), 3);
    }

    #[test]
    fn update_clamps_settings() {
        let mut mapper = mapper();
        mapper.settings_mut().sensitivity = 0.0;
        mapper.settings_mut().threshold = 0.0;
        mapper.update();
        assert_eq!(mapper.settings().sensitivity, 0.001);
        assert_eq!(mapper.settings().threshold, 1.0);
    }

    #[test]
    fn suppressed_update_reads_nothing() {
        let suppressed = Rc::new(Cell::new(true));
        let flag = suppressed.clone();
        let mut mapper = MapperBuilder::new()
            .suppressor(move || flag.get())
            .build(MemorySource::with_devices(&[X360]));

        set_button(&mut mapper, BTN_A, true);
        set_axis(&mut mapper, AXIS_MOVE_Y, 30000);
        mapper.update();
        assert_eq!(mapper.next_event(), None);
        assert_eq!(mapper.source().pumps(), 0);

        suppressed.set(false);
        mapper.update();
        assert_eq!(events(&mut mapper).len(), 3);
    }

    #[test]
    fn detect_first_pressed_button() {
        let mut mapper = mapper();
        assert_eq!(mapper.detect_pressed_button_or_axis(), None);

        set_button(&mut mapper, BTN_DPAD_LEFT, true);
        set_axis(&mut mapper, AXIS_LEFT_TRIGGER, 30000);
        assert_eq!(
            mapper.detect_pressed_button_or_axis(),
            Some(Detected::Button(BTN_DPAD_LEFT))
        );

        set_button(&mut mapper, BTN_DPAD_LEFT, false);
        assert_eq!(
            mapper.detect_pressed_button_or_axis(),
            Some(Detected::Button(PBTN_LEFT_TRIGGER))
        );
    }

    #[test]
    fn detect_axis_activity() {
        let mut mapper = mapper();
        // Past the dead zone, the axis reads as a pressed direction button.
        set_axis(&mut mapper, AXIS_MOVE_Y, 15000);
        assert_eq!(
            mapper.detect_pressed_button_or_axis(),
            Some(Detected::Button(PBTN_MOVE_LEFT))
        );

        // Negative trigger values never press the trigger button.
        set_axis(&mut mapper, AXIS_MOVE_Y, 0);
        set_axis(&mut mapper, AXIS_LEFT_TRIGGER, -21844);
        assert_eq!(mapper.detect_pressed_button_or_axis(), None);
        set_axis(&mut mapper, AXIS_LEFT_TRIGGER, -21845);
        assert_eq!(
            mapper.detect_pressed_button_or_axis(),
            Some(Detected::AxisActivity)
        );

        // Physical triggers are not scanned with south-paw enabled.
        mapper.settings_mut().southpaw = true;
        assert_eq!(mapper.detect_pressed_button_or_axis(), None);
    }

    #[test]
    fn dominant_axis() {
        let mut mapper = mapper();
        assert_eq!(mapper.detect_dominant_axis(), None);

        set_axis(&mut mapper, AXIS_MOVE_X, 10922);
        assert_eq!(mapper.detect_dominant_axis(), None);

        set_axis(&mut mapper, AXIS_MOVE_Y, -20000);
        set_axis(&mut mapper, AXIS_LOOK_Y, 20000);
        set_axis(&mut mapper, AXIS_LOOK_X, 15000);
        assert_eq!(mapper.detect_dominant_axis(), Some((AXIS_MOVE_Y, 20000)));

        mapper.settings_mut().southpaw = true;
        assert_eq!(mapper.detect_dominant_axis(), Some((AXIS_LOOK_Y, 20000)));

        set_axis(&mut mapper, AXIS_RIGHT_TRIGGER, 32767);
        assert_eq!(mapper.detect_dominant_axis(), Some((7, 32767)));
    }

    #[test]
    fn profile_lookup() {
        let mut mapper = mapper();
        let profile = mapper.profile_for_active_device().unwrap();
        assert_eq!(profile[0], 1);
        assert_eq!(profile[30], 22);

        #[rustfmt::skip]
        let expected = [
             1,  4,  0,  3,
             0,  0,  0,  0,
             6, 21, 16, 15, 20, 22, 17,  9, -1, -1,
             7, 25, 27, 28, 26,  1,  0,  0,  1,
            -1, -1, -1, 22,  0, -1,  5,  9,  2,  3, 28, 26,  1, 27, 25,  4, -1,
        ];
        assert_eq!(profile.values(), &expected);

        let mut vars = VarTable::new();
        assert!(mapper.auto_apply_profile(&mut vars));
        assert_eq!(vars.len(), PROFILE_VARS.len());
        for (var, value) in PROFILE_VARS.iter().zip(expected.iter()) {
            assert_eq!(vars.get_int(var), Some(*value), "{}", var);
        }

        // Closing keeps the selection.
        mapper.close();
        assert!(mapper.profile_for_active_device().is_some());

        mapper.activate(-1);
        assert!(mapper.profile_for_active_device().is_none());
        assert!(!mapper.auto_apply_profile(&mut VarTable::new()));
    }

    #[test]
    fn failed_open_keeps_device_name() {
        let mut source = MemorySource::new();
        let mut pad = MemoryDevice::new(X360);
        pad.connected = false;
        source.push(pad);
        let mapper = MapperBuilder::new()
            .catalog(Catalog::for_platform(Platform::Windows))
            .build(source);

        assert!(!mapper.is_active());
        assert_eq!(mapper.active_index(), 0);
        assert_eq!(mapper.active_device_name(), Some(X360));
        assert!(mapper.profile_for_active_device().is_some());
        assert_eq!(mapper.button_name(7), "START");
        assert_eq!(mapper.axis_name(2), "Trigger");
    }

    #[test]
    fn activation_is_stored_in_settings() {
        let mut mapper = mapper_with(&["A", "B"], Settings::default());
        assert_eq!(mapper.settings().joystick_index, 0);

        mapper.activate(1);
        let mut vars = VarTable::new();
        mapper.settings().store(&mut vars);
        assert_eq!(vars.get("joystick_index").as_deref(), Some("1"));

        let mut settings = Settings::default();
        settings.bind_from(&vars);
        assert_eq!(settings.joystick_index, 1);
        let mapper = mapper_with(&["A", "B"], settings);
        assert_eq!(mapper.active_device_name(), Some("B"));
    }

    #[test]
    fn active_device_uuid() {
        let id = Uuid::from_u128(0x0300_0000_5e04_0000_8e02_0000_1401_0000);
        let mut source = MemorySource::new();
        let mut pad = MemoryDevice::new(X360);
        pad.uuid = Some(id);
        source.push(pad);
        source.push(MemoryDevice::new("B"));

        let mut mapper = MapperBuilder::new().build(source);
        assert_eq!(mapper.active_device_uuid(), Some(id));
        mapper.activate(1);
        assert_eq!(mapper.active_device_uuid(), None);
        mapper.activate(-1);
        assert_eq!(mapper.active_device_uuid(), None);
    }

    #[test]
    fn unknown_device_has_no_profile() {
        let mapper = mapper_with(&["Generic USB Joystick"], Settings::default());
        assert!(mapper.profile_for_active_device().is_none());
        assert_eq!(mapper.button_name(0), "0");
        assert_eq!(mapper.button_name(16), "A1+");
    }

    #[test]
    fn display_names() {
        let mapper = mapper();
        assert_eq!(mapper.button_name(-1), "None");
        assert_eq!(mapper.button_name(7), "START");
        assert_eq!(mapper.axis_name(2), "Trigger");
        assert_eq!(mapper.axis_name(9), "9");
    }

    struct Counting(MemorySource, Rc<Cell<usize>>);

    impl InputSource for Counting {
        fn init(&mut self) -> Result<(), crate::platform::Error> {
            self.0.init()
        }

        fn device_count(&self) -> usize {
            self.0.device_count()
        }

        fn device_name(&self, index: usize) -> Option<&str> {
            self.0.device_name(index)
        }

        fn open(&mut self, index: usize) -> Result<DeviceHandle, crate::platform::Error> {
            self.0.open(index)
        }

        fn close(&mut self, handle: DeviceHandle) {
            self.1.set(self.1.get() + 1);
            self.0.close(handle)
        }

        fn enable_events(&mut self, handle: DeviceHandle) {
            self.0.enable_events(handle)
        }

        fn button(&self, handle: DeviceHandle, button: u8) -> bool {
            self.0.button(handle, button)
        }

        fn axis(&self, handle: DeviceHandle, axis: u8) -> i16 {
            self.0.axis(handle, axis)
        }
    }

    #[test]
    fn drop_closes_device() {
        let closes = Rc::new(Cell::new(0));
        let source = Counting(MemorySource::with_devices(&[X360]), closes.clone());
        let mapper = MapperBuilder::new().build(source);
        assert!(mapper.is_active());
        drop(mapper);
        assert_eq!(closes.get(), 1);

        let closes = Rc::new(Cell::new(0));
        let source = Counting(MemorySource::with_devices(&[]), closes.clone());
        drop(MapperBuilder::new().build(source));
        assert_eq!(closes.get(), 0);
    }

    // Memory source whose device `removed` was unplugged. Later devices move down by one, open
    // handles stay valid.
    struct Unplugged {
        inner: MemorySource,
        removed: Option<usize>,
    }

    impl Unplugged {
        fn raw(&self, index: usize) -> usize {
            match self.removed {
                Some(removed) if index >= removed => index + 1,
                _ => index,
            }
        }
    }

    impl InputSource for Unplugged {
        fn init(&mut self) -> Result<(), crate::platform::Error> {
            self.inner.init()
        }

        fn device_count(&self) -> usize {
            self.inner.device_count() - self.removed.map_or(0, |_| 1)
        }

        fn device_name(&self, index: usize) -> Option<&str> {
            self.inner.device_name(self.raw(index))
        }

        fn open(&mut self, index: usize) -> Result<DeviceHandle, crate::platform::Error> {
            let raw = self.raw(index);
            self.inner.open(raw)
        }

        fn device_index(&self, handle: DeviceHandle) -> Option<usize> {
            match self.removed {
                Some(removed) if handle.raw() == removed => None,
                Some(removed) if handle.raw() > removed => Some(handle.raw() - 1),
                _ => Some(handle.raw()),
            }
        }

        fn close(&mut self, handle: DeviceHandle) {
            self.inner.close(handle)
        }

        fn enable_events(&mut self, handle: DeviceHandle) {
            self.inner.enable_events(handle)
        }

        fn button(&self, handle: DeviceHandle, button: u8) -> bool {
            self.inner.button(handle, button)
        }

        fn axis(&self, handle: DeviceHandle, axis: u8) -> i16 {
            self.inner.axis(handle, axis)
        }
    }

    #[test]
    fn hotplug_renumbering_follows_open_device() {
        let source = Unplugged {
            inner: MemorySource::with_devices(&["Generic USB Joystick", X360]),
            removed: None,
        };
        let settings = Settings {
            joystick_index: 1,
            ..Settings::default()
        };
        let mut mapper = MapperBuilder::new()
            .settings(settings)
            .catalog(Catalog::for_platform(Platform::Windows))
            .build(source);
        assert_eq!(mapper.active_device_name(), Some(X360));

        mapper.source_mut().removed = Some(0);
        mapper
            .source_mut()
            .inner
            .device_mut(1)
            .unwrap()
            .set_button(BTN_START, true);
        mapper.update();

        assert_eq!(mapper.active_index(), 0);
        assert_eq!(mapper.settings().joystick_index, 0);
        assert_eq!(mapper.active_device_name(), Some(X360));
        assert_eq!(mapper.button_name(i32::from(BTN_START)), "START");
        assert_eq!(mapper.next_event(), Some(Event::ButtonPressed(BTN_START)));
    }
}
