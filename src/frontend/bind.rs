// Copyright 2016-2018 Mateusz Sieczko and other GilRs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::constants::UNBOUND;
use crate::ev::Detected;
use crate::mapper::Mapper;
use crate::platform::InputSource;
use crate::vars::ConfigVars;

use vec_map::VecMap;

/// Codes at or above this value are never put on the ignore list.
pub const IGNORE_LIMIT: i32 = 100;

/// What is being bound.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum BindKind {
    /// Virtual button, found with `Mapper::detect_pressed_button_or_axis()`.
    Button,
    /// Axis, found with `Mapper::detect_dominant_axis()`.
    Axis,
}

/// How bind session ended.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum BindOutcome {
    /// Variable was set to the contained code.
    Bound(i32),
    /// Same code as the current binding was chosen, variable was set to `-1`.
    Cleared,
    /// No usable input arrived in time. Variable was not changed.
    TimedOut,
}

/// Interactive "press a button" session for one binding variable.
///
/// For the first `3 * fps / 2` ticks the session only records what is held (stuck buttons,
/// drifting sticks) and ignores it afterwards. Then it waits up to `5 * fps` ticks for new input.
///
/// ```
/// use padbind::frontend::{BindOutcome, BindSession};
/// use padbind::platform::MemorySource;
/// use padbind::vars::{ConfigVars, VarTable};
/// use padbind::MapperBuilder;
///
/// let mut mapper = MapperBuilder::new().build(MemorySource::with_devices(&["Pad"]));
/// let mut vars = VarTable::new();
/// let mut session = BindSession::button("joyb_fire", 2);
///
/// // Debounce window of 3 ticks.
/// for _ in 0..3 {
///     session.respond(&mapper, &mut vars);
///     session.tick();
/// }
///
/// mapper.source_mut().device_mut(0).unwrap().set_button(2, true);
/// assert_eq!(session.respond(&mapper, &mut vars), Some(BindOutcome::Bound(2)));
/// assert_eq!(vars.get_int("joyb_fire"), Some(2));
/// ```
#[derive(Clone, Debug)]
pub struct BindSession {
    kind: BindKind,
    var: String,
    wait: u32,
    timeout: u32,
    ignore: VecMap<()>,
    outcome: Option<BindOutcome>,
}

impl BindSession {
    /// Starts session binding `var`. `fps` is the number of `tick()` calls per second.
    pub fn new(kind: BindKind, var: &str, fps: u32) -> Self {
        log::debug!("Binding {:?} to {}", kind, var);
        BindSession {
            kind,
            var: var.to_owned(),
            wait: 3 * fps / 2,
            timeout: fps * 5,
            ignore: VecMap::new(),
            outcome: None,
        }
    }

    pub fn button(var: &str, fps: u32) -> Self {
        Self::new(BindKind::Button, var, fps)
    }

    pub fn axis(var: &str, fps: u32) -> Self {
        Self::new(BindKind::Axis, var, fps)
    }

    pub fn kind(&self) -> BindKind {
        self.kind
    }

    /// Variable being bound.
    pub fn var(&self) -> &str {
        &self.var
    }

    /// Returns `true` while the session is in its debounce window.
    pub fn is_waiting(&self) -> bool {
        self.outcome.is_none() && self.wait > 0
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn outcome(&self) -> Option<BindOutcome> {
        self.outcome
    }

    /// Returns `true` if `code` was held during the debounce window.
    pub fn is_ignored(&self, code: i32) -> bool {
        usize::try_from(code)
            .map(|idx| self.ignore.contains_key(idx))
            .unwrap_or(false)
    }

    /// Text to show while the session runs.
    pub fn prompt(&self) -> [&'static str; 2] {
        match (self.kind, self.is_waiting()) {
            (BindKind::Button, true) => ["Release all buttons.", "(Please wait...)"],
            (BindKind::Button, false) => ["Press a button.", "(Wait to cancel)"],
            (BindKind::Axis, true) => ["Release all sticks/pads.", "(Please wait...)"],
            (BindKind::Axis, false) => ["Push a stick or pad.", "(Wait to cancel)"],
        }
    }

    /// Advances timers by one tick. Returns `Some(TimedOut)` on the tick the session times out.
    pub fn tick(&mut self) -> Option<BindOutcome> {
        if self.outcome.is_some() {
            return None;
        }

        if self.wait > 0 {
            self.wait -= 1;
            return None;
        }

        if self.timeout > 0 {
            self.timeout -= 1;
            if self.timeout == 0 {
                log::debug!("Binding {} timed out", self.var);
                self.outcome = Some(BindOutcome::TimedOut);
                return self.outcome;
            }
        }

        None
    }

    /// Checks `mapper` for input and updates the bound variable. Returns outcome when the
    /// session finishes on this call.
    pub fn respond<S, V>(&mut self, mapper: &Mapper<S>, vars: &mut V) -> Option<BindOutcome>
    where
        S: InputSource,
        V: ConfigVars + ?Sized,
    {
        if self.outcome.is_some() {
            return None;
        }

        let code = self.detect(mapper)?;

        if self.wait > 0 {
            if code < IGNORE_LIMIT {
                self.ignore.insert(code as usize, ());
            }
            return None;
        }

        if self.is_ignored(code) {
            return None;
        }

        let outcome = if vars.get_int(&self.var) == Some(code) {
            vars.set_int(&self.var, UNBOUND);
            BindOutcome::Cleared
        } else {
            vars.set_int(&self.var, code);
            BindOutcome::Bound(code)
        };

        log::info!("{}: {:?}", self.var, outcome);
        self.outcome = Some(outcome);
        self.outcome
    }

    fn detect<S: InputSource>(&self, mapper: &Mapper<S>) -> Option<i32> {
        match self.kind {
            BindKind::Button => match mapper.detect_pressed_button_or_axis()? {
                Detected::Button(code) => Some(i32::from(code)),
                Detected::AxisActivity => None,
            },
            BindKind::Axis => mapper
                .detect_dominant_axis()
                .map(|(axis, _)| i32::from(axis)),
        }
    }
}
