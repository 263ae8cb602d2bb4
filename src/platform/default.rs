// Copyright 2016-2018 Mateusz Sieczko and other GilRs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.
#![allow(unused_variables)]

use super::{DeviceHandle, Error, InputSource};

/// Input source for platforms without controller support. Initialization always fails and all
/// actions performed on it are no-op.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullSource;

impl InputSource for NullSource {
    fn init(&mut self) -> Result<(), Error> {
        Err(Error::NotSupported)
    }

    fn device_count(&self) -> usize {
        0
    }

    fn device_name(&self, index: usize) -> Option<&str> {
        None
    }

    fn open(&mut self, index: usize) -> Result<DeviceHandle, Error> {
        Err(Error::NotSupported)
    }

    fn close(&mut self, handle: DeviceHandle) {}

    fn enable_events(&mut self, handle: DeviceHandle) {}

    fn button(&self, handle: DeviceHandle, button: u8) -> bool {
        false
    }

    fn axis(&self, handle: DeviceHandle, axis: u8) -> i16 {
        0
    }
}
