// Copyright 2016-2018 Mateusz Sieczko and other GilRs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Named configuration variables.
//!
//! Bindings and settings are stored by name as strings, the same way engine console variables
//! are. Hosts with their own variable system implement [`ConfigVars`] for it, everything else
//! can use [`VarTable`].

use fnv::FnvHashMap;

/// String valued variable store.
pub trait ConfigVars {
    /// Returns value of variable `name` or `None` if it was never set.
    fn get(&self, name: &str) -> Option<String>;

    /// Sets variable `name` to `value`, creating it if necessary.
    fn set(&mut self, name: &str, value: &str);

    /// Returns value of `name` parsed as integer.
    fn get_int(&self, name: &str) -> Option<i32> {
        self.get(name).and_then(|val| val.trim().parse().ok())
    }

    fn set_int(&mut self, name: &str, value: i32) {
        self.set(name, &value.to_string())
    }
}

impl<'a, V: ConfigVars + ?Sized> ConfigVars for &'a mut V {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }

    fn set(&mut self, name: &str, value: &str) {
        (**self).set(name, value)
    }
}

/// In-memory variable store.
#[derive(Clone, Debug, Default)]
pub struct VarTable {
    vars: FnvHashMap<String, String>,
}

impl VarTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrowed value of `name`.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterate over all `(name, value)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl ConfigVars for VarTable {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn set(&mut self, name: &str, value: &str) {
        log::trace!("{} = {}", name, value);
        match self.vars.get_mut(name) {
            Some(old) => {
                old.clear();
                old.push_str(value);
            }
            None => {
                self.vars.insert(name.to_owned(), value.to_owned());
            }
        }
    }
}
