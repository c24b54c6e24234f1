//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
use super::*;
use std::collections::HashMap;

/// Small integer store keyed by widget id, kept per window.
///
/// Collapsing headers keep their open state here between frames.
#[derive(Default, Debug, Clone)]
pub struct Storage {
    values: HashMap<Id, i32>,
}

impl Storage {
    /// Value stored under `id`, or `default` when nothing was stored.
    pub fn get_value(&self, id: Id, default: i32) -> i32 { self.values.get(&id).copied().unwrap_or(default) }

    /// Stores `value` under `id`.
    pub fn set_value(&mut self, id: Id, value: i32) { self.values.insert(id, value); }

    /// Overwrites every stored value with `value`.
    pub fn set_all(&mut self, value: i32) {
        for v in self.values.values_mut() {
            *v = value;
        }
    }

    /// Forgets every stored value.
    pub fn clear(&mut self) { self.values.clear(); }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_until_written() {
        let mut seed = IdSeed::default();
        let mut ids = IdManager::default();
        let id = ids.get_id(&mut seed, "Header");
        let mut storage = Storage::default();
        assert_eq!(storage.get_value(id, 7), 7);
        storage.set_value(id, 1);
        assert_eq!(storage.get_value(id, 7), 1);
        storage.set_all(0);
        assert_eq!(storage.get_value(id, 7), 0);
        storage.clear();
        assert_eq!(storage.get_value(id, 3), 3);
    }
}
