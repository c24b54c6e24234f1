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
use std::collections::HashMap;

/// Opaque identifier of a widget.
///
/// Ids are handed out from a counter and never reused, so two distinct
/// labels can never share one. "No widget" is spelled `Option<Id>::None`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(u32);

impl Id {
    /// Raw counter value behind the id.
    pub fn raw(self) -> u32 { self.0 }
}

/// Source of fresh ids shared by every window of one context.
#[derive(Debug)]
pub struct IdSeed {
    next: u32,
}

impl Default for IdSeed {
    fn default() -> Self { Self { next: 1 } }
}

impl IdSeed {
    fn issue(&mut self) -> Id {
        let id = Id(self.next);
        self.next = self.next.checked_add(1).expect("widget id space exhausted");
        id
    }
}

/// A widget label split at its first `##`.
///
/// Only the part before the marker is drawn; the whole string, suffix
/// included, is what identifies the widget.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Label<'a> {
    full: &'a str,
    display: &'a str,
    disambiguator: &'a str,
}

impl<'a> Label<'a> {
    /// Splits `label` into its visible part and its disambiguating suffix.
    pub fn parse(label: &'a str) -> Self {
        match label.find("##") {
            Some(at) => Self { full: label, display: &label[..at], disambiguator: &label[at + 2..] },
            None => Self { full: label, display: label, disambiguator: "" },
        }
    }

    /// Text that gets drawn.
    pub fn display(&self) -> &'a str { self.display }

    /// Text after `##`, empty when there is none.
    pub fn disambiguator(&self) -> &'a str { self.disambiguator }

    /// The complete label, used as the identity key.
    pub fn key(&self) -> &'a str { self.full }
}

/// Gestures owned by a window rather than by one of its widgets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WindowPart {
    /// Dragging the window by an unclaimed area.
    Move,
    /// The resize grip.
    Resize,
    /// The close button in the title bar.
    Close,
}

/// Per-window map from label strings to ids.
///
/// Window parts are keyed apart from labels, so no widget label can alias them.
#[derive(Default, Debug)]
pub struct IdManager {
    ids: HashMap<String, Id>,
    parts: HashMap<WindowPart, Id>,
}

impl IdManager {
    /// Returns the id bound to `label`, issuing a new one from `seed` the first time.
    pub fn get_id(&mut self, seed: &mut IdSeed, label: &str) -> Id {
        if let Some(id) = self.ids.get(label) {
            return *id;
        }
        let id = seed.issue();
        self.ids.insert(label.to_string(), id);
        id
    }

    /// Returns the id of a window part, issuing it from `seed` the first time.
    pub fn get_part_id(&mut self, seed: &mut IdSeed, part: WindowPart) -> Id { *self.parts.entry(part).or_insert_with(|| seed.issue()) }

    /// Looks a label up without issuing an id.
    pub fn find(&self, label: &str) -> Option<Id> { self.ids.get(label).copied() }

    /// Number of labels seen so far.
    pub fn len(&self) -> usize { self.ids.len() }

    /// Returns `true` before the first id is issued.
    pub fn is_empty(&self) -> bool { self.ids.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_label_same_id() {
        let mut seed = IdSeed::default();
        let mut ids = IdManager::default();
        let a = ids.get_id(&mut seed, "Apply");
        let b = ids.get_id(&mut seed, "Cancel");
        assert_eq!(ids.get_id(&mut seed, "Apply"), a);
        assert_ne!(a, b);
        assert_eq!(a.raw(), 1);
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn suffix_disambiguates() {
        let mut seed = IdSeed::default();
        let mut ids = IdManager::default();
        let one = ids.get_id(&mut seed, "Foo##1");
        let two = ids.get_id(&mut seed, "Foo##2");
        assert_ne!(one, two);
        assert_eq!(Label::parse("Foo##1").display(), Label::parse("Foo##2").display());
    }

    #[test]
    fn windows_sharing_a_seed_never_collide() {
        let mut seed = IdSeed::default();
        let mut left = IdManager::default();
        let mut right = IdManager::default();
        let a = left.get_id(&mut seed, "OK");
        let b = right.get_id(&mut seed, "OK");
        assert_ne!(a, b);
        assert_eq!(left.find("OK"), Some(a));
        assert_eq!(right.find("Missing"), None);
    }

    #[test]
    fn window_parts_never_alias_labels() {
        let mut seed = IdSeed::default();
        let mut ids = IdManager::default();
        let label = ids.get_id(&mut seed, "#MOVE");
        let part = ids.get_part_id(&mut seed, WindowPart::Move);
        assert_ne!(label, part);
        assert_eq!(ids.get_part_id(&mut seed, WindowPart::Move), part);
        assert_ne!(ids.get_part_id(&mut seed, WindowPart::Resize), part);
        assert_eq!(ids.len(), 1);
    }

    #[test]
    fn label_parts() {
        let plain = Label::parse("Hello");
        assert_eq!(plain.display(), "Hello");
        assert_eq!(plain.disambiguator(), "");

        let hidden = Label::parse("##slider_R");
        assert_eq!(hidden.display(), "");
        assert_eq!(hidden.disambiguator(), "slider_R");
        assert_eq!(hidden.key(), "##slider_R");

        let nested = Label::parse("a##b##c");
        assert_eq!(nested.display(), "a");
        assert_eq!(nested.disambiguator(), "b##c");
    }
}
