// SPDX-License-Identifier: MPL-2.0
//! Page sections reachable from the navigation bar.

/// A navigable anchor on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    Expertise,
    Experience,
    Education,
}

impl Section {
    /// Navbar order.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Expertise,
        Section::Experience,
        Section::Education,
    ];

    /// i18n key of the navbar label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Section::Home => "nav-home",
            Section::Expertise => "nav-expertise",
            Section::Experience => "nav-experience",
            Section::Education => "nav-education",
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Section::Home => 0,
            Section::Expertise => 1,
            Section::Experience => 2,
            Section::Education => 3,
        }
    }
}

/// Measured top edge of every section, relative to the page content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Anchors {
    content_top: Option<f32>,
    tops: [Option<f32>; 4],
}

impl Anchors {
    /// Records where the scrolled content starts.
    pub fn set_content_top(&mut self, y: f32) {
        self.content_top = Some(y);
    }

    /// Records where a section starts, in the same coordinates.
    pub fn set(&mut self, section: Section, y: f32) {
        self.tops[section.index()] = Some(y);
    }

    /// Scroll offset that brings `section` to the top of the viewport, once
    /// both it and the content root have been measured.
    #[must_use]
    pub fn offset_of(&self, section: Section) -> Option<f32> {
        let top = self.tops[section.index()]?;
        let content_top = self.content_top?;
        Some((top - content_top).max(0.0))
    }
}
