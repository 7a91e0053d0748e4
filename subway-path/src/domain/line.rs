//! Lines: ordered sections plus a fare surcharge.

use super::Section;

/// A named route made of an ordered set of sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    name: String,
    sections: Vec<Section>,
    /// Extra fare charged for riding this line.
    surcharge: u32,
}

impl Line {
    /// Create a line with no sections.
    pub fn new(name: impl Into<String>, surcharge: u32) -> Self {
        Self {
            name: name.into(),
            sections: Vec::new(),
            surcharge,
        }
    }

    /// Append a section, builder style.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn surcharge(&self) -> u32 {
        self.surcharge
    }
}
