//! Two-level section hierarchy.
//!
//! A building owns root sections; a root section owns child sections. Depth is
//! capped at two, so the tree is represented as roots holding a flat list of
//! children rather than a recursive structure.

use smeta_shared::{BuildingId, SectionId};

use super::error::EstimateError;
use super::types::Section;

/// Placement of a section that has not been persisted yet.
///
/// This is the only way to obtain a section for insertion, so the depth check
/// always runs on create. Updating an existing section goes through the store
/// directly and is not re-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewSection {
    building_id: BuildingId,
    parent_id: Option<SectionId>,
}

impl NewSection {
    /// A root section of `building_id`.
    #[must_use]
    pub const fn root(building_id: BuildingId) -> Self {
        Self {
            building_id,
            parent_id: None,
        }
    }

    /// A child of `parent`.
    ///
    /// The child's building is taken as given; it is not required to match the
    /// parent's building.
    ///
    /// # Errors
    ///
    /// Returns `EstimateError::NestingTooDeep` if `parent` already has a parent.
    pub fn child(building_id: BuildingId, parent: &Section) -> Result<Self, EstimateError> {
        if !parent.is_root() {
            return Err(EstimateError::NestingTooDeep { parent: parent.id });
        }

        Ok(Self {
            building_id,
            parent_id: Some(parent.id),
        })
    }

    /// Root or child placement depending on whether a parent was supplied.
    ///
    /// # Errors
    ///
    /// See [`NewSection::child`].
    pub fn under(building_id: BuildingId, parent: Option<&Section>) -> Result<Self, EstimateError> {
        match parent {
            Some(parent) => Self::child(building_id, parent),
            None => Ok(Self::root(building_id)),
        }
    }

    /// Owning building.
    #[must_use]
    pub const fn building_id(&self) -> BuildingId {
        self.building_id
    }

    /// Parent section, if any.
    #[must_use]
    pub const fn parent_id(&self) -> Option<SectionId> {
        self.parent_id
    }

    /// Attaches an identifier, producing the stored shape.
    #[must_use]
    pub const fn into_section(self, id: SectionId) -> Section {
        Section {
            id,
            building_id: self.building_id,
            parent_id: self.parent_id,
        }
    }
}

/// A root section together with its immediate children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootSection {
    /// The root itself.
    pub section: Section,
    /// Sections whose parent is this root, in input order.
    pub children: Vec<Section>,
}

impl RootSection {
    /// Root section ID.
    #[must_use]
    pub const fn id(&self) -> SectionId {
        self.section.id
    }

    /// IDs of the immediate children.
    pub fn child_ids(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.children.iter().map(|c| c.id)
    }
}

/// The root sections of one building with their children attached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionTree {
    roots: Vec<RootSection>,
}

impl SectionTree {
    /// Groups `sections` under the root sections of `building_id`.
    ///
    /// Roots are the parentless sections of the building, kept in input
    /// order. A section is attached as a child when its parent is one of those
    /// roots, whatever building it declares. Anything else (other buildings'
    /// roots, sections nested below a child by a later update) is ignored.
    #[must_use]
    pub fn build(building_id: BuildingId, sections: impl IntoIterator<Item = Section>) -> Self {
        let sections: Vec<Section> = sections.into_iter().collect();

        let mut roots: Vec<RootSection> = sections
            .iter()
            .filter(|s| s.is_root() && s.building_id == building_id)
            .map(|s| RootSection {
                section: *s,
                children: Vec::new(),
            })
            .collect();

        for section in &sections {
            let Some(parent_id) = section.parent_id else {
                continue;
            };
            if let Some(root) = roots.iter_mut().find(|r| r.id() == parent_id) {
                root.children.push(*section);
            }
        }

        Self { roots }
    }

    /// Root sections in input order.
    #[must_use]
    pub fn roots(&self) -> &[RootSection] {
        &self.roots
    }

    /// Number of root sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Returns true if the building has no root sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}
