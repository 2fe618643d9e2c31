pub mod anchored;
pub mod orchestrator;
pub mod proximity;

// Common algorithm traits
use crate::models::{Group, GroupId, MeetingPoint, MeetingPointId, Person, PersonId};
use crate::utils::color::ColorPalette;

/// Trait for auto-grouping strategies
pub trait GroupingStrategy {
    /// Forms groups out of the people whose indices are listed in `pool`.
    ///
    /// Members of every returned group are removed from `pool`; whoever is
    /// left over stays in it, in the original order. Each returned group
    /// satisfies the size bounds and role minimums of the configuration.
    fn form_groups(
        &mut self,
        people: &[Person],
        meeting_points: &[MeetingPoint],
        pool: &mut Vec<usize>,
        factory: &mut GroupFactory,
    ) -> Vec<Group>;
}

/// Hands out ids, names and colours for the groups of one run
#[derive(Debug, Clone)]
pub struct GroupFactory {
    next_id: GroupId,
    formed: usize,
    palette: ColorPalette,
}

impl GroupFactory {
    pub fn new(first_id: GroupId, palette: ColorPalette) -> Self {
        Self {
            next_id: first_id,
            formed: 0,
            palette,
        }
    }

    /// Builds the next group for the given members
    pub fn create(
        &mut self,
        members: Vec<PersonId>,
        meeting_point: Option<MeetingPointId>,
    ) -> Group {
        let id = self.next_id;
        self.next_id += 1;
        let color = self.palette.color_for(self.formed);
        self.formed += 1;

        Group {
            id,
            name: format!("Group {}", id),
            color,
            members,
            meeting_point,
        }
    }

    /// Number of groups created so far
    pub fn formed(&self) -> usize {
        self.formed
    }
}

impl Default for GroupFactory {
    fn default() -> Self {
        Self::new(1, ColorPalette::default())
    }
}
