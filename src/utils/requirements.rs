// Requirement checking for candidate groups

use crate::models::{GroupingConfig, Person, Role};

/// Running per-role counts of a candidate group.
///
/// Adding or removing a member is O(1), so growing and shrinking windows can
/// re-check requirements without recounting the whole group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleTally {
    members: usize,
    counts: [usize; Role::COUNT],
}

impl RoleTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_people<'a, I>(people: I) -> Self
    where
        I: IntoIterator<Item = &'a Person>,
    {
        let mut tally = Self::new();
        for person in people {
            tally.add(person);
        }
        tally
    }

    pub fn add(&mut self, person: &Person) {
        self.members += 1;
        for role in person.roles.iter() {
            self.counts[role.index()] += 1;
        }
    }

    /// Removes a member previously added with [`RoleTally::add`]
    pub fn remove(&mut self, person: &Person) {
        self.members = self.members.saturating_sub(1);
        for role in person.roles.iter() {
            let count = &mut self.counts[role.index()];
            *count = count.saturating_sub(1);
        }
    }

    pub fn members(&self) -> usize {
        self.members
    }

    pub fn count(&self, role: Role) -> usize {
        self.counts[role.index()]
    }

    /// Size and role checks against the configured minimums
    pub fn meets(&self, config: &GroupingConfig) -> bool {
        self.members >= config.min_group_size
            && Role::REQUIRED
                .iter()
                .all(|role| self.count(*role) >= config.minimum_for(*role) as usize)
    }
}

/// A role whose minimum is not met: (role, required, present)
pub type Shortfall = (Role, usize, usize);

/// Checks whether a set of people satisfies the size and role minimums
pub fn meets_requirements<'a, I>(people: I, config: &GroupingConfig) -> bool
where
    I: IntoIterator<Item = &'a Person>,
{
    RoleTally::from_people(people).meets(config)
}

/// Lists every role minimum the tally falls short of
pub fn unmet_requirements(tally: &RoleTally, config: &GroupingConfig) -> Vec<Shortfall> {
    Role::REQUIRED
        .iter()
        .filter_map(|role| {
            let required = config.minimum_for(*role) as usize;
            let present = tally.count(*role);
            (present < required).then_some((*role, required, present))
        })
        .collect()
}
