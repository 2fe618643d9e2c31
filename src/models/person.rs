// Person model representing an individual to be grouped

use serde::{Deserialize, Serialize};

use crate::models::{FamilyId, GroupId, Location, PersonId};

/// A role a person may hold. Roles are independent of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    Elder,
    Servant,
    Pioneer,
    Leader,
    Helper,
    Publisher,
    Child,
    Spouse,
    FamilyHead,
}

impl Role {
    pub const COUNT: usize = 9;

    pub const ALL: [Role; Role::COUNT] = [
        Role::Elder,
        Role::Servant,
        Role::Pioneer,
        Role::Leader,
        Role::Helper,
        Role::Publisher,
        Role::Child,
        Role::Spouse,
        Role::FamilyHead,
    ];

    /// Roles that have a configurable group minimum
    pub const REQUIRED: [Role; 6] = [
        Role::Elder,
        Role::Servant,
        Role::Pioneer,
        Role::Leader,
        Role::Helper,
        Role::Publisher,
    ];

    /// Dense index used for tally arrays
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Boolean role flags carried by a person
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Roles {
    pub elder: bool,
    pub servant: bool,
    pub pioneer: bool,
    pub leader: bool,
    pub helper: bool,
    pub publisher: bool,
    pub child: bool,
    pub spouse: bool,
    pub family_head: bool,
}

impl Roles {
    /// Builds a flag set from a list of roles
    pub fn of(roles: &[Role]) -> Self {
        let mut flags = Self::default();
        for role in roles {
            flags.set(*role, true);
        }
        flags
    }

    pub fn has(&self, role: Role) -> bool {
        match role {
            Role::Elder => self.elder,
            Role::Servant => self.servant,
            Role::Pioneer => self.pioneer,
            Role::Leader => self.leader,
            Role::Helper => self.helper,
            Role::Publisher => self.publisher,
            Role::Child => self.child,
            Role::Spouse => self.spouse,
            Role::FamilyHead => self.family_head,
        }
    }

    pub fn set(&mut self, role: Role, value: bool) {
        let flag = match role {
            Role::Elder => &mut self.elder,
            Role::Servant => &mut self.servant,
            Role::Pioneer => &mut self.pioneer,
            Role::Leader => &mut self.leader,
            Role::Helper => &mut self.helper,
            Role::Publisher => &mut self.publisher,
            Role::Child => &mut self.child,
            Role::Spouse => &mut self.spouse,
            Role::FamilyHead => &mut self.family_head,
        };
        *flag = value;
    }

    /// Iterates over the roles that are set
    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        Role::ALL.into_iter().filter(move |role| self.has(*role))
    }
}

/// Represents an individual that can be placed into a group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Unique, stable identifier
    pub id: PersonId,

    /// Display name
    pub name: String,

    /// Home location
    #[serde(flatten)]
    pub location: Location,

    /// Role flags
    #[serde(flatten)]
    pub roles: Roles,

    /// Current group assignment, written by the grouping engine
    #[serde(default)]
    pub group: Option<GroupId>,

    /// Current family assignment, never touched by the grouping engine
    #[serde(default)]
    pub family: Option<FamilyId>,
}

impl Person {
    /// Creates an unassigned person without any roles
    pub fn new<S: Into<String>>(id: PersonId, name: S, location: Location) -> Self {
        Self {
            id,
            name: name.into(),
            location,
            roles: Roles::default(),
            group: None,
            family: None,
        }
    }

    /// Creates an unassigned person with the given roles
    pub fn with_roles<S: Into<String>>(
        id: PersonId,
        name: S,
        location: Location,
        roles: &[Role],
    ) -> Self {
        Self {
            roles: Roles::of(roles),
            ..Self::new(id, name, location)
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.has(role)
    }

    pub fn is_assigned(&self) -> bool {
        self.group.is_some()
    }
}
