// Meeting point model representing a candidate group anchor

use serde::{Deserialize, Serialize};

use crate::models::{GroupId, Location, MeetingPointId};

/// A fixed location that can anchor a group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingPoint {
    pub id: MeetingPointId,
    pub name: String,
    #[serde(flatten)]
    pub location: Location,
    /// Group anchored here, written by the grouping engine
    #[serde(default)]
    pub group: Option<GroupId>,
}

impl MeetingPoint {
    pub fn new<S: Into<String>>(id: MeetingPointId, name: S, location: Location) -> Self {
        Self {
            id,
            name: name.into(),
            location,
            group: None,
        }
    }
}
