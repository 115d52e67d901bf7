//! Contextual information of a statement

use crate::domain::activity::Activity;
use crate::domain::actor::{Actor, Group};
use crate::domain::extensions::Extensions;
use crate::domain::identifiers::Uuid;
use crate::domain::statement_object::StatementReference;

/// Activities a statement relates to, by relationship
///
/// Each list is absent until the first activity is added to it and returns
/// to absent when cleared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContextActivities {
    parent_activities: Option<Vec<Activity>>,
    grouping_activities: Option<Vec<Activity>>,
    category_activities: Option<Vec<Activity>>,
    other_activities: Option<Vec<Activity>>,
}

fn with_added(list: &Option<Vec<Activity>>, activity: Activity) -> Option<Vec<Activity>> {
    let mut activities = list.clone().unwrap_or_default();
    activities.push(activity);
    Some(activities)
}

impl ContextActivities {
    pub fn new(
        parent_activities: Option<Vec<Activity>>,
        grouping_activities: Option<Vec<Activity>>,
        category_activities: Option<Vec<Activity>>,
        other_activities: Option<Vec<Activity>>,
    ) -> Self {
        Self {
            parent_activities,
            grouping_activities,
            category_activities,
            other_activities,
        }
    }

    pub fn parent_activities(&self) -> Option<&[Activity]> {
        self.parent_activities.as_deref()
    }

    pub fn grouping_activities(&self) -> Option<&[Activity]> {
        self.grouping_activities.as_deref()
    }

    pub fn category_activities(&self) -> Option<&[Activity]> {
        self.category_activities.as_deref()
    }

    pub fn other_activities(&self) -> Option<&[Activity]> {
        self.other_activities.as_deref()
    }

    pub fn with_added_parent_activity(&self, activity: Activity) -> Self {
        Self {
            parent_activities: with_added(&self.parent_activities, activity),
            ..self.clone()
        }
    }

    pub fn without_parent_activities(&self) -> Self {
        Self {
            parent_activities: None,
            ..self.clone()
        }
    }

    pub fn with_added_grouping_activity(&self, activity: Activity) -> Self {
        Self {
            grouping_activities: with_added(&self.grouping_activities, activity),
            ..self.clone()
        }
    }

    pub fn without_grouping_activities(&self) -> Self {
        Self {
            grouping_activities: None,
            ..self.clone()
        }
    }

    pub fn with_added_category_activity(&self, activity: Activity) -> Self {
        Self {
            category_activities: with_added(&self.category_activities, activity),
            ..self.clone()
        }
    }

    pub fn without_category_activities(&self) -> Self {
        Self {
            category_activities: None,
            ..self.clone()
        }
    }

    pub fn with_added_other_activity(&self, activity: Activity) -> Self {
        Self {
            other_activities: with_added(&self.other_activities, activity),
            ..self.clone()
        }
    }

    pub fn without_other_activities(&self) -> Self {
        Self {
            other_activities: None,
            ..self.clone()
        }
    }
}

/// Context of a statement: who else was involved, where and as part of what
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    registration: Option<Uuid>,
    instructor: Option<Actor>,
    team: Option<Group>,
    context_activities: Option<ContextActivities>,
    revision: Option<String>,
    platform: Option<String>,
    language: Option<String>,
    statement: Option<StatementReference>,
    extensions: Option<Extensions>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registration(&self) -> Option<&Uuid> {
        self.registration.as_ref()
    }

    pub fn instructor(&self) -> Option<&Actor> {
        self.instructor.as_ref()
    }

    pub fn team(&self) -> Option<&Group> {
        self.team.as_ref()
    }

    pub fn context_activities(&self) -> Option<&ContextActivities> {
        self.context_activities.as_ref()
    }

    pub fn revision(&self) -> Option<&str> {
        self.revision.as_deref()
    }

    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }

    /// RFC 5646 language tag
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn statement(&self) -> Option<&StatementReference> {
        self.statement.as_ref()
    }

    pub fn extensions(&self) -> Option<&Extensions> {
        self.extensions.as_ref()
    }

    pub fn with_registration(&self, registration: Option<Uuid>) -> Self {
        Self {
            registration,
            ..self.clone()
        }
    }

    pub fn with_instructor(&self, instructor: Option<Actor>) -> Self {
        Self {
            instructor,
            ..self.clone()
        }
    }

    pub fn with_team(&self, team: Option<Group>) -> Self {
        Self {
            team,
            ..self.clone()
        }
    }

    pub fn with_context_activities(&self, context_activities: Option<ContextActivities>) -> Self {
        Self {
            context_activities,
            ..self.clone()
        }
    }

    pub fn with_revision(&self, revision: Option<String>) -> Self {
        Self {
            revision,
            ..self.clone()
        }
    }

    pub fn with_platform(&self, platform: Option<String>) -> Self {
        Self {
            platform,
            ..self.clone()
        }
    }

    pub fn with_language(&self, language: Option<String>) -> Self {
        Self {
            language,
            ..self.clone()
        }
    }

    pub fn with_statement(&self, statement: Option<StatementReference>) -> Self {
        Self {
            statement,
            ..self.clone()
        }
    }

    pub fn with_extensions(&self, extensions: Option<Extensions>) -> Self {
        Self {
            extensions,
            ..self.clone()
        }
    }
}
