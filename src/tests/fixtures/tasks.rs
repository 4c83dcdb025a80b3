// Shared test fixture for task insert payloads.

use crate::modules::tasks::core::task::NewTask;
use chrono::NaiveDate;

pub struct NewTaskBuilder {
    inner: NewTask,
}

impl Default for NewTaskBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl NewTaskBuilder {
    pub fn new() -> Self {
        Self {
            inner: NewTask::new("p-1", "Write docs"),
        }
    }

    pub fn project_id(mut self, v: impl Into<String>) -> Self {
        self.inner.project_id = v.into();
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn notes(mut self, v: impl Into<String>) -> Self {
        self.inner.notes = Some(v.into());
        self
    }

    pub fn due_date(mut self, v: NaiveDate) -> Self {
        self.inner.due_date = Some(v);
        self
    }

    pub fn priority(mut self, v: i64) -> Self {
        self.inner.priority = Some(v);
        self
    }

    pub fn build(self) -> NewTask {
        self.inner
    }
}

#[cfg(test)]
mod new_task_builder_tests {
    use super::*;
    use crate::modules::tasks::core::task::TaskStatus;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        let built = NewTaskBuilder::default().build();
        assert_eq!(built, NewTask::new("p-1", "Write docs"));
        assert_eq!(built.status, TaskStatus::Todo);
    }

    #[rstest]
    fn setters_override_fields() {
        let due = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let built = NewTaskBuilder::new()
            .project_id("p-2")
            .title("Review")
            .notes("carefully")
            .due_date(due)
            .priority(3)
            .build();

        assert_eq!(built.project_id, "p-2");
        assert_eq!(built.title, "Review");
        assert_eq!(built.notes.as_deref(), Some("carefully"));
        assert_eq!(built.due_date, Some(due));
        assert_eq!(built.priority, Some(3));
    }
}
