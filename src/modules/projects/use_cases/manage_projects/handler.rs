// Project CRUD on the `projects` table.
//
// Deleting a project removes only the project row. Its tasks and recorded
// completions stay where they are.

use crate::modules::projects::core::project::{NewProject, Project};
use crate::shared::infrastructure::store::{
    Direction, Filter, Select, StoreError, TableStore, from_row, to_row,
};
use std::sync::Arc;
use thiserror::Error;

pub const PROJECTS_TABLE: &str = "projects";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("invalid project: {0}")]
    Invalid(String),

    #[error("project not found: {0}")]
    NotFound(String),
}

pub struct ProjectsHandler {
    store: Arc<dyn TableStore>,
}

impl ProjectsHandler {
    pub fn new(store: Arc<dyn TableStore>) -> Self {
        Self { store }
    }

    /// All projects, oldest first.
    pub async fn list(&self) -> Result<Vec<Project>, ProjectError> {
        let rows = self
            .store
            .select(
                PROJECTS_TABLE,
                &Select::all().order_by("created_at", Direction::Ascending),
            )
            .await?;
        Ok(rows
            .into_iter()
            .map(from_row)
            .collect::<Result<Vec<_>, _>>()?)
    }

    pub async fn create(&self, project: NewProject) -> Result<Project, ProjectError> {
        if project.name.trim().is_empty() {
            return Err(ProjectError::Invalid("name is required".into()));
        }
        let inserted = self
            .store
            .insert(PROJECTS_TABLE, vec![to_row(&project)?])
            .await?;
        let row = inserted.into_iter().next().ok_or_else(|| {
            StoreError::Malformed("insert returned no project row".into())
        })?;
        Ok(from_row(row)?)
    }

    pub async fn exists(&self, id: &str) -> Result<bool, ProjectError> {
        let rows = self
            .store
            .select(
                PROJECTS_TABLE,
                &Select::all()
                    .columns(&["id"])
                    .filter(Filter::eq("id", id))
                    .limit(1),
            )
            .await?;
        Ok(!rows.is_empty())
    }

    pub async fn delete(&self, id: &str) -> Result<(), ProjectError> {
        let removed = self
            .store
            .delete(PROJECTS_TABLE, &[Filter::eq("id", id)])
            .await?;
        if removed.is_empty() {
            return Err(ProjectError::NotFound(id.to_string()));
        }
        tracing::info!(project_id = id, "deleted project");
        Ok(())
    }
}

#[cfg(test)]
mod projects_handler_tests {
    use super::*;
    use crate::shared::infrastructure::store::in_memory::InMemoryStore;
    use rstest::{fixture, rstest};

    #[fixture]
    fn before_each() -> (Arc<InMemoryStore>, ProjectsHandler) {
        let store = Arc::new(InMemoryStore::new());
        let handler = ProjectsHandler::new(store.clone());
        (store, handler)
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_create_a_project_with_the_default_color(
        before_each: (Arc<InMemoryStore>, ProjectsHandler),
    ) {
        let (_, handler) = before_each;
        let project = handler
            .create(NewProject::new("Inbox", None, None))
            .await
            .expect("create failed");
        assert_eq!(project.name, "Inbox");
        assert_eq!(project.color, "#6366f1");
        assert!(!project.id.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_projects_oldest_first(
        before_each: (Arc<InMemoryStore>, ProjectsHandler),
    ) {
        let (_, handler) = before_each;
        for name in ["First", "Second", "Third"] {
            handler.create(NewProject::new(name, None, None)).await.unwrap();
        }
        let names: Vec<String> = handler
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_a_blank_name(before_each: (Arc<InMemoryStore>, ProjectsHandler)) {
        let (store, handler) = before_each;
        let result = handler.create(NewProject::new("   ", None, None)).await;
        assert_eq!(
            result,
            Err(ProjectError::Invalid("name is required".into()))
        );
        assert_eq!(store.count(PROJECTS_TABLE).await, 0);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_delete_an_existing_project(
        before_each: (Arc<InMemoryStore>, ProjectsHandler),
    ) {
        let (_, handler) = before_each;
        let project = handler
            .create(NewProject::new("Inbox", None, None))
            .await
            .unwrap();
        assert!(handler.exists(&project.id).await.unwrap());

        handler.delete(&project.id).await.expect("delete failed");

        assert!(!handler.exists(&project.id).await.unwrap());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_deleting_an_unknown_project(
        before_each: (Arc<InMemoryStore>, ProjectsHandler),
    ) {
        let (_, handler) = before_each;
        assert_eq!(
            handler.delete("missing").await,
            Err(ProjectError::NotFound("missing".into()))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_store_is_offline() {
        let mut store = InMemoryStore::new();
        store.toggle_offline();
        let handler = ProjectsHandler::new(Arc::new(store));
        assert_eq!(
            handler.list().await,
            Err(ProjectError::Store(StoreError::Unavailable(
                "Store offline".into()
            )))
        );
    }
}
