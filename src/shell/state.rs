use crate::modules::completions::adapters::outbound::completion_log_store::StoreCompletionLog;
use crate::modules::completions::core::ports::CompletionLog;
use crate::modules::completions::use_cases::list_daily_completions::handler::ListDailyCompletionsHandler;
use crate::modules::completions::use_cases::record_completion::handler::RecordCompletionHandler;
use crate::modules::completions::use_cases::summarize_completions::handler::SummarizeCompletionsHandler;
use crate::modules::projects::use_cases::manage_projects::handler::ProjectsHandler;
use crate::modules::tasks::use_cases::manage_tasks::handler::TasksHandler;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::store::TableStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub completions: Arc<ListDailyCompletionsHandler>,
    pub summary: Arc<SummarizeCompletionsHandler>,
    pub projects: Arc<ProjectsHandler>,
    pub tasks: Arc<TasksHandler>,
}

impl AppState {
    /// Wires every handler onto one shared store client.
    pub fn new(store: Arc<dyn TableStore>, clock: Arc<dyn Clock>) -> Self {
        let log: Arc<dyn CompletionLog> = Arc::new(StoreCompletionLog::new(store.clone()));
        let completions = Arc::new(ListDailyCompletionsHandler::new(
            log.clone(),
            clock.clone(),
        ));
        let record = Arc::new(RecordCompletionHandler::new(log, clock));
        Self {
            summary: Arc::new(SummarizeCompletionsHandler::new(completions.clone())),
            completions,
            projects: Arc::new(ProjectsHandler::new(store.clone())),
            tasks: Arc::new(TasksHandler::new(store, record)),
        }
    }
}
