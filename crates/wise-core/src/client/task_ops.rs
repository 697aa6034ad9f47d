//! Task operations for the ConsoleClient.

use super::ConsoleClient;
use crate::{
    error::{ConsoleError, Result},
    models::{ActionOutcome, Task, TaskPage, TaskVisualization},
    params::{CreateTask, DeleteTask, ListTasks, TaskAction, TaskId, UpdateTask},
};

impl ConsoleClient {
    /// Fetches one page of tasks matching the filter.
    pub async fn list_tasks(&self, params: &ListTasks) -> Result<TaskPage> {
        let request = self
            .http
            .get(self.endpoint("tasks"))
            .query(&params.query_pairs());
        self.send(request).await
    }

    /// Fetches a single task.
    pub async fn get_task(&self, params: &TaskId) -> Result<Task> {
        let request = self
            .http
            .get(self.endpoint("task"))
            .query(&[("tid", params.tid.as_str())]);
        self.send(request).await
    }

    /// Fetches the detail snapshot of a task, including its plans.
    pub async fn task_visualization(&self, tid: &str) -> Result<TaskVisualization> {
        let request = self
            .http
            .get(self.endpoint("task/visualization"))
            .query(&[("tid", tid)]);
        self.send(request).await
    }

    /// Creates a task and returns the backend's copy of it.
    pub async fn create_task(&self, params: &CreateTask) -> Result<Task> {
        if params.name.trim().is_empty() {
            return Err(ConsoleError::invalid_input("name").with_reason("must not be empty"));
        }
        log::info!("Creating task {:?}", params.name);
        let request = self.http.post(self.endpoint("task")).json(params);
        self.send(request).await
    }

    /// Updates the fields of a task that are set in `params`.
    pub async fn update_task(&self, params: &UpdateTask) -> Result<Task> {
        if params.changed_fields().is_empty() {
            return Err(ConsoleError::invalid_input("update").with_reason("no fields to update"));
        }
        log::info!("Updating task {}", params.tid);
        let request = self.http.put(self.endpoint("task")).json(params);
        self.send(request).await
    }

    /// Deletes a task. Refused unless `params.confirmed` is set.
    pub async fn delete_task(&self, params: &DeleteTask) -> Result<()> {
        if !params.confirmed {
            return Err(ConsoleError::invalid_input("confirm")
                .with_reason("deletion must be explicitly confirmed"));
        }
        log::info!("Deleting task {}", params.tid);
        let request = self
            .http
            .delete(self.endpoint("task"))
            .json(&TaskId::new(params.tid.clone()));
        self.send::<Option<serde_json::Value>>(request).await?;
        Ok(())
    }

    /// Requests a lifecycle transition. The backend decides whether it is
    /// legal; this never refuses to send.
    pub async fn perform_action(&self, action: TaskAction, tid: &str) -> Result<ActionOutcome> {
        log::info!("Requesting {action} for task {tid}");
        let request = self
            .http
            .post(self.endpoint(&format!("task/{}", action.as_str())))
            .json(&TaskId::new(tid));
        let outcome: Option<ActionOutcome> = self.send(request).await?;
        Ok(outcome.unwrap_or_default())
    }
}
