//! Command handlers: run one command against the backend and render the
//! outcome.

use std::sync::Arc;

use anyhow::{Context, Result};
use log::{debug, info};
use tokio::sync::mpsc;
use wise_core::{
    display::{
        ActionResult, CreateResult, DeleteResult, DetailScreen, ListScreen, TaskPageView,
        UpdateResult,
    },
    params::{DeleteTask, ListTasks, TaskAction, TaskId, UpdateTask},
    ConsoleClient, ConsoleConfig, DetailState, ListPoller, Snapshot, VisualizationView,
};

use crate::{
    cli::{ListTasksArgs, TaskCommands, WatchTaskArgs},
    renderer::TerminalRenderer,
};

/// Executes CLI commands with a shared client and renderer.
pub struct Cli {
    client: Arc<ConsoleClient>,
    config: ConsoleConfig,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(client: ConsoleClient, config: ConsoleConfig, renderer: TerminalRenderer) -> Self {
        Self {
            client: Arc::new(client),
            config,
            renderer,
        }
    }

    pub async fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::List(args) => self.list_tasks(args).await,
            TaskCommands::Show(args) => self.show_task(&args.into()).await,
            TaskCommands::Watch(args) => self.watch_task(args).await,
            TaskCommands::Create(args) => {
                let task = self
                    .client
                    .create_task(&args.into())
                    .await
                    .context("Failed to create task")?;
                self.renderer.render(&CreateResult::new(task).to_string())
            }
            TaskCommands::Update(args) => self.update_task(args.into()).await,
            TaskCommands::Delete(args) => self.delete_task(args.into()).await,
            TaskCommands::Retry(args) => self.perform_action(TaskAction::Retry, args.into()).await,
            TaskCommands::Pause(args) => self.perform_action(TaskAction::Pause, args.into()).await,
            TaskCommands::Resume(args) => {
                self.perform_action(TaskAction::Resume, args.into()).await
            }
            TaskCommands::Cancel(args) => {
                self.perform_action(TaskAction::Cancel, args.into()).await
            }
        }
    }

    /// First page with the configured page size and no filters.
    pub fn default_list_params(&self) -> ListTasks {
        ListTasks {
            page_size: self.config.page_size,
            ..Default::default()
        }
    }

    async fn list_tasks(&self, args: ListTasksArgs) -> Result<()> {
        let watch = args.watch;
        let configured_size = args.page_size.is_none();
        let mut params: ListTasks = args.into();
        if configured_size {
            params.page_size = self.config.page_size;
        }
        if watch {
            self.watch_list(params).await
        } else {
            self.print_page(&params).await
        }
    }

    pub async fn print_page(&self, params: &ListTasks) -> Result<()> {
        let page = self
            .client
            .list_tasks(params)
            .await
            .context("Failed to list tasks")?;
        self.renderer
            .render(&TaskPageView { page: &page, params }.to_string())
    }

    async fn watch_list(&self, params: ListTasks) -> Result<()> {
        let mut list = ListPoller::start(
            self.client.clone(),
            params,
            self.config.list_interval(),
        )
        .context("Failed to start polling the task list")?;
        let mut rx = list.subscribe();

        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => break,
                changed = rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let snapshot = rx.borrow_and_update().clone();
                    self.renderer.begin_frame()?;
                    self.renderer.render(
                        &ListScreen { snapshot: &snapshot, params: list.params() }.to_string(),
                    )?;
                }
            }
        }

        list.stop();
        info!("Stopped watching task list");
        Ok(())
    }

    async fn show_task(&self, params: &TaskId) -> Result<()> {
        let task = self
            .client
            .get_task(params)
            .await
            .with_context(|| format!("Failed to load task {}", params.tid))?;
        self.renderer.render(&task.to_string())
    }

    async fn watch_task(&self, args: WatchTaskArgs) -> Result<()> {
        let mut view = VisualizationView::new(self.client.clone(), self.config.detail_interval());
        view.open(&args.tid)
            .await
            .with_context(|| format!("Failed to open task {}", args.tid))?;
        if let Some(pid) = &args.plan {
            view.select(pid)?;
        }

        let mut rx = view.subscribe();
        let snapshot = rx.borrow_and_update().clone();
        self.render_detail(&snapshot)?;

        let mut lines = spawn_stdin_reader();
        let mut stdin_open = true;

        loop {
            // Without stdin nothing can be selected, and a finished task no
            // longer changes
            if !stdin_open && view.detail().is_some_and(|d| d.status.is_terminal()) {
                info!("Task {} finished, closing view", args.tid);
                break;
            }
            tokio::select! {
                _ = tokio::signal::ctrl_c() => break,
                changed = rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let snapshot = rx.borrow_and_update().clone();
                    self.render_detail(&snapshot)?;
                }
                line = lines.recv(), if stdin_open => {
                    match line {
                        Some(line) => {
                            let input = line.trim();
                            if input.eq_ignore_ascii_case("q") {
                                break;
                            }
                            if !input.is_empty() {
                                self.select_plan(&view, input);
                            }
                        }
                        None => {
                            debug!("stdin closed");
                            stdin_open = false;
                        }
                    }
                }
            }
        }

        view.close();
        Ok(())
    }

    /// Select by plan id, falling back to a 1-based position.
    fn select_plan(&self, view: &VisualizationView, input: &str) {
        let by_pid = view.select(input);
        let selected = match (by_pid, input.parse::<usize>()) {
            (Ok(plan), _) => Ok(plan),
            (Err(_), Ok(position)) if position > 0 => view.select_position(position - 1),
            (Err(err), _) => Err(err),
        };
        if let Err(err) = selected {
            self.renderer.notice(&err.to_string());
        }
    }

    fn render_detail(&self, snapshot: &Snapshot<DetailState>) -> Result<()> {
        self.renderer.begin_frame()?;
        self.renderer
            .render(&DetailScreen { snapshot }.to_string())
    }

    async fn update_task(&self, params: UpdateTask) -> Result<()> {
        let changes = params
            .changed_fields()
            .into_iter()
            .map(str::to_string)
            .collect();
        let task = self
            .client
            .update_task(&params)
            .await
            .with_context(|| format!("Failed to update task {}", params.tid))?;
        self.renderer
            .render(&UpdateResult::with_changes(task, changes).to_string())
    }

    async fn delete_task(&self, params: DeleteTask) -> Result<()> {
        self.client
            .delete_task(&params)
            .await
            .with_context(|| format!("Failed to delete task {}", params.tid))?;
        self.renderer
            .render(&DeleteResult { tid: params.tid }.to_string())
    }

    /// Send a lifecycle action, then reload the task to show its new state.
    async fn perform_action(&self, action: TaskAction, params: TaskId) -> Result<()> {
        let outcome = self
            .client
            .perform_action(action, &params.tid)
            .await
            .with_context(|| format!("Failed to {action} task {}", params.tid))?;
        self.renderer.render(
            &ActionResult {
                action,
                tid: params.tid.clone(),
                outcome,
            }
            .to_string(),
        )?;
        println!();
        self.show_task(&params).await
    }
}

/// Forward stdin lines from a plain thread.
///
/// A blocking read cannot be cancelled, so it must not hold up runtime
/// shutdown when the view closes on Ctrl-C.
fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}
