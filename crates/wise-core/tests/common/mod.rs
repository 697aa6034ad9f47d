#![allow(dead_code)]

use std::{collections::VecDeque, sync::Mutex, time::Duration};

use async_trait::async_trait;
use tokio::time::Instant;
use wise_core::{
    models::{Plan, PlanStatus, Task, TaskPage, TaskVisualization},
    params::ListTasks,
    ConsoleError, Result, TaskApi,
};

/// One scripted backend response.
pub struct Reply<T> {
    pub delay: Duration,
    pub outcome: std::result::Result<T, String>,
}

pub fn ok<T>(value: T) -> Reply<T> {
    Reply {
        delay: Duration::ZERO,
        outcome: Ok(value),
    }
}

pub fn slow<T>(value: T, delay: Duration) -> Reply<T> {
    Reply {
        delay,
        outcome: Ok(value),
    }
}

pub fn fail<T>(message: &str) -> Reply<T> {
    Reply {
        delay: Duration::ZERO,
        outcome: Err(message.to_string()),
    }
}

/// Queue of replies; once drained, the last success is repeated.
struct Script<T> {
    queue: VecDeque<Reply<T>>,
    last: Option<T>,
}

impl<T> Default for Script<T> {
    fn default() -> Self {
        Self {
            queue: VecDeque::new(),
            last: None,
        }
    }
}

impl<T: Clone> Script<T> {
    fn next(&mut self) -> Reply<T> {
        match self.queue.pop_front() {
            Some(reply) => {
                if let Ok(value) = &reply.outcome {
                    self.last = Some(value.clone());
                }
                reply
            }
            None => Reply {
                delay: Duration::ZERO,
                outcome: self
                    .last
                    .clone()
                    .ok_or_else(|| "no scripted response".to_string()),
            },
        }
    }
}

async fn deliver<T>(reply: Reply<T>) -> Result<T> {
    if !reply.delay.is_zero() {
        tokio::time::sleep(reply.delay).await;
    }
    reply
        .outcome
        .map_err(|message| ConsoleError::http(500, Some(&message)))
}

/// In-memory backend with scripted responses and a call log.
pub struct FakeApi {
    epoch: Instant,
    pages: Mutex<Script<TaskPage>>,
    details: Mutex<Script<TaskVisualization>>,
    list_calls: Mutex<Vec<(Duration, ListTasks)>>,
    detail_calls: Mutex<Vec<(Duration, String)>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
            pages: Mutex::new(Script::default()),
            details: Mutex::new(Script::default()),
            list_calls: Mutex::new(Vec::new()),
            detail_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn script_pages(&self, replies: impl IntoIterator<Item = Reply<TaskPage>>) {
        self.pages.lock().unwrap().queue.extend(replies);
    }

    pub fn script_details(&self, replies: impl IntoIterator<Item = Reply<TaskVisualization>>) {
        self.details.lock().unwrap().queue.extend(replies);
    }

    /// Offsets from construction at which list calls were issued.
    pub fn list_call_offsets(&self) -> Vec<Duration> {
        self.list_calls.lock().unwrap().iter().map(|(at, _)| *at).collect()
    }

    pub fn list_calls(&self) -> Vec<(Duration, ListTasks)> {
        self.list_calls.lock().unwrap().clone()
    }

    pub fn list_call_count(&self) -> usize {
        self.list_calls.lock().unwrap().len()
    }

    pub fn detail_call_offsets(&self) -> Vec<Duration> {
        self.detail_calls.lock().unwrap().iter().map(|(at, _)| *at).collect()
    }

    pub fn detail_call_count(&self) -> usize {
        self.detail_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl TaskApi for FakeApi {
    async fn list_tasks(&self, params: &ListTasks) -> Result<TaskPage> {
        self.list_calls
            .lock()
            .unwrap()
            .push((self.epoch.elapsed(), params.clone()));
        let reply = self.pages.lock().unwrap().next();
        deliver(reply).await
    }

    async fn task_visualization(&self, tid: &str) -> Result<TaskVisualization> {
        self.detail_calls
            .lock()
            .unwrap()
            .push((self.epoch.elapsed(), tid.to_string()));
        let reply = self.details.lock().unwrap().next();
        deliver(reply).await
    }
}

pub fn task(tid: &str) -> Task {
    Task {
        tid: tid.to_string(),
        name: format!("task {tid}"),
        types: "url".to_string(),
        ..Default::default()
    }
}

pub fn page(total: u64, tids: &[&str]) -> TaskPage {
    TaskPage {
        total,
        list: tids.iter().map(|tid| task(tid)).collect(),
    }
}

pub fn plan(pid: &str, status: PlanStatus) -> Plan {
    Plan {
        pid: pid.to_string(),
        name: format!("plan {pid}"),
        status,
        ..Default::default()
    }
}

pub fn detail(tid: &str, plans: Vec<Plan>) -> TaskVisualization {
    TaskVisualization {
        tid: tid.to_string(),
        name: format!("task {tid}"),
        plans: plans
            .into_iter()
            .enumerate()
            .map(|(index, plan)| Plan {
                index: index as i64,
                ..plan
            })
            .collect(),
        ..Default::default()
    }
}

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}
