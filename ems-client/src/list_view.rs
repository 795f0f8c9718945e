//! Debounced employee list view
//!
//! Bridges UI search/page state to the list endpoint without issuing a
//! request per keystroke. Any state change arms a quiescence window;
//! the fetch fires once input has been stable for [`DEBOUNCE_MS`], with
//! the most recent parameters. Superseded pending fetches are simply
//! never issued. All fetches run sequentially on one worker task, so a
//! stale response cannot overwrite a newer one.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::time::{Duration, Instant, sleep_until};
use tokio_util::sync::CancellationToken;

use crate::http::EmployeeApi;
use shared::models::Employee;

/// Quiescence window for search/page changes
const DEBOUNCE_MS: u64 = 500;

/// Snapshot of the list view, published after every change
#[derive(Debug, Clone, Default)]
pub struct ListState {
    pub employees: Vec<Employee>,
    pub total_pages: i64,
    pub total_count: i64,
    pub page: i64,
    pub search: String,
    /// True while a list fetch is in flight
    pub loading: bool,
    /// Message of the last failed operation, cleared on the next fetch
    pub error: Option<String>,
}

enum Command {
    SetSearch(String),
    SetPage(i64),
    Refresh(Option<i64>),
    Delete(i64),
}

/// Handle to a spawned list view worker
pub struct ListView {
    tx: mpsc::UnboundedSender<Command>,
    state_rx: watch::Receiver<ListState>,
    shutdown: CancellationToken,
}

impl ListView {
    /// Spawn the worker. The initial population goes through the same
    /// debounce window as any other change.
    pub fn spawn(api: Arc<dyn EmployeeApi>, page_size: i64) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let initial = ListState {
            page: 1,
            total_pages: 1,
            ..Default::default()
        };
        let (state_tx, state_rx) = watch::channel(initial.clone());
        let shutdown = CancellationToken::new();

        let worker = Worker {
            api,
            page_size,
            state: initial,
            state_tx,
            shutdown: shutdown.clone(),
        };
        tokio::spawn(worker.run(rx));

        Self {
            tx,
            state_rx,
            shutdown,
        }
    }

    /// Watch channel carrying every published [`ListState`]
    pub fn state(&self) -> watch::Receiver<ListState> {
        self.state_rx.clone()
    }

    /// Change the search term; the page resets to 1
    pub fn set_search(&self, query: impl Into<String>) {
        let _ = self.tx.send(Command::SetSearch(query.into()));
    }

    /// Move to another page; out-of-range pages are ignored
    pub fn set_page(&self, page: i64) {
        let _ = self.tx.send(Command::SetPage(page));
    }

    /// Force an immediate fetch, optionally jumping to a page first.
    /// Used after create/update to show the result without waiting out
    /// the debounce window.
    pub fn refresh(&self, page: Option<i64>) {
        let _ = self.tx.send(Command::Refresh(page));
    }

    /// Delete an employee and refetch, stepping back a page when the
    /// deletion emptied the current one
    pub fn delete(&self, id: i64) {
        let _ = self.tx.send(Command::Delete(id));
    }

    /// Stop the worker
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }
}

struct Worker {
    api: Arc<dyn EmployeeApi>,
    page_size: i64,
    state: ListState,
    state_tx: watch::Sender<ListState>,
    shutdown: CancellationToken,
}

impl Worker {
    async fn run(mut self, mut rx: mpsc::UnboundedReceiver<Command>) {
        // Arm an initial fetch so a freshly spawned view populates itself
        let mut deadline = Some(Instant::now() + Duration::from_millis(DEBOUNCE_MS));

        loop {
            let sleep_target =
                deadline.unwrap_or_else(|| Instant::now() + Duration::from_secs(3600));

            tokio::select! {
                _ = self.shutdown.cancelled() => break,

                _ = sleep_until(sleep_target), if deadline.is_some() => {
                    deadline = None;
                    self.fetch().await;
                }

                cmd = rx.recv() => match cmd {
                    None => break,
                    Some(Command::SetSearch(query)) => {
                        // Any search change restarts from the first page
                        self.state.search = query;
                        self.state.page = 1;
                        deadline = Some(Instant::now() + Duration::from_millis(DEBOUNCE_MS));
                    }
                    Some(Command::SetPage(page)) => {
                        if page >= 1 && page <= self.state.total_pages && page != self.state.page {
                            self.state.page = page;
                            deadline = Some(Instant::now() + Duration::from_millis(DEBOUNCE_MS));
                        }
                    }
                    Some(Command::Refresh(page)) => {
                        if let Some(page) = page {
                            self.state.page = page.max(1);
                        }
                        deadline = None;
                        self.fetch().await;
                    }
                    Some(Command::Delete(id)) => {
                        deadline = None;
                        self.remove(id).await;
                    }
                },
            }
        }
    }

    async fn fetch(&mut self) {
        self.state.loading = true;
        self.state.error = None;
        self.publish();

        let search = match self.state.search.trim() {
            "" => None,
            term => Some(term.to_string()),
        };

        match self
            .api
            .list(search.as_deref(), self.state.page, self.page_size)
            .await
        {
            Ok(list) => {
                self.state.employees = list.employees;
                self.state.total_pages = list.total_pages.max(1);
                self.state.total_count = list.total_count;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Employee list fetch failed");
                self.state.employees = Vec::new();
                self.state.total_pages = 1;
                self.state.total_count = 0;
                self.state.error = Some(e.to_string());
            }
        }

        self.state.loading = false;
        self.publish();
    }

    async fn remove(&mut self, id: i64) {
        match self.api.delete(id).await {
            Ok(_) => {
                // Step back if the deletion emptied the current page
                let remaining = (self.state.total_count - 1).max(0);
                let last_page = ((remaining + self.page_size - 1) / self.page_size).max(1);
                self.state.page = self.state.page.min(last_page);
                self.fetch().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, id, "Employee delete failed");
                self.state.error = Some(e.to_string());
                self.publish();
            }
        }
    }

    fn publish(&self) {
        let _ = self.state_tx.send(self.state.clone());
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::error::{ClientError, ClientResult};
    use shared::client::{DeleteAck, EmployeeList};

    struct FakeApi {
        employees: Mutex<Vec<Employee>>,
        list_calls: Mutex<Vec<(Option<String>, i64, i64)>>,
        fail_list: AtomicBool,
    }

    impl FakeApi {
        fn with_employees(count: i64) -> Arc<Self> {
            let employees = (1..=count)
                .map(|n| Employee {
                    id: n,
                    employee_id: format!("E{n:03}"),
                    name: format!("Employee {n}"),
                    email: format!("e{n}@example.com"),
                    phone: format!("98765432{n:02}"),
                    position: "Engineer".to_string(),
                    created_at: 1_000 + n,
                    updated_at: 1_000 + n,
                })
                .collect();
            Arc::new(Self {
                employees: Mutex::new(employees),
                list_calls: Mutex::new(Vec::new()),
                fail_list: AtomicBool::new(false),
            })
        }

        fn calls(&self) -> Vec<(Option<String>, i64, i64)> {
            self.list_calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl EmployeeApi for FakeApi {
        async fn list(
            &self,
            search: Option<&str>,
            page: i64,
            limit: i64,
        ) -> ClientResult<EmployeeList> {
            if self.fail_list.load(Ordering::SeqCst) {
                return Err(ClientError::Internal("connection refused".to_string()));
            }
            self.list_calls
                .lock()
                .unwrap()
                .push((search.map(String::from), page, limit));

            let term = search.map(str::to_lowercase);
            let all = self.employees.lock().unwrap();
            let matching: Vec<Employee> = all
                .iter()
                .filter(|e| match &term {
                    None => true,
                    Some(t) => {
                        e.name.to_lowercase().contains(t)
                            || e.email.to_lowercase().contains(t)
                            || e.employee_id.to_lowercase().contains(t)
                    }
                })
                .cloned()
                .collect();

            let total_count = matching.len() as i64;
            let total_pages = (total_count + limit - 1) / limit;
            let start = ((page - 1) * limit).max(0) as usize;
            let employees = matching
                .into_iter()
                .skip(start)
                .take(limit as usize)
                .collect();

            Ok(EmployeeList {
                success: true,
                employees,
                total_pages,
                total_count,
            })
        }

        async fn delete(&self, id: i64) -> ClientResult<DeleteAck> {
            let mut all = self.employees.lock().unwrap();
            let before = all.len();
            all.retain(|e| e.id != id);
            if all.len() == before {
                return Err(ClientError::NotFound("Employee not found".to_string()));
            }
            Ok(DeleteAck {
                success: true,
                message: "Employee deleted successfully".to_string(),
            })
        }
    }

    /// Let the debounce window elapse and the resulting fetch finish
    async fn settle() {
        tokio::time::sleep(Duration::from_millis(DEBOUNCE_MS + 100)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn populates_after_the_initial_debounce() {
        let api = FakeApi::with_employees(5);
        let view = ListView::spawn(api.clone(), 3);

        settle().await;

        let state = view.state().borrow().clone();
        assert_eq!(state.employees.len(), 3);
        assert_eq!(state.total_count, 5);
        assert_eq!(state.total_pages, 2);
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(api.calls().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_changes_collapse_into_one_fetch() {
        let api = FakeApi::with_employees(5);
        let view = ListView::spawn(api.clone(), 3);
        settle().await;

        view.set_search("e");
        tokio::time::sleep(Duration::from_millis(200)).await;
        view.set_search("em");
        tokio::time::sleep(Duration::from_millis(200)).await;
        view.set_search("employee 1");
        settle().await;

        let calls = api.calls();
        // Initial fetch plus exactly one for the final term
        assert_eq!(calls.len(), 2);
        assert_eq!(
            calls[1],
            (Some("employee 1".to_string()), 1, 3)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn search_change_resets_to_the_first_page() {
        let api = FakeApi::with_employees(5);
        let view = ListView::spawn(api.clone(), 3);
        settle().await;

        view.set_page(2);
        settle().await;
        assert_eq!(view.state().borrow().page, 2);

        view.set_search("employee");
        settle().await;

        let calls = api.calls();
        assert_eq!(calls.last().unwrap().1, 1);
        assert_eq!(view.state().borrow().page, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn out_of_range_pages_are_ignored() {
        let api = FakeApi::with_employees(5);
        let view = ListView::spawn(api.clone(), 3);
        settle().await;

        view.set_page(99);
        view.set_page(0);
        settle().await;

        assert_eq!(api.calls().len(), 1);
        assert_eq!(view.state().borrow().page, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn fetch_failure_resets_the_view() {
        let api = FakeApi::with_employees(5);
        let view = ListView::spawn(api.clone(), 3);
        settle().await;

        api.fail_list.store(true, Ordering::SeqCst);
        view.refresh(None);
        tokio::time::sleep(Duration::from_millis(50)).await;

        let state = view.state().borrow().clone();
        assert!(state.employees.is_empty());
        assert_eq!(state.total_pages, 1);
        assert_eq!(state.total_count, 0);
        assert!(!state.loading);
        assert!(state.error.as_deref().unwrap().contains("connection refused"));
    }

    #[tokio::test(start_paused = true)]
    async fn delete_steps_back_when_the_last_page_empties() {
        let api = FakeApi::with_employees(4);
        let view = ListView::spawn(api.clone(), 3);
        settle().await;

        // Page 2 holds only employee 4
        view.set_page(2);
        settle().await;
        assert_eq!(view.state().borrow().employees.len(), 1);

        view.delete(4);
        tokio::time::sleep(Duration::from_millis(50)).await;

        let state = view.state().borrow().clone();
        assert_eq!(state.page, 1);
        assert_eq!(state.employees.len(), 3);
        assert_eq!(state.total_count, 3);
        assert_eq!(state.total_pages, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn delete_failure_surfaces_without_clearing_the_list() {
        let api = FakeApi::with_employees(3);
        let view = ListView::spawn(api.clone(), 3);
        settle().await;

        view.delete(99);
        tokio::time::sleep(Duration::from_millis(50)).await;

        let state = view.state().borrow().clone();
        assert_eq!(state.employees.len(), 3);
        assert!(state.error.as_deref().unwrap().contains("Employee not found"));
    }
}
