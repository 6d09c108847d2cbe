//! UI Components
//!
//! Dashboard views and the panels they are built from.

mod notifications;
mod view_tab_bar;
mod request_form;
mod request_list;
mod submit_form;
mod stats_panel;
mod stop_parser_button;
mod schedule_panel;
mod requests_page;
mod queue_monitor;
mod history_table;
mod security_panel;

pub use notifications::{ErrorModal, ToastStack};
pub use view_tab_bar::{DashboardView, ViewTabBar};
pub use request_form::RequestForm;
pub use request_list::RequestList;
pub use submit_form::SubmitForm;
pub use stats_panel::StatsPanel;
pub use stop_parser_button::StopParserButton;
pub use schedule_panel::SchedulePanel;
pub use requests_page::RequestsPage;
pub use queue_monitor::QueueMonitor;
pub use history_table::HistoryTableView;
pub use security_panel::SecurityPanel;
