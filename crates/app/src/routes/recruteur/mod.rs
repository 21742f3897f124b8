mod dashboard;
mod editor;
mod form;
mod manage;
mod received;

pub use dashboard::RecruteurDashboard;
pub use editor::{OpportunityCreate, OpportunityEdit};
pub use manage::ManageOpportunities;
pub use received::ReceivedApplications;

use dioxus::prelude::*;

use crate::routes::notifications::NotificationsPage;

#[component]
pub fn RecruteurNotifications() -> Element {
    rsx! { NotificationsPage {} }
}
