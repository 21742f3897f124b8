mod detail;
mod list;

pub use detail::{apply_state, ApplyState, ApplyUnavailable, OpportunityDetail};
pub use list::OpportunityList;
