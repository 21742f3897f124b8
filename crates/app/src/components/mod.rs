mod application_list;
mod listing_card;
mod status;

pub use application_list::*;
pub use listing_card::*;
pub use status::*;
