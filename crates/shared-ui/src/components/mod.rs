pub mod badge;
pub mod banner;
pub mod button;
pub mod card;
pub mod empty_state;
pub mod form;
pub mod form_select;
pub mod input;
pub mod navbar;
pub mod page_header;
pub mod skeleton;
pub mod textarea;

pub use badge::*;
pub use banner::*;
pub use button::*;
pub use card::*;
pub use empty_state::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use navbar::*;
pub use page_header::*;
pub use skeleton::*;
pub use textarea::*;
