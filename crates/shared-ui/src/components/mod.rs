// Layout and display
pub mod badge;
pub mod card;
pub mod data_table;
pub mod page_header;
pub mod separator;

// Actions and forms
pub mod button;
pub mod form;
pub mod form_select;
pub mod input;
pub mod switch;

// Overlays
pub mod sheet;
pub mod toast;

// Depends on button and page_header
pub mod section_header;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
pub use section_header::*;
pub use separator::*;
pub use sheet::*;
pub use switch::*;
pub use toast::*;
