pub mod inventory_header;
pub mod patients_view_header;
pub mod role_headers;

pub use inventory_header::InventoryHeader;
pub use patients_view_header::PatientsViewHeader;
pub use role_headers::{AccountantsHeader, ReceptionistsHeader, UsersHeader};
