pub mod error;
pub mod feature_flags;

// Clinic console domain types
pub mod inventory;
pub mod staff;
pub mod toast;

pub use error::*;
pub use feature_flags::*;

pub use inventory::*;
pub use staff::*;
pub use toast::*;
