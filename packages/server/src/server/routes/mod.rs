// HTTP routes
pub mod extract;
pub mod health;
pub mod landing;
pub mod models;

pub use extract::*;
pub use health::*;
pub use landing::*;
pub use models::*;
