// HTTP routes
pub mod batch;
pub mod form;
pub mod health;

pub use batch::*;
pub use form::*;
pub use health::*;
