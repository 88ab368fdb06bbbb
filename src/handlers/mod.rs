pub mod health;
pub mod page;
pub mod portfolio;

pub use health::*;
pub use page::*;
pub use portfolio::*;
