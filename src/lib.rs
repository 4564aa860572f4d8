pub mod calendar;
pub mod error;
pub mod fixtures;
pub mod output;
pub mod polar;
