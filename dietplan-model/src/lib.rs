pub mod choice;
pub mod form;
pub mod plan;
