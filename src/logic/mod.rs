pub mod minefield;
pub mod widget;
