//! View widgets

pub mod modes;
pub mod results;
pub mod search_bar;
pub mod theme;
