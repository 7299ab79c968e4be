pub mod bird;
pub mod hello;
