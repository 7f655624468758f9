pub mod colors;
pub mod logging;
pub mod print;
pub mod spinner;
pub mod view;
