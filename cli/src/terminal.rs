pub mod colors;
pub mod input;
pub mod logging;
pub mod notices;
pub mod print;
pub mod report;
pub mod spinner;
