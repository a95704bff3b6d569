pub mod board;
pub mod card;
pub mod list;

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;
