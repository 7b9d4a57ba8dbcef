pub mod checkers;

pub mod max_length;
