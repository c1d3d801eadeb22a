mod active;
mod quiz;
mod screens;

pub use quiz::{QuizScreen, QuizView};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
