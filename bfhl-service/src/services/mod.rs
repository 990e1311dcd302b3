pub mod answer;
pub mod math;
pub mod providers;

pub use answer::AnswerService;
