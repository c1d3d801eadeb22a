mod quiz_vm;
mod time_fmt;

pub use quiz_vm::{
    FinishedVm, NextButtonVm, OptionVm, ProgressVm, QuestionVm, map_finished, map_next_button,
    map_progress, map_question, timer_label,
};
pub use time_fmt::format_countdown;
