//! Interactive job-title prompt

mod job_repl;

pub use job_repl::{JobRepl, is_exit_command};
