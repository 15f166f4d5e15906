//! Progress reporting for job analysis runs

pub mod reporter;
