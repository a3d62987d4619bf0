use std::process::{Command, Output};

pub const BIN: &str = env!("CARGO_BIN_EXE_section-filter");

pub fn run_filter(args: &[&str]) -> Output {
    Command::new(BIN)
        .args(args)
        .output()
        .expect("filter binary should start")
}

pub fn stdout_lines(out: &Output) -> Vec<String> {
    String::from_utf8(out.stdout.clone())
        .expect("filtered output is utf-8")
        .lines()
        .map(str::to_string)
        .collect()
}
