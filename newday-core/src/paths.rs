use std::path::{Path, PathBuf};

pub fn input_path(root: &Path, day: u32, year: i32) -> PathBuf {
    root.join(year.to_string())
        .join("inputs")
        .join(format!("{day}.txt"))
}

pub fn solution_path(root: &Path, day: u32, year: i32) -> PathBuf {
    root.join(year.to_string())
        .join("solutions")
        .join(format!("day{day}.py"))
}
