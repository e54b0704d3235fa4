use std::path::PathBuf;
use std::fmt::{Debug, Display};

pub trait ErrorType: Display + PartialEq {}

#[derive(Debug, PartialEq, Clone, Default)]
pub struct Location {
    pub file: PathBuf,
    pub line: usize,
    pub column: usize
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let has_file = !self.file.as_os_str().is_empty();
        match (has_file, self.line) {
            (true, 0) => write!(f, "{}", self.file.display()),
            (true, _) => write!(f, "{}:{}:{}", self.file.display(), self.line, self.column),
            (false, 0) => write!(f, "input"),
            (false, _) => write!(f, "{}:{}", self.line, self.column),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Error<T: ErrorType> {
    pub location: Location,
    pub error: T
}

impl<T: ErrorType> Error<T> {
    // Attaches the file the input came from, for reporting
    pub fn in_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.location.file = file.into();
        self
    }
}

impl<T: ErrorType> Display for Error<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\x1b[31;49;1m[{}]\x1b[39;49;1m  {}\x1b[0m", self.location, self.error)
    }
}

impl<T: ErrorType + Debug> std::error::Error for Error<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_location() {
        let locations = vec![
            Location { file: PathBuf::new(), line: 0, column: 0 },
            Location { file: PathBuf::new(), line: 3, column: 7 },
            Location { file: PathBuf::from("plant.lsys"), line: 0, column: 0 },
            Location { file: PathBuf::from("plant.lsys"), line: 5, column: 1 }
        ];
        let answers = vec!["input", "3:7", "plant.lsys", "plant.lsys:5:1"];

        for (location, answer) in std::iter::zip(locations, answers) {
            assert_eq!(location.to_string(), answer);
        }
    }
}
