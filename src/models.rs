use serde::{Deserialize, Serialize};

pub const DEFAULT_INPUT_FILE: &str = "Academy_Candidates.txt";
pub const DEFAULT_OUTPUT_FILE: &str = "Sorted_Academy_Candidates.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub input_file: String,
    pub output_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: DEFAULT_INPUT_FILE.to_string(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
        }
    }
}

impl Config {
    pub fn load_from_file(file_path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(file_path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to_file(&self, file_path: &str) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(file_path, content)?;
        Ok(())
    }

    /// Command line values win over whatever came from the file
    pub fn with_overrides(mut self, input_file: Option<&str>, output_file: Option<&str>) -> Self {
        if let Some(input) = input_file {
            self.input_file = input.to_string();
        }
        if let Some(output) = output_file {
            self.output_file = output.to_string();
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub position: String,
    pub age: u32,
    pub state: String,
}

impl Candidate {
    /// Last whitespace-separated token of the name, if any
    pub fn surname(&self) -> Option<&str> {
        self.name.split_whitespace().last()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionStats {
    pub count: usize,
    pub age_sum: u64,
    pub youngest: u32,
    pub oldest: u32,
}

impl PositionStats {
    pub fn new(age: u32) -> Self {
        Self {
            count: 0,
            age_sum: 0,
            youngest: age,
            oldest: age,
        }
    }

    pub fn add(&mut self, age: u32) {
        self.count += 1;
        self.age_sum += u64::from(age);
        self.oldest = self.oldest.max(age);
        self.youngest = self.youngest.min(age);
    }

    pub fn average_age(&self) -> f64 {
        self.age_sum as f64 / self.count as f64
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstructorPicks {
    pub qa: Option<String>,
    pub mobile: Option<String>,
}
