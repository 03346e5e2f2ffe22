use crate::error::{CandidateError, CandidateResult};
use crate::models::Candidate;
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;

const FIELD_SEPARATOR: char = ';';
const FIELD_COUNT: usize = 4;

#[derive(Debug, Default)]
pub struct CandidateLoader;

impl CandidateLoader {
    pub fn new() -> Self {
        Self
    }

    /// Read a `;`-delimited candidate file, returning records in file order
    /// together with the distinct state codes seen.
    pub fn load_file(&self, file_path: &str) -> CandidateResult<(Vec<Candidate>, HashSet<String>)> {
        let content = fs::read_to_string(file_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CandidateError::NotFound {
                path: file_path.to_string(),
            },
            _ => CandidateError::Io(e),
        })?;

        let (candidates, states) = self.parse_str(&content)?;
        log::info!(
            "Loaded {} candidates from {} ({} distinct states)",
            candidates.len(),
            file_path,
            states.len()
        );
        Ok((candidates, states))
    }

    pub fn parse_str(&self, content: &str) -> CandidateResult<(Vec<Candidate>, HashSet<String>)> {
        let mut candidates = Vec::new();
        let mut states = HashSet::new();

        for (index, line) in content.lines().enumerate() {
            let candidate = self.parse_line(line, index + 1)?;
            states.insert(candidate.state.clone());
            candidates.push(candidate);
        }

        Ok((candidates, states))
    }

    fn parse_line(&self, line: &str, line_number: usize) -> CandidateResult<Candidate> {
        let trimmed = line.trim();
        let fields: Vec<&str> = trimmed.split(FIELD_SEPARATOR).collect();

        let parse_error = |reason: String| CandidateError::Parse {
            line: line_number,
            content: trimmed.to_string(),
            reason,
        };

        if fields.len() != FIELD_COUNT {
            return Err(parse_error(format!(
                "expected {} fields, found {}",
                FIELD_COUNT,
                fields.len()
            )));
        }

        let age = fields[2]
            .trim()
            .parse::<u32>()
            .map_err(|e| parse_error(format!("invalid age {:?}: {}", fields[2], e)))?;

        Ok(Candidate {
            name: fields[0].to_string(),
            position: fields[1].to_string(),
            age,
            state: fields[3].to_string(),
        })
    }
}
