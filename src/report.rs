use crate::analyzer::{PositionMetrics, MOBILE_POSITION, QA_POSITION, WEB_POSITION};
use crate::error::CandidateResult;
use crate::models::{Candidate, InstructorPicks};
use csv::{Terminator, WriterBuilder};
use std::path::Path;

pub const CSV_HEADER: [&str; 4] = ["Nome", "Vaga", "Idade", "Estado"];

/// Console summary of the per-position metrics. Headings always appear,
/// values only when the position is present.
pub fn render_report(metrics: &PositionMetrics, total_candidates: usize, distinct_states: usize) -> String {
    let mut content = String::new();

    content.push_str("Porcentagem de candidatos por vaga:\n");
    for (position, stats) in metrics {
        let percentage = (stats.count as f64 / total_candidates as f64) * 100.0;
        content.push_str(&format!("{}: {:.2}%\n", position, percentage));
    }

    content.push_str("\nIdade média dos candidatos de QA:\n");
    if let Some(qa) = metrics.get(QA_POSITION) {
        content.push_str(&format!("{:.2}\n", qa.average_age()));
    }

    content.push_str("\nIdade do candidato mais velho de Mobile:\n");
    if let Some(mobile) = metrics.get(MOBILE_POSITION) {
        content.push_str(&format!("{}\n", mobile.oldest));
    }

    content.push_str("\nIdade do candidato mais novo de Web:\n");
    if let Some(web) = metrics.get(WEB_POSITION) {
        content.push_str(&format!("{}\n", web.youngest));
    }

    content.push_str("\nSoma das idades dos candidatos de QA:\n");
    if let Some(qa) = metrics.get(QA_POSITION) {
        content.push_str(&format!("{}\n", qa.age_sum));
    }

    content.push_str("\nNúmero de estados distintos presentes entre os candidatos:\n");
    content.push_str(&format!("{}\n", distinct_states));

    content
}

pub fn render_export_notice(output_file: &str) -> String {
    format!("\nArquivo '{}' foi criado.\n", output_file)
}

pub fn render_instructors(picks: &InstructorPicks) -> String {
    format!(
        "\nInstrutor de QA descoberto: {}\nInstrutor de Mobile descoberto: {}\n",
        picks.qa.as_deref().unwrap_or("None"),
        picks.mobile.as_deref().unwrap_or("None")
    )
}

/// Write every candidate, stably sorted by name, replacing any existing file.
pub fn generate_sorted_csv(candidates: &[Candidate], output_path: &Path) -> CandidateResult<usize> {
    let mut sorted: Vec<&Candidate> = candidates.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_path(output_path)?;

    writer.write_record(CSV_HEADER)?;

    for candidate in &sorted {
        let age = candidate.age.to_string();
        writer.write_record([
            candidate.name.as_str(),
            candidate.position.as_str(),
            age.as_str(),
            candidate.state.as_str(),
        ])?;
    }

    writer.flush()?;
    log::info!("Wrote {} candidates to {}", sorted.len(), output_path.display());
    Ok(sorted.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::CandidateAnalyzer;
    use crate::loader::CandidateLoader;
    use std::fs;

    const SAMPLE: &str = "\
Bruno Lima;Web;27;SP
ana;QA;25;SC
Carla Castro;Mobile;34;PI
Bruno Lima;QA;20;RJ
Alice Souza;Web;22;SP
Diego Alves;Mobile;29;PI";

    fn sample() -> Vec<Candidate> {
        CandidateLoader::new().parse_str(SAMPLE).unwrap().0
    }

    #[test]
    fn report_lists_every_section() {
        let candidates = sample();
        let metrics = CandidateAnalyzer::new(&candidates).calculate_metrics();
        let report = render_report(&metrics, candidates.len(), 4);

        let expected = "\
Porcentagem de candidatos por vaga:
Web: 33.33%
QA: 33.33%
Mobile: 33.33%

Idade média dos candidatos de QA:
22.50

Idade do candidato mais velho de Mobile:
34

Idade do candidato mais novo de Web:
22

Soma das idades dos candidatos de QA:
45

Número de estados distintos presentes entre os candidatos:
4
";
        assert_eq!(report, expected);
    }

    #[test]
    fn report_skips_missing_positions() {
        let candidates = CandidateLoader::new().parse_str("Bruno;Web;27;SP").unwrap().0;
        let metrics = CandidateAnalyzer::new(&candidates).calculate_metrics();
        let report = render_report(&metrics, candidates.len(), 1);

        assert!(report.contains("Web: 100.00%\n"));
        assert!(report.contains("Idade média dos candidatos de QA:\n\nIdade do candidato mais velho"));
        assert!(report.contains("Idade do candidato mais velho de Mobile:\n\nIdade do candidato mais novo"));
        assert!(report.contains("Idade do candidato mais novo de Web:\n27\n"));
    }

    #[test]
    fn instructors_render_none_when_absent() {
        let picks = InstructorPicks {
            qa: None,
            mobile: Some("Carla Castro".to_string()),
        };
        assert_eq!(
            render_instructors(&picks),
            "\nInstrutor de QA descoberto: None\nInstrutor de Mobile descoberto: Carla Castro\n"
        );
    }

    #[test]
    fn csv_is_sorted_by_name_with_stable_ties() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Sorted_Academy_Candidates.csv");

        let written = generate_sorted_csv(&sample(), &path).unwrap();
        assert_eq!(written, 6);

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.split_terminator("\r\n").collect();
        assert_eq!(
            lines,
            vec![
                "Nome,Vaga,Idade,Estado",
                "Alice Souza,Web,22,SP",
                "Bruno Lima,Web,27,SP",
                "Bruno Lima,QA,20,RJ",
                "Carla Castro,Mobile,34,PI",
                "Diego Alves,Mobile,29,PI",
                "ana,QA,25,SC",
            ]
        );
    }

    #[test]
    fn csv_quotes_fields_that_need_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let candidates = CandidateLoader::new().parse_str("Silva, Ana;QA;25;SC").unwrap().0;

        generate_sorted_csv(&candidates, &path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.ends_with("\"Silva, Ana\",QA,25,SC\r\n"));
    }

    #[test]
    fn csv_overwrites_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "stale content that is much longer than the export itself\n".repeat(50)).unwrap();

        generate_sorted_csv(&sample(), &path).unwrap();
        let first = fs::read(&path).unwrap();
        generate_sorted_csv(&sample(), &path).unwrap();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
        assert!(!String::from_utf8(first).unwrap().contains("stale"));
    }
}
