use chrono::NaiveDate;
use jobraptor::core::search::{ReviewSummary, SearchOutcome};
use jobraptor::domain::model::{Record, ResultSet, ScrapeRequest};
use jobraptor::domain::ports::JobScraper;
use jobraptor::{Console, JobRaptor, LocalStorage, RaptorError, Result};
use serde_json::json;
use std::io::Cursor;
use std::sync::Mutex;
use tempfile::TempDir;

struct FakeScraper {
    respond: Box<dyn Fn() -> Result<ResultSet>>,
    calls: Mutex<Vec<ScrapeRequest>>,
}

impl FakeScraper {
    fn new(respond: impl Fn() -> Result<ResultSet> + 'static) -> Self {
        Self {
            respond: Box::new(respond),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<ScrapeRequest> {
        self.calls.lock().unwrap().clone()
    }
}

impl JobScraper for FakeScraper {
    fn name(&self) -> &str {
        "fake"
    }

    fn scrape(&self, request: &ScrapeRequest) -> Result<ResultSet> {
        self.calls.lock().unwrap().push(request.clone());
        (self.respond)()
    }
}

fn three_jobs() -> ResultSet {
    let rows = [
        json!({"title": "ML Engineer", "company": "Acme", "description": "Build\n\nmodels"}),
        json!({"title": "Data Engineer", "company": "Globex", "description": null}),
        json!({"title": "AI Researcher", "company": "None", "description": "Read   papers"}),
    ];
    ResultSet::new(
        rows.into_iter()
            .map(|r| serde_json::from_value::<Record>(r).unwrap())
            .collect(),
    )
}

fn june_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn app(scraper: FakeScraper, temp_dir: &TempDir) -> JobRaptor<FakeScraper, LocalStorage> {
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
    JobRaptor::new(scraper, storage).with_clock(june_first)
}

fn script(lines: &[&str]) -> Console<Cursor<String>, Vec<u8>> {
    let mut input = lines.join("\n");
    input.push('\n');
    Console::new(Cursor::new(input), Vec::new())
}

/// Form answers taking every default except the search term.
const FORM: [&str; 6] = ["AI Engineer", "", "", "", "", ""];

#[test]
fn test_keep_first_and_third_then_save() {
    let temp_dir = TempDir::new().unwrap();
    let app = app(FakeScraper::new(|| Ok(three_jobs())), &temp_dir);

    let mut lines = FORM.to_vec();
    lines.extend(["", "y", "n", "", "", ""]);
    let mut console = script(&lines);

    let outcome = app.search(&mut console).unwrap();

    let expected = three_jobs();
    assert_eq!(
        outcome,
        SearchOutcome::Found {
            total: 3,
            review: Some(ReviewSummary {
                kept: vec![expected.records()[0].clone(), expected.records()[2].clone()],
                saved_to: Some("20240601-ai_engineer.csv".to_string()),
            }),
        }
    );

    let csv = std::fs::read_to_string(temp_dir.path().join("20240601-ai_engineer.csv")).unwrap();
    assert_eq!(
        csv,
        "title,company,description\nML Engineer,Acme,\"Build\n\nmodels\"\nAI Researcher,None,Read   papers\n"
    );

    let out = String::from_utf8(console.into_writer()).unwrap();
    assert!(out.contains("> Found 3 jobs"));
    assert!(out.contains("You kept 2 out of 3 jobs."));
    assert!(out.contains("Description: Build models"));
    assert!(!out.contains("Company: None"));
    assert!(out.contains("Kept jobs saved to 20240601-ai_engineer.csv"));
}

#[test]
fn test_search_passes_parameters_to_scraper() {
    let temp_dir = TempDir::new().unwrap();
    let app = app(FakeScraper::new(|| Ok(ResultSet::empty())), &temp_dir);

    let mut console = script(&["rust developer", "Berlin", "n", "25", "48", "y"]);
    app.search(&mut console).unwrap();

    let calls = app.scraper().calls();
    assert_eq!(calls.len(), 1);
    let request = &calls[0];
    assert_eq!(request.site_name, vec!["linkedin"]);
    assert_eq!(request.search_term, "rust developer");
    assert_eq!(request.location, "Berlin");
    assert!(!request.is_remote);
    assert_eq!(request.results_wanted, 25);
    assert_eq!(request.hours_old, 48);
    assert!(request.linkedin_fetch_description);

    let out = String::from_utf8(console.into_writer()).unwrap();
    assert!(out.contains("> Remote only: No"));
    assert!(out.contains("> Site:        LinkedIn"));
}

#[test]
fn test_declined_confirmation_never_calls_scraper() {
    let temp_dir = TempDir::new().unwrap();
    let app = app(FakeScraper::new(|| Ok(three_jobs())), &temp_dir);

    let mut lines = FORM.to_vec();
    lines[5] = "no";
    let mut console = script(&lines);

    assert_eq!(app.search(&mut console).unwrap(), SearchOutcome::Cancelled);
    assert!(app.scraper().calls().is_empty());

    let out = String::from_utf8(console.into_writer()).unwrap();
    assert!(out.contains("!!! Search canceled!!!"));
}

#[test]
fn test_scraper_error_is_reported_and_menu_continues() {
    let temp_dir = TempDir::new().unwrap();
    let app = app(
        FakeScraper::new(|| {
            Err(RaptorError::ScraperError {
                message: "linkedin rate limited".to_string(),
            })
        }),
        &temp_dir,
    );

    let mut lines = vec!["1"];
    lines.extend(FORM);
    lines.push("2");
    let mut console = script(&lines);

    app.run(&mut console).unwrap();

    let out = String::from_utf8(console.into_writer()).unwrap();
    assert!(out.contains("!!! Search failed: linkedin rate limited!!!"));
    assert_eq!(out.matches("===== JobRaptor Menu =====").count(), 2);
    assert!(out.contains("===== Thank you for using JobRaptor! ====="));
}

#[test]
fn test_empty_results_skip_review() {
    let temp_dir = TempDir::new().unwrap();
    let app = app(FakeScraper::new(|| Ok(ResultSet::empty())), &temp_dir);

    let mut lines = vec!["1"];
    lines.extend(FORM);
    lines.push("2");
    let mut console = script(&lines);

    app.run(&mut console).unwrap();

    let out = String::from_utf8(console.into_writer()).unwrap();
    assert!(out.contains("!!! No jobs found!!!"));
    assert!(!out.contains("Would you like to review the jobs?"));
    assert!(out.contains("===== Thank you for using JobRaptor! ====="));
}

#[test]
fn test_skipping_review_offers_no_export() {
    let temp_dir = TempDir::new().unwrap();
    let app = app(FakeScraper::new(|| Ok(three_jobs())), &temp_dir);

    let mut lines = FORM.to_vec();
    lines.push("n");
    let mut console = script(&lines);

    let outcome = app.search(&mut console).unwrap();

    assert_eq!(outcome, SearchOutcome::Found { total: 3, review: None });
    let out = String::from_utf8(console.into_writer()).unwrap();
    assert!(!out.contains("Save kept jobs to CSV?"));
    assert!(!out.contains("Search Results"));
}

#[test]
fn test_keeping_nothing_offers_no_export() {
    let temp_dir = TempDir::new().unwrap();
    let app = app(FakeScraper::new(|| Ok(three_jobs())), &temp_dir);

    let mut lines = FORM.to_vec();
    lines.extend(["y", "n", "n", "n"]);
    let mut console = script(&lines);

    let outcome = app.search(&mut console).unwrap();

    assert_eq!(
        outcome,
        SearchOutcome::Found {
            total: 3,
            review: Some(ReviewSummary {
                kept: vec![],
                saved_to: None,
            }),
        }
    );
    let out = String::from_utf8(console.into_writer()).unwrap();
    assert!(out.contains("You kept 0 out of 3 jobs."));
    assert!(!out.contains("Save kept jobs to CSV?"));
}

#[test]
fn test_invalid_numbers_are_reprompted() {
    let temp_dir = TempDir::new().unwrap();
    let app = app(FakeScraper::new(|| Ok(ResultSet::empty())), &temp_dir);

    let mut console = script(&["", "", "", "a hundred", "-1", "10", "0", "12", ""]);
    app.search(&mut console).unwrap();

    let calls = app.scraper().calls();
    assert_eq!(calls[0].results_wanted, 10);
    assert_eq!(calls[0].hours_old, 12);

    let out = String::from_utf8(console.into_writer()).unwrap();
    assert!(out.contains("Invalid input 'a hundred' for number of results"));
    assert!(out.contains("Invalid input '0' for hours old"));
}

#[test]
fn test_menu_rejects_unknown_choice() {
    let temp_dir = TempDir::new().unwrap();
    let app = app(FakeScraper::new(|| Ok(three_jobs())), &temp_dir);

    let mut console = script(&["3", "", "2"]);
    app.run(&mut console).unwrap();

    assert!(app.scraper().calls().is_empty());
    let out = String::from_utf8(console.into_writer()).unwrap();
    assert!(out.starts_with("\n===== Welcome to JobRaptor =====\n"));
    assert!(out.contains("Your AI-powered job search assistant!"));
    assert_eq!(out.matches("Invalid choice. Please try again.").count(), 2);
    assert_eq!(out.matches("Enter your choice (1-2): ").count(), 3);
}

#[test]
fn test_closed_input_ends_run_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let app = app(FakeScraper::new(|| Ok(three_jobs())), &temp_dir);

    let mut console = Console::new(Cursor::new(String::new()), Vec::new());
    let result = app.run(&mut console);

    assert!(matches!(result, Err(RaptorError::InputClosed)));
}
