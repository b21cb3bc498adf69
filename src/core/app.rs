use crate::core::console::Console;
use crate::core::menu::{transition, AppState, Event, MenuChoice};
use crate::core::search::{run_search, SearchOutcome};
use crate::domain::ports::{JobScraper, Storage};
use crate::utils::error::Result;
use chrono::NaiveDate;
use std::io::{BufRead, Write};

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub struct JobRaptor<S: JobScraper, St: Storage> {
    scraper: S,
    storage: St,
    clock: fn() -> NaiveDate,
}

impl<S: JobScraper, St: Storage> JobRaptor<S, St> {
    pub fn new(scraper: S, storage: St) -> Self {
        Self {
            scraper,
            storage,
            clock: local_today,
        }
    }

    /// Replaces the date source used for default export filenames.
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    pub fn scraper(&self) -> &S {
        &self.scraper
    }

    pub fn search<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<SearchOutcome> {
        run_search(console, &self.scraper, &self.storage, (self.clock)())
    }

    /// Runs the menu loop until the user picks "Exit".
    pub fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        console.print_header("Welcome to JobRaptor")?;
        console.println("Your AI-powered job search assistant!")?;

        let mut state = AppState::Menu;
        loop {
            let event = match state {
                AppState::Menu => {
                    console.print_header("JobRaptor Menu")?;
                    console.println("1. Search for jobs")?;
                    console.println("2. Exit")?;

                    let choice = MenuChoice::parse(&console.read_line("\nEnter your choice (1-2): ")?);
                    if choice == MenuChoice::Invalid {
                        console.println("Invalid choice. Please try again.")?;
                    }
                    Event::Chose(choice)
                }
                AppState::Searching => {
                    match self.search(console)? {
                        SearchOutcome::Found { total, review } => tracing::debug!(
                            "Search finished with {} jobs, {} kept",
                            total,
                            review.map(|r| r.kept.len()).unwrap_or(0)
                        ),
                        outcome => tracing::debug!("Search finished: {:?}", outcome),
                    }
                    Event::SearchFinished
                }
                AppState::Exit => {
                    console.print_header("Thank you for using JobRaptor!")?;
                    return Ok(());
                }
            };

            state = transition(state, event);
        }
    }
}
