//! Top-level menu as an explicit state machine.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Menu,
    Searching,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Search,
    Exit,
    Invalid,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => MenuChoice::Search,
            "2" => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Chose(MenuChoice),
    SearchFinished,
}

/// Events that make no sense in the current state leave it unchanged.
pub fn transition(state: AppState, event: Event) -> AppState {
    match (state, event) {
        (AppState::Menu, Event::Chose(MenuChoice::Search)) => AppState::Searching,
        (AppState::Menu, Event::Chose(MenuChoice::Exit)) => AppState::Exit,
        (AppState::Menu, Event::Chose(MenuChoice::Invalid)) => AppState::Menu,
        (AppState::Searching, Event::SearchFinished) => AppState::Menu,
        (state, _) => state,
    }
}
