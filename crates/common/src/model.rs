use crate::error::ParseError;
use crate::theme::Theme;
use std::fmt;
use std::str::FromStr;

pub const MOVE_LIST_LENGTH: usize = 10;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ActiveTab {
    #[default]
    Board,
    Analysis,
}

impl ActiveTab {
    pub const ALL: [ActiveTab; 2] = [ActiveTab::Board, ActiveTab::Analysis];

    pub fn name(self) -> &'static str {
        match self {
            ActiveTab::Board => "board",
            ActiveTab::Analysis => "analysis",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActiveTab::Board => "Moves",
            ActiveTab::Analysis => "Analysis",
        }
    }
}

impl fmt::Display for ActiveTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActiveTab {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActiveTab::ALL
            .into_iter()
            .find(|tab| tab.name() == s)
            .ok_or_else(|| ParseError::Tab(s.to_string()))
    }
}

/// Placeholder row of the move list. Not backed by any game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveListEntry {
    pub number: usize,
    pub white: &'static str,
    pub black: &'static str,
}

pub fn move_list() -> Vec<MoveListEntry> {
    (1..=MOVE_LIST_LENGTH)
        .map(|number| MoveListEntry {
            number,
            white: "e4",
            black: "e5",
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlButton {
    Previous,
    Pause,
    Play,
    Next,
    Reset,
}

impl ControlButton {
    pub const ALL: [ControlButton; 5] = [
        ControlButton::Previous,
        ControlButton::Pause,
        ControlButton::Play,
        ControlButton::Next,
        ControlButton::Reset,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ControlButton::Previous => "Previous",
            ControlButton::Pause => "Pause",
            ControlButton::Play => "Play",
            ControlButton::Next => "Next",
            ControlButton::Reset => "Reset",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ControlButton::Previous => "\u{2039}",
            ControlButton::Pause => "\u{23F8}",
            ControlButton::Play => "\u{25B6}",
            ControlButton::Next => "\u{203A}",
            ControlButton::Reset => "\u{21BA}",
        }
    }
}

impl fmt::Display for ControlButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellEvent {
    SelectTheme(Theme),
    SelectTab(ActiveTab),
    /// Playback controls are not wired to anything yet.
    Control(ControlButton),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShellState {
    pub theme: Theme,
    pub tab: ActiveTab,
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the state changed.
    pub fn apply(&mut self, event: ShellEvent) -> bool {
        let previous = *self;
        match event {
            ShellEvent::SelectTheme(theme) => self.theme = theme,
            ShellEvent::SelectTab(tab) => self.tab = tab,
            ShellEvent::Control(_) => {}
        }
        previous != *self
    }

    pub fn shows_move_list(&self) -> bool {
        self.tab == ActiveTab::Board
    }

    pub fn shows_analysis(&self) -> bool {
        self.tab == ActiveTab::Analysis
    }
}

/// Open/closed state of the settings menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeMenu {
    open: bool,
}

impl ThemeMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        ThemeMenu { open: !self.open }
    }

    /// Picking an item closes the menu.
    pub fn choose(self, theme: Theme) -> (Self, ShellEvent) {
        (ThemeMenu { open: false }, ShellEvent::SelectTheme(theme))
    }
}
