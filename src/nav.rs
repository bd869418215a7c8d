use crate::album::Album;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Detail,
}

impl Screen {
    pub fn label(&self) -> &str {
        match self {
            Screen::Home => "Home",
            Screen::Detail => "Album",
        }
    }
}

/// Which screen is shown and which album the detail screen is about.
///
/// `selected` is only ever `Some` while `screen == Screen::Detail`.
#[derive(Debug, Default)]
pub struct Navigator {
    screen: Screen,
    selected: Option<Album>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn selected(&self) -> Option<&Album> {
        match self.screen {
            Screen::Detail => self.selected.as_ref(),
            Screen::Home => None,
        }
    }

    /// Opens the detail screen for `album`. Returns false (and changes nothing)
    /// when the detail screen is already showing.
    pub fn select_album(&mut self, album: Album) -> bool {
        if self.screen != Screen::Home {
            return false;
        }
        self.selected = Some(album);
        self.screen = Screen::Detail;
        true
    }

    /// Returns to the home screen. No-op on the home screen.
    pub fn back(&mut self) -> bool {
        if self.screen != Screen::Detail {
            return false;
        }
        self.selected = None;
        self.screen = Screen::Home;
        true
    }
}
