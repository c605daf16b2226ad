use crate::generate::Mode;

/// Zero-argument control triggers plus direct colour/mode picks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Clear,
    ToggleTrail,
    CycleMode,
    ToggleMirror,
    Randomize,
    SelectColor(usize),
    SelectMode(Mode),
}

/// Which pieces of UI need refreshing after an [`Action`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiRefresh {
    pub mode_label: bool,
    pub palette: bool,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<Action> {
    match key {
        "c" | "C" => Some(Action::Clear),
        "t" | "T" => Some(Action::ToggleTrail),
        "m" | "M" => Some(Action::CycleMode),
        "s" | "S" => Some(Action::ToggleMirror),
        "r" | "R" => Some(Action::Randomize),
        "1" | "2" | "3" | "4" | "5" => {
            let digit = key.parse::<usize>().ok()?;
            Mode::from_index(digit - 1).map(Action::SelectMode)
        }
        _ => None,
    }
}
