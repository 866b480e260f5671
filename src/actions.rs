#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handler {
    Run,
    Save,
    Close,
}

/// Every command the window places in a menu or toolbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    New,
    Open,
    Save,
    Exit,
    Copy,
    Paste,
    Cut,
    HelpContent,
    About,
    Run,
    CreateMass,
    PotentialInverseR,
    PotentialInverseRSquared,
    PotentialInverseX,
    PotentialInverseY,
}

impl Action {
    #[cfg(test)]
    pub const ALL: [Action; 15] = [
        Action::New,
        Action::Open,
        Action::Save,
        Action::Exit,
        Action::Copy,
        Action::Paste,
        Action::Cut,
        Action::HelpContent,
        Action::About,
        Action::Run,
        Action::CreateMass,
        Action::PotentialInverseR,
        Action::PotentialInverseRSquared,
        Action::PotentialInverseX,
        Action::PotentialInverseY,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Action::New => "New",
            Action::Open => "Open...",
            Action::Save => "Save",
            Action::Exit => "Exit",
            Action::Copy => "Copy",
            Action::Paste => "Paste",
            Action::Cut => "Cut",
            Action::HelpContent => "Help Content",
            Action::About => "About",
            Action::Run => "Run",
            Action::CreateMass => "Create Mass",
            Action::PotentialInverseR => "1/r potential",
            Action::PotentialInverseRSquared => "1/r^2 potential",
            Action::PotentialInverseX => "1/x potential",
            Action::PotentialInverseY => "1/y potential",
        }
    }

    /// The handler this action is wired to. `None` marks a placeholder.
    pub fn handler(self) -> Option<Handler> {
        match self {
            Action::Run => Some(Handler::Run),
            Action::Save => Some(Handler::Save),
            Action::Exit => Some(Handler::Close),
            _ => None,
        }
    }

    pub fn is_connected(self) -> bool {
        self.handler().is_some()
    }
}

pub struct Menu {
    pub title: &'static str,
    pub actions: &'static [Action],
}

pub const MENU_BAR: [Menu; 3] = [
    Menu {
        title: "File",
        actions: &[Action::New, Action::Open, Action::Save, Action::Exit],
    },
    Menu {
        title: "Edit",
        actions: &[Action::Copy, Action::Paste, Action::Cut],
    },
    Menu {
        title: "Help",
        actions: &[Action::HelpContent, Action::About],
    },
];

pub const RUN_TOOLBAR: [Action; 3] = [Action::Run, Action::Save, Action::CreateMass];

pub const POTENTIAL_TOOLBAR: [Action; 4] = [
    Action::PotentialInverseR,
    Action::PotentialInverseRSquared,
    Action::PotentialInverseX,
    Action::PotentialInverseY,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_action_is_placed_somewhere() {
        for action in Action::ALL {
            let in_menu = MENU_BAR.iter().any(|menu| menu.actions.contains(&action));
            let in_toolbar =
                RUN_TOOLBAR.contains(&action) || POTENTIAL_TOOLBAR.contains(&action);
            assert!(in_menu || in_toolbar, "{action:?} is not reachable");
        }
    }

    #[test]
    fn only_run_save_and_exit_are_connected() {
        let connected: Vec<_> = Action::ALL
            .into_iter()
            .filter(|action| action.is_connected())
            .collect();
        assert_eq!(connected, vec![Action::Save, Action::Exit, Action::Run]);
    }

    #[test]
    fn connected_actions_map_to_their_handlers() {
        assert_eq!(Action::Run.handler(), Some(Handler::Run));
        assert_eq!(Action::Save.handler(), Some(Handler::Save));
        assert_eq!(Action::Exit.handler(), Some(Handler::Close));
        assert_eq!(Action::CreateMass.handler(), None);
        assert_eq!(Action::PotentialInverseR.handler(), None);
    }
}
