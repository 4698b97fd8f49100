use std::fmt;

/// Stage of the form's edit / submit / result lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
    ShowingResult,
}

impl Phase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

impl fmt::Display for Phase {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let name = match self {
            Self::Editing => "editing",
            Self::Submitting => "submitting",
            Self::ShowingResult => "showing-result",
        };
        f.write_str(name)
    }
}
