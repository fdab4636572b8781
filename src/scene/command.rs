//! Discrete operations a host can ask of the experience.
//!
//! Buttons, keys and scripted drivers all reduce to an
//! [`ExperienceCommand`] passed to
//! [`Experience::execute`](super::Experience::execute).

/// One user-facing operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExperienceCommand {
    /// Answer the prompt's current step. The second answer shatters.
    AdvancePrompt,
    /// Shatter immediately, skipping the prompt.
    ConfirmShatter,
    /// Leave the terminal view and start over.
    ResetToNoise,
}

impl ExperienceCommand {
    /// Parse a command name as typed into the headless driver.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "advance" | "advance_prompt" => Some(Self::AdvancePrompt),
            "shatter" | "confirm_shatter" => Some(Self::ConfirmShatter),
            "reset" | "reset_to_noise" => Some(Self::ResetToNoise),
            _ => None,
        }
    }
}
