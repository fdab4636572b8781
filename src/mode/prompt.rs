/// Step of the two-step confirmation prompt shown inside the tunnel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptStep {
    /// Single call-to-action button.
    #[default]
    Ask,
    /// The question with its answer buttons.
    Question,
}

/// Two-step prompt: the first answer reveals the question, the second
/// triggers the shatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Prompt {
    step: PromptStep,
}

impl Prompt {
    /// Prompt at its first step.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current step.
    #[must_use]
    pub fn step(&self) -> PromptStep {
        self.step
    }

    /// Answer the current step. Returns true when the answer confirms the
    /// shatter; the prompt then stays on the question until reset.
    pub fn advance(&mut self) -> bool {
        match self.step {
            PromptStep::Ask => {
                self.step = PromptStep::Question;
                false
            }
            PromptStep::Question => true,
        }
    }

    /// Back to the first step.
    pub fn reset(&mut self) {
        self.step = PromptStep::Ask;
    }
}
