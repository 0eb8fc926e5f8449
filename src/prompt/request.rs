use crate::error::{AppError, Result};

pub const MIN_NICHE_CHARS: usize = 3;
pub const MAX_NICHE_CHARS: usize = 100;
pub const MIN_IDEAS: u32 = 1;
pub const MAX_IDEAS: u32 = 10;

/// A validated generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    niche: String,
    num_ideas: u32,
    include_outline: bool,
    tone: String,
    model: String,
}

impl GenerationRequest {
    /// Validate the raw parameters and build a request.
    ///
    /// `niche` is measured in characters, not bytes.
    pub fn new(
        niche: impl Into<String>,
        num_ideas: u32,
        include_outline: bool,
        tone: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self> {
        let niche = niche.into();
        let niche_chars = niche.chars().count();
        if niche_chars < MIN_NICHE_CHARS {
            return Err(AppError::InvalidRequest(format!(
                "niche must be at least {} characters",
                MIN_NICHE_CHARS
            )));
        }
        if niche_chars > MAX_NICHE_CHARS {
            return Err(AppError::InvalidRequest(format!(
                "niche must be at most {} characters",
                MAX_NICHE_CHARS
            )));
        }

        if !(MIN_IDEAS..=MAX_IDEAS).contains(&num_ideas) {
            return Err(AppError::InvalidRequest(format!(
                "num_ideas must be between {} and {}",
                MIN_IDEAS, MAX_IDEAS
            )));
        }

        let model = model.into();
        if model.trim().is_empty() {
            return Err(AppError::InvalidRequest("model cannot be empty".to_string()));
        }

        Ok(Self {
            niche,
            num_ideas,
            include_outline,
            tone: tone.into(),
            model,
        })
    }

    pub fn niche(&self) -> &str {
        &self.niche
    }

    pub fn num_ideas(&self) -> u32 {
        self.num_ideas
    }

    pub fn include_outline(&self) -> bool {
        self.include_outline
    }

    pub fn tone(&self) -> &str {
        &self.tone
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Render the prompt for this request
    pub fn prompt(&self) -> String {
        super::build(&self.niche, self.num_ideas, self.include_outline, &self.tone)
    }
}
