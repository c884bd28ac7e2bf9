use serde::{Deserialize, Serialize};

/// Analysis mode controlling which adversarial phases run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stance {
    /// Devil's advocate — attack phase only.
    Attack,
    /// Steelman — defense phase only.
    Defense,
    /// Full debate — attack then defense.
    Dialectic,
    /// Objective decomposition without adversarial phases.
    Neutral,
}

impl Stance {
    pub const ALL: [Stance; 4] = [Self::Attack, Self::Defense, Self::Dialectic, Self::Neutral];

    /// Whether the attack phase runs under this stance.
    pub fn runs_attack(&self) -> bool {
        matches!(self, Self::Attack | Self::Dialectic)
    }

    /// Whether the defense phase runs under this stance.
    pub fn runs_defense(&self) -> bool {
        matches!(self, Self::Defense | Self::Dialectic)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Attack => "attack",
            Self::Defense => "defense",
            Self::Dialectic => "dialectic",
            Self::Neutral => "neutral",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Attack => "Devil's advocate — ruthlessly challenges claims",
            Self::Defense => "Steelman — builds strongest version of argument",
            Self::Dialectic => "Full debate — attack, defense, and synthesis",
            Self::Neutral => "Objective analysis without taking sides",
        }
    }
}

/// Stylistic parameter passed to the reasoning oracle. Influences tone,
/// never logic or scoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    Academic,
    Politician,
    Engineer,
    Teenager,
    Religious,
    Economist,
    Twitter,
    RedditAtheist,
    Corporate,
}

impl Persona {
    pub const ALL: [Persona; 9] = [
        Self::Academic,
        Self::Politician,
        Self::Engineer,
        Self::Teenager,
        Self::Religious,
        Self::Economist,
        Self::Twitter,
        Self::RedditAtheist,
        Self::Corporate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Academic => "academic",
            Self::Politician => "politician",
            Self::Engineer => "engineer",
            Self::Teenager => "teenager",
            Self::Religious => "religious",
            Self::Economist => "economist",
            Self::Twitter => "twitter",
            Self::RedditAtheist => "reddit_atheist",
            Self::Corporate => "corporate",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Academic => "Rigorous, evidence-based, formal citations",
            Self::Politician => "Persuasive, appeals to values and constituency",
            Self::Engineer => "Systems-thinking, first-principles, technical",
            Self::Teenager => "Informal, emotional, relatable examples",
            Self::Religious => "Appeals to scripture, tradition, moral framework",
            Self::Economist => "Cost-benefit analysis, incentives, data-driven",
            Self::Twitter => "Punchy, provocative, meme-aware",
            Self::RedditAtheist => "Skeptical, logical, anti-authority",
            Self::Corporate => "ROI-focused, stakeholder-aware, diplomatic",
        }
    }
}
