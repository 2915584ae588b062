use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    #[default]
    Bullish,
    Bearish,
}

/// Display tokens for one mood. Tailwind classes plus copy.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodTheme {
    pub text_class: &'static str,
    pub summary_bg: &'static str,
    pub button_class: &'static str,
    pub accent_class: &'static str,
    pub toggle_track: &'static str,
    pub toggle_knob: &'static str,
    pub tagline: &'static str,
    pub blessing_word: &'static str,
}

const BULLISH: MoodTheme = MoodTheme {
    text_class: "text-emerald-700",
    summary_bg: "bg-emerald-100/10",
    button_class: "bg-emerald-600 hover:bg-emerald-700 focus-visible:outline-emerald-700",
    accent_class: "text-emerald-300",
    toggle_track: "bg-emerald-600",
    toggle_knob: "translate-x-1",
    tagline: "Manifesting the Mother of All Squeezes 📈",
    blessing_word: "copium",
};

const BEARISH: MoodTheme = MoodTheme {
    text_class: "text-red-700",
    summary_bg: "bg-red-100/10",
    button_class: "bg-red-600 hover:bg-red-700 focus-visible:outline-red-700",
    accent_class: "text-red-400",
    toggle_track: "bg-red-600",
    toggle_knob: "translate-x-5",
    tagline: "Summoning the Ultimate Rug Pull 📉",
    blessing_word: "FUD",
};

impl Mood {
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "bear" | "bearish" => Mood::Bearish,
            _ => Mood::Bullish,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Mood::Bullish => "bull",
            Mood::Bearish => "bear",
        }
    }

    pub fn is_bearish(&self) -> bool {
        matches!(self, Mood::Bearish)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Mood::Bullish => Mood::Bearish,
            Mood::Bearish => Mood::Bullish,
        }
    }

    pub fn theme(&self) -> MoodTheme {
        match self {
            Mood::Bullish => BULLISH,
            Mood::Bearish => BEARISH,
        }
    }
}
