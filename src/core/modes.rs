// src/core/modes.rs
use std::fmt;

/// The four word categories a name can draw from.
///
/// The lowercase names returned by [`Category::as_str`] are part of the
/// hashing scheme (they appear inside every position key) and must never
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Descriptive words (Smart, Dynamic, Scalable, ...)
    Adjectives,
    /// Trendy tech terms (Cloud, AI-Assisted, Serverless, ...)
    Buzzwords,
    /// Central concept words (Workflow, Data, Integration, ...)
    Core,
    /// Ending words (Hub, Engine, Platform, ...)
    Suffix,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Adjectives => "adjectives",
            Category::Buzzwords => "buzzwords",
            Category::Core => "core",
            Category::Suffix => "suffix",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A name style, controlling which categories compose a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Concise, no-frills names
    Minimal,
    /// Balanced startup-style names
    Startup,
    /// Corporate-sounding names with buzzwords
    Enterprise,
    /// Over-the-top buzzword-heavy names
    Bullshit,
}

impl Mode {
    /// Parses a mode identifier. Unknown identifiers fall back to
    /// `Minimal` rather than failing.
    pub fn parse(s: &str) -> Self {
        match s {
            "startup" => Mode::Startup,
            "enterprise" => Mode::Enterprise,
            "bullshit" => Mode::Bullshit,
            _ => Mode::Minimal,
        }
    }

    /// The ordered category pattern for this mode. Each entry selects the
    /// word pool used at that position in the generated name.
    ///
    /// Example patterns:
    ///
    ///   Minimal:    [adjectives, core]                            → "Scalable Core"
    ///   Startup:    [adjectives, core, suffix]                    → "Dynamic Workflow Hub"
    ///   Enterprise: [adjectives, buzzwords, core, suffix]         → "Unified Cloud Integration Platform"
    ///   Bullshit:   [adjectives, buzzwords, buzzwords, core, suffix]
    pub fn pattern(self) -> &'static [Category] {
        use Category::*;
        match self {
            // Two words: simple and clean
            Mode::Minimal => &[Adjectives, Core],
            // Three words: the standard startup name formula
            Mode::Startup => &[Adjectives, Core, Suffix],
            // Four words: adds a buzzword for that corporate feel
            Mode::Enterprise => &[Adjectives, Buzzwords, Core, Suffix],
            // Five words: double buzzwords for maximum buzzword density
            Mode::Bullshit => &[Adjectives, Buzzwords, Buzzwords, Core, Suffix],
        }
    }
}
