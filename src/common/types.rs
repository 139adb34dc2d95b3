/// A generic boxed error type.
pub type AnyError = Box<dyn std::error::Error + Send + Sync>;

/// A convenient Result alias returning `AnyError`.
pub type AnyResult<T> = std::result::Result<T, AnyError>;

/// Opaque catalog video identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct VideoId(pub String);

impl From<String> for VideoId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for VideoId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::ops::Deref for VideoId {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Playback quality tiers, ordered lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QualityTier {
    Q144,
    Q240,
    Q360,
    Q480,
    Q720,
    Q1080,
    Q1440,
    Q2160,
}

impl QualityTier {
    pub const ALL: [QualityTier; 8] = [
        Self::Q144,
        Self::Q240,
        Self::Q360,
        Self::Q480,
        Self::Q720,
        Self::Q1080,
        Self::Q1440,
        Self::Q2160,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Q144 => "144",
            Self::Q240 => "240",
            Self::Q360 => "360",
            Self::Q480 => "480",
            Self::Q720 => "720",
            Self::Q1080 => "1080",
            Self::Q1440 => "1440",
            Self::Q2160 => "2160",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|q| q.as_str() == s)
    }

    /// Parses a requested tier, falling back to `default` when the value is
    /// unknown or not in the configured tier list.
    pub fn from_param(s: &str, allowed: &[String], default: QualityTier) -> Self {
        match Self::parse(s) {
            Some(q) if allowed.iter().any(|a| a == q.as_str()) => q,
            _ => default,
        }
    }

    /// The next higher tier, clamped at the top.
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|q| q == self).unwrap_or(0);
        Self::ALL[(idx + 1).min(Self::ALL.len() - 1)]
    }

    /// The next lower tier, clamped at the bottom.
    pub fn previous(&self) -> Self {
        let idx = Self::ALL.iter().position(|q| q == self).unwrap_or(0);
        Self::ALL[idx.saturating_sub(1)]
    }
}

impl std::fmt::Display for QualityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
