//! Ad formats requested by the mediation host.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::AdapterError;

/// Every ad format the mediation host can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdFormat {
    Interstitial,
    Rewarded,
    Banner,
}

impl fmt::Display for AdFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AdFormat::Interstitial => "interstitial",
            AdFormat::Rewarded => "rewarded",
            AdFormat::Banner => "banner",
        };
        write!(f, "{}", s)
    }
}

/// The subset of formats a placement session can serve.
///
/// Sessions only ever hold this type, so banner requests are rejected once,
/// when the session is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FullscreenFormat {
    Interstitial,
    Rewarded,
}

impl TryFrom<AdFormat> for FullscreenFormat {
    type Error = AdapterError;

    fn try_from(format: AdFormat) -> Result<Self, Self::Error> {
        match format {
            AdFormat::Interstitial => Ok(FullscreenFormat::Interstitial),
            AdFormat::Rewarded => Ok(FullscreenFormat::Rewarded),
            AdFormat::Banner => Err(AdapterError::UnsupportedFormat(format)),
        }
    }
}

impl From<FullscreenFormat> for AdFormat {
    fn from(format: FullscreenFormat) -> Self {
        match format {
            FullscreenFormat::Interstitial => AdFormat::Interstitial,
            FullscreenFormat::Rewarded => AdFormat::Rewarded,
        }
    }
}

impl fmt::Display for FullscreenFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        AdFormat::from(*self).fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fullscreen_formats_convert() {
        assert_eq!(
            FullscreenFormat::try_from(AdFormat::Interstitial),
            Ok(FullscreenFormat::Interstitial)
        );
        assert_eq!(
            FullscreenFormat::try_from(AdFormat::Rewarded),
            Ok(FullscreenFormat::Rewarded)
        );
    }

    #[test]
    fn banner_is_rejected() {
        assert_eq!(
            FullscreenFormat::try_from(AdFormat::Banner),
            Err(AdapterError::UnsupportedFormat(AdFormat::Banner))
        );
    }

    #[test]
    fn formats_deserialize_from_snake_case() {
        let format: AdFormat = serde_json::from_str("\"rewarded\"").unwrap();
        assert_eq!(format, AdFormat::Rewarded);
    }
}
