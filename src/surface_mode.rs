use url::Url;

use crate::app_types::WindowKind;

/// Presentation branch of the shared render bundle, carried in the `mode`
/// query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SurfaceMode {
    Main,
    Tray,
    Session,
}

pub(crate) const MODE_QUERY_KEY: &str = "mode";

impl SurfaceMode {
    pub(crate) fn for_window(kind: WindowKind) -> Self {
        match kind {
            WindowKind::Main => Self::Main,
            WindowKind::TrayPopup => Self::Tray,
            WindowKind::Session => Self::Session,
        }
    }

    /// Tag written into packaged URLs. The main surface is the default and
    /// carries no tag.
    pub(crate) fn query_tag(self) -> Option<&'static str> {
        match self {
            Self::Main => None,
            Self::Tray => Some("tray"),
            Self::Session => Some("cloudpc"),
        }
    }

    pub(crate) fn from_query_value(raw: Option<&str>) -> Option<Self> {
        let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
            return Some(Self::Main);
        };

        match raw.to_ascii_lowercase().as_str() {
            "main" => Some(Self::Main),
            "tray" => Some(Self::Tray),
            "cloudpc" | "session" => Some(Self::Session),
            _ => None,
        }
    }

    pub(crate) fn from_url(url: &Url) -> Option<Self> {
        let value = url
            .query_pairs()
            .find(|(key, _)| key == MODE_QUERY_KEY)
            .map(|(_, value)| value.into_owned());
        Self::from_query_value(value.as_deref())
    }
}
