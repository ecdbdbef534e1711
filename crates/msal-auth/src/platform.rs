use std::fmt;

/// Mobile platforms with a native MSAL backend.
///
/// Exactly one variant is relevant per process; it is selected by the build
/// target, never by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Android, backed by MSAL for Android.
    Android,
    /// iOS, backed by MSAL for iOS.
    Ios,
}

impl Platform {
    /// The platform of the current build target.
    #[cfg(target_os = "android")]
    pub fn current() -> Self {
        Self::Android
    }

    /// The platform of the current build target.
    #[cfg(target_os = "ios")]
    pub fn current() -> Self {
        Self::Ios
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Android => write!(f, "Android"),
            Platform::Ios => write!(f, "iOS"),
        }
    }
}
