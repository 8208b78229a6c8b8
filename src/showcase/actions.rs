use std::fmt;

pub const LINKNODE_URL: &str = "https://linknode.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeDuration {
    Short,
    Long,
}

/// Effet à appliquer par l'hôte en réponse à une action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Message éphémère (type "snackbar")
    Notice {
        message: String,
        duration: NoticeDuration,
    },
    /// Ouvre une URL dans le navigateur externe
    OpenUrl(String),
}

/// Boutons et cartes cliquables de l'écran vitrine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShowcaseAction {
    GetStarted,
    LearnMore,
    SmartConnectivity,
    SecurePlatform,
    RealtimeAnalytics,
}

impl ShowcaseAction {
    pub const ALL: [ShowcaseAction; 5] = [
        ShowcaseAction::GetStarted,
        ShowcaseAction::LearnMore,
        ShowcaseAction::SmartConnectivity,
        ShowcaseAction::SecurePlatform,
        ShowcaseAction::RealtimeAnalytics,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ShowcaseAction::GetStarted => "Get Started",
            ShowcaseAction::LearnMore => "Learn More",
            ShowcaseAction::SmartConnectivity => "Smart Connectivity",
            ShowcaseAction::SecurePlatform => "Secure Platform",
            ShowcaseAction::RealtimeAnalytics => "Real-time Analytics",
        }
    }

    pub fn effect(&self) -> UiEffect {
        match self {
            ShowcaseAction::LearnMore => UiEffect::OpenUrl(LINKNODE_URL.to_string()),
            other => UiEffect::Notice {
                message: format!("{} - Coming Soon!", other.label()),
                duration: NoticeDuration::Short,
            },
        }
    }
}

impl fmt::Display for ShowcaseAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
