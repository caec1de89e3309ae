//! View Selection
//!
//! The root of the front-end shows exactly one top-level view at a time.
//! [`Navigator`] holds that selection; the only way to change it is an
//! explicit navigation action. There is no history stack and no deep linking.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the mutually exclusive top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Landing page with quick actions, tools, articles and strategies
    #[default]
    Home,
    /// Immediate help and emergency contacts
    Crisis,
    /// Hotline directory and mental health resources
    Resources,
    /// Support groups and online communities
    Community,
    /// The locally editable user profile
    Profile,
}

impl View {
    /// Every view, in header order
    pub const ALL: [View; 5] = [
        View::Home,
        View::Crisis,
        View::Resources,
        View::Community,
        View::Profile,
    ];

    /// Machine name used in URLs and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Crisis => "crisis",
            View::Resources => "resources",
            View::Community => "community",
            View::Profile => "profile",
        }
    }

    /// Human-readable label for buttons and headings
    pub fn label(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Crisis => "Crisis Support",
            View::Resources => "Resources",
            View::Community => "Community",
            View::Profile => "Profile",
        }
    }

    /// Views linked from the header bar.
    ///
    /// Crisis is reached through the quick actions and the emergency banner
    /// rather than the header.
    pub fn header_links() -> &'static [View] {
        &[View::Home, View::Resources, View::Community, View::Profile]
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown view name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown view: {0} (expected one of home, crisis, resources, community, profile)")]
pub struct UnknownView(pub String);

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        View::ALL
            .into_iter()
            .find(|v| v.as_str() == name)
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}

/// Holds the currently displayed view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigator {
    current: View,
}

impl Navigator {
    /// Start at the home view
    pub fn new() -> Self {
        Self::default()
    }

    /// The view being rendered
    pub fn current(&self) -> View {
        self.current
    }

    /// Switch to `target`, returning the view that was left
    pub fn navigate(&mut self, target: View) -> View {
        let previous = std::mem::replace(&mut self.current, target);
        if previous != target {
            tracing::debug!(from = %previous, to = %target, "view changed");
        }
        previous
    }

    /// The "Back to Home" action every sub-view receives
    pub fn back_home(&mut self) -> View {
        self.navigate(View::Home)
    }

    pub fn is_home(&self) -> bool {
        self.current == View::Home
    }
}
