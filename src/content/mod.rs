//! Static Content
//!
//! Every card the front-end renders comes from a compile-time table in this
//! module. Nothing here is fetched, persisted or computed:
//!
//! - **home**: quick actions, tools, articles, coping strategies
//! - **crisis**: emergency contacts and the hotline directory
//! - **resources**: directories and self-care links
//! - **community**: support groups, online communities, local resources
//! - **profile**: quick access links
//!
//! [`Catalog`] gathers the tables per view so the host can serve them as JSON
//! and the audit tool can walk every outbound link.

pub mod community;
pub mod crisis;
pub mod home;
pub mod profile;
pub mod resources;
pub mod types;

pub use types::{
    Accent, Article, ContactMethod, CopingStrategy, EmergencyContact, Hotline, Icon, LinkRef,
    LocalResource, OnlineCommunity, QuickAction, SelfCareLink, SupportGroup, ToolLink,
};

use serde::Serialize;

use crate::navigation::View;

/// Tables rendered by the home view
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HomeContent {
    pub quick_actions: &'static [QuickAction],
    pub tools: &'static [ToolLink],
    pub articles: &'static [Article],
    pub strategies: &'static [CopingStrategy],
    pub emergency: &'static [EmergencyContact],
}

/// Tables rendered by the crisis view
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CrisisContent {
    pub emergency: &'static [EmergencyContact],
    pub hotlines: &'static [Hotline],
    pub grounding: &'static [CopingStrategy],
}

/// Tables rendered by the resources view
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResourcesContent {
    pub hotlines: &'static [Hotline],
    pub directories: &'static [ToolLink],
    pub self_care: &'static [SelfCareLink],
}

/// Tables rendered by the community view
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CommunityContent {
    pub support_groups: &'static [SupportGroup],
    pub online_communities: &'static [OnlineCommunity],
    pub local_resources: &'static [LocalResource],
}

/// Tables rendered by the profile view
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProfileContent {
    pub quick_access: &'static [ToolLink],
}

/// Content of a single view
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum ViewContent {
    Home(HomeContent),
    Crisis(CrisisContent),
    Resources(ResourcesContent),
    Community(CommunityContent),
    Profile(ProfileContent),
}

/// Every content table, grouped by view
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Catalog {
    pub home: HomeContent,
    pub crisis: CrisisContent,
    pub resources: ResourcesContent,
    pub community: CommunityContent,
    pub profile: ProfileContent,
}

impl Catalog {
    /// The catalog compiled into this build
    pub fn get() -> Self {
        Self {
            home: HomeContent {
                quick_actions: home::QUICK_ACTIONS,
                tools: home::TOOLS,
                articles: home::ARTICLES,
                strategies: home::STRATEGIES,
                emergency: crisis::EMERGENCY_CONTACTS,
            },
            crisis: CrisisContent {
                emergency: crisis::EMERGENCY_CONTACTS,
                hotlines: crisis::HOTLINES,
                grounding: crisis::grounding(),
            },
            resources: ResourcesContent {
                hotlines: resources::HOTLINES,
                directories: resources::DIRECTORIES,
                self_care: resources::SELF_CARE,
            },
            community: CommunityContent {
                support_groups: community::SUPPORT_GROUPS,
                online_communities: community::ONLINE_COMMUNITIES,
                local_resources: community::LOCAL_RESOURCES,
            },
            profile: ProfileContent {
                quick_access: profile::QUICK_ACCESS,
            },
        }
    }

    /// Tables for one view
    pub fn view(&self, view: View) -> ViewContent {
        match view {
            View::Home => ViewContent::Home(self.home),
            View::Crisis => ViewContent::Crisis(self.crisis),
            View::Resources => ViewContent::Resources(self.resources),
            View::Community => ViewContent::Community(self.community),
            View::Profile => ViewContent::Profile(self.profile),
        }
    }

    /// Every outbound web link, in render order.
    ///
    /// A URL rendered in two places appears twice, once per location.
    pub fn links(&self) -> Vec<LinkRef> {
        let mut links = Vec::new();

        let mut push = |view, section, title, url| {
            links.push(LinkRef {
                view,
                section,
                title,
                url,
            })
        };

        for t in self.home.tools {
            push(View::Home, "Mental Health Tools", t.title, t.link);
        }
        for a in self.home.articles {
            push(View::Home, "Educational Articles", a.title, a.link);
        }
        for h in self.crisis.hotlines {
            push(View::Crisis, "Hotlines", h.name, h.link);
        }
        for h in self.resources.hotlines {
            push(View::Resources, "Emergency Resources", h.name, h.link);
        }
        for d in self.resources.directories {
            push(View::Resources, "Mental Health Resources", d.title, d.link);
        }
        for s in self.resources.self_care {
            push(View::Resources, "Self-Care & Wellness", s.title, s.link);
        }
        for g in self.community.support_groups {
            push(View::Community, "Support Groups", g.name, g.link);
        }
        for c in self.community.online_communities {
            push(View::Community, "Online Communities", c.name, c.link);
        }
        for r in self.community.local_resources {
            push(View::Community, "Local Resources", r.title, r.link);
        }
        for q in self.profile.quick_access {
            push(View::Profile, "Quick Access Resources", q.title, q.link);
        }

        links
    }

    /// Number of entries rendered by one view
    pub fn entry_count(&self, view: View) -> usize {
        match view {
            View::Home => {
                self.home.quick_actions.len()
                    + self.home.tools.len()
                    + self.home.articles.len()
                    + self.home.strategies.len()
                    + self.home.emergency.len()
            }
            View::Crisis => {
                self.crisis.emergency.len() + self.crisis.hotlines.len() + self.crisis.grounding.len()
            }
            View::Resources => {
                self.resources.hotlines.len()
                    + self.resources.directories.len()
                    + self.resources.self_care.len()
            }
            View::Community => {
                self.community.support_groups.len()
                    + self.community.online_communities.len()
                    + self.community.local_resources.len()
            }
            View::Profile => self.profile.quick_access.len(),
        }
    }

    /// Number of content tables one view renders as sections
    pub fn section_count(&self, view: View) -> usize {
        let lens: Vec<usize> = match view {
            View::Home => vec![
                self.home.quick_actions.len(),
                self.home.tools.len(),
                self.home.articles.len(),
                self.home.strategies.len(),
                self.home.emergency.len(),
            ],
            View::Crisis => vec![
                self.crisis.emergency.len(),
                self.crisis.hotlines.len(),
                self.crisis.grounding.len(),
            ],
            View::Resources => vec![
                self.resources.hotlines.len(),
                self.resources.directories.len(),
                self.resources.self_care.len(),
            ],
            View::Community => vec![
                self.community.support_groups.len(),
                self.community.online_communities.len(),
                self.community.local_resources.len(),
            ],
            View::Profile => vec![self.profile.quick_access.len()],
        };
        lens.iter().filter(|&&n| n > 0).count()
    }

    /// Number of entries across every view
    pub fn total_entries(&self) -> usize {
        View::ALL.iter().map(|v| self.entry_count(*v)).sum()
    }
}
