use serde::{Deserialize, Serialize};

/// The four dashboard tabs, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tab {
    Gallery,
    Destinations,
    Insights,
    Responsible,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Gallery, Tab::Destinations, Tab::Insights, Tab::Responsible];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Gallery => "Art Forms Gallery",
            Tab::Destinations => "Cultural Destinations",
            Tab::Insights => "Tourism Insights",
            Tab::Responsible => "Responsible Tourism",
        }
    }
}

/// Settings toggled from the menu bar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSettings {
    pub dark_mode: bool,
    /// Last status bar message
    #[serde(skip)]
    pub status: Option<String>,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            status: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_order_and_titles() {
        let titles: Vec<_> = Tab::ALL.iter().map(Tab::title).collect();
        assert_eq!(
            titles,
            vec!["Art Forms Gallery", "Cultural Destinations", "Tourism Insights", "Responsible Tourism"]
        );
    }

    #[test]
    fn test_settings_round_trip_skips_status() {
        let settings = DashboardSettings {
            dark_mode: true,
            status: Some("Loaded".into()),
        };
        let json = serde_json::to_string(&settings).unwrap();
        let restored: DashboardSettings = serde_json::from_str(&json).unwrap();
        assert!(restored.dark_mode);
        assert!(restored.status.is_none());
    }
}
