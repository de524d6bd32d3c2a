use serde::{Deserialize, Serialize};

/// In-page sections reachable from the navbar, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    Services,
    About,
    Contact,
}

impl SectionId {
    /// Menu order
    pub const ALL: [SectionId; 4] = [
        SectionId::Home,
        SectionId::Services,
        SectionId::About,
        SectionId::Contact,
    ];

    /// DOM element id of the section
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Services => "services",
            SectionId::About => "about",
            SectionId::Contact => "contact",
        }
    }

    /// Menu label: the id with its first letter capitalized
    pub fn label(&self) -> String {
        capitalize(self.as_str())
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SectionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(SectionId::Home),
            "services" => Ok(SectionId::Services),
            "about" => Ok(SectionId::About),
            "contact" => Ok(SectionId::Contact),
            _ => Err(format!("Unknown section: {}", s)),
        }
    }
}

/// Uppercase the first character, leave the rest untouched
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_order() {
        let ids: Vec<&str> = SectionId::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(ids, vec!["home", "services", "about", "contact"]);
    }

    #[test]
    fn test_labels_are_capitalized() {
        let labels: Vec<String> = SectionId::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Home", "Services", "About", "Contact"]);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("about".parse::<SectionId>(), Ok(SectionId::About));
        assert!("About".parse::<SectionId>().is_err());
        assert!("blog".parse::<SectionId>().is_err());
    }

    #[test]
    fn test_capitalize_edge_cases() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize("élan"), "Élan");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&SectionId::Services).unwrap();
        assert_eq!(json, "\"services\"");
        let parsed: SectionId = serde_json::from_str("\"contact\"").unwrap();
        assert_eq!(parsed, SectionId::Contact);
    }
}
