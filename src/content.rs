//! Event details shown on the splash screen and the guest information page.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub couple: Couple,
    pub ceremony: Ceremony,
    pub dress_code: DressCode,
}

impl SiteContent {
    pub fn couple_names(&self) -> String {
        format!(
            "{} & {}",
            self.couple.groom_nickname, self.couple.bride_nickname
        )
    }

    /// Bride first, as the gallery subtitle reads.
    pub fn bride_and_groom(&self) -> String {
        format!(
            "{} & {}",
            self.couple.bride_nickname, self.couple.groom_nickname
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Couple {
    pub groom_nickname: String,
    pub bride_nickname: String,
}

impl Default for Couple {
    fn default() -> Self {
        Self {
            groom_nickname: "Denmark".to_string(),
            bride_nickname: "Rizchelle".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ceremony {
    /// When the ceremony starts.
    pub time: String,
    /// When guests are asked to be seated.
    pub guests_time: String,
}

impl Default for Ceremony {
    fn default() -> Self {
        Self {
            time: "3:00 PM".to_string(),
            guests_time: "2:30 PM".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DressCode {
    pub note: String,
    pub sponsors: Vec<AttireLine>,
    pub guests: String,
    pub palette: String,
}

impl Default for DressCode {
    fn default() -> Self {
        Self {
            note: "Strictly no white, please.".to_string(),
            sponsors: vec![
                AttireLine::new("Ninong", "Barong Tagalog Black Pants"),
                AttireLine::new("Ninang", "Floor Length Gown Silk gray/Silver"),
            ],
            guests: "Formal or Semi Formal".to_string(),
            palette: "We encourage you to dress in shades of pink and beige to match our \
                      wedding color palette."
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttireLine {
    pub role: String,
    pub attire: String,
}

impl AttireLine {
    fn new(role: &str, attire: &str) -> Self {
        Self {
            role: role.to_string(),
            attire: attire.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let content: SiteContent = toml::from_str(
            r#"
            [couple]
            bride_nickname = "Ria"

            [ceremony]
            time = "4:00 PM"
        "#,
        )
        .expect("Failed to parse content");

        assert_eq!(content.couple_names(), "Denmark & Ria");
        assert_eq!(content.ceremony.time, "4:00 PM");
        assert_eq!(content.ceremony.guests_time, "2:30 PM");
        assert_eq!(content.dress_code.sponsors.len(), 2);
    }

    #[test]
    fn test_sponsor_lines_replace_defaults() {
        let content: SiteContent = toml::from_str(
            r#"
            [[dress_code.sponsors]]
            role = "Sponsors"
            attire = "Black tie"
        "#,
        )
        .expect("Failed to parse content");

        assert_eq!(
            content.dress_code.sponsors,
            vec![AttireLine::new("Sponsors", "Black tie")]
        );
        assert_eq!(content.dress_code.guests, "Formal or Semi Formal");
    }
}
