use serde::{Deserialize, Serialize};

/// Trading style tag of a persona
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TradingStyle {
    Conservative,
    Balanced,
    Aggressive,
    /// Any other tag, kept verbatim
    Custom(String),
}

impl TradingStyle {
    pub fn as_str(&self) -> &str {
        match self {
            TradingStyle::Conservative => "conservative",
            TradingStyle::Balanced => "balanced",
            TradingStyle::Aggressive => "aggressive",
            TradingStyle::Custom(tag) => tag,
        }
    }
}

impl From<&str> for TradingStyle {
    fn from(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "conservative" => TradingStyle::Conservative,
            "balanced" => TradingStyle::Balanced,
            "aggressive" => TradingStyle::Aggressive,
            _ => TradingStyle::Custom(tag.to_string()),
        }
    }
}

impl From<String> for TradingStyle {
    fn from(tag: String) -> Self {
        TradingStyle::from(tag.as_str())
    }
}

impl From<TradingStyle> for String {
    fn from(style: TradingStyle) -> Self {
        style.as_str().to_string()
    }
}

impl std::fmt::Display for TradingStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who a trader is: identity plus descriptive persona attributes
///
/// Risk tolerance is recorded but does not drive decisions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraderProfile {
    pub name: String,
    pub style: TradingStyle,
    pub risk_tolerance: f64,
    pub occupation: String,
    pub description: String,
    pub interests: Vec<String>,
    pub traits: Vec<String>,
}

impl TraderProfile {
    pub fn new(name: impl Into<String>, style: impl Into<TradingStyle>, risk_tolerance: f64) -> Self {
        let style = style.into();
        Self {
            name: name.into(),
            occupation: "Stock Trader".to_string(),
            description: format!(
                "Focuses on {} strategies with risk tolerance {}",
                style, risk_tolerance
            ),
            interests: vec![
                "stock market".to_string(),
                "economics".to_string(),
                "financial news".to_string(),
            ],
            traits: vec![
                format!(
                    "Enjoys {} trading style with risk tolerance {}",
                    style, risk_tolerance
                ),
                "Attentive to global economic indicators and financial press".to_string(),
            ],
            style,
            risk_tolerance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_parsing() {
        assert_eq!(TradingStyle::from("Conservative"), TradingStyle::Conservative);
        assert_eq!(TradingStyle::from(" aggressive "), TradingStyle::Aggressive);
        assert_eq!(
            TradingStyle::from("contrarian"),
            TradingStyle::Custom("contrarian".to_string())
        );
    }

    #[test]
    fn test_style_converts_to_tag() {
        assert_eq!(String::from(TradingStyle::Balanced), "balanced");
        assert_eq!(
            TradingStyle::from(String::from(TradingStyle::Custom("Contrarian".to_string()))),
            TradingStyle::Custom("Contrarian".to_string())
        );
    }

    #[test]
    fn test_profile_description() {
        let profile = TraderProfile::new("AliceTrader", "conservative", 0.2);

        assert_eq!(profile.occupation, "Stock Trader");
        assert_eq!(
            profile.description,
            "Focuses on conservative strategies with risk tolerance 0.2"
        );
        assert_eq!(profile.interests.len(), 3);
    }
}
