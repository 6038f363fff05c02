//! Definition for the [`WasteType`] type and the [`WasteFilter`] used to
//! narrow a point list down to one category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The category of waste a drop-off point accepts.
///
/// Tags are the ones the points API stores. Any tag outside the known
/// set, including an empty one, is [`WasteType::Unspecified`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WasteType {
    /// Batteries of any size.
    Battery,
    /// Used cooking oil.
    Oil,
    /// Electronic waste.
    Electronic,
    General,
    #[default]
    Unspecified,
}

impl WasteType {
    /// Every category a point can be filed under.
    pub const KNOWN: [WasteType; 4] = [
        WasteType::Battery,
        WasteType::Oil,
        WasteType::Electronic,
        WasteType::General,
    ];

    /// The tag used on the wire. Empty for [`WasteType::Unspecified`].
    pub fn tag(&self) -> &'static str {
        match self {
            WasteType::Battery => "pilha",
            WasteType::Oil => "oleo",
            WasteType::Electronic => "eletronico",
            WasteType::General => "geral",
            WasteType::Unspecified => "",
        }
    }

    /// Display label of the category.
    pub fn label(&self) -> &'static str {
        match self {
            WasteType::Battery => "Pilhas e Baterias",
            WasteType::Oil => "Óleo de Cozinha",
            WasteType::Electronic => "Lixo Eletrónico",
            WasteType::General => "Resíduos Gerais",
            WasteType::Unspecified => "Não especificado",
        }
    }

    /// Disposal advice shown next to a point of this category.
    pub fn disposal_guide(&self) -> &'static str {
        match self {
            WasteType::Battery => {
                "Pilhas e baterias contêm metais pesados (chumbo, mercúrio) que contaminam o solo. \
                 Nunca jogue no lixo comum. Deposite apenas em coletores específicos como este."
            }
            WasteType::Oil => {
                "1 litro de óleo contamina 25.000 litros de água. Guarde o óleo usado em garrafas \
                 PET e leve a um ponto de coleta. Jamais jogue na pia."
            }
            WasteType::Electronic => {
                "Lixo eletrónico (E-Lixo) contém plásticos e metais valiosos que podem ser \
                 reciclados. Não misture com o lixo doméstico."
            }
            WasteType::General | WasteType::Unspecified => {
                "Verifique com o local quais resíduos são aceites. Na dúvida, não misture lixo \
                 orgânico com reciclável."
            }
        }
    }
}

impl From<&str> for WasteType {
    fn from(tag: &str) -> Self {
        match tag.trim() {
            "pilha" => WasteType::Battery,
            "oleo" => WasteType::Oil,
            "eletronico" => WasteType::Electronic,
            "geral" => WasteType::General,
            _ => WasteType::Unspecified,
        }
    }
}

impl From<String> for WasteType {
    fn from(tag: String) -> Self {
        WasteType::from(tag.as_str())
    }
}

impl From<WasteType> for String {
    fn from(waste_type: WasteType) -> Self {
        waste_type.tag().to_string()
    }
}

impl fmt::Display for WasteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Selects which points are listed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum WasteFilter {
    /// Every point, whatever its category.
    #[default]
    All,
    Only(WasteType),
}

impl WasteFilter {
    /// Tag of the "every category" option.
    pub const ALL_TAG: &'static str = "todos";

    /// Whether a point of the given category passes the filter.
    pub fn matches(&self, waste_type: &WasteType) -> bool {
        match self {
            WasteFilter::All => true,
            WasteFilter::Only(only) => only == waste_type,
        }
    }

    /// Value of the `tipo` query parameter, if one is sent at all.
    pub fn query_value(&self) -> Option<&'static str> {
        match self {
            WasteFilter::All => None,
            WasteFilter::Only(waste_type) => Some(waste_type.tag()),
        }
    }
}

impl FromStr for WasteFilter {
    type Err = std::convert::Infallible;

    /// Parses a filter tag. An empty tag or [`WasteFilter::ALL_TAG`]
    /// selects every point.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let tag = tag.trim();
        if tag.is_empty() || tag == Self::ALL_TAG {
            return Ok(WasteFilter::All);
        }
        Ok(WasteFilter::Only(WasteType::from(tag)))
    }
}

#[cfg(test)]
mod waste_tests {
    use super::*;

    #[test]
    fn test_known_tags_parse() {
        for waste_type in WasteType::KNOWN {
            assert_eq!(WasteType::from(waste_type.tag()), waste_type);
        }
    }

    #[test]
    fn test_unknown_tag_is_unspecified() {
        assert_eq!(WasteType::from("vidro"), WasteType::Unspecified);
        assert_eq!(WasteType::from(""), WasteType::Unspecified);
        assert_eq!(WasteType::Unspecified.label(), "Não especificado");
    }

    #[test]
    fn test_serde_uses_tags() {
        let json = serde_json::to_string(&WasteType::Oil).unwrap();
        assert_eq!(json, "\"oleo\"");

        let parsed: WasteType = serde_json::from_str("\"eletronico\"").unwrap();
        assert_eq!(parsed, WasteType::Electronic);

        let parsed: WasteType = serde_json::from_str("\"papel\"").unwrap();
        assert_eq!(parsed, WasteType::Unspecified);
    }

    #[test]
    fn test_general_and_unspecified_share_guide() {
        assert_eq!(
            WasteType::General.disposal_guide(),
            WasteType::Unspecified.disposal_guide()
        );
        assert_ne!(
            WasteType::Battery.disposal_guide(),
            WasteType::Oil.disposal_guide()
        );
    }

    #[test]
    fn test_filter_parse_and_match() {
        let all: WasteFilter = "todos".parse().unwrap();
        assert_eq!(all, WasteFilter::All);
        assert!(all.matches(&WasteType::Unspecified));
        assert_eq!(all.query_value(), None);

        let batteries: WasteFilter = "pilha".parse().unwrap();
        assert_eq!(batteries, WasteFilter::Only(WasteType::Battery));
        assert!(batteries.matches(&WasteType::Battery));
        assert!(!batteries.matches(&WasteType::Oil));
        assert_eq!(batteries.query_value(), Some("pilha"));
    }
}
