//! Card style table
//!
//! Maps a card type to the curve its name ribbon follows. The table is
//! plain configuration owned by the caller; it is resolved into a
//! [`Ribbon`] before any sampling or layout happens.
//!
//! ```yaml
//! hero:
//!   name:
//!     text_curve:
//!       start: { x: 40, y: 120 }
//!       c1: { x: 140, y: 60 }
//!       c2: { x: 260, y: 60 }
//!       end: { x: 360, y: 120 }
//!     max_chars: 24
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RibbonError};
use crate::geometry::CubicCurve;
use crate::layout::{Ribbon, DEFAULT_MAX_CHARS};

/// Name ribbon settings of one card type
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NameStyle {
    #[serde(alias = "textCurve")]
    pub text_curve: CubicCurve,
    #[serde(default, alias = "maxChars", skip_serializing_if = "Option::is_none")]
    pub max_chars: Option<usize>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CardStyle {
    pub name: NameStyle,
}

/// Card type → style
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct StyleTable {
    cards: HashMap<String, CardStyle>,
}

impl StyleTable {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn insert(&mut self, card_type: impl Into<String>, style: CardStyle) {
        self.cards.insert(card_type.into(), style);
    }

    pub fn get(&self, card_type: &str) -> Option<&CardStyle> {
        self.cards.get(card_type)
    }

    pub fn card_types(&self) -> impl Iterator<Item = &str> {
        self.cards.keys().map(String::as_str)
    }

    /// Resolve the ribbon a card type's name is drawn along
    pub fn ribbon_for(&self, card_type: &str) -> Result<Ribbon> {
        let style = self
            .get(card_type)
            .ok_or_else(|| RibbonError::UnknownCardType(card_type.to_string()))?;
        let name = &style.name;

        Ok(Ribbon {
            curve: name.text_curve,
            max_chars: name.max_chars.unwrap_or(DEFAULT_MAX_CHARS),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    const YAML: &str = r#"
hero:
  name:
    text_curve:
      start: { x: 40, y: 120 }
      c1: { x: 140, y: 60 }
      c2: { x: 260, y: 60 }
      end: { x: 360, y: 120 }
    max_chars: 24
villain:
  name:
    text_curve:
      start: { x: 0, y: 0 }
      control1: { x: 1, y: 1 }
      control2: { x: 2, y: 1 }
      end: { x: 3, y: 0 }
"#;

    #[test]
    fn test_yaml_table() {
        let table = StyleTable::from_yaml(YAML).unwrap();

        let hero = table.ribbon_for("hero").unwrap();
        assert_eq!(hero.max_chars, 24);
        assert_eq!(hero.curve.control1, Point::new(140.0, 60.0));

        let villain = table.ribbon_for("villain").unwrap();
        assert_eq!(villain.max_chars, DEFAULT_MAX_CHARS);
        assert_eq!(villain.curve.end, Point::new(3.0, 0.0));
    }

    #[test]
    fn test_json_table_with_js_keys() {
        let json = r#"{
            "spell": {
                "name": {
                    "textCurve": {
                        "start": {"x": 10, "y": 50},
                        "c1": {"x": 60, "y": 10},
                        "c2": {"x": 140, "y": 10},
                        "end": {"x": 190, "y": 50}
                    }
                }
            }
        }"#;
        let table = StyleTable::from_json(json).unwrap();
        let ribbon = table.ribbon_for("spell").unwrap();
        assert_eq!(ribbon.curve.start, Point::new(10.0, 50.0));
        assert_eq!(table.card_types().collect::<Vec<_>>(), vec!["spell"]);
    }

    #[test]
    fn test_unknown_card_type() {
        let table = StyleTable::default();
        assert_eq!(
            table.ribbon_for("trap"),
            Err(RibbonError::UnknownCardType("trap".to_string()))
        );
    }

    #[test]
    fn test_malformed_table() {
        assert!(matches!(
            StyleTable::from_json(r#"{"hero": {"name": {}}}"#),
            Err(RibbonError::StyleParse(_))
        ));
    }
}
