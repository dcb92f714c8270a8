//! Menu Item Model

use crate::fields::{Aliases, first_present, first_text};
use crate::price;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

pub const ID_ALIASES: Aliases = &["Id", "id", "ID"];
pub const NAME_ALIASES: Aliases = &["Nombre", "Nombre del plato", "name", "Name"];
pub const PRICE_ALIASES: Aliases = &["Precio (€)", "Precio", "price", "Price"];
pub const DESCRIPTION_ALIASES: Aliases = &["Descripción", "Descripcion", "description"];
pub const STOCK_ALIASES: Aliases = &["Stock", "stock"];

/// Loosely typed scalar as typed into the backing spreadsheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(serde_json::Number),
    Text(String),
}

impl Scalar {
    /// Convert a present JSON value; null yields `None`
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Number(n) => Some(Self::Number(n.clone())),
            Value::String(s) => Some(Self::Text(s.clone())),
            other => Some(Self::Text(other.to_string())),
        }
    }

    /// Integer prefix, parsed the way a lenient form field would be
    /// ("5 uds" -> 5, "2.7" -> 2, "abc" -> None)
    pub fn leading_integer(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
            Self::Text(text) => {
                let text = text.trim_start();
                let (sign, digits) = match text.strip_prefix('-') {
                    Some(rest) => (-1, rest),
                    None => (1, text.strip_prefix('+').unwrap_or(text)),
                };
                let end = digits
                    .find(|c: char| !c.is_ascii_digit())
                    .unwrap_or(digits.len());
                digits[..end].parse::<i64>().ok().map(|n| sign * n)
            }
        }
    }
}

/// Why a raw record was left out of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("record is not an object")]
    NotAnObject,
    #[error("missing name")]
    MissingName,
    #[error("missing price")]
    MissingPrice,
}

/// Stock-derived availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Availability {
    /// No stock information (no badge)
    Unknown,
    InStock,
    OutOfStock,
}

/// Menu item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// External identifier, when the backend provides one
    pub id: Option<String>,
    pub name: String,
    /// Raw price as received; see [`MenuItem::price_text`]
    pub price: Scalar,
    pub description: Option<String>,
    pub stock: Option<Scalar>,
}

impl MenuItem {
    /// Build an item from a raw backend record, resolving field aliases
    pub fn from_record(record: &Value) -> Result<Self, SkipReason> {
        let Value::Object(map) = record else {
            return Err(SkipReason::NotAnObject);
        };
        Self::from_map(map)
    }

    fn from_map(map: &Map<String, Value>) -> Result<Self, SkipReason> {
        let name = first_text(map, NAME_ALIASES).ok_or(SkipReason::MissingName)?;
        let price = first_present(map, PRICE_ALIASES)
            .and_then(Scalar::from_value)
            .ok_or(SkipReason::MissingPrice)?;

        Ok(Self {
            id: first_text(map, ID_ALIASES),
            name,
            price,
            description: first_text(map, DESCRIPTION_ALIASES),
            stock: first_present(map, STOCK_ALIASES).and_then(Scalar::from_value),
        })
    }

    /// De-duplication key: explicit id, else lowercase name + normalized price
    pub fn identity_key(&self) -> String {
        if let Some(id) = &self.id {
            return format!("id:{}", id);
        }
        let price = match price::parse_price(&self.price) {
            Some(amount) => price::format_amount(amount),
            None => match &self.price {
                Scalar::Text(text) => text.trim().to_lowercase(),
                Scalar::Number(n) => n.to_string(),
            },
        };
        format!("{}_{}", self.name.to_lowercase(), price)
    }

    pub fn availability(&self) -> Availability {
        match self.stock.as_ref().and_then(Scalar::leading_integer) {
            None => Availability::Unknown,
            Some(n) if n > 0 => Availability::InStock,
            Some(_) => Availability::OutOfStock,
        }
    }

    /// Two-decimal price, empty when the raw value does not parse
    pub fn price_text(&self) -> String {
        price::format_price(Some(&self.price))
    }
}
