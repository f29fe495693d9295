use pantry_matching::PantryItem;
use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};

/// Owned ingredients keyed by name, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pantry {
    items: Vec<PantryItem>,
}

impl Pantry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an ingredient or update its quantity.
    ///
    /// The name is trimmed. An existing entry keeps its position and its old
    /// quantity when `qty` is blank.
    pub fn add(&mut self, name: &str, qty: &str) -> PlanResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PlanError::EmptyIngredientName);
        }

        match self.items.iter_mut().find(|item| item.name == name) {
            Some(existing) => {
                if !qty.is_empty() {
                    existing.qty = qty.to_string();
                }
            }
            None => self.items.push(PantryItem::new(name, qty)),
        }

        Ok(())
    }

    /// Returns whether something was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.name != name);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[PantryItem] {
        &self.items
    }

    pub fn get(&self, name: &str) -> Option<&PantryItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Names only, the input the ranker needs.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Parse an exported pantry. The document must be a JSON array; entries
    /// go through [`Pantry::add`] so names are trimmed and duplicates merged.
    pub fn from_json(json: &str) -> PlanResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_array() {
            return Err(PlanError::InvalidFormat(
                "pantry must be a JSON array of items".to_string(),
            ));
        }

        let items: Vec<PantryItem> = serde_json::from_value(value)?;
        let mut pantry = Self::new();
        for item in items {
            pantry.add(&item.name, &item.qty)?;
        }

        tracing::debug!(items = pantry.len(), "Imported pantry");

        Ok(pantry)
    }

    pub fn to_json_pretty(&self) -> PlanResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl FromIterator<PantryItem> for Pantry {
    /// Blank names are skipped.
    fn from_iter<I: IntoIterator<Item = PantryItem>>(iter: I) -> Self {
        let mut pantry = Self::new();
        for item in iter {
            let _ = pantry.add(&item.name, &item.qty);
        }
        pantry
    }
}
