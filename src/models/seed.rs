use super::CreatedRecord;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SeedOutcome {
    Created { id: String },
    Failed { reason: String },
}

impl SeedOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created { .. })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemOutcome {
    pub filename: String,
    pub url: String,
    pub outcome: SeedOutcome,
}

/// Per-item outcomes of one seeding pass, in asset-list order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SeedReport {
    pub items: Vec<ItemOutcome>,
}

impl SeedReport {
    pub fn push(&mut self, filename: &str, url: &str, outcome: SeedOutcome) {
        self.items.push(ItemOutcome {
            filename: filename.to_string(),
            url: url.to_string(),
            outcome,
        });
    }

    /// Filename to record id for every asset whose create succeeded.
    pub fn created(&self) -> HashMap<String, CreatedRecord> {
        self.items
            .iter()
            .filter_map(|item| match &item.outcome {
                SeedOutcome::Created { id } => {
                    Some((item.filename.clone(), CreatedRecord { id: id.clone() }))
                }
                SeedOutcome::Failed { .. } => None,
            })
            .collect()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items.iter().filter_map(|item| match &item.outcome {
            SeedOutcome::Failed { reason } => Some((item.filename.as_str(), reason.as_str())),
            SeedOutcome::Created { .. } => None,
        })
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn success_count(&self) -> usize {
        self.items.iter().filter(|i| i.outcome.is_created()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.total() - self.success_count()
    }

    pub fn is_complete(&self) -> bool {
        self.success_count() == self.total()
    }
}
