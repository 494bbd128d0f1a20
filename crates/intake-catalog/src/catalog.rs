use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::info;

use intake_core::models::category::Category;
use intake_core::models::disorder::DisorderDefinition;
use intake_core::models::module::{Module, Question};
use intake_core::models::screening::ScreeningItem;

use crate::error::CatalogError;
use crate::{CategoryPack, all_packs, questions};

/// Unvalidated reference data. Deserializable so a catalog can also be
/// loaded from JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogData {
    pub overview: Vec<Question>,
    pub timeline: Vec<Question>,
    pub screening_items: Vec<ScreeningItem>,
    pub modules: Vec<Module>,
    pub disorders: Vec<DisorderDefinition>,
    /// Category → lower-case symptom keyword stems.
    pub keywords: Vec<(Category, Vec<String>)>,
}

/// Where a question id lives in the catalog.
#[derive(Debug, Clone, Copy)]
pub enum QuestionKind<'a> {
    Overview,
    Screening(&'a ScreeningItem),
    Module { module: &'a Module, index: usize },
    Timeline,
}

#[derive(Debug, Clone, Copy)]
pub struct QuestionRef<'a> {
    pub id: &'a str,
    pub text: &'a str,
    pub kind: QuestionKind<'a>,
}

/// Validated, immutable reference data. Every id is unique across all
/// question kinds and every module link resolves.
#[derive(Debug, Clone)]
pub struct Catalog {
    data: CatalogData,
    items_by_id: HashMap<String, usize>,
    modules_by_id: HashMap<String, usize>,
    disorders_by_id: HashMap<String, usize>,
}

impl Catalog {
    /// The built-in registry from [`all_packs`].
    pub fn standard() -> Result<Self, CatalogError> {
        Self::from_packs(&all_packs())
    }

    pub fn from_packs(packs: &[Box<dyn CategoryPack>]) -> Result<Self, CatalogError> {
        let mut data = CatalogData {
            overview: questions::overview().to_vec(),
            timeline: questions::timeline().to_vec(),
            ..CatalogData::default()
        };
        for pack in packs {
            data.screening_items.extend_from_slice(pack.screening_items());
            data.modules.extend_from_slice(pack.modules());
            data.disorders.extend_from_slice(pack.disorders());
            data.keywords.push((
                pack.category(),
                pack.keywords().iter().map(|k| k.to_string()).collect(),
            ));
        }
        Self::from_data(data)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;
        Self::from_data(data)
    }

    pub fn from_data(mut data: CatalogData) -> Result<Self, CatalogError> {
        let mut question_ids = HashSet::new();
        let mut claim = |id: &str| -> Result<(), CatalogError> {
            if question_ids.insert(id.to_string()) {
                Ok(())
            } else {
                Err(CatalogError::DuplicateId(id.to_string()))
            }
        };

        for q in data.overview.iter().chain(&data.timeline) {
            claim(&q.id)?;
        }
        for item in &data.screening_items {
            claim(&item.id)?;
        }
        for module in &data.modules {
            if !module.priority_weight.is_finite() {
                return Err(CatalogError::InvalidPriorityWeight(module.id.clone()));
            }
            for q in &module.questions {
                claim(&q.id)?;
            }
        }

        let modules_by_id = index_by(&data.modules, |m| &m.id)?;
        let items_by_id = index_by(&data.screening_items, |i| &i.id)?;
        let disorders_by_id = index_by(&data.disorders, |d| &d.disorder_id)?;

        for item in &data.screening_items {
            if let Some(missing) = item
                .linked_modules
                .iter()
                .find(|m| !modules_by_id.contains_key(*m))
            {
                return Err(CatalogError::UnknownModule {
                    item_id: item.id.clone(),
                    module_id: missing.clone(),
                });
            }
        }

        for disorder in &data.disorders {
            validate_disorder(disorder)?;
        }

        for (_, words) in &mut data.keywords {
            for word in words.iter_mut() {
                *word = word.to_lowercase();
            }
        }

        info!(
            screening_items = data.screening_items.len(),
            modules = data.modules.len(),
            disorders = data.disorders.len(),
            "catalog loaded"
        );

        Ok(Self {
            data,
            items_by_id,
            modules_by_id,
            disorders_by_id,
        })
    }

    pub fn overview_questions(&self) -> &[Question] {
        &self.data.overview
    }

    pub fn timeline_questions(&self) -> &[Question] {
        &self.data.timeline
    }

    pub fn screening_items(&self) -> &[ScreeningItem] {
        &self.data.screening_items
    }

    pub fn screening_item(&self, id: &str) -> Option<&ScreeningItem> {
        self.items_by_id.get(id).map(|&i| &self.data.screening_items[i])
    }

    /// Screening items of `category` in catalog order.
    pub fn items_in(&self, category: Category) -> impl Iterator<Item = &ScreeningItem> {
        self.data
            .screening_items
            .iter()
            .filter(move |i| i.category == category)
    }

    pub fn modules(&self) -> &[Module] {
        &self.data.modules
    }

    pub fn module(&self, id: &str) -> Option<&Module> {
        self.modules_by_id.get(id).map(|&i| &self.data.modules[i])
    }

    pub fn disorders(&self) -> &[DisorderDefinition] {
        &self.data.disorders
    }

    pub fn disorder(&self, id: &str) -> Option<&DisorderDefinition> {
        self.disorders_by_id.get(id).map(|&i| &self.data.disorders[i])
    }

    pub fn disorders_in(&self, category: Category) -> impl Iterator<Item = &DisorderDefinition> {
        self.data
            .disorders
            .iter()
            .filter(move |d| d.category == category)
    }

    pub fn category_keywords(&self) -> &[(Category, Vec<String>)] {
        &self.data.keywords
    }

    /// Resolve any question id: fixed, screening, or module.
    pub fn question(&self, id: &str) -> Option<QuestionRef<'_>> {
        if let Some(q) = self.data.overview.iter().find(|q| q.id == id) {
            return Some(QuestionRef {
                id: &q.id,
                text: &q.text,
                kind: QuestionKind::Overview,
            });
        }
        if let Some(q) = self.data.timeline.iter().find(|q| q.id == id) {
            return Some(QuestionRef {
                id: &q.id,
                text: &q.text,
                kind: QuestionKind::Timeline,
            });
        }
        if let Some(item) = self.screening_item(id) {
            return Some(QuestionRef {
                id: &item.id,
                text: &item.text,
                kind: QuestionKind::Screening(item),
            });
        }
        self.data.modules.iter().find_map(|module| {
            module
                .questions
                .iter()
                .position(|q| q.id == id)
                .map(|index| QuestionRef {
                    id: &module.questions[index].id,
                    text: &module.questions[index].text,
                    kind: QuestionKind::Module { module, index },
                })
        })
    }
}

fn index_by<T>(
    values: &[T],
    key: impl Fn(&T) -> &String,
) -> Result<HashMap<String, usize>, CatalogError> {
    let mut map = HashMap::with_capacity(values.len());
    for (i, v) in values.iter().enumerate() {
        if map.insert(key(v).clone(), i).is_some() {
            return Err(CatalogError::DuplicateId(key(v).clone()));
        }
    }
    Ok(map)
}

fn validate_disorder(disorder: &DisorderDefinition) -> Result<(), CatalogError> {
    let total = disorder.total_criteria();
    if total == 0 {
        return Err(CatalogError::EmptyCriteria(disorder.disorder_id.clone()));
    }
    if let Some(required) = disorder.minimum_criteria_count
        && required > total
    {
        return Err(CatalogError::MinimumExceedsCriteria {
            disorder_id: disorder.disorder_id.clone(),
            required,
            total,
        });
    }
    if let Some(core) = &disorder.core_symptoms
        && core.threshold > core.any_of.len()
    {
        return Err(CatalogError::UnreachableCoreThreshold {
            disorder_id: disorder.disorder_id.clone(),
            threshold: core.threshold,
            keywords: core.any_of.len(),
        });
    }
    Ok(())
}
