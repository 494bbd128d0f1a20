use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate id: {0}")]
    DuplicateId(String),

    #[error("screening item '{item_id}' links unknown module '{module_id}'")]
    UnknownModule { item_id: String, module_id: String },

    #[error("disorder '{0}' has no criteria")]
    EmptyCriteria(String),

    #[error("disorder '{disorder_id}' requires {required} criteria but defines {total}")]
    MinimumExceedsCriteria {
        disorder_id: String,
        required: usize,
        total: usize,
    },

    #[error("disorder '{disorder_id}' core-symptom threshold {threshold} exceeds its {keywords} keywords")]
    UnreachableCoreThreshold {
        disorder_id: String,
        threshold: usize,
        keywords: usize,
    },

    #[error("module '{0}' has a non-finite priority weight")]
    InvalidPriorityWeight(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
