pub mod category;
pub mod diagnosis;
pub mod disorder;
pub mod interview;
pub mod module;
pub mod recommendation;
pub mod screening;
pub mod step;
pub mod symptom;
