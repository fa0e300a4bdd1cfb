mod in_memory_symptom_repository;
mod mongo_symptom_repository;

pub use in_memory_symptom_repository::InMemorySymptomRepository;
pub use mongo_symptom_repository::{MongoCollections, MongoSymptomRepository};
