//! Standardized collection traits
//!
//! This module defines traits for collections of domain models, providing
//! a unified interface for working with collections across the crate.
//! It standardizes common operations like adding, getting, and filtering items.

use std::sync::Arc;

/// Core trait for identifiable domain models
pub trait EntityModel {
    /// Identifier type for this model
    type Id;

    /// Get the model's identifier
    fn id(&self) -> &Self::Id;

    /// Get a string key for the model
    fn key(&self) -> String;
}

/// Core trait for model collections
///
/// This trait provides the fundamental operations that all model collections
/// should support, including adding, getting, and listing items.
pub trait ModelCollection<T: EntityModel>: Send + Sync + std::fmt::Debug {
    /// Add a model to the collection
    fn add(&mut self, model: T);

    /// Get a model by its identifier
    fn get(&self, id: &T::Id) -> Option<Arc<T>>;

    /// Get all models in the collection
    fn all(&self) -> Vec<Arc<T>>;

    /// Count the total number of models in the collection
    fn count(&self) -> usize;

    /// Filter models by a predicate function
    fn filter<F>(&self, predicate: F) -> Vec<Arc<T>>
    where
        F: Fn(&T) -> bool;

    /// Check if the collection contains a model with the given ID
    fn contains(&self, id: &T::Id) -> bool {
        self.get(id).is_some()
    }

    /// Check if the collection is empty
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Add multiple models to the collection
    fn add_all(&mut self, models: Vec<T>) {
        for model in models {
            self.add(model);
        }
    }
}
