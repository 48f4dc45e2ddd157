//! The four dashboard sections

mod destinations;
mod gallery;
mod insights;
mod responsible;

pub use destinations::DestinationsSection;
pub use gallery::GallerySection;
pub use insights::InsightsSection;
pub use responsible::ResponsibleSection;

use std::sync::Arc;

use egui::Ui;
use hx_core::Tab;
use tracing::error;

use crate::ViewerContext;

/// A dashboard section hosted in one tab
pub trait Section {
    fn tab(&self) -> Tab;

    fn title(&self) -> &'static str {
        self.tab().title()
    }

    /// Draw the section for this frame
    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui);
}

/// All sections in tab order
pub fn all_sections() -> Vec<Box<dyn Section>> {
    vec![
        Box::new(GallerySection::default()),
        Box::new(DestinationsSection::default()),
        Box::new(InsightsSection::default()),
        Box::new(ResponsibleSection::default()),
    ]
}

/// Fetches one table per frame, remembering a failure until the
/// catalog generation changes so a broken store is not queried every frame.
#[derive(Debug, Default)]
pub struct TableSlot {
    failed: Option<(u64, String)>,
}

impl TableSlot {
    pub fn load<T>(
        &mut self,
        generation: u64,
        fetch: impl FnOnce() -> hx_data::Result<Arc<T>>,
    ) -> Result<Arc<T>, String> {
        if let Some((failed_at, message)) = &self.failed {
            if *failed_at == generation {
                return Err(message.clone());
            }
        }

        match fetch() {
            Ok(rows) => {
                self.failed = None;
                Ok(rows)
            }
            Err(e) => {
                let message = e.to_string();
                error!("Section fetch failed: {}", message);
                self.failed = Some((generation, message.clone()));
                Err(message)
            }
        }
    }
}

/// A value derived from a fetched table, rebuilt only when the table or
/// the key it was built with changes
#[derive(Debug)]
pub struct Derived<R, K, V> {
    entry: Option<(Arc<Vec<R>>, K, V)>,
}

impl<R, K, V> Default for Derived<R, K, V> {
    fn default() -> Self {
        Self { entry: None }
    }
}

impl<R, K: Clone + PartialEq, V> Derived<R, K, V> {
    pub fn get_or_update(
        &mut self,
        rows: &Arc<Vec<R>>,
        key: &K,
        build: impl FnOnce(&[R], &K) -> V,
    ) -> &V {
        let fresh = matches!(
            &self.entry,
            Some((source, built_with, _)) if Arc::ptr_eq(source, rows) && built_with == key
        );
        if !fresh {
            self.entry = None;
        }
        let (_, _, value) = self
            .entry
            .get_or_insert_with(|| (Arc::clone(rows), key.clone(), build(rows, key)));
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hx_data::DataError;

    #[test]
    fn test_failure_remembered_for_generation() {
        let mut slot = TableSlot::default();
        let mut calls = 0;

        for _ in 0..3 {
            let result: Result<Arc<Vec<i32>>, String> = slot.load(1, || {
                calls += 1;
                Err(DataError::SchemaDetection("art_forms".into()))
            });
            assert!(result.is_err());
        }
        assert_eq!(calls, 1);

        let rows = slot.load(2, || Ok(Arc::new(vec![1, 2]))).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_derived_rebuilds_on_new_rows_or_key() {
        let mut derived: Derived<i32, i32, i32> = Derived::default();
        let rows = Arc::new(vec![1, 2, 3]);
        let mut builds = 0;

        let mut sum_over = |d: &mut Derived<i32, i32, i32>, rows: &Arc<Vec<i32>>, key: i32| {
            *d.get_or_update(rows, &key, |r, k| {
                builds += 1;
                r.iter().filter(|v| *v >= k).sum()
            })
        };

        assert_eq!(sum_over(&mut derived, &rows, 2), 5);
        assert_eq!(sum_over(&mut derived, &rows, 2), 5);
        assert_eq!(sum_over(&mut derived, &rows, 3), 3);
        let reloaded = Arc::new(vec![1, 2, 3]);
        assert_eq!(sum_over(&mut derived, &reloaded, 3), 3);
        drop(sum_over);
        assert_eq!(builds, 3);
    }
}
