use std::sync::Arc;

use super::pair::ResourcePair;

/// Ordered list of resource pairs belonging to one descriptor.
#[derive(Debug, Default, Clone)]
pub struct ResourceList {
    pairs: Vec<Arc<ResourcePair>>,
}

impl ResourceList {
    pub fn new(pairs: Vec<Arc<ResourcePair>>) -> Self {
        Self { pairs }
    }

    pub fn push(&mut self, pair: Arc<ResourcePair>) {
        self.pairs.push(pair);
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<ResourcePair>> {
        self.pairs.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Arc<ResourcePair>> {
        self.pairs.get(index)
    }

    /// All pairs flagged as map layers, in list order.
    pub fn map_layers(&self) -> Vec<Arc<ResourcePair>> {
        self.pairs
            .iter()
            .filter(|p| p.is_map_layer())
            .cloned()
            .collect()
    }

    /// Whether any pair is a data (non map-layer) resource.
    pub fn has_data_resources(&self) -> bool {
        self.pairs.iter().any(|p| !p.is_map_layer())
    }

    /// Swap each map layer whose data equals one of `originals` for that
    /// original, in place. Returns how many entries were replaced.
    pub fn share_map_layers(&mut self, originals: &[Arc<ResourcePair>]) -> usize {
        let mut replaced = 0;
        for slot in self.pairs.iter_mut() {
            if !slot.is_map_layer() {
                continue;
            }
            let matching = originals
                .iter()
                .find(|o| !Arc::ptr_eq(o, slot) && o.data() == slot.data());
            if let Some(original) = matching {
                *slot = Arc::clone(original);
                replaced += 1;
            }
        }
        replaced
    }
}

impl FromIterator<Arc<ResourcePair>> for ResourceList {
    fn from_iter<I: IntoIterator<Item = Arc<ResourcePair>>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}
