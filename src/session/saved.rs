// Saved creative items, newest first

use std::collections::VecDeque;

use crate::catalog::CreativeContent;

/// Creative content the user chose to keep. Unbounded; lives for the whole
/// app session rather than one screen visit.
#[derive(Debug, Clone, Default)]
pub struct SavedItems {
    items: VecDeque<CreativeContent>,
}

impl SavedItems {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a copy of `item`
    pub fn save_creative_item(&mut self, item: CreativeContent) {
        tracing::info!(title = %item.title, kind = %item.kind, "Saved creative item");
        self.items.push_front(item);
    }

    /// Items, newest first
    pub fn iter(&self) -> impl Iterator<Item = &CreativeContent> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&CreativeContent> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::creative::generate;
    use crate::catalog::CreativeKind;
    use crate::matcher::ScriptedSource;

    #[test]
    fn test_newest_first() {
        let mut rng = ScriptedSource::new([0, 1]);
        let first = generate(CreativeKind::Poem, &mut rng);
        let second = generate(CreativeKind::Poem, &mut rng);

        let mut saved = SavedItems::new();
        saved.save_creative_item(first.clone());
        saved.save_creative_item(second.clone());

        assert_eq!(saved.len(), 2);
        assert_eq!(saved.get(0), Some(&second));
        assert_eq!(saved.get(1), Some(&first));
    }

    #[test]
    fn test_saved_item_matches_generated() {
        let mut rng = ScriptedSource::default();
        let generated = generate(CreativeKind::ArtIdea, &mut rng);

        let mut saved = SavedItems::new();
        saved.save_creative_item(generated.clone());

        let item = saved.iter().next().unwrap();
        assert_eq!(item.title, generated.title);
        assert_eq!(item.body, generated.body);
        assert_eq!(item.tag, generated.tag);
    }
}
