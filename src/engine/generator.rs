//! Batch generator - turns one input into a page of fancy renderings

use rand::Rng;

use super::alphabet::remap;
use super::strategy::{Parts, Strategy};
use crate::error::Result;
use crate::symbols::Catalog;
use crate::types::{FancyText, StyleDefinition};

#[derive(Debug, Clone)]
enum CatalogRef {
    Builtin,
    Custom(std::sync::Arc<Catalog>),
}

/// Generator over a symbol catalog.
///
/// Every selection is a pure function of the iteration index; only the two
/// glitch strategies consume randomness.
#[derive(Debug, Clone)]
pub struct FancyGenerator {
    catalog: CatalogRef,
}

impl FancyGenerator {
    /// Generator backed by the built-in catalog
    pub fn new() -> Self {
        Self {
            catalog: CatalogRef::Builtin,
        }
    }

    /// Generator backed by a custom, already validated catalog
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: CatalogRef::Custom(std::sync::Arc::new(catalog)),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        match &self.catalog {
            CatalogRef::Builtin => Catalog::builtin(),
            CatalogRef::Custom(catalog) => catalog.as_ref(),
        }
    }

    /// Style used at iteration `index`
    pub fn style_at(&self, index: u64) -> &StyleDefinition {
        let styles = self.catalog().styles();
        &styles[pick(index, styles.len())]
    }

    /// Generate `limit` results for iterations `offset..offset + limit`.
    pub fn generate_batch(&self, input: &str, offset: u64, limit: usize) -> Vec<FancyText> {
        self.generate_batch_with_rng(input, offset, limit, &mut rand::thread_rng())
    }

    /// Same as [`FancyGenerator::generate_batch`] with an explicit random source.
    pub fn generate_batch_with_rng<R: Rng + ?Sized>(
        &self,
        input: &str,
        offset: u64,
        limit: usize,
        rng: &mut R,
    ) -> Vec<FancyText> {
        if input.is_empty() || limit == 0 {
            return Vec::new();
        }

        tracing::debug!(
            offset = offset,
            limit = limit,
            input_chars = input.chars().count(),
            "Generating fancy text batch"
        );

        (0..limit as u64)
            .map(|k| self.render_at(input, offset.wrapping_add(k), rng))
            .collect()
    }

    /// Render the single result for iteration `index`.
    pub fn render_at<R: Rng + ?Sized>(&self, input: &str, index: u64, rng: &mut R) -> FancyText {
        let catalog = self.catalog();
        let style = self.style_at(index);
        let templates = catalog.templates();
        let decorators = catalog.decorators();
        let strategy = Strategy::for_index(index);

        tracing::trace!(
            index = index,
            style = %style.name,
            strategy = %strategy,
            "Composing result"
        );

        let styled = remap(input, style.start);
        let parts = Parts {
            input,
            styled: &styled,
            template: &templates[pick(index, templates.len())],
            decorator: &decorators[pick(index, decorators.len())],
            marks: catalog.glitch_marks(),
        };

        FancyText {
            id: index,
            text: strategy.compose(&parts, rng),
            style_name: style.name.clone(),
            category: strategy.category(),
        }
    }

    /// Run [`FancyGenerator::generate_batch`] on the blocking thread pool.
    pub async fn generate_batch_async(
        &self,
        input: impl Into<String>,
        offset: u64,
        limit: usize,
    ) -> Result<Vec<FancyText>> {
        let generator = self.clone();
        let input = input.into();
        let batch = tokio::task::spawn_blocking(move || {
            generator.generate_batch(&input, offset, limit)
        })
        .await?;
        Ok(batch)
    }
}

impl Default for FancyGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a batch with the built-in catalog
pub fn generate_batch(input: &str, offset: u64, limit: usize) -> Vec<FancyText> {
    FancyGenerator::new().generate_batch(input, offset, limit)
}

fn pick(index: u64, len: usize) -> usize {
    (index % len as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::{is_combining, TemplateCategory, STYLES};
    use crate::types::Category;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(99)
    }

    #[test]
    fn test_empty_input_short_circuits() {
        assert!(generate_batch("", 0, 50).is_empty());
        assert!(generate_batch("", 10, 0).is_empty());
    }

    #[test]
    fn test_zero_limit() {
        assert!(generate_batch("abc", 5, 0).is_empty());
    }

    #[test]
    fn test_count_and_ids() {
        let batch = generate_batch("Hello", 37, 25);
        assert_eq!(batch.len(), 25);
        for (k, item) in batch.iter().enumerate() {
            assert_eq!(item.id, 37 + k as u64);
        }
    }

    #[test]
    fn test_first_result_is_bold_plain() {
        let batch = generate_batch("hi", 0, 1);
        assert_eq!(
            batch,
            vec![FancyText {
                id: 0,
                text: "\u{1D421}\u{1D422}".to_string(),
                style_name: "Bold".to_string(),
                category: Category::Style,
            }]
        );
    }

    #[test]
    fn test_index_one_is_template_injection() {
        let gen = FancyGenerator::new();
        let item = &gen.generate_batch("X", 1, 1)[0];
        let templates = gen.catalog().templates();
        let expected = templates[1 % templates.len()].replacen("{{text}}", &remap("X", STYLES[1].1), 1);
        assert_eq!(item.text, expected);
        assert_eq!(item.category, Category::Art);
        assert_eq!(item.style_name, "Italic");
    }

    #[test]
    fn test_style_rotation_covers_catalog_in_order() {
        let names: Vec<String> = generate_batch("abc", 0, STYLES.len())
            .into_iter()
            .map(|r| r.style_name)
            .collect();
        let expected: Vec<String> = STYLES.iter().map(|(n, _)| n.to_string()).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_deterministic_outside_glitch() {
        let gen = FancyGenerator::new();
        let a = gen.generate_batch("Repeat me", 0, 48);
        let b = gen.generate_batch("Repeat me", 0, 48);
        for (x, y) in a.iter().zip(&b) {
            if !Strategy::for_index(x.id).is_random() {
                assert_eq!(x, y);
            }
        }
    }

    #[test]
    fn test_seeded_batches_match_exactly() {
        let gen = FancyGenerator::new();
        let a = gen.generate_batch_with_rng("zalgo", 0, 24, &mut seeded());
        let b = gen.generate_batch_with_rng("zalgo", 0, 24, &mut seeded());
        assert_eq!(a, b);
    }

    #[test]
    fn test_glitch_raw_uses_unstyled_input() {
        let gen = FancyGenerator::new();
        let item = gen.render_at("abc", 4, &mut seeded());
        let base: String = item.text.chars().filter(|c| !is_combining(*c)).collect();
        assert_eq!(base, "abc");
        assert_eq!(item.text.chars().count(), 9);
    }

    #[test]
    fn test_pages_concatenate() {
        let gen = FancyGenerator::new();
        let whole = gen.generate_batch_with_rng("page", 0, 30, &mut seeded());
        let mut rng = seeded();
        let mut paged = gen.generate_batch_with_rng("page", 0, 10, &mut rng);
        paged.extend(gen.generate_batch_with_rng("page", 10, 20, &mut rng));
        assert_eq!(whole, paged);
    }

    #[test]
    fn test_huge_offset_does_not_panic() {
        let batch = generate_batch("x", u64::MAX - 1, 3);
        let ids: Vec<u64> = batch.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![u64::MAX - 1, u64::MAX, 0]);
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = Catalog::new(
            vec![StyleDefinition::new("Monospace", 0x1D670)],
            vec![(TemplateCategory::Music, vec!["♪ {{text}} ♪".to_string()])],
            vec!["~".to_string()],
            Vec::new(),
        )
        .unwrap();
        let gen = FancyGenerator::with_catalog(catalog);
        let batch = gen.generate_batch("a", 0, 12);

        assert_eq!(batch[1].text, "♪ \u{1D68A} ♪");
        assert_eq!(batch[2].text, "~ \u{1D68A} ~");
        // no marks: glitch strategies fall back to their unglitched text
        assert_eq!(batch[4].text, "a");
        assert_eq!(batch[11].text, "♪ \u{1D68A} ♪");
    }

    #[test]
    fn test_async_matches_sync_shape() {
        let gen = FancyGenerator::new();
        let batch = tokio_test::block_on(gen.generate_batch_async("async", 12, 6)).unwrap();
        assert_eq!(batch.len(), 6);
        assert_eq!(batch[0].id, 12);
        assert_eq!(batch[0].text, remap("async", gen.style_at(12).start));
    }
}
