//! Symbol universe - alphabets, templates, decorators and glitch marks
//!
//! The built-in catalog is assembled once on first use and shared read-only
//! by every generator. Custom catalogs go through [`Catalog::new`], which
//! rejects anything the generator could not index safely.

mod decorators;
mod marks;
mod styles;
mod templates;

pub use decorators::DECORATORS;
pub use marks::{is_combining, GLITCH_MARKS};
pub use styles::{is_special, DIGIT_THRESHOLD, ENCLOSED_START, SQUARED_START, STYLES};
pub use templates::{TemplateCategory, PLACEHOLDER};

use once_cell::sync::Lazy;

use crate::catalog_error;
use crate::error::Result;
use crate::types::StyleDefinition;

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    let catalog = Catalog::from_parts(
        STYLES
            .iter()
            .map(|(name, start)| StyleDefinition::new(*name, *start))
            .collect(),
        TemplateCategory::ALL
            .iter()
            .map(|category| {
                let list: Vec<String> = category.templates().iter().map(|t| t.to_string()).collect();
                (*category, list)
            })
            .collect(),
        DECORATORS.iter().map(|d| d.to_string()).collect(),
        GLITCH_MARKS.to_vec(),
    );
    debug_assert!(catalog.validate().is_ok());
    tracing::debug!(
        styles = catalog.styles.len(),
        templates = catalog.templates.len(),
        decorators = catalog.decorators.len(),
        marks = catalog.glitch_marks.len(),
        "Built-in symbol catalog loaded"
    );
    catalog
});

/// Read-only collection of everything the generator draws from
#[derive(Debug, Clone)]
pub struct Catalog {
    styles: Vec<StyleDefinition>,
    template_groups: Vec<(TemplateCategory, Vec<String>)>,
    templates: Vec<String>,
    decorators: Vec<String>,
    glitch_marks: Vec<char>,
}

impl Catalog {
    /// The process-wide default catalog
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Build and validate a custom catalog.
    ///
    /// Templates are flattened in the order the groups are given.
    pub fn new(
        styles: Vec<StyleDefinition>,
        template_groups: Vec<(TemplateCategory, Vec<String>)>,
        decorators: Vec<String>,
        glitch_marks: Vec<char>,
    ) -> Result<Self> {
        let catalog = Self::from_parts(styles, template_groups, decorators, glitch_marks);
        catalog.validate()?;
        Ok(catalog)
    }

    fn from_parts(
        styles: Vec<StyleDefinition>,
        template_groups: Vec<(TemplateCategory, Vec<String>)>,
        decorators: Vec<String>,
        glitch_marks: Vec<char>,
    ) -> Self {
        let templates = template_groups
            .iter()
            .flat_map(|(_, list)| list.iter().cloned())
            .collect();
        Self {
            styles,
            template_groups,
            templates,
            decorators,
            glitch_marks,
        }
    }

    /// Check the invariants the generator relies on.
    ///
    /// An empty glitch-mark list is accepted; glitching then leaves text untouched.
    pub fn validate(&self) -> Result<()> {
        if self.styles.is_empty() {
            return Err(catalog_error!("styles", "at least one style is required"));
        }
        for style in &self.styles {
            if style.name.trim().is_empty() {
                return Err(catalog_error!("styles", "style starting at U+{:X} has no name", style.start));
            }
            if char::from_u32(style.start).is_none() {
                return Err(catalog_error!(
                    "styles",
                    "'{}' starts at U+{:X}, which is not a Unicode scalar value",
                    style.name,
                    style.start
                ));
            }
        }

        if self.templates.is_empty() {
            return Err(catalog_error!("templates", "at least one template is required"));
        }
        for (category, list) in &self.template_groups {
            for template in list {
                let count = template.matches(PLACEHOLDER).count();
                if count != 1 {
                    return Err(catalog_error!(
                        "templates",
                        "{} template '{}' contains {} placeholder(s), expected exactly one",
                        category,
                        template,
                        count
                    ));
                }
            }
        }

        if self.decorators.is_empty() {
            return Err(catalog_error!("decorators", "at least one decorator is required"));
        }

        Ok(())
    }

    pub fn styles(&self) -> &[StyleDefinition] {
        &self.styles
    }

    /// All templates flattened in group order
    pub fn templates(&self) -> &[String] {
        &self.templates
    }

    pub fn template_groups(&self) -> &[(TemplateCategory, Vec<String>)] {
        &self.template_groups
    }

    pub fn decorators(&self) -> &[String] {
        &self.decorators
    }

    pub fn glitch_marks(&self) -> &[char] {
        &self.glitch_marks
    }

    /// Find a style by name, ignoring case
    pub fn style_by_name(&self, name: &str) -> Option<&StyleDefinition> {
        let wanted = name.trim();
        self.styles
            .iter()
            .find(|style| style.name.eq_ignore_ascii_case(wanted))
    }

    /// Number of distinct (style, template, decorator, strategy) combinations
    /// the generator can reach before the index sequence repeats.
    pub fn combination_count(&self) -> u64 {
        self.styles.len() as u64
            * self.templates.len() as u64
            * self.decorators.len() as u64
            * crate::engine::Strategy::COUNT as u64
    }
}
