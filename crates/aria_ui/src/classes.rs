//! Class-name composition shared by every component.
//!
//! Components never concatenate class strings by hand. Each one owns a set of
//! immutable lookup tables and feeds the resolved entries through
//! [`ClassComposer`], which fixes the output order (base, variant, size,
//! modifiers, consumer override) and collapses whitespace and duplicates.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Programmer errors raised while composing class strings.
pub enum ClassError {
    /// A component was configured without a usable base class.
    #[error("invalid class configuration: {0}")]
    InvalidConfiguration(&'static str),
}

const fn has_token(class: &str) -> bool {
    let bytes = class.as_bytes();
    let mut index = 0;
    while index < bytes.len() {
        if !bytes[index].is_ascii_whitespace() {
            return true;
        }
        index += 1;
    }
    false
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Non-empty base class owned by a component definition.
pub struct BaseClass(&'static str);

impl BaseClass {
    /// Builds a base class from a literal.
    ///
    /// Evaluated in a `const` item, an empty or whitespace-only literal fails
    /// the build instead of rendering an unstyled component.
    pub const fn from_static(class: &'static str) -> Self {
        assert!(has_token(class), "base class must not be empty");
        Self(class)
    }

    /// Runtime twin of [`BaseClass::from_static`].
    ///
    /// # Errors
    ///
    /// Returns [`ClassError::InvalidConfiguration`] when `class` holds no token.
    pub fn new(class: &'static str) -> Result<Self, ClassError> {
        if has_token(class) {
            Ok(Self(class))
        } else {
            Err(ClassError::InvalidConfiguration("missing base class"))
        }
    }

    /// Returns the raw class text.
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

#[derive(Debug, Clone, Copy)]
/// Immutable key to class mapping. Keys missing from the table contribute nothing.
pub struct ClassTable<K: 'static>(pub &'static [(K, &'static str)]);

impl<K: Copy + PartialEq> ClassTable<K> {
    /// Looks up the class entry for `key`.
    pub fn lookup(&self, key: K) -> Option<&'static str> {
        self.0
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, class)| *class)
    }

    /// Looks up an optional key; `None` contributes nothing.
    pub fn resolve(&self, key: Option<K>) -> Option<&'static str> {
        key.and_then(|key| self.lookup(key))
    }
}

#[derive(Debug, Clone, Copy)]
/// Size classes for one component. There is no medium slot: medium is the
/// base rendering and never emits a class.
pub struct SizeTable {
    /// Extra-small class.
    pub xs: &'static str,
    /// Small class.
    pub sm: &'static str,
    /// Large class.
    pub lg: &'static str,
}

impl SizeTable {
    /// Resolves the class for `size`, `None` for [`crate::Size::Md`].
    pub fn lookup(&self, size: crate::Size) -> Option<&'static str> {
        match size {
            crate::Size::Xs => Some(self.xs),
            crate::Size::Sm => Some(self.sm),
            crate::Size::Md => None,
            crate::Size::Lg => Some(self.lg),
        }
    }
}

#[derive(Debug, Clone)]
/// Ordered builder for a composed class string.
pub struct ClassComposer {
    base: BaseClass,
    variant: Option<&'static str>,
    size: Option<&'static str>,
    modifiers: Vec<&'static str>,
}

impl ClassComposer {
    /// Starts a composition from a component base class.
    pub fn new(base: BaseClass) -> Self {
        Self {
            base,
            variant: None,
            size: None,
            modifiers: Vec::new(),
        }
    }

    /// Sets the single variant entry, replacing any earlier one.
    pub fn variant(mut self, class: Option<&'static str>) -> Self {
        self.variant = class;
        self
    }

    /// Sets the single size entry, replacing any earlier one.
    pub fn size(mut self, class: Option<&'static str>) -> Self {
        self.size = class;
        self
    }

    /// Appends `class` when `enabled` is true.
    pub fn modifier(self, enabled: bool, class: &'static str) -> Self {
        self.modifier_entry(enabled.then_some(class))
    }

    /// Appends an already-resolved modifier entry.
    pub fn modifier_entry(mut self, class: Option<&'static str>) -> Self {
        if let Some(class) = class {
            self.modifiers.push(class);
        }
        self
    }

    /// Produces the final class string with the consumer override appended last.
    pub fn finish(&self, class_override: Option<&str>) -> String {
        join_entries(
            self.base.as_str(),
            self.variant,
            self.size,
            &self.modifiers,
            class_override,
        )
    }
}

#[derive(Debug, Default)]
struct ClassList {
    out: String,
}

impl ClassList {
    fn push(&mut self, entry: &str) {
        for token in entry.split_whitespace() {
            if self.out.split(' ').any(|existing| existing == token) {
                continue;
            }
            if !self.out.is_empty() {
                self.out.push(' ');
            }
            self.out.push_str(token);
        }
    }

    fn push_opt(&mut self, entry: Option<&str>) {
        if let Some(entry) = entry {
            self.push(entry);
        }
    }

    fn into_string(self) -> String {
        self.out
    }
}

/// Joins `[base, variant, size, ...modifiers, class_override]`, skipping empty
/// entries, single-spacing tokens, and dropping repeated tokens.
///
/// Override text is not validated; whatever tokens it holds are appended last.
///
/// # Errors
///
/// Returns [`ClassError::InvalidConfiguration`] when `base` holds no token.
pub fn compose(
    base: &str,
    variant: Option<&str>,
    size: Option<&str>,
    modifiers: &[&str],
    class_override: Option<&str>,
) -> Result<String, ClassError> {
    if !has_token(base) {
        return Err(ClassError::InvalidConfiguration("missing base class"));
    }
    Ok(join_entries(base, variant, size, modifiers, class_override))
}

fn join_entries(
    base: &str,
    variant: Option<&str>,
    size: Option<&str>,
    modifiers: &[&str],
    class_override: Option<&str>,
) -> String {
    let mut out = ClassList::default();
    out.push(base);
    out.push_opt(variant);
    out.push_opt(size);
    for modifier in modifiers {
        out.push(modifier);
    }
    out.push_opt(class_override);
    out.into_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Size;

    const BASE: BaseClass = BaseClass::from_static("btn");

    #[test]
    fn compose_joins_entries_in_fixed_order() {
        let class = compose(
            "btn",
            Some("btn-primary"),
            Some("btn-lg"),
            &["btn-wide", "btn-glass"],
            Some("mt-2"),
        )
        .expect("compose");
        assert_eq!(class, "btn btn-primary btn-lg btn-wide btn-glass mt-2");
    }

    #[test]
    fn compose_skips_absent_and_blank_entries() {
        let class = compose("card", None, Some(""), &["", "card-compact"], Some("   "))
            .expect("compose");
        assert_eq!(class, "card card-compact");
    }

    #[test]
    fn compose_rejects_missing_base() {
        assert_eq!(
            compose("", Some("btn-primary"), None, &[], None),
            Err(ClassError::InvalidConfiguration("missing base class"))
        );
        assert!(compose("  \t", None, None, &[], None).is_err());
    }

    #[test]
    fn override_text_passes_through_and_is_normalised() {
        let class = compose("input", None, None, &[], Some("  w-full   [&>*]:p-2 ")).expect("compose");
        assert_eq!(class, "input w-full [&>*]:p-2");
    }

    #[test]
    fn repeated_tokens_keep_first_occurrence() {
        let class = compose(
            "btn",
            Some("btn-primary"),
            None,
            &["btn-active"],
            Some("btn-primary extra"),
        )
        .expect("compose");
        assert_eq!(class, "btn btn-primary btn-active extra");
    }

    #[test]
    fn composer_order_ignores_call_order() {
        let class = ClassComposer::new(BASE)
            .modifier(true, "btn-wide")
            .size(Some("btn-sm"))
            .variant(Some("btn-error"))
            .finish(Some("ml-1"));
        assert_eq!(class, "btn btn-error btn-sm btn-wide ml-1");
    }

    #[test]
    fn composer_keeps_only_the_last_variant_and_size() {
        let class = ClassComposer::new(BASE)
            .variant(Some("btn-primary"))
            .variant(Some("btn-accent"))
            .size(Some("btn-xs"))
            .size(None)
            .finish(None);
        assert_eq!(class, "btn btn-accent");
    }

    #[test]
    fn builder_and_free_function_agree() {
        let built = ClassComposer::new(BASE)
            .variant(Some("btn-primary"))
            .size(Some("btn-lg"))
            .modifier(true, "btn-wide")
            .modifier(true, "btn-primary")
            .finish(Some(" mt-2  btn-wide"));
        let composed = compose(
            "btn",
            Some("btn-primary"),
            Some("btn-lg"),
            &["btn-wide", "btn-primary"],
            Some(" mt-2  btn-wide"),
        );
        assert_eq!(composed, Ok(built));
    }

    #[test]
    fn disabled_modifiers_contribute_nothing() {
        let class = ClassComposer::new(BASE)
            .modifier(false, "btn-wide")
            .modifier_entry(None)
            .finish(None);
        assert_eq!(class, "btn");
    }

    #[test]
    fn composition_is_repeatable() {
        let composer = ClassComposer::new(BASE)
            .variant(Some("btn-info"))
            .modifier(true, "btn-block");
        assert_eq!(composer.finish(Some("x")), composer.finish(Some("x")));
    }

    #[test]
    fn base_class_runtime_check() {
        assert_eq!(BaseClass::new("toggle").map(BaseClass::as_str), Ok("toggle"));
        assert!(BaseClass::new(" ").is_err());
    }

    #[test]
    fn size_table_never_emits_medium() {
        let table = SizeTable {
            xs: "radio-xs",
            sm: "radio-sm",
            lg: "radio-lg",
        };
        assert_eq!(table.lookup(Size::Md), None);
        assert_eq!(table.lookup(Size::Xs), Some("radio-xs"));
        assert_eq!(table.lookup(Size::Lg), Some("radio-lg"));
    }

    #[test]
    fn class_table_misses_contribute_nothing() {
        let table = ClassTable(&[(1_u8, "one"), (2, "two")]);
        assert_eq!(table.lookup(2), Some("two"));
        assert_eq!(table.lookup(3), None);
        assert_eq!(table.resolve(None), None);
    }
}
