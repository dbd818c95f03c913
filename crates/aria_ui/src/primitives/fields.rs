use super::*;

const INPUT_BASE: BaseClass = BaseClass::from_static("input");
const TEXTAREA_BASE: BaseClass = BaseClass::from_static("textarea");
const SELECT_BASE: BaseClass = BaseClass::from_static("select");
const WRAPPER_BASE: BaseClass = BaseClass::from_static("form-control");
const SELECT_ITEM_BASE: BaseClass = BaseClass::from_static("cursor-pointer p-2 hover:bg-base-200 rounded");

const INPUT_VARIANTS: ClassTable<Variant> = ClassTable(&[
    (Variant::Primary, "input-primary"),
    (Variant::Secondary, "input-secondary"),
    (Variant::Accent, "input-accent"),
    (Variant::Info, "input-info"),
    (Variant::Success, "input-success"),
    (Variant::Warning, "input-warning"),
    (Variant::Error, "input-error"),
]);

const TEXTAREA_VARIANTS: ClassTable<Variant> = ClassTable(&[
    (Variant::Primary, "textarea-primary"),
    (Variant::Secondary, "textarea-secondary"),
    (Variant::Accent, "textarea-accent"),
    (Variant::Info, "textarea-info"),
    (Variant::Success, "textarea-success"),
    (Variant::Warning, "textarea-warning"),
    (Variant::Error, "textarea-error"),
]);

const SELECT_VARIANTS: ClassTable<Variant> = ClassTable(&[
    (Variant::Primary, "select-primary"),
    (Variant::Secondary, "select-secondary"),
    (Variant::Accent, "select-accent"),
    (Variant::Neutral, "select-neutral"),
    (Variant::Info, "select-info"),
    (Variant::Success, "select-success"),
    (Variant::Warning, "select-warning"),
    (Variant::Error, "select-error"),
]);

const INPUT_SIZES: SizeTable = SizeTable {
    xs: "input-xs",
    sm: "input-sm",
    lg: "input-lg",
};

const TEXTAREA_SIZES: SizeTable = SizeTable {
    xs: "textarea-xs",
    sm: "textarea-sm",
    lg: "textarea-lg",
};

const SELECT_SIZES: SizeTable = SizeTable {
    xs: "select-xs",
    sm: "select-sm",
    lg: "select-lg",
};

const DEFAULT_SELECT_PLACEHOLDER: &str = "Select an option";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Input-like controls sharing the bordered/ghost styling scheme.
pub enum FieldKind {
    /// Single-line `input` classes.
    Input,
    /// Multiline `textarea` classes.
    TextArea,
    /// `select` classes.
    Select,
}

struct FieldTables {
    base: BaseClass,
    variants: ClassTable<Variant>,
    sizes: SizeTable,
    bordered: &'static str,
    ghost: &'static str,
}

impl FieldKind {
    fn tables(self) -> FieldTables {
        match self {
            Self::Input => FieldTables {
                base: INPUT_BASE,
                variants: INPUT_VARIANTS,
                sizes: INPUT_SIZES,
                bordered: "input-bordered",
                ghost: "input-ghost",
            },
            Self::TextArea => FieldTables {
                base: TEXTAREA_BASE,
                variants: TEXTAREA_VARIANTS,
                sizes: TEXTAREA_SIZES,
                bordered: "textarea-bordered",
                ghost: "textarea-ghost",
            },
            Self::Select => FieldTables {
                base: SELECT_BASE,
                variants: SELECT_VARIANTS,
                sizes: SELECT_SIZES,
                bordered: "select-bordered",
                ghost: "select-ghost",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Declarative styling of a text field, text area or select.
pub struct FieldStyle {
    /// Style family.
    #[serde(deserialize_with = "lenient")]
    pub variant: Option<Variant>,
    /// Size; medium adds nothing.
    #[serde(deserialize_with = "lenient_or_default")]
    pub size: Size,
    /// Bordered rendering, on unless ghost takes over.
    pub bordered: bool,
    /// Ghost rendering; suppresses the border.
    pub ghost: bool,
}

impl Default for FieldStyle {
    fn default() -> Self {
        Self {
            variant: None,
            size: Size::Md,
            bordered: true,
            ghost: false,
        }
    }
}

impl FieldStyle {
    /// Composed class string for `kind`.
    pub fn class(&self, kind: FieldKind, class_override: Option<&str>) -> String {
        let tables = kind.tables();
        ClassComposer::new(tables.base)
            .variant(tables.variants.resolve(self.variant))
            .size(tables.sizes.lookup(self.size))
            .modifier(self.bordered && !self.ghost, tables.bordered)
            .modifier(self.ghost, tables.ghost)
            .finish(class_override)
    }
}

/// Select styling shares the field scheme.
pub type SelectStyle = FieldStyle;

#[derive(Clone, Copy)]
struct SelectedKey(Signal<Option<String>>);

fn field_wrapper_class(class_override: Option<&str>) -> String {
    ClassComposer::new(WRAPPER_BASE).finish(class_override)
}

#[component]
/// Labelled single-line text input.
///
/// Label, description and error message are wired to the input through
/// generated ids; an error message also marks the input invalid.
pub fn TextField(
    #[prop(optional)] variant: Option<Variant>,
    #[prop(optional)] size: Size,
    #[prop(default = true)] bordered: bool,
    #[prop(optional)] ghost: bool,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] error_message: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] read_only: MaybeSignal<bool>,
    #[prop(optional, into)] required: MaybeSignal<bool>,
    #[prop(optional, into)] invalid: MaybeSignal<bool>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] wrapper_class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
) -> impl IntoView {
    let ids = FieldIds::generate("text-field");
    let class = FieldStyle {
        variant,
        size,
        bordered,
        ghost,
    }
    .class(FieldKind::Input, class.as_deref());
    let has_error = error_message.is_some();
    let described_by = ids.described_by(description.is_some(), has_error);

    view! {
        <div class=field_wrapper_class(wrapper_class.as_deref()) data-ui-kind="text-field">
            {label.map(|label| view! {
                <label class="label" for=ids.control.clone() id=ids.label.clone()>
                    <span class="label-text">{label}</span>
                </label>
            })}
            <input
                class=class
                id=ids.control.clone()
                type=input_type.unwrap_or("text")
                name=name
                placeholder=placeholder
                autocomplete=autocomplete
                aria-label=aria_label
                aria-describedby=described_by
                aria-invalid=move || flag_attr(invalid.get() || has_error)
                aria-required=move || flag_attr(required.get())
                node_ref=node_ref
                prop:value=move || value.get()
                disabled=move || disabled.get()
                readonly=move || read_only.get()
                required=move || required.get()
                data-ui-kind="text-input"
                on:input=move |ev| {
                    if let Some(on_change) = on_change.as_ref() {
                        on_change.call(event_target_value(&ev));
                    }
                }
                on:keydown=move |ev| {
                    if let Some(on_keydown) = on_keydown.as_ref() {
                        on_keydown.call(ev);
                    }
                }
            />
            {description.map(|description| view! {
                <span class="label" id=ids.description.clone()>
                    <span class="label-text-alt">{description}</span>
                </span>
            })}
            {error_message.map(|error_message| view! {
                <span class="label" id=ids.error.clone() role="alert">
                    <span class="label-text-alt text-error">{error_message}</span>
                </span>
            })}
        </div>
    }
}

#[component]
/// Labelled multiline text input.
pub fn TextArea(
    #[prop(optional)] variant: Option<Variant>,
    #[prop(optional)] size: Size,
    #[prop(default = true)] bordered: bool,
    #[prop(optional)] ghost: bool,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] error_message: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional)] rows: Option<u32>,
    #[prop(optional)] cols: Option<u32>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] read_only: MaybeSignal<bool>,
    #[prop(optional, into)] required: MaybeSignal<bool>,
    #[prop(optional, into)] invalid: MaybeSignal<bool>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] wrapper_class: Option<String>,
    #[prop(optional)] on_change: Option<Callback<String>>,
) -> impl IntoView {
    let ids = FieldIds::generate("text-area");
    let class = FieldStyle {
        variant,
        size,
        bordered,
        ghost,
    }
    .class(FieldKind::TextArea, class.as_deref());
    let has_error = error_message.is_some();
    let described_by = ids.described_by(description.is_some(), has_error);

    view! {
        <div class=field_wrapper_class(wrapper_class.as_deref()) data-ui-kind="text-area">
            {label.map(|label| view! {
                <label class="label" for=ids.control.clone() id=ids.label.clone()>
                    <span class="label-text">{label}</span>
                </label>
            })}
            <textarea
                class=class
                id=ids.control.clone()
                name=name
                placeholder=placeholder
                rows=rows
                cols=cols
                aria-label=aria_label
                aria-describedby=described_by
                aria-invalid=move || flag_attr(invalid.get() || has_error)
                aria-required=move || flag_attr(required.get())
                prop:value=move || value.get()
                disabled=move || disabled.get()
                readonly=move || read_only.get()
                required=move || required.get()
                data-ui-kind="text-area-input"
                on:input=move |ev| {
                    if let Some(on_change) = on_change.as_ref() {
                        on_change.call(event_target_value(&ev));
                    }
                }
            ></textarea>
            {description.map(|description| view! {
                <span class="label" id=ids.description.clone()>
                    <span class="label-text-alt">{description}</span>
                </span>
            })}
            {error_message.map(|error_message| view! {
                <span class="label" id=ids.error.clone() role="alert">
                    <span class="label-text-alt text-error">{error_message}</span>
                </span>
            })}
        </div>
    }
}

#[component]
/// Themed single-choice select with a placeholder entry.
///
/// `selected_key` holds the chosen [`SelectItem`] id; `None` shows the placeholder.
pub fn Select(
    #[prop(optional)] variant: Option<Variant>,
    #[prop(optional)] size: Size,
    #[prop(default = true)] bordered: bool,
    #[prop(optional)] ghost: bool,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] selected_key: MaybeSignal<Option<String>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] required: MaybeSignal<bool>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] on_selection_change: Option<Callback<String>>,
    children: Children,
) -> impl IntoView {
    let class = SelectStyle {
        variant,
        size,
        bordered,
        ghost,
    }
    .class(FieldKind::Select, class.as_deref());
    let placeholder = placeholder.unwrap_or_else(|| DEFAULT_SELECT_PLACEHOLDER.to_string());
    let selected_key = Signal::derive(move || selected_key.get());

    view! {
        <select
            class=class
            name=name
            aria-label=aria_label
            aria-required=move || flag_attr(required.get())
            prop:value=move || selected_key.get().unwrap_or_default()
            disabled=move || disabled.get()
            required=move || required.get()
            data-ui-kind="select"
            on:change=move |ev| {
                let key = event_target_value(&ev);
                if key.is_empty() {
                    return;
                }
                if let Some(on_selection_change) = on_selection_change.as_ref() {
                    on_selection_change.call(key);
                }
            }
        >
            <option value="" disabled=true selected=move || selected_key.get().is_none()>
                {placeholder}
            </option>
            <Provider value=SelectedKey(selected_key)>{children()}</Provider>
        </select>
    }
}

#[component]
/// Option of a [`Select`], identified by `id`.
pub fn SelectItem(
    #[prop(into)] id: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let selected_key = use_context::<SelectedKey>();
    let key = id.clone();
    let selected = move || {
        selected_key.is_some_and(|SelectedKey(current)| {
            current.with(|current| current.as_deref() == Some(key.as_str()))
        })
    };
    view! {
        <option
            class=ClassComposer::new(SELECT_ITEM_BASE).finish(class.as_deref())
            value=id
            selected=selected
            disabled=move || disabled.get()
            data-ui-kind="select-item"
        >
            {children()}
        </option>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn fields_are_bordered_by_default() {
        let style = FieldStyle::default();
        assert_eq!(style.class(FieldKind::Input, None), "input input-bordered");
        assert_eq!(style.class(FieldKind::TextArea, None), "textarea textarea-bordered");
        assert_eq!(style.class(FieldKind::Select, None), "select select-bordered");
    }

    #[test]
    fn ghost_suppresses_border_even_when_bordered() {
        let style = FieldStyle {
            ghost: true,
            bordered: true,
            ..FieldStyle::default()
        };
        for (kind, expected) in [
            (FieldKind::Input, "input input-ghost"),
            (FieldKind::TextArea, "textarea textarea-ghost"),
            (FieldKind::Select, "select select-ghost"),
        ] {
            let class = style.class(kind, None);
            assert_eq!(class, expected);
            assert!(!class.contains("bordered"));
        }
    }

    #[test]
    fn borderless_field_is_base_only() {
        let style = FieldStyle {
            bordered: false,
            ..FieldStyle::default()
        };
        assert_eq!(style.class(FieldKind::Input, None), "input");
    }

    #[test]
    fn variant_and_size_precede_modifiers_and_override() {
        let style = FieldStyle {
            variant: Some(Variant::Warning),
            size: Size::Xs,
            ..FieldStyle::default()
        };
        assert_eq!(
            style.class(FieldKind::Input, Some("w-full")),
            "input input-warning input-xs input-bordered w-full"
        );
        assert_eq!(
            style.class(FieldKind::Select, None),
            "select select-warning select-xs select-bordered"
        );
    }

    #[test]
    fn neutral_is_only_styled_on_selects() {
        let style = FieldStyle {
            variant: Some(Variant::Neutral),
            bordered: false,
            ..FieldStyle::default()
        };
        assert_eq!(style.class(FieldKind::Input, None), "input");
        assert_eq!(style.class(FieldKind::TextArea, None), "textarea");
        assert_eq!(style.class(FieldKind::Select, None), "select select-neutral");
    }

    #[test]
    fn medium_size_adds_nothing() {
        for kind in [FieldKind::Input, FieldKind::TextArea, FieldKind::Select] {
            let medium = FieldStyle::default().class(kind, None);
            assert_eq!(medium.split(' ').count(), 2);
        }
    }

    #[test]
    fn wrapper_keeps_override_last() {
        assert_eq!(field_wrapper_class(None), "form-control");
        assert_eq!(field_wrapper_class(Some("w-full max-w-xs")), "form-control w-full max-w-xs");
    }

    #[test]
    fn field_style_decodes_with_border_default() {
        let style: FieldStyle = serde_json::from_str(r#"{"size":"sm"}"#).expect("decode");
        assert!(style.bordered);
        assert_eq!(style.class(FieldKind::TextArea, None), "textarea textarea-sm textarea-bordered");

        let style: FieldStyle =
            serde_json::from_str(r#"{"ghost":true,"variant":"link"}"#).expect("decode");
        assert_eq!(style.class(FieldKind::Input, None), "input input-ghost");
    }
}
