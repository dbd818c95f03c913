use super::*;

const CHECKBOX_BASE: BaseClass = BaseClass::from_static("checkbox");
const TOGGLE_BASE: BaseClass = BaseClass::from_static("toggle");
const RADIO_BASE: BaseClass = BaseClass::from_static("radio");
const RADIO_GROUP_BASE: BaseClass = BaseClass::from_static("form-control");

const CHECKBOX_VARIANTS: ClassTable<Variant> = ClassTable(&[
    (Variant::Primary, "checkbox-primary"),
    (Variant::Secondary, "checkbox-secondary"),
    (Variant::Accent, "checkbox-accent"),
    (Variant::Neutral, "checkbox-neutral"),
    (Variant::Info, "checkbox-info"),
    (Variant::Success, "checkbox-success"),
    (Variant::Warning, "checkbox-warning"),
    (Variant::Error, "checkbox-error"),
]);

const TOGGLE_VARIANTS: ClassTable<Variant> = ClassTable(&[
    (Variant::Primary, "toggle-primary"),
    (Variant::Secondary, "toggle-secondary"),
    (Variant::Accent, "toggle-accent"),
    (Variant::Neutral, "toggle-neutral"),
    (Variant::Info, "toggle-info"),
    (Variant::Success, "toggle-success"),
    (Variant::Warning, "toggle-warning"),
    (Variant::Error, "toggle-error"),
]);

const RADIO_VARIANTS: ClassTable<Variant> = ClassTable(&[
    (Variant::Primary, "radio-primary"),
    (Variant::Secondary, "radio-secondary"),
    (Variant::Accent, "radio-accent"),
    (Variant::Info, "radio-info"),
    (Variant::Success, "radio-success"),
    (Variant::Warning, "radio-warning"),
    (Variant::Error, "radio-error"),
]);

const CHECKBOX_SIZES: SizeTable = SizeTable {
    xs: "checkbox-xs",
    sm: "checkbox-sm",
    lg: "checkbox-lg",
};

const TOGGLE_SIZES: SizeTable = SizeTable {
    xs: "toggle-xs",
    sm: "toggle-sm",
    lg: "toggle-lg",
};

const RADIO_SIZES: SizeTable = SizeTable {
    xs: "radio-xs",
    sm: "radio-sm",
    lg: "radio-lg",
};

const ORIENTATION_CLASSES: ClassTable<Orientation> = ClassTable(&[
    (Orientation::Vertical, "space-y-2"),
    (Orientation::Horizontal, "flex flex-row gap-4"),
]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Selection controls sharing the variant/size styling scheme.
pub enum ToggleKind {
    /// `checkbox` classes.
    Checkbox,
    /// `toggle` classes (switches).
    Switch,
    /// `radio` classes.
    Radio,
}

impl ToggleKind {
    fn tables(self) -> (BaseClass, ClassTable<Variant>, SizeTable) {
        match self {
            Self::Checkbox => (CHECKBOX_BASE, CHECKBOX_VARIANTS, CHECKBOX_SIZES),
            Self::Switch => (TOGGLE_BASE, TOGGLE_VARIANTS, TOGGLE_SIZES),
            Self::Radio => (RADIO_BASE, RADIO_VARIANTS, RADIO_SIZES),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Declarative styling of a checkbox, switch or radio.
pub struct ToggleStyle {
    /// Style family; ghost and link are not styled here.
    #[serde(deserialize_with = "lenient")]
    pub variant: Option<Variant>,
    /// Size; medium adds nothing.
    #[serde(deserialize_with = "lenient_or_default")]
    pub size: Size,
}

impl ToggleStyle {
    /// Composed class string for `kind`.
    pub fn class(&self, kind: ToggleKind, class_override: Option<&str>) -> String {
        let (base, variants, sizes) = kind.tables();
        ClassComposer::new(base)
            .variant(variants.resolve(self.variant))
            .size(sizes.lookup(self.size))
            .finish(class_override)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Declarative styling of a radio group container.
pub struct RadioGroupStyle {
    /// Layout direction.
    #[serde(deserialize_with = "lenient_or_default")]
    pub orientation: Orientation,
}

impl RadioGroupStyle {
    /// Composed class string.
    pub fn class(&self, class_override: Option<&str>) -> String {
        ClassComposer::new(RADIO_GROUP_BASE)
            .modifier_entry(ORIENTATION_CLASSES.lookup(self.orientation))
            .finish(class_override)
    }
}

/// `aria-checked` override for a native checkbox: only the mixed state needs
/// announcing, checked and unchecked come from the input itself.
fn mixed_state_attr(indeterminate: bool) -> Option<&'static str> {
    indeterminate.then_some("mixed")
}

#[component]
/// Themed checkbox with an optional trailing label.
pub fn Checkbox(
    #[prop(optional)] variant: Option<Variant>,
    #[prop(optional)] size: Size,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional, into)] indeterminate: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] required: MaybeSignal<bool>,
    #[prop(optional, into)] invalid: MaybeSignal<bool>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] value: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_change: Option<Callback<bool>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let class = ToggleStyle { variant, size }.class(ToggleKind::Checkbox, class.as_deref());
    view! {
        <label class="label cursor-pointer justify-start gap-2" data-ui-kind="checkbox-field">
            <input
                type="checkbox"
                class=class
                name=name
                value=value
                aria-label=aria_label
                aria-checked=move || mixed_state_attr(indeterminate.get())
                aria-required=move || flag_attr(required.get())
                aria-invalid=move || flag_attr(invalid.get())
                prop:checked=move || selected.get()
                prop:indeterminate=move || indeterminate.get()
                required=move || required.get()
                disabled=move || disabled.get()
                data-ui-kind="checkbox"
                on:change=move |ev| {
                    if let Some(on_change) = on_change.as_ref() {
                        on_change.call(event_target_checked(&ev));
                    }
                }
            />
            {children.map(|children| view! { <span class="label-text">{children()}</span> })}
        </label>
    }
}

#[component]
/// Themed on/off switch with an optional trailing label.
pub fn Switch(
    #[prop(optional)] variant: Option<Variant>,
    #[prop(optional)] size: Size,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_change: Option<Callback<bool>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let class = ToggleStyle { variant, size }.class(ToggleKind::Switch, class.as_deref());
    view! {
        <label class="label cursor-pointer justify-start gap-2" data-ui-kind="switch-field">
            <input
                type="checkbox"
                role="switch"
                class=class
                name=name
                aria-label=aria_label
                prop:checked=move || selected.get()
                disabled=move || disabled.get()
                data-ui-kind="switch"
                on:change=move |ev| {
                    if let Some(on_change) = on_change.as_ref() {
                        on_change.call(event_target_checked(&ev));
                    }
                }
            />
            {children.map(|children| view! { <span class="label-text">{children()}</span> })}
        </label>
    }
}

#[derive(Clone)]
struct RadioGroupContext {
    name: String,
    value: Signal<Option<String>>,
    disabled: Signal<bool>,
    required: bool,
    on_change: Option<Callback<String>>,
}

#[component]
/// Single-choice group; [`Radio`] children share its name, value and disabled state.
pub fn RadioGroup(
    #[prop(optional)] orientation: Orientation,
    #[prop(optional, into)] value: MaybeSignal<Option<String>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] error_message: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    children: Children,
) -> impl IntoView {
    let ids = FieldIds::generate("radio-group");
    let context = RadioGroupContext {
        name: name.unwrap_or_else(|| ids.control.clone()),
        value: Signal::derive(move || value.get()),
        disabled: Signal::derive(move || disabled.get()),
        required,
        on_change,
    };

    let class = RadioGroupStyle { orientation }.class(class.as_deref());
    let described_by = ids.described_by(description.is_some(), error_message.is_some());
    let invalid = error_message.is_some();

    view! {
        <div
            class=class
            id=ids.control.clone()
            role="radiogroup"
            aria-orientation=orientation.token()
            aria-labelledby=label.is_some().then(|| ids.label.clone())
            aria-describedby=described_by
            aria-required=flag_attr(required)
            aria-invalid=flag_attr(invalid)
            aria-disabled=move || flag_attr(disabled.get())
            data-ui-kind="radio-group"
        >
            {label.map(|label| view! {
                <div class="label">
                    <span class="label-text font-medium" id=ids.label.clone()>
                        {label}
                        {required.then(|| view! { <span class="text-error ml-1" aria-hidden="true">"*"</span> })}
                    </span>
                </div>
            })}
            {description.map(|description| view! {
                <div class="label">
                    <span class="label-text-alt text-base-content/70" id=ids.description.clone()>{description}</span>
                </div>
            })}
            <div>
                <Provider value=context>{children()}</Provider>
            </div>
            {error_message.map(|error_message| view! {
                <div class="label">
                    <span class="label-text-alt text-error" id=ids.error.clone()>{error_message}</span>
                </div>
            })}
        </div>
    }
}

#[component]
/// Themed radio button; place inside a [`RadioGroup`].
pub fn Radio(
    #[prop(into)] value: String,
    #[prop(optional)] variant: Option<Variant>,
    #[prop(optional)] size: Size,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let class = ToggleStyle { variant, size }.class(ToggleKind::Radio, class.as_deref());
    let group = use_context::<RadioGroupContext>();
    if group.is_none() {
        logging::debug_warn!("Radio `{value}` rendered outside a RadioGroup");
    }

    let name = group.as_ref().map(|group| group.name.clone());
    let required = group.as_ref().is_some_and(|group| group.required);
    let group_value = group.as_ref().map(|group| group.value);
    let group_disabled = group.as_ref().map(|group| group.disabled);
    let on_change = group.and_then(|group| group.on_change);

    let own_value = value.clone();
    let checked = move || {
        group_value
            .map(|current| current.get().as_deref() == Some(own_value.as_str()))
            .unwrap_or(false)
    };
    let is_disabled = move || disabled.get() || group_disabled.is_some_and(|group| group.get());

    view! {
        <label class="label cursor-pointer justify-start gap-2" data-ui-kind="radio-field">
            <input
                type="radio"
                class=class
                name=name
                value=value.clone()
                aria-label=aria_label
                prop:checked=checked
                required=required
                disabled=is_disabled
                data-ui-kind="radio"
                on:change=move |ev| {
                    if event_target_checked(&ev) {
                        if let Some(on_change) = on_change.as_ref() {
                            on_change.call(value.clone());
                        }
                    }
                }
            />
            {children.map(|children| view! { <span class="label-text">{children()}</span> })}
        </label>
    }
}
