use super::*;
use crate::press::{BrowserScheduler, PressPulse, PressResponder};

const BUTTON_BASE: BaseClass = BaseClass::from_static("btn");

const BUTTON_VARIANTS: ClassTable<Variant> = ClassTable(&[
    (Variant::Primary, "btn-primary"),
    (Variant::Secondary, "btn-secondary"),
    (Variant::Accent, "btn-accent"),
    (Variant::Neutral, "btn-neutral"),
    (Variant::Info, "btn-info"),
    (Variant::Success, "btn-success"),
    (Variant::Warning, "btn-warning"),
    (Variant::Error, "btn-error"),
    (Variant::Ghost, "btn-ghost"),
    (Variant::Link, "btn-link"),
]);

// Outline folds into the variant entry so the pair stays adjacent and ordered.
const BUTTON_OUTLINE_VARIANTS: ClassTable<Variant> = ClassTable(&[
    (Variant::Primary, "btn-outline btn-primary"),
    (Variant::Secondary, "btn-outline btn-secondary"),
    (Variant::Accent, "btn-outline btn-accent"),
    (Variant::Neutral, "btn-outline btn-neutral"),
    (Variant::Info, "btn-outline btn-info"),
    (Variant::Success, "btn-outline btn-success"),
    (Variant::Warning, "btn-outline btn-warning"),
    (Variant::Error, "btn-outline btn-error"),
    (Variant::Ghost, "btn-outline btn-ghost"),
    (Variant::Link, "btn-outline btn-link"),
]);

const BUTTON_SIZES: SizeTable = SizeTable {
    xs: "btn-xs",
    sm: "btn-sm",
    lg: "btn-lg",
};

const LOADING_INDICATOR: &str = "loading loading-spinner loading-sm mr-2";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Declarative button styling.
pub struct ButtonStyle {
    /// Style family.
    #[serde(deserialize_with = "lenient")]
    pub variant: Option<Variant>,
    /// Size; medium adds nothing.
    #[serde(deserialize_with = "lenient_or_default")]
    pub size: Size,
    /// Outlined rendering.
    pub outline: bool,
    /// Extra horizontal padding.
    pub wide: bool,
    /// Full container width.
    pub block: bool,
    /// Circular shape.
    pub circle: bool,
    /// Square shape.
    pub square: bool,
    /// Glass effect.
    pub glass: bool,
    /// Loading state; also makes the button inert.
    pub loading: bool,
    /// Persistent active look.
    pub active: bool,
}

impl ButtonStyle {
    /// Composed class string. `pressed` is the transient press pulse and
    /// shares the `btn-active` class with [`ButtonStyle::active`].
    pub fn class(&self, pressed: bool, class_override: Option<&str>) -> String {
        let variant = if self.outline {
            BUTTON_OUTLINE_VARIANTS.resolve(self.variant)
        } else {
            BUTTON_VARIANTS.resolve(self.variant)
        };
        ClassComposer::new(BUTTON_BASE)
            .variant(variant)
            .size(BUTTON_SIZES.lookup(self.size))
            .modifier(self.outline && self.variant.is_none(), "btn-outline")
            .modifier(self.wide, "btn-wide")
            .modifier(self.block, "btn-block")
            .modifier(self.circle, "btn-circle")
            .modifier(self.square, "btn-square")
            .modifier(self.glass, "btn-glass")
            .modifier(self.active || pressed, "btn-active")
            .modifier(self.loading, "loading")
            .finish(class_override)
    }

    /// A loading button never accepts interaction, whatever `disabled` says.
    pub fn is_inert(&self, disabled: bool) -> bool {
        disabled || self.loading
    }
}

#[component]
/// Themed button with loading and transient pressed feedback.
///
/// Presses come from the native `click`, which the browser also fires for
/// Enter/Space while focused, so submit and reset buttons keep their form
/// behaviour.
///
/// Inside a [`DialogTrigger`] the press also opens the dialog.
pub fn Button(
    #[prop(optional)] variant: Option<Variant>,
    #[prop(optional)] size: Size,
    #[prop(optional)] outline: bool,
    #[prop(optional)] wide: bool,
    #[prop(optional)] block: bool,
    #[prop(optional)] circle: bool,
    #[prop(optional)] square: bool,
    #[prop(optional)] glass: bool,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional, into)] active: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional)] on_press: Option<Callback<PressEvent>>,
    children: Children,
) -> impl IntoView {
    let pressed = create_rw_signal(false);
    let pulse = PressPulse::new(BrowserScheduler, move |value| {
        let _ = pressed.try_set(value);
    });
    on_cleanup({
        let pulse = pulse.clone();
        move || pulse.teardown()
    });

    let responder = use_context::<PressResponder>().unwrap_or_default();
    let style = move || ButtonStyle {
        variant,
        size,
        outline,
        wide,
        block,
        circle,
        square,
        glass,
        loading: loading.get(),
        active: active.get(),
    };
    let inert = Signal::derive(move || style().is_inert(disabled.get()));

    let press = move |event: PressEvent| {
        if inert.get_untracked() {
            return;
        }
        pulse.activate();
        if let Some(on_press) = on_press.as_ref() {
            on_press.call(event);
        }
        responder.press(event);
    };

    view! {
        <button
            type=button_type.unwrap_or("button")
            class=move || style().class(pressed.get(), class.as_deref())
            id=id
            aria-label=aria_label
            aria-busy=move || flag_attr(loading.get())
            disabled=move || inert.get()
            data-ui-kind="button"
            on:click=move |ev: MouseEvent| press(PressEvent::from_click_detail(ev.detail()))
        >
            {move || {
                loading.get().then(|| view! { <span class=LOADING_INDICATOR aria-hidden="true"></span> })
            }}
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn tokens(class: &str) -> Vec<&str> {
        class.split(' ').collect()
    }

    #[test]
    fn default_button_is_base_only() {
        assert_eq!(ButtonStyle::default().class(false, None), "btn");
    }

    #[test]
    fn outline_primary_puts_outline_first_without_duplicates() {
        let style = ButtonStyle {
            variant: Some(Variant::Primary),
            outline: true,
            ..ButtonStyle::default()
        };
        let class = style.class(false, None);
        assert_eq!(class, "btn btn-outline btn-primary");
        assert_eq!(tokens(&class).iter().filter(|t| **t == "btn-primary").count(), 1);
    }

    #[test]
    fn outline_without_variant_is_a_plain_modifier() {
        let style = ButtonStyle {
            outline: true,
            wide: true,
            ..ButtonStyle::default()
        };
        assert_eq!(style.class(false, None), "btn btn-outline btn-wide");
    }

    #[test]
    fn every_variant_emits_exactly_one_variant_token() {
        for variant in Variant::ALL {
            let style = ButtonStyle {
                variant: Some(variant),
                ..ButtonStyle::default()
            };
            let class = style.class(false, None);
            let variant_tokens: Vec<_> = tokens(&class)
                .into_iter()
                .filter(|token| Variant::ALL.iter().any(|v| *token == format!("btn-{}", v.token())))
                .collect();
            assert_eq!(variant_tokens, vec![format!("btn-{}", variant.token())]);
        }
    }

    #[test]
    fn sizes_other_than_medium_emit_one_token() {
        for size in Size::ALL {
            let style = ButtonStyle {
                size,
                ..ButtonStyle::default()
            };
            let class = style.class(false, None);
            if size == Size::Md {
                assert_eq!(class, "btn");
            } else {
                assert_eq!(class, format!("btn btn-{}", size.token()));
            }
        }
    }

    #[test]
    fn modifiers_follow_variant_and_size() {
        let style = ButtonStyle {
            variant: Some(Variant::Accent),
            size: Size::Sm,
            wide: true,
            block: true,
            circle: true,
            square: true,
            glass: true,
            loading: true,
            ..ButtonStyle::default()
        };
        assert_eq!(
            style.class(false, Some("shadow")),
            "btn btn-accent btn-sm btn-wide btn-block btn-circle btn-square btn-glass loading shadow"
        );
    }

    #[test]
    fn pressed_pulse_and_active_share_one_token() {
        let active = ButtonStyle {
            active: true,
            ..ButtonStyle::default()
        };
        assert_eq!(active.class(false, None), "btn btn-active");
        assert_eq!(active.class(true, None), "btn btn-active");
        assert_eq!(ButtonStyle::default().class(true, None), "btn btn-active");
    }

    #[test]
    fn loading_implies_inert() {
        let loading = ButtonStyle {
            loading: true,
            ..ButtonStyle::default()
        };
        assert!(loading.is_inert(false));
        assert!(ButtonStyle::default().is_inert(true));
        assert!(!ButtonStyle::default().is_inert(false));
    }

    #[test]
    fn style_decodes_from_loose_configuration() {
        let style: ButtonStyle =
            serde_json::from_str(r#"{"variant":"danger","size":"lg","outline":true}"#)
                .expect("decode");
        assert_eq!(style.variant, None);
        assert_eq!(style.class(false, None), "btn btn-lg btn-outline");
    }
}
