use super::*;

const CARD_BASE: BaseClass = BaseClass::from_static("card");
const CARD_BODY_BASE: BaseClass = BaseClass::from_static("card-body");
const CARD_TITLE_BASE: BaseClass = BaseClass::from_static("card-title");
const CARD_ACTIONS_BASE: BaseClass = BaseClass::from_static("card-actions");

const CARD_SHADOWS: ClassTable<Shadow> = ClassTable(&[
    (Shadow::Sm, "shadow-sm"),
    (Shadow::Md, "shadow-md"),
    (Shadow::Lg, "shadow-lg"),
    (Shadow::Xl, "shadow-xl"),
    (Shadow::Xxl, "shadow-2xl"),
]);

const INTERACTIVE_AFFORDANCE: &str = "cursor-pointer hover:shadow-lg transition-shadow";
const DISABLED_AFFORDANCE: &str = "opacity-50 cursor-not-allowed";

// Nested controls handle their own activation.
const NESTED_CONTROLS: &str = "button, input, select, textarea, a[href]";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Declarative card styling.
pub struct CardStyle {
    /// Tighter padding.
    pub compact: bool,
    /// Drop shadow depth.
    #[serde(deserialize_with = "lenient")]
    pub shadow: Option<Shadow>,
    /// Visible border.
    pub bordered: bool,
    /// Image fills the card behind the body.
    pub image_full: bool,
    /// Pressable card.
    pub interactive: bool,
    /// Disabled; only meaningful on interactive cards.
    pub disabled: bool,
}

impl CardStyle {
    /// Composed class string.
    pub fn class(&self, class_override: Option<&str>) -> String {
        let interaction = self.interaction();
        ClassComposer::new(CARD_BASE)
            .modifier(self.compact, "card-compact")
            .modifier_entry(CARD_SHADOWS.resolve(self.shadow))
            .modifier(self.bordered, "card-bordered")
            .modifier(self.image_full, "image-full")
            .modifier_entry(interaction.affordance_class())
            .finish(class_override)
    }

    /// Activation contract derived from the interactive and disabled flags.
    pub fn interaction(&self) -> CardInteraction {
        CardInteraction {
            interactive: self.interactive,
            disabled: self.disabled,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Press contract of a card.
///
/// A static card has no role, no tab stop and ignores activation. An
/// interactive card behaves like a button; disabling it drops it from the
/// tab order and blocks every activation path.
pub struct CardInteraction {
    /// Card acts as a button.
    pub interactive: bool,
    /// Activation blocked.
    pub disabled: bool,
}

impl CardInteraction {
    /// Accessibility role; a consumer-supplied role always wins.
    pub fn role(&self, custom: Option<&str>) -> Option<String> {
        match custom {
            Some(custom) => Some(custom.to_string()),
            None => self.interactive.then(|| "button".to_string()),
        }
    }

    /// `tabindex` attribute value, absent on static cards.
    pub fn tab_index(&self) -> Option<i32> {
        match (self.interactive, self.disabled) {
            (false, _) => None,
            (true, false) => Some(0),
            (true, true) => Some(-1),
        }
    }

    /// `aria-disabled` attribute value.
    pub fn aria_disabled(&self) -> Option<&'static str> {
        flag_attr(self.interactive && self.disabled)
    }

    /// Whether an activation gesture reaches the press handler.
    pub fn accepts_press(&self) -> bool {
        self.interactive && !self.disabled
    }

    /// Whether a key press activates the card.
    pub fn accepts_key(&self, key: &str) -> bool {
        self.accepts_press() && is_press_key(key)
    }

    /// Like [`CardInteraction::accepts_key`], for a keydown that may have
    /// bubbled up from a descendant. Only the focused card itself activates.
    pub fn accepts_key_from(&self, is_self_target: bool, key: &str) -> bool {
        is_self_target && self.accepts_key(key)
    }

    /// Whether a click activates the card. Clicks landing on a nested
    /// control belong to that control.
    pub fn accepts_click(&self, from_nested_control: bool) -> bool {
        !from_nested_control && self.accepts_press()
    }

    fn affordance_class(&self) -> Option<&'static str> {
        match (self.interactive, self.disabled) {
            (false, _) => None,
            (true, false) => Some(INTERACTIVE_AFFORDANCE),
            (true, true) => Some(DISABLED_AFFORDANCE),
        }
    }
}

fn from_nested_control(ev: &MouseEvent) -> bool {
    matches!(event_target::<web_sys::Element>(ev).closest(NESTED_CONTROLS), Ok(Some(_)))
}

#[component]
/// Content container, optionally pressable.
///
/// Sub-parts: [`CardBody`], [`CardTitle`], [`CardActions`] (also reachable
/// as `card::Body`, `card::Title`, `card::Actions`).
pub fn Card(
    #[prop(optional)] compact: bool,
    #[prop(optional)] shadow: Option<Shadow>,
    #[prop(optional)] bordered: bool,
    #[prop(optional)] image_full: bool,
    #[prop(optional)] interactive: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] aria_labelledby: Option<String>,
    #[prop(optional)] on_press: Option<Callback<PressEvent>>,
    children: Children,
) -> impl IntoView {
    let style = move || CardStyle {
        compact,
        shadow,
        bordered,
        image_full,
        interactive,
        disabled: disabled.get(),
    };
    let interaction = move || style().interaction();

    let press = move |event: PressEvent| {
        if let Some(on_press) = on_press.as_ref() {
            on_press.call(event);
        }
    };

    view! {
        <div
            class=move || style().class(class.as_deref())
            id=id
            role=move || interaction().role(role.as_deref())
            tabindex=move || interaction().tab_index()
            aria-disabled=move || interaction().aria_disabled()
            aria-label=aria_label
            aria-labelledby=aria_labelledby
            data-ui-kind="card"
            on:click=move |ev: MouseEvent| {
                if interaction().accepts_click(from_nested_control(&ev)) {
                    press(PressEvent::Pointer);
                }
            }
            on:keydown=move |ev: KeyboardEvent| {
                if interaction().accepts_key_from(ev.target() == ev.current_target(), &ev.key()) {
                    ev.prevent_default();
                    press(PressEvent::Keyboard);
                }
            }
        >
            {children()}
        </div>
    }
}

#[component]
/// Padded content region of a [`Card`].
pub fn CardBody(#[prop(optional, into)] class: Option<String>, children: Children) -> impl IntoView {
    view! {
        <div class=ClassComposer::new(CARD_BODY_BASE).finish(class.as_deref()) data-ui-kind="card-body">
            {children()}
        </div>
    }
}

#[component]
/// Heading of a [`Card`], `<h2>` unless another level is requested.
pub fn CardTitle(
    #[prop(optional)] level: HeadingLevel,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = ClassComposer::new(CARD_TITLE_BASE).finish(class.as_deref());
    let children = children();
    match level {
        HeadingLevel::H1 => view! { <h1 class=class id=id>{children}</h1> }.into_view(),
        HeadingLevel::H2 => view! { <h2 class=class id=id>{children}</h2> }.into_view(),
        HeadingLevel::H3 => view! { <h3 class=class id=id>{children}</h3> }.into_view(),
        HeadingLevel::H4 => view! { <h4 class=class id=id>{children}</h4> }.into_view(),
        HeadingLevel::H5 => view! { <h5 class=class id=id>{children}</h5> }.into_view(),
        HeadingLevel::H6 => view! { <h6 class=class id=id>{children}</h6> }.into_view(),
    }
}

pub(crate) fn card_actions_class(justify: Justify, class_override: Option<&str>) -> String {
    ClassComposer::new(CARD_ACTIONS_BASE)
        .modifier_entry(justify_class(justify))
        .finish(class_override)
}

#[component]
/// Action row of a [`Card`]; actions pack at the end by default.
pub fn CardActions(
    #[prop(optional)] justify: Justify,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=card_actions_class(justify, class.as_deref()) data-ui-kind="card-actions">
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn plain_card_has_no_interaction_surface() {
        let style = CardStyle::default();
        let interaction = style.interaction();
        assert_eq!(style.class(None), "card");
        assert_eq!(interaction.role(None), None);
        assert_eq!(interaction.tab_index(), None);
        assert_eq!(interaction.aria_disabled(), None);
        assert!(!interaction.accepts_press());
    }

    #[test]
    fn disabled_flag_is_ignored_on_static_cards() {
        let style = CardStyle {
            disabled: true,
            ..CardStyle::default()
        };
        assert_eq!(style.class(None), "card");
        assert_eq!(style.interaction().tab_index(), None);
        assert_eq!(style.interaction().role(None), None);
    }

    #[test]
    fn modifiers_compose_in_declaration_order() {
        let style = CardStyle {
            compact: true,
            shadow: Some(Shadow::Lg),
            bordered: true,
            image_full: true,
            interactive: true,
            disabled: false,
        };
        assert_eq!(
            style.class(Some("w-96")),
            "card card-compact shadow-lg card-bordered image-full cursor-pointer hover:shadow-lg transition-shadow w-96"
        );
    }

    #[test]
    fn every_shadow_depth_has_a_class() {
        for shadow in Shadow::ALL {
            let style = CardStyle {
                shadow: Some(shadow),
                ..CardStyle::default()
            };
            assert_eq!(style.class(None), format!("card shadow-{}", shadow.token()));
        }
    }

    #[test]
    fn interactive_card_acts_as_button() {
        let interaction = CardInteraction {
            interactive: true,
            disabled: false,
        };
        assert_eq!(interaction.role(None).as_deref(), Some("button"));
        assert_eq!(interaction.role(Some("article")).as_deref(), Some("article"));
        assert_eq!(interaction.tab_index(), Some(0));
        assert!(interaction.accepts_press());
        assert!(interaction.accepts_key("Enter"));
        assert!(interaction.accepts_key(" "));
        assert!(!interaction.accepts_key("Tab"));
    }

    #[test]
    fn disabled_interactive_card_blocks_every_activation() {
        let style = CardStyle {
            interactive: true,
            disabled: true,
            ..CardStyle::default()
        };
        let interaction = style.interaction();
        let activations = [
            interaction.accepts_press(),
            interaction.accepts_key("Enter"),
            interaction.accepts_key(" "),
        ];
        assert_eq!(activations, [false, false, false]);
        assert_eq!(interaction.tab_index(), Some(-1));
        assert_eq!(interaction.aria_disabled(), Some("true"));
        assert_eq!(style.class(None), "card opacity-50 cursor-not-allowed");
    }

    #[test]
    fn keys_bubbling_from_descendants_never_activate() {
        let interaction = CardInteraction {
            interactive: true,
            disabled: false,
        };
        assert!(interaction.accepts_key_from(true, " "));
        assert!(interaction.accepts_key_from(true, "Enter"));
        assert!(!interaction.accepts_key_from(false, " "));
        assert!(!interaction.accepts_key_from(false, "Enter"));

        let disabled = CardInteraction {
            interactive: true,
            disabled: true,
        };
        assert!(!disabled.accepts_key_from(true, "Enter"));
    }

    #[test]
    fn clicks_on_nested_controls_stay_with_the_control() {
        let interaction = CardInteraction {
            interactive: true,
            disabled: false,
        };
        assert!(interaction.accepts_click(false));
        assert!(!interaction.accepts_click(true));
        assert!(!CardInteraction::default().accepts_click(false));
    }

    #[test]
    fn card_actions_justify_defaults_to_end() {
        assert_eq!(card_actions_class(Justify::default(), None), "card-actions justify-end");
        assert_eq!(
            card_actions_class(Justify::Center, Some("mt-4")),
            "card-actions justify-center mt-4"
        );
    }

    #[test]
    fn card_style_decodes_shadow_tokens() {
        let style: CardStyle =
            serde_json::from_str(r#"{"shadow":"2xl","bordered":true}"#).expect("decode");
        assert_eq!(style.class(None), "card shadow-2xl card-bordered");
        let style: CardStyle = serde_json::from_str(r#"{"shadow":"3xl"}"#).expect("decode");
        assert_eq!(style.shadow, None);
    }
}
