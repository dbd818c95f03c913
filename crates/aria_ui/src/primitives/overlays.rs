use super::*;
use crate::press::PressResponder;

const OVERLAY_BASE: BaseClass = BaseClass::from_static("modal modal-open");
const MODAL_BOX_BASE: BaseClass = BaseClass::from_static("modal-box");
const MODAL_ACTION_BASE: BaseClass = BaseClass::from_static("modal-action");

const RESPONSIVE_PLACEMENT: &str = "modal-bottom sm:modal-middle";
const RESPONSIVE_DIALOG_WIDTH: &str = "w-11/12 max-w-5xl";

const MODAL_POSITIONS: ClassTable<ModalPosition> = ClassTable(&[
    (ModalPosition::Top, "modal-top"),
    (ModalPosition::Middle, "modal-middle"),
    (ModalPosition::Bottom, "modal-bottom"),
]);

const DIALOG_WIDTHS: ClassTable<DialogWidth> = ClassTable(&[
    (DialogWidth::Sm, "max-w-sm"),
    (DialogWidth::Md, "max-w-md"),
    (DialogWidth::Lg, "max-w-lg"),
    (DialogWidth::Xl, "max-w-xl"),
]);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Declarative styling of a modal overlay.
pub struct ModalStyle {
    /// Bottom sheet on small screens, centered from `sm` up. Overrides `position`.
    pub responsive: bool,
    /// Fixed vertical placement.
    #[serde(deserialize_with = "lenient_or_default")]
    pub position: ModalPosition,
}

impl ModalStyle {
    /// Composed overlay class string.
    pub fn class(&self, class_override: Option<&str>) -> String {
        let placement = if self.responsive {
            Some(RESPONSIVE_PLACEMENT)
        } else {
            MODAL_POSITIONS.lookup(self.position)
        };
        ClassComposer::new(OVERLAY_BASE)
            .modifier_entry(placement)
            .finish(class_override)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Declarative styling of a dialog box.
pub struct DialogStyle {
    /// Maximum width.
    #[serde(deserialize_with = "lenient_or_default")]
    pub width: DialogWidth,
    /// Near full-width box on small screens.
    pub responsive: bool,
}

impl DialogStyle {
    /// Composed dialog box class string.
    pub fn class(&self, class_override: Option<&str>) -> String {
        ClassComposer::new(MODAL_BOX_BASE)
            .modifier_entry(DIALOG_WIDTHS.lookup(self.width))
            .modifier(self.responsive, RESPONSIVE_DIALOG_WIDTH)
            .finish(class_override)
    }
}

fn dialog_overlay_class(responsive: bool, class_override: Option<&str>) -> String {
    ClassComposer::new(OVERLAY_BASE)
        .modifier(responsive, RESPONSIVE_PLACEMENT)
        .finish(class_override)
}

fn modal_action_class(justify: Justify, class_override: Option<&str>) -> String {
    ClassComposer::new(MODAL_ACTION_BASE)
        .modifier_entry(justify_class(justify))
        .finish(class_override)
}

/// Whether a keydown dismisses the overlay. A handled Escape is left alone so
/// stacked overlays close one at a time.
fn dismisses_on_key(key: &str, open: bool, keyboard_dismiss_disabled: bool, handled: bool) -> bool {
    key == "Escape" && open && !keyboard_dismiss_disabled && !handled
}

#[component]
fn OverlayFrame(
    class: String,
    kind: &'static str,
    open: Signal<bool>,
    dismissable: bool,
    keyboard_dismiss_disabled: bool,
    on_dismiss: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if dismisses_on_key(
            &ev.key(),
            open.get_untracked(),
            keyboard_dismiss_disabled,
            ev.default_prevented(),
        ) {
            ev.prevent_default();
            on_dismiss.call(());
        }
    });
    on_cleanup(move || escape_listener.remove());

    view! {
        <Show when=move || open.get()>
            <div
                class=class.clone()
                role="presentation"
                data-ui-kind=kind
                on:click=move |ev: MouseEvent| {
                    if dismissable && ev.target() == ev.current_target() {
                        on_dismiss.call(());
                    }
                }
            >
                {children()}
            </div>
        </Show>
    }
}

#[component]
/// Controlled modal overlay.
///
/// Clicking the backdrop (when `backdrop` is set) or pressing Escape reports
/// `false` through `on_open_change`; the caller owns the open state. Compose
/// the content from [`ModalBox`] and [`ModalAction`] (also `modal::Box`,
/// `modal::Action`).
pub fn Modal(
    #[prop(into)] open: MaybeSignal<bool>,
    #[prop(optional)] on_open_change: Option<Callback<bool>>,
    #[prop(optional)] responsive: bool,
    #[prop(optional)] position: ModalPosition,
    #[prop(default = true)] backdrop: bool,
    #[prop(optional)] keyboard_dismiss_disabled: bool,
    #[prop(optional, into)] class: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let class = ModalStyle {
        responsive,
        position,
    }
    .class(class.as_deref());
    let on_dismiss = Callback::new(move |()| {
        if let Some(on_open_change) = on_open_change.as_ref() {
            on_open_change.call(false);
        }
    });

    view! {
        <OverlayFrame
            class=class
            kind="modal"
            open=Signal::derive(move || open.get())
            dismissable=backdrop
            keyboard_dismiss_disabled=keyboard_dismiss_disabled
            on_dismiss=on_dismiss
        >
            {children()}
        </OverlayFrame>
    }
}

#[component]
/// Content box of a [`Modal`].
pub fn ModalBox(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] aria_labelledby: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=ClassComposer::new(MODAL_BOX_BASE).finish(class.as_deref())
            id=id
            role="dialog"
            aria-modal="true"
            aria-label=aria_label
            aria-labelledby=aria_labelledby
            tabindex="-1"
            data-ui-kind="modal-box"
        >
            {children()}
        </div>
    }
}

#[component]
/// Action row of a [`Modal`]; actions pack at the end by default.
pub fn ModalAction(
    #[prop(optional)] justify: Justify,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=modal_action_class(justify, class.as_deref()) data-ui-kind="modal-action">
            {children()}
        </div>
    }
}

#[derive(Clone, Copy)]
/// Open state shared by a [`DialogTrigger`] and its overlay.
pub struct DialogState {
    open: RwSignal<bool>,
    on_open_change: Option<Callback<bool>>,
}

impl DialogState {
    fn set(&self, next: bool) {
        if self.open.get_untracked() == next {
            return;
        }
        self.open.set(next);
        if let Some(on_open_change) = self.on_open_change.as_ref() {
            on_open_change.call(next);
        }
    }

    /// Whether the dialog is open (tracked).
    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    /// Opens the dialog.
    pub fn open(&self) {
        self.set(true);
    }

    /// Closes the dialog.
    pub fn close(&self) {
        self.set(false);
    }

    /// Flips the open state.
    pub fn toggle(&self) {
        self.set(!self.open.get_untracked());
    }
}

/// Dialog state of the closest enclosing [`DialogTrigger`].
pub fn use_dialog() -> Option<DialogState> {
    use_context::<DialogState>()
}

#[component]
/// Owns a dialog's open state; any [`Button`] inside opens it.
///
/// Pass `open` to control the state from outside, otherwise it starts at
/// `default_open`. Place the dialog itself inside a [`DialogOverlay`].
pub fn DialogTrigger(
    #[prop(optional)] default_open: bool,
    #[prop(optional)] open: Option<RwSignal<bool>>,
    #[prop(optional)] on_open_change: Option<Callback<bool>>,
    children: Children,
) -> impl IntoView {
    let state = DialogState {
        open: open.unwrap_or_else(|| create_rw_signal(default_open)),
        on_open_change,
    };
    let responder = PressResponder::new(Callback::new(move |_| state.open()));
    view! {
        <Provider value=state>
            <Provider value=responder>{children()}</Provider>
        </Provider>
    }
}

#[component]
/// Backdrop layer of a dialog.
///
/// Inside a [`DialogTrigger`] it follows the trigger's state; standalone it
/// follows `open`. Buttons inside the overlay no longer reach the trigger.
pub fn DialogOverlay(
    #[prop(optional, into)] open: Option<MaybeSignal<bool>>,
    #[prop(optional)] on_open_change: Option<Callback<bool>>,
    #[prop(default = true)] backdrop: bool,
    #[prop(optional)] keyboard_dismiss_disabled: bool,
    #[prop(optional)] responsive: bool,
    #[prop(optional, into)] class: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let state = use_dialog();
    let is_open = match (open, state) {
        (Some(open), _) => Signal::derive(move || open.get()),
        (None, Some(state)) => Signal::derive(move || state.is_open()),
        (None, None) => {
            logging::debug_warn!("DialogOverlay without `open` outside a DialogTrigger stays closed");
            Signal::derive(|| false)
        }
    };
    let on_dismiss = Callback::new(move |()| {
        if let Some(state) = state {
            state.close();
        }
        if let Some(on_open_change) = on_open_change.as_ref() {
            on_open_change.call(false);
        }
    });

    view! {
        <Provider value=PressResponder::detached()>
            <OverlayFrame
                class=dialog_overlay_class(responsive, class.as_deref())
                kind="dialog-overlay"
                open=is_open
                dismissable=backdrop
                keyboard_dismiss_disabled=keyboard_dismiss_disabled
                on_dismiss=on_dismiss
            >
                {children()}
            </OverlayFrame>
        </Provider>
    }
}

#[component]
/// Dialog box rendered inside a [`DialogOverlay`].
///
/// Sub-parts are reachable as `dialog::Trigger` and `dialog::Overlay`.
pub fn Dialog(
    #[prop(optional)] width: DialogWidth,
    #[prop(optional)] responsive: bool,
    #[prop(optional)] role: Option<&'static str>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] aria_labelledby: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = DialogStyle { width, responsive }.class(class.as_deref());
    view! {
        <div
            class=class
            id=id
            role=role.unwrap_or("dialog")
            aria-modal="true"
            aria-label=aria_label
            aria-labelledby=aria_labelledby
            tabindex="-1"
            data-ui-kind="dialog"
        >
            {children()}
        </div>
    }
}
