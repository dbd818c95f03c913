//! Showcase app rendering every `aria_ui` component family.
//!
//! The page is driven by one serialisable [`ShowcaseState`] so a demo can be
//! seeded from a JSON snapshot and the live state inspected while clicking
//! through the controls.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use aria_ui::prelude::*;
use leptos::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Everything the showcase page lets the visitor change.
pub struct ShowcaseState {
    /// Number of presses on the primary button.
    pub press_count: u32,
    /// Terms checkbox.
    pub accepted_terms: bool,
    /// Notification switch.
    pub notifications: bool,
    /// Selected radio plan.
    pub plan: Option<String>,
    /// Selected theme key.
    pub theme: Option<String>,
    /// Text field contents.
    pub display_name: String,
    /// Text area contents.
    pub notes: String,
    /// Controlled modal visibility.
    pub modal_open: bool,
    /// Placement of the controlled modal.
    pub modal_position: ModalPosition,
}

impl Default for ShowcaseState {
    fn default() -> Self {
        Self {
            press_count: 0,
            accepted_terms: false,
            notifications: true,
            plan: Some("team".to_string()),
            theme: None,
            display_name: String::new(),
            notes: String::new(),
            modal_open: false,
            modal_position: ModalPosition::Middle,
        }
    }
}

impl ShowcaseState {
    /// Decodes a snapshot; missing fields take their defaults and an
    /// undecodable snapshot falls back to the default state.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(state) => state,
            Err(err) => {
                logging::warn!("showcase state decode failed: {err}");
                Self::default()
            }
        }
    }

    /// Pretty-printed snapshot, `None` when serialisation fails.
    pub fn to_json(&self) -> Option<String> {
        match serde_json::to_string_pretty(self) {
            Ok(serialized) => Some(serialized),
            Err(err) => {
                logging::warn!("showcase state serialize failed: {err}");
                None
            }
        }
    }

    fn summary(&self) -> String {
        format!(
            "Presses: {} | Plan: {} | Theme: {}",
            self.press_count,
            self.plan.as_deref().unwrap_or("none"),
            self.theme.as_deref().unwrap_or("none"),
        )
    }
}

#[component]
/// Full showcase page.
pub fn ShowcaseApp(
    /// Optional JSON snapshot used as the initial state.
    #[prop(optional, into)]
    seed: Option<String>,
) -> impl IntoView {
    let initial = seed
        .as_deref()
        .map(ShowcaseState::from_json)
        .unwrap_or_default();
    let modal_position = initial.modal_position;
    let state = create_rw_signal(initial);
    let snapshot = create_rw_signal::<Option<String>>(None);

    create_effect(move |_| {
        let next = state.with(ShowcaseState::to_json);
        if next.is_some() && snapshot.get_untracked() != next {
            snapshot.set(next);
        }
    });

    view! {
        <main class="container mx-auto space-y-8 p-6" data-ui-kind="showcase">
            <section class="space-y-3">
                <h2 class="text-xl font-bold">"Buttons"</h2>
                <div class="flex flex-wrap gap-2">
                    <Button
                        variant=Variant::Primary
                        on_press=Callback::new(move |_| state.update(|value| value.press_count += 1))
                    >
                        "Primary"
                    </Button>
                    <Button variant=Variant::Secondary outline=true>"Outline"</Button>
                    <Button variant=Variant::Accent size=Size::Sm loading=true>"Saving"</Button>
                    <Button variant=Variant::Ghost disabled=true>"Disabled"</Button>
                    <Button variant=Variant::Link size=Size::Lg wide=true>"Wide link"</Button>
                </div>
            </section>

            <section class="space-y-3">
                <h2 class="text-xl font-bold">"Cards"</h2>
                <div class="grid gap-4 md:grid-cols-2">
                    <Card shadow=Shadow::Xl bordered=true>
                        <CardBody>
                            <CardTitle>"Static card"</CardTitle>
                            <p>"Shadow and border only; no role, no tab stop."</p>
                            <CardActions justify=Justify::Start>
                                <Button size=Size::Sm>"Details"</Button>
                                <Button variant=Variant::Primary size=Size::Sm>"Buy"</Button>
                            </CardActions>
                        </CardBody>
                    </Card>
                    <Card
                        compact=true
                        interactive=true
                        aria_label="Count a press"
                        on_press=Callback::new(move |_| state.update(|value| value.press_count += 1))
                    >
                        <CardBody>
                            <CardTitle level=HeadingLevel::H3>"Interactive card"</CardTitle>
                            <p>"Click it, or focus it and press Enter or Space."</p>
                        </CardBody>
                    </Card>
                </div>
            </section>

            <section class="space-y-3">
                <h2 class="text-xl font-bold">"Toggles"</h2>
                <Checkbox
                    variant=Variant::Primary
                    selected=Signal::derive(move || state.get().accepted_terms)
                    on_change=Callback::new(move |next| state.update(|value| value.accepted_terms = next))
                >
                    "I accept the terms"
                </Checkbox>
                <Switch
                    variant=Variant::Success
                    selected=Signal::derive(move || state.get().notifications)
                    on_change=Callback::new(move |next| state.update(|value| value.notifications = next))
                >
                    "Notifications"
                </Switch>
                <RadioGroup
                    label="Plan"
                    description="Billed monthly."
                    orientation=Orientation::Horizontal
                    required=true
                    value=Signal::derive(move || state.get().plan)
                    on_change=Callback::new(move |plan| state.update(|value| value.plan = Some(plan)))
                >
                    <Radio value="solo" variant=Variant::Accent>"Solo"</Radio>
                    <Radio value="team" variant=Variant::Accent>"Team"</Radio>
                    <Radio value="enterprise" variant=Variant::Accent disabled=true>"Enterprise"</Radio>
                </RadioGroup>
            </section>

            <section class="space-y-3">
                <h2 class="text-xl font-bold">"Fields"</h2>
                <TextField
                    label="Display name"
                    description="Shown on your public profile."
                    placeholder="Ada Lovelace"
                    required=true
                    value=Signal::derive(move || state.get().display_name)
                    invalid=Signal::derive(move || state.with(|value| value.display_name.trim().is_empty()))
                    on_change=Callback::new(move |next| state.update(|value| value.display_name = next))
                />
                <TextArea
                    label="Notes"
                    rows=4
                    variant=Variant::Secondary
                    value=Signal::derive(move || state.get().notes)
                    on_change=Callback::new(move |next| state.update(|value| value.notes = next))
                />
                <Select
                    aria_label="Theme"
                    size=Size::Sm
                    selected_key=Signal::derive(move || state.get().theme)
                    on_selection_change=Callback::new(move |key| state.update(|value| value.theme = Some(key)))
                >
                    <SelectItem id="light">"Light"</SelectItem>
                    <SelectItem id="dark">"Dark"</SelectItem>
                    <SelectItem id="cupcake">"Cupcake"</SelectItem>
                </Select>
            </section>

            <section class="space-y-3">
                <h2 class="text-xl font-bold">"Overlays"</h2>
                <div class="flex flex-wrap gap-2">
                    <Button
                        variant=Variant::Neutral
                        on_press=Callback::new(move |_| state.update(|value| value.modal_open = true))
                    >
                        "Open modal"
                    </Button>
                    <DialogTrigger>
                        <Button variant=Variant::Info>"Open dialog"</Button>
                        <DialogOverlay responsive=true>
                            <Dialog width=DialogWidth::Lg aria_label="Dialog example">
                                <h3 class="text-lg font-bold">"Dialog"</h3>
                                <p>"Escape or a backdrop click closes it."</p>
                                <DialogCloseRow />
                            </Dialog>
                        </DialogOverlay>
                    </DialogTrigger>
                </div>
                <Modal
                    open=Signal::derive(move || state.get().modal_open)
                    on_open_change=Callback::new(move |open| state.update(|value| value.modal_open = open))
                    position=modal_position
                >
                    <ModalBox aria_label="Modal example">
                        <h3 class="text-lg font-bold">"Modal"</h3>
                        <p>"Controlled by the showcase state."</p>
                        <ModalAction>
                            <Button on_press=Callback::new(move |_| state.update(|value| value.modal_open = false))>
                                "Close"
                            </Button>
                        </ModalAction>
                    </ModalBox>
                </Modal>
            </section>

            <footer class="space-y-2">
                <p>{move || state.with(ShowcaseState::summary)}</p>
                <pre class="text-xs">{move || snapshot.get().unwrap_or_default()}</pre>
            </footer>
        </main>
    }
}

#[component]
fn DialogCloseRow() -> impl IntoView {
    let dialog = use_dialog();
    view! {
        <ModalAction>
            <Button
                variant=Variant::Primary
                on_press=Callback::new(move |_| {
                    if let Some(dialog) = dialog {
                        dialog.close();
                    }
                })
            >
                "Done"
            </Button>
        </ModalAction>
    }
}

/// Mounts the showcase on the document body.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| view! { <ShowcaseApp /> })
}
