//! Themed accessible primitives and the token vocabulary they share.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::classes::{BaseClass, ClassComposer, ClassTable, SizeTable};
use crate::press::{is_press_key, PressEvent};

mod controls;
mod data_display;
mod fields;
mod overlays;
mod toggles;

pub use controls::{Button, ButtonProps, ButtonStyle};
pub use data_display::{
    Card, CardActions, CardActionsProps, CardBody, CardBodyProps, CardInteraction, CardProps,
    CardStyle, CardTitle, CardTitleProps,
};
pub use fields::{
    FieldKind, FieldStyle, Select, SelectItem, SelectItemProps, SelectProps, SelectStyle,
    TextArea, TextAreaProps, TextField, TextFieldProps,
};
pub use overlays::{
    use_dialog, Dialog, DialogOverlay, DialogOverlayProps, DialogProps, DialogState, DialogStyle,
    DialogTrigger, DialogTriggerProps, Modal, ModalAction, ModalActionProps, ModalBox,
    ModalBoxProps, ModalProps, ModalStyle,
};
pub use toggles::{
    Checkbox, CheckboxProps, Radio, RadioGroup, RadioGroupProps, RadioGroupStyle, RadioProps,
    Switch, SwitchProps, ToggleKind, ToggleStyle,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {kind} `{raw}`")]
/// A token string outside the vocabulary of the enum it was parsed into.
pub struct UnknownToken {
    kind: &'static str,
    raw: String,
}

impl UnknownToken {
    fn new(kind: &'static str, raw: &str) -> Self {
        Self {
            kind,
            raw: raw.to_string(),
        }
    }

    /// Token family that rejected the input.
    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

fn parse_token<T: Copy>(
    kind: &'static str,
    raw: &str,
    all: &[T],
    token: fn(T) -> &'static str,
) -> Result<T, UnknownToken> {
    let trimmed = raw.trim();
    all.iter()
        .copied()
        .find(|candidate| token(*candidate).eq_ignore_ascii_case(trimmed))
        .ok_or_else(|| UnknownToken::new(kind, raw))
}

/// Decodes an optional token leniently: unknown text is logged and dropped.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err = UnknownToken>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|raw| match raw.parse() {
        Ok(value) => Some(value),
        Err(err) => {
            logging::warn!("ignoring style token: {err}");
            None
        }
    }))
}

/// Like [`lenient`], falling back to the token's default.
pub(crate) fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err = UnknownToken> + Default,
{
    lenient(deserializer).map(Option::unwrap_or_default)
}

macro_rules! token_traits {
    ($ty:ident, $kind:literal) => {
        impl FromStr for $ty {
            type Err = UnknownToken;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                parse_token($kind, raw, &Self::ALL, Self::token)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.token())
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Named visual style family.
///
/// Not every component styles every variant; a variant missing from a
/// component's table renders nothing extra.
pub enum Variant {
    /// Brand primary.
    Primary,
    /// Brand secondary.
    Secondary,
    /// Accent.
    Accent,
    /// Neutral.
    Neutral,
    /// Informational.
    Info,
    /// Success.
    Success,
    /// Warning.
    Warning,
    /// Error.
    Error,
    /// Transparent actionable style (buttons only).
    Ghost,
    /// Link-styled actionable style (buttons only).
    Link,
}

impl Variant {
    /// Every variant in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Primary,
        Self::Secondary,
        Self::Accent,
        Self::Neutral,
        Self::Info,
        Self::Success,
        Self::Warning,
        Self::Error,
        Self::Ghost,
        Self::Link,
    ];

    /// Symbolic token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Neutral => "neutral",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Ghost => "ghost",
            Self::Link => "link",
        }
    }
}

token_traits!(Variant, "variant");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Component sizing tokens. Medium is the base rendering.
pub enum Size {
    /// Extra small.
    Xs,
    /// Small.
    Sm,
    /// Medium.
    #[default]
    Md,
    /// Large.
    Lg,
}

impl Size {
    /// Every size in ascending order.
    pub const ALL: [Self; 4] = [Self::Xs, Self::Sm, Self::Md, Self::Lg];

    /// Symbolic token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

token_traits!(Size, "size");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Horizontal alignment of action rows.
pub enum Justify {
    /// Pack at the start.
    Start,
    /// Center.
    Center,
    /// Pack at the end.
    #[default]
    End,
}

impl Justify {
    /// Every alignment.
    pub const ALL: [Self; 3] = [Self::Start, Self::Center, Self::End];

    /// Symbolic token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }
}

token_traits!(Justify, "justify");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Card drop-shadow depth.
pub enum Shadow {
    /// Small.
    #[serde(rename = "sm")]
    Sm,
    /// Medium.
    #[serde(rename = "md")]
    Md,
    /// Large.
    #[serde(rename = "lg")]
    Lg,
    /// Extra large.
    #[serde(rename = "xl")]
    Xl,
    /// Double extra large.
    #[serde(rename = "2xl")]
    Xxl,
}

impl Shadow {
    /// Every depth in ascending order.
    pub const ALL: [Self; 5] = [Self::Sm, Self::Md, Self::Lg, Self::Xl, Self::Xxl];

    /// Symbolic token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
        }
    }
}

token_traits!(Shadow, "shadow");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Vertical placement of a modal.
pub enum ModalPosition {
    /// Top of the viewport.
    Top,
    /// Centered.
    #[default]
    Middle,
    /// Bottom sheet.
    Bottom,
}

impl ModalPosition {
    /// Every placement.
    pub const ALL: [Self; 3] = [Self::Top, Self::Middle, Self::Bottom];

    /// Symbolic token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Middle => "middle",
            Self::Bottom => "bottom",
        }
    }
}

token_traits!(ModalPosition, "modal position");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Maximum width of a dialog box.
pub enum DialogWidth {
    /// Narrow.
    Sm,
    /// Regular.
    #[default]
    Md,
    /// Wide.
    Lg,
    /// Extra wide.
    Xl,
}

impl DialogWidth {
    /// Every width in ascending order.
    pub const ALL: [Self; 4] = [Self::Sm, Self::Md, Self::Lg, Self::Xl];

    /// Symbolic token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

token_traits!(DialogWidth, "dialog width");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Layout direction of a radio group.
pub enum Orientation {
    /// Stacked.
    #[default]
    Vertical,
    /// Inline.
    Horizontal,
}

impl Orientation {
    /// Every orientation.
    pub const ALL: [Self; 2] = [Self::Vertical, Self::Horizontal];

    /// Symbolic token, also used for `aria-orientation`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        }
    }
}

token_traits!(Orientation, "orientation");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Heading element used by card titles.
pub enum HeadingLevel {
    /// `<h1>`.
    H1,
    /// `<h2>`.
    #[default]
    H2,
    /// `<h3>`.
    H3,
    /// `<h4>`.
    H4,
    /// `<h5>`.
    H5,
    /// `<h6>`.
    H6,
}

impl HeadingLevel {
    /// Every level.
    pub const ALL: [Self; 6] = [Self::H1, Self::H2, Self::H3, Self::H4, Self::H5, Self::H6];

    /// Tag name.
    pub fn token(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
        }
    }
}

token_traits!(HeadingLevel, "heading level");

const JUSTIFY_CLASSES: ClassTable<Justify> = ClassTable(&[
    (Justify::Start, "justify-start"),
    (Justify::Center, "justify-center"),
    (Justify::End, "justify-end"),
]);

pub(crate) fn justify_class(justify: Justify) -> Option<&'static str> {
    JUSTIFY_CLASSES.lookup(justify)
}

static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

/// Returns a document-unique element id with the given prefix.
pub(crate) fn next_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("aria-ui-{prefix}-{id}")
}

/// Element ids wiring a labelled control to its help and error text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FieldIds {
    pub control: String,
    pub label: String,
    pub description: String,
    pub error: String,
}

impl FieldIds {
    pub fn generate(prefix: &str) -> Self {
        let control = next_id(prefix);
        Self {
            label: format!("{control}-label"),
            description: format!("{control}-description"),
            error: format!("{control}-error"),
            control,
        }
    }

    /// `aria-describedby` value for whichever help texts are rendered.
    pub fn described_by(&self, has_description: bool, has_error: bool) -> Option<String> {
        let ids: Vec<&str> = [
            has_description.then_some(self.description.as_str()),
            has_error.then_some(self.error.as_str()),
        ]
        .into_iter()
        .flatten()
        .collect();
        (!ids.is_empty()).then(|| ids.join(" "))
    }
}

/// `Some("true")` for a set flag, omitting the attribute otherwise.
pub(crate) fn flag_attr(value: bool) -> Option<&'static str> {
    value.then_some("true")
}
