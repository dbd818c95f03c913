//! Accessible Leptos components themed with utility classes.
//!
//! Every component maps a small typed configuration (variant, size, boolean
//! modifiers, a consumer class override) to a composed class string through
//! [`classes::ClassComposer`], then renders a native accessible control with
//! the matching ARIA wiring. The symbolic class vocabulary (`btn-primary`,
//! `checkbox-lg`, `modal-bottom`, ...) is the contract with the stylesheet.
//!
//! Components with fixed sub-parts are also grouped by family under [`card`],
//! [`modal`] and [`dialog`], so `card::Body` and `CardBody` name the same thing.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod classes;
pub mod press;
mod primitives;

pub use classes::{compose, BaseClass, ClassComposer, ClassError, ClassTable, SizeTable};
pub use press::{
    is_press_key, BrowserScheduler, PressEvent, PressPulse, PressResponder, PressState,
    ResetScheduler, PRESS_RESET_DELAY,
};
pub use primitives::{
    use_dialog, Button, ButtonStyle, Card, CardActions, CardBody, CardInteraction, CardStyle,
    CardTitle, Checkbox, Dialog, DialogOverlay, DialogState, DialogStyle, DialogTrigger,
    DialogWidth, FieldKind, FieldStyle, HeadingLevel, Justify, Modal, ModalAction, ModalBox,
    ModalPosition, ModalStyle, Orientation, Radio, RadioGroup, RadioGroupStyle, Select,
    SelectItem, SelectStyle, Shadow, Size, Switch, TextArea, TextField, ToggleKind, ToggleStyle,
    UnknownToken, Variant,
};
pub use primitives::{
    ButtonProps, CardActionsProps, CardBodyProps, CardProps, CardTitleProps, CheckboxProps,
    DialogOverlayProps, DialogProps, DialogTriggerProps, ModalActionProps, ModalBoxProps,
    ModalProps, RadioGroupProps, RadioProps, SelectItemProps, SelectProps, SwitchProps,
    TextAreaProps, TextFieldProps,
};

/// Card and its fixed sub-parts.
pub mod card {
    pub use crate::primitives::{
        Card, CardActions as Actions, CardActionsProps as ActionsProps, CardBody as Body,
        CardBodyProps as BodyProps, CardProps, CardTitle as Title, CardTitleProps as TitleProps,
    };
}

/// Modal and its fixed sub-parts.
///
/// `modal::Box` shadows `std::boxed::Box` under `use aria_ui::modal::*`; import
/// the module and write `modal::Box`, or use [`ModalBox`] directly.
pub mod modal {
    pub use crate::primitives::{
        Modal, ModalAction as Action, ModalActionProps as ActionProps, ModalBox as Box,
        ModalBoxProps as BoxProps, ModalProps,
    };
}

/// Dialog and its trigger and overlay parts.
pub mod dialog {
    pub use crate::primitives::{
        use_dialog, Dialog, DialogOverlay as Overlay, DialogOverlayProps as OverlayProps,
        DialogProps, DialogState as State, DialogTrigger as Trigger,
        DialogTriggerProps as TriggerProps,
    };
}

/// Convenience imports for applications building on the component set.
pub mod prelude {
    pub use crate::{
        use_dialog, Button, Card, CardActions, CardBody, CardTitle, Checkbox, Dialog,
        DialogOverlay, DialogTrigger, DialogWidth, HeadingLevel, Justify, Modal, ModalAction,
        ModalBox, ModalPosition, Orientation, PressEvent, Radio, RadioGroup, Select, SelectItem,
        Shadow, Size, Switch, TextArea, TextField, Variant,
    };
}
