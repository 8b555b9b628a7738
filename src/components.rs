//! Pure Yew view components for the dashboard.
//!
//! These components hold no state of their own; everything they show comes
//! from props and every interaction is forwarded to a callback.

use crate::utils::{button_class, status_card_class};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Renders an inline error message, or nothing when `message` is empty.
pub fn render_error(message: &str) -> Html {
    if message.is_empty() {
        return html! {};
    }
    html! {
        <div class="error-message">{ message.to_string() }</div>
    }
}

/// Labelled number input forwarding the raw text on every edit.
#[derive(Properties, PartialEq)]
pub struct ConfigInputProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub onchange: Callback<String>,
}

#[function_component(ConfigInput)]
pub fn config_input(props: &ConfigInputProps) -> Html {
    let oninput = props.onchange.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.value()
    });

    html! {
        <div class="form-group">
            <label>
                { props.label.clone() }
                <input type="number" value={props.value.clone()} {oninput} />
            </label>
        </div>
    }
}

/// Read-only card showing one status value.
#[derive(Properties, PartialEq)]
pub struct StatusCardProps {
    pub label: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub highlight: bool,
}

#[function_component(StatusCard)]
pub fn status_card(props: &StatusCardProps) -> Html {
    html! {
        <div class={status_card_class(props.highlight)}>
            <div class="status-label">{ props.label.clone() }</div>
            <div class="status-value">{ props.value.clone() }</div>
        </div>
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonVariant {
    Start,
    Stop,
    Reset,
}

/// Control panel button. A disabled button never invokes `onclick`.
#[derive(Properties, PartialEq)]
pub struct ControlButtonProps {
    pub label: AttrValue,
    pub variant: ButtonVariant,
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(ControlButton)]
pub fn control_button(props: &ControlButtonProps) -> Html {
    html! {
        <button
            class={button_class(props.variant, props.disabled)}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
        >
            { props.label.clone() }
        </button>
    }
}
