//! In-page replacements for the browser's blocking `confirm` and `prompt`.
//!
//! Both dialogs are controlled: the owner decides whether they are shown and
//! what happens on confirm or cancel. Cancelling never has side effects here.

use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmProps {
    pub message: AttrValue,
    #[prop_or(AttrValue::Static("Excluir"))]
    pub confirm_label: AttrValue,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component]
pub fn ConfirmDialog(props: &ConfirmProps) -> Html {
    let confirm = props.on_confirm.reform(|_: MouseEvent| ());
    let cancel = props.on_cancel.reform(|_: MouseEvent| ());

    html! {
        <div class="modal-overlay">
            <div class="modal-content" role="alertdialog">
                <p>{&props.message}</p>
                <div class="modal-actions">
                    <button onclick={confirm} class="btn btn-danger flex-1">{&props.confirm_label}</button>
                    <button onclick={cancel} class="btn btn-light flex-1">{"Cancelar"}</button>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PromptProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub hint: AttrValue,
    #[prop_or_default]
    pub detail: Option<AttrValue>,
    pub value: AttrValue,
    #[prop_or(AttrValue::Static("Salvar"))]
    pub confirm_label: AttrValue,
    pub on_input: Callback<String>,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component]
pub fn PromptDialog(props: &PromptProps) -> Html {
    let oninput = props.on_input.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.value()
    });

    // Enter in the field confirms, like the native prompt.
    let onsubmit = props.on_confirm.reform(|e: SubmitEvent| {
        e.prevent_default();
    });
    let cancel = props.on_cancel.reform(|_: MouseEvent| ());

    html! {
        <div class="modal-overlay">
            <form class="modal-content" role="dialog" {onsubmit}>
                <h3>{&props.title}</h3>
                if !props.hint.is_empty() {
                    <p class="text-secondary small">{&props.hint}</p>
                }
                if let Some(detail) = &props.detail {
                    <p class="point-coords">{detail}</p>
                }
                <input class="input-field" autofocus=true value={props.value.clone()} {oninput} />
                <div class="modal-actions">
                    <button type="submit" class="btn btn-primary flex-1">{&props.confirm_label}</button>
                    <button type="button" onclick={cancel} class="btn btn-light flex-1">{"Cancelar"}</button>
                </div>
            </form>
        </div>
    }
}
