//! A hello for people who open the console.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

#[component]
pub fn ConsoleGreeting() -> impl IntoView {
    Effect::new(move || print_greeting());
    view! {}
}

fn print_greeting() {
    web_sys::console::log_2(
        &JsValue::from_str("%cHey, you found the console."),
        &JsValue::from_str("color: #c084fc; font-weight: bold; font-size: 14px;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str("%cThis page is a single WASM binary. Built with Rust + Leptos."),
        &JsValue::from_str("color: #888;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str("%cCurious how? The source and a hire-me button are one scroll apart."),
        &JsValue::from_str("color: #888;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str("%c(^_^) amara@amaraosei.dev"),
        &JsValue::from_str("color: #666; font-size: 10px;"),
    );
}
