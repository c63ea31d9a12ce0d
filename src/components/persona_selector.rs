//! Narrator persona selector.

use leptos::prelude::*;

use crate::persona::Persona;

/// Grid of persona choices; clicking one selects it.
#[component]
pub fn PersonaSelector(selected: RwSignal<Persona>, disabled: Signal<bool>) -> impl IntoView {
    view! {
        <div class="persona-selector">
            <label class="persona-selector__label">"Narrator"</label>
            <div class="persona-selector__grid">
                {Persona::ALL
                    .into_iter()
                    .map(|persona| {
                        let style = move || {
                            if selected.get() == persona {
                                format!(
                                    "border-color: {color}; background-color: {color}15;",
                                    color = persona.color()
                                )
                            } else {
                                String::new()
                            }
                        };
                        view! {
                            <button
                                type="button"
                                class="persona-selector__option"
                                class:persona-selector__option--selected=move || selected.get() == persona
                                style=style
                                disabled=move || disabled.get()
                                on:click=move |_| selected.set(persona)
                            >
                                <span class="persona-selector__emoji">{persona.emoji()}</span>
                                <span class="persona-selector__name">{persona.label()}</span>
                                <span class="persona-selector__desc">{persona.description()}</span>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
