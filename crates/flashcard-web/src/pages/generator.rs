//! Generator Page

use leptos::prelude::*;
use crate::api;
use crate::components::FlashcardView;

const DEFAULT_COUNT: u32 = 5;

#[component]
pub fn GeneratorPage() -> impl IntoView {
    let (notes, set_notes) = signal(String::new());
    let (count, set_count) = signal(DEFAULT_COUNT);
    let (cards, set_cards) = signal(Vec::<api::Flashcard>::new());
    let (status, set_status) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let generate = move |_| {
        let text = notes.get().trim().to_string();
        if text.is_empty() {
            set_status.set("Paste some notes first!".into());
            return;
        }
        if loading.get() {
            return;
        }

        set_loading.set(true);
        set_status.set("Generating flashcards...".into());

        let n = count.get();
        leptos::task::spawn_local(async move {
            match api::generate_flashcards(&text, n).await {
                Ok(generated) => {
                    set_status.set(format!("Generated {} flashcards", generated.len()));
                    set_cards.set(generated);
                }
                Err(e) => set_status.set(format!("Failed: {e}")),
            }
            set_loading.set(false);
        });
    };

    let go_premium = move |_| {
        leptos::task::spawn_local(async move {
            match api::create_checkout().await {
                Ok(url) => api::redirect(&url),
                Err(e) => set_status.set(format!("Payment creation failed: {e}")),
            }
        });
    };

    view! {
        <div class="generator">
            <header class="hero">
                <h1>"AI Flashcards"</h1>
                <p class="tagline">"Paste your notes, get flip cards"</p>
                <button class="btn btn-premium" on:click=go_premium>"Go Premium"</button>
            </header>

            <section class="input-area">
                <textarea
                    placeholder="Paste your notes here..."
                    prop:value=move || notes.get()
                    on:input=move |ev| set_notes.set(event_target_value(&ev))
                />
                <div class="field">
                    <label>"Cards"</label>
                    <input
                        type="number"
                        min="1"
                        max="20"
                        prop:value=move || count.get().to_string()
                        on:input=move |ev| {
                            set_count.set(event_target_value(&ev).parse().unwrap_or(DEFAULT_COUNT))
                        }
                    />
                </div>
                <button class="btn btn-primary" on:click=generate disabled=move || loading.get()>
                    {move || if loading.get() { "Generating..." } else { "Generate Flashcards" }}
                </button>
                <p class="status">{move || status.get()}</p>
            </section>

            <section class="cards">
                <For
                    each=move || cards.get().into_iter().enumerate()
                    key=|(i, card)| format!("{i}-{}", card.question)
                    children=move |(_, card)| view! { <FlashcardView card=card /> }
                />
            </section>
        </div>
    }
}
