//! UI Components

use leptos::prelude::*;
use crate::api::Flashcard;

/// Flip card: question on the front, answer on the back, toggled by click
#[component]
pub fn FlashcardView(card: Flashcard) -> impl IntoView {
    let (flipped, set_flipped) = signal(false);

    view! {
        <div
            class="card"
            class:flipped=move || flipped.get()
            on:click=move |_| set_flipped.update(|f| *f = !*f)
        >
            <div class="card-inner">
                <div class="card-face card-front">
                    <strong>"Q:"</strong>
                    <br />
                    {card.question}
                </div>
                <div class="card-face card-back">
                    <strong>"A:"</strong>
                    <br />
                    {card.answer}
                </div>
            </div>
        </div>
    }
}
