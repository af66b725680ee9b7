//! Character Card Component

use leptos::prelude::*;

use crate::models::CharacterRecord;

/// One gallery card: portrait, name, debut info, affiliation
///
/// Missing portrait/debut/affiliation values render their placeholders; the
/// fallbacks live on `CharacterRecord` so they stay testable without a DOM.
#[component]
pub fn CharacterCard(character: CharacterRecord) -> impl IntoView {
    let portrait = character.portrait().to_string();
    let debut = character.debut_text().to_string();
    let affiliation = character.affiliation_text().to_string();

    view! {
        <div class="card">
            <img src=portrait class="card-image" alt="character" />
            <div class="card-content">
                <h3 class="card-title">{character.name.clone()}</h3>
                <p class="card-description">{debut}</p>
                <div class="card-footer">
                    <span class="affiliation">{affiliation}</span>
                </div>
            </div>
        </div>
    }
}
