//! Debounced search input
//!
//! Each keystroke restarts a 500 ms quiet window; only after the window
//! elapses untouched does the committed value propagate downstream. The
//! core is a generation counter: every edit invalidates the timers armed by
//! earlier edits, so at most one fetch fires per burst of typing.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

pub const DEBOUNCE_MS: u32 = 500;

/// Pure debounce state: pending text plus the generation of the last edit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DebouncedInput {
    text: String,
    generation: u64,
}

impl DebouncedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a keystroke. Returns the generation the caller's timer must
    /// present to commit.
    pub fn edit(&mut self, text: impl Into<String>) -> u64 {
        self.text = text.into();
        self.generation += 1;
        self.generation
    }

    /// Value to commit when the timer for `generation` fires, or None when
    /// a newer keystroke already superseded it.
    pub fn commit(&self, generation: u64) -> Option<String> {
        (self.generation == generation).then(|| self.text.clone())
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Text input that emits `on_commit` only after 500 ms of inactivity
#[component]
pub fn SearchInput(
    /// Callback receiving the committed search value
    #[prop(into)]
    on_commit: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let state = RwSignal::new(DebouncedInput::new());

    let handle_input = move |value: String| {
        let mut generation = 0;
        state.update(|s| generation = s.edit(value));
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            let committed = state.with_untracked(|s| s.commit(generation));
            if let Some(text) = committed {
                on_commit.run(text);
            }
        });
    };

    view! {
        <input
            type="text"
            placeholder=placeholder
            prop:value=move || state.with(|s| s.text().to_string())
            on:input=move |ev| handle_input(event_target_value(&ev))
            style="padding: 6px 10px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; width: 220px; background: #fff;"
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rapid_keystrokes_commit_only_final_text() {
        let mut input = DebouncedInput::new();
        // "pen" then "penc" arrive 200ms apart, well inside the window
        let first = input.edit("pen");
        let second = input.edit("penc");

        // The timer armed by "pen" fires after "penc" was typed: discarded
        assert_eq!(input.commit(first), None);
        // Only the timer armed by the final keystroke commits
        assert_eq!(input.commit(second), Some("penc".to_string()));
    }

    #[test]
    fn test_single_keystroke_commits() {
        let mut input = DebouncedInput::new();
        let generation = input.edit("books");
        assert_eq!(input.commit(generation), Some("books".to_string()));
    }

    #[test]
    fn test_each_burst_commits_once() {
        let mut input = DebouncedInput::new();
        let generations: Vec<u64> = ["p", "pe", "pen", "pencil"]
            .iter()
            .map(|text| input.edit(*text))
            .collect();
        let commits: Vec<String> = generations
            .iter()
            .filter_map(|g| input.commit(*g))
            .collect();
        assert_eq!(commits, vec!["pencil".to_string()]);
    }
}
