use crate::config::LEVELS;
use crate::models::{Cell, Game, GameStage, Level};
use maud::{html, Markup};

// Colors cycled through for found words
const HIGHLIGHT_COLORS: [&str; 7] = [
    "#FF5252", "#4CAF50", "#2196F3", "#FFC107", "#9C27B0", "#FF9800", "#00BCD4",
];

pub struct Render {}

impl Render {
    pub fn root() -> String {
        html! {
            (maud::DOCTYPE)
            html {
                head {
                    title { "Word Search" }
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    script
                        src="https://unpkg.com/htmx.org@1.9.9"
                        integrity="sha384-QFjmbokDn2DjBjq+fM+8LUIVrAgqcNW2s0PjAxHETgRn9l4fvX31ZxDxvwQnyMOX"
                        crossorigin="anonymous" {}
                    script src="/static/grid.js" defer {}
                    link rel="stylesheet" href="/static/style.css";
                }
                body {
                    h1 { "Word Search" }
                    div id="level-header" {}
                    div id="word-list" {}
                    div id="game-board" {}
                    div id="notification" {}
                    div id="ad-modal" {}
                }
            }
        }
        .into_string()
    }

    /// Every fragment of the page for the game's current state. Each top-level
    /// div replaces the element with the same id.
    pub fn game(game: &Game) -> String {
        let markup = match (game.stage(), game.level()) {
            (GameStage::Playing(_), Some(level)) => Self::level(level),
            _ => Self::start_screen(),
        };
        markup.into_string()
    }

    fn start_screen() -> Markup {
        html! {
            div id="level-header" {
                p { (LEVELS.len()) " levels of hidden words. Drag across the letters to find them." }
                button hx-post="/start" hx-swap="none" { "Start Game" }
            }
            div id="word-list" {}
            div id="game-board" {}
            div id="notification" {}
            div id="ad-modal" {}
        }
    }

    fn level(level: &Level) -> Markup {
        html! {
            (Self::header(level))
            (Self::word_list(level))
            (Self::board(level))
            (Self::notification(level))
            (Self::ad_modal(level))
        }
    }

    fn header(level: &Level) -> Markup {
        let config = level.config();
        let words = level.words();
        html! {
            div id="level-header" {
                h2 { "Level " (config.number) ": " (config.theme) }
                div class="progress" {
                    (words.found_count()) " / " (words.len()) " words found"
                }
                @if level.is_complete() {
                    div class="level-complete" {
                        "Level complete!"
                        @if config.number == LEVELS.len() {
                            button hx-post="/next" hx-swap="none" { "Play Again" }
                        } @else {
                            button hx-post="/next" hx-swap="none" { "Next Level" }
                        }
                    }
                } @else {
                    button class="hint-button" hx-post="/hint" hx-swap="none"
                        disabled[level.hint_active() || level.ad_remaining().is_some()] {
                        "Get Hint"
                    }
                }
                button class="reset-button" hx-post="/reset" hx-swap="none" { "Quit" }
            }
        }
    }

    fn word_list(level: &Level) -> Markup {
        html! {
            div id="word-list" {
                ul {
                    @for word in level.words().display_order() {
                        li class=[word.found.then_some("found")] { (word.text) }
                    }
                }
            }
        }
    }

    fn board(level: &Level) -> Markup {
        let grid = level.grid();
        let columns = format!("grid-template-columns: repeat({}, 1fr);", grid.size());
        html! {
            div id="game-board" style=(columns) {
                @for (row, letters) in grid.rows().iter().enumerate() {
                    @for (col, &letter) in letters.iter().enumerate() {
                        (Self::cell(level, Cell::new(row, col), letter))
                    }
                }
            }
        }
    }

    fn cell(level: &Level, cell: Cell, letter: char) -> Markup {
        let selected = level.selection().contains(cell);
        let hinted = level.hint_cells().contains(&cell);
        let color = level
            .highlight_at(cell)
            .map(|i| format!("background-color: {}55;", HIGHLIGHT_COLORS[i % HIGHLIGHT_COLORS.len()]));

        html! {
            div.board-cell.selected[selected].hint[hinted]
                style=[color]
                data-row=(cell.row)
                data-col=(cell.col) {
                (letter)
            }
        }
    }

    fn notification(level: &Level) -> Markup {
        html! {
            div id="notification" {
                @if let Some(word) = level.notification() {
                    div class="word-found" {
                        div class="word" { (word) }
                        div class="label" { "FOUND!" }
                    }
                }
            }
        }
    }

    fn ad_modal(level: &Level) -> Markup {
        html! {
            div id="ad-modal" {
                @if let Some(remaining) = level.ad_remaining() {
                    div class="ad-overlay" {
                        div class="ad" {
                            h3 { "Ad Placeholder" }
                            div class="ad-timer" { (remaining) }
                            p { "Your hint will be available in " (remaining) " seconds" }
                            button hx-post="/cancel_ad" hx-swap="none" { "Cancel" }
                        }
                    }
                }
            }
        }
    }
}
