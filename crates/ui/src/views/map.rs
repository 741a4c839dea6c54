use std::time::Duration;

use dioxus::prelude::*;

use quest_core::model::Progress;

use crate::context::AppContext;
use crate::views::QuizModal;
use crate::vm::{MapVm, QuizVm, scenery_items};

/// How long a locked node wiggles when clicked.
const SHAKE_DURATION: Duration = Duration::from_millis(240);

#[component]
pub fn MapView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_loop = ctx.quiz_loop();
    let mut progress = use_signal(|| None::<Progress>);
    let quiz = use_signal(|| None::<QuizVm>);
    let mut generation = use_signal(|| 0_u64);
    let mut shaking = use_signal(|| None::<usize>);

    // One-time load; anything unreadable falls back to a fresh map.
    let quiz_loop_for_load = quiz_loop.clone();
    use_future(move || {
        let quiz_loop = quiz_loop_for_load.clone();
        async move {
            let loaded = quiz_loop.progress_service().load_or_default().await;
            progress.set(Some(loaded));
        }
    });

    let config = quiz_loop.progress_service().config().clone();
    let layout = ctx.layout().clone();

    let vm = match progress.read().as_ref() {
        Some(state) => MapVm::build(state, &config, &layout),
        None => {
            return rsx! {
                div { class: "map-loading", "Loading…" }
            };
        }
    };
    let scenery = scenery_items(vm.tiles.len(), &layout);

    rsx! {
        header { class: "hud",
            h1 { "Quest" }
            div { class: "hud-stats",
                span { class: "hud-current", "Node {vm.current_node_number}" }
                span { class: "hud-xp", "{vm.total_xp} XP" }
            }
        }
        div { class: "map-wrap",
            div { class: "path", style: "height: {vm.total_height}px;",
                for (slot, item) in scenery.into_iter().enumerate() {
                    {
                        let class = item.kind.css_class();
                        let scale = 1.0 + (item.seed % 3) as f32 * 0.15;
                        rsx! {
                            div {
                                key: "scenery-{slot}",
                                class: "{class}",
                                style: "left: {item.x_percent}%; top: {item.y_offset}px; transform: scale({scale});",
                            }
                        }
                    }
                }
                for tile in vm.tiles.into_iter() {
                    {
                        let quiz_loop = quiz_loop.clone();
                        let index = tile.index;
                        let unlocked = tile.unlocked;
                        let class = if shaking() == Some(index) {
                            format!("{} shake", tile.css_class())
                        } else {
                            tile.css_class().to_owned()
                        };
                        rsx! {
                            div {
                                key: "node-{index}",
                                class: "{class}",
                                style: "left: {tile.x_percent}%; top: {tile.y_offset}px;",
                                title: "{tile.tooltip()}",
                                onclick: move |_| {
                                    if !unlocked {
                                        shaking.set(Some(index));
                                        spawn(async move {
                                            tokio::time::sleep(SHAKE_DURATION).await;
                                            if shaking() == Some(index) {
                                                shaking.set(None);
                                            }
                                        });
                                        return;
                                    }
                                    let quiz_loop = quiz_loop.clone();
                                    let mut quiz = quiz;
                                    spawn(async move {
                                        let Some(mut state) = progress() else {
                                            return;
                                        };
                                        match quiz_loop.open(&mut state, index).await {
                                            Ok(Some(session)) => {
                                                let xp = state.node(index).map_or(0, |n| n.xp());
                                                let required = quiz_loop
                                                    .progress_service()
                                                    .config()
                                                    .required_xp(index);
                                                progress.set(Some(state));
                                                generation += 1;
                                                quiz.set(Some(QuizVm::new(session, xp, required)));
                                            }
                                            Ok(None) | Err(_) => progress.set(Some(state)),
                                        }
                                    });
                                },
                                div { class: "num", "{tile.number}" }
                                div { class: "xp-badge", "{tile.xp_badge()}" }
                            }
                        }
                    }
                }
            }
        }
        QuizModal { quiz, progress, generation }
    }
}
