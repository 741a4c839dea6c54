use dioxus::document::eval;
use dioxus::prelude::*;

use quest_core::model::Progress;
use services::quiz::COMPLETION_CLOSE_DELAY;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{QuizOutcome, QuizVm};
use super::scripts::confetti_script;

/// Modal quiz over the currently open node.
///
/// Renders nothing while no session is open. Feedback and completion
/// transitions are scheduled here and guarded by `generation`: closing
/// the modal bumps the generation, so a sleeping transition that wakes
/// up afterwards finds itself stale and does nothing.
#[component]
pub fn QuizModal(
    quiz: Signal<Option<QuizVm>>,
    progress: Signal<Option<Progress>>,
    generation: Signal<u64>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_loop = ctx.quiz_loop();
    let mut generation = generation;
    let mut progress = progress;
    let mut error = use_signal(|| None::<&'static str>);

    let view = {
        let guard = quiz.read();
        guard.as_ref().map(|vm| {
            (
                vm.node_number(),
                vm.difficulty_label(),
                vm.xp(),
                vm.required_xp(),
                vm.progress_percent(),
                vm.prompt().to_owned(),
                vm.options().to_vec(),
                vm.feedback_message(),
                vm.accepting_input(),
            )
        })
    };
    let Some((node_number, difficulty, xp, required, percent, prompt, options, feedback, accepting)) =
        view
    else {
        return rsx! {};
    };

    let mut quiz = quiz;
    let answer = move |selected: usize| {
        let quiz_loop = quiz_loop.clone();
        spawn(async move {
            let Some(mut state) = progress() else {
                return;
            };
            // Taking the vm out makes a concurrent click a clean no-op.
            let Some(mut vm) = quiz.write().take() else {
                progress.set(Some(state));
                return;
            };
            let outcome = vm.answer(&quiz_loop, &mut state, selected).await;
            let delay = vm.pending_delay();
            progress.set(Some(state));
            quiz.set(Some(vm));

            match outcome {
                Ok(QuizOutcome::Ignored) => {}
                Ok(QuizOutcome::Feedback) => {
                    let Some(delay) = delay else { return };
                    let scheduled = generation();
                    tokio::time::sleep(delay).await;
                    if generation() == scheduled {
                        if let Some(vm) = quiz.write().as_mut() {
                            vm.advance();
                        }
                    }
                }
                Ok(QuizOutcome::Completed { .. }) => {
                    eval(&confetti_script());
                    let scheduled = generation();
                    tokio::time::sleep(delay.unwrap_or(COMPLETION_CLOSE_DELAY)).await;
                    if generation() == scheduled {
                        generation += 1;
                        quiz.set(None);
                    }
                }
                Err(ViewError::Unknown) => {
                    error.set(Some(ViewError::message()));
                }
            }
        });
    };

    rsx! {
        div { class: "quiz-backdrop",
            div { class: "quiz-modal", role: "dialog", aria_label: "Quiz",
                header { class: "quiz-header",
                    span { class: "quiz-node", "Node {node_number}" }
                    span { class: "quiz-difficulty", "{difficulty}" }
                    button {
                        class: "close-quiz",
                        onclick: move |_| {
                            generation += 1;
                            error.set(None);
                            quiz.set(None);
                        },
                        "✕"
                    }
                }
                div { class: "xp-bar",
                    div { class: "xp-fill", style: "width: {percent}%;" }
                }
                div { class: "xp-text", "{xp} / {required} XP" }
                p { class: "question-text", "{prompt}" }
                div { class: "options",
                    for (idx, option) in options.into_iter().enumerate() {
                        {
                            let answer = answer.clone();
                            rsx! {
                                button {
                                    key: "option-{idx}",
                                    class: "option-btn",
                                    disabled: !accepting,
                                    onclick: move |_| answer(idx),
                                    "{option}"
                                }
                            }
                        }
                    }
                }
                if let Some(message) = feedback {
                    p { class: "feedback", "{message}" }
                }
                if let Some(message) = error() {
                    p { class: "view-error", "{message}" }
                }
            }
        }
    }
}
