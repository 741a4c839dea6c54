use dioxus::prelude::*;

use crate::views::MapView;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Quest" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                MapView {}
            }
            // Overlay the confetti animation draws on; stays inert
            // until a node completes.
            canvas { id: "confetti-canvas", class: "confetti-canvas" }
        }
    }
}
