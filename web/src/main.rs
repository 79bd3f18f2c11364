use dioxus::prelude::*;

use ui::Portfolio;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // `launch` installs Dioxus' tracing subscriber, so the behaviors' logs
    // land in the browser console.
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link {
            rel: "stylesheet",
            href: "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css",
        }

        Portfolio {}
    }
}
