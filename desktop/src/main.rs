use dioxus::desktop::Config;
use dioxus::desktop::WindowBuilder;
use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");

    let window = WindowBuilder::new().with_title("Trending Dashboard");
    LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(Dashboard);
}

#[component]
fn Dashboard() -> Element {
    ui::App()
}
