mod app;
mod audio;
mod config;
mod library;
mod monitor;
mod picker;
mod registry;
mod runtime;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
