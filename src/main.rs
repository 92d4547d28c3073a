mod cache;
mod config;
mod controller;
mod library;
mod mixer;
mod playlist;
mod runtime;
mod track;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    runtime::run()
}
