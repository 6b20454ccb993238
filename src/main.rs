mod app;
mod audio;
mod config;
mod playlist;
mod runtime;
mod ui;

fn main() {
    if let Err(e) = runtime::run() {
        eprintln!("allegro: {e}");
        std::process::exit(1);
    }
}
