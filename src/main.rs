use galactic_tarot::config::SceneConfig;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = galactic_tarot::run(SceneConfig::default()) {
        log::error!("{err}");
        std::process::exit(1);
    }
}
