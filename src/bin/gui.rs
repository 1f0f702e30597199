fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let presenter_factory = aizawa_viewer::PixelsPresenterFactory::new();
    let command =
        aizawa_viewer::RunGuiCommand::new(presenter_factory, aizawa_viewer::ViewerConfig::default());

    if let Err(e) = command.execute() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
