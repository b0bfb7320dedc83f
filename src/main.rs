#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use eframe::egui;
    use quote_cards::CardsApp;
    use quote_cards::config::Config;
    use quote_cards::data::read_catalog;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    let catalog = read_catalog(config.catalog_path.as_deref())?;
    let title = if catalog.title.is_empty() {
        "Quote Cards".to_string()
    } else {
        catalog.title.clone()
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([480.0, 360.0])
            .with_title(title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(CardsApp::new(catalog, &config)))),
    )?;
    Ok(())
}

// The browser build starts from `web::start` in the library.
#[cfg(target_arch = "wasm32")]
fn main() {}
