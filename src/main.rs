use anyhow::Result;
use carloop_knobs::{app::App, config::Config, ticker::MonotonicClock};

#[cfg(target_os = "espidf")]
fn main() -> Result<()> {
    use carloop_knobs::board::{self, Board};

    // It is necessary to call this function once. Otherwise some patches to the runtime
    // implemented by esp-idf-sys might not link properly. See https://github.com/esp-rs/esp-idf-template/issues/71
    esp_idf_svc::sys::link_patches();
    // Bind the log crate to the ESP Logging facilities
    esp_idf_svc::log::EspLogger::initialize_default();

    let config = Config::default();
    log::info!("Config: {}", config.to_json()?);

    let Board {
        knobs,
        can,
        supply: _supply,
    } = Board::new(&config)?;

    let mut app = App::new(&config, knobs, can, std::io::stdout(), MonotonicClock::new())?;
    app.run(board::pause)
}

#[cfg(not(target_os = "espidf"))]
fn main() -> Result<()> {
    use carloop_knobs::{config, simulator::{LoggingBus, SimulatedKnob}};

    env_logger::init();

    let config = Config::default();
    log::info!("Config: {}", config.to_json()?);
    log::info!("No ESP-IDF target, running simulated knobs");

    let knobs = [
        SimulatedKnob::new(0, 1),
        SimulatedKnob::new(2048, 3),
        SimulatedKnob::new(4095, 7),
    ];
    let mut app = App::new(
        &config,
        knobs,
        LoggingBus::default(),
        std::io::stdout(),
        MonotonicClock::new(),
    )?;
    app.run(|| std::thread::sleep(config::LOOP_DELAY))
}
