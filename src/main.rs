use pidpi_kernel::{Settings, TelemetrySettings};

fn main() {
    // Settings only shape diagnostics; the status report runs regardless.
    let (settings, settings_error) = match Settings::load() {
        Ok(settings) => (settings, None),
        Err(err) => (Settings::default(), Some(err)),
    };

    init_telemetry(&settings.telemetry);

    if let Some(err) = settings_error {
        tracing::warn!(
            error = %format!("{err:#}"),
            "failed to load PIDPI settings, using defaults"
        );
    }

    tracing::info!(
        env = settings.environment.as_str(),
        "pidpi bootstrap starting"
    );

    let record = pidpi::initialize_project();

    tracing::info!(timestamp = %record.timestamp(), "pidpi bootstrap complete");
}

fn init_telemetry(telemetry: &TelemetrySettings) {
    let Err(err) = pidpi_telemetry::init(telemetry) else {
        return;
    };

    // No subscriber is installed yet, so this one goes straight to stderr.
    eprintln!("pidpi: failed to initialize telemetry: {err:#}; using default telemetry settings");
    if let Err(err) = pidpi_telemetry::init(&TelemetrySettings::default()) {
        eprintln!("pidpi: default telemetry unavailable: {err:#}");
    }
}
