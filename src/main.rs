//! DarkMin — a minimal dark web browser shell with an animated landing page.
//!
//! Entry point: loads settings and opens the browser window.
//! When built without the `gui` feature, runs a console demo against headless surfaces.

use tracing_subscriber::EnvFilter;

use darkmin::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use darkmin::types::settings::ShellSettings;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Loads `settings.json`, then applies `key=value` overrides from the command line.
fn load_settings() -> ShellSettings {
    let mut engine = SettingsEngine::new(None);
    if let Err(e) = engine.load() {
        tracing::warn!("{}; falling back to defaults", e);
        engine.reset();
    }
    for arg in std::env::args().skip(1) {
        if let Err(e) = engine.apply_override(&arg) {
            tracing::warn!("ignoring argument '{}': {}", arg, e);
        }
    }
    engine.get_settings().clone()
}

#[cfg(feature = "gui")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let settings = load_settings();
    darkmin::ui::webview_app::run(settings)?;
    Ok(())
}

#[cfg(not(feature = "gui"))]
fn main() {
    init_logging();
    let settings = load_settings();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║              DarkMin v{} — Demo Mode                     ║", env!("CARGO_PKG_VERSION"));
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_particles(&settings);
    demo_clock();
    demo_shell(&settings);
    demo_chrome_ipc();

    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All components demonstrated successfully!");
    println!("═══════════════════════════════════════════════════════════════");
}

#[cfg(not(feature = "gui"))]
fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

#[cfg(not(feature = "gui"))]
fn pump(shell: &mut darkmin::app::BrowserShell<darkmin::surface::HeadlessFactory>, events: &darkmin::surface::EventQueue) {
    loop {
        let next = events.borrow_mut().pop_front();
        match next {
            Some(event) => shell.handle_surface_event(event),
            None => break,
        }
    }
}

#[cfg(not(feature = "gui"))]
fn demo_particles(settings: &ShellSettings) {
    use darkmin::services::particle_field::ParticleField;
    section("Particle Field");

    let landing = &settings.landing;
    let mut field = ParticleField::new(
        landing.particle_count,
        landing.viewport_width,
        landing.viewport_height,
        &mut rand::rng(),
    );
    println!("  {} particles in a {}x{} viewport", field.len(), field.width(), field.height());

    let ticks = 1000;
    let last = field.frames().take(ticks).last();
    let inside = field.particles().iter().all(|p| {
        (0.0..=field.width()).contains(&p.x) && (0.0..=field.height()).contains(&p.y)
    });
    if let Some(s) = last.as_ref().and_then(|frame| frame.sprites.first()) {
        println!("  After {} ticks, first sprite at ({:.1}, {:.1}) alpha {}", ticks, s.x, s.y, s.rgba[3]);
    }
    println!("  All particles inside viewport: {}", inside);
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_clock() {
    use darkmin::services::clock;
    section("Clock");

    let reading = clock::now();
    println!("  {}  {}", reading.time, reading.greeting);
    for hour in [9, 14, 20] {
        println!("  {:02}:00 -> {}", hour, clock::greeting_for_hour(hour));
    }
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_shell(settings: &ShellSettings) {
    use darkmin::app::BrowserShell;
    use darkmin::managers::tab_manager::TabManagerTrait;
    use darkmin::surface::HeadlessFactory;
    section("Browser Shell");

    let factory = HeadlessFactory::new();
    let events = factory.events();
    let mut shell = BrowserShell::new(factory);

    if let Err(e) = shell.start(&settings.general) {
        println!("  start failed: {}", e);
        return;
    }
    pump(&mut shell, &events);
    println!("  Home tab: {}", shell.address());

    let _ = shell.submit_address_bar("example.com");
    pump(&mut shell, &events);
    println!("  Address bar after 'example.com': {}", shell.address());

    shell.toggle_home();
    println!("  View after toggle_home: {:?}", shell.view_mode());
    let _ = shell.submit_search("rust-lang.org");
    pump(&mut shell, &events);
    println!("  Search opened tab {} of {}; view {:?}", shell.tabs().active_index().map_or(0, |i| i + 1), shell.tab_count(), shell.view_mode());

    shell.back();
    pump(&mut shell, &events);
    shell.close_tab(1);
    shell.close_tab(0);
    println!("  After closing twice: {} tab(s) left", shell.tab_count());

    for tab in shell.chrome_state().tabs {
        println!("  [{}] {}", tab.label, tab.url);
    }
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_chrome_ipc() {
    use darkmin::chrome_ipc::parse_command;
    section("Chrome IPC");

    for body in [
        r#"{"cmd":"navigate","text":"example.com"}"#,
        r#"{"cmd":"close_tab","index":2}"#,
        r#"{"cmd":"teleport"}"#,
    ] {
        match parse_command(body) {
            Ok(cmd) => println!("  {} -> {:?}", body, cmd),
            Err(e) => println!("  {} -> {}", body, e),
        }
    }
    println!();
}
