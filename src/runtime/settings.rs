use crate::config::Settings;

/// Load settings, falling back to defaults when the config cannot be read or
/// fails validation. The second value explains a fallback; it is reported
/// once logging is up.
pub fn load_settings() -> (Settings, Option<String>) {
    let problem = match Settings::load() {
        Ok(s) => match s.validate() {
            Ok(()) => return (s, None),
            Err(msg) => format!("invalid config, using defaults: {msg}"),
        },
        Err(e) => format!("failed to load config, using defaults: {e}"),
    };

    // Printed before the alternate screen opens, so it is still there on exit.
    eprintln!("allegro: {problem}");
    (Settings::default(), Some(problem))
}
