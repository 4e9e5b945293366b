use crate::config::Settings;

/// State handed to every command invocation alongside the buffer.
///
/// Collaborators that commands need (settings today) travel through here
/// instead of living in process-wide globals, so commands can be exercised
/// in isolation.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    pub settings: Settings,
}

impl Environment {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}
