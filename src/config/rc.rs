use log::debug;

/// Editor settings that affect how keys are interpreted and how a renderer
/// should present the buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub tab_stop: usize,
    pub expand_tab: bool,
    pub show_line_numbers: bool,
    pub show_whitespace: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tab_stop: 4,
            expand_tab: true,
            show_line_numbers: false,
            show_whitespace: false,
        }
    }
}

impl Settings {
    /// One-line summary, as shown by `:set` with no arguments.
    pub fn summary(&self) -> String {
        format!(
            "tabstop={} {}expandtab {}number {}list",
            self.tab_stop,
            if self.expand_tab { "" } else { "no" },
            if self.show_line_numbers { "" } else { "no" },
            if self.show_whitespace { "" } else { "no" },
        )
    }
}

/// Parser for rc-style settings text (`set tabstop=4`, `expand_tab=true`).
/// Reading the file is left to the caller.
pub struct RcLoader;

impl RcLoader {
    /// Parse settings text on top of the defaults
    pub fn parse(content: &str) -> Settings {
        let mut settings = Settings::default();
        Self::parse_into(content, &mut settings);
        settings
    }

    pub fn parse_into(content: &str, settings: &mut Settings) {
        for line in content.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') || line.starts_with('"') {
                continue;
            }

            Self::apply_line(line, settings);
        }
    }

    /// Apply a single line. Returns false when nothing was recognised.
    pub fn apply_line(line: &str, settings: &mut Settings) -> bool {
        // Remove inline comments
        let line = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        }
        .trim();

        let applied = match line.strip_prefix("set ") {
            Some(setting) => Self::apply_setting(setting.trim(), settings),
            None => match line.split_once('=') {
                Some((key, value)) => Self::apply_key_value(key.trim(), value.trim(), settings),
                None => false,
            },
        };

        if !applied {
            debug!("ignored settings line: {line:?}");
        }
        applied
    }

    /// Apply a vim-style `set` argument such as `nu`, `noexpandtab`, `ts=8`.
    pub fn apply_setting(setting: &str, settings: &mut Settings) -> bool {
        if let Some((key, value)) = setting.split_once('=') {
            return Self::apply_key_value(key.trim(), value.trim(), settings);
        }

        match setting {
            "nu" | "number" => settings.show_line_numbers = true,
            "nonu" | "nonumber" => settings.show_line_numbers = false,
            "et" | "expandtab" => settings.expand_tab = true,
            "noet" | "noexpandtab" => settings.expand_tab = false,
            "list" => settings.show_whitespace = true,
            "nolist" => settings.show_whitespace = false,
            _ => return false,
        }
        true
    }

    fn apply_key_value(key: &str, value: &str, settings: &mut Settings) -> bool {
        match key {
            "ts" | "tabstop" | "tab_stop" => match value.parse::<usize>() {
                Ok(tab_stop) if (1..=16).contains(&tab_stop) => {
                    settings.tab_stop = tab_stop;
                    true
                }
                _ => false,
            },
            "et" | "expandtab" | "expand_tab" => Self::apply_flag(value, &mut settings.expand_tab),
            "linenumbers" | "line_numbers" | "number" => {
                Self::apply_flag(value, &mut settings.show_line_numbers)
            }
            "whitespace" | "show_whitespace" | "list" => {
                Self::apply_flag(value, &mut settings.show_whitespace)
            }
            _ => false,
        }
    }

    fn apply_flag(value: &str, flag: &mut bool) -> bool {
        match value {
            "true" | "1" | "yes" => *flag = true,
            "false" | "0" | "no" => *flag = false,
            _ => return false,
        }
        true
    }
}
