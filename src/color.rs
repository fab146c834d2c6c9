use std::io::IsTerminal;

use clap::ValueEnum;

/// Semantic roles painted by the text formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Header,
    Removed,
    ChangedOld,
    ChangedNew,
    Added,
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolves `Auto` using CLICOLOR_FORCE, NO_COLOR, CLICOLOR and whether stdout is a tty.
    pub fn resolve(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => auto_from_env(
                std::env::var("CLICOLOR_FORCE").ok().as_deref(),
                std::env::var_os("NO_COLOR").is_some(),
                std::env::var("CLICOLOR").ok().as_deref(),
                std::io::stdout().is_terminal(),
            ),
        }
    }
}

fn auto_from_env(
    clicolor_force: Option<&str>,
    no_color: bool,
    clicolor: Option<&str>,
    is_terminal: bool,
) -> bool {
    let force = clicolor_force.is_some_and(|v| v != "0");
    let clicolor_zero = clicolor.is_some_and(|v| v == "0");
    if force {
        true
    } else if no_color || clicolor_zero {
        false
    } else {
        is_terminal
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Palette { enabled }
    }

    pub fn plain() -> Self {
        Palette { enabled: false }
    }

    pub fn from_choice(choice: ColorChoice) -> Self {
        Palette::new(choice.resolve())
    }

    /// ANSI sequence for `role`, or "" when coloring is off.
    pub fn code(&self, role: Role) -> &'static str {
        if !self.enabled {
            return "";
        }
        match role {
            Role::Header => "\x1b[94m",     // bright blue
            Role::Removed => "\x1b[91m",    // bright red
            Role::ChangedOld => "\x1b[93m", // bright yellow
            Role::ChangedNew => "\x1b[92m", // bright green
            Role::Added => "\x1b[92m",
            Role::Reset => "\x1b[0m",
        }
    }

    pub fn paint(&self, s: &str, role: Role) -> String {
        if self.enabled {
            format!("{}{}{}", self.code(role), s, self.code(Role::Reset))
        } else {
            s.to_string()
        }
    }
}
