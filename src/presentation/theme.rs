use colored::Colorize;

pub struct Theme {
    pub title: fn(&str) -> String,
    pub line: fn(&str) -> String,
    pub idx: fn(&str) -> String,
    pub primary: fn(&str) -> String,
    pub alternative: fn(&str) -> String,
    pub quality: fn(&str) -> String,
    pub eg: fn(&str) -> String,
    pub eg_trans: fn(&str) -> String,
    pub error: fn(&str) -> String,
}

impl Theme {
    pub fn from_name(name: &str) -> Self {
        match name {
            "temp" | "" => Self::temp(),
            "wudao" => Self::wudao(),
            "canvas" => Self::canvas(),
            _ => {
                eprintln!("{}", format!("✘ Unknown theme: {}", name).red());
                Self::temp() // Fallback to default
            }
        }
    }

    fn temp() -> Self {
        Self {
            title: |s| s.bright_magenta().italic().bold().underline().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            idx: |s| s.bright_white().to_string(),
            primary: |s| s.yellow().bold().to_string(),
            alternative: |s| s.white().to_string(),
            quality: |s| s.bright_black().to_string(),
            eg: |s| s.normal().to_string(),
            eg_trans: |s| s.bright_white().dimmed().italic().to_string(),
            error: |s| s.red().to_string(),
        }
    }

    fn wudao() -> Self {
        Self {
            title: |s| s.red().italic().bold().underline().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            idx: |s| s.bright_white().to_string(),
            primary: |s| s.cyan().bold().to_string(),
            alternative: |s| s.green().to_string(),
            quality: |s| s.green().italic().to_string(),
            eg: |s| s.bright_white().to_string(),
            eg_trans: |s| s.bright_yellow().dimmed().italic().to_string(),
            error: |s| s.red().bold().to_string(),
        }
    }

    fn canvas() -> Self {
        Self {
            title: |s| s.blue().bold().underline().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            idx: |s| s.cyan().to_string(),
            primary: |s| s.magenta().bold().to_string(),
            alternative: |s| s.black().to_string(),
            quality: |s| s.bright_blue().to_string(),
            eg: |s| s.black().to_string(),
            eg_trans: |s| s.bright_black().italic().to_string(),
            error: |s| s.red().bold().to_string(),
        }
    }
}
