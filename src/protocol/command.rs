#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ping,
    Trigger,
    State,
    Shutdown,
    Unknown,
}

impl From<&str> for Command {
    fn from(s: &str) -> Self {
        match s {
            "ping" => Command::Ping,
            // botão e input disparam o mesmo ciclo
            "trigger" | "search_button.click" | "search_input.click" => Command::Trigger,
            "state" => Command::State,
            "shutdown" => Command::Shutdown,
            _ => Command::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_aliases_map_to_trigger() {
        assert_eq!(Command::from("trigger"), Command::Trigger);
        assert_eq!(Command::from("search_button.click"), Command::Trigger);
        assert_eq!(Command::from("search_input.click"), Command::Trigger);
        assert_eq!(Command::from("TRIGGER"), Command::Unknown);
        assert_eq!(Command::from(""), Command::Unknown);
    }
}
