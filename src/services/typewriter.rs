/// Efeito de digitação do placeholder: um caractere por tick.
#[derive(Debug, Clone)]
pub struct Typewriter {
    message: Vec<char>,
    typed: usize,
}

impl Typewriter {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.chars().collect(),
            typed: 0,
        }
    }

    /// Próximo caractere a ser anexado ao placeholder.
    pub fn tick(&mut self) -> Option<char> {
        let ch = self.message.get(self.typed).copied()?;
        self.typed += 1;
        Some(ch)
    }

    pub fn is_done(&self) -> bool {
        self.typed >= self.message.len()
    }

    pub fn len(&self) -> usize {
        self.message.len()
    }

    pub fn is_empty(&self) -> bool {
        self.message.is_empty()
    }
}
