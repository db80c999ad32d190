use regex::{NoExpand, Regex};

// Ordem importa: cada entrada é aplicada sobre o resultado das anteriores.
pub const PT_BR_WORDS: &[(&str, &str)] = &[
    ("cat", "gato"),
    ("cats", "gatos"),
    ("kitten", "gatinho"),
    ("kittens", "gatinhos"),
    ("mother", "mãe"),
    ("father", "pai"),
    ("litter box", "caixa de areia"),
    ("whiskers", "bigodes"),
    ("tail", "cauda"),
    ("paws", "patas"),
    ("meow", "miau"),
    ("purr", "ronronar"),
    ("sleep", "dormir"),
    ("hunt", "caçar"),
    ("play", "brincar"),
    ("years", "anos"),
    ("year", "ano"),
    ("hours", "horas"),
    ("hour", "hora"),
    ("day", "dia"),
    ("days", "dias"),
    ("night", "noite"),
    ("food", "comida"),
    ("water", "água"),
    ("milk", "leite"),
    ("fish", "peixe"),
    ("mouse", "rato"),
    ("mice", "ratos"),
    ("bird", "pássaro"),
    ("birds", "pássaros"),
    ("house", "casa"),
    ("home", "lar"),
    ("owner", "dono"),
    ("human", "humano"),
    ("humans", "humanos"),
    ("love", "amor"),
    ("pet", "animal de estimação"),
    ("pets", "animais de estimação"),
];

struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

/// Dicionário fixo de substituição palavra-a-palavra.
pub struct TranslationTable {
    rules: Vec<Rule>,
}

impl TranslationTable {
    pub fn new(words: &[(&str, &'static str)]) -> Result<Self, regex::Error> {
        let mut rules = Vec::with_capacity(words.len());

        for &(source, replacement) in words {
            // Fronteira e caixa em ASCII: "é" ou "’" contam como separador.
            let pattern = Regex::new(&format!(r"(?i-u)\b{}\b", regex::escape(source)))?;
            rules.push(Rule {
                pattern,
                replacement,
            });
        }

        Ok(Self { rules })
    }

    pub fn portuguese() -> Result<Self, regex::Error> {
        Self::new(PT_BR_WORDS)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn transform(&self, fact: &str) -> String {
        let mut out = fact.to_string();

        for rule in &self.rules {
            out = rule
                .pattern
                .replace_all(&out, NoExpand(rule.replacement))
                .into_owned();
        }

        out
    }
}
